use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;

use crate::contraction::ContractionEngine;
use crate::error::{Error, Result};
use crate::graph::WeightedMultigraph;

/// Amplification loop for the randomized contraction algorithm.
///
/// A single contraction trial finds the minimum cut only with probability
/// `>= 2 / (n(n-1))`, so the estimate is amplified over many independent
/// trials, each contracting a fresh copy of the input, keeping the smallest
/// crossing edge count seen. The default is 1000 trials; `n^2 * ln n`
/// trials push the failure probability below `1/n`.
///
/// Trials are embarrassingly parallel and run on the rayon thread pool.
/// With an explicit seed every trial derives its own RNG stream from
/// (seed, trial index), so results are reproducible regardless of thread
/// scheduling.
///
/// Example:
/// ```rust
/// use mincut::TrialRunner;
///
/// // A 4-cycle: the minimum cut severs two opposite edges.
/// let square = vec![
///     (0, vec![1, 3]),
///     (1, vec![0, 2]),
///     (2, vec![1, 3]),
///     (3, vec![2, 0]),
/// ];
/// let cut = TrialRunner::new().trials(200).seed(7).run(&square).unwrap();
/// assert_eq!(cut, 2);
/// ```
pub struct TrialRunner {
    trials: usize,
    seed: Option<u64>,
}

impl Default for TrialRunner {
    fn default() -> Self {
        Self {
            trials: 1000,
            seed: None,
        }
    }
}

impl TrialRunner {
    /// Creates a runner with the default trial count (1000) and OS-seeded
    /// randomness.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of independent contraction trials.
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets an explicit seed for reproducible runs.
    /// If not called, each trial seeds from the OS RNG.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Runs the configured trial count over `adjacency` and returns the
    /// smallest cut found.
    ///
    /// # Arguments
    /// * `adjacency` - vertex labels with their neighbor labels, listing
    ///   each edge from both endpoints; every edge has weight 1.
    ///
    /// # Returns
    /// * `Ok(cut)` - the minimum crossing edge count seen across all trials.
    ///   0 is a legitimate result for a disconnected input.
    /// * `Err(Error)` - fewer than 2 vertices, a zero trial count, or a
    ///   broken sampling invariant (also reached by inputs with three or
    ///   more connected components).
    pub fn run<V>(&self, adjacency: &[(V, Vec<V>)]) -> Result<u64>
    where
        V: Copy + Eq + Hash + Debug + Sync,
    {
        let n = adjacency.len();
        if n < 2 {
            return Err(Error::InvalidInput(format!(
                "contraction needs at least 2 vertices, got {}",
                n
            )));
        }
        if self.trials == 0 {
            return Err(Error::InvalidInput(
                "trial count must be at least 1".to_string(),
            ));
        }
        for (vertex, neighbors) in adjacency {
            if neighbors.is_empty() {
                warn!(
                    "vertex {:?} has no incident edges; the graph is disconnected and the minimum cut is 0",
                    vertex
                );
            }
        }

        // n(n-1)/2 caps any cut of a simple n-vertex graph, so the first
        // trial always improves on it.
        let max_cut = (n as u64) * (n as u64 - 1) / 2;
        let best = AtomicU64::new(max_cut);
        (0..self.trials)
            .into_par_iter()
            .try_for_each(|trial| -> Result<()> {
                let mut rng = match self.seed {
                    Some(seed) => ChaCha20Rng::seed_from_u64(seed.wrapping_add(trial as u64)),
                    None => ChaCha20Rng::from_entropy(),
                };
                let graph = WeightedMultigraph::from_adjacency(adjacency);
                let mut engine = ContractionEngine::new(graph);
                let cut = engine.run(&mut rng)?;
                let previous = best.fetch_min(cut, Ordering::Relaxed);
                debug!(
                    "trial {}: cut {} (best so far {})",
                    trial,
                    cut,
                    previous.min(cut)
                );
                Ok(())
            })?;
        Ok(best.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_cycle() -> Vec<(u32, Vec<u32>)> {
        vec![
            (1, vec![2, 4]),
            (2, vec![1, 3]),
            (3, vec![2, 4]),
            (4, vec![3, 1]),
        ]
    }

    fn complete_four() -> Vec<(u32, Vec<u32>)> {
        vec![
            (1, vec![2, 3, 4]),
            (2, vec![1, 3, 4]),
            (3, vec![1, 2, 4]),
            (4, vec![1, 2, 3]),
        ]
    }

    /// Two triangles joined by a single bridging edge between 3 and 4.
    fn bridged_triangles() -> Vec<(u32, Vec<u32>)> {
        vec![
            (1, vec![2, 3]),
            (2, vec![1, 3]),
            (3, vec![1, 2, 4]),
            (4, vec![3, 5, 6]),
            (5, vec![4, 6]),
            (6, vec![4, 5]),
        ]
    }

    #[test]
    fn test_four_cycle_min_cut_is_two() {
        let cut = TrialRunner::new()
            .trials(200)
            .seed(42)
            .run(&four_cycle())
            .unwrap();
        assert_eq!(cut, 2);
    }

    #[test]
    fn test_complete_four_min_cut_is_three() {
        let cut = TrialRunner::new()
            .trials(300)
            .seed(42)
            .run(&complete_four())
            .unwrap();
        assert_eq!(cut, 3);
    }

    #[test]
    fn test_bridged_triangles_min_cut_is_one() {
        let cut = TrialRunner::new()
            .trials(500)
            .seed(7)
            .run(&bridged_triangles())
            .unwrap();
        assert_eq!(cut, 1);
    }

    #[test]
    fn test_disjoint_triangles_min_cut_is_zero() {
        // Two components: every trial contracts each down to one vertex and
        // finds no crossing edges.
        let adjacency = vec![
            (1, vec![2, 3]),
            (2, vec![1, 3]),
            (3, vec![1, 2]),
            (4, vec![5, 6]),
            (5, vec![4, 6]),
            (6, vec![4, 5]),
        ];
        let cut = TrialRunner::new()
            .trials(10)
            .seed(1)
            .run(&adjacency)
            .unwrap();
        assert_eq!(cut, 0);
    }

    #[test]
    fn test_min_reduction_matches_single_trial_runs() {
        // One seeded k-trial run equals the min over k single-trial runs on
        // the same derived seeds: the reduction is order-independent.
        let adjacency = complete_four();
        let seed = 99u64;
        let combined = TrialRunner::new()
            .trials(8)
            .seed(seed)
            .run(&adjacency)
            .unwrap();
        let split = (0..8u64)
            .map(|i| {
                TrialRunner::new()
                    .trials(1)
                    .seed(seed + i)
                    .run(&adjacency)
                    .unwrap()
            })
            .min()
            .unwrap();
        assert_eq!(combined, split);
    }

    #[test]
    fn test_fewer_than_two_vertices_is_invalid() {
        let adjacency: Vec<(u32, Vec<u32>)> = vec![(1, vec![])];
        assert!(matches!(
            TrialRunner::new().trials(5).run(&adjacency),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_trials_is_invalid() {
        assert!(matches!(
            TrialRunner::new().trials(0).run(&four_cycle()),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unseeded_run_finds_small_cut() {
        let cut = TrialRunner::new().trials(200).run(&four_cycle()).unwrap();
        assert_eq!(cut, 2);
    }
}
