use std::fmt::Debug;
use std::hash::Hash;

use rand::Rng;

use crate::error::{Error, Result};
use crate::graph::WeightedMultigraph;

/// Flat list of directed edge occurrences backing weight-proportional
/// uniform edge selection.
///
/// The graph stays authoritative: entries naming an edge that no longer
/// exists are discarded lazily when a draw lands on them. A weight-w edge
/// holds `2w` entries (one per direction per unit of weight), so a uniform
/// draw selects any live edge with probability proportional to its current
/// weight.
#[derive(Debug, Clone)]
pub struct EdgeSampler<V> {
    occurrences: Vec<(V, V)>,
}

impl<V> EdgeSampler<V>
where
    V: Copy + Eq + Hash + Debug,
{
    /// Enumerates the occurrence list for the graph's current edges.
    pub fn build(graph: &WeightedMultigraph<V>) -> Self {
        let mut occurrences = Vec::new();
        for u in graph.vertex_ids() {
            for v in graph.neighbor_ids(u) {
                let weight = graph.edge_weight(u, v).unwrap_or(0);
                for _ in 0..weight {
                    occurrences.push((u, v));
                }
            }
        }
        Self { occurrences }
    }

    /// Draws a uniformly random occurrence that still names a live edge.
    ///
    /// Stale entries are swap-removed as they are hit and the draw retries.
    /// An exhausted list means no live edge remains; while the caller is
    /// still contracting that is a broken append/purge contract, reported
    /// as [`Error::OccurrencesExhausted`].
    pub fn draw<R: Rng>(
        &mut self,
        graph: &WeightedMultigraph<V>,
        rng: &mut R,
    ) -> Result<(V, V)> {
        loop {
            if self.occurrences.is_empty() {
                return Err(Error::OccurrencesExhausted);
            }
            let index = rng.gen_range(0..self.occurrences.len());
            let (u, v) = self.occurrences[index];
            if graph.has_edge(u, v) {
                return Ok((u, v));
            }
            self.occurrences.swap_remove(index);
        }
    }

    /// Records a merge that added `multiplicity` units of weight to (u, v):
    /// that many new entries per direction keep the draw distribution
    /// proportional to current weights.
    pub fn append(&mut self, u: V, v: V, multiplicity: u64) {
        for _ in 0..multiplicity {
            self.occurrences.push((u, v));
            self.occurrences.push((v, u));
        }
    }

    /// Drops every occurrence mentioning `vertex`. Called after the vertex
    /// is contracted away.
    pub fn purge(&mut self, vertex: V) {
        self.occurrences
            .retain(|&(u, v)| u != vertex && v != vertex);
    }

    /// Number of entries currently held, stale ones included.
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn triangle() -> WeightedMultigraph<u32> {
        let mut graph = WeightedMultigraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 1);
        graph
    }

    #[test]
    fn test_build_two_entries_per_unit_weight() {
        let graph = triangle();
        let sampler = EdgeSampler::build(&graph);
        assert_eq!(sampler.len(), 6);

        let mut weighted = WeightedMultigraph::new();
        weighted.increase_edge(1, 2, 3);
        let sampler = EdgeSampler::build(&weighted);
        assert_eq!(sampler.len(), 6);
    }

    #[test]
    fn test_draw_returns_live_edge() {
        let graph = triangle();
        let mut sampler = EdgeSampler::build(&graph);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let (u, v) = sampler.draw(&graph, &mut rng).unwrap();
            assert!(graph.has_edge(u, v));
        }
    }

    #[test]
    fn test_draw_discards_stale_entries() {
        let mut graph = triangle();
        let mut sampler = EdgeSampler::build(&graph);
        graph.remove_edge(1, 2);
        graph.remove_edge(2, 3);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let (u, v) = sampler.draw(&graph, &mut rng).unwrap();
            assert!(u == 1 && v == 3 || u == 3 && v == 1);
        }
        // Every stale entry the draws landed on is gone for good.
        assert!(sampler.len() <= 6);
    }

    #[test]
    fn test_draw_exhausted_is_fatal() {
        let mut graph = triangle();
        let mut sampler = EdgeSampler::build(&graph);
        graph.remove_edge(1, 2);
        graph.remove_edge(2, 3);
        graph.remove_edge(3, 1);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            sampler.draw(&graph, &mut rng),
            Err(Error::OccurrencesExhausted)
        );
        assert!(sampler.is_empty());
    }

    #[test]
    fn test_append_adds_multiplicity_entries_per_direction() {
        let graph = triangle();
        let mut sampler = EdgeSampler::build(&graph);
        sampler.append(1, 3, 4);
        assert_eq!(sampler.len(), 6 + 8);
    }

    #[test]
    fn test_purge_removes_all_mentions() {
        let graph = triangle();
        let mut sampler = EdgeSampler::build(&graph);
        sampler.purge(2);
        assert_eq!(sampler.len(), 2);
        let mut rng = StdRng::seed_from_u64(3);
        let (u, v) = sampler.draw(&graph, &mut rng).unwrap();
        assert!(u != 2 && v != 2);
    }
}
