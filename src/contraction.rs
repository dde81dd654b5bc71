use std::fmt::Debug;
use std::hash::Hash;

use rand::Rng;

use crate::error::Result;
use crate::graph::WeightedMultigraph;
use crate::sampler::EdgeSampler;

/// Whether a contraction still has vertices left to merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractionState {
    /// Three or more vertices remain.
    Running,
    /// Exactly two super-vertices remain; the candidate cut can be read off.
    Done,
}

/// Drives one contraction trial: repeatedly merges the endpoints of a
/// randomly drawn edge until two super-vertices remain, then reads off the
/// number of edges crossing between them.
///
/// Owns a trial-local graph and sampler; both are discarded with the engine
/// when the trial ends.
///
/// Precondition: the graph has at least 2 vertices and at most two connected
/// components. Callers build it fresh from a valid adjacency description.
#[derive(Debug)]
pub struct ContractionEngine<V>
where
    V: Copy + Eq + Hash + Debug,
{
    graph: WeightedMultigraph<V>,
    sampler: EdgeSampler<V>,
}

impl<V> ContractionEngine<V>
where
    V: Copy + Eq + Hash + Debug,
{
    /// Wraps a freshly built graph, enumerating its occurrence list.
    pub fn new(graph: WeightedMultigraph<V>) -> Self {
        let sampler = EdgeSampler::build(&graph);
        Self { graph, sampler }
    }

    /// Current state, decided purely by the live vertex count.
    pub fn state(&self) -> ContractionState {
        if self.graph.vertex_count() > 2 {
            ContractionState::Running
        } else {
            ContractionState::Done
        }
    }

    /// Contracts one randomly drawn edge.
    ///
    /// The first-drawn endpoint survives: the other endpoint's edges are
    /// folded into it with their weights, the folded vertex is removed from
    /// the graph and the occurrence list, and the transient self-loop left
    /// by rewiring the contracted edge itself is dropped. Self-loop weight
    /// never reaches any cut count.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Result<ContractionState> {
        let (keep, fold) = self.sampler.draw(&self.graph, rng)?;
        // Snapshot the neighbor list; the adjacency map mutates as we rewire.
        for neighbor in self.graph.neighbor_ids(fold) {
            let weight = match self.graph.edge_weight(fold, neighbor) {
                Some(w) => w,
                None => continue,
            };
            self.graph.increase_edge(keep, neighbor, weight);
            if neighbor != keep {
                self.sampler.append(keep, neighbor, weight);
            }
        }
        self.graph.remove_vertex(fold);
        self.sampler.purge(fold);
        self.graph.remove_edge(keep, keep);
        Ok(self.state())
    }

    /// Steps until two vertices remain and returns the candidate cut: the
    /// total weight incident to either survivor (equal for both by
    /// symmetry).
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> Result<u64> {
        while self.state() == ContractionState::Running {
            self.step(rng)?;
        }
        let cut = self
            .graph
            .vertex_ids()
            .first()
            .map(|&v| self.graph.total_weight(v))
            .unwrap_or(0);
        Ok(cut)
    }

    /// Read access to the trial-local graph, mainly for inspecting the end
    /// state.
    pub fn graph(&self) -> &WeightedMultigraph<V> {
        &self.graph
    }
}
