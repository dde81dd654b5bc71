use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Error, Result};

/// Mutable undirected multigraph with parallel edges collapsed into `u64`
/// weights.
///
/// Every edge is stored in both endpoint adjacency maps with equal weight,
/// and every mutating operation maintains that symmetry: an update that
/// touches only one direction is a bug, not a reachable state. Vertex
/// identities are whatever `Copy + Eq + Hash` labels the caller uses.
#[derive(Debug, Clone)]
pub struct WeightedMultigraph<V>
where
    V: Copy + Eq + Hash + Debug,
{
    vertices: HashMap<V, HashMap<V, u64>>,
}

impl<V> Default for WeightedMultigraph<V>
where
    V: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> WeightedMultigraph<V>
where
    V: Copy + Eq + Hash + Debug,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
        }
    }

    /// Builds a graph from an adjacency description: each entry lists a
    /// vertex and its neighbor labels, weight 1 per edge. A symmetric source
    /// lists every edge from both endpoints; the second listing is a no-op.
    pub fn from_adjacency(adjacency: &[(V, Vec<V>)]) -> Self {
        let mut graph = Self::new();
        for (vertex, neighbors) in adjacency {
            graph.add_vertex(*vertex);
            for neighbor in neighbors {
                graph.add_edge(*vertex, *neighbor);
            }
        }
        graph
    }

    /// Inserts `id` with no neighbors if absent. Idempotent.
    pub fn add_vertex(&mut self, id: V) {
        self.vertices.entry(id).or_default();
    }

    /// Sets the (u, v) weight to 1 in both directions, creating missing
    /// endpoints. Idempotent.
    pub fn add_edge(&mut self, u: V, v: V) {
        self.vertices.entry(u).or_default().insert(v, 1);
        self.vertices.entry(v).or_default().insert(u, 1);
    }

    /// Adds `delta` to the (u, v) weight in both directions, creating the
    /// edge (and missing endpoints) with weight `delta` when absent. A
    /// `u == v` call writes the single self-loop slot exactly once.
    pub fn increase_edge(&mut self, u: V, v: V, delta: u64) {
        *self.vertices.entry(u).or_default().entry(v).or_insert(0) += delta;
        if u != v {
            *self.vertices.entry(v).or_default().entry(u).or_insert(0) += delta;
        }
    }

    /// True iff `u` is live and lists `v` as a neighbor.
    pub fn has_edge(&self, u: V, v: V) -> bool {
        self.vertices
            .get(&u)
            .map_or(false, |neighbors| neighbors.contains_key(&v))
    }

    /// Returns the (u, v) weight, or `None` when the edge is absent.
    /// Weights are never zero; such edges are removed instead.
    pub fn edge_weight(&self, u: V, v: V) -> Option<u64> {
        self.vertices
            .get(&u)
            .and_then(|neighbors| neighbors.get(&v))
            .copied()
    }

    /// Removes the (u, v) edge in both directions. Tolerates absent
    /// endpoints and absent edges.
    pub fn remove_edge(&mut self, u: V, v: V) {
        if let Some(neighbors) = self.vertices.get_mut(&u) {
            neighbors.remove(&v);
        }
        if let Some(neighbors) = self.vertices.get_mut(&v) {
            neighbors.remove(&u);
        }
    }

    /// Detaches `id` from every neighbor, then drops its record, leaving no
    /// dangling references anywhere in the graph. No-op if absent.
    pub fn remove_vertex(&mut self, id: V) {
        let neighbor_ids: Vec<V> = match self.vertices.get(&id) {
            Some(neighbors) => neighbors.keys().copied().collect(),
            None => return,
        };
        for neighbor in neighbor_ids {
            self.remove_edge(neighbor, id);
        }
        self.vertices.remove(&id);
    }

    /// Current live vertex identities, in no particular order.
    pub fn vertex_ids(&self) -> Vec<V> {
        self.vertices.keys().copied().collect()
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Snapshot of `v`'s neighbor ids, safe to hold across mutations.
    pub fn neighbor_ids(&self, v: V) -> Vec<V> {
        self.vertices
            .get(&v)
            .map(|neighbors| neighbors.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Sum of all edge weights incident to `v`. With exactly two vertices
    /// left this reads off the number of edges crossing between them.
    pub fn total_weight(&self, v: V) -> u64 {
        self.vertices
            .get(&v)
            .map(|neighbors| neighbors.values().sum())
            .unwrap_or(0)
    }

    /// Checks that every directed entry is mirrored with equal weight.
    pub fn verify_symmetry(&self) -> Result<()> {
        for (&u, neighbors) in &self.vertices {
            for (&v, &weight) in neighbors {
                if self.edge_weight(v, u) != Some(weight) {
                    return Err(Error::AsymmetricAdjacency(
                        format!("{:?}", u),
                        format!("{:?}", v),
                    ));
                }
            }
        }
        Ok(())
    }
}
