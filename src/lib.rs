pub mod adjacency;
pub mod contraction;
pub mod error;
pub mod graph;
pub mod runner;
pub mod sampler;

pub use adjacency::{load_adjacency, parse_adjacency, AdjacencyList};
pub use contraction::{ContractionEngine, ContractionState};
pub use error::{Error, Result};
pub use graph::WeightedMultigraph;
pub use runner::TrialRunner;
pub use sampler::EdgeSampler;
