use thiserror::Error;

/// Errors produced by the contraction min cut estimator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The caller provided unusable input (too few vertices, a zero trial
    /// count, malformed adjacency text).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The occurrence list ran dry while more than two vertices remained.
    /// The sampler's append/purge contract guarantees this cannot happen
    /// for an input with at most two connected components.
    #[error("edge occurrence list exhausted with more than two vertices remaining")]
    OccurrencesExhausted,

    /// A directed adjacency entry has no mirror of equal weight. The graph
    /// must stay symmetric after every mutation.
    #[error("asymmetric adjacency between {0} and {1}")]
    AsymmetricAdjacency(String, String),
}

pub type Result<T> = std::result::Result<T, Error>;
