//! Error types for the retrieval pipeline.

use thiserror::Error;

/// Result type alias for retrieval operations.
pub type Result<T> = std::result::Result<T, RetrievalError>;

/// Errors that can occur in the retrieval pipeline.
#[derive(Error, Debug)]
pub enum RetrievalError {
    /// Ranking received an empty query set, candidate set, or vector.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// Summarization was invoked with zero candidate chunks.
    #[error("no relevant chunks provided")]
    NoRelevantChunks,

    /// A zero-norm vector cannot be normalized.
    #[error("cannot normalize zero-norm vector")]
    ZeroNorm,

    /// Vector dimensions do not agree.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The embedding backend returned a different number of vectors
    /// than it was given inputs.
    #[error("embedding count mismatch: {expected} input(s), {actual} vector(s)")]
    EmbeddingCountMismatch { expected: usize, actual: usize },

    /// Failure from the embedding or chat-completion collaborator.
    #[error("api error: {0}")]
    Api(#[from] quill_api::ApiError),
}
