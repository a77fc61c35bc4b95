//! # quill-retrieval
//!
//! Semantic retrieval pipeline for grounding LLM answers in a document.
//!
//! ## Data flow
//!
//! ```text
//! raw text ──► Chunker ──► chunks ──► EmbeddingBackend ──► vectors
//!                                                            │
//!                                                            ▼
//! summary ◄── CompletionBackend ◄── chunk selection ◄── rank (cosine)
//! ```
//!
//! The pipeline is synchronous in shape: one pass, no retry, no caching.
//! Network collaborators sit behind [`EmbeddingBackend`] and
//! [`CompletionBackend`] so they can be faked in tests.

pub mod backend;
pub mod chunker;
pub mod engine;
pub mod error;
pub mod ranker;
pub mod vector;

pub use backend::{ApiBackend, CompletionBackend, EmbeddingBackend};
pub use chunker::{Chunker, DEFAULT_CHUNK_SIZE};
pub use engine::RetrievalEngine;
pub use error::{Result, RetrievalError};
pub use ranker::rank;

/// A dense vector embedding.
pub type Embedding = Vec<f32>;
