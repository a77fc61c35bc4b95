//! # quill-api
//!
//! Typed client for OpenAI-compatible LLM APIs.
//!
//! ## Features
//!
//! - **Chat completion**: role-tagged messages, tool declarations, ranked choices
//! - **Embeddings**: single or batched input, float or base64 encodings
//! - **Moderation**: per-input category flags and scores
//! - **Images**: generation plus download helpers
//! - **Audio**: speech synthesis and transcription
//!
//! Every [`Client`] owns its API key and header set; nothing is shared across
//! instances. Failures from the API surface as [`ApiError::Api`] carrying the
//! HTTP status and the machine-readable error kind.

pub mod audio;
pub mod chat;
pub mod client;
pub mod embedding;
pub mod error;
pub mod image;
pub mod moderation;

pub use audio::{SpeechRequest, TranscriptionRequest, TranscriptionResponse, Voice};
pub use chat::{ChatRequest, ChatResponse, Message, MessageContent, Role, Tool, Usage};
pub use client::{Client, DEFAULT_BASE_URL};
pub use embedding::{
    EmbeddingData, EmbeddingInput, EmbeddingRequest, EmbeddingResponse, EncodingFormat,
};
pub use error::{ApiError, Result};
pub use image::{ImageRequest, ImageResponse, ImageStyle};
pub use moderation::{ModerationRequest, ModerationResponse};
