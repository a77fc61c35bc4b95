//! Embedding generation requests and responses.
//!
//! Inputs are either one string or an ordered batch; the response carries one
//! vector per input, either float-encoded or base64-encoded depending on the
//! requested format.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::Client;
use crate::error::{ApiError, Result};

/// Input to embed: a single string or an ordered batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingInput {
    Single(String),
    Batch(Vec<String>),
}

impl From<&str> for EmbeddingInput {
    fn from(text: &str) -> Self {
        EmbeddingInput::Single(text.to_string())
    }
}

impl From<String> for EmbeddingInput {
    fn from(text: String) -> Self {
        EmbeddingInput::Single(text)
    }
}

impl From<Vec<String>> for EmbeddingInput {
    fn from(texts: Vec<String>) -> Self {
        EmbeddingInput::Batch(texts)
    }
}

/// Wire encoding of returned embeddings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingFormat {
    Float,
    Base64,
}

/// Request body for embedding generation.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingRequest {
    pub input: EmbeddingInput,
    pub model: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding_format: Option<EncodingFormat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl EmbeddingRequest {
    /// Create a new embedding request.
    pub fn new(model: impl Into<String>, input: impl Into<EmbeddingInput>) -> Self {
        Self {
            input: input.into(),
            model: model.into(),
            encoding_format: None,
            dimensions: None,
            user: None,
        }
    }

    /// Set the wire encoding of the returned embeddings.
    pub fn with_encoding_format(mut self, format: EncodingFormat) -> Self {
        self.encoding_format = Some(format);
        self
    }

    /// Set the output dimensions.
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Set the end-user identifier.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

/// Embedding payload: a numeric vector or an opaque base64 string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingData {
    Float(Vec<f32>),
    Base64(String),
}

impl EmbeddingData {
    /// The numeric vector, if float-encoded.
    pub fn as_float(&self) -> Option<&[f32]> {
        match self {
            EmbeddingData::Float(vector) => Some(vector),
            EmbeddingData::Base64(_) => None,
        }
    }
}

/// One embedding in the response, paired with its input index.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingItem {
    pub object: String,
    pub embedding: EmbeddingData,
    pub index: usize,
}

/// Response from embedding generation.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingResponse {
    pub object: String,
    pub data: Vec<EmbeddingItem>,
    pub model: String,
    #[serde(default)]
    pub usage: crate::chat::Usage,
}

impl EmbeddingResponse {
    /// Extract the float vectors in input order.
    ///
    /// Fails with `InvalidResponse` if any embedding is base64-encoded.
    pub fn vectors(&self) -> Result<Vec<Vec<f32>>> {
        self.data
            .iter()
            .map(|item| {
                item.embedding.as_float().map(<[f32]>::to_vec).ok_or_else(|| {
                    ApiError::InvalidResponse(format!(
                        "embedding {} is not float-encoded",
                        item.index
                    ))
                })
            })
            .collect()
    }
}

impl Client {
    /// Request embeddings for the given input.
    pub async fn create_embedding(&self, request: &EmbeddingRequest) -> Result<EmbeddingResponse> {
        debug!("generating embeddings with model: {}", request.model);
        self.post_json("/embeddings", request).await
    }
}
