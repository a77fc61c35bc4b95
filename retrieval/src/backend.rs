//! Collaborator seams for embedding generation and chat completion.
//!
//! The pipeline talks to its two network collaborators through these traits
//! so tests can swap in local fakes. [`ApiBackend`] is the production
//! implementation over [`quill_api::Client`].

use async_trait::async_trait;

use quill_api::chat::{ChatRequest, Message};
use quill_api::client::Client;
use quill_api::embedding::EmbeddingRequest;
use quill_api::error::ApiError;

use crate::Embedding;
use crate::error::Result;

/// Default model for embedding generation.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Default model for grounded summaries.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Generates embedding vectors for batches of text.
#[async_trait]
pub trait EmbeddingBackend: Send + Sync {
    /// Embed each input, returning one vector per input in input order.
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Embedding>>;
}

/// Produces chat completions.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Complete the conversation, returning the first choice's text content.
    async fn complete(&self, messages: Vec<Message>) -> Result<String>;
}

/// Production backend over the typed API client.
#[derive(Clone)]
pub struct ApiBackend {
    client: Client,
    embedding_model: String,
    chat_model: String,
}

impl ApiBackend {
    /// Create a backend with the default model identifiers.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
        }
    }

    /// Set the embedding model.
    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }

    /// Set the chat model.
    pub fn with_chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = model.into();
        self
    }
}

#[async_trait]
impl EmbeddingBackend for ApiBackend {
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Embedding>> {
        let request = EmbeddingRequest::new(self.embedding_model.as_str(), inputs.to_vec());
        let response = self.client.create_embedding(&request).await?;
        Ok(response.vectors()?)
    }
}

#[async_trait]
impl CompletionBackend for ApiBackend {
    async fn complete(&self, messages: Vec<Message>) -> Result<String> {
        let request = ChatRequest::new(self.chat_model.as_str(), messages);
        let response = self.client.chat_completion(&request).await?;
        let content = response.first_content().ok_or_else(|| {
            ApiError::InvalidResponse("completion response carried no choices".to_string())
        })?;
        Ok(content.to_string())
    }
}
