//! Content moderation requests and responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::Client;
use crate::error::Result;

/// Input to moderate: a single string or an ordered batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModerationInput {
    Single(String),
    Batch(Vec<String>),
}

impl From<&str> for ModerationInput {
    fn from(text: &str) -> Self {
        ModerationInput::Single(text.to_string())
    }
}

impl From<Vec<String>> for ModerationInput {
    fn from(texts: Vec<String>) -> Self {
        ModerationInput::Batch(texts)
    }
}

/// Request body for content moderation.
#[derive(Debug, Clone, Serialize)]
pub struct ModerationRequest {
    pub input: ModerationInput,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ModerationRequest {
    /// Create a new moderation request.
    pub fn new(input: impl Into<ModerationInput>) -> Self {
        Self {
            input: input.into(),
            model: None,
        }
    }

    /// Set the moderation model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Moderation verdict for one input.
#[derive(Debug, Clone, Deserialize)]
pub struct ModerationResult {
    pub flagged: bool,
    #[serde(default)]
    pub categories: HashMap<String, bool>,
    #[serde(default)]
    pub category_scores: HashMap<String, f64>,
}

/// Response from content moderation.
#[derive(Debug, Clone, Deserialize)]
pub struct ModerationResponse {
    pub id: String,
    pub model: String,
    pub results: Vec<ModerationResult>,
}

impl ModerationResponse {
    /// Whether any input was flagged.
    pub fn any_flagged(&self) -> bool {
        self.results.iter().any(|result| result.flagged)
    }
}

impl Client {
    /// Request moderation for the given input.
    pub async fn moderate(&self, request: &ModerationRequest) -> Result<ModerationResponse> {
        debug!("moderating input");
        self.post_json("/moderations", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_flagged() {
        let response: ModerationResponse = serde_json::from_value(serde_json::json!({
            "id": "modr-1",
            "model": "omni-moderation-latest",
            "results": [
                {"flagged": false, "categories": {}, "category_scores": {}},
                {"flagged": true, "categories": {"violence": true}, "category_scores": {"violence": 0.98}}
            ]
        }))
        .unwrap();

        assert!(response.any_flagged());
        assert_eq!(response.results.len(), 2);
    }
}
