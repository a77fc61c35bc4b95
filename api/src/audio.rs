//! Speech synthesis and audio transcription.

use std::path::PathBuf;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::Client;
use crate::error::Result;

/// Default transcription model.
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";

/// Available voices for speech synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Alloy,
    Echo,
    Fable,
    Onyx,
    Nova,
    Shimmer,
}

/// Request body for speech synthesis.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechRequest {
    /// Model for speech synthesis.
    pub model: String,
    /// Input text to synthesize.
    pub input: String,
    /// Voice used for synthesis.
    pub voice: Voice,
}

impl SpeechRequest {
    /// Create a new speech synthesis request.
    pub fn new(model: impl Into<String>, input: impl Into<String>, voice: Voice) -> Self {
        Self {
            model: model.into(),
            input: input.into(),
            voice,
        }
    }
}

/// Request for audio transcription.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    /// Transcription model.
    pub model: String,
    /// Path to the audio file to transcribe.
    pub file_path: PathBuf,
    /// File name sent in the multipart form; defaults to the path's file name.
    pub filename: Option<String>,
}

impl TranscriptionRequest {
    /// Create a transcription request with the default model.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            model: DEFAULT_TRANSCRIPTION_MODEL.to_string(),
            file_path: file_path.into(),
            filename: None,
        }
    }

    /// Set the transcription model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the multipart file name.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

/// Response from audio transcription.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionResponse {
    pub text: String,
}

impl Client {
    /// Synthesize speech, returning the raw audio bytes.
    pub async fn text_to_speech(&self, request: &SpeechRequest) -> Result<Bytes> {
        debug!("synthesizing speech with model: {}", request.model);
        let response = self.post("/audio/speech")?.json(request).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_response(response).await);
        }
        Ok(response.bytes().await?)
    }

    /// Transcribe an audio file.
    pub async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionResponse> {
        let bytes = tokio::fs::read(&request.file_path).await?;
        let filename = request.filename.clone().unwrap_or_else(|| {
            request
                .file_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "audio".to_string())
        });

        debug!("transcribing {filename} with model: {}", request.model);

        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", request.model.clone());

        let response = self
            .post("/audio/transcriptions")?
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }
}
