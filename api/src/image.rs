//! Image generation requests and responses.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::client::Client;
use crate::error::{ApiError, Result};

/// Rendering style for generated images. Only supported by dall-e-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    /// More natural, less hyper-real looking images.
    Natural,
    /// Hyper-real and dramatic images.
    Vivid,
}

/// Request body for image generation.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRequest {
    pub model: String,
    pub prompt: String,
    pub n: u8,
    pub size: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ImageStyle>,
}

impl ImageRequest {
    /// Create a new image generation request.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            n: 1,
            size: "1024x1024".to_string(),
            style: None,
        }
    }

    /// Set the number of images to generate.
    pub fn with_n(mut self, n: u8) -> Self {
        self.n = n;
        self
    }

    /// Set the image size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Set the rendering style.
    pub fn with_style(mut self, style: ImageStyle) -> Self {
        self.style = Some(style);
        self
    }
}

/// One generated image.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageData {
    pub url: String,
}

/// Response from image generation.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageResponse {
    pub created: i64,
    pub data: Vec<ImageData>,
}

impl Client {
    /// Request image generation.
    pub async fn generate_images(&self, request: &ImageRequest) -> Result<ImageResponse> {
        debug!("generating {} image(s) with model: {}", request.n, request.model);
        self.post_json("/images/generations", request).await
    }

    /// Download generated images to the given paths, one path per image.
    pub async fn download_images(
        &self,
        images: &ImageResponse,
        paths: &[impl AsRef<Path>],
    ) -> Result<()> {
        if paths.len() != images.data.len() {
            return Err(ApiError::InvalidResponse(format!(
                "{} file paths for {} images",
                paths.len(),
                images.data.len()
            )));
        }

        for (image, path) in images.data.iter().zip(paths) {
            let response = self.http().get(&image.url).send().await?;
            if !response.status().is_success() {
                return Err(Self::error_response(response).await);
            }
            let bytes = response.bytes().await?;
            tokio::fs::write(path.as_ref(), &bytes).await?;
        }

        info!("downloaded {} image(s)", images.data.len());
        Ok(())
    }
}
