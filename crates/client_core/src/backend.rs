use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::ImageId,
    error::ApiErrorBody,
    protocol::{
        FestivalOption, FestivalsResponse, GeneratedImage, GenerationRequest, HealthResponse,
        HistoryEntry, ImagesResponse,
    },
};
use tracing::debug;

use crate::{config::ClientSettings, error::GenerateError};

/// Remote FestPost service as seen by the controller.
#[async_trait]
pub trait FestPostBackend: Send + Sync {
    async fn list_festivals(&self) -> Result<Vec<FestivalOption>>;
    async fn list_images(&self) -> Result<Vec<HistoryEntry>>;
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> std::result::Result<GeneratedImage, GenerateError>;
    async fn image_details(&self, image_id: &ImageId) -> Result<HistoryEntry>;
    async fn fetch_image_bytes(&self, image_url: &str) -> Result<Vec<u8>>;
    async fn health(&self) -> Result<HealthResponse>;
}

pub struct HttpBackend {
    http: Client,
    server_url: String,
}

impl HttpBackend {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            http,
            server_url: settings.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

#[async_trait]
impl FestPostBackend for HttpBackend {
    async fn list_festivals(&self) -> Result<Vec<FestivalOption>> {
        let body: FestivalsResponse = self
            .http
            .get(format!("{}/festivals", self.server_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.festivals)
    }

    async fn list_images(&self) -> Result<Vec<HistoryEntry>> {
        let body: ImagesResponse = self
            .http
            .get(format!("{}/images", self.server_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.images)
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> std::result::Result<GeneratedImage, GenerateError> {
        let response = self
            .http
            .post(format!("{}/generate", self.server_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        if !status.is_success() {
            let detail = ApiErrorBody::parse(&raw).and_then(|body| body.message());
            debug!(%status, detail = ?detail, "generation rejected");
            return Err(GenerateError::Rejected { status, detail });
        }

        Ok(serde_json::from_str(&raw)?)
    }

    async fn image_details(&self, image_id: &ImageId) -> Result<HistoryEntry> {
        let entry = self
            .http
            .get(format!("{}/images/{}", self.server_url, image_id))
            .send()
            .await?
            .error_for_status()
            .with_context(|| format!("image '{image_id}' is not available"))?
            .json()
            .await?;
        Ok(entry)
    }

    async fn fetch_image_bytes(&self, image_url: &str) -> Result<Vec<u8>> {
        let bytes = self
            .http
            .get(image_url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }

    async fn health(&self) -> Result<HealthResponse> {
        let health = self
            .http
            .get(format!("{}/health", self.server_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(health)
    }
}

#[cfg(test)]
#[path = "tests/backend_tests.rs"]
mod tests;
