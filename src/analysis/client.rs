//! Analysis endpoint client
//!
//! Posts one image as multipart form data and decodes the JSON answer.
//! There is no retry: a failed request is final for that submission.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Duration;

use super::dto::AnalysisResponse;
use super::error::{AnalysisError, AnalysisResult};
use super::upload::ImageUpload;
use crate::config::ServerConfig;

/// Anything that can turn an image upload into an analysis response.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(&self, upload: ImageUpload) -> AnalysisResult<AnalysisResponse>;
}

/// HTTP client for `POST /analyze-image`
pub struct HttpAnalysisClient {
    client: Client,
    config: ServerConfig,
}

impl HttpAnalysisClient {
    pub fn new(config: ServerConfig) -> AnalysisResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    fn build_form(&self, upload: ImageUpload) -> AnalysisResult<Form> {
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)?;

        let mut form = Form::new().part(self.config.image_field.clone(), part);
        for (name, value) in upload.fields {
            form = form.text(name, value);
        }
        Ok(form)
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    async fn analyze(&self, upload: ImageUpload) -> AnalysisResult<AnalysisResponse> {
        let url = self.config.endpoint();
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::debug!(
            %url,
            %request_id,
            file = %upload.file_name,
            bytes = upload.len(),
            "Posting image for analysis"
        );

        let form = self.build_form(upload)?;
        let response = self
            .client
            .post(&url)
            .header("x-request-id", &request_id)
            .multipart(form)
            .send()
            .await
            .map_err(AnalysisError::from_reqwest)?;

        // The body decides success; the status is only logged.
        let status = response.status();
        let body = response.text().await.map_err(AnalysisError::from_reqwest)?;
        tracing::debug!(%request_id, %status, "Analysis response received");

        Ok(serde_json::from_str(&body)?)
    }
}
