use anyhow::{Context, Result};
use reqwest::Client;
use url::Url;

use crate::{
    config::ApiConfig,
    domain::{ClassificationRequest, ClassificationResult},
};

use super::{
    error::RemoteError,
    protocol::{classify_endpoint, parse_response},
};

#[derive(Clone)]
pub struct EmailClassifierClient {
    http: Client,
    endpoint: Url,
}

impl EmailClassifierClient {
    pub fn new(http: Client, config: &ApiConfig) -> Result<Self> {
        let endpoint = classify_endpoint(&config.base_url).with_context(|| {
            format!("cannot derive classify endpoint from {}", config.base_url)
        })?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn classify(
        &self,
        request: &ClassificationRequest,
    ) -> Result<ClassificationResult, RemoteError> {
        tracing::debug!(
            target: "api",
            endpoint = %self.endpoint,
            content_len = request.content().len(),
            has_subject = request.subject().is_some(),
            has_sender = request.sender().is_some(),
            "sending classification request"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(
                    target: "api",
                    error = %err,
                    endpoint = %self.endpoint,
                    "classification request got no response"
                );
                RemoteError::Transport(err)
            })?;

        let status = response.status();
        match parse_response(response).await {
            Ok(result) => {
                tracing::info!(
                    target: "api",
                    status = status.as_u16(),
                    category = %result.category,
                    confidence = result.confidence,
                    "email classified"
                );
                Ok(result)
            }
            Err(err) => {
                tracing::warn!(
                    target: "api",
                    status = status.as_u16(),
                    error = %err,
                    "classification request failed"
                );
                Err(err)
            }
        }
    }
}
