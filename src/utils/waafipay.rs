use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;
use thiserror::Error;
use tracing::instrument;

use crate::service::purchase::GatewayPayload;
use crate::utils::config::EnvConfig;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Failed to make API request")]
    HttpRequestError(#[from] reqwest::Error),

    #[error("Failed to reach WaafiPay: {0}")]
    Transport(String),
}

/// Seam for the outbound WaafiPay call so request handling can be
/// exercised against a stub transport.
#[async_trait]
pub trait WaafiPayGateway: Send + Sync {
    async fn purchase(&self, payload: &GatewayPayload) -> Result<String, GatewayError>;
}

pub struct WaafiPayClient {
    http: Client,
    purchase_url: String,
}

impl WaafiPayClient {
    pub fn new(env: &EnvConfig) -> Result<WaafiPayClient, GatewayError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(env.gateway_timeout_secs))
            .build()?;

        Ok(WaafiPayClient {
            http,
            purchase_url: env.purchase_url(),
        })
    }
}

#[async_trait]
impl WaafiPayGateway for WaafiPayClient {
    #[instrument(skip(self, payload), fields(request_id = %payload.request_id))]
    async fn purchase(&self, payload: &GatewayPayload) -> Result<String, GatewayError> {
        let response = self
            .http
            .post(&self.purchase_url)
            .json(payload)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let body = response.text().await?;
        Ok(body)
    }
}
