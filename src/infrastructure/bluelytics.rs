//! # Bluelytics Client
//!
//! HTTP client for the Bluelytics exchange-rate API.
//!
//! Implements [`QuotationSource`] with a single GET per invocation. No
//! retry and no timeout override beyond the client default; a non-success
//! status or transport failure maps to [`UpstreamError`] with the original
//! status and body preserved for the error log only.
//!
//! # Examples
//!
//! ```ignore
//! use cambio_api::infrastructure::bluelytics::{BluelyticsClient, DEFAULT_QUOTATION_URL};
//!
//! let client = BluelyticsClient::new(reqwest::Client::new(), DEFAULT_QUOTATION_URL);
//! let snapshot = client.latest().await?;
//! ```

use crate::application::dto::QuotationSnapshot;
use crate::application::error::UpstreamError;
use crate::application::services::quotation::QuotationSource;
use async_trait::async_trait;
use tracing::{error, info};

/// Default Bluelytics endpoint URL.
pub const DEFAULT_QUOTATION_URL: &str = "https://api.bluelytics.com.ar/v2/latest";

/// Quotation source backed by the Bluelytics HTTP API.
#[derive(Debug, Clone)]
pub struct BluelyticsClient {
    http: reqwest::Client,
    url: String,
}

impl BluelyticsClient {
    /// Creates a client for the given endpoint URL.
    #[must_use]
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Returns the configured endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QuotationSource for BluelyticsClient {
    async fn latest(&self) -> Result<QuotationSnapshot, UpstreamError> {
        info!("Initiating request to external API: {}", self.url);

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|err| UpstreamError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                "Error calling external API. Status: {}, Response: {}",
                status, body
            );
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<QuotationSnapshot>()
            .await
            .map_err(|err| UpstreamError::Transport(err.to_string()))
    }
}
