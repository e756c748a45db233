//! # Quotation Service
//!
//! Fetches the exchange-rate snapshot from the configured upstream
//! provider.
//!
//! The provider sits behind the [`QuotationSource`] trait so the REST layer
//! can be exercised against an in-memory double; the production
//! implementation is
//! [`BluelyticsClient`](crate::infrastructure::bluelytics::BluelyticsClient).

use crate::application::dto::QuotationSnapshot;
use crate::application::error::UpstreamError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

/// Source of quotation snapshots.
#[async_trait]
pub trait QuotationSource: Send + Sync + std::fmt::Debug {
    /// Fetches the latest quotation snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] if the provider call fails or the response
    /// cannot be decoded.
    async fn latest(&self) -> Result<QuotationSnapshot, UpstreamError>;
}

/// Application service for the quotation endpoint.
///
/// A single passthrough call per invocation: no caching, no retry.
#[derive(Debug, Clone)]
pub struct QuotationService {
    source: Arc<dyn QuotationSource>,
}

impl QuotationService {
    /// Creates the service over a quotation source.
    #[must_use]
    pub fn new(source: Arc<dyn QuotationSource>) -> Self {
        Self { source }
    }

    /// Retrieves the latest snapshot from the upstream provider.
    ///
    /// The snapshot is returned unchanged; failures are logged with their
    /// upstream detail but carry no provider internals to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] when the downstream call fails.
    pub async fn latest(&self) -> Result<QuotationSnapshot, UpstreamError> {
        match self.source.latest().await {
            Ok(snapshot) => {
                info!("Successfully retrieved exchange rate data");
                Ok(snapshot)
            }
            Err(err) => {
                error!("Error retrieving exchange rate data from external API: {err}");
                Err(err)
            }
        }
    }
}
