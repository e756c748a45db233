//! # Application Errors
//!
//! Error types for the application layer.
//!
//! [`ApplicationError`] is the single failure type handlers map to HTTP
//! status codes; [`UpstreamError`] describes failures of the external
//! quotation provider and is folded into it.

use crate::domain::errors::DomainError;
use thiserror::Error;

/// Failure of the single outbound call to the quotation provider.
///
/// Carried for logging only; its contents are never surfaced to API
/// clients.
#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    /// The provider answered with a non-success status.
    #[error("upstream returned status {status}")]
    Status {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Raw response body, kept for the error log.
        body: String,
    },

    /// The request never completed or the body could not be decoded.
    #[error("upstream request failed: {0}")]
    Transport(String),
}

/// Application layer error.
#[derive(Debug, Clone, Error)]
pub enum ApplicationError {
    /// Request-level validation failed before reaching the domain.
    #[error("{0}")]
    Validation(String),

    /// Domain validation or business rule failure.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The external quotation provider failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Builds a request-level validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
