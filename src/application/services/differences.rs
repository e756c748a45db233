//! # Differences Service
//!
//! Request-level validation and delegation to the domain calculator.
//!
//! The service owns the two checks that precede the domain (`null` body,
//! `null` rates map) so their messages keep the same wording and ordering
//! as the rest of the validation chain.

use crate::application::dto::DifferencesRequest;
use crate::application::error::ApplicationError;
use crate::domain::rates::{RateDelta, compute_differences};
use tracing::info;

/// Computes MEP − crypto differences for a differences request.
///
/// Stateless and pure: repeated calls with identical input produce
/// identical output.
#[derive(Debug, Clone, Copy, Default)]
pub struct DifferencesService;

impl DifferencesService {
    /// Creates the service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates the request and computes the per-field differences.
    ///
    /// `request` is `None` when the request body was the JSON literal
    /// `null`.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::Validation`] for a null body or null rates map.
    /// - [`ApplicationError::Domain`] for missing keys, null or non-positive
    ///   values, or negative differences.
    pub fn calculate(
        &self,
        request: Option<DifferencesRequest>,
    ) -> Result<RateDelta, ApplicationError> {
        info!("Starting calculation of differences between MEP and crypto values");

        let request =
            request.ok_or_else(|| ApplicationError::validation("Request cannot be null"))?;
        let rates = request
            .rates
            .ok_or_else(|| ApplicationError::validation("Rates map cannot be null"))?;

        let delta = compute_differences(&rates)?;

        info!(
            avg = delta.avg,
            sell = delta.sell,
            buy = delta.buy,
            "Successfully calculated differences"
        );

        Ok(delta)
    }
}
