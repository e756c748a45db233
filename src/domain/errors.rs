//! # Domain Errors
//!
//! Typed domain error definitions.
//!
//! This module provides the [`DomainError`] enum covering the two ways a
//! difference calculation can fail: malformed input data and the business
//! rule rejecting negative differences.
//!
//! # Examples
//!
//! ```
//! use cambio_api::domain::errors::DomainError;
//! use cambio_api::domain::rates::RateField;
//!
//! let error = DomainError::NegativeDifferences(vec![RateField::Avg, RateField::Sell]);
//! assert_eq!(
//!     error.to_string(),
//!     "Negative differences found for items: avg, sell"
//! );
//! ```

use crate::domain::rates::RateField;
use thiserror::Error;

/// Domain-level error for rate difference calculations.
///
/// Validation messages are surfaced verbatim to API clients, so the
/// `Display` output of each variant is part of the wire contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Input data is missing, null, or non-positive.
    ///
    /// The message names the offending field, e.g.
    /// `"crypto value_avg must be positive"`.
    #[error("{0}")]
    Validation(String),

    /// One or more computed differences came out negative.
    ///
    /// Carries the fields whose delta was negative, in the fixed
    /// avg, sell, buy order.
    #[error("Negative differences found for items: {}", join_fields(.0))]
    NegativeDifferences(Vec<RateField>),
}

impl DomainError {
    /// Builds a validation error from a formatted message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

fn join_fields(fields: &[RateField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_verbatim() {
        let error = DomainError::validation("MEP data is required");
        assert_eq!(error.to_string(), "MEP data is required");
    }

    #[test]
    fn negative_differences_single_field() {
        let error = DomainError::NegativeDifferences(vec![RateField::Avg]);
        assert_eq!(
            error.to_string(),
            "Negative differences found for items: avg"
        );
    }

    #[test]
    fn negative_differences_joins_in_order() {
        let error = DomainError::NegativeDifferences(vec![
            RateField::Avg,
            RateField::Sell,
            RateField::Buy,
        ]);
        assert_eq!(
            error.to_string(),
            "Negative differences found for items: avg, sell, buy"
        );
    }
}
