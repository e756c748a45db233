//! # Rate Value Types
//!
//! Value types for exchange-rate comparison and the pure difference
//! calculator.
//!
//! A [`RateSet`] pairs a crypto-implied rate quote with a MEP rate quote;
//! [`compute_differences`] validates the set and produces a [`RateDelta`]
//! holding `MEP − crypto` per field.
//!
//! The set is modeled as a fixed two-field record rather than an open map,
//! keeping the accepted rate categories closed at the type level.
//!
//! # Examples
//!
//! ```
//! use cambio_api::domain::rates::{RateQuote, RateSet, compute_differences};
//!
//! let rates = RateSet {
//!     crypto: Some(RateQuote::new(940.0, 945.0, 935.0)),
//!     mep: Some(RateQuote::new(1250.0, 1260.0, 1240.0)),
//! };
//!
//! let delta = compute_differences(&rates).unwrap();
//! assert_eq!(delta.avg, 310.0);
//! assert_eq!(delta.sell, 315.0);
//! assert_eq!(delta.buy, 305.0);
//! ```

use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

// ============================================================================
// Rate Field
// ============================================================================

/// The three values carried by every rate quote.
///
/// The declaration order (avg, sell, buy) is the fixed order used both for
/// validation and for reporting negative differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateField {
    /// Average rate (mean of buy and sell).
    Avg,
    /// Sell rate.
    Sell,
    /// Buy rate.
    Buy,
}

impl RateField {
    /// All fields in the fixed validation and reporting order.
    pub const ALL: [Self; 3] = [Self::Avg, Self::Sell, Self::Buy];

    /// Returns the wire name of the field (`avg`, `sell`, `buy`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Avg => "avg",
            Self::Sell => "sell",
            Self::Buy => "buy",
        }
    }
}

impl fmt::Display for RateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Rate Quote
// ============================================================================

/// A single exchange-rate quote as received on the wire.
///
/// All three values are optional at the transport level; validation of
/// presence and positivity happens in [`compute_differences`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RateQuote {
    /// Average rate value.
    pub value_avg: Option<f64>,
    /// Sell rate value.
    pub value_sell: Option<f64>,
    /// Buy rate value.
    pub value_buy: Option<f64>,
}

impl RateQuote {
    /// Creates a quote with all three values present.
    #[must_use]
    pub const fn new(avg: f64, sell: f64, buy: f64) -> Self {
        Self {
            value_avg: Some(avg),
            value_sell: Some(sell),
            value_buy: Some(buy),
        }
    }

    /// Returns the value for the given field, if present.
    #[must_use]
    pub const fn value(&self, field: RateField) -> Option<f64> {
        match field {
            RateField::Avg => self.value_avg,
            RateField::Sell => self.value_sell,
            RateField::Buy => self.value_buy,
        }
    }
}

// ============================================================================
// Rate Set
// ============================================================================

/// The pair of rate quotes a difference is computed over.
///
/// Both keys are required for a calculation to succeed; they are optional
/// here only so that missing keys can be reported with a field-specific
/// validation message instead of a generic parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RateSet {
    /// Crypto-implied exchange rate quote.
    pub crypto: Option<RateQuote>,
    /// MEP (Mercado Electrónico de Pagos) exchange rate quote.
    pub mep: Option<RateQuote>,
}

// ============================================================================
// Rate Delta
// ============================================================================

/// The computed per-field differences, `MEP − crypto`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateDelta {
    /// Difference of average values.
    pub avg: f64,
    /// Difference of sell values.
    pub sell: f64,
    /// Difference of buy values.
    pub buy: f64,
}

// ============================================================================
// Difference Calculator
// ============================================================================

/// Computes the MEP − crypto difference for each rate field.
///
/// Validation runs in a fixed order so that identical malformed inputs
/// always produce identical messages: key presence (crypto before MEP),
/// then per-quote null checks before positivity checks, avg → sell → buy.
///
/// Plain IEEE-754 `f64` subtraction, no rounding. Zero deltas are valid;
/// the negative check is strict `< 0`.
///
/// # Errors
///
/// - [`DomainError::Validation`] if either key is missing or any of the six
///   values is absent or not strictly positive.
/// - [`DomainError::NegativeDifferences`] if one or more deltas is negative,
///   naming the offending fields in avg, sell, buy order.
pub fn compute_differences(rates: &RateSet) -> Result<RateDelta, DomainError> {
    let crypto = rates
        .crypto
        .as_ref()
        .ok_or_else(|| DomainError::validation("Crypto data is required"))?;
    let mep = rates
        .mep
        .as_ref()
        .ok_or_else(|| DomainError::validation("MEP data is required"))?;

    validate_quote(crypto, "crypto")?;
    validate_quote(mep, "MEP")?;

    let delta = RateDelta {
        avg: subtract(mep, crypto, RateField::Avg),
        sell: subtract(mep, crypto, RateField::Sell),
        buy: subtract(mep, crypto, RateField::Buy),
    };

    debug!(
        avg = delta.avg,
        sell = delta.sell,
        buy = delta.buy,
        "calculated differences"
    );

    let negative: Vec<RateField> = RateField::ALL
        .into_iter()
        .filter(|field| delta_value(&delta, *field) < 0.0)
        .collect();

    if !negative.is_empty() {
        return Err(DomainError::NegativeDifferences(negative));
    }

    Ok(delta)
}

fn subtract(mep: &RateQuote, crypto: &RateQuote, field: RateField) -> f64 {
    // Presence is guaranteed by validate_quote.
    mep.value(field).unwrap_or_default() - crypto.value(field).unwrap_or_default()
}

const fn delta_value(delta: &RateDelta, field: RateField) -> f64 {
    match field {
        RateField::Avg => delta.avg,
        RateField::Sell => delta.sell,
        RateField::Buy => delta.buy,
    }
}

/// Checks that every value of a quote is present, then that every value is
/// strictly positive. Null checks run for all fields before any positivity
/// check so malformed inputs keep their historical messages.
fn validate_quote(quote: &RateQuote, label: &str) -> Result<(), DomainError> {
    for field in RateField::ALL {
        if quote.value(field).is_none() {
            return Err(DomainError::validation(format!(
                "{label} value_{field} cannot be null"
            )));
        }
    }

    for field in RateField::ALL {
        if quote.value(field).is_some_and(|value| value <= 0.0) {
            return Err(DomainError::validation(format!(
                "{label} value_{field} must be positive"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_rates() -> RateSet {
        RateSet {
            crypto: Some(RateQuote::new(940.0, 945.0, 935.0)),
            mep: Some(RateQuote::new(1250.0, 1260.0, 1240.0)),
        }
    }

    #[test]
    fn computes_per_field_differences() {
        let delta = compute_differences(&valid_rates()).unwrap();
        assert_eq!(delta.avg, 310.0);
        assert_eq!(delta.sell, 315.0);
        assert_eq!(delta.buy, 305.0);
    }

    #[test]
    fn equal_quotes_yield_zero_delta() {
        let rates = RateSet {
            crypto: Some(RateQuote::new(1000.0, 1010.0, 990.0)),
            mep: Some(RateQuote::new(1000.0, 1010.0, 990.0)),
        };
        let delta = compute_differences(&rates).unwrap();
        assert_eq!(delta.avg, 0.0);
        assert_eq!(delta.sell, 0.0);
        assert_eq!(delta.buy, 0.0);
    }

    #[test]
    fn negative_avg_reported_by_name() {
        let rates = RateSet {
            crypto: Some(RateQuote::new(940.0, 945.0, 935.0)),
            mep: Some(RateQuote::new(910.0, 1260.0, 1240.0)),
        };
        let error = compute_differences(&rates).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Negative differences found for items: avg"
        );
    }

    #[test]
    fn multiple_negative_fields_in_fixed_order() {
        let rates = RateSet {
            crypto: Some(RateQuote::new(1000.0, 1000.0, 1000.0)),
            mep: Some(RateQuote::new(900.0, 950.0, 1100.0)),
        };
        let error = compute_differences(&rates).unwrap_err();
        assert_eq!(
            error,
            DomainError::NegativeDifferences(vec![RateField::Avg, RateField::Sell])
        );
    }

    #[test]
    fn missing_crypto_key() {
        let rates = RateSet {
            crypto: None,
            mep: Some(RateQuote::new(1.0, 1.0, 1.0)),
        };
        let error = compute_differences(&rates).unwrap_err();
        assert_eq!(error.to_string(), "Crypto data is required");
    }

    #[test]
    fn missing_mep_key() {
        let rates = RateSet {
            crypto: Some(RateQuote::new(1.0, 1.0, 1.0)),
            mep: None,
        };
        let error = compute_differences(&rates).unwrap_err();
        assert_eq!(error.to_string(), "MEP data is required");
    }

    #[test]
    fn null_field_reported_before_positivity() {
        let mut rates = valid_rates();
        rates.crypto = Some(RateQuote {
            value_avg: Some(-5.0),
            value_sell: None,
            value_buy: Some(935.0),
        });
        // value_sell null wins over value_avg being non-positive.
        let error = compute_differences(&rates).unwrap_err();
        assert_eq!(error.to_string(), "crypto value_sell cannot be null");
    }

    #[test]
    fn null_fields_each_named() {
        for (field, expected) in [
            (RateField::Avg, "crypto value_avg cannot be null"),
            (RateField::Sell, "crypto value_sell cannot be null"),
            (RateField::Buy, "crypto value_buy cannot be null"),
        ] {
            let mut quote = RateQuote::new(940.0, 945.0, 935.0);
            match field {
                RateField::Avg => quote.value_avg = None,
                RateField::Sell => quote.value_sell = None,
                RateField::Buy => quote.value_buy = None,
            }
            let rates = RateSet {
                crypto: Some(quote),
                mep: Some(RateQuote::new(1250.0, 1260.0, 1240.0)),
            };
            let error = compute_differences(&rates).unwrap_err();
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn zero_value_rejected_as_non_positive() {
        let rates = RateSet {
            crypto: Some(RateQuote::new(940.0, 0.0, 935.0)),
            mep: Some(RateQuote::new(1250.0, 1260.0, 1240.0)),
        };
        let error = compute_differences(&rates).unwrap_err();
        assert_eq!(error.to_string(), "crypto value_sell must be positive");
    }

    #[test]
    fn mep_validation_uses_uppercase_label() {
        let rates = RateSet {
            crypto: Some(RateQuote::new(940.0, 945.0, 935.0)),
            mep: Some(RateQuote::new(-1.0, 1260.0, 1240.0)),
        };
        let error = compute_differences(&rates).unwrap_err();
        assert_eq!(error.to_string(), "MEP value_avg must be positive");
    }

    #[test]
    fn crypto_validated_before_mep() {
        let rates = RateSet {
            crypto: Some(RateQuote::new(-1.0, 945.0, 935.0)),
            mep: Some(RateQuote {
                value_avg: None,
                value_sell: None,
                value_buy: None,
            }),
        };
        let error = compute_differences(&rates).unwrap_err();
        assert_eq!(error.to_string(), "crypto value_avg must be positive");
    }

    #[test]
    fn calculator_is_idempotent() {
        let rates = valid_rates();
        let first = compute_differences(&rates).unwrap();
        let second = compute_differences(&rates).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn preserves_double_precision() {
        let rates = RateSet {
            crypto: Some(RateQuote::new(0.25, 0.25, 0.25)),
            mep: Some(RateQuote::new(100.5, 100.5, 100.5)),
        };
        let delta = compute_differences(&rates).unwrap();
        assert_eq!(delta.avg, 100.5 - 0.25);
        assert_eq!(delta.avg, 100.25);
    }

    #[test]
    fn rate_set_deserializes_with_missing_keys() {
        let rates: RateSet = serde_json::from_str(r#"{"crypto": null}"#).unwrap();
        assert!(rates.crypto.is_none());
        assert!(rates.mep.is_none());
    }

    #[test]
    fn rate_quote_wire_names() {
        let quote: RateQuote =
            serde_json::from_str(r#"{"value_avg": 940.0, "value_sell": 945.0, "value_buy": 935.0}"#)
                .unwrap();
        assert_eq!(quote, RateQuote::new(940.0, 945.0, 935.0));
    }
}
