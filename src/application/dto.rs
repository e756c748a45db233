//! # Application DTOs
//!
//! Wire-level request and response shapes for the REST endpoints.
//!
//! Field names follow the published (Spanish) API contract; the quotation
//! snapshot mirrors the upstream provider's payload and is passed through
//! without transformation.

use crate::domain::rates::{RateDelta, RateQuote, RateSet};
use serde::{Deserialize, Serialize};

// ============================================================================
// Differences
// ============================================================================

/// Request body for `POST /api/v1/diferencias`.
///
/// ```json
/// {
///   "rates": {
///     "crypto": { "value_avg": 940.0, "value_sell": 945.0, "value_buy": 935.0 },
///     "mep": { "value_avg": 1250.0, "value_sell": 1260.0, "value_buy": 1240.0 }
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DifferencesRequest {
    /// The pair of rate quotes to compare. Optional so a missing or null
    /// `rates` key gets its own validation message.
    pub rates: Option<RateSet>,
}

/// Response body for a successful differences calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifferencesResponse {
    /// MEP average minus crypto average.
    pub diferencia_avg: f64,
    /// MEP sell minus crypto sell.
    pub diferencia_sell: f64,
    /// MEP buy minus crypto buy.
    pub diferencia_buy: f64,
}

impl From<RateDelta> for DifferencesResponse {
    fn from(delta: RateDelta) -> Self {
        Self {
            diferencia_avg: delta.avg,
            diferencia_sell: delta.sell,
            diferencia_buy: delta.buy,
        }
    }
}

// ============================================================================
// Quotation
// ============================================================================

/// Quotation snapshot as returned by the upstream provider.
///
/// Passthrough data: no field is validated, and absent blocks or values
/// are forwarded as `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuotationSnapshot {
    /// Official exchange rate.
    pub oficial: Option<RateQuote>,
    /// Informal ("blue") exchange rate.
    pub blue: Option<RateQuote>,
    /// Official euro exchange rate.
    pub oficial_euro: Option<RateQuote>,
    /// Informal euro exchange rate.
    pub blue_euro: Option<RateQuote>,
    /// Provider-supplied last-update timestamp, forwarded verbatim.
    #[serde(default)]
    pub last_update: Option<String>,
}

// ============================================================================
// Order
// ============================================================================

/// Response body for `GET /api/v1/pedido`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Confirmation message.
    pub mensaje: String,
}
