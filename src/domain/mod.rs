//! # Domain Layer
//!
//! Core business logic for exchange-rate comparisons.
//!
//! This layer contains:
//! - **Rates**: Value types for rate quotes, rate sets, and computed deltas
//! - **Errors**: Domain-specific error types

pub mod errors;
pub mod rates;

pub use errors::DomainError;
pub use rates::{RateDelta, RateField, RateQuote, RateSet, compute_differences};
