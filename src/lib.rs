//! # Cambio API
//!
//! Minimal REST façade over Argentine exchange-rate data.
//!
//! Three endpoints: fetch the latest quotation snapshot from an external
//! provider, compute MEP − crypto rate differences with a business rule
//! rejecting negative results, and return a static order confirmation.
//!
//! ## Architecture
//!
//! Layered design:
//!
//! - **Domain Layer** (`domain`): Rate value types, the pure difference
//!   calculator, and domain errors
//! - **Application Layer** (`application`): DTOs, services, and the
//!   application error taxonomy
//! - **Infrastructure Layer** (`infrastructure`): The Bluelytics HTTP client
//! - **API Layer** (`api`): axum REST handlers and routing
//!
//! ## Example
//!
//! ```rust
//! use cambio_api::domain::rates::{RateQuote, RateSet, compute_differences};
//!
//! let rates = RateSet {
//!     crypto: Some(RateQuote::new(940.0, 945.0, 935.0)),
//!     mep: Some(RateQuote::new(1250.0, 1260.0, 1240.0)),
//! };
//! let delta = compute_differences(&rates).unwrap();
//! assert_eq!(delta.avg, 310.0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
