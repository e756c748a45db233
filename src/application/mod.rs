//! # Application Layer
//!
//! Orchestration between the HTTP surface and the domain.
//!
//! ## Services
//!
//! - [`DifferencesService`]: validates a differences request and runs the
//!   domain calculator
//! - [`QuotationService`]: fetches the quotation snapshot from the upstream
//!   provider behind the [`QuotationSource`] seam
//! - [`OrderService`]: returns the static order confirmation
//!
//! [`DifferencesService`]: services::DifferencesService
//! [`QuotationService`]: services::QuotationService
//! [`OrderService`]: services::OrderService
//! [`QuotationSource`]: services::QuotationSource

pub mod dto;
pub mod error;
pub mod services;

pub use error::ApplicationError;
