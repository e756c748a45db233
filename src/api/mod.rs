//! # API Layer
//!
//! External interfaces for the exchange-rate façade.
//!
//! A single protocol is exposed:
//!
//! - **REST**: quotation, order, and differences endpoints under `/api/v1`

pub mod rest;

pub use rest as rest_api;
