//! # Infrastructure Layer
//!
//! Adapters for external collaborators.
//!
//! Currently a single adapter: the HTTP client for the Bluelytics
//! quotation API.

pub mod bluelytics;

pub use bluelytics::{BluelyticsClient, DEFAULT_QUOTATION_URL};
