//! # Application Services
//!
//! One service per endpoint, each a thin orchestration over the domain or
//! an external collaborator.

pub mod differences;
pub mod order;
pub mod quotation;

pub use differences::DifferencesService;
pub use order::{ORDER_PROCESSED_MESSAGE, OrderService};
pub use quotation::{QuotationService, QuotationSource};
