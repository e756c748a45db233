//! # Order Service
//!
//! Static order-confirmation responder. No inputs, no failure modes.

use crate::application::dto::OrderResponse;

/// Confirmation message returned for every order request.
pub const ORDER_PROCESSED_MESSAGE: &str = "El pedido fue procesado";

/// Returns the order-processed confirmation.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderService;

impl OrderService {
    /// Creates the service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Processes an order and returns the confirmation message.
    #[must_use]
    pub fn process(&self) -> OrderResponse {
        OrderResponse {
            mensaje: ORDER_PROCESSED_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_returns_confirmation() {
        let response = OrderService::new().process();
        assert_eq!(response.mensaje, "El pedido fue procesado");
    }

    #[test]
    fn repeated_calls_return_identical_message() {
        let service = OrderService::new();
        assert_eq!(service.process(), service.process());
    }
}
