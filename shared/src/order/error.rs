//! Order domain errors

use super::status::OrderStatus;
use thiserror::Error;

/// Errors raised by the order core before any network call is made
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Closing an order with no cart items
    #[error("Cannot close an order with an empty cart")]
    EmptyCart,

    /// Operating on an order the server has not assigned an id to yet
    #[error("Order has no assigned id")]
    MissingOrderId,

    /// A locally initiated status change that the lifecycle does not allow
    #[error("Invalid status transition: {from:?} -> {to:?}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
}
