//! Order lifecycle state machine
//!
//! The lifecycle is linear, with one shortcut: `Paid` is reachable directly
//! from `Pending` because verification is an optional gate at the cash desk.
//!
//! ```text
//! Draft -> Pending -> Confirmed -> Paid -> Ready -> Delivered
//!              \__________________/
//! ```
//!
//! The client core initiates exactly one transition itself, the shopper's
//! `Draft -> Pending` close, and gates it through [`OrderStatus::can_transition_to`].
//! Everything else is adopted from the order service, with
//! [`OrderStatus::is_backward`] flagging adoptions that regress the
//! lifecycle.

use serde::{Deserialize, Serialize};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Being built on the shopper's device; device-owned
    #[default]
    Draft,
    /// Closed by the shopper, waiting at the cash desk
    Pending,
    /// Verified by a cashier
    Confirmed,
    /// Payment recorded
    Paid,
    /// Fulfillment complete, ready for pickup
    Ready,
    /// Handed to the shopper
    Delivered,
}

impl OrderStatus {
    /// Position in the linear lifecycle, used for forward-only checks
    fn rank(self) -> u8 {
        match self {
            Self::Draft => 0,
            Self::Pending => 1,
            Self::Confirmed => 2,
            Self::Paid => 3,
            Self::Ready => 4,
            Self::Delivered => 5,
        }
    }

    /// Whether `self -> next` is a legal transition
    ///
    /// `Pending -> Paid` is allowed: verification is optional.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Pending)
                | (Self::Pending, Self::Confirmed)
                | (Self::Pending, Self::Paid)
                | (Self::Confirmed, Self::Paid)
                | (Self::Paid, Self::Ready)
                | (Self::Ready, Self::Delivered)
        )
    }

    /// Whether adopting `next` would move the lifecycle backward
    pub fn is_backward(self, next: Self) -> bool {
        next.rank() < self.rank()
    }

    /// Whether the lifecycle has run to completion
    pub fn is_final(self) -> bool {
        self == Self::Delivered
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Paid => "paid",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
        };
        write!(f, "{}", s)
    }
}
