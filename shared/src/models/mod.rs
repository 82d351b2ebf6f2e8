//! Data models
//!
//! Wire models shared between the shopper client and the cashier client.
//! Field names follow the order service's camelCase JSON contract.

pub mod cashier;
pub mod product;

// Re-exports
pub use cashier::*;
pub use product::*;
