//! Shared types for the in-store order system
//!
//! Common types used across the shopper and cashier clients: wire models,
//! the order domain (cart mutations and lifecycle), and response structures.

pub mod models;
pub mod order;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};
