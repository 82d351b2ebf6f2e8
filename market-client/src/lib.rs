//! Client library for the in-store order service
//!
//! This crate is the I/O half of the order core: typed endpoint wrappers,
//! the cashier client, and [`OrderSession`], the owned shopper state with
//! sequence-gated reconciliation against the authoritative service.
//!
//! # Example
//!
//! ```no_run
//! use market_client::{NetworkHttpClient, OrderServiceApi, OrderSession};
//!
//! # async fn run() -> Result<(), market_client::ClientError> {
//! let http = NetworkHttpClient::new("http://localhost:3001")?;
//! let mut session = OrderSession::new(OrderServiceApi::new(http));
//!
//! session.start(None).await?;
//! session.add_item("SKU1", 2, None).await?;
//! session.close(Some("cash".into()), None).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cashier;
pub mod error;
pub mod http;
pub mod mock;
pub mod session;

// Re-exports
pub use api::{Collection, OrderServiceApi};
pub use cashier::CashierClient;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use session::OrderSession;
