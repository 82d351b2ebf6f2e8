//! Cashier-side client
//!
//! Wraps the cash-desk endpoints: login, order lookup, and the status
//! advances (verify, mark-paid, mark-ready, mark-delivered). Every order
//! operation requires a bearer token from a prior login; a missing token is
//! an [`ClientError::Auth`] raised before any request goes out.
//!
//! The returned snapshots carry whatever status the service reports; the
//! service may have advanced past the expected state (e.g. already `paid`
//! when verify is clicked) and its value wins.

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;
use shared::models::{CashierLoginRequest, CashierSession, CashierUser};
use shared::order::Order;

/// Cashier client holding the authenticated session
#[derive(Debug)]
pub struct CashierClient<C: HttpClient> {
    http: C,
    session: Option<CashierSession>,
}

impl<C: HttpClient> CashierClient<C> {
    pub fn new(http: C) -> Self {
        Self {
            http,
            session: None,
        }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// The authenticated user, if logged in
    pub fn user(&self) -> Option<&CashierUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Authenticate and install the bearer token for subsequent calls
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<CashierUser> {
        let session: CashierSession = self
            .http
            .post(
                "/api/cashier/login",
                &CashierLoginRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;

        tracing::info!(email = %session.user.email, role = ?session.user.role, "Cashier logged in");
        self.http.set_token(Some(session.token.clone()));
        let user = session.user.clone();
        self.session = Some(session);
        Ok(user)
    }

    /// Drop the session and clear the token
    pub fn logout(&mut self) {
        self.session = None;
        self.http.set_token(None);
        tracing::info!("Cashier logged out");
    }

    fn require_auth(&self) -> ClientResult<()> {
        if self.session.is_none() {
            return Err(ClientError::Auth("Cashier login required".into()));
        }
        Ok(())
    }

    /// Fetch an order by the code the shopper presents at the desk
    pub async fn get_order(&self, order_id: &str) -> ClientResult<Order> {
        self.require_auth()?;
        self.http
            .get(&format!("/api/cashier/orders/{}", order_id))
            .await
    }

    /// Verify the order contents (`pending -> confirmed`)
    pub async fn verify_order(&self, order_id: &str) -> ClientResult<Order> {
        self.require_auth()?;
        self.http
            .post_empty(&format!("/api/cashier/orders/{}/verify", order_id))
            .await
    }

    /// Record payment (`pending|confirmed -> paid`)
    pub async fn mark_paid(&self, order_id: &str) -> ClientResult<Order> {
        self.require_auth()?;
        self.http
            .post_empty(&format!("/api/cashier/orders/{}/mark-paid", order_id))
            .await
    }

    /// Fulfillment complete (`paid -> ready`)
    pub async fn mark_ready(&self, order_id: &str) -> ClientResult<Order> {
        self.require_auth()?;
        self.http
            .post_empty(&format!("/api/cashier/orders/{}/ready", order_id))
            .await
    }

    /// Handed to the shopper (`ready -> delivered`)
    pub async fn mark_delivered(&self, order_id: &str) -> ClientResult<Order> {
        self.require_auth()?;
        self.http
            .post_empty(&format!("/api/cashier/orders/{}/deliver", order_id))
            .await
    }
}
