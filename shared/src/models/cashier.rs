//! Cashier Models

use serde::{Deserialize, Serialize};

/// Cashier role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CashierRole {
    #[default]
    Cashier,
    Admin,
}

/// Cashier account (without password)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashierUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: CashierRole,
}

/// Login result: bearer token plus the authenticated user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashierSession {
    pub token: String,
    pub user: CashierUser,
}

/// Login request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashierLoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_deserializes_with_role() {
        let json = r#"{
            "token": "tok-abc",
            "user": { "id": "u1", "email": "ana@store.uy", "name": "Ana", "role": "admin" }
        }"#;
        let session: CashierSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.user.role, CashierRole::Admin);
        assert_eq!(session.token, "tok-abc");
    }
}
