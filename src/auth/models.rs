//! Session and account models exchanged with the auth provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The signed-in account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    /// Present when the account has a username attached
    pub username: Option<String>,
}

/// One provider session. An account can hold several at once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: AuthUser,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Email/password sign-in payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInCredentials {
    pub email: String,
    pub password: String,
}

/// Sign-up payload. `additional_fields` carries caller-supplied fields the
/// provider accepts beyond the fixed ones; they pass through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpData {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default, flatten)]
    pub additional_fields: Map<String, Value>,
}

impl SignUpData {
    pub fn new(email: String, password: String, name: String) -> Self {
        Self {
            email,
            password,
            name,
            additional_fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.additional_fields.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_session_expiry() {
        let user = AuthUser {
            id: "u1".to_string(),
            email: "r@example.com".to_string(),
            username: None,
        };
        let live = AuthSession {
            token: "tok".to_string(),
            user: user.clone(),
            expires_at: Utc::now() + Duration::hours(1),
        };
        let dead = AuthSession {
            token: "tok".to_string(),
            user,
            expires_at: Utc::now() - Duration::hours(1),
        };
        assert!(!live.is_expired());
        assert!(dead.is_expired());
    }

    #[test]
    fn test_sign_up_additional_fields_flatten() {
        let data = SignUpData::new(
            "r@example.com".to_string(),
            "hunter2!".to_string(),
            "Recruiter".to_string(),
        )
        .with_field("company", Value::String("Hiredeck".to_string()));

        let json = serde_json::to_value(&data).unwrap();
        // Flattened to the top level, not nested
        assert_eq!(json["company"], Value::String("Hiredeck".to_string()));
        assert!(json.get("additional_fields").is_none());
    }
}
