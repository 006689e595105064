//! Session data structures

use serde::{Deserialize, Serialize};

/// Account role as issued by the authentication service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_USER", alias = "STANDARD")]
    Standard,
    #[serde(rename = "ROLE_ADMIN", alias = "ADMIN")]
    Admin,
}

impl Role {
    /// Parse a stored role literal. Anything unrecognised is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ROLE_USER" | "STANDARD" => Some(Role::Standard),
            "ROLE_ADMIN" | "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Standard => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubscriptionStatus {
    /// Registered, payment not confirmed
    #[default]
    Pending,
    /// Payment confirmed
    Paid,
}

impl SubscriptionStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(SubscriptionStatus::Pending),
            "PAID" => Some(SubscriptionStatus::Paid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Pending => "PENDING",
            SubscriptionStatus::Paid => "PAID",
        }
    }
}

/// Body returned by the login and registration endpoints.
///
/// Older server builds name the status `accountStatus`; newer ones use
/// `subscriptionStatus`. Both are optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_status: Option<String>,
}

impl AuthResponse {
    pub fn new(
        token: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            subscription_status: None,
            account_status: None,
        }
    }

    pub fn with_subscription_status(mut self, status: impl Into<String>) -> Self {
        self.subscription_status = Some(status.into());
        self
    }

    pub fn with_account_status(mut self, status: impl Into<String>) -> Self {
        self.account_status = Some(status.into());
        self
    }

    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Look up a status field by its wire name.
    pub fn status_field(&self, wire_name: &str) -> Option<&str> {
        match wire_name {
            "subscriptionStatus" => self.subscription_status.as_deref(),
            "accountStatus" => self.account_status.as_deref(),
            _ => None,
        }
    }
}

/// The persisted identity of the signed-in user on this device.
///
/// Fields hold the stored strings verbatim; absent entries are empty. Typed
/// accessors return `None` for values they don't recognise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub token: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

impl SessionRecord {
    /// A non-empty token is the only signal of authentication.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    pub fn subscription(&self) -> Option<SubscriptionStatus> {
        SubscriptionStatus::parse(&self.status)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn is_paid(&self) -> bool {
        self.subscription() == Some(SubscriptionStatus::Paid)
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_aliases() {
        assert_eq!(Role::parse("ROLE_ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("ROLE_USER"), Some(Role::Standard));
        assert_eq!(Role::parse("STANDARD"), Some(Role::Standard));
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_status_parse_is_exact() {
        assert_eq!(SubscriptionStatus::parse("PAID"), Some(SubscriptionStatus::Paid));
        assert_eq!(
            SubscriptionStatus::parse("PENDING"),
            Some(SubscriptionStatus::Pending)
        );
        assert_eq!(SubscriptionStatus::parse("paid"), None);
        assert_eq!(SubscriptionStatus::parse(" PAID"), None);
    }

    #[test]
    fn test_auth_response_json() {
        let response = AuthResponse::from_json(
            r#"{"token":"jwt","name":"Asha","email":"asha@example.com","role":"ROLE_USER","accountStatus":"PAID"}"#,
        )
        .unwrap();

        assert_eq!(response.token, "jwt");
        assert_eq!(response.subscription_status, None);
        assert_eq!(response.status_field("accountStatus"), Some("PAID"));
        assert_eq!(response.status_field("unknown"), None);

        // Explicit null is the same as absent
        let response = AuthResponse::from_json(
            r#"{"token":"jwt","name":"A","email":"a@b.c","role":"ROLE_USER","subscriptionStatus":null}"#,
        )
        .unwrap();
        assert_eq!(response.subscription_status, None);
    }

    #[test]
    fn test_auth_response_requires_token() {
        assert!(AuthResponse::from_json(r#"{"name":"A","email":"a@b.c","role":"ROLE_USER"}"#)
            .is_err());
    }

    #[test]
    fn test_record_accessors() {
        let record = SessionRecord {
            token: "t".to_string(),
            role: "garbled".to_string(),
            status: "PAID".to_string(),
            ..Default::default()
        };

        assert!(record.is_authenticated());
        assert!(!record.is_admin());
        assert!(record.is_paid());
        assert_eq!(record.bearer(), "Bearer t");
        assert!(!SessionRecord::default().is_authenticated());
    }
}
