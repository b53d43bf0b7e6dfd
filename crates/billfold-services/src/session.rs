//! Session identity.
//!
//! The submitting user is injected explicitly into each service; pipeline
//! logic never reaches into ambient session storage.

use serde::Deserialize;

/// Read-only identity of the connected user.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionContext {
    email: String,
    #[serde(rename = "type")]
    user_type: String,
}

impl SessionContext {
    pub fn new(email: impl Into<String>, user_type: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            user_type: user_type.into(),
        }
    }

    /// Parse the JSON session blob kept by the login flow, e.g.
    /// `{"type":"Employee","email":"employee@test.tld"}`.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn user_type(&self) -> &str {
        &self.user_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_parses_login_blob() {
        let session =
            SessionContext::from_json(r#"{"type":"Employee","email":"employee@test.tld"}"#)
                .unwrap();
        assert_eq!(session.email(), "employee@test.tld");
        assert_eq!(session.user_type(), "Employee");
    }

    #[test]
    fn test_session_rejects_malformed_blob() {
        assert!(SessionContext::from_json("not json").is_err());
        assert!(SessionContext::from_json(r#"{"email":"employee@test.tld"}"#).is_err());
    }
}
