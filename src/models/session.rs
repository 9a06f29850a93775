use crate::models::auth::{AdminProfile, LoginResponse};

/// Authenticated admin session.
///
/// Profile and token only exist together; an absent session is `None` at the
/// holder, never a half-filled value.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    admin: AdminProfile,
    token: String,
}

impl Session {
    /// Returns `None` for a blank token
    pub fn new(admin: AdminProfile, token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return None;
        }
        Some(Self { admin, token })
    }

    /// Accepts a login body only when it carries both the profile and a token
    pub fn from_login(response: LoginResponse) -> Option<Self> {
        let admin = response.admin.filter(|a| !a.is_null())?;
        Self::new(AdminProfile::new(admin), response.token?)
    }

    pub fn admin(&self) -> &AdminProfile {
        &self.admin
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_without_token_is_rejected() {
        let response = LoginResponse {
            admin: Some(json!({ "_id": "a1" })),
            token: None,
            message: None,
        };
        assert!(Session::from_login(response).is_none());
    }

    #[test]
    fn login_without_admin_is_rejected() {
        let response = LoginResponse {
            admin: Some(serde_json::Value::Null),
            token: Some("tok".into()),
            message: None,
        };
        assert!(Session::from_login(response).is_none());
    }

    #[test]
    fn blank_token_is_rejected() {
        assert!(Session::new(AdminProfile::new(json!({})), "   ").is_none());
    }

    #[test]
    fn complete_login_builds_session() {
        let response = LoginResponse {
            admin: Some(json!({ "_id": "a1", "email": "admin@admin.com" })),
            token: Some("jwt-abc".into()),
            message: None,
        };
        let session = Session::from_login(response).unwrap();
        assert_eq!(session.token(), "jwt-abc");
        assert_eq!(session.admin().id(), Some("a1"));
    }
}
