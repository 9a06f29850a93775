use serde::Deserialize;
use thiserror::Error;

/// Failure of one backend call.
///
/// Every variant is recoverable: the dashboard logs it, alerts, and stays
/// interactive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request could not be built, sent, or its body read
    #[error("Network error: {0}")]
    Network(String),

    /// Credentials rejected (401/403)
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("credentials rejected"))]
    Unauthorized { status: u16, message: Option<String> },

    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    /// Response arrived but did not have the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Classifies a non-2xx response, lifting `{ "message": ... }` out of the body
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());

        match status {
            401 | 403 => ApiError::Unauthorized { status, message },
            _ => ApiError::Server { status, message },
        }
    }

    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Server-provided message if any, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized { message: Some(m), .. } | ApiError::Server { message: Some(m), .. } => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_lifted_from_json_body() {
        let err = ApiError::from_status(400, r#"{"message":"Name is required"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                message: Some("Name is required".into())
            }
        );
        assert_eq!(err.user_message("Failed to save car"), "Name is required");
    }

    #[test]
    fn non_json_body_falls_back() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.user_message("Failed to fetch cars"), "Failed to fetch cars");
        assert_eq!(err.to_string(), "HTTP 502: no message");
    }

    #[test]
    fn auth_codes_are_classified() {
        assert!(ApiError::from_status(401, "").is_auth_rejection());
        assert!(ApiError::from_status(403, r#"{"message":"Not an admin"}"#).is_auth_rejection());
        assert!(!ApiError::from_status(404, "").is_auth_rejection());
        assert!(!ApiError::Network("offline".into()).is_auth_rejection());
    }

    #[test]
    fn transport_errors_never_leak_into_user_message() {
        let err = ApiError::Malformed("expected an array, got object".into());
        assert_eq!(err.user_message("Failed to fetch users"), "Failed to fetch users");
    }
}
