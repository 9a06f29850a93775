use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /admin/login`.
///
/// Both `admin` and `token` are optional here so a half-filled success body
/// decodes and can be rejected explicitly instead of failing as malformed.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub admin: Option<Value>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Admin record echoed back by the login endpoint.
///
/// Kept opaque: the dashboard stores and re-persists it verbatim and only
/// peeks at a few display fields.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct AdminProfile(Value);

impl AdminProfile {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn id(&self) -> Option<&str> {
        self.field("_id").or_else(|| self.field("id"))
    }

    pub fn email(&self) -> Option<&str> {
        self.field("email")
    }

    /// Name if present, else email, else a generic label
    pub fn display_name(&self) -> &str {
        self.field("name")
            .or_else(|| self.email())
            .unwrap_or("Admin")
    }

    fn field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}
