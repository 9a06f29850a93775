use serde::{Deserialize, Serialize};

use crate::models::de::loose_string;
use crate::models::Keyed;

/// Registered customer account, as listed by `GET /admin/users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub email: Option<String>,
}

impl Keyed for User {
    fn key(&self) -> &str {
        &self.id
    }
}
