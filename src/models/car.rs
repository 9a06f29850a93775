use serde::{Deserialize, Serialize};

use crate::models::de::{loose_bool, loose_list, loose_string};
use crate::models::Keyed;

/// Vehicle listing as stored by the backend.
///
/// Numeric attributes (seats, prices) are kept as text: the edit form works on
/// raw input strings and the backend accepts either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "loose_string")]
    pub car_type: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub body_type: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub fuel: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub seats: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub transmission: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub engine: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub mileage: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub price_per_km: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub price_per_hour: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub price_per_day: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub full_details: Option<String>,
    #[serde(default, deserialize_with = "loose_bool")]
    pub available: Option<bool>,
    /// Stored file names under the uploads prefix
    #[serde(default, deserialize_with = "loose_list")]
    pub images: Vec<String>,
}

impl Car {
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

impl Keyed for Car {
    fn key(&self) -> &str {
        &self.id
    }
}
