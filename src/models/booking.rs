use serde::{Deserialize, Serialize};

use crate::models::de::loose_string;
use crate::models::Keyed;

/// Chauffeur-driven cab booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabBooking {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub car_type: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub car_model: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub pickup: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub drop: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub end_date: Option<String>,
}

/// Self-drive rental; the customer's licence number is recorded with it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfDriveBooking {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub car_type: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub car_model: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub license: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub created_at: Option<String>,
}

impl Keyed for CabBooking {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for SelfDriveBooking {
    fn key(&self) -> &str {
        &self.id
    }
}

/// "Mini - Alto" style label shared by both booking tables
pub fn car_label(car_type: Option<&str>, car_model: Option<&str>) -> String {
    match (car_type, car_model) {
        (Some(t), Some(m)) => format!("{} - {}", t, m),
        (Some(t), None) => t.to_string(),
        (None, Some(m)) => m.to_string(),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cab_booking_reads_camel_case() {
        let booking: CabBooking = serde_json::from_value(json!({
            "_id": "b1",
            "name": "Ravi",
            "carType": "Sedan",
            "carModel": "Dzire",
            "pickup": "Amritsar",
            "drop": "Jalandhar",
            "startDate": "2024-05-01T00:00:00.000Z",
            "endDate": "2024-05-03T00:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(booking.key(), "b1");
        assert_eq!(car_label(booking.car_type.as_deref(), booking.car_model.as_deref()), "Sedan - Dzire");
    }

    #[test]
    fn self_drive_duration_may_be_numeric() {
        let booking: SelfDriveBooking = serde_json::from_value(json!({
            "_id": "s1",
            "duration": 3,
            "license": "PB08-2019-0001234"
        }))
        .unwrap();
        assert_eq!(booking.duration.as_deref(), Some("3"));
        assert!(booking.created_at.is_none());
    }

    #[test]
    fn item_without_key_is_rejected() {
        let parsed = serde_json::from_value::<CabBooking>(json!({ "name": "no id" }));
        assert!(parsed.is_err());
    }
}
