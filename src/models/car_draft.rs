use std::fmt;

use thiserror::Error;

use crate::models::car::Car;
use crate::utils::CAR_IMAGES_FIELD;

// ============================================================================
// CAR DRAFT - editable copy of a vehicle listing
// ============================================================================

/// Scalar car attributes, named as the backend's multipart fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarField {
    Type,
    Model,
    Name,
    BodyType,
    Fuel,
    Seats,
    Transmission,
    Engine,
    Mileage,
    PricePerKm,
    PricePerHour,
    PricePerDay,
    FullDetails,
    Available,
}

impl CarField {
    /// Submission order of the multipart body
    pub const ALL: [CarField; 14] = [
        CarField::Type,
        CarField::Model,
        CarField::Name,
        CarField::BodyType,
        CarField::Fuel,
        CarField::Seats,
        CarField::Transmission,
        CarField::Engine,
        CarField::Mileage,
        CarField::PricePerKm,
        CarField::PricePerHour,
        CarField::PricePerDay,
        CarField::FullDetails,
        CarField::Available,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CarField::Type => "type",
            CarField::Model => "model",
            CarField::Name => "name",
            CarField::BodyType => "bodyType",
            CarField::Fuel => "fuel",
            CarField::Seats => "seats",
            CarField::Transmission => "transmission",
            CarField::Engine => "engine",
            CarField::Mileage => "mileage",
            CarField::PricePerKm => "pricePerKm",
            CarField::PricePerHour => "pricePerHour",
            CarField::PricePerDay => "pricePerDay",
            CarField::FullDetails => "fullDetails",
            CarField::Available => "available",
        }
    }
}

impl fmt::Display for CarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw input coming from a form widget
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("field `{field}` expects a {expected} value")]
    TypeMismatch {
        field: CarField,
        expected: &'static str,
    },
}

/// Image picked in the file input, already read into memory
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Transport-neutral multipart body: every scalar field as text plus the
/// image files, all sharing one field name.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartPayload {
    pub fields: Vec<(&'static str, String)>,
    pub files: Vec<ImageUpload>,
}

impl MultipartPayload {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn file_field(&self) -> &'static str {
        CAR_IMAGES_FIELD
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarDraft {
    pub car_type: String,
    pub model: String,
    pub name: String,
    pub body_type: String,
    pub fuel: String,
    pub seats: String,
    pub transmission: String,
    pub engine: String,
    pub mileage: String,
    pub price_per_km: String,
    pub price_per_hour: String,
    pub price_per_day: String,
    pub full_details: String,
    pub available: bool,
    pub images: Vec<ImageUpload>,
}

impl Default for CarDraft {
    fn default() -> Self {
        Self {
            car_type: String::new(),
            model: String::new(),
            name: String::new(),
            body_type: String::new(),
            fuel: String::new(),
            seats: String::new(),
            transmission: String::new(),
            engine: String::new(),
            mileage: String::new(),
            price_per_km: String::new(),
            price_per_hour: String::new(),
            price_per_day: String::new(),
            full_details: String::new(),
            available: true,
            images: Vec::new(),
        }
    }
}

impl CarDraft {
    /// Seeds a draft from a stored listing; stored images are not carried over
    pub fn from_car(car: &Car) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            car_type: text(&car.car_type),
            model: text(&car.model),
            name: text(&car.name),
            body_type: text(&car.body_type),
            fuel: text(&car.fuel),
            seats: text(&car.seats),
            transmission: text(&car.transmission),
            engine: text(&car.engine),
            mileage: text(&car.mileage),
            price_per_km: text(&car.price_per_km),
            price_per_hour: text(&car.price_per_hour),
            price_per_day: text(&car.price_per_day),
            full_details: text(&car.full_details),
            available: car.available.unwrap_or(true),
            images: Vec::new(),
        }
    }

    pub fn text(&self, field: CarField) -> Option<&str> {
        let value = match field {
            CarField::Type => &self.car_type,
            CarField::Model => &self.model,
            CarField::Name => &self.name,
            CarField::BodyType => &self.body_type,
            CarField::Fuel => &self.fuel,
            CarField::Seats => &self.seats,
            CarField::Transmission => &self.transmission,
            CarField::Engine => &self.engine,
            CarField::Mileage => &self.mileage,
            CarField::PricePerKm => &self.price_per_km,
            CarField::PricePerHour => &self.price_per_hour,
            CarField::PricePerDay => &self.price_per_day,
            CarField::FullDetails => &self.full_details,
            CarField::Available => return None,
        };
        Some(value.as_str())
    }

    fn text_mut(&mut self, field: CarField) -> Option<&mut String> {
        let value = match field {
            CarField::Type => &mut self.car_type,
            CarField::Model => &mut self.model,
            CarField::Name => &mut self.name,
            CarField::BodyType => &mut self.body_type,
            CarField::Fuel => &mut self.fuel,
            CarField::Seats => &mut self.seats,
            CarField::Transmission => &mut self.transmission,
            CarField::Engine => &mut self.engine,
            CarField::Mileage => &mut self.mileage,
            CarField::PricePerKm => &mut self.price_per_km,
            CarField::PricePerHour => &mut self.price_per_hour,
            CarField::PricePerDay => &mut self.price_per_day,
            CarField::FullDetails => &mut self.full_details,
            CarField::Available => return None,
        };
        Some(value)
    }

    /// Stores raw widget input; no coercion or range checks
    pub fn set(&mut self, field: CarField, value: FieldValue) -> Result<(), DraftError> {
        match (field, value) {
            (CarField::Available, FieldValue::Flag(flag)) => {
                self.available = flag;
                Ok(())
            }
            (CarField::Available, FieldValue::Text(_)) => Err(DraftError::TypeMismatch {
                field,
                expected: "boolean",
            }),
            (_, FieldValue::Flag(_)) => Err(DraftError::TypeMismatch {
                field,
                expected: "text",
            }),
            (_, FieldValue::Text(text)) => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = text;
                }
                Ok(())
            }
        }
    }

    /// Full body for create and update alike; images go last
    pub fn to_multipart(&self) -> MultipartPayload {
        let fields = CarField::ALL
            .into_iter()
            .map(|field| {
                let value = match self.text(field) {
                    Some(text) => text.to_string(),
                    None => self.available.to_string(),
                };
                (field.name(), value)
            })
            .collect();

        MultipartPayload {
            fields,
            files: self.images.clone(),
        }
    }
}

/// Whether a submission creates a listing or updates an existing one
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormTarget {
    #[default]
    Create,
    Edit { car_id: String },
}

/// Car form state: identity of the edited car kept apart from the field values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarForm {
    pub target: FormTarget,
    pub draft: CarDraft,
}

impl CarForm {
    pub fn editing(car: &Car) -> Self {
        Self {
            target: FormTarget::Edit {
                car_id: car.id.clone(),
            },
            draft: CarDraft::from_car(car),
        }
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.target {
            FormTarget::Edit { car_id } => Some(car_id),
            FormTarget::Create => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }
}
