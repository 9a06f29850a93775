pub mod auth;
pub mod booking;
pub mod car;
pub mod car_draft;
pub mod de;
pub mod session;
pub mod user;

pub use auth::{AdminProfile, LoginRequest, LoginResponse};
pub use booking::{CabBooking, SelfDriveBooking};
pub use car::Car;
pub use car_draft::{CarDraft, CarField, CarForm, DraftError, FieldValue, FormTarget, ImageUpload, MultipartPayload};
pub use session::Session;
pub use user::User;

/// Records rendered as list rows: each carries the server id used as the
/// row key and as the target of deletions.
pub trait Keyed {
    fn key(&self) -> &str;
}
