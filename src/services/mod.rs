pub mod api_client;
pub mod error;
pub mod routes;

pub use api_client::{AdminApi, HttpApiClient, SubmitMethod};
pub use error::ApiError;
