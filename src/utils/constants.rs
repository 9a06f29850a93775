/// Storage slot holding the JSON-encoded admin profile
pub const ADMIN_PROFILE_KEY: &str = "admin";

/// Storage slot holding the raw bearer token
pub const ADMIN_TOKEN_KEY: &str = "adminToken";

/// Field name shared by every uploaded car image in the multipart body
pub const CAR_IMAGES_FIELD: &str = "images";

/// Car categories offered by the form's type selector
pub const CAR_TYPES: [&str; 3] = ["Mini", "Sedan", "SUV"];

/// Shown for optional car attributes the server did not send
pub const MISSING_VALUE: &str = "N/A";

pub const DEFAULT_CREDENTIALS_HINT: &str = "Default credentials: admin@admin.com / admin123";
