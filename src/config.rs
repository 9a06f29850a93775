use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_UPLOADS_BASE_URL: &str = "/uploads";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    pub api_base_url: String,
    pub uploads_base_url: String,
    pub enable_logging: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            uploads_base_url: DEFAULT_UPLOADS_BASE_URL.to_string(),
            enable_logging: true,
        }
    }
}

impl AdminConfig {
    /// Loads the configuration baked in at compile time (see build.rs)
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("UPLOADS_BASE_URL"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        uploads_base_url: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        Self {
            api_base_url: api_base_url
                .unwrap_or(DEFAULT_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            uploads_base_url: uploads_base_url
                .unwrap_or(DEFAULT_UPLOADS_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            enable_logging: enable_logging
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
    }

    /// Level handed to wasm_logger at start-up
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }

    /// Public URL of a stored car image
    pub fn upload_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.uploads_base_url, file_name.trim_start_matches('/'))
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AdminConfig = AdminConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = AdminConfig::from_values(None, None, None);
        assert_eq!(config, AdminConfig::default());
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = AdminConfig::from_values(
            Some("https://api.singhcab.in/api/"),
            Some("https://cdn.singhcab.in/uploads/"),
            Some("false"),
        );
        assert_eq!(config.api_base_url, "https://api.singhcab.in/api");
        assert_eq!(config.upload_url("/car-1.jpg"), "https://cdn.singhcab.in/uploads/car-1.jpg");
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn unparseable_logging_flag_keeps_logging_on() {
        let config = AdminConfig::from_values(None, None, Some("maybe"));
        assert!(config.enable_logging);
    }
}
