use std::env;
use std::path::PathBuf;

use tracing::info;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Dataset
    pub data_path: PathBuf,
    pub data_url: Option<String>,

    // Geocoding
    pub nominatim_url: String,
    pub nominatim_user_agent: String,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if a value is malformed.
    pub fn from_env() -> Self {
        Self {
            data_path: env::var("ROADWATCH_DATA_PATH")
                .unwrap_or_else(|_| "data/roads.json".to_string())
                .into(),
            data_url: env::var("ROADWATCH_DATA_URL").ok().filter(|s| !s.is_empty()),
            nominatim_url: env::var("NOMINATIM_URL")
                .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string()),
            nominatim_user_agent: env::var("NOMINATIM_USER_AGENT")
                .unwrap_or_else(|_| "roadwatch/0.1".to_string()),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
        }
    }

    /// Log the effective configuration.
    pub fn log_summary(&self) {
        info!(
            data_path = %self.data_path.display(),
            data_url = self.data_url.as_deref().unwrap_or("-"),
            nominatim_url = self.nominatim_url.as_str(),
            web_host = self.web_host.as_str(),
            web_port = self.web_port,
            "Configuration loaded"
        );
    }
}
