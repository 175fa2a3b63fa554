use std::env;
use std::time::Duration;

use crate::schema::Schema;

#[derive(Debug, Clone)]
pub struct Config {
    // Sensor backend
    pub base_url: String,
    pub sensor_data_path: String,
    pub video_feed_path: String,
    pub request_timeout_seconds: u64,

    // Polling
    pub poll_interval_ms: u64,
    pub discard_stale_responses: bool,
    pub video_probe_interval_seconds: u64,

    // Rendering
    pub schema: Schema,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            sensor_data_path: "/sensor_data".to_string(),
            video_feed_path: "/video_feed".to_string(),
            request_timeout_seconds: 0,
            poll_interval_ms: 5000,
            discard_stale_responses: false,
            video_probe_interval_seconds: 0,
            schema: Schema::KeyValue,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `SENSOR_SCHEMA` names an unknown schema.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let schema_name = env::var("SENSOR_SCHEMA").unwrap_or_else(|_| "key_value".to_string());
        let schema = Schema::from_name(&schema_name).ok_or(ConfigError::Invalid {
            var: "SENSOR_SCHEMA",
            value: schema_name,
        })?;

        Ok(Self {
            // Sensor backend
            base_url: env::var("SENSOR_PANEL_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string())
                .trim_end_matches('/')
                .to_string(),
            sensor_data_path: env::var("SENSOR_DATA_PATH")
                .unwrap_or_else(|_| "/sensor_data".to_string()),
            video_feed_path: env::var("VIDEO_FEED_PATH")
                .unwrap_or_else(|_| "/video_feed".to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap_or(0),

            // Polling
            poll_interval_ms: env::var("POLL_INTERVAL_MS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
            discard_stale_responses: env::var("DISCARD_STALE_RESPONSES")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            video_probe_interval_seconds: env::var("VIDEO_PROBE_INTERVAL_SECONDS")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap_or(0),

            // Rendering
            schema,
        })
    }

    #[must_use]
    pub fn sensor_data_url(&self) -> String {
        format!("{}{}", self.base_url, self.sensor_data_path)
    }

    #[must_use]
    pub fn video_feed_url(&self) -> String {
        format!("{}{}", self.base_url, self.video_feed_path)
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    /// `None` when requests may hang indefinitely.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_seconds > 0).then(|| Duration::from_secs(self.request_timeout_seconds))
    }

    /// `None` when the video feed is probed only once at startup.
    #[must_use]
    pub fn video_probe_interval(&self) -> Option<Duration> {
        (self.video_probe_interval_seconds > 0)
            .then(|| Duration::from_secs(self.video_probe_interval_seconds))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}
