use reqwest::Client;

use crate::config::Config;
use crate::error::{PanelResult, TransportError};
use crate::models::SensorReading;
use crate::panel::MediaEvent;

pub struct SensorClient {
    http_client: Client,
    sensor_data_url: String,
    video_feed_url: String,
}

impl SensorClient {
    /// Build the HTTP client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns `PanelError::Client` if the TLS backend cannot be initialised.
    pub fn new(config: &Config) -> PanelResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            sensor_data_url: config.sensor_data_url(),
            video_feed_url: config.video_feed_url(),
        })
    }

    #[must_use]
    pub fn sensor_data_url(&self) -> &str {
        &self.sensor_data_url
    }

    /// Fetch the current reading.
    ///
    /// A parsed body with an `error` field is still `Ok`; telling domain errors
    /// apart is left to the renderer.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Request` on network failure,
    /// `TransportError::Status` on any non-2xx status regardless of body, and
    /// `TransportError::Parse` if the body is not a JSON object.
    pub async fn get_sensor_data(&self) -> Result<SensorReading, TransportError> {
        let response = self.http_client.get(&self.sensor_data_url).send().await?;

        if !response.status().is_success() {
            return Err(TransportError::Status(response.status()));
        }

        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                body_preview = %text.chars().take(500).collect::<String>(),
                "Failed to parse sensor data response"
            );
            TransportError::Parse(e)
        })
    }

    /// Probe the video feed and report it as a media event.
    ///
    /// Only the status line is awaited; the stream body is never read.
    pub async fn probe_video_feed(&self) -> MediaEvent {
        match self.http_client.get(&self.video_feed_url).send().await {
            Ok(response) if response.status().is_success() => MediaEvent::Loaded,
            Ok(response) => {
                tracing::debug!(status = %response.status(), "Video feed returned error status");
                MediaEvent::Error
            }
            Err(e) => {
                tracing::debug!(error = %e, "Video feed request failed");
                MediaEvent::Error
            }
        }
    }
}
