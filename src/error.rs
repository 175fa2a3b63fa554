/// Fixed label every transport failure is rendered behind.
pub const TRANSPORT_ERROR_LABEL: &str = "Error fetching sensor data: ";

/// Failure to obtain a parsed payload from the sensor-data endpoint.
///
/// Never propagated past a poll cycle: the renderer turns it into status text
/// and the next tick starts over.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("Network response was not ok")]
    Status(reqwest::StatusCode),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

impl TransportError {
    /// Status line as shown in the status field.
    #[must_use]
    pub fn rendered(&self) -> String {
        format!("{TRANSPORT_ERROR_LABEL}{self}")
    }
}

/// Backend-reported failure carried in the payload's `error` field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct DomainError(pub String);

#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

pub type PanelResult<T> = Result<T, PanelError>;
