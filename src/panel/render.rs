use crate::error::{DomainError, TransportError};
use crate::models::{SensorReading, display_value};
use crate::schema::NOT_AVAILABLE;

use super::Panel;

/// What the status field currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusState {
    #[default]
    Unknown,
    ShowingData,
    ShowingDomainError,
    ShowingTransportError,
}

impl Panel {
    /// Render the result of one poll cycle.
    ///
    /// A parsed payload carrying an `error` field is rendered as a domain error,
    /// anything else parsed is rendered as data.
    pub fn render(&self, outcome: &Result<SensorReading, TransportError>) -> StatusState {
        match outcome {
            Ok(reading) => match reading.error() {
                Some(err) => self.render_domain_error(&err),
                None => self.render_reading(reading),
            },
            Err(err) => self.render_transport_error(err),
        }
    }

    /// Clear the status indicator and write every schema field.
    ///
    /// Fields absent from the payload show [`NOT_AVAILABLE`].
    pub fn render_reading(&self, reading: &SensorReading) -> StatusState {
        let summary: Vec<String> = self
            .schema
            .summary_fields()
            .map(|field| format!("{}: {}", field.label, field_text(reading, field.key)))
            .collect();
        self.set_status(&summary.join("\n"));

        for (field, target) in &self.sensors {
            target.set_text(&field_text(reading, field.key));
        }

        tracing::debug!(schema = self.schema.name(), "Rendered sensor reading");
        self.transition(StatusState::ShowingData)
    }

    /// Show the backend error in the status field and reset every sensor field.
    pub fn render_domain_error(&self, err: &DomainError) -> StatusState {
        self.set_status(&err.0);
        for (_, target) in &self.sensors {
            target.set_text(NOT_AVAILABLE);
        }

        tracing::warn!(error = %err, "Backend reported sensor error");
        self.transition(StatusState::ShowingDomainError)
    }

    /// Show the labelled failure description in the status field.
    ///
    /// Sensor fields keep their last rendered values.
    pub fn render_transport_error(&self, err: &TransportError) -> StatusState {
        self.set_status(&err.rendered());

        tracing::error!(error = %err, "Error fetching sensor data");
        self.transition(StatusState::ShowingTransportError)
    }

    fn set_status(&self, text: &str) {
        if let Some(status) = &self.status {
            status.set_text(text);
        }
    }

    fn transition(&self, next: StatusState) -> StatusState {
        let mut state = self.lock_state();
        if state.status != next {
            tracing::debug!(from = ?state.status, to = ?next, "Status state changed");
        }
        state.status = next;
        next
    }
}

fn field_text(reading: &SensorReading, key: &str) -> String {
    reading
        .get(key)
        .map_or_else(|| NOT_AVAILABLE.to_string(), display_value)
}
