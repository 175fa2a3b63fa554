use crate::common::AppState;
use crate::panel::StatusState;

/// Run one poll cycle: fetch, then render whatever came back.
///
/// Failures never escape; they end up as status text. Returns `None` when the
/// stale guard dropped the result.
pub async fn poll_once(state: &AppState) -> Option<StatusState> {
    let ticket = state.panel.begin_cycle();
    tracing::debug!(cycle = ticket.0, url = state.client.sensor_data_url(), "Polling sensor data");

    let outcome = state.client.get_sensor_data().await;
    if let Ok(reading) = &outcome {
        tracing::debug!(cycle = ticket.0, data = ?reading.fields, "Received data from backend");
    }

    state.panel.complete_cycle(ticket, &outcome)
}
