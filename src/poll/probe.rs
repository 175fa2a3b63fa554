use tokio::time::interval;

use crate::common::AppState;
use crate::panel::MediaState;

/// Probe the video feed once and apply the result to the panel.
pub async fn probe_once(state: &AppState) -> MediaState {
    let event = state.client.probe_video_feed().await;
    state.panel.on_media_event(event)
}

/// Run the video feed probe.
///
/// Probes once at startup, then again on every interval tick if one is
/// configured.
pub async fn run_video_probe(state: AppState) {
    let Some(period) = state.config.video_probe_interval() else {
        tracing::info!("Probing video feed once");
        probe_once(&state).await;
        return;
    };

    tracing::info!(interval_secs = period.as_secs(), "Starting video feed probe");

    let mut ticker = interval(period);
    let mut last = None;

    loop {
        ticker.tick().await;

        let media = probe_once(&state).await;
        if last != Some(media) {
            tracing::debug!(?media, "Video feed state changed");
        }
        last = Some(media);
    }
}
