//! The sensor panel: display handles resolved once, plus render and media logic.
//!
//! # Ordering
//!
//! Poll cycles run concurrently and render in completion order, so a slow
//! response can overwrite a newer one. [`Panel::with_stale_guard`] enables a
//! sequence check that drops such late results instead.

mod media;
mod render;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub use media::{MediaEvent, MediaState};
pub use render::StatusState;

use crate::dom::{Page, TargetHandle};
use crate::error::TransportError;
use crate::models::SensorReading;
use crate::schema::{FieldBinding, PLACEHOLDER_TARGET, STATUS_TARGET, Schema, VIDEO_TARGET};

/// Sequence number handed to a poll cycle when it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CycleTicket(pub u64);

#[derive(Debug, Default)]
struct PanelState {
    status: StatusState,
    media: MediaState,
    last_rendered: Option<u64>,
}

pub struct Panel {
    schema: Schema,
    status: Option<TargetHandle>,
    sensors: Vec<(FieldBinding, TargetHandle)>,
    video: Option<TargetHandle>,
    placeholder: Option<TargetHandle>,
    discard_stale: bool,
    next_ticket: AtomicU64,
    state: Mutex<PanelState>,
    // Held across the stale check and the render it admits.
    render_lock: Mutex<()>,
}

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panel")
            .field("schema", &self.schema)
            .field("status", &self.status.is_some())
            .field("sensors", &self.sensors.len())
            .field("video", &self.video.is_some())
            .field("placeholder", &self.placeholder.is_some())
            .field("discard_stale", &self.discard_stale)
            .finish_non_exhaustive()
    }
}

impl Panel {
    /// Resolve every target the schema needs and hide the placeholder.
    ///
    /// Missing elements are logged and then skipped on every update.
    pub fn bind(page: &impl Page, schema: Schema) -> Self {
        let resolve = |id: &str| {
            let element = page.element(id);
            if element.is_none() {
                tracing::warn!(element = id, "Display element not found, updates will be skipped");
            }
            element
        };

        let sensors = schema
            .sensor_fields()
            .filter_map(|(field, target)| resolve(target).map(|handle| (*field, handle)))
            .collect();

        let panel = Self {
            schema,
            status: resolve(STATUS_TARGET),
            sensors,
            video: resolve(VIDEO_TARGET),
            placeholder: resolve(PLACEHOLDER_TARGET),
            discard_stale: false,
            next_ticket: AtomicU64::new(0),
            state: Mutex::new(PanelState::default()),
            render_lock: Mutex::new(()),
        };

        if let Some(placeholder) = &panel.placeholder {
            placeholder.set_visible(false);
        }

        tracing::debug!(?panel, "Panel bound");
        panel
    }

    /// Drop cycle results older than the last rendered one.
    #[must_use]
    pub fn with_stale_guard(mut self, enabled: bool) -> Self {
        self.discard_stale = enabled;
        self
    }

    #[must_use]
    pub fn schema(&self) -> Schema {
        self.schema
    }

    #[must_use]
    pub fn status_state(&self) -> StatusState {
        self.lock_state().status
    }

    #[must_use]
    pub fn media_state(&self) -> MediaState {
        self.lock_state().media
    }

    /// Start a poll cycle.
    pub fn begin_cycle(&self) -> CycleTicket {
        CycleTicket(self.next_ticket.fetch_add(1, Ordering::Relaxed))
    }

    /// Render a finished cycle.
    ///
    /// Returns `None` when the stale guard dropped the result.
    pub fn complete_cycle(
        &self,
        ticket: CycleTicket,
        outcome: &Result<SensorReading, TransportError>,
    ) -> Option<StatusState> {
        let _render = self.render_lock.lock().unwrap_or_else(PoisonError::into_inner);
        {
            let mut state = self.lock_state();
            if self.discard_stale && state.last_rendered.is_some_and(|last| ticket.0 < last) {
                tracing::debug!(
                    cycle = ticket.0,
                    last_rendered = state.last_rendered,
                    "Dropping stale poll result"
                );
                return None;
            }
            state.last_rendered = Some(ticket.0);
        }
        Some(self.render(outcome))
    }

    /// Apply a media load or error event to the video and placeholder elements.
    pub fn on_media_event(&self, event: MediaEvent) -> MediaState {
        let (video_visible, placeholder_visible) = event.visibility();
        match event {
            MediaEvent::Loaded => tracing::info!("Video feed loaded successfully"),
            MediaEvent::Error => tracing::warn!("Video feed error detected"),
        }

        // Both writes happen under the state lock so concurrent events never
        // leave video and placeholder visible together.
        let mut state = self.lock_state();
        if let Some(video) = &self.video {
            video.set_visible(video_visible);
        }
        if let Some(placeholder) = &self.placeholder {
            placeholder.set_visible(placeholder_visible);
        }

        state.media = event.resulting_state();
        state.media
    }

    fn lock_state(&self) -> MutexGuard<'_, PanelState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
