use chrono::{DateTime, Utc};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::DisplayTarget;

#[derive(Debug)]
struct ElementState {
    text: String,
    visible: bool,
    updated_at: Option<DateTime<Utc>>,
}

/// Element backed by process memory. Starts empty and visible.
#[derive(Debug)]
pub struct MemoryElement {
    id: String,
    state: Mutex<ElementState>,
}

impl MemoryElement {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: Mutex::new(ElementState {
                text: String::new(),
                visible: true,
                updated_at: None,
            }),
        }
    }

    /// Time of the last text write, `None` if never written.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.lock().updated_at
    }

    fn lock(&self) -> MutexGuard<'_, ElementState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DisplayTarget for MemoryElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn text(&self) -> String {
        self.lock().text.clone()
    }

    fn set_text(&self, text: &str) {
        let mut state = self.lock();
        text.clone_into(&mut state.text);
        state.updated_at = Some(Utc::now());
    }

    fn is_visible(&self) -> bool {
        self.lock().visible
    }

    fn set_visible(&self, visible: bool) {
        self.lock().visible = visible;
    }
}
