use super::{DisplayTarget, MemoryElement};

/// Element that logs every change it receives.
///
/// Used by the binary, where the terminal log is the only surface.
#[derive(Debug)]
pub struct ConsoleElement {
    inner: MemoryElement,
}

impl ConsoleElement {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            inner: MemoryElement::new(id),
        }
    }
}

impl DisplayTarget for ConsoleElement {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn text(&self) -> String {
        self.inner.text()
    }

    fn set_text(&self, text: &str) {
        if self.inner.text() != text {
            tracing::info!(element = self.inner.id(), text, "Display updated");
        }
        self.inner.set_text(text);
    }

    fn is_visible(&self) -> bool {
        self.inner.is_visible()
    }

    fn set_visible(&self, visible: bool) {
        if self.inner.is_visible() != visible {
            tracing::info!(element = self.inner.id(), visible, "Visibility changed");
        }
        self.inner.set_visible(visible);
    }
}
