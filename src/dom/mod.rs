//! Display targets and the page registry they are looked up in.
//!
//! A [`Page`] owns its elements; the panel only keeps shared handles to the
//! ones it resolved at bind time.

mod console;
mod element;

use std::collections::HashMap;
use std::sync::Arc;

pub use console::ConsoleElement;
pub use element::MemoryElement;

/// A text-bearing UI slot.
pub trait DisplayTarget: Send + Sync {
    fn id(&self) -> &str;

    fn text(&self) -> String;

    fn set_text(&self, text: &str);

    fn is_visible(&self) -> bool;

    fn set_visible(&self, visible: bool);
}

pub type TargetHandle = Arc<dyn DisplayTarget>;

/// Registry of elements addressable by stable identifier.
pub trait Page {
    fn element(&self, id: &str) -> Option<TargetHandle>;
}

/// In-process page holding a fixed set of elements.
#[derive(Default, Clone)]
pub struct Document {
    elements: HashMap<String, TargetHandle>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document with one [`MemoryElement`] per id.
    #[must_use]
    pub fn with_memory_elements(ids: &[&str]) -> Self {
        let mut doc = Self::new();
        for id in ids {
            doc.insert(Arc::new(MemoryElement::new(*id)));
        }
        doc
    }

    /// Document with one [`ConsoleElement`] per id.
    #[must_use]
    pub fn with_console_elements(ids: &[&str]) -> Self {
        let mut doc = Self::new();
        for id in ids {
            doc.insert(Arc::new(ConsoleElement::new(*id)));
        }
        doc
    }

    /// Adds an element, replacing any element with the same id.
    pub fn insert(&mut self, element: TargetHandle) {
        self.elements.insert(element.id().to_string(), element);
    }

    pub fn remove(&mut self, id: &str) -> Option<TargetHandle> {
        self.elements.remove(id)
    }

    /// Current text of an element, `None` if it does not exist.
    #[must_use]
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|e| e.text())
    }

    #[must_use]
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.elements.get(id).map(|e| e.is_visible())
    }
}

impl Page for Document {
    fn element(&self, id: &str) -> Option<TargetHandle> {
        self.elements.get(id).cloned()
    }
}
