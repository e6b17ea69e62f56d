//! Header toggle button.

use sitenav_dom::{Document, ElementId};
use sitenav_types::{Label, Locale, text};

use crate::Key;

/// `id` of the drawer panel, referenced by the toggle's `aria-controls`.
pub const PANEL_DOM_ID: &str = "mobile-nav-panel";

#[derive(Debug, Clone, Copy)]
pub struct ToggleControl {
    button: ElementId,
}

impl ToggleControl {
    #[must_use]
    pub fn new(button: ElementId) -> Self {
        Self { button }
    }

    #[must_use]
    pub fn element(&self) -> ElementId {
        self.button
    }

    /// Enter and Space activate the toggle while it has focus.
    #[must_use]
    pub fn is_activation_key(key: Key) -> bool {
        matches!(key, Key::Enter | Key::Space)
    }

    pub fn render(&self, doc: &mut Document, open: bool, locale: Locale) {
        let label = if open {
            text(Label::CloseMenu, locale)
        } else {
            text(Label::OpenMenu, locale)
        };
        doc.set_attribute(self.button, "aria-expanded", if open { "true" } else { "false" });
        doc.set_attribute(self.button, "aria-controls", PANEL_DOM_ID);
        doc.set_attribute(self.button, "aria-label", label);
    }
}

/// Dialog semantics exist only while open; a closed panel is hidden and inert.
pub fn render_panel(doc: &mut Document, panel: ElementId, open: bool) {
    if open {
        doc.set_attribute(panel, "role", "dialog");
        doc.set_attribute(panel, "aria-modal", "true");
        doc.set_attribute(panel, "aria-hidden", "false");
        doc.toggle_attribute(panel, "inert", false);
    } else {
        doc.remove_attribute(panel, "role");
        doc.remove_attribute(panel, "aria-modal");
        doc.set_attribute(panel, "aria-hidden", "true");
        doc.toggle_attribute(panel, "inert", true);
    }
}

pub fn render_overlay(doc: &mut Document, overlay: ElementId, open: bool) {
    doc.set_attribute(overlay, "data-state", if open { "open" } else { "closed" });
    doc.set_attribute(overlay, "aria-hidden", "true");
}
