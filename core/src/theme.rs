//! Theme toggle button, kept in sync with the root `data-theme` attribute.

use sitenav_dom::{Document, ElementId, ObserverId};
use sitenav_types::{Label, Locale, ThemeMode, text};

pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Glyph name a front end maps to its icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    /// Shown while dark: activating switches to light.
    Sun,
    Moon,
}

impl ThemeIcon {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeIcon::Sun => "sun",
            ThemeIcon::Moon => "moon",
        }
    }
}

#[derive(Debug)]
pub struct ThemeToggle {
    button: ElementId,
    root: ElementId,
    observer: ObserverId,
    locale: Locale,
}

impl ThemeToggle {
    /// Subscribe to `data-theme` on `root` and render the current state.
    pub fn mount(doc: &mut Document, button: ElementId, root: ElementId, locale: Locale) -> Self {
        let observer = doc.observe_attribute(root, THEME_ATTRIBUTE);
        let toggle = Self {
            button,
            root,
            observer,
            locale,
        };
        toggle.render(doc);
        toggle
    }

    #[must_use]
    pub fn element(&self) -> ElementId {
        self.button
    }

    /// Missing or unrecognised values count as dark.
    #[must_use]
    pub fn mode(&self, doc: &Document) -> ThemeMode {
        doc.attribute(self.root, THEME_ATTRIBUTE)
            .and_then(|raw| ThemeMode::parse(raw).ok())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_dark(&self, doc: &Document) -> bool {
        self.mode(doc).is_dark()
    }

    /// Flip the root attribute. The button re-renders on the next [`Self::sync`].
    pub fn activate(&self, doc: &mut Document) -> ThemeMode {
        let next = self.mode(doc).toggled();
        doc.set_attribute(self.root, THEME_ATTRIBUTE, next.as_str());
        tracing::debug!(theme = next.as_str(), "Theme toggled");
        next
    }

    /// Drain attribute records and re-render if anything changed.
    pub fn sync(&self, doc: &mut Document) -> bool {
        if doc.take_records(self.observer).is_empty() {
            return false;
        }
        self.render(doc);
        true
    }

    pub fn set_locale(&mut self, doc: &mut Document, locale: Locale) {
        self.locale = locale;
        self.render(doc);
    }

    #[must_use]
    pub fn icon(&self, doc: &Document) -> ThemeIcon {
        if self.is_dark(doc) {
            ThemeIcon::Sun
        } else {
            ThemeIcon::Moon
        }
    }

    fn render(&self, doc: &mut Document) {
        let dark = self.is_dark(doc);
        let label = if dark {
            text(Label::SwitchToLight, self.locale)
        } else {
            text(Label::SwitchToDark, self.locale)
        };
        let icon = self.icon(doc);
        doc.set_attribute(self.button, "aria-pressed", if dark { "true" } else { "false" });
        doc.set_attribute(self.button, "aria-label", label);
        doc.set_attribute(self.button, "data-icon", icon.as_str());
    }

    pub fn unmount(self, doc: &mut Document) {
        doc.disconnect_observer(self.observer);
    }
}
