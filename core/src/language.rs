use sitenav_dom::{Document, ElementId};
use sitenav_types::{Label, Locale, text};

/// Cycles the page locale and mirrors it into the root `lang` attribute.
#[derive(Debug)]
pub struct LanguageToggle {
    button: ElementId,
    root: ElementId,
    locale: Locale,
}

impl LanguageToggle {
    pub fn mount(doc: &mut Document, button: ElementId, root: ElementId, locale: Locale) -> Self {
        let toggle = Self {
            button,
            root,
            locale,
        };
        toggle.render(doc);
        toggle
    }

    #[must_use]
    pub fn element(&self) -> ElementId {
        self.button
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn activate(&mut self, doc: &mut Document) -> Locale {
        self.locale = self.locale.next();
        self.render(doc);
        tracing::debug!(locale = self.locale.as_str(), "Locale switched");
        self.locale
    }

    fn render(&self, doc: &mut Document) {
        doc.set_attribute(self.root, "lang", self.locale.as_str());
        // The button names the language it switches to.
        let next = self.locale.next();
        doc.set_text(self.button, next.native_name());
        let label = format!("{}: {}", text(Label::Language, self.locale), next.native_name());
        doc.set_attribute(self.button, "aria-label", &label);
    }
}
