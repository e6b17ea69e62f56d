//! Static interface strings.
//!
//! Only the chrome around the navigation drawer is translated here. Navigation
//! link labels come from configuration.

use crate::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    OpenMenu,
    CloseMenu,
    SwitchToLight,
    SwitchToDark,
    Language,
    ReadMore,
    Imprint,
    Privacy,
    PageNotFound,
}

#[must_use]
pub fn text(label: Label, locale: Locale) -> &'static str {
    match locale {
        Locale::En => match label {
            Label::OpenMenu => "Open menu",
            Label::CloseMenu => "Close menu",
            Label::SwitchToLight => "Switch to light theme",
            Label::SwitchToDark => "Switch to dark theme",
            Label::Language => "Language",
            Label::ReadMore => "Read more",
            Label::Imprint => "Imprint",
            Label::Privacy => "Privacy",
            Label::PageNotFound => "Page not found",
        },
        Locale::De => match label {
            Label::OpenMenu => "Menü öffnen",
            Label::CloseMenu => "Menü schließen",
            Label::SwitchToLight => "Zum hellen Design wechseln",
            Label::SwitchToDark => "Zum dunklen Design wechseln",
            Label::Language => "Sprache",
            Label::ReadMore => "Weiterlesen",
            Label::Imprint => "Impressum",
            Label::Privacy => "Datenschutz",
            Label::PageNotFound => "Seite nicht gefunden",
        },
    }
}
