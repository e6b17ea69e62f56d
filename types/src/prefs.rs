//! Display preferences: color scheme and interface language.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumKind {
    Locale,
    ThemeMode,
}

impl EnumKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EnumKind::Locale => "locale",
            EnumKind::ThemeMode => "theme",
        }
    }
}

impl fmt::Display for EnumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} value '{raw}'; expected one of: {expected:?}")]
pub struct EnumParseError {
    kind: EnumKind,
    raw: String,
    expected: &'static [&'static str],
}

impl EnumParseError {
    #[must_use]
    pub fn new(kind: EnumKind, raw: impl Into<String>, expected: &'static [&'static str]) -> Self {
        Self {
            kind,
            raw: raw.into(),
            expected,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EnumKind {
        self.kind
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

const THEME_PARSE_VALUES: &[&str] = &["dark", "light"];
const LOCALE_PARSE_VALUES: &[&str] = &["en", "de"];

/// Value of the `data-theme` attribute on the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn parse(s: &str) -> Result<Self, EnumParseError> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            _ => Err(EnumParseError::new(
                EnumKind::ThemeMode,
                trimmed,
                THEME_PARSE_VALUES,
            )),
        }
    }
}

impl TryFrom<String> for ThemeMode {
    type Error = EnumParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ThemeMode> for String {
    fn from(value: ThemeMode) -> Self {
        value.as_str().to_string()
    }
}

/// Interface language. Mirrors the `lang` attribute on the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    /// Name of the language in that language, as shown on the language toggle.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::De => "Deutsch",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Locale::En => Locale::De,
            Locale::De => Locale::En,
        }
    }

    #[must_use]
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::De]
    }

    pub fn parse(s: &str) -> Result<Self, EnumParseError> {
        let trimmed = s.trim();
        // Accept region-qualified tags such as "de-AT".
        let primary = trimmed.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "de" => Ok(Locale::De),
            _ => Err(EnumParseError::new(
                EnumKind::Locale,
                trimmed,
                LOCALE_PARSE_VALUES,
            )),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = EnumParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parse_is_case_insensitive() {
        assert_eq!(ThemeMode::parse(" Light "), Ok(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("DARK"), Ok(ThemeMode::Dark));
    }

    #[test]
    fn theme_parse_rejects_unknown() {
        let err = ThemeMode::parse("sepia").unwrap_err();
        assert_eq!(err.kind(), EnumKind::ThemeMode);
        assert_eq!(err.raw(), "sepia");
        assert!(err.to_string().contains("expected one of"));
    }

    #[test]
    fn theme_toggle_round_trips() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn locale_accepts_region_tags() {
        assert_eq!(Locale::parse("de-AT"), Ok(Locale::De));
        assert_eq!(Locale::parse("en_US"), Ok(Locale::En));
        assert!(Locale::parse("fr").is_err());
    }

    #[test]
    fn locale_next_cycles_through_all() {
        let mut seen = vec![Locale::En];
        let mut current = Locale::En.next();
        while current != Locale::En {
            seen.push(current);
            current = current.next();
        }
        assert_eq!(seen, Locale::all());
    }

    #[test]
    fn prefs_deserialize_from_toml_strings() {
        #[derive(Deserialize)]
        struct Prefs {
            theme: ThemeMode,
            locale: Locale,
        }

        let prefs: Prefs = toml::from_str("theme = \"light\"\nlocale = \"de\"").unwrap();
        assert_eq!(prefs.theme, ThemeMode::Light);
        assert_eq!(prefs.locale, Locale::De);

        let bad = toml::from_str::<Prefs>("theme = \"neon\"\nlocale = \"de\"");
        assert!(bad.is_err());
    }
}
