//! Configuration for sitenav.
//!
//! Loaded from `~/.sitenav/config.toml`. Every field has a default, so an
//! absent file and an empty file behave the same.
//!
//! ```toml
//! [app]
//! theme = "light"
//! locale = "de"
//! reduced_motion = true
//!
//! [nav]
//! breakpoint_px = 1000
//! open_focus_delay_ms = 50
//!
//! [[nav.links]]
//! href = "/services"
//! label = "Services"
//! label_de = "Leistungen"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use sitenav_types::ui::UiOptions;
use sitenav_types::{Breakpoint, DESKTOP_BREAKPOINT_PX, Locale, ThemeMode};

pub const ENV_THEME: &str = "SITENAV_THEME";
pub const ENV_LOCALE: &str = "SITENAV_LOCALE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub app: AppConfig,
    pub nav: NavConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial `data-theme`. Defaults to dark.
    pub theme: Option<ThemeMode>,
    pub locale: Option<Locale>,
    /// Text shown as the brand link in the header.
    pub brand: Option<String>,
    /// Use ASCII-only glyphs for icons.
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    pub high_contrast: bool,
    /// Disable the drawer slide animation.
    pub reduced_motion: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub breakpoint_px: u32,
    /// Delay between opening and moving focus into the drawer.
    pub open_focus_delay_ms: u64,
    /// Delay between closing and restoring the previously focused element.
    pub close_restore_delay_ms: u64,
    pub panel_slide_ms: u64,
    /// Approximate CSS pixels per terminal column.
    pub cell_width_px: u32,
    pub cell_height_px: u32,
    pub links: Vec<NavLink>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DESKTOP_BREAKPOINT_PX,
            open_focus_delay_ms: 50,
            close_restore_delay_ms: 10,
            panel_slide_ms: 180,
            cell_width_px: 8,
            cell_height_px: 16,
            links: default_links(),
        }
    }
}

impl NavConfig {
    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::new(self.breakpoint_px)
    }

    #[must_use]
    pub fn open_focus_delay(&self) -> Duration {
        Duration::from_millis(self.open_focus_delay_ms)
    }

    #[must_use]
    pub fn close_restore_delay(&self) -> Duration {
        Duration::from_millis(self.close_restore_delay_ms)
    }

    #[must_use]
    pub fn panel_slide(&self) -> Duration {
        Duration::from_millis(self.panel_slide_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    #[serde(default)]
    pub label_de: Option<String>,
}

impl NavLink {
    #[must_use]
    pub fn new(href: &str, label: &str, label_de: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
            label_de: Some(label_de.to_string()),
        }
    }

    /// Label for `locale`, falling back to the English label.
    #[must_use]
    pub fn label_for(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.label,
            Locale::De => self.label_de.as_deref().unwrap_or(&self.label),
        }
    }
}

fn default_links() -> Vec<NavLink> {
    vec![
        NavLink::new("/", "Home", "Start"),
        NavLink::new("/services", "Services", "Leistungen"),
        NavLink::new("/blog", "Blog", "Blog"),
        NavLink::new("/about", "About", "Über uns"),
        NavLink::new("/contact", "Contact", "Kontakt"),
    ]
}

impl SiteConfig {
    /// Load the user config. `Ok(None)` when there is no config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Apply `SITENAV_THEME` / `SITENAV_LOCALE` overrides. Invalid values are logged and ignored.
    #[must_use]
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_THEME) {
            match ThemeMode::parse(&raw) {
                Ok(theme) => self.app.theme = Some(theme),
                Err(err) => tracing::warn!("Ignoring {ENV_THEME}: {err}"),
            }
        }
        if let Some(raw) = lookup(ENV_LOCALE) {
            match Locale::parse(&raw) {
                Ok(locale) => self.app.locale = Some(locale),
                Err(err) => tracing::warn!("Ignoring {ENV_LOCALE}: {err}"),
            }
        }
        self
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        UiOptions {
            ascii_only: self.app.ascii_only,
            high_contrast: self.app.high_contrast,
            reduced_motion: self.app.reduced_motion,
        }
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".sitenav").join("config.toml"))
}
