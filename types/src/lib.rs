//! Core domain types for sitenav.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod i18n;
mod prefs;
pub mod ui;
mod viewport;

pub use i18n::{Label, text};
pub use prefs::{EnumKind, EnumParseError, Locale, ThemeMode};
pub use viewport::{Breakpoint, DESKTOP_BREAKPOINT_PX, Viewport};
