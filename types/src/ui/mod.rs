//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the core (state ownership) and tui (rendering/input).

mod animation;
mod options;
mod panel;

pub use options::UiOptions;
pub use panel::{PanelEffect, PanelEffectKind};
