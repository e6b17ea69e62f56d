//! Navigation drawer state machine and the site shell it lives in.
//!
//! [`Site`] owns the document and routes input; [`MobileNav`] owns the drawer's
//! open/close state and every side effect tied to it.

mod input;
mod language;
pub mod nav;
pub mod pages;
mod site;
mod theme;
mod timers;
mod toggle;
pub mod trap;

pub use input::{Key, LINE_STEP, PAGE_STEP};
pub use language::LanguageToggle;
pub use nav::{CloseReason, MenuPhase, MenuState, MobileNav, NavEvent, NavHandles, NavOutcome, NavSettings};
pub use site::{DEFAULT_BRAND, Site, SiteHandles, SiteResponse};
pub use theme::{THEME_ATTRIBUTE, ThemeIcon, ThemeToggle};
pub use timers::{TimerId, Timers};
pub use toggle::{PANEL_DOM_ID, ToggleControl, render_overlay, render_panel};
