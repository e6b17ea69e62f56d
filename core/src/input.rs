//! Toolkit-neutral keyboard input.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Tab,
    /// Shift+Tab.
    BackTab,
    PageUp,
    PageDown,
    Home,
    End,
    Up,
    Down,
    Char(char),
}

/// Page scroll step for Space / PageUp / PageDown.
pub const PAGE_STEP: i32 = 10;
/// Scroll step for the vertical arrows and one wheel notch.
pub const LINE_STEP: i32 = 1;

impl Key {
    /// Default scroll action of a key, if it has one.
    ///
    /// Home and End use saturating extremes; the document clamps them to its extent.
    #[must_use]
    pub const fn scroll_delta(self) -> Option<i32> {
        match self {
            Key::Space | Key::PageDown => Some(PAGE_STEP),
            Key::PageUp => Some(-PAGE_STEP),
            Key::Down => Some(LINE_STEP),
            Key::Up => Some(-LINE_STEP),
            Key::Home => Some(i32::MIN),
            Key::End => Some(i32::MAX),
            _ => None,
        }
    }
}
