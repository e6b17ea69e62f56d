//! Viewport geometry and the desktop breakpoint.

/// Width (CSS px) at and above which the desktop navigation replaces the drawer.
pub const DESKTOP_BREAKPOINT_PX: u32 = 1000;

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Convert a terminal size in cells to an approximate CSS pixel viewport.
    #[must_use]
    pub fn from_cells(cols: u16, rows: u16, cell_width_px: u32, cell_height_px: u32) -> Self {
        Self {
            width: u32::from(cols).saturating_mul(cell_width_px),
            height: u32::from(rows).saturating_mul(cell_height_px),
        }
    }
}

/// Narrow/wide threshold on viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint(u32);

impl Breakpoint {
    #[must_use]
    pub const fn new(px: u32) -> Self {
        Self(px)
    }

    #[must_use]
    pub const fn px(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_wide(self, viewport: Viewport) -> bool {
        viewport.width >= self.0
    }

    /// True only for a narrow → wide transition. Wide → wide and any shrink are not crossings.
    #[must_use]
    pub const fn crossed_into_wide(self, previous: Viewport, next: Viewport) -> bool {
        !self.is_wide(previous) && self.is_wide(next)
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(DESKTOP_BREAKPOINT_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        let bp = Breakpoint::default();
        assert!(!bp.is_wide(Viewport::new(999, 800)));
        assert!(bp.is_wide(Viewport::new(1000, 800)));
    }

    #[test]
    fn only_narrow_to_wide_counts_as_crossing() {
        let bp = Breakpoint::default();
        let narrow = Viewport::new(900, 844);
        let still_narrow = Viewport::new(990, 844);
        let wide = Viewport::new(1200, 844);

        assert!(bp.crossed_into_wide(narrow, wide));
        assert!(!bp.crossed_into_wide(narrow, still_narrow));
        assert!(!bp.crossed_into_wide(wide, narrow));
        assert!(!bp.crossed_into_wide(wide, Viewport::new(1400, 900)));
    }

    #[test]
    fn from_cells_scales_by_cell_size() {
        let vp = Viewport::from_cells(125, 40, 8, 16);
        assert_eq!(vp, Viewport::new(1000, 640));
    }
}
