//! Drawer slide geometry.

use ratatui::layout::Rect;

use sitenav_types::ui::PanelEffect;

/// Preferred drawer width in columns.
pub const PANEL_WIDTH: u16 = 34;

/// How much of the drawer is on screen, from the running effect or the settled state.
#[must_use]
pub fn visible_fraction(effect: Option<&PanelEffect>, open: bool) -> f32 {
    match effect {
        Some(effect) => effect.visible_fraction(),
        None if open => 1.0,
        None => 0.0,
    }
}

/// Rect of the drawer anchored to the right edge of `area`, `visible` of its width shown.
///
/// Returns `None` when nothing of the drawer is visible.
#[must_use]
pub fn panel_rect(area: Rect, visible: f32) -> Option<Rect> {
    let width = PANEL_WIDTH.min(area.width);
    let shown = (f32::from(width) * visible.clamp(0.0, 1.0)).round() as u16;
    if shown == 0 {
        return None;
    }
    Some(Rect {
        x: area.right().saturating_sub(shown),
        y: area.y,
        width: shown,
        height: area.height,
    })
}
