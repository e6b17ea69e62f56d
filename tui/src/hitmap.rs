use ratatui::layout::{Position, Rect};

use sitenav_dom::ElementId;

/// Screen regions of clickable elements from the last frame, in paint order.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, ElementId)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, rect: Rect, id: ElementId) {
        if !rect.is_empty() {
            self.regions.push((rect, id));
        }
    }

    /// Topmost element under the cell; later pushes paint over earlier ones.
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Option<ElementId> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(position))
            .map(|&(_, id)| id)
    }

    #[must_use]
    pub fn rect_of(&self, id: ElementId) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|&&(_, candidate)| candidate == id)
            .map(|&(rect, _)| rect)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
