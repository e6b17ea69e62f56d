//! Input blockers: document-level listeners that cancel the default scroll action.

use crate::Document;

/// Inputs whose default action scrolls the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Wheel,
    TouchMove,
    /// Space, PageUp, PageDown, Home, End and the vertical arrows.
    ScrollKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockerId(u64);

#[derive(Debug, Clone)]
pub(crate) struct Blocker {
    kinds: Vec<InputKind>,
}

impl Document {
    /// Register a blocker that prevents the default action of the given inputs.
    pub fn add_blocker(&mut self, kinds: &[InputKind]) -> BlockerId {
        let id = BlockerId(self.next_blocker);
        self.next_blocker += 1;
        self.blockers.insert(
            id,
            Blocker {
                kinds: kinds.to_vec(),
            },
        );
        tracing::trace!(?id, ?kinds, "input blocker added");
        id
    }

    /// Returns whether the blocker was registered.
    pub fn remove_blocker(&mut self, id: BlockerId) -> bool {
        let removed = self.blockers.remove(&id).is_some();
        tracing::trace!(?id, removed, "input blocker removed");
        removed
    }

    #[must_use]
    pub fn is_blocked(&self, kind: InputKind) -> bool {
        self.blockers
            .values()
            .any(|blocker| blocker.kinds.contains(&kind))
    }

    #[must_use]
    pub fn blocker_count(&self) -> usize {
        self.blockers.len()
    }

    /// Apply the default scroll action of an input. Returns `false` if a blocker cancelled it.
    pub fn scroll_by(&mut self, kind: InputKind, delta: i32) -> bool {
        if self.is_blocked(kind) {
            return false;
        }
        let next = i64::from(self.scroll_offset) + i64::from(delta);
        self.scroll_offset = next.clamp(0, i64::from(self.scroll_max)) as u32;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::InputKind;
    use crate::Document;

    #[test]
    fn blocker_cancels_only_its_kinds() {
        let mut doc = Document::new();
        doc.set_scroll_extent(100);
        let id = doc.add_blocker(&[InputKind::Wheel, InputKind::ScrollKey]);

        assert!(!doc.scroll_by(InputKind::Wheel, 5));
        assert!(!doc.scroll_by(InputKind::ScrollKey, 5));
        assert_eq!(doc.scroll_offset(), 0);
        assert!(doc.scroll_by(InputKind::TouchMove, 5));
        assert_eq!(doc.scroll_offset(), 5);

        assert!(doc.remove_blocker(id));
        assert!(!doc.remove_blocker(id));
        assert!(doc.scroll_by(InputKind::Wheel, 5));
        assert_eq!(doc.scroll_offset(), 10);
    }

    #[test]
    fn scrolling_is_clamped_to_extent() {
        let mut doc = Document::new();
        doc.set_scroll_extent(20);
        assert!(doc.scroll_by(InputKind::Wheel, 50));
        assert_eq!(doc.scroll_offset(), 20);
        assert!(doc.scroll_by(InputKind::Wheel, -100));
        assert_eq!(doc.scroll_offset(), 0);

        doc.scroll_by(InputKind::Wheel, 15);
        doc.set_scroll_extent(10);
        assert_eq!(doc.scroll_offset(), 10);
    }
}
