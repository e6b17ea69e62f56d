//! Keyboard focus: the active element and sequential (Tab) navigation.

use crate::{Document, ElementId, Tag};

impl Document {
    /// Whether the element can currently receive keyboard focus.
    ///
    /// Buttons (unless `disabled`), anchors with `href`, and anything with a non-negative
    /// `tabindex`; never inside an `inert` or `hidden` subtree or when detached.
    #[must_use]
    pub fn is_focusable(&self, id: ElementId) -> bool {
        if !self.is_connected(id) || self.is_inert(id) || self.has_ancestor_attribute(id, "hidden")
        {
            return false;
        }
        if let Some(index) = self.attribute(id, "tabindex") {
            return index.trim().parse::<i32>().is_ok_and(|i| i >= 0);
        }
        match self.tag(id) {
            Some(Tag::Button) => !self.has_attribute(id, "disabled"),
            Some(Tag::Anchor) => self.has_attribute(id, "href"),
            _ => false,
        }
    }

    #[must_use]
    pub fn active_element(&self) -> Option<ElementId> {
        self.active
    }

    /// Focus the element. Returns `false` (and leaves focus unchanged) if it is not focusable.
    pub fn focus(&mut self, id: ElementId) -> bool {
        if !self.is_focusable(id) {
            tracing::trace!(%id, "focus request on unfocusable element ignored");
            return false;
        }
        self.active = Some(id);
        true
    }

    pub fn blur(&mut self) {
        self.active = None;
    }

    /// All focusable elements in document order.
    #[must_use]
    pub fn focus_order(&self) -> Vec<ElementId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&id| self.is_focusable(id))
            .collect()
    }

    /// Default Tab / Shift+Tab action: move to the next focusable element, wrapping at the ends.
    ///
    /// Returns the newly focused element, or `None` if nothing is focusable.
    pub fn focus_next(&mut self, backward: bool) -> Option<ElementId> {
        let order = self.focus_order();
        if order.is_empty() {
            return None;
        }
        let position = self
            .active
            .and_then(|active| order.iter().position(|&id| id == active));
        let next = match (position, backward) {
            (None, false) => 0,
            (None, true) => order.len() - 1,
            (Some(i), false) => (i + 1) % order.len(),
            (Some(i), true) => (i + order.len() - 1) % order.len(),
        };
        let target = order[next];
        self.active = Some(target);
        Some(target)
    }

    /// Drop focus if the active element stopped being focusable (e.g. became inert).
    pub fn revalidate_focus(&mut self) {
        if let Some(active) = self.active
            && !self.is_focusable(active)
        {
            self.active = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Document, Tag};

    #[test]
    fn focusability_rules() {
        let mut doc = Document::new();
        let root = doc.root();
        let button = doc.append_new(root, Tag::Button, "ok", &[]).unwrap();
        let disabled = doc
            .append_new(root, Tag::Button, "no", &[("disabled", "")])
            .unwrap();
        let link = doc.append_new(root, Tag::Anchor, "a", &[("href", "/")]).unwrap();
        let bare_link = doc.append_new(root, Tag::Anchor, "b", &[]).unwrap();
        let div = doc.append_new(root, Tag::Div, "", &[("tabindex", "0")]).unwrap();
        let skipped = doc
            .append_new(root, Tag::Button, "", &[("tabindex", "-1")])
            .unwrap();

        assert!(doc.is_focusable(button));
        assert!(!doc.is_focusable(disabled));
        assert!(doc.is_focusable(link));
        assert!(!doc.is_focusable(bare_link));
        assert!(doc.is_focusable(div));
        assert!(!doc.is_focusable(skipped));
        assert_eq!(doc.focus_order(), vec![button, link, div]);
    }

    #[test]
    fn focus_next_wraps_both_ways() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = doc.append_new(root, Tag::Button, "a", &[]).unwrap();
        let b = doc.append_new(root, Tag::Button, "b", &[]).unwrap();

        assert_eq!(doc.focus_next(false), Some(a));
        assert_eq!(doc.focus_next(false), Some(b));
        assert_eq!(doc.focus_next(false), Some(a));
        assert_eq!(doc.focus_next(true), Some(b));
    }

    #[test]
    fn inert_subtree_is_skipped_and_unfocusable() {
        let mut doc = Document::new();
        let root = doc.root();
        let main = doc.append_new(root, Tag::Main, "", &[("inert", "")]).unwrap();
        let inside = doc.append_new(main, Tag::Button, "x", &[]).unwrap();
        let outside = doc.append_new(root, Tag::Button, "y", &[]).unwrap();

        assert!(!doc.focus(inside));
        assert_eq!(doc.active_element(), None);
        assert_eq!(doc.focus_order(), vec![outside]);
    }

    #[test]
    fn removing_focused_subtree_clears_focus() {
        let mut doc = Document::new();
        let root = doc.root();
        let main = doc.append_new(root, Tag::Main, "", &[]).unwrap();
        let button = doc.append_new(main, Tag::Button, "x", &[]).unwrap();
        assert!(doc.focus(button));
        doc.remove(main);
        assert_eq!(doc.active_element(), None);
        assert!(!doc.focus(button));
    }

    #[test]
    fn revalidate_drops_focus_inside_new_inert_region() {
        let mut doc = Document::new();
        let root = doc.root();
        let main = doc.append_new(root, Tag::Main, "", &[]).unwrap();
        let button = doc.append_new(main, Tag::Button, "x", &[]).unwrap();
        assert!(doc.focus(button));
        doc.toggle_attribute(main, "inert", true);
        doc.revalidate_focus();
        assert_eq!(doc.active_element(), None);
    }
}
