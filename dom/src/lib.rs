//! In-memory document model for sitenav.
//!
//! A small arena-backed tree with string attributes, a single active element,
//! `inert` subtrees, input blockers (for scroll locking) and attribute
//! observers. It carries just enough of the browser document contract for the
//! navigation drawer to be driven and tested without a browser.
//!
//! Operations on detached or unknown handles are silent no-ops unless they can
//! corrupt the tree, in which case they return [`DomError`].

mod element;
mod events;
mod focus;
mod observer;

pub use element::{ElementId, Tag};
pub use events::{BlockerId, InputKind};
pub use observer::{MutationRecord, ObserverId};

use std::collections::BTreeMap;

use thiserror::Error;

use element::Node;
use events::Blocker;
use observer::Observer;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("unknown element {0}")]
    UnknownElement(ElementId),
    #[error("cannot append {child} to {parent}: it would become its own ancestor")]
    Cycle { parent: ElementId, child: ElementId },
}

#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: ElementId,
    active: Option<ElementId>,
    blockers: BTreeMap<BlockerId, Blocker>,
    next_blocker: u64,
    observers: BTreeMap<ObserverId, Observer>,
    next_observer: u64,
    scroll_offset: u32,
    scroll_max: u32,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing only the `<html>` root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(Tag::Html)],
            root: ElementId::new(0),
            active: None,
            blockers: BTreeMap::new(),
            next_blocker: 1,
            observers: BTreeMap::new(),
            next_observer: 1,
            scroll_offset: 0,
            scroll_max: 0,
        }
    }

    #[must_use]
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: Tag) -> ElementId {
        let id = ElementId::new(self.nodes.len());
        self.nodes.push(Node::new(tag));
        id
    }

    fn node(&self, id: ElementId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    fn require(&self, id: ElementId) -> Result<(), DomError> {
        if self.node(id).is_some() {
            Ok(())
        } else {
            Err(DomError::UnknownElement(id))
        }
    }

    /// Append `child` as the last child of `parent`, moving it if it is already attached.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<(), DomError> {
        self.require(parent)?;
        self.require(child)?;
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::Cycle { parent, child });
        }

        self.detach(child);
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
        Ok(())
    }

    /// Create an element with text and attributes and append it to `parent`.
    pub fn append_new(
        &mut self,
        parent: ElementId,
        tag: Tag,
        text: &str,
        attrs: &[(&str, &str)],
    ) -> Result<ElementId, DomError> {
        let id = self.create_element(tag);
        self.set_text(id, text);
        for (name, value) in attrs {
            self.set_attribute(id, name, value);
        }
        self.append_child(parent, id)?;
        Ok(id)
    }

    /// Detach `id` (and its subtree) from its parent.
    ///
    /// If the active element was inside the removed subtree, nothing is focused afterwards.
    pub fn remove(&mut self, id: ElementId) {
        if let Some(active) = self.active
            && self.is_inclusive_ancestor(id, active)
        {
            self.active = None;
        }
        self.detach(id);
    }

    /// Remove and detach all children of `id`.
    pub fn clear_children(&mut self, id: ElementId) {
        let children = self.children(id).to_vec();
        for child in children {
            self.remove(child);
        }
    }

    fn detach(&mut self, id: ElementId) {
        let Some(parent) = self.node(id).and_then(|node| node.parent) else {
            return;
        };
        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|&c| c != id);
        }
        if let Some(node) = self.node_mut(id) {
            node.parent = None;
        }
    }

    fn is_inclusive_ancestor(&self, ancestor: ElementId, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == ancestor {
                return true;
            }
            current = self.parent(node_id);
        }
        false
    }

    /// Whether `ancestor` is `id` or one of its ancestors.
    #[must_use]
    pub fn contains(&self, ancestor: ElementId, id: ElementId) -> bool {
        self.is_inclusive_ancestor(ancestor, id)
    }

    /// Whether the element is attached to this document's root.
    #[must_use]
    pub fn is_connected(&self, id: ElementId) -> bool {
        self.node(id).is_some() && self.is_inclusive_ancestor(self.root, id)
    }

    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node(id).and_then(|node| node.parent)
    }

    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.node(id).map_or(&[], |node| node.children.as_slice())
    }

    /// Descendants of `id` in document (pre-)order, excluding `id` itself.
    #[must_use]
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    #[must_use]
    pub fn tag(&self, id: ElementId) -> Option<Tag> {
        self.node(id).map(|node| node.tag)
    }

    #[must_use]
    pub fn text(&self, id: ElementId) -> &str {
        self.node(id).map_or("", |node| node.text.as_str())
    }

    pub fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(node) = self.node_mut(id)
            && node.text != text
        {
            text.clone_into(&mut node.text);
        }
    }

    #[must_use]
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.node(id)
            .and_then(|node| node.attrs.get(name))
            .map(String::as_str)
    }

    #[must_use]
    pub fn has_attribute(&self, id: ElementId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// Set an attribute. Observers are notified only when the value actually changes.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        let Some(node) = self.node_mut(id) else {
            tracing::trace!(%id, name, "set_attribute on unknown element ignored");
            return;
        };
        let old = node.attrs.insert(name.to_string(), value.to_string());
        if old.as_deref() != Some(value) {
            self.notify(id, name, old);
        }
    }

    /// Remove an attribute. Returns whether it was present.
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) -> bool {
        let Some(old) = self.node_mut(id).and_then(|node| node.attrs.remove(name)) else {
            return false;
        };
        self.notify(id, name, Some(old));
        true
    }

    /// Set or remove a valueless boolean attribute such as `inert` or `hidden`.
    pub fn toggle_attribute(&mut self, id: ElementId, name: &str, present: bool) {
        if present {
            if !self.has_attribute(id, name) {
                self.set_attribute(id, name, "");
            }
        } else {
            self.remove_attribute(id, name);
        }
    }

    /// First connected element whose `id` attribute equals `dom_id`.
    #[must_use]
    pub fn element_by_id(&self, dom_id: &str) -> Option<ElementId> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|&id| self.attribute(id, "id") == Some(dom_id))
    }

    /// Anchor elements carrying `href` inside `container`, in document order.
    #[must_use]
    pub fn links_within(&self, container: ElementId) -> Vec<ElementId> {
        self.descendants(container)
            .into_iter()
            .filter(|&id| self.tag(id) == Some(Tag::Anchor) && self.has_attribute(id, "href"))
            .collect()
    }

    /// Whether the element or one of its ancestors carries `inert`.
    #[must_use]
    pub fn is_inert(&self, id: ElementId) -> bool {
        self.has_ancestor_attribute(id, "inert")
    }

    pub(crate) fn has_ancestor_attribute(&self, id: ElementId, name: &str) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if self.has_attribute(node_id, name) {
                return true;
            }
            current = self.parent(node_id);
        }
        false
    }

    #[must_use]
    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    /// Programmatic scroll to the top; blockers only cancel user input.
    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }

    /// Set the largest scroll offset the current layout allows.
    pub fn set_scroll_extent(&mut self, max: u32) {
        self.scroll_max = max;
        self.scroll_offset = self.scroll_offset.min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, ElementId, ElementId, ElementId) {
        let mut doc = Document::new();
        let root = doc.root();
        let main = doc.append_new(root, Tag::Main, "", &[("id", "content")]).unwrap();
        let para = doc.append_new(main, Tag::Paragraph, "hello", &[]).unwrap();
        let link = doc
            .append_new(main, Tag::Anchor, "more", &[("href", "/more")])
            .unwrap();
        (doc, main, para, link)
    }

    #[test]
    fn descendants_are_in_document_order() {
        let (doc, main, para, link) = sample();
        assert_eq!(doc.descendants(doc.root()), vec![main, para, link]);
    }

    #[test]
    fn append_rejects_cycles() {
        let (mut doc, main, para, _) = sample();
        assert_eq!(
            doc.append_child(para, main),
            Err(DomError::Cycle {
                parent: para,
                child: main
            })
        );
        assert_eq!(
            doc.append_child(main, main),
            Err(DomError::Cycle {
                parent: main,
                child: main
            })
        );
    }

    #[test]
    fn append_moves_attached_child() {
        let (mut doc, main, para, link) = sample();
        doc.append_child(para, link).unwrap();
        assert_eq!(doc.children(main), &[para]);
        assert_eq!(doc.parent(link), Some(para));
    }

    #[test]
    fn removed_elements_are_disconnected() {
        let (mut doc, main, para, _) = sample();
        assert!(doc.is_connected(para));
        doc.remove(main);
        assert!(!doc.is_connected(main));
        assert!(!doc.is_connected(para));
        assert_eq!(doc.element_by_id("content"), None);
    }

    #[test]
    fn unknown_handles_are_ignored() {
        let (mut doc, ..) = sample();
        let bogus = ElementId::new(999);
        doc.set_attribute(bogus, "x", "y");
        assert_eq!(doc.attribute(bogus, "x"), None);
        assert!(!doc.remove_attribute(bogus, "x"));
        assert!(doc.children(bogus).is_empty());
        assert_eq!(
            doc.append_child(doc.root(), bogus),
            Err(DomError::UnknownElement(bogus))
        );
    }

    #[test]
    fn inert_is_inherited() {
        let (mut doc, main, para, _) = sample();
        assert!(!doc.is_inert(para));
        doc.toggle_attribute(main, "inert", true);
        assert!(doc.is_inert(para));
        doc.toggle_attribute(main, "inert", false);
        assert!(!doc.is_inert(para));
        assert!(!doc.has_attribute(main, "inert"));
    }

    #[test]
    fn links_within_requires_href() {
        let (mut doc, main, _, link) = sample();
        doc.append_new(main, Tag::Anchor, "placeholder", &[]).unwrap();
        assert_eq!(doc.links_within(main), vec![link]);
    }
}
