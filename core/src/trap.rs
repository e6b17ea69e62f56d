//! Focus trap for the open drawer.
//!
//! Only anchors with `href` inside the panel form the cycle. The panel's close
//! button is deliberately outside it: Tab never lands on it from a link, though
//! it still works when focused directly or clicked.

use sitenav_dom::{Document, ElementId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapOutcome {
    /// Focus wrapped to the other end of the cycle; the default Tab action must not run.
    Wrapped(ElementId),
    /// Not at an edge of the cycle; let the default Tab action run.
    PassThrough,
}

/// Handle Tab (`backward == false`) or Shift+Tab inside `panel`.
pub fn cycle(doc: &mut Document, panel: ElementId, backward: bool) -> TrapOutcome {
    let links = doc.links_within(panel);
    let (Some(&first), Some(&last)) = (links.first(), links.last()) else {
        tracing::trace!("focus trap has no links; skipping");
        return TrapOutcome::PassThrough;
    };

    let active = doc.active_element();
    let target = if backward && active == Some(first) {
        last
    } else if !backward && active == Some(last) {
        first
    } else {
        return TrapOutcome::PassThrough;
    };

    if doc.focus(target) {
        TrapOutcome::Wrapped(target)
    } else {
        TrapOutcome::PassThrough
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitenav_dom::Tag;

    fn panel_with_links(count: usize) -> (Document, ElementId, ElementId, Vec<ElementId>) {
        let mut doc = Document::new();
        let root = doc.root();
        let panel = doc.append_new(root, Tag::Aside, "", &[]).unwrap();
        let close = doc
            .append_new(panel, Tag::Button, "x", &[("aria-label", "Close menu")])
            .unwrap();
        let links = (0..count)
            .map(|i| {
                let href = format!("/{i}");
                doc.append_new(panel, Tag::Anchor, "link", &[("href", href.as_str())])
                    .unwrap()
            })
            .collect();
        (doc, panel, close, links)
    }

    #[test]
    fn tab_on_last_wraps_to_first() {
        let (mut doc, panel, _, links) = panel_with_links(3);
        doc.focus(links[2]);
        assert_eq!(cycle(&mut doc, panel, false), TrapOutcome::Wrapped(links[0]));
        assert_eq!(doc.active_element(), Some(links[0]));
    }

    #[test]
    fn shift_tab_on_first_wraps_to_last_skipping_close_button() {
        let (mut doc, panel, close, links) = panel_with_links(3);
        doc.focus(links[0]);
        assert_eq!(cycle(&mut doc, panel, true), TrapOutcome::Wrapped(links[2]));
        assert_ne!(doc.active_element(), Some(close));
    }

    #[test]
    fn middle_links_pass_through() {
        let (mut doc, panel, _, links) = panel_with_links(3);
        doc.focus(links[1]);
        assert_eq!(cycle(&mut doc, panel, false), TrapOutcome::PassThrough);
        assert_eq!(cycle(&mut doc, panel, true), TrapOutcome::PassThrough);
        assert_eq!(doc.active_element(), Some(links[1]));
    }

    #[test]
    fn close_button_is_not_part_of_the_cycle() {
        let (mut doc, panel, close, _) = panel_with_links(2);
        doc.focus(close);
        assert_eq!(cycle(&mut doc, panel, false), TrapOutcome::PassThrough);
        assert_eq!(cycle(&mut doc, panel, true), TrapOutcome::PassThrough);
    }

    #[test]
    fn single_link_stays_put() {
        let (mut doc, panel, _, links) = panel_with_links(1);
        doc.focus(links[0]);
        assert_eq!(cycle(&mut doc, panel, false), TrapOutcome::Wrapped(links[0]));
        assert_eq!(cycle(&mut doc, panel, true), TrapOutcome::Wrapped(links[0]));
    }

    #[test]
    fn empty_panel_is_a_no_op() {
        let (mut doc, panel, close, _) = panel_with_links(0);
        doc.focus(close);
        assert_eq!(cycle(&mut doc, panel, false), TrapOutcome::PassThrough);
        assert_eq!(doc.active_element(), Some(close));
    }
}
