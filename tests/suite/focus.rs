//! Keyboard reachability while the drawer is open.

use sitenav_core::{Key, SiteResponse};

use crate::common::{SETTLE, phone_site, run_frames};

#[test]
fn tab_wraps_inside_drawer_links() {
    let mut site = phone_site();
    let h = site.handles().clone();
    site.click(h.toggle);
    run_frames(&mut site, SETTLE);

    let first = h.panel_links[0];
    let last = *h.panel_links.last().expect("links");

    site.press_key(Key::BackTab);
    assert_eq!(site.doc().active_element(), Some(last));
    site.press_key(Key::Tab);
    assert_eq!(site.doc().active_element(), Some(first));

    // Middle links use the default order.
    site.press_key(Key::Tab);
    assert_eq!(site.doc().active_element(), Some(h.panel_links[1]));
}

#[test]
fn landmarks_leave_focus_order_while_open() {
    let mut site = phone_site();
    let h = site.handles().clone();
    let read_more = *site
        .doc()
        .links_within(h.main)
        .first()
        .expect("page has a link");
    assert!(site.doc().focus_order().contains(&read_more));

    site.click(h.toggle);
    let order = site.doc().focus_order();
    assert!(!order.contains(&read_more));
    assert!(h.footer_links.iter().all(|link| !order.contains(link)));
    assert!(order.contains(&h.close_button));

    site.click(h.close_button);
    let order = site.doc().focus_order();
    assert!(order.contains(&read_more));
    assert!(h.panel_links.iter().all(|link| !order.contains(link)));
}

#[test]
fn close_button_closes_but_is_outside_the_cycle() {
    let mut site = phone_site();
    let h = site.handles().clone();
    site.click(h.toggle);
    run_frames(&mut site, SETTLE);

    site.press_key(Key::BackTab);
    assert_ne!(site.doc().active_element(), Some(h.close_button));

    assert_eq!(site.click(h.close_button), SiteResponse::Handled);
    assert!(!site.nav().is_open());
}

#[test]
fn enter_on_focused_drawer_link_navigates() {
    let mut site = phone_site();
    let h = site.handles().clone();
    site.click(h.toggle);
    run_frames(&mut site, SETTLE);

    site.press_key(Key::BackTab);
    let last = *h.panel_links.last().expect("links");
    let href = site.doc().attribute(last, "href").map(str::to_owned);
    assert_eq!(site.press_key(Key::Enter), SiteResponse::Navigated(href.expect("href")));
    assert!(!site.nav().is_open());
}
