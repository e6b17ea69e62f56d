//! End-to-end drawer scenarios driven through the site shell.

use std::time::Duration;

use sitenav_core::{Key, SiteResponse};
use sitenav_types::Viewport;

use crate::common::{SETTLE, attr, phone_site, run_frames, site_at};

#[test]
fn toggle_then_overlay_click() {
    let mut site = phone_site();
    let h = site.handles().clone();

    assert_eq!(attr(&site, h.toggle, "aria-expanded"), Some("false"));
    assert_eq!(attr(&site, h.toggle, "aria-controls"), Some("mobile-nav-panel"));
    assert_eq!(attr(&site, h.panel, "aria-hidden"), Some("true"));
    assert_eq!(attr(&site, h.panel, "role"), None);

    assert_eq!(site.click(h.toggle), SiteResponse::Handled);
    assert_eq!(attr(&site, h.toggle, "aria-expanded"), Some("true"));
    assert_eq!(attr(&site, h.panel, "role"), Some("dialog"));
    assert_eq!(attr(&site, h.panel, "aria-modal"), Some("true"));
    assert_eq!(attr(&site, h.panel, "aria-hidden"), Some("false"));

    assert_eq!(site.click(h.overlay), SiteResponse::Handled);
    assert!(!site.nav().is_open());
    assert_eq!(attr(&site, h.toggle, "aria-expanded"), Some("false"));
    assert_eq!(attr(&site, h.panel, "aria-hidden"), Some("true"));
}

#[test]
fn toggle_activations_alternate() {
    let mut site = phone_site();
    let toggle = site.handles().toggle;
    for i in 0..5 {
        site.click(toggle);
        assert_eq!(site.nav().is_open(), i % 2 == 0, "after {} clicks", i + 1);
        run_frames(&mut site, Duration::from_millis(16));
    }
}

#[test]
fn resize_into_desktop_width_forces_close() {
    let mut site = site_at(Viewport::new(900, 844));
    let toggle = site.handles().toggle;
    site.click(toggle);

    assert_eq!(site.resize(Viewport::new(990, 844)), SiteResponse::Ignored);
    assert!(site.nav().is_open());

    assert_eq!(site.resize(Viewport::new(1200, 844)), SiteResponse::Handled);
    assert!(!site.nav().is_open());
    assert_eq!(attr(&site, toggle, "aria-expanded"), Some("false"));
    assert!(site.is_wide());
    assert!(site.doc().has_attribute(toggle, "hidden"));
    assert_eq!(site.doc().blocker_count(), 0);
}

#[test]
fn drawer_link_closes_before_navigation() {
    let mut site = phone_site();
    let h = site.handles().clone();
    site.click(h.toggle);
    run_frames(&mut site, SETTLE);

    let services = h.panel_links[1];
    assert_eq!(attr(&site, services, "href"), Some("/services"));
    assert_eq!(
        site.click(services),
        SiteResponse::Navigated("/services".to_string())
    );
    assert!(!site.nav().is_open());
    assert_eq!(site.location(), "/services");
    assert!(!site.doc().has_attribute(h.main, "inert"));
}

#[test]
fn triple_enter_settles_open() {
    let mut site = phone_site();
    let h = site.handles().clone();

    // Brand link first, then the toggle.
    site.press_key(Key::Tab);
    site.press_key(Key::Tab);
    assert_eq!(site.doc().active_element(), Some(h.toggle));

    for _ in 0..3 {
        site.press_key(Key::Enter);
        site.tick(Duration::from_millis(10));
    }
    run_frames(&mut site, SETTLE);

    assert!(site.nav().is_open());
    assert_eq!(attr(&site, h.toggle, "aria-expanded"), Some("true"));
    assert_eq!(attr(&site, h.panel, "role"), Some("dialog"));
    assert_eq!(attr(&site, h.panel, "aria-hidden"), Some("false"));
    assert!(site.doc().has_attribute(h.main, "inert"));
    assert!(site.doc().has_attribute(h.footer, "inert"));
    assert_eq!(site.doc().blocker_count(), 1);
    assert_eq!(site.doc().active_element(), Some(h.panel_links[0]));
}

#[test]
fn escape_returns_focus_to_toggle() {
    let mut site = phone_site();
    let h = site.handles().clone();
    site.click(h.toggle);
    run_frames(&mut site, SETTLE);
    assert_eq!(site.doc().active_element(), Some(h.panel_links[0]));

    assert_eq!(site.press_key(Key::Escape), SiteResponse::Handled);
    run_frames(&mut site, SETTLE);
    assert_eq!(site.doc().active_element(), Some(h.toggle));
    assert_eq!(site.press_key(Key::Escape), SiteResponse::Ignored);
}

#[test]
fn scrolling_is_locked_only_while_open() {
    let mut site = phone_site();
    site.set_scroll_extent(40);
    let toggle = site.handles().toggle;

    site.wheel(3);
    assert_eq!(site.doc().scroll_offset(), 3);

    site.click(toggle);
    assert_eq!(site.wheel(3), SiteResponse::Ignored);
    assert_eq!(site.touch_move(5), SiteResponse::Ignored);
    // End does not activate the focused toggle, so it reaches the blocked scroll path.
    site.press_key(Key::End);
    assert_eq!(site.doc().scroll_offset(), 3);

    site.click(toggle);
    site.press_key(Key::End);
    assert_eq!(site.doc().scroll_offset(), 40);
}

#[test]
fn no_timers_left_after_settling() {
    let mut site = phone_site();
    let toggle = site.handles().toggle;
    site.click(toggle);
    site.click(toggle);
    run_frames(&mut site, SETTLE);
    assert_eq!(site.nav().pending_timers(), 0);
    assert!(site.nav().panel_effect().is_none());
}
