//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::time::Duration;

use sitenav_config::SiteConfig;
use sitenav_core::Site;
use sitenav_types::Viewport;

/// iPhone-class portrait viewport.
pub const PHONE: Viewport = Viewport::new(390, 844);

/// Longer than both focus delays and the drawer slide.
pub const SETTLE: Duration = Duration::from_millis(250);

pub fn phone_site() -> Site {
    site_at(PHONE)
}

pub fn site_at(viewport: Viewport) -> Site {
    Site::build(&SiteConfig::default(), viewport).expect("default site builds")
}

/// Advance the clock in frame-sized steps, like the render loop does.
pub fn run_frames(site: &mut Site, total: Duration) {
    const FRAME: Duration = Duration::from_millis(8);
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        site.tick(FRAME);
        elapsed += FRAME;
    }
}

pub fn attr<'a>(site: &'a Site, id: sitenav_dom::ElementId, name: &str) -> Option<&'a str> {
    site.doc().attribute(id, name)
}
