use std::time::Duration;

use sitenav_core::Site;
use sitenav_types::Viewport;
use sitenav_types::ui::UiOptions;

use crate::hitmap::HitMap;

/// Terminal-side state around a [`Site`]: options, the last frame's hit map and quit flag.
#[derive(Debug)]
pub struct App {
    site: Site,
    options: UiOptions,
    hits: HitMap,
    cell_width_px: u32,
    cell_height_px: u32,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(site: Site, options: UiOptions, cell_width_px: u32, cell_height_px: u32) -> Self {
        Self {
            site,
            options,
            hits: HitMap::default(),
            cell_width_px,
            cell_height_px,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn site_mut(&mut self) -> &mut Site {
        &mut self.site
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut Site, &mut HitMap) {
        (&mut self.site, &mut self.hits)
    }

    /// Viewport in CSS px for a terminal of `cols` x `rows` cells.
    #[must_use]
    pub fn viewport_for(&self, cols: u16, rows: u16) -> Viewport {
        Viewport::from_cells(cols, rows, self.cell_width_px, self.cell_height_px)
    }

    pub fn tick(&mut self, delta: Duration) {
        self.site.tick(delta);
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Hand the site back for teardown.
    #[must_use]
    pub fn into_site(self) -> Site {
        self.site
    }
}
