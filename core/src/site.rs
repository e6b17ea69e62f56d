//! The site shell around the drawer: document construction and input routing.

use std::time::Duration;

use sitenav_config::{NavLink, SiteConfig};
use sitenav_dom::{Document, DomError, ElementId, InputKind, Tag};
use sitenav_types::{Label, Locale, ThemeMode, Viewport, text};

use crate::input::{Key, LINE_STEP};
use crate::language::LanguageToggle;
use crate::nav::{MobileNav, NavEvent, NavHandles, NavOutcome, NavSettings};
use crate::pages::page_for;
use crate::theme::{THEME_ATTRIBUTE, ThemeToggle};
use crate::toggle::{PANEL_DOM_ID, ToggleControl};

pub const DEFAULT_BRAND: &str = "Northwind Labs";
const READ_MORE_HREF: &str = "/contact";
const FOOTER_LINKS: [(&str, Label); 2] = [("/imprint", Label::Imprint), ("/privacy", Label::Privacy)];

/// Every element the site keeps a handle to, created once in [`Site::build`].
#[derive(Debug, Clone)]
pub struct SiteHandles {
    pub root: ElementId,
    pub header: ElementId,
    pub brand: ElementId,
    pub desktop_nav: ElementId,
    pub desktop_links: Vec<ElementId>,
    pub toggle: ElementId,
    pub overlay: ElementId,
    pub panel: ElementId,
    pub close_button: ElementId,
    pub theme_toggle: ElementId,
    pub language_toggle: ElementId,
    pub panel_links: Vec<ElementId>,
    pub main: ElementId,
    pub footer: ElementId,
    pub footer_links: Vec<ElementId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteResponse {
    Ignored,
    Handled,
    /// A link was followed; the drawer (if it was open) is already closed.
    Navigated(String),
}

impl From<NavOutcome> for SiteResponse {
    fn from(outcome: NavOutcome) -> Self {
        match outcome {
            NavOutcome::Ignored => SiteResponse::Ignored,
            NavOutcome::Handled => SiteResponse::Handled,
        }
    }
}

#[derive(Debug)]
pub struct Site {
    doc: Document,
    handles: SiteHandles,
    nav: MobileNav,
    theme: ThemeToggle,
    language: LanguageToggle,
    links: Vec<NavLink>,
    brand: String,
    location: String,
    viewport: Viewport,
}

impl Site {
    pub fn build(config: &SiteConfig, viewport: Viewport) -> Result<Self, DomError> {
        let locale = config.app.locale.unwrap_or_default();
        let theme = config.app.theme.unwrap_or_default();
        let brand = config
            .app
            .brand
            .clone()
            .unwrap_or_else(|| DEFAULT_BRAND.to_string());
        let links = config.nav.links.clone();

        let mut doc = Document::new();
        let root = doc.root();
        doc.set_attribute(root, THEME_ATTRIBUTE, theme.as_str());

        let header = doc.append_new(root, Tag::Header, "", &[])?;
        let brand_link = doc.append_new(
            header,
            Tag::Anchor,
            &brand,
            &[("href", "/"), ("class", "brand")],
        )?;
        let desktop_nav = doc.append_new(header, Tag::Nav, "", &[("class", "desktop")])?;
        let desktop_links = links
            .iter()
            .map(|link| {
                doc.append_new(
                    desktop_nav,
                    Tag::Anchor,
                    link.label_for(locale),
                    &[("href", link.href.as_str())],
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        let toggle = doc.append_new(header, Tag::Button, "", &[("id", "mobile-nav-toggle")])?;

        let overlay = doc.append_new(root, Tag::Div, "", &[("id", "mobile-nav-overlay")])?;

        let panel = doc.append_new(root, Tag::Aside, "", &[("id", PANEL_DOM_ID)])?;
        let close_button = doc.append_new(
            panel,
            Tag::Button,
            "",
            &[("class", "close"), ("aria-label", text(Label::CloseMenu, locale))],
        )?;
        let theme_toggle = doc.append_new(panel, Tag::Button, "", &[("class", "theme-toggle")])?;
        let language_toggle =
            doc.append_new(panel, Tag::Button, "", &[("class", "language-toggle")])?;
        let panel_links = links
            .iter()
            .map(|link| {
                doc.append_new(
                    panel,
                    Tag::Anchor,
                    link.label_for(locale),
                    &[("href", link.href.as_str())],
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let main = doc.append_new(root, Tag::Main, "", &[])?;
        let footer = doc.append_new(root, Tag::Footer, "", &[])?;
        let footer_links = FOOTER_LINKS
            .iter()
            .map(|&(href, label)| {
                doc.append_new(footer, Tag::Anchor, text(label, locale), &[("href", href)])
            })
            .collect::<Result<Vec<_>, _>>()?;

        let handles = SiteHandles {
            root,
            header,
            brand: brand_link,
            desktop_nav,
            desktop_links,
            toggle,
            overlay,
            panel,
            close_button,
            theme_toggle,
            language_toggle,
            panel_links,
            main,
            footer,
            footer_links,
        };

        let nav = MobileNav::mount(
            &mut doc,
            NavHandles {
                toggle,
                overlay,
                panel,
                landmarks: vec![main, footer],
            },
            NavSettings::from_config(&config.nav, config.app.reduced_motion),
            viewport,
            locale,
        );
        let theme = ThemeToggle::mount(&mut doc, theme_toggle, root, locale);
        let language = LanguageToggle::mount(&mut doc, language_toggle, root, locale);

        let mut site = Self {
            doc,
            handles,
            nav,
            theme,
            language,
            links,
            brand,
            location: "/".to_string(),
            viewport,
        };
        site.render_page()?;
        site.apply_layout();
        tracing::debug!(links = site.links.len(), "Site built");
        Ok(site)
    }

    #[must_use]
    pub fn doc(&self) -> &Document {
        &self.doc
    }

    #[must_use]
    pub fn handles(&self) -> &SiteHandles {
        &self.handles
    }

    #[must_use]
    pub fn nav(&self) -> &MobileNav {
        &self.nav
    }

    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.language.locale()
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode(&self.doc)
    }

    /// Whether the desktop link row is shown instead of the mobile toggle.
    #[must_use]
    pub fn is_wide(&self) -> bool {
        self.nav.settings().breakpoint.is_wide(self.viewport)
    }

    pub fn press_key(&mut self, key: Key) -> SiteResponse {
        match key {
            Key::Escape => self.nav.handle(&mut self.doc, NavEvent::Escape).into(),
            Key::Tab | Key::BackTab => {
                let backward = key == Key::BackTab;
                if self.nav.handle(&mut self.doc, NavEvent::Tab { backward }) == NavOutcome::Ignored {
                    self.doc.focus_next(backward);
                }
                SiteResponse::Handled
            }
            Key::Enter | Key::Space => {
                if let Some(active) = self.activation_target(key) {
                    return self.activate(active);
                }
                self.scroll_key(key)
            }
            _ => self.scroll_key(key),
        }
    }

    fn activation_target(&self, key: Key) -> Option<ElementId> {
        let active = self.doc.active_element()?;
        if active == self.handles.toggle {
            return ToggleControl::is_activation_key(key).then_some(active);
        }
        match self.doc.tag(active)? {
            Tag::Button => Some(active),
            Tag::Anchor if key == Key::Enter => Some(active),
            _ => None,
        }
    }

    fn scroll_key(&mut self, key: Key) -> SiteResponse {
        match key.scroll_delta() {
            Some(delta) if self.doc.scroll_by(InputKind::ScrollKey, delta) => SiteResponse::Handled,
            _ => SiteResponse::Ignored,
        }
    }

    /// Pointer click on an element. Inert or detached targets ignore the click.
    pub fn click(&mut self, id: ElementId) -> SiteResponse {
        if !self.doc.is_connected(id) || self.doc.is_inert(id) {
            tracing::trace!(%id, "click on inert element ignored");
            return SiteResponse::Ignored;
        }
        if self.doc.is_focusable(id) {
            self.doc.focus(id);
        }
        self.activate(id)
    }

    fn activate(&mut self, id: ElementId) -> SiteResponse {
        if self.doc.is_inert(id) {
            return SiteResponse::Ignored;
        }
        if id == self.handles.toggle {
            return self.nav.handle(&mut self.doc, NavEvent::ToggleActivated).into();
        }
        if id == self.handles.overlay {
            return self.nav.handle(&mut self.doc, NavEvent::OverlayClicked).into();
        }
        if id == self.handles.close_button {
            return self.nav.handle(&mut self.doc, NavEvent::CloseRequested).into();
        }
        if id == self.handles.theme_toggle {
            self.theme.activate(&mut self.doc);
            self.theme.sync(&mut self.doc);
            return SiteResponse::Handled;
        }
        if id == self.handles.language_toggle {
            let locale = self.language.activate(&mut self.doc);
            self.apply_locale(locale);
            return SiteResponse::Handled;
        }
        match self.doc.attribute(id, "href").map(str::to_owned) {
            Some(href) => {
                // Close first, then report the navigation.
                self.nav.handle(&mut self.doc, NavEvent::LinkActivated(id));
                self.navigate(&href);
                SiteResponse::Navigated(href)
            }
            None => SiteResponse::Ignored,
        }
    }

    pub fn wheel(&mut self, notches: i32) -> SiteResponse {
        if self.doc.scroll_by(InputKind::Wheel, notches * LINE_STEP) {
            SiteResponse::Handled
        } else {
            SiteResponse::Ignored
        }
    }

    pub fn touch_move(&mut self, delta: i32) -> SiteResponse {
        if self.doc.scroll_by(InputKind::TouchMove, delta) {
            SiteResponse::Handled
        } else {
            SiteResponse::Ignored
        }
    }

    pub fn resize(&mut self, viewport: Viewport) -> SiteResponse {
        let response: SiteResponse = self.nav.handle(&mut self.doc, NavEvent::Resized(viewport)).into();
        self.viewport = viewport;
        self.apply_layout();
        response
    }

    /// Flip the theme without going through the panel button, as a site-wide shortcut would.
    pub fn cycle_theme(&mut self) -> ThemeMode {
        let next = self.theme_mode().toggled();
        let root = self.handles.root;
        self.doc.set_attribute(root, THEME_ATTRIBUTE, next.as_str());
        next
    }

    /// Advance the frame clock: deferred focus, the slide effect and theme observers.
    pub fn tick(&mut self, delta: Duration) {
        self.nav.tick(&mut self.doc, delta);
        self.theme.sync(&mut self.doc);
    }

    pub fn set_scroll_extent(&mut self, max: u32) {
        self.doc.set_scroll_extent(max);
    }

    pub fn navigate(&mut self, href: &str) {
        tracing::debug!(from = %self.location, to = href, "Navigating");
        self.location = href.to_string();
        if let Err(err) = self.render_page() {
            tracing::warn!("Failed to render page for {href}: {err}");
        }
        self.doc.reset_scroll();
    }

    fn render_page(&mut self) -> Result<(), DomError> {
        let main = self.handles.main;
        let locale = self.locale();
        let page = page_for(&self.location, locale);
        self.doc.clear_children(main);
        self.doc.append_new(main, Tag::Heading, page.title, &[])?;
        if !page.summary.is_empty() {
            self.doc.append_new(main, Tag::Paragraph, page.summary, &[])?;
        }
        self.doc.append_new(
            main,
            Tag::Anchor,
            text(Label::ReadMore, locale),
            &[("href", READ_MORE_HREF)],
        )?;
        Ok(())
    }

    fn apply_locale(&mut self, locale: Locale) {
        for (link, &id) in self.links.iter().zip(&self.handles.panel_links) {
            self.doc.set_text(id, link.label_for(locale));
        }
        for (link, &id) in self.links.iter().zip(&self.handles.desktop_links) {
            self.doc.set_text(id, link.label_for(locale));
        }
        for (&(_, label), &id) in FOOTER_LINKS.iter().zip(&self.handles.footer_links) {
            self.doc.set_text(id, text(label, locale));
        }
        let close = self.handles.close_button;
        self.doc
            .set_attribute(close, "aria-label", text(Label::CloseMenu, locale));
        self.nav.set_locale(&mut self.doc, locale);
        self.theme.set_locale(&mut self.doc, locale);
        if let Err(err) = self.render_page() {
            tracing::warn!("Failed to re-render page: {err}");
        }
    }

    fn apply_layout(&mut self) {
        let wide = self.is_wide();
        let (desktop_nav, toggle) = (self.handles.desktop_nav, self.handles.toggle);
        self.doc.toggle_attribute(desktop_nav, "hidden", !wide);
        self.doc.toggle_attribute(toggle, "hidden", wide);
        self.doc.revalidate_focus();
    }

    /// Tear down the drawer and the theme subscription.
    pub fn unmount(self) -> Document {
        let Self {
            mut doc,
            nav,
            theme,
            ..
        } = self;
        nav.unmount(&mut doc);
        theme.unmount(&mut doc);
        doc
    }
}
