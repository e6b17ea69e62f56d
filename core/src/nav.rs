//! Mobile navigation drawer: open/close state machine.
//!
//! # Lifecycle
//!
//! ```text
//!            toggle
//!   Closed ─────────▶ Open
//!     ▲                 │  toggle | Escape | overlay click |
//!     └─────────────────┘  panel link | resize into desktop width
//! ```
//!
//! Every event first mutates the `open` flag and re-renders ARIA attributes,
//! then runs the effect pass. The effect pass compares the flag with the
//! currently held [`OpenScope`]: entering `Open` acquires one (inert landmarks,
//! scroll blocker, deferred focus), leaving `Open` releases exactly what was
//! acquired. [`MobileNav::unmount`] releases it too, and clears every timer
//! so no focus moves after the component is gone.

use std::time::Duration;

use sitenav_config::NavConfig;
use sitenav_dom::{BlockerId, Document, ElementId, InputKind};
use sitenav_types::ui::PanelEffect;
use sitenav_types::{Breakpoint, Locale, Viewport};

use crate::timers::{TimerId, Timers};
use crate::toggle::{ToggleControl, render_overlay, render_panel};
use crate::trap::{self, TrapOutcome};

const SCROLL_INPUTS: &[InputKind] = &[InputKind::Wheel, InputKind::TouchMove, InputKind::ScrollKey];

/// Explicit handles to everything the drawer touches.
#[derive(Debug, Clone)]
pub struct NavHandles {
    pub toggle: ElementId,
    pub overlay: ElementId,
    pub panel: ElementId,
    /// Elements made inert while open (`main`, `footer`).
    pub landmarks: Vec<ElementId>,
}

#[derive(Debug, Clone, Copy)]
pub struct NavSettings {
    pub breakpoint: Breakpoint,
    pub open_focus_delay: Duration,
    pub close_restore_delay: Duration,
    pub panel_slide: Duration,
    pub reduced_motion: bool,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            breakpoint: Breakpoint::default(),
            open_focus_delay: Duration::from_millis(50),
            close_restore_delay: Duration::from_millis(10),
            panel_slide: Duration::from_millis(180),
            reduced_motion: false,
        }
    }
}

impl NavSettings {
    #[must_use]
    pub fn from_config(nav: &NavConfig, reduced_motion: bool) -> Self {
        Self {
            breakpoint: nav.breakpoint(),
            open_focus_delay: nav.open_focus_delay(),
            close_restore_delay: nav.close_restore_delay(),
            panel_slide: nav.panel_slide(),
            reduced_motion,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPhase {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
    pub previously_focused: Option<ElementId>,
}

impl MenuState {
    #[must_use]
    pub fn phase(&self) -> MenuPhase {
        if self.open {
            MenuPhase::Open
        } else {
            MenuPhase::Closed
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Click on the toggle, or Enter/Space while it is focused.
    ToggleActivated,
    /// The panel's own close button.
    CloseRequested,
    Escape,
    OverlayClicked,
    /// A link was activated; only links inside the panel close the drawer.
    LinkActivated(ElementId),
    Resized(Viewport),
    Tab { backward: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The event changed nothing; the caller should run the default action.
    Ignored,
    /// The event was consumed.
    Handled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Toggle,
    CloseButton,
    Escape,
    Overlay,
    Link,
    Breakpoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredFocus {
    FirstLink,
    Restore(ElementId),
}

/// Document-level side effects held while the drawer is open.
#[derive(Debug)]
#[must_use = "an OpenScope must be released or the page stays locked"]
struct OpenScope {
    /// Only landmarks this scope made inert; pre-existing `inert` is left alone.
    inerted: Vec<ElementId>,
    blocker: BlockerId,
    focus_timer: TimerId,
}

#[derive(Debug)]
pub struct MobileNav {
    handles: NavHandles,
    toggle: ToggleControl,
    settings: NavSettings,
    state: MenuState,
    scope: Option<OpenScope>,
    pending_restore: Option<TimerId>,
    timers: Timers<DeferredFocus>,
    viewport: Viewport,
    locale: Locale,
    effect: Option<PanelEffect>,
}

impl MobileNav {
    /// Mount closed and render the closed attributes.
    pub fn mount(
        doc: &mut Document,
        handles: NavHandles,
        settings: NavSettings,
        viewport: Viewport,
        locale: Locale,
    ) -> Self {
        let nav = Self {
            toggle: ToggleControl::new(handles.toggle),
            handles,
            settings,
            state: MenuState::default(),
            scope: None,
            pending_restore: None,
            timers: Timers::new(),
            viewport,
            locale,
            effect: None,
        };
        nav.render(doc);
        nav
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.open
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    #[must_use]
    pub fn handles(&self) -> &NavHandles {
        &self.handles
    }

    #[must_use]
    pub fn settings(&self) -> &NavSettings {
        &self.settings
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Running slide animation, if any.
    #[must_use]
    pub fn panel_effect(&self) -> Option<&PanelEffect> {
        self.effect.as_ref()
    }

    /// Number of deferred focus callbacks not yet fired.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn handle(&mut self, doc: &mut Document, event: NavEvent) -> NavOutcome {
        match event {
            NavEvent::ToggleActivated => {
                self.transition(doc, !self.state.open, CloseReason::Toggle);
                NavOutcome::Handled
            }
            NavEvent::CloseRequested => self.close(doc, CloseReason::CloseButton),
            NavEvent::Escape => self.close(doc, CloseReason::Escape),
            NavEvent::OverlayClicked => self.close(doc, CloseReason::Overlay),
            NavEvent::LinkActivated(link) => {
                if doc.contains(self.handles.panel, link) {
                    self.close(doc, CloseReason::Link)
                } else {
                    NavOutcome::Ignored
                }
            }
            NavEvent::Resized(next) => {
                let crossed = self.settings.breakpoint.crossed_into_wide(self.viewport, next);
                self.viewport = next;
                if crossed {
                    self.close(doc, CloseReason::Breakpoint)
                } else {
                    NavOutcome::Ignored
                }
            }
            NavEvent::Tab { backward } => {
                if !self.state.open {
                    return NavOutcome::Ignored;
                }
                match trap::cycle(doc, self.handles.panel, backward) {
                    TrapOutcome::Wrapped(_) => NavOutcome::Handled,
                    TrapOutcome::PassThrough => NavOutcome::Ignored,
                }
            }
        }
    }

    fn close(&mut self, doc: &mut Document, reason: CloseReason) -> NavOutcome {
        if !self.state.open {
            return NavOutcome::Ignored;
        }
        self.transition(doc, false, reason);
        NavOutcome::Handled
    }

    fn transition(&mut self, doc: &mut Document, open: bool, reason: CloseReason) {
        self.state.open = open;
        if open {
            tracing::debug!("Navigation drawer opened");
        } else {
            tracing::debug!(?reason, "Navigation drawer closed");
        }
        self.start_slide(open);
        self.render(doc);
        self.run_effects(doc);
    }

    fn start_slide(&mut self, open: bool) {
        if self.settings.reduced_motion {
            self.effect = None;
            return;
        }
        self.effect = Some(match self.effect.take() {
            Some(running) if !running.is_finished() => running.reversed(),
            _ if open => PanelEffect::slide_in(self.settings.panel_slide),
            _ => PanelEffect::slide_out(self.settings.panel_slide),
        });
    }

    fn render(&self, doc: &mut Document) {
        let open = self.state.open;
        self.toggle.render(doc, open, self.locale);
        render_panel(doc, self.handles.panel, open);
        render_overlay(doc, self.handles.overlay, open);
        // A closed panel is inert; focus must not stay inside it.
        doc.revalidate_focus();
    }

    /// Effect pass keyed on the `open` flag.
    fn run_effects(&mut self, doc: &mut Document) {
        match (self.state.open, self.scope.take()) {
            (true, None) => self.scope = Some(self.acquire(doc)),
            (false, Some(scope)) => {
                self.release(doc, scope);
                self.schedule_restore();
            }
            (_, scope) => self.scope = scope,
        }
    }

    fn acquire(&mut self, doc: &mut Document) -> OpenScope {
        // A restore still pending from the previous close carries its target over,
        // so capture and consume stay paired.
        let carried = self
            .pending_restore
            .take()
            .and_then(|timer| self.timers.cancel(timer))
            .and_then(|task| match task {
                DeferredFocus::Restore(target) => Some(target),
                DeferredFocus::FirstLink => None,
            });
        self.state.previously_focused = carried.or_else(|| doc.active_element());

        let inerted: Vec<ElementId> = self
            .handles
            .landmarks
            .iter()
            .copied()
            .filter(|&landmark| !doc.has_attribute(landmark, "inert"))
            .collect();
        for &landmark in &inerted {
            doc.toggle_attribute(landmark, "inert", true);
        }
        doc.revalidate_focus();

        let blocker = doc.add_blocker(SCROLL_INPUTS);
        let focus_timer = self
            .timers
            .schedule(self.settings.open_focus_delay, DeferredFocus::FirstLink);

        OpenScope {
            inerted,
            blocker,
            focus_timer,
        }
    }

    fn release(&mut self, doc: &mut Document, scope: OpenScope) {
        self.timers.cancel(scope.focus_timer);
        doc.remove_blocker(scope.blocker);
        for landmark in scope.inerted {
            doc.toggle_attribute(landmark, "inert", false);
        }
    }

    fn schedule_restore(&mut self) {
        if let Some(target) = self.state.previously_focused.take() {
            let timer = self.timers.schedule(
                self.settings.close_restore_delay,
                DeferredFocus::Restore(target),
            );
            self.pending_restore = Some(timer);
        }
    }

    /// Advance deferred focus callbacks and the slide animation.
    pub fn tick(&mut self, doc: &mut Document, delta: Duration) {
        if let Some(effect) = self.effect.as_mut() {
            effect.advance(delta);
            if effect.is_finished() {
                self.effect = None;
            }
        }

        for task in self.timers.advance(delta) {
            match task {
                DeferredFocus::FirstLink => {
                    if !self.state.open {
                        continue;
                    }
                    match doc.links_within(self.handles.panel).first() {
                        Some(&first) => {
                            doc.focus(first);
                        }
                        None => tracing::trace!("drawer has no links to focus"),
                    }
                }
                DeferredFocus::Restore(target) => {
                    self.pending_restore = None;
                    if doc.is_connected(target) {
                        doc.focus(target);
                    } else {
                        tracing::trace!(%target, "restore target detached; focus left as is");
                    }
                }
            }
        }
    }

    pub fn set_locale(&mut self, doc: &mut Document, locale: Locale) {
        self.locale = locale;
        self.toggle.render(doc, self.state.open, locale);
    }

    /// Tear down: release held side effects and drop pending callbacks without running them.
    pub fn unmount(mut self, doc: &mut Document) {
        if let Some(scope) = self.scope.take() {
            self.release(doc, scope);
        }
        self.timers.clear();
        self.pending_restore = None;
        self.state = MenuState::default();
        tracing::debug!("Navigation drawer unmounted");
    }
}
