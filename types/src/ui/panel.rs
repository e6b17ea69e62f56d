//! Slide animation for the navigation drawer.

use std::time::Duration;

use super::animation::{EffectTimer, ease_out_cubic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEffectKind {
    SlideIn,
    SlideOut,
}

#[derive(Debug, Clone)]
pub struct PanelEffect {
    kind: PanelEffectKind,
    timer: EffectTimer,
}

impl PanelEffect {
    #[must_use]
    pub fn slide_in(duration: Duration) -> Self {
        Self {
            kind: PanelEffectKind::SlideIn,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn slide_out(duration: Duration) -> Self {
        Self {
            kind: PanelEffectKind::SlideOut,
            timer: EffectTimer::new(duration),
        }
    }

    /// Turn a running slide around without a visual jump.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let visible = self.visible_fraction();
        let (kind, eased) = match self.kind {
            PanelEffectKind::SlideIn => (PanelEffectKind::SlideOut, 1.0 - visible),
            PanelEffectKind::SlideOut => (PanelEffectKind::SlideIn, visible),
        };
        // Inverse of ease_out_cubic.
        let progress = 1.0 - (1.0 - eased.clamp(0.0, 1.0)).cbrt();
        Self {
            kind,
            timer: EffectTimer::starting_at(self.timer.duration(), progress),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    /// Share of the drawer width currently on screen (0.0 hidden, 1.0 fully shown).
    #[must_use]
    pub fn visible_fraction(&self) -> f32 {
        let t = ease_out_cubic(self.timer.progress());
        match self.kind {
            PanelEffectKind::SlideIn => t,
            PanelEffectKind::SlideOut => 1.0 - t,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    #[must_use]
    pub fn kind(&self) -> PanelEffectKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_in_initial_state() {
        let effect = PanelEffect::slide_in(Duration::from_millis(180));
        assert_eq!(effect.kind(), PanelEffectKind::SlideIn);
        assert!(!effect.is_finished());
        assert!(effect.visible_fraction() < 0.1);
    }

    #[test]
    fn slide_out_starts_fully_visible() {
        let effect = PanelEffect::slide_out(Duration::from_millis(180));
        assert_eq!(effect.kind(), PanelEffectKind::SlideOut);
        assert!((effect.visible_fraction() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn finished_and_clamped() {
        let mut effect = PanelEffect::slide_in(Duration::from_millis(10));
        effect.advance(Duration::from_millis(50));
        assert!(effect.is_finished());
        assert!((effect.visible_fraction() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_duration_immediately_finished() {
        let effect = PanelEffect::slide_out(Duration::ZERO);
        assert!(effect.is_finished());
        assert!(effect.visible_fraction().abs() < f32::EPSILON);
    }

    #[test]
    fn reversing_mid_slide_keeps_position() {
        let mut effect = PanelEffect::slide_in(Duration::from_millis(200));
        effect.advance(Duration::from_millis(60));
        let before = effect.visible_fraction();

        let reversed = effect.reversed();
        assert_eq!(reversed.kind(), PanelEffectKind::SlideOut);
        assert!((reversed.visible_fraction() - before).abs() < 0.01);
        assert!(!reversed.is_finished());
    }
}
