//! Class bookkeeping for scroll-triggered entrance animations.
//!
//! The observer hook lives in `app::reveal`; this module only decides which
//! classes an element carries before and after it has been seen.

/// Fraction of an element that must be inside the viewport before it counts
/// as seen.
pub const THRESHOLD: f64 = 0.1;

pub const SKILL_BAR_STEP_MS: u32 = 150;
pub const PROJECT_STEP_MS: u32 = 100;
pub const TIMELINE_STEP_MS: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Opacity only.
    Fade,
    /// Fade in while moving up into place.
    Rise,
    /// Fade in while sliding in from the right.
    Slide,
}

impl Motion {
    fn hidden(self) -> &'static str {
        match self {
            Motion::Fade => "opacity-0",
            Motion::Rise => "opacity-0 translate-y-12",
            Motion::Slide => "opacity-0 translate-x-8",
        }
    }

    /// Transition utility covering only the properties this motion animates.
    /// Staggered elements carry this instead of `transition-all` so their
    /// `transition-delay` never leaks into hover or theme changes.
    pub fn transition(self) -> &'static str {
        match self {
            Motion::Fade => "transition-opacity",
            Motion::Rise | Motion::Slide => "transition-[opacity,transform]",
        }
    }

    fn shown(self) -> &'static str {
        match self {
            Motion::Fade => "opacity-100",
            Motion::Rise => "opacity-100 translate-y-0",
            Motion::Slide => "opacity-100 translate-x-0",
        }
    }
}

/// Visibility only ever latches on: once an element has been seen it stays
/// revealed even after it scrolls back out.
pub fn latch(revealed: bool, intersecting: bool) -> bool {
    revealed || intersecting
}

pub fn reveal_class(base: &str, motion: Motion, revealed: bool) -> String {
    let state = if revealed {
        motion.shown()
    } else {
        motion.hidden()
    };
    format!("{base} {state}")
}

pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

pub fn stagger_style(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms", stagger_delay_ms(index, step_ms))
}

/// Inline style for a skill bar: empty until revealed, then filled to
/// `level` percent after its staggered delay.
pub fn skill_bar_style(level: u8, index: usize, revealed: bool) -> String {
    let width = if revealed { level.min(100) } else { 0 };
    format!(
        "width: {width}%; {}",
        stagger_style(index, SKILL_BAR_STEP_MS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_never_reverts() {
        let mut revealed = false;
        for seen in [false, false, true, false, false] {
            revealed = latch(revealed, seen);
        }
        assert!(revealed);
        assert!(!latch(false, false));
    }

    #[test]
    fn test_reveal_class_swaps_state_classes() {
        let hidden = reveal_class("w-full", Motion::Rise, false);
        assert_eq!(hidden, "w-full opacity-0 translate-y-12");
        let shown = reveal_class("w-full", Motion::Rise, true);
        assert_eq!(shown, "w-full opacity-100 translate-y-0");
        assert!(!shown.contains("opacity-0"));

        assert_eq!(reveal_class("x", Motion::Fade, true), "x opacity-100");
        assert_eq!(
            reveal_class("x", Motion::Slide, false),
            "x opacity-0 translate-x-8"
        );
    }

    #[test]
    fn test_staggered_transition_is_reveal_only() {
        for motion in [Motion::Fade, Motion::Rise, Motion::Slide] {
            let transition = motion.transition();
            assert!(transition.contains("opacity"), "{motion:?}");
            assert!(!transition.contains("all"), "{motion:?}");
            assert!(!transition.contains("colors"), "{motion:?}");
        }
        assert_eq!(Motion::Rise.transition(), "transition-[opacity,transform]");
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(stagger_delay_ms(0, PROJECT_STEP_MS), 0);
        assert_eq!(stagger_delay_ms(3, SKILL_BAR_STEP_MS), 450);
        assert_eq!(stagger_style(2, TIMELINE_STEP_MS), "transition-delay: 400ms");
    }

    #[test]
    fn test_skill_bar_fills_once_revealed() {
        assert_eq!(
            skill_bar_style(95, 0, false),
            "width: 0%; transition-delay: 0ms"
        );
        assert_eq!(
            skill_bar_style(95, 2, true),
            "width: 95%; transition-delay: 300ms"
        );
        assert!(skill_bar_style(250, 0, true).starts_with("width: 100%"));
    }
}
