//! Fixed catalog of named animation presets.
//!
//! Components consume these declaratively by composing the class onto their
//! markup; the keyframes and easings live in `styles.css`. Stagger helpers
//! produce per-item delays for lists that animate in sequence.

/// Entrance and ambient motion presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    FadeInUp,
    FadeInDown,
    FadeIn,
    ScaleIn,
    Floating,
    Pulse,
}

impl Motion {
    pub const ALL: [Motion; 6] = [
        Motion::FadeInUp,
        Motion::FadeInDown,
        Motion::FadeIn,
        Motion::ScaleIn,
        Motion::Floating,
        Motion::Pulse,
    ];

    pub fn class(self) -> &'static str {
        match self {
            Motion::FadeInUp => "anim-fade-in-up",
            Motion::FadeInDown => "anim-fade-in-down",
            Motion::FadeIn => "anim-fade-in",
            Motion::ScaleIn => "anim-scale-in",
            Motion::Floating => "anim-floating",
            Motion::Pulse => "anim-pulse",
        }
    }

    /// Preset joined with extra classes, for the common composition case.
    pub fn with(self, extra: &str) -> String {
        format!("{} {extra}", self.class())
    }
}

/// Delay between staggered siblings.
pub const STAGGER_DELAY_MS: u32 = 100;

pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_DELAY_MS
}

/// Inline style fragment delaying the animation of the `index`-th sibling.
pub fn stagger_style(index: usize) -> String {
    format!("animation-delay: {}ms;", stagger_delay_ms(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn catalog_classes_are_distinct() {
        let classes: HashSet<_> = Motion::ALL.iter().map(|m| m.class()).collect();
        assert_eq!(classes.len(), Motion::ALL.len());
    }

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(3), 300);
        assert_eq!(stagger_style(2), "animation-delay: 200ms;");
    }

    #[test]
    fn with_composes_classes() {
        assert_eq!(Motion::FadeInUp.with("hero-title"), "anim-fade-in-up hero-title");
    }
}
