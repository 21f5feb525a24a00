use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose rotator/visibility logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const SITE_TITLE: &str = "FitLife";

// Testimonial rotator
pub const ROTATION_INTERVAL_MS: u32 = 4000;
pub const NARROW_VIEWPORT_MAX_PX: f64 = 768.0;
pub const CARDS_WIDE: usize = 3;
pub const CARDS_NARROW: usize = 1;
pub const CARD_EXIT_MS: u32 = 500;

// Navbar switches to the compact glass style past this offset
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 10.0;

/// How much of a section must be on screen before it counts as visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InViewOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    /// Latch to `true` after the first reveal.
    pub once: bool,
}

impl InViewOptions {
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: "0px",
            once: true,
        }
    }

    pub const fn margin(mut self, root_margin: &'static str) -> Self {
        self.root_margin = root_margin;
        self
    }

    pub const fn repeating(mut self) -> Self {
        self.once = false;
        self
    }
}

pub const NAVBAR_IN_VIEW: InViewOptions = InViewOptions::new(0.1);
pub const HERO_IN_VIEW: InViewOptions = InViewOptions::new(0.2);
pub const SERVICES_IN_VIEW: InViewOptions = InViewOptions::new(0.1).margin("-50px 0px");
pub const ABOUT_IN_VIEW: InViewOptions = InViewOptions::new(0.2).margin("-100px 0px");
// The rotator pauses when scrolled away, so this one must keep reporting.
pub const TESTIMONIALS_IN_VIEW: InViewOptions = InViewOptions::new(0.2).repeating();
pub const TESTIMONIALS_HEADER_IN_VIEW: InViewOptions = InViewOptions::new(0.2);
pub const CTA_IN_VIEW: InViewOptions = InViewOptions::new(0.3).margin("-50px 0px");
pub const FOOTER_IN_VIEW: InViewOptions = InViewOptions::new(0.1).margin("-50px 0px");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_testimonials_keep_observing() {
        let latched = [
            NAVBAR_IN_VIEW,
            HERO_IN_VIEW,
            SERVICES_IN_VIEW,
            ABOUT_IN_VIEW,
            CTA_IN_VIEW,
            FOOTER_IN_VIEW,
        ];
        assert!(latched.iter().all(|o| o.once));
        assert!(!TESTIMONIALS_IN_VIEW.once);
        assert_eq!(TESTIMONIALS_IN_VIEW.threshold, 0.2);
    }

    #[test]
    fn thresholds_are_fractions() {
        for options in [HERO_IN_VIEW, SERVICES_IN_VIEW, CTA_IN_VIEW, FOOTER_IN_VIEW] {
            assert!(options.threshold > 0.0 && options.threshold <= 1.0);
        }
        assert_eq!(ABOUT_IN_VIEW.root_margin, "-100px 0px");
    }
}
