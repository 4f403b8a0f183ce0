// Scroll-triggered reveal: which entrance class each element gets, and the
// intersection settings for the observers that flip them visible.

pub const TITLE_SELECTOR: &str = ".section-title";
pub const CARD_SELECTOR: &str = ".about-card, .project-card, .skill-category";
pub const ITEM_SELECTOR: &str = ".stat-item, .cert-item, .contact-item";
pub const VISIBLE_CLASS: &str = "visible";

pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const LAZY_CLASS: &str = "lazy";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reveal {
    FadeIn,
    SlideInLeft,
    SlideInRight,
}

impl Reveal {
    pub const ALL: [Reveal; 3] = [Reveal::FadeIn, Reveal::SlideInLeft, Reveal::SlideInRight];

    pub fn class(self) -> &'static str {
        match self {
            Reveal::FadeIn => "fade-in",
            Reveal::SlideInLeft => "slide-in-left",
            Reveal::SlideInRight => "slide-in-right",
        }
    }

    /// Cards come in from alternating sides, starting on the left.
    pub fn alternating(index: usize) -> Reveal {
        if index % 2 == 0 {
            Reveal::SlideInLeft
        } else {
            Reveal::SlideInRight
        }
    }

    /// Selector matching every element that carries any entrance class.
    pub fn observed_selector() -> String {
        Reveal::ALL
            .iter()
            .map(|r| format!(".{}", r.class()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Settings handed to an `IntersectionObserver`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl ObserverOptions {
    /// Reveal a little before the element is fully in, trimmed at the bottom.
    pub const REVEAL: ObserverOptions = ObserverOptions {
        threshold: 0.1,
        root_margin: "0px 0px -50px 0px",
    };
    /// Skill bars fill once half the section is showing.
    pub const SKILLS: ObserverOptions = ObserverOptions {
        threshold: 0.5,
        root_margin: "0px",
    };
    /// Images load as soon as any pixel shows.
    pub const LAZY: ObserverOptions = ObserverOptions {
        threshold: 0.0,
        root_margin: "0px",
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_alternate_sides() {
        let classes: Vec<&str> = (0..4).map(|i| Reveal::alternating(i).class()).collect();
        assert_eq!(
            classes,
            vec!["slide-in-left", "slide-in-right", "slide-in-left", "slide-in-right"]
        );
    }

    #[test]
    fn observer_watches_every_entrance_class() {
        assert_eq!(
            Reveal::observed_selector(),
            ".fade-in, .slide-in-left, .slide-in-right"
        );
    }

    #[test]
    fn reveal_triggers_early_and_skills_late() {
        assert_eq!(ObserverOptions::REVEAL.threshold, 0.1);
        assert_eq!(ObserverOptions::SKILLS.threshold, 0.5);
        assert_eq!(ObserverOptions::REVEAL.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn lazy_images_load_on_first_pixel() {
        assert_eq!(ObserverOptions::LAZY.threshold, 0.0);
        assert_eq!(ObserverOptions::LAZY.root_margin, "0px");
    }
}
