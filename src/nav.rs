// Navigation bar behaviour: the mobile menu toggle, the darker bar once the
// page is scrolled, and where an in-page link should scroll to.

pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const MENU_SELECTOR: &str = ".nav-menu";
pub const LINK_SELECTOR: &str = ".nav-link";
pub const ACTIVE_CLASS: &str = "active";

/// Scroll depth past which the bar switches to its solid background.
pub const SCROLLED_PX: f64 = 100.0;
/// Height of the fixed bar, kept clear above a section scrolled to.
pub const HEADER_OFFSET_PX: f64 = 70.0;

const RESTING_BACKGROUND: &str = "rgba(10, 10, 10, 0.95)";
const SCROLLED_BACKGROUND: &str = "rgba(10, 10, 10, 0.98)";

pub fn navbar_background(scroll_y: f64) -> &'static str {
    if scroll_y > SCROLLED_PX {
        SCROLLED_BACKGROUND
    } else {
        RESTING_BACKGROUND
    }
}

pub fn scroll_target(section_top: f64) -> f64 {
    section_top - HEADER_OFFSET_PX
}

/// The section selector an in-page link points at, e.g. `#about`.
/// Links elsewhere are left to the browser.
pub fn section_anchor(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// Open/closed state of the mobile menu; mirrored onto the menu and the
/// hamburger as the `active` class.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Menu {
    open: bool,
}

impl Menu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
