/// Scroll offset (px) past which the navbar turns opaque and the
/// scroll-to-top button appears.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "About",
        href: "#about",
    },
    NavLink {
        label: "Skills",
        href: "#skills",
    },
    NavLink {
        label: "Portfolio",
        href: "#portfolio",
    },
    NavLink {
        label: "Experience",
        href: "#experience",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

/// Footer navigation; it has a Home entry and skips Experience.
pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        href: "#",
    },
    NAV_LINKS[0],
    NAV_LINKS[1],
    NAV_LINKS[2],
    NAV_LINKS[4],
];

pub fn is_scrolled(y: f64) -> bool {
    y > SCROLL_THRESHOLD
}

pub fn navbar_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed w-full z-50 transition-all duration-300 bg-white/90 dark:bg-gray-900/90 backdrop-blur-md py-3 shadow-md"
    } else {
        "fixed w-full z-50 transition-all duration-300 bg-transparent py-5"
    }
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn test_navbar_class_switches_background() {
        assert!(navbar_class(false).contains("bg-transparent"));
        assert!(navbar_class(true).contains("backdrop-blur-md"));
    }

    #[test]
    fn test_menu_toggle_opens_and_closes() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        let menu = menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.toggle(), MenuState::Closed);
    }

    #[test]
    fn test_nav_links_target_sections() {
        let hrefs = NAV_LINKS.iter().map(|l| l.href).collect::<Vec<_>>();
        assert_eq!(
            hrefs,
            vec!["#about", "#skills", "#portfolio", "#experience", "#contact"]
        );
        assert!(FOOTER_LINKS.iter().all(|l| l.href.starts_with('#')));
        assert!(!FOOTER_LINKS.iter().any(|l| l.label == "Experience"));
    }
}
