use serde::{Deserialize, Serialize};

/// Colour scheme of the whole page. Tailwind is configured with
/// `darkMode: 'class'`, so dark mode is a `dark` class on the root wrapper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }
}

/// Decorative layers behind the hero banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroBackdrop {
    pub gradient: &'static str,
    pub top_glow: &'static str,
    pub bottom_glow: &'static str,
}

impl From<Theme> for HeroBackdrop {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => HeroBackdrop {
                gradient: "bg-gradient-to-br from-purple-700 via-teal-500 to-gray-800",
                top_glow: "bg-purple-600",
                bottom_glow: "bg-teal-500",
            },
            Theme::Light => HeroBackdrop {
                gradient: "bg-gradient-to-br from-purple-400 via-teal-300 to-gray-200",
                top_glow: "bg-teal-400",
                bottom_glow: "bg-purple-400",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_swaps_dark_class() {
        let theme = Theme::default();
        assert_eq!(theme.root_class(), "");
        let theme = theme.toggle();
        assert!(theme.is_dark());
        assert_eq!(theme.root_class(), "dark");
        let theme = theme.toggle();
        assert_eq!(theme, Theme::Light);
        assert_eq!(theme.root_class(), "");
    }

    #[test]
    fn test_hero_backdrop_follows_theme() {
        let light = HeroBackdrop::from(Theme::Light);
        let dark = HeroBackdrop::from(Theme::Dark);
        assert_ne!(light, dark);
        assert!(dark.gradient.contains("from-purple-700"));
        assert!(light.gradient.contains("from-purple-400"));
        assert_eq!(dark.top_glow, "bg-purple-600");
        assert_eq!(light.top_glow, "bg-teal-400");
    }
}
