//! Colour themes selectable through `config --theme`.
//!
//! The names are the Material themes the desktop application offered
//! (`<dark|light>_<accent>[_500].xml`); on the terminal only the accent
//! colour is used.

use super::colors::{BLUE, CYAN, GREEN, MAGENTA, RED, RESET, YELLOW};

pub const DEFAULT_THEME: &str = "dark_teal.xml";

const THEMES: [&str; 26] = [
    "dark_amber.xml",
    "dark_blue.xml",
    "dark_cyan.xml",
    "dark_lightgreen.xml",
    "dark_pink.xml",
    "dark_purple.xml",
    "dark_red.xml",
    "dark_teal.xml",
    "dark_yellow.xml",
    "light_amber.xml",
    "light_blue.xml",
    "light_blue_500.xml",
    "light_cyan.xml",
    "light_cyan_500.xml",
    "light_lightgreen.xml",
    "light_lightgreen_500.xml",
    "light_orange.xml",
    "light_pink.xml",
    "light_pink_500.xml",
    "light_purple.xml",
    "light_purple_500.xml",
    "light_red.xml",
    "light_red_500.xml",
    "light_teal.xml",
    "light_teal_500.xml",
    "light_yellow.xml",
];

const ACCENTS: [(&str, &str); 10] = [
    ("amber", YELLOW),
    ("blue", BLUE),
    ("cyan", CYAN),
    ("lightgreen", GREEN),
    ("orange", YELLOW),
    ("pink", MAGENTA),
    ("purple", MAGENTA),
    ("red", RED),
    ("teal", CYAN),
    ("yellow", YELLOW),
];

/// Every theme name accepted in the configuration.
pub fn list_themes() -> Vec<String> {
    THEMES.iter().map(|t| t.to_string()).collect()
}

pub fn is_known_theme(name: &str) -> bool {
    THEMES.contains(&name)
}

/// ANSI colour for headers under `theme`; unknown names get no colour.
pub fn accent_color(theme: &str) -> &'static str {
    if !is_known_theme(theme) {
        return RESET;
    }
    let accent = theme
        .trim_end_matches(".xml")
        .trim_end_matches("_500")
        .split_once('_')
        .map(|(_, accent)| accent)
        .unwrap_or_default();
    ACCENTS
        .iter()
        .find(|(a, _)| *a == accent)
        .map(|(_, color)| *color)
        .unwrap_or(RESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_known() {
        assert!(is_known_theme(DEFAULT_THEME));
        assert_eq!(accent_color(DEFAULT_THEME), CYAN);
    }

    #[test]
    fn lists_material_themes() {
        let themes = list_themes();
        assert_eq!(themes.len(), 26);
        assert!(themes.contains(&"light_red.xml".to_string()));
        assert!(themes.iter().all(|t| accent_color(t) != RESET));
    }

    #[test]
    fn accepts_500_variants_and_orange() {
        assert!(is_known_theme("light_cyan_500.xml"));
        assert_eq!(accent_color("light_cyan_500.xml"), CYAN);
        assert_eq!(accent_color("light_orange.xml"), YELLOW);
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(!is_known_theme("dark_teal"));
        assert!(!is_known_theme("grey_teal.xml"));
        assert!(!is_known_theme("dark_orange.xml"));
        assert_eq!(accent_color("nope"), RESET);
    }
}
