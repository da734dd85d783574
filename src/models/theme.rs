// Colour themes for both charts
// A theme names the background, text and meta colours plus a five step intensity ramp

use std::collections::HashMap;

use image::Rgba;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::utils::config::{DEFAULT_THEME, GRADE_COUNT};

pub type Color = Rgba<u8>;

/// Opaque colour from a `0xRRGGBB` literal
pub const fn hex(rgb: u32) -> Color {
    Rgba([(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub meta: Color,
    /// grade0 (empty) through grade4 (busiest)
    pub grades: [Color; GRADE_COUNT],
}

impl Theme {
    pub const fn new(background: u32, text: u32, meta: u32, grades: [u32; GRADE_COUNT]) -> Self {
        Self {
            background: hex(background),
            text: hex(text),
            meta: hex(meta),
            grades: [
                hex(grades[0]),
                hex(grades[1]),
                hex(grades[2]),
                hex(grades[3]),
                hex(grades[4]),
            ],
        }
    }

    /// Ramp colour for an intensity bucket; out of range buckets use the top grade
    pub fn grade(&self, intensity: u8) -> Color {
        self.grades[(intensity as usize).min(GRADE_COUNT - 1)]
    }
}

/// GitHub's own palette
pub const STANDARD: Theme = Theme::new(
    0xffffff,
    0x000000,
    0x666666,
    [0xebedf0, 0x9be9a8, 0x40c463, 0x30a14e, 0x216e39],
);

const BUILTIN_THEMES: &[(&str, Theme)] = &[
    (DEFAULT_THEME, STANDARD),
    (
        "classic",
        Theme::new(0xffffff, 0x000000, 0x666666, [0xebedf0, 0xc6e48b, 0x7bc96f, 0x239a3b, 0x196127]),
    ),
    (
        "githubDark",
        Theme::new(0x101217, 0xffffff, 0xdddddd, [0x161b22, 0x003820, 0x00602d, 0x10983d, 0x27d545]),
    ),
    (
        "halloween",
        Theme::new(0xffffff, 0x000000, 0x666666, [0xebedf0, 0xffee4a, 0xffc501, 0xfe9600, 0x03001c]),
    ),
    (
        "teal",
        Theme::new(0xffffff, 0x000000, 0x666666, [0xebedf0, 0x7fffd4, 0x76eec6, 0x66cdaa, 0x458b74]),
    ),
    (
        "leftPad",
        Theme::new(0x000000, 0xffffff, 0x999999, [0x2f2f2f, 0x646464, 0xa5a5a5, 0xdddddd, 0xf6f6f6]),
    ),
    (
        "dracula",
        Theme::new(0x181818, 0xf8f8f2, 0x6272a4, [0x282a36, 0x44475a, 0x6272a4, 0xbd93f9, 0xff79c6]),
    ),
    (
        "blue",
        Theme::new(0xffffff, 0x000000, 0x666666, [0x222222, 0x263342, 0x344e6c, 0x416895, 0x4f83bf]),
    ),
    (
        "panda",
        Theme::new(0x242526, 0xffffff, 0x999999, [0x34353b, 0x6fc1ff, 0x19f9d8, 0xffb86c, 0xff4b82]),
    ),
    (
        "sunny",
        Theme::new(0xffffff, 0x000000, 0x666666, [0xfff9ae, 0xf8ed62, 0xe9d700, 0xdab600, 0xa98600]),
    ),
    (
        "pink",
        Theme::new(0xffffff, 0x000000, 0x666666, [0xebedf0, 0xe48bdc, 0xca5bcc, 0xa74aa8, 0x61185f]),
    ),
    (
        "YlGnBu",
        Theme::new(0xffffff, 0x000000, 0x666666, [0xebedf0, 0xa1dab4, 0x41b6c4, 0x2c7fb8, 0x253494]),
    ),
    (
        "solarizedDark",
        Theme::new(0x002b36, 0x93a1a1, 0x586e75, [0x073642, 0x268bd2, 0x2aa198, 0xb58900, 0xd33682]),
    ),
    (
        "solarizedLight",
        Theme::new(0xfdf6e3, 0x586e75, 0x93a1a1, [0xeee8d5, 0xb58900, 0xcb4b16, 0xdc322f, 0x6c71c4]),
    ),
];

static BUILTIN: Lazy<ThemeTable> = Lazy::new(|| {
    let mut table = ThemeTable::new(STANDARD);
    for (name, theme) in BUILTIN_THEMES {
        table.insert(*name, *theme);
    }
    table
});

/// Read-only lookup from theme name to palette, with a default for unknown names
#[derive(Debug, Clone)]
pub struct ThemeTable {
    themes: HashMap<String, Theme>,
    default: Theme,
}

impl ThemeTable {
    /// Empty table that resolves every name to `default`
    pub fn new(default: Theme) -> Self {
        Self {
            themes: HashMap::new(),
            default,
        }
    }

    /// The stock palettes
    pub fn builtin() -> &'static ThemeTable {
        &BUILTIN
    }

    pub fn insert(&mut self, name: impl Into<String>, theme: Theme) {
        self.themes.insert(name.into(), theme);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Palette for `name`, or the default when the name is absent or unknown
    pub fn resolve(&self, name: Option<&str>) -> &Theme {
        match name {
            Some(name) => self.themes.get(name).unwrap_or_else(|| {
                debug!("Unknown theme {:?}, using default", name);
                &self.default
            }),
            None => &self.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(hex(0x216e39), Rgba([0x21, 0x6e, 0x39, 255]));
        assert_eq!(hex(0xffffff), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_resolve_known_theme() {
        let table = ThemeTable::builtin();
        let dracula = table.resolve(Some("dracula"));
        assert_eq!(dracula.background, hex(0x181818));
        assert_eq!(dracula.grade(4), hex(0xff79c6));
    }

    #[test]
    fn test_resolve_falls_back_to_standard() {
        let table = ThemeTable::builtin();
        assert_eq!(*table.resolve(Some("no-such-theme")), STANDARD);
        assert_eq!(*table.resolve(None), STANDARD);
    }

    #[test]
    fn test_builtin_names() {
        let table = ThemeTable::builtin();
        assert!(table.contains("standard"));
        assert!(table.contains("githubDark"));
        assert_eq!(table.names().len(), 14);
    }

    #[test]
    fn test_custom_table() {
        let custom = Theme::new(0x111111, 0x222222, 0x333333, [1, 2, 3, 4, 5]);
        let mut table = ThemeTable::new(custom);
        assert_eq!(*table.resolve(Some("standard")), custom);
        table.insert("standard", STANDARD);
        assert_eq!(*table.resolve(Some("standard")), STANDARD);
    }

    #[test]
    fn test_grade_ramp() {
        assert_eq!(STANDARD.grade(0), hex(0xebedf0));
        assert_eq!(STANDARD.grade(2), hex(0x40c463));
        assert_eq!(STANDARD.grade(9), hex(0x216e39));
    }
}
