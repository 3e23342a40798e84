//! Turns selected languages into display items: abbreviation, icon and accent color.

mod colors;
mod icons;

pub use colors::{COLOR_CHAIN, ColorStrategy, DEFAULT_ACCENT, accent_color, normalize_hex};
pub use icons::{Icon, IconRegistry, slug_for};

use crate::selection::SelectedLanguage;

/// Names this short are abbreviated by uppercasing the whole name.
const SHORT_NAME_MAX_CHARS: usize = 3;

const ABBREVIATIONS: &[(&str, &str)] = &[
    ("JavaScript", "JS"),
    ("TypeScript", "TS"),
    ("Python", "PY"),
    ("C#", "C#"),
    ("C++", "C++"),
    ("Jupyter Notebook", "JN"),
    ("Shell", "SH"),
];

/// Monogram text for a language.
#[must_use]
pub fn abbreviation(language: &str) -> String {
    if let Some((_, abbr)) = ABBREVIATIONS.iter().find(|(name, _)| *name == language) {
        return (*abbr).to_string();
    }
    if language.chars().count() <= SHORT_NAME_MAX_CHARS {
        return language.to_uppercase();
    }
    language.chars().take(2).collect::<String>().to_uppercase()
}

/// One tile of the language card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub name: String,
    pub pct: u32,
    pub abbreviation: String,
    /// `#rrggbb`.
    pub accent_color: String,
    /// Without a glyph the renderer draws a monogram.
    pub icon: Option<Icon>,
}

/// Resolves presentation details against an icon registry.
#[derive(Debug, Clone)]
pub struct PresentationResolver {
    icons: IconRegistry,
}

impl PresentationResolver {
    #[must_use]
    pub const fn new(icons: IconRegistry) -> Self {
        Self { icons }
    }

    #[must_use]
    pub fn resolve(&self, language: &SelectedLanguage) -> DisplayItem {
        let icon = self.icons.for_language(&language.name);
        DisplayItem {
            name: language.name.clone(),
            pct: language.pct,
            abbreviation: abbreviation(&language.name),
            accent_color: accent_color(&language.name, icon),
            icon: icon.cloned(),
        }
    }

    #[must_use]
    pub fn resolve_all(&self, languages: &[SelectedLanguage]) -> Vec<DisplayItem> {
        languages.iter().map(|lang| self.resolve(lang)).collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
