//! Accent color resolution.
//!
//! Strategies in [`COLOR_CHAIN`] are tried in order; the first one that
//! yields a valid color wins and [`DEFAULT_ACCENT`] closes the chain.

use super::icons::Icon;

/// Neutral accent used when nothing else applies.
pub const DEFAULT_ACCENT: &str = "#111827";

/// Linguist colors for languages commonly seen without a registered icon.
const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("Astro", "#ff5a03"),
    ("Clojure", "#db5855"),
    ("Dart", "#00b4ab"),
    ("Elixir", "#6e4a7e"),
    ("Erlang", "#b83998"),
    ("Groovy", "#4298b8"),
    ("HCL", "#844fba"),
    ("Haskell", "#5e5086"),
    ("Julia", "#a270ba"),
    ("Lua", "#000080"),
    ("Makefile", "#427819"),
    ("MDX", "#fcb32c"),
    ("Nix", "#7e7eff"),
    ("OCaml", "#ef7a08"),
    ("Objective-C", "#438eff"),
    ("Perl", "#0298c3"),
    ("PowerShell", "#012456"),
    ("R", "#198ce7"),
    ("SCSS", "#c6538c"),
    ("Scala", "#c22d40"),
    ("Svelte", "#ff3e00"),
    ("Vim Script", "#199f4b"),
    ("Vue", "#41b883"),
    ("Zig", "#ec915c"),
    // Icon languages, for custom icon sets that drop them.
    ("Go", "#00add8"),
    ("JavaScript", "#f1e05a"),
    ("Python", "#3572a5"),
    ("Rust", "#dea584"),
    ("TypeScript", "#3178c6"),
];

/// One step of the accent color fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorStrategy {
    /// Brand color of the resolved icon.
    IconBrand,
    /// Fixed per-language table.
    LanguageTable,
}

pub const COLOR_CHAIN: &[ColorStrategy] = &[ColorStrategy::IconBrand, ColorStrategy::LanguageTable];

impl ColorStrategy {
    #[must_use]
    pub fn resolve(self, language: &str, icon: Option<&Icon>) -> Option<String> {
        match self {
            Self::IconBrand => icon.and_then(|icon| normalize_hex(&icon.hex)),
            Self::LanguageTable => LANGUAGE_COLORS
                .iter()
                .find(|(name, _)| *name == language)
                .and_then(|(_, hex)| normalize_hex(hex)),
        }
    }
}

/// Walk [`COLOR_CHAIN`] and fall back to [`DEFAULT_ACCENT`].
#[must_use]
pub fn accent_color(language: &str, icon: Option<&Icon>) -> String {
    COLOR_CHAIN
        .iter()
        .find_map(|strategy| strategy.resolve(language, icon))
        .unwrap_or_else(|| DEFAULT_ACCENT.to_string())
}

/// Normalize `#abc`, `abc`, `#aabbcc` or `AABBCC` to lowercase `#aabbcc`.
#[must_use]
pub fn normalize_hex(value: &str) -> Option<String> {
    let digits = value.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => Some(format!("#{}", digits.to_ascii_lowercase())),
        3 => {
            let expanded: String = digits
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>()
                .to_ascii_lowercase();
            Some(format!("#{expanded}"))
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
