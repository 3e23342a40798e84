//! Icon registry keyed by slug.
//!
//! The built-in set ships inside the binary and carries brand metadata only
//! (title and color), so those languages render as colored monograms. A user
//! file in the same JSON shape (`[{slug, title, hex, path}]`) can extend or
//! replace entries and supply real glyphs.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{CardError, Result};

const BUILTIN_ICONS: &str = include_str!("../../assets/icons.json");

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("Invalid regex"));

/// Language names whose icon slug cannot be derived from the name.
const SLUG_OVERRIDES: &[(&str, &str)] = &[
    ("HTML", "html5"),
    ("CSS", "css3"),
    ("C#", "csharp"),
    ("C++", "cplusplus"),
    ("Jupyter Notebook", "jupyter"),
    ("Shell", "gnubash"),
    ("Dockerfile", "docker"),
];

/// A vector icon drawn on a 24x24 view box.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Icon {
    pub slug: String,
    pub title: String,
    /// Brand color as hex digits, with or without a leading `#`.
    pub hex: String,
    /// SVG path data. Without it the tile draws a monogram.
    #[serde(default)]
    pub path: Option<String>,
}

impl Icon {
    /// Path data worth drawing, if any.
    #[must_use]
    pub fn glyph(&self) -> Option<&str> {
        self.path.as_deref().filter(|path| !path.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    icons: HashMap<String, Icon>,
}

impl IconRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The icon set embedded in the binary.
    ///
    /// # Errors
    /// Returns a data-shape error if the embedded data is malformed.
    pub fn builtin() -> Result<Self> {
        Self::from_json("built-in icon set", BUILTIN_ICONS)
    }

    /// Parse an icon list. `source` names the origin in error messages.
    ///
    /// # Errors
    /// Returns a data-shape error if `body` is not a list of icons.
    pub fn from_json(source: &str, body: &str) -> Result<Self> {
        let icons: Vec<Icon> = serde_json::from_str(body)
            .map_err(|e| CardError::data_shape(source, format!("invalid icon list: {e}"), body))?;
        let mut registry = Self::new();
        for icon in icons {
            registry.register(icon);
        }
        Ok(registry)
    }

    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Self> {
        let body = fs::read_to_string(path).map_err(|e| {
            CardError::Config(format!("Failed to read icon file {}: {e}", path.display()))
        })?;
        Self::from_json(&path.display().to_string(), &body)
    }

    /// Add an icon, replacing any existing icon with the same slug.
    pub fn register(&mut self, icon: Icon) {
        self.icons.insert(icon.slug.to_lowercase(), icon);
    }

    /// Add every icon of `other`, replacing same-slug entries.
    pub fn merge(&mut self, other: Self) {
        self.icons.extend(other.icons);
    }

    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&Icon> {
        self.icons.get(&slug.to_lowercase())
    }

    /// Find the icon for a language name as reported by GitHub.
    #[must_use]
    pub fn for_language(&self, language: &str) -> Option<&Icon> {
        self.get(&slug_for(language))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// Icon slug for a language: an explicit override, else the name's ASCII
/// alphanumerics lowercased (`"Objective-C"` -> `"objectivec"`).
#[must_use]
pub fn slug_for(language: &str) -> String {
    SLUG_OVERRIDES
        .iter()
        .find(|(name, _)| *name == language)
        .map_or_else(
            || NON_ALNUM.replace_all(language, "").to_lowercase(),
            |(_, slug)| (*slug).to_string(),
        )
}

#[cfg(test)]
#[path = "icons_tests.rs"]
mod tests;
