//! SVG styling primitives: text classes and anchoring.

use std::fmt::{self, Write};

/// System font stack; cards must not depend on external fonts.
pub const FONT_STACK: &str = "system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial";

/// A CSS class for `<text>` elements, emitted into the document `<style>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextClass {
    pub name: &'static str,
    pub weight: u16,
    pub size: u16,
    /// `None` leaves the fill to the element.
    pub fill: Option<&'static str>,
    pub letter_spacing: Option<&'static str>,
}

impl TextClass {
    #[must_use]
    pub const fn new(name: &'static str, weight: u16, size: u16) -> Self {
        Self {
            name,
            weight,
            size,
            fill: None,
            letter_spacing: None,
        }
    }

    #[must_use]
    pub const fn with_fill(mut self, fill: &'static str) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub const fn with_letter_spacing(mut self, spacing: &'static str) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    /// Render as a CSS rule.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut rule = format!(
            ".{} {{ font: {} {}px {FONT_STACK};",
            self.name, self.weight, self.size
        );
        if let Some(fill) = self.fill {
            let _ = write!(rule, " fill: {fill};");
        }
        if let Some(spacing) = self.letter_spacing {
            let _ = write!(rule, " letter-spacing: {spacing};");
        }
        rule.push_str(" }");
        rule
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
