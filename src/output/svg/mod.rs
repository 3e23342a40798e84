//! SVG card generation.
//!
//! Small building blocks for self-contained SVG documents:
//! - no external fonts or images (system font stack, inline icon paths)
//! - all text XML-escaped on render
//! - accessibility: `role="img"`, `aria-label` and `<title>` on every card

mod builder;
mod element;
mod format;
mod language_card;
mod leetcode_card;
mod style;

pub use builder::SvgBuilder;
pub use element::{Circle, Group, PathIcon, Rect, SvgElement, Text};
pub use format::xml_escape;
pub use language_card::{LanguageCard, bar_fill_width};
pub use leetcode_card::leetcode_card;
pub use style::{FONT_STACK, TextAnchor, TextClass};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
