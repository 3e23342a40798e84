//! Solve-count card for the coding-judge profile.

use super::builder::SvgBuilder;
use super::element::{Rect, Text};
use super::style::TextClass;
use crate::leetcode::SolveCounts;

const WIDTH: f64 = 420.0;
const HEIGHT: f64 = 140.0;

const TEXT_CLASSES: &[TextClass] = &[
    TextClass::new("t1", 700, 16).with_fill("#111827"),
    TextClass::new("t3", 400, 12).with_fill("#6b7280"),
    TextClass::new("num", 700, 20).with_fill("#111827"),
    TextClass::new("lbl", 600, 12)
        .with_fill("#6b7280")
        .with_letter_spacing(".2px"),
];

/// Label and x position of each stat column.
const COLUMNS: [(&str, f64); 4] = [
    ("TOTAL SOLVED", 18.0),
    ("EASY", 165.0),
    ("MEDIUM", 245.0),
    ("HARD", 345.0),
];

#[must_use]
pub fn leetcode_card(counts: &SolveCounts, updated: &str) -> String {
    let values = [counts.total(), counts.easy, counts.medium, counts.hard];

    let mut builder = SvgBuilder::new(WIDTH, HEIGHT)
        .with_title(format!("LeetCode stats for {}", counts.username))
        .with_text_classes(TEXT_CLASSES)
        .push_element(
            &Rect::new(0.5, 0.5, WIDTH - 1.0, HEIGHT - 1.0, "#ffffff")
                .with_radius(12.0)
                .with_stroke("#e5e7eb"),
        )
        .push_element(
            &Text::new(18.0, 28.0, format!("LeetCode — {}", counts.username)).with_class("t1"),
        );

    for ((label, x), value) in COLUMNS.iter().zip(values) {
        builder = builder
            .push_element(&Text::new(*x, 58.0, *label).with_class("lbl"))
            .push_element(&Text::new(*x, 86.0, value.to_string()).with_class("num"));
    }

    builder
        .push_element(&Text::new(18.0, 118.0, format!("Updated: {updated}")).with_class("t3"))
        .build()
}

#[cfg(test)]
#[path = "leetcode_card_tests.rs"]
mod tests;
