//! Language usage card: a grid of tiles, one per language.

use super::builder::SvgBuilder;
use super::element::{Circle, Group, PathIcon, Rect, Text};
use super::style::{TextAnchor, TextClass};
use crate::presentation::{DisplayItem, Icon};

const WIDTH: u32 = 760;
const PAD: u32 = 18;
const TILE_W: u32 = 120;
const TILE_H: u32 = 96;
const GAP: u32 = 12;
const START_Y: u32 = 64;
const PER_ROW: u32 = 6;
/// Space below the last tile row for the footer.
const FOOTER_H: u32 = 30;
const ICON_SIZE: u32 = 18;
const BAR_TRACK_W: u32 = TILE_W - 28;

const INK: &str = "#111827";
const BORDER: &str = "#e5e7eb";

const TEXT_CLASSES: &[TextClass] = &[
    TextClass::new("h1", 800, 16).with_fill(INK),
    TextClass::new("sub", 500, 12).with_fill("#6b7280"),
    TextClass::new("abbr", 800, 10),
    TextClass::new("name", 700, 12).with_fill(INK),
    TextClass::new("pct", 800, 16).with_fill(INK),
    TextClass::new("foot", 500, 12).with_fill("#6b7280"),
];

/// Renders resolved languages as a fixed-layout SVG card.
///
/// Six tiles per row; the card grows by one tile row at a time.
#[derive(Debug)]
pub struct LanguageCard<'a> {
    items: &'a [DisplayItem],
    updated: &'a str,
}

impl<'a> LanguageCard<'a> {
    /// `updated` is shown verbatim in the subtitle (usually `YYYY-MM-DD`).
    #[must_use]
    pub const fn new(items: &'a [DisplayItem], updated: &'a str) -> Self {
        Self { items, updated }
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        u32::try_from(self.items.len())
            .unwrap_or(u32::MAX)
            .div_ceil(PER_ROW)
            .max(1)
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        let rows = self.rows();
        START_Y + rows * TILE_H + (rows - 1) * GAP + FOOTER_H
    }

    #[must_use]
    pub fn to_svg(&self) -> String {
        let width = f64::from(WIDTH);
        let height = f64::from(self.height());
        let pad = f64::from(PAD);

        let mut builder = SvgBuilder::new(width, height)
            .with_title("Languages used across GitHub repos")
            .with_text_classes(TEXT_CLASSES)
            .push_element(
                &Rect::new(0.5, 0.5, width - 1.0, height - 1.0, "#ffffff")
                    .with_radius(16.0)
                    .with_stroke(BORDER),
            )
            .push_element(&Text::new(pad, 30.0, "Languages used").with_class("h1"))
            .push_element(
                &Text::new(
                    pad,
                    48.0,
                    format!("Across public repos • Updated: {}", self.updated),
                )
                .with_class("sub"),
            );

        for (index, item) in (0u32..).zip(self.items) {
            builder = builder.push_element(&tile(index, item));
        }

        builder
            .push_element(
                &Text::new(
                    pad,
                    height - 14.0,
                    "Source: GitHub Linguist (repo languages API)",
                )
                .with_class("foot"),
            )
            .build()
    }
}

/// Filled share of the bar track, rounded half up.
#[must_use]
pub fn bar_fill_width(pct: u32) -> u32 {
    (BAR_TRACK_W * pct.min(100) * 2 + 100) / 200
}

fn tile(index: u32, item: &DisplayItem) -> Group {
    let row = index / PER_ROW;
    let col = index % PER_ROW;
    let x = f64::from(PAD + col * (TILE_W + GAP));
    let y = f64::from(START_Y + row * (TILE_H + GAP));
    let icon_x = x + 16.0;
    let icon_y = y + 18.0;

    let group = Group::new().push(
        &Rect::new(x, y, f64::from(TILE_W), f64::from(TILE_H), "#f8fafc")
            .with_radius(14.0)
            .with_stroke(BORDER),
    );

    let glyph = item.icon.as_ref().and_then(Icon::glyph);
    let group = match glyph {
        Some(path) => group.push(&PathIcon {
            x: icon_x,
            y: icon_y,
            size: f64::from(ICON_SIZE),
            path: path.to_string(),
            fill: item.accent_color.clone(),
        }),
        None => group
            .push(&Circle {
                cx: icon_x + 9.0,
                cy: icon_y + 9.0,
                r: 9.0,
                fill: item.accent_color.clone(),
            })
            .push(
                &Text::new(icon_x + 9.0, icon_y + 13.0, &item.abbreviation)
                    .with_class("abbr")
                    .with_anchor(TextAnchor::Middle)
                    .with_fill("#ffffff"),
            ),
    };

    group
        .push(&Text::new(x + 40.0, y + 32.0, &item.name).with_class("name"))
        .push(&Text::new(x + 40.0, y + 56.0, format!("{}%", item.pct)).with_class("pct"))
        .push(
            &Rect::new(x + 14.0, y + 72.0, f64::from(BAR_TRACK_W), 8.0, "#eef2f7").with_radius(4.0),
        )
        .push(
            &Rect::new(
                x + 14.0,
                y + 72.0,
                f64::from(bar_fill_width(item.pct)),
                8.0,
                item.accent_color.clone(),
            )
            .with_radius(4.0),
        )
}

#[cfg(test)]
#[path = "language_card_tests.rs"]
mod tests;
