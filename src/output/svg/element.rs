//! Primitive SVG elements: rectangles, circles, text and inline icons.

use std::fmt::Write;

use super::format::xml_escape;
use super::style::TextAnchor;

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// A (optionally rounded) rectangle.
#[derive(Debug, Clone)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rx: f64,
    pub fill: String,
    pub stroke: Option<String>,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rx: 0.0,
            fill: fill.into(),
            stroke: None,
        }
    }

    #[must_use]
    pub const fn with_radius(mut self, rx: f64) -> Self {
        self.rx = rx;
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }
}

impl SvgElement for Rect {
    fn render(&self) -> String {
        let mut output = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            self.x, self.y, self.width, self.height
        );
        if self.rx > 0.0 {
            let _ = write!(output, r#" rx="{}""#, self.rx);
        }
        let _ = write!(output, r#" fill="{}""#, xml_escape(&self.fill));
        if let Some(stroke) = &self.stroke {
            let _ = write!(output, r#" stroke="{}""#, xml_escape(stroke));
        }
        output.push_str("/>");
        output
    }
}

/// A filled circle.
#[derive(Debug, Clone)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
}

impl SvgElement for Circle {
    fn render(&self) -> String {
        format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            self.cx,
            self.cy,
            self.r,
            xml_escape(&self.fill)
        )
    }
}

/// A text label. Content is escaped on render.
#[derive(Debug, Clone)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub class: Option<&'static str>,
    pub anchor: TextAnchor,
    pub fill: Option<String>,
}

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            class: None,
            anchor: TextAnchor::Start,
            fill: None,
        }
    }

    #[must_use]
    pub const fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }
}

impl SvgElement for Text {
    fn render(&self) -> String {
        let mut output = format!(r#"<text x="{}" y="{}""#, self.x, self.y);
        if self.anchor != TextAnchor::Start {
            let _ = write!(output, r#" text-anchor="{}""#, self.anchor);
        }
        if let Some(class) = self.class {
            let _ = write!(output, r#" class="{class}""#);
        }
        if let Some(fill) = &self.fill {
            let _ = write!(output, r#" fill="{}""#, xml_escape(fill));
        }
        let _ = write!(output, ">{}</text>", xml_escape(&self.content));
        output
    }
}

/// A 24x24 path icon placed at (`x`, `y`) and scaled to `size`.
#[derive(Debug, Clone)]
pub struct PathIcon {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub path: String,
    pub fill: String,
}

impl SvgElement for PathIcon {
    fn render(&self) -> String {
        format!(
            r#"<g transform="translate({}, {})">
    <svg width="{size}" height="{size}" viewBox="0 0 24 24" aria-hidden="true">
        <path d="{}" fill="{}"/>
    </svg>
</g>"#,
            self.x,
            self.y,
            xml_escape(&self.path),
            xml_escape(&self.fill),
            size = self.size,
        )
    }
}

/// A group of already rendered children.
#[derive(Debug, Clone, Default)]
pub struct Group {
    children: Vec<String>,
}

impl Group {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn push<E: SvgElement>(mut self, element: &E) -> Self {
        self.children.push(element.render());
        self
    }
}

impl SvgElement for Group {
    fn render(&self) -> String {
        let mut output = String::from("<g>\n");
        for child in &self.children {
            for line in child.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }
        output.push_str("</g>");
        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
