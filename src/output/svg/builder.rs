//! Standalone SVG document builder for card layouts.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::xml_escape;
use super::style::TextClass;

/// Builder for a self-contained SVG document.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    text_classes: Vec<TextClass>,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            text_classes: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Accessible name, emitted as `aria-label` and `<title>`.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_text_classes(mut self, classes: &[TextClass]) -> Self {
        self.text_classes.extend_from_slice(classes);
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn push_raw(mut self, svg: impl Into<String>) -> Self {
        self.elements.push(svg.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

        let _ = write!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img""#,
            w = self.width,
            h = self.height
        );
        let escaped_title = xml_escape(&self.title);
        if self.title.is_empty() {
            output.push_str(">\n");
        } else {
            let _ = writeln!(output, r#" aria-label="{escaped_title}">"#);
            let _ = writeln!(output, "  <title>{escaped_title}</title>");
        }

        if !self.text_classes.is_empty() {
            output.push_str("  <defs>\n    <style>\n");
            for class in &self.text_classes {
                let _ = writeln!(output, "      {}", class.to_css());
            }
            output.push_str("    </style>\n  </defs>\n");
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "  {line}");
            }
        }

        output.push_str("</svg>\n");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
