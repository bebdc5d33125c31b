//! Pretty-printing of element trees.
//!
//! Neither text nor attribute values are escaped. Output contains exactly
//! what was put into the tree, so untrusted input must be escaped first.
//!
//! Text is written verbatim, line breaks included: only the first line of a
//! multi-line text run is indented.
//!
//! Indentation saturates at `usize::MAX` spaces instead of overflowing.

use itertools::Itertools;

use crate::attributes::render as render_attribute;
use crate::element::{Content, Element};

/// Spaces per nesting level unless configured otherwise.
pub const DEFAULT_INDENT_WIDTH: usize = 3;

/// Rendering configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces of indentation per nesting level.
    pub indent_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl RenderOptions {
    pub fn with_indent_width(indent_width: usize) -> Self {
        RenderOptions { indent_width }
    }

    /// Renders `element` as if nested `level` deep.
    pub fn render(&self, element: &Element, level: usize) -> String {
        let mut context = Context::new(self.indent_width, level);
        append_element(element, &mut context);
        context.into_string()
    }
}

/// Renders `element` at `level` with [DEFAULT_INDENT_WIDTH].
pub fn render_element(element: &Element, level: usize) -> String {
    RenderOptions::default().render(element, level)
}

struct Context {
    indent_width: usize,
    level: usize,
    lines: Vec<String>,
}

impl Context {
    fn new(indent_width: usize, level: usize) -> Self {
        Context {
            indent_width,
            level,
            lines: Vec::new(),
        }
    }

    fn add_line(&mut self, line: &str) {
        let indent = " ".repeat(self.level.saturating_mul(self.indent_width));
        self.lines.push(indent + line);
    }

    fn into_string(self) -> String {
        self.lines.into_iter().join("\n")
    }
}

/// Each attribute preceded by one space. A false bool attribute leaves its space behind.
fn attributes_str(element: &Element) -> String {
    element
        .attributes()
        .iter()
        .map(|attribute| format!(" {}", render_attribute(attribute)))
        .collect()
}

fn append_element(element: &Element, ctx: &mut Context) {
    let tag = element.tag();
    let attributes = attributes_str(element);
    if let Some(text) = element.trivial_content() {
        ctx.add_line(&format!("<{tag}{attributes}>{text}</{tag}>"));
        return;
    }

    ctx.add_line(&format!("<{tag}{attributes}>"));
    let level = ctx.level;
    ctx.level = level.saturating_add(1);
    for child in element.children() {
        match child {
            Content::Element(child) => append_element(child, ctx),
            Content::Text(text) => ctx.add_line(text),
        }
    }
    ctx.level = level;
    ctx.add_line(&format!("</{tag}>"));
}
