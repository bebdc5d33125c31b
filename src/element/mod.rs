//! The element tree and the variadic builder that assembles it.
//!
//! Text is stored verbatim and is never escaped on output.

mod tags;

use std::fmt;

use crate::attributes::Attribute;
use crate::error::BuilderError;
use crate::render::RenderOptions;

pub use tags::*;

/// A child of an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Content {
    Element(Element),
    Text(String),
}

impl From<Element> for Content {
    fn from(value: Element) -> Self {
        Content::Element(value)
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Text(value.to_owned())
    }
}

/// An HTML element: a tag name, its attributes in order, and its children in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    tag: String,
    attributes: Vec<Attribute>,
    children: Vec<Content>,
}

impl Element {
    /// Assembles an element as given. Unlike the builder this accepts any mix
    /// of children, including several text runs.
    pub fn new(tag: impl Into<String>, attributes: Vec<Attribute>, children: Vec<Content>) -> Self {
        Element {
            tag: tag.into(),
            attributes,
            children,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn children(&self) -> &[Content] {
        &self.children
    }

    /// The content to print on the element's own line: `Some("")` with no
    /// children, the text for a single text child, otherwise `None`.
    pub fn trivial_content(&self) -> Option<&str> {
        match self.children.as_slice() {
            [] => Some(""),
            [Content::Text(text)] => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", RenderOptions::default().render(self, 0))
    }
}

/// One argument to the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// The tag name if none is set yet, otherwise a text run.
    Text(String),
    Attribute(Attribute),
    Element(Element),
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_owned())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Text(value.clone())
    }
}

impl From<Attribute> for Arg {
    fn from(value: Attribute) -> Self {
        Arg::Attribute(value)
    }
}

impl From<Element> for Arg {
    fn from(value: Element) -> Self {
        Arg::Element(value)
    }
}

impl From<Tag> for Arg {
    fn from(value: Tag) -> Self {
        Arg::Text(value.to_string())
    }
}

macro_rules! arg_from_display {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Arg {
                fn from(value: $t) -> Self {
                    Arg::Text(value.to_string())
                }
            }
        )+
    };
}

arg_from_display!(char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Accumulates builder arguments left to right.
#[derive(Debug, Default)]
pub struct Builder {
    tag: Option<String>,
    attributes: Vec<Attribute>,
    children: Vec<Content>,
}

impl Builder {
    pub fn new() -> Self {
        Builder::default()
    }

    /// Classifies one argument into the tag, the attributes or the children.
    pub fn push(&mut self, arg: Arg) -> Result<(), BuilderError> {
        match arg {
            Arg::Text(text) => {
                if self.tag.is_none() {
                    tracing::trace!(tag = %text, "tag name");
                    self.tag = Some(text);
                    return Ok(());
                }
                if self.children.iter().any(|c| matches!(c, Content::Element(_))) {
                    return Err(self.text_mixed_with_elements());
                }
                if !self.children.is_empty() {
                    return Err(BuilderError::MultipleTextRuns {
                        tag: self.tag_name().to_owned(),
                    });
                }
                tracing::trace!(tag = self.tag_name(), "text run");
                self.children.push(Content::Text(text));
            }
            Arg::Attribute(attribute) => {
                tracing::trace!(tag = self.tag_name(), attribute = attribute.name(), "attribute");
                self.attributes.push(attribute);
            }
            Arg::Element(element) => {
                if self.children.iter().any(|c| matches!(c, Content::Text(_))) {
                    return Err(self.text_mixed_with_elements());
                }
                tracing::trace!(tag = self.tag_name(), child = element.tag(), "child element");
                self.children.push(Content::Element(element));
            }
        }
        Ok(())
    }

    pub fn finish(self) -> Result<Element, BuilderError> {
        let tag = match self.tag {
            Some(tag) if !tag.is_empty() => tag,
            _ => return Err(BuilderError::MissingTag),
        };
        return Ok(Element::new(tag, self.attributes, self.children));
    }

    fn tag_name(&self) -> &str {
        self.tag.as_deref().unwrap_or_default()
    }

    fn text_mixed_with_elements(&self) -> BuilderError {
        BuilderError::TextMixedWithElements {
            tag: self.tag_name().to_owned(),
        }
    }
}

/// Builds an element whose first string argument is its tag name.
pub fn create_element<I>(args: I) -> Result<Element, BuilderError>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    let mut builder = Builder::new();
    for arg in args {
        builder.push(arg.into())?;
    }
    builder.finish()
}

/// Builds a `tag` element from `args`; every string in `args` is text.
pub fn build_element<I>(tag: &str, args: I) -> Result<Element, BuilderError>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    create_element(std::iter::once(Arg::from(tag)).chain(args.into_iter().map(Into::into)))
}

/// Collects builder arguments of mixed types into a `Vec<Arg>`.
///
/// ```
/// use ladle::{args, attr, div, p};
///
/// let page = div(args![attr("id=main")?, p(["hello"])?])?;
/// assert_eq!(page.children().len(), 1);
/// # Ok::<(), ladle::Error>(())
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::Arg> = vec![$($crate::Arg::from($arg)),*];
        args
    }};
}

/// Builds an element from a tag name (a `&str` or a [Tag]) and mixed arguments.
#[macro_export]
macro_rules! element {
    ($tag:expr $(, $arg:expr)* $(,)?) => {
        $crate::create_element($crate::args![$tag $(, $arg)*])
    };
}
