//! Build HTML element trees from plain function calls and render them as
//! indented markup.
//!
//! ```
//! use ladle::{args, attr, div, p, render_element};
//!
//! let page = div(args![attr("dir=ltr")?, p(["hello"])?])?;
//! assert_eq!(
//!     render_element(&page, 0),
//!     "<div dir=\"ltr\">\n   <p>hello</p>\n</div>"
//! );
//! # Ok::<(), ladle::Error>(())
//! ```
//!
//! Nothing is escaped: text and attribute values reach the output exactly as
//! given. Escape untrusted input before building a tree from it.

pub mod attributes;
pub mod document;
pub mod element;
pub mod error;
pub mod parser;
pub mod render;

pub use attributes::{
    attr, make_attribute, make_attribute_with, validate, validate_with, Attribute, AttributeKind,
    Constraint, GlobalAttribute, RuleTable, GLOBAL_RULES,
};
pub use document::{parse_document, parse_document_with, DocumentError};
pub use element::*;
pub use error::{BuilderError, Error, ValidationError};
pub use render::{render_element, RenderOptions, DEFAULT_INDENT_WIDTH};
