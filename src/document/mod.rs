//! Tree-description documents: `div(@"dir=ltr", p("hello"), 42)`.
//!
//! Each call is built with the same [Builder] and attribute rules as the
//! library API, so a document fails exactly where the equivalent Rust
//! expression would.

use std::fmt;

use pest::error::ErrorVariant;
use pest::iterators::Pair;
use pest::Parser;

use crate::attributes::{make_attribute_with, RuleTable, GLOBAL_RULES};
use crate::element::{Arg, Builder, Element, Tag};
use crate::error::{BuilderError, ValidationError};
use crate::parser::{LadleParser, Rule};

/// Where a piece of a document starts: 1-based line and column, and that line's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub col: usize,
    pub source_line: String,
}

impl Position {
    fn of(pair: &Pair<'_, Rule>) -> Self {
        let start = pair.as_span().start_pos();
        let (line, col) = start.line_col();
        Position {
            line,
            col,
            source_line: start.line_of().trim_end().to_owned(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.col, self.source_line)
    }
}

#[derive(Debug, Clone)]
pub enum DocumentError {
    /// The text does not match the document grammar.
    Syntax(Box<pest::error::Error<Rule>>),
    /// A parsed `Rule` turned up where the interpreter did not expect it.
    Structure(Rule, Position),
    /// An `@"..."` attribute was rejected.
    Attribute(ValidationError, Position),
    /// An element call could not be built.
    Builder(BuilderError, Position),
}

impl std::error::Error for DocumentError {}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::Syntax(err) => write!(f, "syntax error\n{}", err),
            Self::Structure(rule, at) => write!(f, "unexpected {:?} at {}", rule, at),
            Self::Attribute(err, at) => write!(f, "{} at {}", err, at),
            Self::Builder(err, at) => write!(f, "{} at {}", err, at),
        };
    }
}

/// Parses a document and builds its root element against [GLOBAL_RULES].
pub fn parse_document(source: &str) -> Result<Element, DocumentError> {
    parse_document_with(&GLOBAL_RULES, source)
}

/// [parse_document] with an explicit attribute rule table.
pub fn parse_document_with(rules: &RuleTable, source: &str) -> Result<Element, DocumentError> {
    let mut pairs = LadleParser::parse(Rule::document, source)
        .map_err(|err| DocumentError::Syntax(Box::new(err)))?;
    match pairs.next().and_then(|document| document.into_inner().next()) {
        Some(root) => interpret_element(rules, root),
        None => {
            let err = pest::error::Error::new_from_pos(
                ErrorVariant::CustomError {
                    message: "empty document".to_owned(),
                },
                pest::Position::from_start(source),
            );
            Err(DocumentError::Syntax(Box::new(err)))
        }
    }
}

fn interpret_element(rules: &RuleTable, element: Pair<'_, Rule>) -> Result<Element, DocumentError> {
    let position = Position::of(&element);
    let mut pairs = element.into_inner();
    let tag_name = match pairs.next() {
        Some(pair) if pair.as_rule() == Rule::tag_name => pair.as_str(),
        _ => return Err(DocumentError::Structure(Rule::element, position)),
    };
    if tag_name.parse::<Tag>().is_err() {
        tracing::debug!(tag = tag_name, %position, "building element with an unlisted tag");
    }

    let mut builder = Builder::new();
    builder
        .push(Arg::from(tag_name))
        .map_err(|err| DocumentError::Builder(err, position.clone()))?;
    for pair in pairs {
        let at = Position::of(&pair);
        let arg = match pair.as_rule() {
            Rule::element => Arg::Element(interpret_element(rules, pair)?),
            Rule::attribute => {
                let token = unescape(string_inner(&pair)?);
                let attribute = make_attribute_with(rules, &token)
                    .map_err(|err| DocumentError::Attribute(err, at.clone()))?;
                Arg::Attribute(attribute)
            }
            Rule::text => Arg::Text(unescape(string_inner(&pair)?)),
            Rule::number => Arg::Text(pair.as_str().to_owned()),
            rule => return Err(DocumentError::Structure(rule, at)),
        };
        builder
            .push(arg)
            .map_err(|err| DocumentError::Builder(err, at))?;
    }

    let built = builder
        .finish()
        .map_err(|err| DocumentError::Builder(err, position.clone()))?;
    tracing::trace!(tag = built.tag(), %position, "built element");
    Ok(built)
}

/// The raw text between the quotes of a `text` or `attribute` pair.
fn string_inner<'a>(pair: &Pair<'a, Rule>) -> Result<&'a str, DocumentError> {
    pair.clone()
        .into_inner()
        .find(|inner| inner.as_rule() == Rule::string_inner)
        .map(|inner| inner.as_str())
        .ok_or_else(|| DocumentError::Structure(pair.as_rule(), Position::of(pair)))
}

/// Resolves `\"`, `\\`, `\n` and `\t`; any other escaped character stands for itself.
fn unescape(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }
    result
}
