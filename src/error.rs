use std::fmt;

use itertools::Itertools;

use crate::attributes::AttributeKind;
use crate::document::DocumentError;

/// An attribute broke a rule of the table it was checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The attribute `name` must be of kind `expected`.
    WrongKind {
        name: String,
        expected: AttributeKind,
    },
    /// The attribute `name` is an enumeration and `found` is not one of `choices`.
    NotAChoice {
        name: String,
        choices: &'static [&'static str],
        found: String,
    },
}

impl std::error::Error for ValidationError {}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::WrongKind { name, expected } => {
                write!(f, "attribute {} must be a {} attribute", name, expected)
            }
            Self::NotAChoice {
                name,
                choices,
                found,
            } => write!(
                f,
                "attribute {} is an enum; it must be one of [{}] but it is {}",
                name,
                choices.iter().join(", "),
                found
            ),
        };
    }
}

/// The arguments given to an element builder don't describe a single element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// No tag name was given, or it was empty.
    MissingTag,
    /// A second text run was given for the element `tag`.
    MultipleTextRuns { tag: String },
    /// Text and child elements were both given for the element `tag`.
    TextMixedWithElements { tag: String },
}

impl std::error::Error for BuilderError {}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::MissingTag => write!(f, "element has no tag name"),
            Self::MultipleTextRuns { tag } => {
                write!(f, "element <{}> was given more than one text run", tag)
            }
            Self::TextMixedWithElements { tag } => write!(
                f,
                "element <{}> mixes text with element children",
                tag
            ),
        };
    }
}

/// Any error this crate produces.
#[derive(Debug, Clone)]
pub enum Error {
    Validation(ValidationError),
    Builder(BuilderError),
    Document(DocumentError),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Builder(err) => Some(err),
            Self::Document(err) => Some(err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid attribute: {}", err),
            Self::Builder(err) => write!(f, "invalid element: {}", err),
            Self::Document(err) => write!(f, "invalid document: {}", err),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(value: ValidationError) -> Self {
        Error::Validation(value)
    }
}

impl From<BuilderError> for Error {
    fn from(value: BuilderError) -> Self {
        Error::Builder(value)
    }
}

impl From<DocumentError> for Error {
    fn from(value: DocumentError) -> Self {
        Error::Document(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ValidationError::WrongKind {
            name: "hidden".to_owned(),
            expected: AttributeKind::Bool,
        };
        assert_eq!(err.to_string(), "attribute hidden must be a bool attribute");

        let err = ValidationError::NotAChoice {
            name: "dir".to_owned(),
            choices: &["ltr", "rtl", "auto"],
            found: "up".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "attribute dir is an enum; it must be one of [ltr, rtl, auto] but it is up"
        );

        let err = BuilderError::TextMixedWithElements {
            tag: "div".to_owned(),
        };
        assert_eq!(
            Error::from(err).to_string(),
            "invalid element: element <div> mixes text with element children"
        );
    }
}
