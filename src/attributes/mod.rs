//! HTML attributes and their validation against a [RuleTable].
//!
//! Values are never escaped: `render` wraps the value in double quotes as is,
//! so a value containing `"` produces broken markup. Escape untrusted input
//! before it reaches this crate.

mod rules;

use std::fmt;
use std::str::FromStr;

use pest::iterators::Pairs;
use pest::Parser;

use crate::error::ValidationError;
use crate::parser::{LadleParser, Rule};

pub use rules::{AttributeKind, Constraint, GlobalAttribute, RuleTable, GLOBAL_RULES};

/// A single attribute of an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Rendered as the bare name when `value` is true, and not at all when false.
    Bool { name: String, value: bool },
    /// Rendered as `name="data"`.
    String { name: String, data: String },
}

impl Attribute {
    /// A bool attribute, validated against [GLOBAL_RULES].
    pub fn new_bool(name: impl Into<String>, value: bool) -> Result<Self, ValidationError> {
        let attribute = Attribute::Bool {
            name: name.into(),
            value,
        };
        validate(&attribute)?;
        Ok(attribute)
    }

    /// A string attribute, validated against [GLOBAL_RULES].
    pub fn new_string(
        name: impl Into<String>,
        data: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let attribute = Attribute::String {
            name: name.into(),
            data: data.into(),
        };
        validate(&attribute)?;
        Ok(attribute)
    }

    pub fn name(&self) -> &str {
        match self {
            Attribute::Bool { name, .. } | Attribute::String { name, .. } => name,
        }
    }

    pub fn kind(&self) -> AttributeKind {
        match self {
            Attribute::Bool { .. } => AttributeKind::Bool,
            Attribute::String { .. } => AttributeKind::String,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Attribute::Bool { name, value: true } => write!(f, "{}", name),
            Attribute::Bool { value: false, .. } => Ok(()),
            Attribute::String { name, data } => write!(f, "{}=\"{}\"", name, data),
        }
    }
}

impl FromStr for Attribute {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        make_attribute(s)
    }
}

impl TryFrom<&str> for Attribute {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        make_attribute(value)
    }
}

/// Parses `name` into a bool attribute or `name=value` into a string
/// attribute, and validates it against [GLOBAL_RULES].
pub fn make_attribute(token: &str) -> Result<Attribute, ValidationError> {
    make_attribute_with(&GLOBAL_RULES, token)
}

/// Short alias of [make_attribute].
pub fn attr(token: &str) -> Result<Attribute, ValidationError> {
    make_attribute(token)
}

/// [make_attribute] against an explicit rule table.
pub fn make_attribute_with(rules: &RuleTable, token: &str) -> Result<Attribute, ValidationError> {
    let (name, data) = match LadleParser::parse(Rule::attribute_token, token) {
        Ok(pairs) => split_token(pairs),
        // The token grammar accepts every input.
        Err(_) => (token, None),
    };
    let attribute = match data {
        Some(data) => Attribute::String {
            name: name.to_owned(),
            data: data.to_owned(),
        },
        None => Attribute::Bool {
            name: name.to_owned(),
            value: true,
        },
    };
    validate_with(rules, &attribute)?;
    return Ok(attribute);
}

fn split_token(pairs: Pairs<'_, Rule>) -> (&str, Option<&str>) {
    let mut name = "";
    let mut data = None;
    for pair in pairs.flatten() {
        match pair.as_rule() {
            Rule::attribute_name => name = pair.as_str(),
            Rule::attribute_value => data = Some(pair.as_str()),
            _ => {}
        }
    }
    (name, data)
}

/// Checks `attribute` against [GLOBAL_RULES].
pub fn validate(attribute: &Attribute) -> Result<(), ValidationError> {
    validate_with(&GLOBAL_RULES, attribute)
}

/// Checks `attribute` against `rules`: kind first, then the enumerated value.
pub fn validate_with(rules: &RuleTable, attribute: &Attribute) -> Result<(), ValidationError> {
    let constraint = match rules.get(attribute.name()) {
        Some(constraint) => constraint,
        None => return Ok(()),
    };
    if attribute.kind() != constraint.kind() {
        return Err(ValidationError::WrongKind {
            name: attribute.name().to_owned(),
            expected: constraint.kind(),
        });
    }
    if let (Constraint::Choice(choices), Attribute::String { name, data }) = (constraint, attribute)
    {
        if !choices.contains(&data.as_str()) {
            return Err(ValidationError::NotAChoice {
                name: name.clone(),
                choices: *choices,
                found: data.clone(),
            });
        }
    }
    Ok(())
}

/// The attribute as it appears inside a start tag; empty for a false bool attribute.
pub fn render(attribute: &Attribute) -> String {
    attribute.to_string()
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    macro_rules! test_valid {
        ($name:ident, $token:expr, $rendered:expr) => {
            #[test]
            fn $name() {
                let attribute = make_attribute($token).unwrap();

                assert_eq!(render(&attribute), $rendered);
            }
        };
    }

    macro_rules! test_invalid {
        ($name:ident, $token:expr, $expected:pat) => {
            #[test]
            fn $name() {
                let result = make_attribute($token);

                assert!(matches!(result, Err($expected)), "Result was: {:?}", result);
            }
        };
    }

    test_valid!(test_unknown_bool, "required", "required");
    test_valid!(test_unknown_string, "id=main", "id=\"main\"");
    test_valid!(test_hidden, "hidden", "hidden");
    test_valid!(test_autocapitalize_words, "autocapitalize=words", "autocapitalize=\"words\"");
    test_valid!(test_contenteditable, "contenteditable=false", "contenteditable=\"false\"");
    test_valid!(test_dir, "dir=auto", "dir=\"auto\"");
    test_valid!(test_draggable, "draggable=true", "draggable=\"true\"");
    test_valid!(test_enterkeyhint, "enterkeyhint=send", "enterkeyhint=\"send\"");
    test_valid!(test_inputmode, "inputmode=email", "inputmode=\"email\"");
    test_valid!(test_value_with_equals, "title=a=b", "title=\"a=b\"");
    test_valid!(test_value_not_escaped, "title=<b>&", "title=\"<b>&\"");
    test_valid!(test_empty_token, "", "");
    test_valid!(test_missing_name, "=x", "=\"x\"");
    test_valid!(test_name_with_space, "aria label=x", "aria label=\"x\"");
    test_valid!(test_name_with_slash, "x/y", "x/y");
    test_valid!(test_trailing_space_is_part_of_name, "hidden ", "hidden ");

    test_invalid!(
        test_autocapitalize_loud,
        "autocapitalize=loud",
        ValidationError::NotAChoice { .. }
    );
    test_invalid!(test_dir_case_sensitive, "dir=LTR", ValidationError::NotAChoice { .. });
    test_invalid!(test_inputmode_empty, "inputmode=", ValidationError::NotAChoice { .. });
    test_invalid!(
        test_hidden_as_string,
        "hidden=true",
        ValidationError::WrongKind {
            expected: AttributeKind::Bool,
            ..
        }
    );
    test_invalid!(
        test_dir_as_bool,
        "dir",
        ValidationError::WrongKind {
            expected: AttributeKind::String,
            ..
        }
    );

    #[test]
    fn test_every_choice_is_accepted() {
        for attr in GlobalAttribute::iter() {
            if let Constraint::Choice(choices) = attr.constraint() {
                for choice in choices {
                    let attribute = Attribute::new_string(attr.to_string(), *choice).unwrap();
                    assert_eq!(render(&attribute), format!("{}=\"{}\"", attr, choice));
                }
            }
        }
    }

    #[test]
    fn test_every_enum_rejects_other_values() {
        let mut checked = 0;
        for attr in GlobalAttribute::iter() {
            if let Constraint::Choice(choices) = attr.constraint() {
                for found in ["bogus", "", "LTR ", "true"] {
                    if choices.contains(&found) {
                        continue;
                    }
                    let result = make_attribute(&format!("{}={}", attr, found));
                    assert_eq!(
                        result,
                        Err(ValidationError::NotAChoice {
                            name: attr.to_string(),
                            choices,
                            found: found.to_owned(),
                        })
                    );
                }
                checked += 1;
            }
        }
        assert_eq!(checked, 6);
    }

    #[test]
    fn test_bool_only_names_reject_strings() {
        for name in ["autofocus", "hidden", "itemscope"] {
            let result = Attribute::new_string(name, "");
            assert_eq!(
                result,
                Err(ValidationError::WrongKind {
                    name: name.to_owned(),
                    expected: AttributeKind::Bool
                })
            );
        }
    }

    #[test]
    fn test_false_bool_renders_nothing() {
        let attribute = Attribute::new_bool("required", false).unwrap();

        assert_eq!(render(&attribute), "");
        assert_eq!(attribute.name(), "required");
    }

    #[test]
    fn test_kind_checked_before_choice() {
        let result = validate(&Attribute::Bool {
            name: "inputmode".to_owned(),
            value: true,
        });

        assert_eq!(
            result,
            Err(ValidationError::WrongKind {
                name: "inputmode".to_owned(),
                expected: AttributeKind::String
            })
        );
    }

    #[test]
    fn test_parse_and_try_from() {
        let parsed: Attribute = "dir=rtl".parse().unwrap();
        let converted = Attribute::try_from("dir=rtl").unwrap();

        assert_eq!(parsed, converted);
        assert_eq!(parsed.kind(), AttributeKind::String);
        assert!("dir=up".parse::<Attribute>().is_err());
    }

    #[test]
    fn test_custom_rules() {
        let rules = RuleTable::empty().with("loading", Constraint::Choice(&["lazy", "eager"]));

        assert!(make_attribute_with(&rules, "loading=lazy").is_ok());
        assert!(make_attribute_with(&rules, "loading=soon").is_err());
        // The global rules don't apply to a table that lacks them.
        assert!(make_attribute_with(&rules, "hidden=yes").is_ok());
    }
}
