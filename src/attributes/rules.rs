use std::collections::HashMap;

use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The two shapes an attribute can take.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum AttributeKind {
    /// Present or absent, e.g. `hidden`.
    #[strum(serialize = "bool")]
    Bool,
    /// A name with a textual value, e.g. `dir="ltr"`.
    #[strum(serialize = "string")]
    String,
}

/// The global attributes that carry a fixed validation rule.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum GlobalAttribute {
    Autofocus,
    Hidden,
    Itemscope,
    Autocapitalize,
    Contenteditable,
    Dir,
    Draggable,
    Enterkeyhint,
    Inputmode,
}

impl GlobalAttribute {
    pub fn constraint(self) -> Constraint {
        match self {
            Self::Autofocus | Self::Hidden | Self::Itemscope => Constraint::Bool,
            Self::Autocapitalize => {
                Constraint::Choice(&["off", "on", "sentences", "words", "characters"])
            }
            Self::Contenteditable | Self::Draggable => Constraint::Choice(&["true", "false"]),
            Self::Dir => Constraint::Choice(&["ltr", "rtl", "auto"]),
            Self::Enterkeyhint => Constraint::Choice(&[
                "enter", "done", "go", "next", "previous", "search", "send",
            ]),
            Self::Inputmode => Constraint::Choice(&[
                "none", "text", "decimal", "numeric", "tel", "search", "email", "url",
            ]),
        }
    }
}

/// What a rule table demands of one attribute name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Must be a bool attribute.
    Bool,
    /// Must be a string attribute whose value is one of the choices.
    Choice(&'static [&'static str]),
}

impl Constraint {
    pub fn kind(&self) -> AttributeKind {
        match self {
            Constraint::Bool => AttributeKind::Bool,
            Constraint::Choice(_) => AttributeKind::String,
        }
    }
}

/// Read-only lookup from attribute name to its [Constraint].
///
/// Names missing from the table are unconstrained.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: HashMap<&'static str, Constraint>,
}

impl RuleTable {
    /// A table with no rules; every attribute passes.
    pub fn empty() -> Self {
        RuleTable::default()
    }

    /// The HTML global attribute rules.
    pub fn global() -> Self {
        let rules = GlobalAttribute::iter()
            .map(|attr| {
                let name: &'static str = attr.into();
                (name, attr.constraint())
            })
            .collect();
        return RuleTable { rules };
    }

    /// Returns this table with `constraint` applied to `name`, replacing any previous rule.
    pub fn with(mut self, name: &'static str, constraint: Constraint) -> Self {
        self.rules.insert(name, constraint);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Constraint> {
        self.rules.get(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

lazy_static! {
    /// The global attribute rules, shared by every validating constructor that
    /// isn't handed a table explicitly.
    pub static ref GLOBAL_RULES: RuleTable = RuleTable::global();
}
