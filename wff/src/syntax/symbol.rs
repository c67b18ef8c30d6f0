/*! Defines the propositional symbol [`Prop`], naming the atoms of formulae.

[`Prop`]: crate::syntax::Prop
*/

use crate::parser::Lexicon;
use std::{convert::TryFrom, fmt, str::FromStr};
use thiserror::Error;

/// Is the type of errors returned when a [`Prop`] is built from a name.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum Error {
    /// Is returned when the name is not an identifier or is a keyword of the standard
    /// lexicon.
    #[error("`{name}` is not a valid propositional symbol")]
    InvalidName { name: String },
}

/// Represents a propositional symbol (a boolean variable) with a given name.
///
/// **Note**: Two symbols are the same variable if and only if their names are equal; names
/// are case-sensitive. A name is an identifier that is not a keyword of the standard
/// [`Lexicon`], so the canonical text of every formula parses back.
///
/// **Example**:
/// ```rust
/// use wff::syntax::Prop;
///
/// assert_eq!("rain_1", Prop::new("rain_1").unwrap().name());
/// assert!(Prop::new("and").is_err());
/// assert!(Prop::new("p q").is_err());
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Prop(String);

impl Prop {
    /// Returns a symbol named `name` if `name` is an identifier that the standard lexicon
    /// does not reserve.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, Error> {
        let name = name.into();
        if Self::is_identifier(&name) && !Lexicon::standard().is_keyword(&name) {
            Ok(Self(name))
        } else {
            Err(Error::InvalidName { name })
        }
    }

    // Used by the lexer, which has already classified `name` as an atom of its lexicon.
    pub(crate) fn unchecked<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Returns the name of the receiver.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns true if `name` is shaped like an identifier: an ASCII letter or `_` followed by
    /// ASCII letters, digits or `_`.
    pub fn is_identifier(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if is_identifier_start(c) => chars.all(is_identifier_char),
            _ => false,
        }
    }
}

#[inline]
pub(crate) fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl TryFrom<&str> for Prop {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Prop {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Prop {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Prop {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Is the set of logical connectives that combine formulae.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub enum Connective {
    Not,
    And,
    Or,
    Implies,
    Iff,
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Self::Not => "¬",
            Self::And => "∧",
            Self::Or => "∨",
            Self::Implies => "→",
            Self::Iff => "⇔",
        };
        write!(f, "{}", symbol)
    }
}
