/*! Defines an abstract syntax tree (AST) for propositional formulae. */

mod connective;
mod formula;
#[macro_use]
mod macros;
mod symbol;

pub use connective::{And, Iff, Implies, Not, Or};
pub use formula::Formula;
pub use symbol::{Connective, Error, Prop};
pub(crate) use symbol::{is_identifier_char, is_identifier_start};
