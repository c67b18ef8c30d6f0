/*! Implements the common transformations of propositional formulae.

Every transformation builds a new formula that is equivalent to its input; none of them fail.
The conversions to [`Cnf`] and [`Dnf`] distribute one connective over the other and may grow
exponentially in the size of the input. */
mod clause;
mod cnf;
mod dnf;
mod nnf;
mod simplify;

pub use clause::{Clause, ClauseSet, Literal};
pub use cnf::{Cnf, ToCnf};
pub use dnf::{Dnf, ToDnf};
pub use nnf::{Nnf, ToNnf};

use crate::syntax::Formula;

/// Returns the simplification of `formula` (see [`Formula::simplify`]).
pub fn simplify(formula: &Formula) -> Formula {
    formula.simplify()
}

/// Returns the Negation Normal Form of `formula` (see [`ToNnf`]).
pub fn to_nnf(formula: &Formula) -> Formula {
    formula.nnf().into()
}

/// Returns the Conjunctive Normal Form of `formula` (see [`ToCnf`]).
///
/// **Example**:
/// ```rust
/// use wff::{parse, to_cnf};
///
/// let formula = parse("(p & q) | r").unwrap();
/// assert_eq!("((p ∨ r) ∧ (q ∨ r))", to_cnf(&formula).to_string());
/// ```
pub fn to_cnf(formula: &Formula) -> Formula {
    formula.cnf().into()
}

/// Returns the Disjunctive Normal Form of `formula` (see [`ToDnf`]).
pub fn to_dnf(formula: &Formula) -> Formula {
    formula.dnf().into()
}
