/*! Defines truth assignments and the evaluation of formulae under them. */
mod assignments;

pub use assignments::Assignments;

use crate::syntax::{Formula, Prop};
use itertools::Itertools;
use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    iter::FromIterator,
};
use thiserror::Error;

/// Is the type of errors arising from evaluating a formula.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum Error {
    /// Is returned when the assignment has no value for an atom of the formula.
    #[error("atom `{}` is not bound by the assignment", .atom.to_string())]
    UnboundAtom { atom: Prop },
}

/// Is a mapping from propositional symbols to truth values.
///
/// An assignment is total over a formula if it binds every atom of the formula. Assignments
/// are values: extending one with [`Assignment::with`] returns a new assignment.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Assignment(BTreeMap<Prop, bool>);

impl Assignment {
    /// Returns an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `prop` in the receiver, if bound.
    #[inline(always)]
    pub fn get(&self, prop: &Prop) -> Option<bool> {
        self.0.get(prop).copied()
    }

    /// Returns a copy of the receiver where `prop` is bound to `value`.
    pub fn with(&self, prop: Prop, value: bool) -> Self {
        let mut map = self.0.clone();
        map.insert(prop, value);
        Self(map)
    }

    /// Returns the number of symbols bound by the receiver.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the receiver binds no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the bindings of the receiver, ordered by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (&Prop, bool)> {
        self.0.iter().map(|(p, v)| (p, *v))
    }

    /// Returns true if the receiver binds every atom of `formula`.
    pub fn is_total_over(&self, formula: &Formula) -> bool {
        formula.atoms().into_iter().all(|p| self.0.contains_key(p))
    }
}

impl FromIterator<(Prop, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Prop, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<Prop, bool>> for Assignment {
    fn from(value: BTreeMap<Prop, bool>) -> Self {
        Self(value)
    }
}

impl From<HashMap<Prop, bool>> for Assignment {
    fn from(value: HashMap<Prop, bool>) -> Self {
        value.into_iter().collect()
    }
}

impl IntoIterator for Assignment {
    type Item = (Prop, bool);
    type IntoIter = std::collections::btree_map::IntoIter<Prop, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bindings = self
            .0
            .iter()
            .map(|(p, v)| format!("{} = {}", p, v))
            .join(", ");
        write!(f, "{{{}}}", bindings)
    }
}

impl Formula {
    /// Returns the truth value of the receiver under `assignment`.
    ///
    /// Both operands of every binary connective are evaluated, so the error for an
    /// assignment that misses atoms always names the leftmost unbound atom, independent of
    /// the values of the other atoms.
    ///
    /// **Example**:
    /// ```rust
    /// use wff::{assignment, syntax::Formula};
    ///
    /// let formula: Formula = "p & q".parse().unwrap();
    ///
    /// assert_eq!(Ok(false), formula.evaluate(&assignment! { p => true, q => false }));
    /// assert!(formula.evaluate(&assignment! { p => false }).is_err());
    /// ```
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, Error> {
        match self {
            Self::Top => Ok(true),
            Self::Bottom => Ok(false),
            Self::Atom(this) => assignment
                .get(this)
                .ok_or_else(|| Error::UnboundAtom { atom: this.clone() }),
            Self::Not(this) => Ok(!this.formula.evaluate(assignment)?),
            Self::And(this) => {
                let left = this.left.evaluate(assignment)?;
                let right = this.right.evaluate(assignment)?;
                Ok(left && right)
            }
            Self::Or(this) => {
                let left = this.left.evaluate(assignment)?;
                let right = this.right.evaluate(assignment)?;
                Ok(left || right)
            }
            Self::Implies(this) => {
                let premise = this.premise.evaluate(assignment)?;
                let consequence = this.consequence.evaluate(assignment)?;
                Ok(!premise || consequence)
            }
            Self::Iff(this) => {
                let left = this.left.evaluate(assignment)?;
                let right = this.right.evaluate(assignment)?;
                Ok(left == right)
            }
        }
    }

    /// Returns the total assignments over the atoms of the receiver (see [`Assignments`]).
    pub fn assignments(&self) -> Assignments {
        Assignments::new(self.atoms().into_iter().cloned())
    }
}

/// Evaluates `formula` under `assignment` (see [`Formula::evaluate`]).
pub fn evaluate(formula: &Formula, assignment: &Assignment) -> Result<bool, Error> {
    formula.evaluate(assignment)
}

/// Returns the total assignments over the atoms of `formula` in their canonical order (see
/// [`Assignments`]).
pub fn all_assignments(formula: &Formula) -> Assignments {
    formula.assignments()
}
