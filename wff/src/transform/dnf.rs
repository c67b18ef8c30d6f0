/*! Defines formulae in Disjunctive Normal Form (DNF) and implements an algorithm for
transforming a [`Formula`] to a [`Dnf`].

[`Formula`]: crate::syntax::Formula
*/
use super::{Clause, ClauseSet, Nnf, ToNnf};
use crate::{syntax::Formula, trace};
use std::ops::Deref;
use tracing::debug;

/// Represents a formula in Disjunctive Normal Form (DNF).
///
/// **Hint**: A DNF is a disjunction of zero or more [`Clause`]s where each clause is a
/// conjunction of [`Literal`]s. The empty disjunction is `⟘` and the empty clause is `⊤`.
///
/// [`Literal`]: crate::transform::Literal
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct Dnf(ClauseSet);

impl Dnf {
    fn clause_to_formula(clause: Clause) -> Formula {
        clause
            .into_literals()
            .into_iter()
            .map(Formula::from)
            .reduce(|acc, item| acc.and(item))
            .unwrap_or(Formula::Top)
    }

    /// Returns the clauses of the receiver.
    pub fn clauses(&self) -> &ClauseSet {
        &self.0
    }

    /// Consumes the receiver and returns its underlying clause set.
    pub fn into_clauses(self) -> ClauseSet {
        self.0
    }
}

impl Deref for Dnf {
    type Target = ClauseSet;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<ClauseSet> for Dnf {
    fn from(value: ClauseSet) -> Self {
        Self(value)
    }
}

/// Is the trait of types that can be transformed to [`Dnf`].
pub trait ToDnf {
    /// Transforms `self` to a Disjunctive Normal Form (DNF).
    ///
    /// **Example**:
    /// ```rust
    /// # use wff::syntax::Formula;
    /// use wff::transform::ToDnf;
    ///
    /// let formula: Formula = "p iff q".parse().unwrap();
    /// let dnf = formula.dnf();
    /// assert_eq!("((p ∧ q) ∨ (¬p ∧ ¬q))", dnf.to_string());
    /// ```
    fn dnf(&self) -> Dnf;
}

impl ToDnf for Nnf {
    fn dnf(&self) -> Dnf {
        clause_set(self).into()
    }
}

impl ToDnf for Formula {
    fn dnf(&self) -> Dnf {
        let dnf = self.nnf().dnf();
        debug!(
            event = trace::NORMALIZE,
            form = "dnf",
            formula = %self,
            clauses = dnf.len() as u64,
        );
        dnf
    }
}

impl std::fmt::Display for Dnf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&Formula::from(self), f)
    }
}

impl From<Dnf> for Formula {
    fn from(value: Dnf) -> Self {
        value
            .0
            .into_clauses()
            .into_iter()
            .map(Dnf::clause_to_formula)
            .reduce(|acc, item| acc.or(item))
            .unwrap_or(Formula::Bottom)
    }
}

impl From<&Dnf> for Formula {
    fn from(value: &Dnf) -> Self {
        value.clone().into()
    }
}

// Disjunctions take the union of clause sets and conjunctions distribute over them.
fn clause_set(formula: &Nnf) -> ClauseSet {
    match formula {
        Nnf::Top => ClauseSet::from(Clause::default()),
        Nnf::Bottom => ClauseSet::default(),
        Nnf::Literal(this) => ClauseSet::from(Clause::from(this.clone())),
        Nnf::And(this) => {
            let left = clause_set(&this.left);
            let right = clause_set(&this.right);
            left.product(&right).simplify()
        }
        Nnf::Or(this) => {
            let left = clause_set(&this.left);
            let right = clause_set(&this.right);
            left.union(&right).simplify()
        }
    }
}
