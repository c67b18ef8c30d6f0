/*! Defines formulae in Conjunctive Normal Form (CNF) and implements an algorithm for
transforming a [`Formula`] to a [`Cnf`].

[`Formula`]: crate::syntax::Formula
*/
use super::{Clause, ClauseSet, Nnf, ToNnf};
use crate::{syntax::Formula, trace};
use std::ops::Deref;
use tracing::debug;

/// Represents a formula in Conjunctive Normal Form (CNF).
///
/// **Hint**: A CNF is a conjunction of zero or more [`Clause`]s where each clause is a
/// disjunction of [`Literal`]s. The empty conjunction is `⊤` and the empty clause is `⟘`.
///
/// [`Literal`]: crate::transform::Literal
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct Cnf(ClauseSet);

impl Cnf {
    fn clause_to_formula(clause: Clause) -> Formula {
        clause
            .into_literals()
            .into_iter()
            .map(Formula::from)
            .reduce(|acc, item| acc.or(item))
            .unwrap_or(Formula::Bottom)
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

impl Deref for Cnf {
    type Target = ClauseSet;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<ClauseSet> for Cnf {
    fn from(value: ClauseSet) -> Self {
        Self(value)
    }
}

/// Is the trait of types that can be transformed to [`Cnf`].
pub trait ToCnf {
    /// Transforms `self` to a Conjunctive Normal Form (CNF).
    ///
    /// **Example**:
    /// ```rust
    /// # use wff::syntax::Formula;
    /// use wff::transform::ToCnf;
    ///
    /// let formula: Formula = "p <=> q".parse().unwrap();
    /// let cnf = formula.cnf();
    /// assert_eq!("((p ∨ ¬q) ∧ (q ∨ ¬p))", cnf.to_string());
    /// ```
    fn cnf(&self) -> Cnf;
}

impl ToCnf for Nnf {
    fn cnf(&self) -> Cnf {
        clause_set(self).into()
    }
}

impl ToCnf for Formula {
    fn cnf(&self) -> Cnf {
        let cnf = self.nnf().cnf();
        debug!(
            event = trace::NORMALIZE,
            form = "cnf",
            formula = %self,
            clauses = cnf.len() as u64,
        );
        cnf
    }
}

impl std::fmt::Display for Cnf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&Formula::from(self), f)
    }
}

impl From<Cnf> for Formula {
    fn from(value: Cnf) -> Self {
        value
            .0
            .into_clauses()
            .into_iter()
            .map(Cnf::clause_to_formula)
            .reduce(|acc, item| acc.and(item))
            .unwrap_or(Formula::Top)
    }
}

impl From<&Cnf> for Formula {
    fn from(value: &Cnf) -> Self {
        value.clone().into()
    }
}

// Conjunctions take the union of clause sets and disjunctions distribute over them.
fn clause_set(formula: &Nnf) -> ClauseSet {
    match formula {
        Nnf::Top => ClauseSet::default(),
        Nnf::Bottom => ClauseSet::from(Clause::default()),
        Nnf::Literal(this) => ClauseSet::from(Clause::from(this.clone())),
        Nnf::And(this) => {
            let left = clause_set(&this.left);
            let right = clause_set(&this.right);
            left.union(&right).simplify()
        }
        Nnf::Or(this) => {
            let left = clause_set(&this.left);
            let right = clause_set(&this.right);
            left.product(&right).simplify()
        }
    }
}
