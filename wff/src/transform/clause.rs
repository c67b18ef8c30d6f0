/*! Defines literals, clauses and clause sets, the building blocks of [`Cnf`] and [`Dnf`].

[`Cnf`]: crate::transform::Cnf
[`Dnf`]: crate::transform::Dnf
*/
use crate::syntax::{Formula, Not, Prop};
use itertools::Itertools;
use std::{collections::BTreeSet, ops::Deref};

/// A literal is either a propositional symbol or its negation.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Literal {
    /// Wraps a (positive) propositional symbol.
    Pos(Prop),

    /// Wraps the negation of a propositional symbol.
    Neg(Prop),
}

impl Literal {
    /// Returns the propositional symbol of the receiver.
    pub fn prop(&self) -> &Prop {
        match self {
            Self::Pos(this) | Self::Neg(this) => this,
        }
    }

    /// Returns true if the receiver is not negated.
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Pos(_))
    }

    /// Returns the literal with the same symbol and the opposite polarity.
    pub fn complement(&self) -> Self {
        match self {
            Self::Pos(this) => Self::Neg(this.clone()),
            Self::Neg(this) => Self::Pos(this.clone()),
        }
    }
}

impl From<Prop> for Literal {
    fn from(value: Prop) -> Self {
        Self::Pos(value)
    }
}

impl From<Not<Prop>> for Literal {
    fn from(value: Not<Prop>) -> Self {
        Self::Neg(value.formula)
    }
}

impl From<Literal> for Formula {
    fn from(value: Literal) -> Self {
        match value {
            Literal::Pos(this) => this.into(),
            Literal::Neg(this) => Self::not(this.into()),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&Formula::from(self.clone()), f)
    }
}

/// Represents a collection of [`Literal`]s.
///
/// **Note:**
/// The interpretation of a clause depends on its syntactic context.
/// A [`Cnf`] clause is a disjunction of literals whereas a [`Dnf`] clause is a
/// conjunction of literals.
///
/// [`Cnf`]: crate::transform::Cnf
/// [`Dnf`]: crate::transform::Dnf
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Default, Debug)]
pub struct Clause(BTreeSet<Literal>);

impl Clause {
    /// Returns the literals of the receiver clause.
    pub fn literals(&self) -> &BTreeSet<Literal> {
        &self.0
    }

    /// Consumes the receiver and returns its underlying set of [`Literal`]s.
    pub fn into_literals(self) -> BTreeSet<Literal> {
        self.0
    }

    /// Returns a clause containing all literals in the receiver and `other`.
    pub fn union(&self, other: &Self) -> Self {
        self.0.union(&other.0).cloned().into()
    }

    /// Returns true if the receiver contains a literal and its complement.
    pub fn is_complementary(&self) -> bool {
        self.0
            .iter()
            .filter(|l| l.is_positive())
            .any(|l| self.0.contains(&l.complement()))
    }
}

impl Deref for Clause {
    type Target = BTreeSet<Literal>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Literal> for Clause {
    fn from(value: Literal) -> Self {
        vec![value].into_iter().into()
    }
}

impl<I> From<I> for Clause
where
    I: IntoIterator<Item = Literal>,
{
    fn from(value: I) -> Self {
        Self(value.into_iter().collect())
    }
}

/// Represents a set of [`Clause`]s.
///
/// **Note:**
/// The interpretation of a clause set depends on its syntactic context. A [`Cnf`] is a
/// conjunction of its clauses while a [`Dnf`] is a disjunction of its clauses.
///
/// [`Cnf`]: crate::transform::Cnf
/// [`Dnf`]: crate::transform::Dnf
#[derive(PartialEq, Eq, Hash, Clone, Default, Debug)]
pub struct ClauseSet(BTreeSet<Clause>);

impl From<Clause> for ClauseSet {
    fn from(value: Clause) -> Self {
        vec![value].into_iter().into()
    }
}

impl<I> From<I> for ClauseSet
where
    I: IntoIterator<Item = Clause>,
{
    fn from(value: I) -> Self {
        Self(value.into_iter().collect())
    }
}

impl ClauseSet {
    /// Returns the clauses of the receiver.
    pub fn clauses(&self) -> &BTreeSet<Clause> {
        &self.0
    }

    /// Consumes the receiver and returns its underlying clauses.
    pub fn into_clauses(self) -> BTreeSet<Clause> {
        self.0
    }

    /// Returns a clause set, containing all clauses in the receiver and `other`.
    pub fn union(&self, other: &Self) -> Self {
        self.0.union(&other.0).cloned().into()
    }

    /// Returns a clause set, containing the union of every clause of the receiver with every
    /// clause of `other`.
    pub fn product(&self, other: &Self) -> Self {
        self.0
            .iter()
            .cartesian_product(other.0.iter())
            .map(|(left, right)| left.union(right))
            .into()
    }

    /// Returns a new clause set obtained by removing complementary clauses of the receiver
    /// and clauses that are supersets of other clauses.
    pub fn simplify(&self) -> Self {
        let clauses = self.iter().filter(|c| !c.is_complementary()).collect_vec();
        clauses
            .iter()
            .filter(|c1| !clauses.iter().any(|c2| c1 != &c2 && c2.is_subset(c1)))
            .map(|c| (*c).clone())
            .collect_vec()
            .into()
    }
}

impl Deref for ClauseSet {
    type Target = BTreeSet<Clause>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prop;

    fn pos(name: &str) -> Literal {
        Literal::Pos(Prop::new(name).expect("invalid propositional symbol"))
    }

    fn neg(name: &str) -> Literal {
        Literal::Neg(Prop::new(name).expect("invalid propositional symbol"))
    }

    #[test]
    fn test_literal() {
        assert_eq!(&prop!(p), pos("p").prop());
        assert_eq!(neg("p"), pos("p").complement());
        assert_eq!(pos("p"), neg("p").complement());
        assert!(pos("p").is_positive());
        assert!(!neg("p").is_positive());
        assert_eq!(neg("p"), Literal::from(Not::new(prop!(p))));
        assert_eq!("¬p", neg("p").to_string());
        assert_eq!("q", pos("q").to_string());
    }

    #[test]
    fn test_clause() {
        let clause = Clause::from(vec![pos("q"), neg("p"), pos("q")]);
        assert_eq!(2, clause.len());
        assert!(!clause.is_complementary());
        assert!(clause.union(&Clause::from(pos("p"))).is_complementary());
        assert!(!Clause::default().is_complementary());
    }

    #[test]
    fn test_product() {
        let left = ClauseSet::from(vec![Clause::from(pos("p")), Clause::from(pos("q"))]);
        let right = ClauseSet::from(vec![Clause::from(pos("r")), Clause::from(neg("p"))]);
        let product = left.product(&right);
        assert_eq!(
            ClauseSet::from(vec![
                Clause::from(vec![pos("p"), pos("r")]),
                Clause::from(vec![pos("p"), neg("p")]),
                Clause::from(vec![pos("q"), pos("r")]),
                Clause::from(vec![pos("q"), neg("p")]),
            ]),
            product
        );
        assert!(left.product(&ClauseSet::default()).is_empty());
        assert_eq!(
            left,
            left.product(&ClauseSet::from(Clause::default()))
        );
    }

    #[test]
    fn test_simplify() {
        let clauses = ClauseSet::from(vec![
            Clause::from(vec![pos("p"), neg("p")]),
            Clause::from(vec![pos("q"), pos("r")]),
            Clause::from(vec![pos("q")]),
            Clause::from(vec![neg("s"), pos("t")]),
        ]);
        assert_eq!(
            ClauseSet::from(vec![
                Clause::from(vec![pos("q")]),
                Clause::from(vec![neg("s"), pos("t")]),
            ]),
            clauses.simplify()
        );

        let with_empty = ClauseSet::from(vec![Clause::default(), Clause::from(pos("p"))]);
        assert_eq!(ClauseSet::from(Clause::default()), with_empty.simplify());
    }
}
