/*! Defines formulae in Negation Normal Form (NNF) and implements an algorithm for
transforming a [`Formula`] to an [`Nnf`].

[`Formula`]: crate::syntax::Formula
*/
use super::Literal;
use crate::syntax::{And, Formula, Or, Prop};

/// Represents a formula in Negation Normal Form (NNF).
///
/// **Hint**: An NNF is a formula where negation is applied only to propositional symbols and
/// the only binary connectives are conjunction and disjunction.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Nnf {
    /// Is the logical top (⊤) or truth.
    Top,

    /// Is the logical bottom (⟘) or falsehood.
    Bottom,

    /// Is a literal, wrapping a [`Literal`].
    Literal(Literal),

    /// Is a conjunction of two formulae, wrapping an [`And`].
    And(Box<And<Nnf>>),

    /// Is a disjunction of two formulae, wrapping an [`Or`].
    Or(Box<Or<Nnf>>),
}

impl From<Prop> for Nnf {
    fn from(value: Prop) -> Self {
        Self::Literal(value.into())
    }
}

impl From<Literal> for Nnf {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<And<Nnf>> for Nnf {
    fn from(value: And<Nnf>) -> Self {
        Self::And(value.into())
    }
}

impl From<Or<Nnf>> for Nnf {
    fn from(value: Or<Nnf>) -> Self {
        Self::Or(value.into())
    }
}

/// Is the trait of types that can be transformed to [`Nnf`].
pub trait ToNnf {
    /// Transforms `self` to a Negation Normal Form (NNF).
    ///
    /// **Example**:
    /// ```rust
    /// # use wff::syntax::Formula;
    /// use wff::transform::ToNnf;
    ///
    /// let formula: Formula = "not (p iff q)".parse().unwrap();
    /// let nnf = formula.nnf();
    ///
    /// assert_eq!("((p ∧ ¬q) ∨ (¬p ∧ q))", nnf.to_string());
    /// ```
    fn nnf(&self) -> Nnf;
}

impl ToNnf for Formula {
    fn nnf(&self) -> Nnf {
        nnf(self)
    }
}

impl Nnf {
    #[inline(always)]
    fn neg(prop: Prop) -> Self {
        Literal::Neg(prop).into()
    }

    #[inline(always)]
    fn and(self, formula: Self) -> Self {
        And::new(self, formula).into()
    }

    #[inline(always)]
    fn or(self, formula: Self) -> Self {
        Or::new(self, formula).into()
    }
}

impl std::fmt::Display for Nnf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&Formula::from(self), f)
    }
}

impl From<Nnf> for Formula {
    fn from(value: Nnf) -> Self {
        match value {
            Nnf::Top => Self::Top,
            Nnf::Bottom => Self::Bottom,
            Nnf::Literal(this) => this.into(),
            Nnf::And(this) => Self::from(this.left).and(this.right.into()),
            Nnf::Or(this) => Self::from(this.left).or(this.right.into()),
        }
    }
}

impl From<&Nnf> for Formula {
    fn from(value: &Nnf) -> Self {
        value.clone().into()
    }
}

// Recursively pushes negation in the formula.
#[inline]
fn push_not(formula: &Formula) -> Nnf {
    match formula {
        Formula::Top => Nnf::Bottom,
        Formula::Bottom => Nnf::Top,
        Formula::Atom(this) => Nnf::neg(this.clone()),
        Formula::Not(this) => nnf(&this.formula),
        Formula::And(this) => push_not(&this.left).or(push_not(&this.right)),
        Formula::Or(this) => push_not(&this.left).and(push_not(&this.right)),
        Formula::Implies(this) => nnf(&this.premise).and(push_not(&this.consequence)),
        Formula::Iff(this) => {
            let left_and_not_right = nnf(&this.left).and(push_not(&this.right));
            let not_left_and_right = push_not(&this.left).and(nnf(&this.right));
            left_and_not_right.or(not_left_and_right)
        }
    }
}

fn nnf(formula: &Formula) -> Nnf {
    match formula {
        Formula::Top => Nnf::Top,
        Formula::Bottom => Nnf::Bottom,
        Formula::Atom(this) => this.clone().into(),
        Formula::Not(this) => push_not(&this.formula),
        Formula::And(this) => nnf(&this.left).and(nnf(&this.right)),
        Formula::Or(this) => nnf(&this.left).or(nnf(&this.right)),
        Formula::Implies(this) => push_not(&this.premise).or(nnf(&this.consequence)),
        Formula::Iff(this) => {
            let left_and_right = nnf(&this.left).and(nnf(&this.right));
            let not_left_and_not_right = push_not(&this.left).and(push_not(&this.right));
            left_and_right.or(not_left_and_not_right)
        }
    }
}
