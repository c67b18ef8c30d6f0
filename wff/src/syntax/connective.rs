/*! Introduces the connectives as ingredients for constructing formulae.

Each connective wraps its operands by value; a formula type (such as [`Formula`] or
[`Nnf`]) boxes the connective to build a finite tree, so every subformula has exactly one
parent.

[`Formula`]: crate::syntax::Formula
[`Nnf`]: crate::transform::Nnf
*/
use super::Formula;

/// Represents the negation of a formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Not<F = Formula> {
    pub(crate) formula: F,
}

impl<F> Not<F> {
    /// Wraps `formula` in a new instance of [`Not`].
    pub fn new(formula: F) -> Self {
        Self { formula }
    }

    /// Returns the formula wrapped in the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &F {
        &self.formula
    }
}

/// Represents the conjunction of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct And<F = Formula> {
    pub(crate) left: F,
    pub(crate) right: F,
}

impl<F> And<F> {
    /// Returns the conjunction of `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

/// Represents the disjunction of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Or<F = Formula> {
    pub(crate) left: F,
    pub(crate) right: F,
}

impl<F> Or<F> {
    /// Returns the disjunction of `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

/// Represents an implication between two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Implies<F = Formula> {
    pub(crate) premise: F,
    pub(crate) consequence: F,
}

impl<F> Implies<F> {
    /// Returns an implication with a `premise` and a `consequence`.
    pub fn new(premise: F, consequence: F) -> Self {
        Self {
            premise,
            consequence,
        }
    }

    /// Returns the premise (antecedent) of the receiver.
    #[inline(always)]
    pub fn premise(&self) -> &F {
        &self.premise
    }

    /// Returns the consequence (consequent) of the receiver.
    #[inline(always)]
    pub fn consequence(&self) -> &F {
        &self.consequence
    }
}

/// Represents a bi-implication between two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Iff<F = Formula> {
    pub(crate) left: F,
    pub(crate) right: F,
}

impl<F> Iff<F> {
    /// Returns a bi-implication between `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}
