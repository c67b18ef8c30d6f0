/*! Defines the abstract syntax tree of propositional formulae. */
use super::{And, Connective, Iff, Implies, Not, Or, Prop};
use itertools::Itertools;
use std::{collections::BTreeSet, convert::TryFrom, fmt};

/// Is an abstract syntax tree (AST) for well-formed propositional formulae.
///
/// A formula is a finite tree: it can only be built from already built subformulae, and every
/// subformula is owned by exactly one parent. Formulae are never mutated; transformations
/// return new trees.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Formula {
    /// Is logical top (⊤) or truth.
    Top,

    /// Is logical bottom (⟘) or falsehood.
    Bottom,

    /// Is an atomic formula, wrapping a propositional symbol.
    Atom(Prop),

    /// Is the negation of a formula, wrapping a [`Not`].
    Not(Box<Not<Formula>>),

    /// Is a conjunction of two formulae, wrapping an [`And`].
    And(Box<And<Formula>>),

    /// Is a disjunction of two formulae, wrapping an [`Or`].
    Or(Box<Or<Formula>>),

    /// Is an implication between two formulae, wrapping an [`Implies`].
    Implies(Box<Implies<Formula>>),

    /// Is a bi-implication between two formulae, wrapping an [`Iff`].
    Iff(Box<Iff<Formula>>),
}

impl From<Prop> for Formula {
    fn from(value: Prop) -> Self {
        Self::Atom(value)
    }
}

impl TryFrom<&str> for Formula {
    type Error = super::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Prop::new(value).map(Self::Atom)
    }
}

impl From<Not<Formula>> for Formula {
    fn from(value: Not<Formula>) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<And<Formula>> for Formula {
    fn from(value: And<Formula>) -> Self {
        Self::And(Box::new(value))
    }
}

impl From<Or<Formula>> for Formula {
    fn from(value: Or<Formula>) -> Self {
        Self::Or(Box::new(value))
    }
}

impl From<Implies<Formula>> for Formula {
    fn from(value: Implies<Formula>) -> Self {
        Self::Implies(Box::new(value))
    }
}

impl From<Iff<Formula>> for Formula {
    fn from(value: Iff<Formula>) -> Self {
        Self::Iff(Box::new(value))
    }
}

impl Formula {
    /// Returns an atomic formula over the propositional symbol `prop`.
    #[inline(always)]
    pub fn atom(prop: Prop) -> Self {
        Self::Atom(prop)
    }

    /// Returns the negation of `formula`.
    #[allow(clippy::should_implement_trait)]
    // Disallow `formula.not()` intentionally:
    #[inline(always)]
    pub fn not(formula: Self) -> Self {
        Not { formula }.into()
    }

    /// Returns a conjunction of `self` and `other`.
    #[inline(always)]
    pub fn and(self, other: Self) -> Self {
        And {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns a disjunction of `self` and `other`.
    #[inline(always)]
    pub fn or(self, other: Self) -> Self {
        Or {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns an implication between `self` and `other`.
    #[inline(always)]
    pub fn implies(self, other: Self) -> Self {
        Implies {
            premise: self,
            consequence: other,
        }
        .into()
    }

    /// Returns a bi-implication between `self` and `other`.
    #[inline(always)]
    pub fn iff(self, other: Self) -> Self {
        Iff {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns the propositional symbols of the receiver, sorted by name.
    ///
    /// **Note**: Each symbol appears only once even if it occurs at multiple positions of
    /// the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// # use wff::syntax::{Formula, Prop};
    /// let formula: Formula = "(q -> p) & ~(p | r)".parse().unwrap();
    /// let atoms: Vec<&str> = formula.atoms().into_iter().map(Prop::name).collect();
    ///
    /// assert_eq!(vec!["p", "q", "r"], atoms);
    /// ```
    pub fn atoms(&self) -> Vec<&Prop> {
        let mut atoms = Vec::new();
        self.collect_atoms(&mut atoms);
        atoms.into_iter().sorted().dedup().collect()
    }

    fn collect_atoms<'a>(&'a self, atoms: &mut Vec<&'a Prop>) {
        match self {
            Self::Top | Self::Bottom => {}
            Self::Atom(this) => atoms.push(this),
            Self::Not(this) => this.formula.collect_atoms(atoms),
            Self::And(this) => {
                this.left.collect_atoms(atoms);
                this.right.collect_atoms(atoms);
            }
            Self::Or(this) => {
                this.left.collect_atoms(atoms);
                this.right.collect_atoms(atoms);
            }
            Self::Implies(this) => {
                this.premise.collect_atoms(atoms);
                this.consequence.collect_atoms(atoms);
            }
            Self::Iff(this) => {
                this.left.collect_atoms(atoms);
                this.right.collect_atoms(atoms);
            }
        }
    }

    /// Returns the set of connectives that occur in the receiver.
    pub fn connectives(&self) -> BTreeSet<Connective> {
        self.nodes().filter_map(|(connective, _)| connective).collect()
    }

    /// Returns the number of nodes in the syntax tree of the receiver.
    pub fn size(&self) -> usize {
        self.nodes().count()
    }

    /// Returns the height of the syntax tree of the receiver; constants and atoms have
    /// depth one.
    pub fn depth(&self) -> usize {
        match self {
            Self::Top | Self::Bottom | Self::Atom(_) => 1,
            Self::Not(this) => 1 + this.formula.depth(),
            Self::And(this) => 1 + this.left.depth().max(this.right.depth()),
            Self::Or(this) => 1 + this.left.depth().max(this.right.depth()),
            Self::Implies(this) => 1 + this.premise.depth().max(this.consequence.depth()),
            Self::Iff(this) => 1 + this.left.depth().max(this.right.depth()),
        }
    }

    /// Returns the principal connective of the receiver (if any) together with its
    /// immediate subformulae.
    pub fn split(&self) -> (Option<Connective>, Vec<&Formula>) {
        match self {
            Self::Top | Self::Bottom | Self::Atom(_) => (None, vec![]),
            Self::Not(this) => (Some(Connective::Not), vec![&this.formula]),
            Self::And(this) => (Some(Connective::And), vec![&this.left, &this.right]),
            Self::Or(this) => (Some(Connective::Or), vec![&this.left, &this.right]),
            Self::Implies(this) => (
                Some(Connective::Implies),
                vec![&this.premise, &this.consequence],
            ),
            Self::Iff(this) => (Some(Connective::Iff), vec![&this.left, &this.right]),
        }
    }

    // Visits the nodes of the receiver in pre-order.
    fn nodes(&self) -> impl Iterator<Item = (Option<Connective>, Vec<&Formula>)> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            let (connective, children) = node.split();
            stack.extend(children.iter().rev().copied());
            Some((connective, children))
        })
    }
}

// Spellings used for rendering formulae as text.
struct Notation {
    top: &'static str,
    bottom: &'static str,
    not: &'static str,
    and: &'static str,
    or: &'static str,
    implies: &'static str,
    iff: &'static str,
}

const UNICODE: Notation = Notation {
    top: "⊤",
    bottom: "⟘",
    not: "¬",
    and: "∧",
    or: "∨",
    implies: "→",
    iff: "⇔",
};

const ASCII: Notation = Notation {
    top: "true",
    bottom: "false",
    not: "~",
    and: "&",
    or: "|",
    implies: "->",
    iff: "<=>",
};

impl Notation {
    // Writes `formula` with every binary node wrapped in parentheses.
    fn write(&self, formula: &Formula, f: &mut fmt::Formatter) -> fmt::Result {
        match formula {
            Formula::Top => write!(f, "{}", self.top),
            Formula::Bottom => write!(f, "{}", self.bottom),
            Formula::Atom(this) => write!(f, "{}", this),
            Formula::Not(this) => {
                write!(f, "{}", self.not)?;
                self.write(&this.formula, f)
            }
            Formula::And(this) => self.write_binary(&this.left, self.and, &this.right, f),
            Formula::Or(this) => self.write_binary(&this.left, self.or, &this.right, f),
            Formula::Implies(this) => {
                self.write_binary(&this.premise, self.implies, &this.consequence, f)
            }
            Formula::Iff(this) => self.write_binary(&this.left, self.iff, &this.right, f),
        }
    }

    fn write_binary(
        &self,
        left: &Formula,
        op: &str,
        right: &Formula,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "(")?;
        self.write(left, f)?;
        write!(f, " {} ", op)?;
        self.write(right, f)?;
        write!(f, ")")
    }
}

/// Renders the receiver in its canonical, fully parenthesized form with Unicode connectives.
/// The output is accepted by the parser and parses back to an equal formula.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        UNICODE.write(self, f)
    }
}

/// Renders the receiver fully parenthesized with ASCII connectives.
impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        ASCII.write(self, f)
    }
}
