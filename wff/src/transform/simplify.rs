/*! Implements a basic syntactic simplification for formulae. */
use crate::syntax::Formula::{self, *};

impl Formula {
    /// Applies a number of syntactic transformations to simplify the receiver formula:
    /// double negations are eliminated and the constants `⊤` and `⟘` are folded away, unless
    /// the whole formula reduces to one of them.
    ///
    /// The result is equivalent to the receiver and is a fixed point of `simplify`.
    ///
    /// **Example**:
    /// ```rust
    /// # use wff::syntax::Formula;
    ///
    /// let formula: Formula = "not (not p)".parse().unwrap();
    /// assert_eq!("p", formula.simplify().to_string());
    ///
    /// let formula: Formula = "(p and true) | (q or false)".parse().unwrap();
    /// assert_eq!("(p ∨ q)", formula.simplify().to_string());
    /// ```
    pub fn simplify(&self) -> Formula {
        match self {
            Top | Bottom | Atom(_) => self.clone(),
            Not(this) => {
                let formula = this.formula.simplify();
                match formula {
                    Top => Bottom,
                    Bottom => Top,
                    Not(this) => this.formula,
                    _ => Formula::not(formula),
                }
            }
            And(this) => {
                let left = this.left.simplify();
                let right = this.right.simplify();
                if let Bottom = left {
                    Bottom
                } else if let Bottom = right {
                    Bottom
                } else if let Top = left {
                    right
                } else if let Top = right {
                    left
                } else {
                    left.and(right)
                }
            }
            Or(this) => {
                let left = this.left.simplify();
                let right = this.right.simplify();
                if let Top = left {
                    Top
                } else if let Top = right {
                    Top
                } else if let Bottom = left {
                    right
                } else if let Bottom = right {
                    left
                } else {
                    left.or(right)
                }
            }
            Implies(this) => {
                let premise = this.premise.simplify();
                let consequence = this.consequence.simplify();
                if let Bottom = premise {
                    Top
                } else if let Top = consequence {
                    Top
                } else if let Top = premise {
                    consequence
                } else if let Bottom = consequence {
                    Formula::not(premise).simplify()
                } else {
                    premise.implies(consequence)
                }
            }
            Iff(this) => {
                let left = this.left.simplify();
                let right = this.right.simplify();
                if let Top = left {
                    right
                } else if let Top = right {
                    left
                } else if let Bottom = left {
                    Formula::not(right).simplify()
                } else if let Bottom = right {
                    Formula::not(left).simplify()
                } else {
                    left.iff(right)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_debug_string;

    fn parse(source: &str) -> Formula {
        source.parse().unwrap()
    }

    #[test]
    fn test_simplify() {
        {
            let formula = parse("~true");
            assert_debug_string!("false", formula.simplify());
        }
        {
            let formula = parse("~false");
            assert_debug_string!("true", formula.simplify());
        }
        {
            let formula = parse("~p");
            assert_debug_string!("~p", formula.simplify());
        }
        {
            let formula = parse("~~p");
            assert_debug_string!("p", formula.simplify());
        }
        {
            let formula = parse("~~~p");
            assert_debug_string!("~p", formula.simplify());
        }
        {
            let formula = parse("~~~~(p & ~~q)");
            assert_debug_string!("(p & q)", formula.simplify());
        }
        {
            let formula = parse("~~~true");
            assert_debug_string!("false", formula.simplify());
        }
        {
            let formula = parse("true & true");
            assert_debug_string!("true", formula.simplify());
        }
        {
            let formula = parse("false & p");
            assert_debug_string!("false", formula.simplify());
        }
        {
            let formula = parse("p & false");
            assert_debug_string!("false", formula.simplify());
        }
        {
            let formula = parse("true & p");
            assert_debug_string!("p", formula.simplify());
        }
        {
            let formula = parse("p & true");
            assert_debug_string!("p", formula.simplify());
        }
        {
            let formula = parse("p & q");
            assert_debug_string!("(p & q)", formula.simplify());
        }
        {
            let formula = parse("true | p");
            assert_debug_string!("true", formula.simplify());
        }
        {
            let formula = parse("p | true");
            assert_debug_string!("true", formula.simplify());
        }
        {
            let formula = parse("false | p");
            assert_debug_string!("p", formula.simplify());
        }
        {
            let formula = parse("p | false");
            assert_debug_string!("p", formula.simplify());
        }
        {
            let formula = parse("false | false");
            assert_debug_string!("false", formula.simplify());
        }
        {
            let formula = parse("false -> p");
            assert_debug_string!("true", formula.simplify());
        }
        {
            let formula = parse("p -> true");
            assert_debug_string!("true", formula.simplify());
        }
        {
            let formula = parse("true -> p");
            assert_debug_string!("p", formula.simplify());
        }
        {
            let formula = parse("p -> false");
            assert_debug_string!("~p", formula.simplify());
        }
        {
            let formula = parse("~p -> false");
            assert_debug_string!("p", formula.simplify());
        }
        {
            let formula = parse("p -> q");
            assert_debug_string!("(p -> q)", formula.simplify());
        }
        {
            let formula = parse("true <=> p");
            assert_debug_string!("p", formula.simplify());
        }
        {
            let formula = parse("p <=> true");
            assert_debug_string!("p", formula.simplify());
        }
        {
            let formula = parse("false <=> p");
            assert_debug_string!("~p", formula.simplify());
        }
        {
            let formula = parse("~p <=> false");
            assert_debug_string!("p", formula.simplify());
        }
        {
            let formula = parse("false <=> false");
            assert_debug_string!("true", formula.simplify());
        }
        {
            let formula = parse("p <=> q");
            assert_debug_string!("(p <=> q)", formula.simplify());
        }
        {
            let formula = parse("~(~~p | (q & true)) -> ~(r <=> false)");
            assert_debug_string!("(~(p | q) -> r)", formula.simplify());
        }
    }

    #[test]
    fn simplify_is_idempotent() {
        for source in &[
            "~~(p & ~~~q)",
            "(p -> false) <=> (true & ~~r)",
            "~(false <=> ~p) | (q -> ~~true)",
            "~~~~~~p",
        ] {
            let once = parse(source).simplify();
            assert_eq!(once, once.simplify(), "{}", source);
        }
    }

    #[test]
    fn simplify_does_not_mutate() {
        let formula = parse("~~p & true");
        let copy = formula.clone();
        let _ = formula.simplify();
        assert_eq!(copy, formula);
    }
}
