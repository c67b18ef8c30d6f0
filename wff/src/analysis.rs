/*! Implements semantic queries over formulae.

Every query is answered by walking the assignments of [`Assignments`] in their canonical order
and evaluating the formula under each, stopping as soon as the answer is known. The cost is
exponential in the number of distinct atoms.

**Example**:
```rust
use wff::{analysis::*, parse};

let excluded_middle = parse("p | ~p").unwrap();
let implication = parse("p -> q").unwrap();

assert!(is_tautology(&excluded_middle));
assert!(is_contingent(&implication));
assert!(are_equivalent(&implication, &parse("~p | q").unwrap()));
assert_eq!(vec![true, true, false, true], output_column(&implication));
```
*/
use crate::{
    semantics::{Assignment, Assignments},
    syntax::{Formula, Prop},
    trace,
};
use itertools::Itertools;
use tracing::{debug, span, Level};

const SATISFIABLE: &str = "satisfiable";
const TAUTOLOGY: &str = "tautology";
const CONTRADICTION: &str = "contradiction";
const CONTINGENT: &str = "contingent";
const EQUIVALENT: &str = "equivalent";
const MODEL: &str = "model";
const COUNTEREXAMPLE: &str = "counterexample";

// Assignments produced by the enumerator are total over the formula, so evaluation cannot fail.
#[inline(always)]
fn holds(formula: &Formula, assignment: &Assignment) -> bool {
    matches!(formula.evaluate(assignment), Ok(true))
}

/// Is a lazy iterator over the rows of the truth table of a formula.
///
/// Each row pairs an assignment with the value of the formula under it. Rows follow the order
/// of [`Assignments`] over the atoms of the formula.
#[derive(Clone, Debug)]
pub struct TruthTable<'f> {
    formula: &'f Formula,
    assignments: Assignments,
}

impl<'f> TruthTable<'f> {
    /// Returns the truth table of `formula`.
    pub fn new(formula: &'f Formula) -> Self {
        Self {
            formula,
            assignments: formula.assignments(),
        }
    }

    /// Returns the atoms of the table in column order.
    pub fn atoms(&self) -> &[Prop] {
        self.assignments.atoms()
    }

    /// Returns the formula of the table.
    pub fn formula(&self) -> &Formula {
        self.formula
    }
}

impl<'f> Iterator for TruthTable<'f> {
    type Item = (Assignment, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let assignment = self.assignments.next()?;
        let value = holds(self.formula, &assignment);
        Some((assignment, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.assignments.size_hint()
    }
}

/// Returns the first assignment in enumeration order under which `formula` evaluates to
/// `target`.
fn search(query: &'static str, formula: &Formula, target: bool) -> Option<Assignment> {
    let mut table = TruthTable::new(formula);
    let span = span!(
        Level::TRACE,
        trace::ANALYZE,
        query = query,
        atoms = table.atoms().len() as u64
    );
    let _enter = span.enter();

    let witness = table
        .find(|(_, value)| *value == target)
        .map(|(assignment, _)| assignment);
    if let Some(assignment) = &witness {
        tracing::trace!(
            event = trace::WITNESS,
            query = query,
            assignment = %assignment,
        );
    }
    witness
}

fn verdict(query: &'static str, formula: &Formula, result: bool) -> bool {
    debug!(
        event = trace::VERDICT,
        query = query,
        formula = %formula,
        result = result,
    );
    result
}

/// Returns the truth table of `formula` (see [`TruthTable`]).
pub fn truth_table(formula: &Formula) -> TruthTable<'_> {
    TruthTable::new(formula)
}

/// Returns the values of `formula` in truth table order.
pub fn output_column(formula: &Formula) -> Vec<bool> {
    truth_table(formula).map(|(_, value)| value).collect()
}

/// Returns the first assignment, in enumeration order, that satisfies `formula`.
pub fn find_model(formula: &Formula) -> Option<Assignment> {
    search(MODEL, formula, true)
}

/// Returns the first assignment, in enumeration order, that falsifies `formula`.
pub fn find_counterexample(formula: &Formula) -> Option<Assignment> {
    search(COUNTEREXAMPLE, formula, false)
}

/// Returns true if `formula` is true under every assignment.
pub fn is_tautology(formula: &Formula) -> bool {
    let result = search(TAUTOLOGY, formula, false).is_none();
    verdict(TAUTOLOGY, formula, result)
}

/// Returns true if `formula` is true under some assignment. The search stops at the first
/// satisfying assignment.
pub fn is_satisfiable(formula: &Formula) -> bool {
    let result = search(SATISFIABLE, formula, true).is_some();
    verdict(SATISFIABLE, formula, result)
}

/// Returns true if `formula` is false under every assignment.
pub fn is_contradiction(formula: &Formula) -> bool {
    let result = search(CONTRADICTION, formula, true).is_none();
    verdict(CONTRADICTION, formula, result)
}

/// Returns true if `formula` is true under some assignments and false under others.
pub fn is_contingent(formula: &Formula) -> bool {
    let mut seen = [false, false];
    for (_, value) in truth_table(formula) {
        seen[value as usize] = true;
        if seen[0] && seen[1] {
            break;
        }
    }
    verdict(CONTINGENT, formula, seen[0] && seen[1])
}

/// Returns the first assignment over the atoms of both formulae under which `first` and
/// `second` have different values.
pub fn distinguishing_assignment(first: &Formula, second: &Formula) -> Option<Assignment> {
    let atoms = first
        .atoms()
        .into_iter()
        .chain(second.atoms())
        .cloned()
        .collect_vec();
    let mut assignments = Assignments::new(atoms);
    let span = span!(
        Level::TRACE,
        trace::ANALYZE,
        query = EQUIVALENT,
        atoms = assignments.atoms().len() as u64
    );
    let _enter = span.enter();

    let witness =
        assignments.find(|assignment| holds(first, assignment) != holds(second, assignment));
    if let Some(assignment) = &witness {
        tracing::trace!(
            event = trace::WITNESS,
            query = EQUIVALENT,
            assignment = %assignment,
        );
    }
    witness
}

/// Returns true if `first` and `second` have the same value under every assignment over the
/// union of their atoms.
pub fn are_equivalent(first: &Formula, second: &Formula) -> bool {
    let result = distinguishing_assignment(first, second).is_none();
    debug!(
        event = trace::VERDICT,
        query = EQUIVALENT,
        formula = %first,
        other = %second,
        result = result,
    );
    result
}
