/*! Provides a set of tools for parsing, evaluating, analyzing and transforming well-formed
formulae (wffs) of propositional logic.

**Example**:
```rust
use wff::{are_equivalent, is_tautology, parse, truth_table};

let formula = parse("p implies q").unwrap();
assert_eq!("(p → q)", formula.to_string());

assert!(are_equivalent(&formula, &parse("~p | q").unwrap()));
assert!(is_tautology(&parse("p | ~p").unwrap()));

let rows: Vec<bool> = truth_table(&formula).map(|(_, value)| value).collect();
assert_eq!(vec![true, true, false, true], rows);
```
*/
pub mod analysis;
pub mod parser;
pub mod semantics;
pub mod syntax;
#[cfg(test)]
pub mod test_macros;
pub mod trace;
pub mod transform;

pub use analysis::{
    are_equivalent, distinguishing_assignment, find_counterexample, find_model, is_contingent,
    is_contradiction, is_satisfiable, is_tautology, output_column, truth_table,
};
pub use parser::{parse, tokenize};
pub use semantics::{all_assignments, evaluate};
pub use transform::{simplify, to_cnf, to_dnf, to_nnf};
