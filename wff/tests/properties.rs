use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;
use wff::{
    all_assignments, are_equivalent, evaluate, find_counterexample, find_model, is_contradiction,
    is_satisfiable, is_tautology, output_column, parse, simplify,
    syntax::{Connective, Formula},
    to_cnf, to_dnf, to_nnf, truth_table,
};

const ATOMS: [&str; 5] = ["p", "q", "r", "s", "rain_1"];

fn random_formula(rng: &mut StdRng, depth: usize) -> Formula {
    if depth == 0 || rng.gen_bool(0.2) {
        return match rng.gen_range(0..12) {
            0 => Formula::Top,
            1 => Formula::Bottom,
            _ => Formula::atom(ATOMS[rng.gen_range(0..ATOMS.len())].parse().unwrap()),
        };
    }
    match rng.gen_range(0..5) {
        0 => Formula::not(random_formula(rng, depth - 1)),
        1 => random_formula(rng, depth - 1).and(random_formula(rng, depth - 1)),
        2 => random_formula(rng, depth - 1).or(random_formula(rng, depth - 1)),
        3 => random_formula(rng, depth - 1).implies(random_formula(rng, depth - 1)),
        _ => random_formula(rng, depth - 1).iff(random_formula(rng, depth - 1)),
    }
}

fn formulas(seed: u64, count: usize, depth: usize) -> Vec<Formula> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| random_formula(&mut rng, depth)).collect()
}

fn is_literal(formula: &Formula) -> bool {
    match formula {
        Formula::Atom(_) => true,
        Formula::Not(this) => matches!(this.formula(), Formula::Atom(_)),
        _ => false,
    }
}

// Returns true if `formula` is a tree of `outer` over a tree of `inner` over literals.
fn is_normal(formula: &Formula, outer: Connective, inner: Connective) -> bool {
    fn is_clause(formula: &Formula, inner: Connective) -> bool {
        match formula.split() {
            (Some(c), operands) if c == inner => {
                operands.into_iter().all(|f| is_clause(f, inner))
            }
            _ => is_literal(formula),
        }
    }
    if let Formula::Top | Formula::Bottom = formula {
        return true;
    }
    match formula.split() {
        (Some(c), operands) if c == outer => operands
            .into_iter()
            .all(|f| is_normal_body(f, outer, inner)),
        _ => is_clause(formula, inner),
    }
}

fn is_normal_body(formula: &Formula, outer: Connective, inner: Connective) -> bool {
    match formula {
        Formula::Top | Formula::Bottom => false,
        _ => is_normal(formula, outer, inner),
    }
}

#[test]
fn round_trip() {
    for formula in formulas(7, 200, 6) {
        let text = formula.to_string();
        assert_eq!(formula, parse(&text).unwrap(), "{}", text);
        let ascii = format!("{:?}", formula);
        assert_eq!(formula, parse(&ascii).unwrap(), "{}", ascii);
    }
}

#[test]
fn round_trip_from_text() {
    let sources = [
        "p AND q",
        "p IMPLIES q IMPLIES r",
        "~~p | q & r <=> s -> p",
        "not (p or q) iff true",
        "((p))",
        "p ∧ ¬q → r ⇔ ⊤",
    ];
    for source in sources.iter() {
        let formula = parse(source).unwrap();
        assert_eq!(formula, parse(&formula.to_string()).unwrap(), "{}", source);
    }
}

#[test]
fn simplify_is_idempotent() {
    for formula in formulas(11, 200, 6) {
        let once = simplify(&formula);
        assert_eq!(once, simplify(&once), "{}", formula);
    }
}

#[test]
fn nnf_is_idempotent() {
    for formula in formulas(13, 200, 6) {
        let once = to_nnf(&formula);
        assert_eq!(once, to_nnf(&once), "{}", formula);
    }
}

#[test]
fn transformations_preserve_semantics() {
    for formula in formulas(17, 100, 5) {
        let simplified = simplify(&formula);
        let nnf = to_nnf(&formula);
        let cnf = to_cnf(&formula);
        let dnf = to_dnf(&formula);
        for assignment in all_assignments(&formula) {
            let expected = evaluate(&formula, &assignment).unwrap();
            assert_eq!(expected, evaluate(&simplified, &assignment).unwrap());
            assert_eq!(expected, evaluate(&nnf, &assignment).unwrap());
            assert_eq!(expected, evaluate(&cnf, &assignment).unwrap());
            assert_eq!(expected, evaluate(&dnf, &assignment).unwrap());
        }
        assert!(are_equivalent(&formula, &cnf));
        assert!(are_equivalent(&dnf, &formula));
    }
}

#[test]
fn normal_forms_have_their_shape() {
    for formula in formulas(19, 100, 5) {
        let nnf = to_nnf(&formula);
        assert!(nnf
            .connectives()
            .iter()
            .all(|c| matches!(c, Connective::Not | Connective::And | Connective::Or)));

        let cnf = to_cnf(&formula);
        assert!(
            is_normal(&cnf, Connective::And, Connective::Or),
            "{} is not in CNF",
            cnf
        );
        let dnf = to_dnf(&formula);
        assert!(
            is_normal(&dnf, Connective::Or, Connective::And),
            "{} is not in DNF",
            dnf
        );
    }
}

#[test]
fn tautology_law() {
    for formula in formulas(23, 200, 5) {
        assert_eq!(
            is_tautology(&formula),
            is_contradiction(&Formula::not(formula.clone())),
            "{}",
            formula
        );
        assert_eq!(is_satisfiable(&formula), !is_contradiction(&formula));
    }
}

#[test]
fn witnesses_agree_with_queries() {
    for formula in formulas(29, 200, 5) {
        match find_model(&formula) {
            Some(model) => assert_eq!(Ok(true), evaluate(&formula, &model)),
            None => assert!(!is_satisfiable(&formula)),
        }
        match find_counterexample(&formula) {
            Some(counterexample) => assert_eq!(Ok(false), evaluate(&formula, &counterexample)),
            None => assert!(is_tautology(&formula)),
        }
    }
}

#[test]
fn equivalence_is_reflexive_and_symmetric() {
    let left = formulas(31, 60, 4);
    let right = formulas(37, 60, 4);
    for (first, second) in left.iter().zip(right.iter()) {
        assert!(are_equivalent(first, first));
        assert_eq!(are_equivalent(first, second), are_equivalent(second, first));
    }
}

#[test]
fn enumeration_size() {
    for formula in formulas(41, 100, 6) {
        let n = formula.atoms().len();
        let assignments: Vec<_> = all_assignments(&formula).collect();
        assert_eq!(1 << n, assignments.len());
        let distinct: HashSet<_> = assignments.iter().collect();
        assert_eq!(assignments.len(), distinct.len());
        assert!(assignments.iter().all(|a| a.is_total_over(&formula)));
    }
}

#[test]
fn truth_table_matches_evaluation() {
    for formula in formulas(43, 100, 5) {
        let column = output_column(&formula);
        let rows: Vec<_> = truth_table(&formula).collect();
        assert_eq!(column.len(), rows.len());
        for ((assignment, value), expected) in rows.iter().zip(column.iter()) {
            assert_eq!(*expected, *value);
            assert_eq!(Ok(*value), evaluate(&formula, assignment));
        }
    }
}
