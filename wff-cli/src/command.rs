use crate::terminal::Stylus;
use crate::{constants::*, trace::JsonLogger, utils::*};
use anyhow::{Context, Error};
use std::{fs, path::PathBuf};
use structopt::StructOpt;
use wff::{
    analysis::{
        distinguishing_assignment, find_counterexample, find_model, is_contradiction,
        is_tautology, truth_table,
    },
    semantics::Assignment,
    syntax::Formula,
    transform::{ToCnf, ToDnf, ToNnf},
};

#[derive(StructOpt)]
struct Source {
    #[structopt(help = "The formula; read from the input file or stdin if missing")]
    formula: Option<String>,
    #[structopt(
        short = "i",
        long = "input",
        parse(from_os_str),
        conflicts_with = "formula",
        help = "Path to the input formula file"
    )]
    input: Option<PathBuf>,
}

impl Source {
    fn read(&self) -> Result<Formula, Error> {
        if let Some(formula) = &self.formula {
            parse_formula(formula)
        } else if let Some(input) = &self.input {
            read_formula_from_file(input)
        } else {
            read_formula_from_stdin()
        }
    }
}

#[derive(StructOpt)]
enum Form {
    #[structopt(about = "Fold constants and remove double negations.")]
    Simplify,
    #[structopt(about = "Negation Normal Form.")]
    Nnf,
    #[structopt(about = "Conjunctive Normal Form.")]
    Cnf,
    #[structopt(about = "Disjunctive Normal Form.")]
    Dnf,
}

impl std::str::FromStr for Form {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_ref() {
            "simplify" => Ok(Form::Simplify),
            "nnf" => Ok(Form::Nnf),
            "cnf" => Ok(Form::Cnf),
            "dnf" => Ok(Form::Dnf),
            _ => Err(format!("invalid normal form '{}'", s)),
        }
    }
}

impl Form {
    fn apply(&self, formula: &Formula) -> Formula {
        match self {
            Form::Simplify => formula.simplify(),
            Form::Nnf => formula.nnf().into(),
            Form::Cnf => formula.cnf().into(),
            Form::Dnf => formula.dnf().into(),
        }
    }
}

#[derive(StructOpt)]
enum ProcessCommand {
    #[structopt(name = "eval", about = "Evaluate the input formula under an assignment")]
    Eval {
        #[structopt(flatten)]
        source: Source,
        #[structopt(
            short = "a",
            long = "assign",
            parse(try_from_str = parse_assignment),
            default_value = "",
            help = "Truth values of the atoms, e.g. p=true,q=0"
        )]
        assign: Assignment,
    },
    #[structopt(name = "table", about = "Print the truth table of the input formula")]
    Table {
        #[structopt(flatten)]
        source: Source,
    },
    #[structopt(
        name = "check",
        about = "Decide whether the input formula is a tautology, a contradiction or contingent"
    )]
    Check {
        #[structopt(flatten)]
        source: Source,
    },
    #[structopt(name = "equiv", about = "Decide whether two formulae are equivalent")]
    Equiv {
        #[structopt(help = "The first formula")]
        left: String,
        #[structopt(help = "The second formula")]
        right: String,
    },
    #[structopt(name = "normalize", about = "Transform the input formula")]
    Normalize {
        #[structopt(flatten)]
        source: Source,
        #[structopt(
            short = "f",
            long = "form",
            default_value = "cnf",
            possible_values = &["simplify", "nnf", "cnf", "dnf"],
            case_insensitive = true
        )]
        form: Form,
    },
}

impl ProcessCommand {
    fn run(self, stylus: &Stylus) -> Result<(), Error> {
        match self {
            ProcessCommand::Eval { source, assign } => {
                let formula = source.read()?;
                print_formula("Formula:    ", &formula, stylus);
                print_assignment("Assignment: ", &assign, stylus);

                let value = formula
                    .evaluate(&assign)
                    .context("cannot evaluate the formula")?;
                stylus.set(STYLE_INFO);
                print!("Value:      ");
                stylus.set(if value { STYLE_TRUE } else { STYLE_FALSE });
                println!("{}", value);
                Ok(())
            }
            ProcessCommand::Table { source } => {
                let formula = source.read()?;
                println!();
                print_truth_table(truth_table(&formula), stylus);
                println!();
                Ok(())
            }
            ProcessCommand::Check { source } => {
                let formula = source.read()?;
                print_formula("Formula:        ", &formula, stylus);

                stylus.set(STYLE_INFO);
                print!("Verdict:        ");
                if is_tautology(&formula) {
                    stylus.set(STYLE_TRUE);
                    println!("tautology");
                } else if is_contradiction(&formula) {
                    stylus.set(STYLE_FALSE);
                    println!("contradiction");
                } else {
                    stylus.set(STYLE_FORMULA);
                    println!("contingent");
                }

                if let Some(model) = find_model(&formula) {
                    print_assignment("Model:          ", &model, stylus);
                }
                if let Some(counterexample) = find_counterexample(&formula) {
                    print_assignment("Counterexample: ", &counterexample, stylus);
                }
                Ok(())
            }
            ProcessCommand::Equiv { left, right } => {
                let left = parse_formula(&left)?;
                let right = parse_formula(&right)?;
                print_formula("Left:     ", &left, stylus);
                print_formula("Right:    ", &right, stylus);

                stylus.set(STYLE_INFO);
                print!("Verdict:  ");
                if let Some(assignment) = distinguishing_assignment(&left, &right) {
                    stylus.set(STYLE_FALSE);
                    println!("not equivalent");
                    print_assignment("Witness:  ", &assignment, stylus);
                } else {
                    stylus.set(STYLE_TRUE);
                    println!("equivalent");
                }
                Ok(())
            }
            ProcessCommand::Normalize { source, form } => {
                let formula = source.read()?;
                print_formula("Formula: ", &formula, stylus);
                print_formula("Result:  ", &form.apply(&formula), stylus);
                Ok(())
            }
        }
    }
}

#[derive(StructOpt)]
#[structopt(
    name = "wff",
    about = "A tool for evaluating, analyzing and normalizing propositional formulae"
)]
#[structopt(setting = structopt::clap::AppSettings::ColoredHelp)]
pub(super) struct Command {
    #[structopt(subcommand)]
    command: ProcessCommand,
    #[structopt(long = "no-color", help = "Disable colored output.")]
    no_color: bool,
    #[structopt(
        short = "l",
        long = "log",
        parse(from_os_str),
        help = "Path to the JSON log file."
    )]
    log: Option<PathBuf>,
}

impl Command {
    pub fn run(self) -> Result<(), Error> {
        let process = self.command;
        let stylus = stylus(!self.no_color);

        let log = self.log;

        if !self.no_color {
            stylus.set(STYLE_LOGO);
            println!("{}", ASCII_ART);
        }

        let run = || process.run(&stylus);

        if let Some(log) = log {
            let file = fs::File::create(&log)
                .with_context(|| format!("cannot create the log file `{}`", log.display()))?;
            tracing::subscriber::with_default(JsonLogger::new(file), run)
        } else {
            run()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wff::assignment;

    #[test]
    fn parse_eval() {
        let command = Command::from_iter_safe(&["wff", "eval", "p & q", "--assign", "p=1,q=f"])
            .unwrap();
        assert!(!command.no_color);
        assert!(command.log.is_none());
        match command.command {
            ProcessCommand::Eval { source, assign } => {
                assert_eq!(Some("p & q".to_owned()), source.formula);
                assert_eq!(assignment! { p => true, q => false }, assign);
            }
            _ => panic!("expecting eval"),
        }
    }

    #[test]
    fn parse_normalize() {
        let command =
            Command::from_iter_safe(&["wff", "--no-color", "normalize", "-i", "in.wff", "-f", "DNF"])
                .unwrap();
        assert!(command.no_color);
        match command.command {
            ProcessCommand::Normalize { source, form } => {
                assert_eq!(None, source.formula);
                assert_eq!(Some(PathBuf::from("in.wff")), source.input);
                assert!(matches!(form, Form::Dnf));
            }
            _ => panic!("expecting normalize"),
        }
    }

    #[test]
    fn parse_log() {
        let command =
            Command::from_iter_safe(&["wff", "--log", "out.json", "check", "p"]).unwrap();
        assert_eq!(Some(PathBuf::from("out.json")), command.log);
        assert!(Command::from_iter_safe(&["wff", "check", "p", "--log"]).is_err());
    }

    #[test]
    fn reject_bad_arguments() {
        assert!(Command::from_iter_safe(&["wff", "eval", "p", "--assign", "p=maybe"]).is_err());
        assert!(Command::from_iter_safe(&["wff", "normalize", "p", "--form", "pnf"]).is_err());
        assert!(Command::from_iter_safe(&["wff", "equiv", "p"]).is_err());
    }

    #[test]
    fn apply_form() {
        let formula: Formula = "~(p -> q) | false".parse().unwrap();
        assert_eq!("¬(p → q)", Form::Simplify.apply(&formula).to_string());
        assert_eq!("((p ∧ ¬q) ∨ ⟘)", Form::Nnf.apply(&formula).to_string());
        assert_eq!("(p ∧ ¬q)", Form::Cnf.apply(&formula).to_string());
        assert_eq!("(p ∧ ¬q)", Form::Dnf.apply(&formula).to_string());
    }

    #[test]
    fn read_source() {
        let source = Source {
            formula: Some("p -> q".to_owned()),
            input: None,
        };
        assert_eq!("(p → q)", source.read().unwrap().to_string());
    }
}
