use crate::{
    constants::*,
    terminal::{Style, Stylus},
};
use anyhow::{bail, Context, Error};
use itertools::Itertools;
use std::{
    fs,
    io::{stdin, Read},
    path::Path,
};
use wff::{
    analysis::TruthTable,
    semantics::Assignment,
    syntax::{Formula, Prop},
};

pub(crate) fn stylus(color: bool) -> Stylus {
    let mut stylus = Stylus::new();
    if color {
        stylus.insert_style(
            STYLE_LOGO,
            Style::new().foreground(59).attribute(term::Attr::Dim),
        );
        stylus.insert_style(
            STYLE_INFO,
            Style::new().foreground(59).attribute(term::Attr::Bold),
        );
        stylus.insert_style(STYLE_FORMULA, Style::new().foreground(252));
        stylus.insert_style(
            STYLE_HEADER,
            Style::new().foreground(252).attribute(term::Attr::Bold),
        );
        stylus.insert_style(STYLE_TRUE, Style::new().foreground(term::color::GREEN));
        stylus.insert_style(STYLE_FALSE, Style::new().foreground(term::color::RED));
    }

    stylus
}

pub(crate) fn parse_formula(source: &str) -> Result<Formula, Error> {
    source
        .parse()
        .with_context(|| format!("failed to parse the formula `{}`", source.trim()))
}

pub(crate) fn read_formula_from_file(path: &Path) -> Result<Formula, Error> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read the input file `{}`", path.display()))?;
    parse_formula(&contents)
}

pub(crate) fn read_formula_from_stdin() -> Result<Formula, Error> {
    let mut buf: Vec<u8> = Vec::new();
    stdin()
        .read_to_end(&mut buf)
        .context("failed to read from the standard input")?;
    let source = String::from_utf8(buf)?;
    parse_formula(&source)
}

/// Parses a truth value: `true`, `false`, `t`, `f`, `1` or `0`, in any case.
pub(crate) fn parse_truth(value: &str) -> Result<bool, Error> {
    match value.trim().to_lowercase().as_str() {
        "true" | "t" | "1" => Ok(true),
        "false" | "f" | "0" => Ok(false),
        _ => bail!("invalid truth value `{}`", value.trim()),
    }
}

/// Parses a comma separated list of `symbol=value` bindings.
pub(crate) fn parse_assignment(source: &str) -> Result<Assignment, Error> {
    source
        .split(',')
        .map(str::trim)
        .filter(|binding| !binding.is_empty())
        .map(|binding| -> Result<(Prop, bool), Error> {
            let (prop, value) = binding
                .splitn(2, '=')
                .collect_tuple()
                .with_context(|| format!("expecting `symbol=value`, found `{}`", binding))?;
            Ok((Prop::new(prop.trim())?, parse_truth(value)?))
        })
        .collect()
}

fn truth_to_string(value: bool) -> &'static str {
    if value {
        "T"
    } else {
        "F"
    }
}

fn print_truth(value: bool, width: usize, stylus: &Stylus) {
    stylus.set(if value { STYLE_TRUE } else { STYLE_FALSE });
    print!("{:^width$}", truth_to_string(value), width = width);
}

pub(crate) fn print_formula(label: &str, formula: &Formula, stylus: &Stylus) {
    stylus.set(STYLE_INFO);
    print!("{}", label);
    stylus.set(STYLE_FORMULA);
    println!("{}", formula);
}

pub(crate) fn print_assignment(label: &str, assignment: &Assignment, stylus: &Stylus) {
    stylus.set(STYLE_INFO);
    print!("{}", label);
    stylus.set(STYLE_FORMULA);
    if assignment.is_empty() {
        println!("(no atoms)");
    } else {
        println!("{}", assignment);
    }
}

pub(crate) fn print_truth_table(table: TruthTable<'_>, stylus: &Stylus) {
    let formula = table.formula().to_string();
    let widths = table
        .atoms()
        .iter()
        .map(|p| p.name().chars().count().max(1))
        .collect_vec();
    let result_width = formula.chars().count();

    stylus.set(STYLE_HEADER);
    let header = table
        .atoms()
        .iter()
        .map(|p| p.to_string())
        .chain(std::iter::once(formula))
        .join(" │ ");
    println!("{}", header);
    let rule = widths
        .iter()
        .chain(std::iter::once(&result_width))
        .map(|w| "─".repeat(*w))
        .join("─┼─");
    stylus.set(STYLE_INFO);
    println!("{}", rule);

    let mut count = 0;
    for (assignment, value) in table {
        for ((_, bound), width) in assignment.iter().zip(widths.iter()) {
            print_truth(bound, *width, stylus);
            stylus.set(STYLE_INFO);
            print!(" │ ");
        }
        print_truth(value, result_width, stylus);
        println!();
        count += value as usize;
    }

    stylus.set(STYLE_INFO);
    println!();
    println!("{} of the rows are true.", count);
}
