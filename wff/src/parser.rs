//! Implements a parser for propositional formulae.
//!
//! The module provides a recursive-descent parser that reads a formula in a single
//! left-to-right pass with one token of lookahead. The parser is often used implicitly
//! through the [`FromStr`] implementation of [`Formula`] or the [`parse`] function.
//!
//! The grammar, from the loosest to the tightest binding connective, is:
//! ```text
//! formula := iff
//! iff     := implies ( IFF implies )*      # left-associative
//! implies := or ( IMPLIES implies )?       # right-associative
//! or      := and ( OR and )*               # left-associative
//! and     := not ( AND not )*              # left-associative
//! not     := NOT not | atomic
//! atomic  := ATOM | TRUE | FALSE | LPAREN formula RPAREN
//! ```
//!
//! A parsed formula is at most [`MAX_DEPTH`] levels high, counting an atom as one level, and
//! its source may not open more than [`MAX_DEPTH`] parentheses or negations at once.
//!
//! **Example**:
//! The following example parses a string into a [`Formula`]:
//! ```rust
//! use wff::syntax::Formula;
//!
//! let formula: Formula = "p implies q -> r iff ~s".parse().unwrap();
//!
//! assert_eq!("((p → (q → r)) ⇔ ¬s)", formula.to_string());
//! ```
//!
//! [`Formula`]: crate::syntax::Formula
//! [`FromStr`]: std::str::FromStr
mod lexer;

pub use lexer::{Lexeme, Lexer, Lexicon, Token, TokenType};

use crate::syntax::Formula;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Is the type of errors returned by the lexer and the parser.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum Error {
    /// Is returned when the source contains a character that starts no token.
    #[error("unexpected character `{found}` at {position}")]
    Lex { position: Position, found: char },

    /// Is returned when a token cannot be placed in the grammar: on empty input, unbalanced
    /// parentheses, missing operands, and input left over after a complete formula.
    #[error("found {found} at {position}; expecting {}",
            Error::pretty_expected_tokens(.expected)
    )]
    Syntax {
        position: Position,
        expected: Vec<TokenType>,
        found: Token,
    },

    /// Is returned when the formula nests deeper than [`MAX_DEPTH`].
    #[error("formula nests deeper than {limit} levels at {position}")]
    Depth { position: Position, limit: usize },

    /// Is returned when a [`Lexicon`] is extended with an invalid spelling.
    #[error("`{spelling}` is not a valid spelling for {token_type}")]
    Spelling {
        spelling: String,
        token_type: TokenType,
    },
}

impl Error {
    fn pretty_expected_tokens(items: &[TokenType]) -> String {
        let strs = items.iter().map(ToString::to_string).collect::<Vec<_>>();
        match items.len() {
            0 => "".into(),
            1 => strs[0].to_string(),
            2 => format!("{} or {}", strs[0], strs[1]),
            n => format!("{}, or {}", strs[0..n - 1].join(", "), strs[n - 1]),
        }
    }
}

/// Is the maximum nesting depth of a parsed formula.
pub const MAX_DEPTH: usize = 512;

/// Is a position in the source text.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Position {
    /// Is the byte offset in the source.
    pub offset: usize,

    /// Is the line number, starting at one.
    pub line: usize,

    /// Is the column number in characters, starting at one.
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

// Stores source information to retrieve token positions in the source.
pub(crate) struct SourceInfo<'s> {
    lines: Vec<usize>,
    source: &'s str,
}

impl<'s> SourceInfo<'s> {
    pub(crate) fn new(source: &'s str) -> Self {
        let lines = source
            .bytes()
            .enumerate()
            .filter(|&(_, ch)| ch == b'\n')
            .map(|(i, _)| i + 1);
        Self {
            lines: std::iter::once(0).chain(lines).collect(),
            source,
        }
    }

    pub(crate) fn position(&self, offset: usize) -> Position {
        let index = self
            .lines
            .iter()
            .rposition(|&start| start <= offset)
            .unwrap_or(0);
        let column = self.source[self.lines[index]..offset].chars().count() + 1;

        Position {
            offset,
            line: index + 1,
            column,
        }
    }
}

/// Parses formulae using the spellings of a [`Lexicon`].
#[derive(Clone, Copy, Debug)]
pub struct Parser<'l> {
    lexicon: &'l Lexicon,
}

impl Parser<'static> {
    /// Returns a parser over the standard lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::standard(),
        }
    }
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'l> Parser<'l> {
    /// Returns a parser over the given `lexicon`.
    pub fn with_lexicon(lexicon: &'l Lexicon) -> Self {
        Self { lexicon }
    }

    /// Returns the lexicon of the receiver.
    pub fn lexicon(&self) -> &'l Lexicon {
        self.lexicon
    }

    /// Parses `source` into a [`Formula`].
    pub fn parse(&self, source: &str) -> Result<Formula, Error> {
        let info = SourceInfo::new(source);
        let lexemes = self.lexicon.tokenize(source)?;
        let mut cursor = Cursor {
            lexemes,
            index: 0,
            nesting: 0,
            info: &info,
        };
        let (formula, _) = cursor.formula()?;
        cursor.expect(TokenType::End)?;
        Ok(formula)
    }
}

// A parsed subformula together with the height of its syntax tree.
type Parsed = (Formula, usize);

// Walks over the lexemes of a source; the last lexeme is always `Token::End`, and the
// cursor never moves past it. `nesting` counts the open parentheses and negations.
struct Cursor<'i, 's> {
    lexemes: Vec<Lexeme>,
    index: usize,
    nesting: usize,
    info: &'i SourceInfo<'s>,
}

impl<'i, 's> Cursor<'i, 's> {
    fn peek(&self) -> &Token {
        &self.lexemes[self.index].token
    }

    fn advance(&mut self) {
        if self.index + 1 < self.lexemes.len() {
            self.index += 1;
        }
    }

    fn offset(&self) -> usize {
        self.lexemes[self.index].offset
    }

    fn error(&self, expected: Vec<TokenType>) -> Error {
        Error::Syntax {
            position: self.info.position(self.offset()),
            expected,
            found: self.peek().clone(),
        }
    }

    fn too_deep(&self, offset: usize) -> Error {
        Error::Depth {
            position: self.info.position(offset),
            limit: MAX_DEPTH,
        }
    }

    // Checks the height of a node built by the connective at `offset`.
    fn height(&self, height: usize, offset: usize) -> Result<usize, Error> {
        if height > MAX_DEPTH {
            Err(self.too_deep(offset))
        } else {
            Ok(height)
        }
    }

    fn nest(&mut self) -> Result<(), Error> {
        if self.nesting == MAX_DEPTH {
            return Err(self.too_deep(self.offset()));
        }
        self.nesting += 1;
        Ok(())
    }

    fn expect(&mut self, token_type: TokenType) -> Result<(), Error> {
        if self.peek().token_type() == token_type {
            self.advance();
            Ok(())
        } else {
            Err(self.error(vec![token_type]))
        }
    }

    fn formula(&mut self) -> Result<Parsed, Error> {
        self.iff()
    }

    fn iff(&mut self) -> Result<Parsed, Error> {
        let (mut left, mut height) = self.implies()?;
        while let Token::Iff = self.peek() {
            let offset = self.offset();
            self.advance();
            let (right, right_height) = self.implies()?;
            height = self.height(1 + height.max(right_height), offset)?;
            left = left.iff(right);
        }
        Ok((left, height))
    }

    fn implies(&mut self) -> Result<Parsed, Error> {
        let mut premises = Vec::new();
        let mut last = self.or()?;
        while let Token::Implies = self.peek() {
            let offset = self.offset();
            self.advance();
            premises.push((last, offset));
            last = self.or()?;
        }
        premises.into_iter().rev().try_fold(
            last,
            |(consequence, height), ((premise, premise_height), offset)| {
                let height = self.height(1 + premise_height.max(height), offset)?;
                Ok((premise.implies(consequence), height))
            },
        )
    }

    fn or(&mut self) -> Result<Parsed, Error> {
        let (mut left, mut height) = self.and()?;
        while let Token::Or = self.peek() {
            let offset = self.offset();
            self.advance();
            let (right, right_height) = self.and()?;
            height = self.height(1 + height.max(right_height), offset)?;
            left = left.or(right);
        }
        Ok((left, height))
    }

    fn and(&mut self) -> Result<Parsed, Error> {
        let (mut left, mut height) = self.not()?;
        while let Token::And = self.peek() {
            let offset = self.offset();
            self.advance();
            let (right, right_height) = self.not()?;
            height = self.height(1 + height.max(right_height), offset)?;
            left = left.and(right);
        }
        Ok((left, height))
    }

    fn not(&mut self) -> Result<Parsed, Error> {
        if let Token::Not = self.peek() {
            let offset = self.offset();
            self.nest()?;
            self.advance();
            let (formula, height) = self.not()?;
            self.nesting -= 1;
            Ok((Formula::not(formula), self.height(height + 1, offset)?))
        } else {
            self.atomic()
        }
    }

    fn atomic(&mut self) -> Result<Parsed, Error> {
        let formula = match self.peek() {
            Token::Atom(this) => this.clone().into(),
            Token::True => Formula::Top,
            Token::False => Formula::Bottom,
            Token::LParen => {
                self.nest()?;
                self.advance();
                let parsed = self.formula()?;
                self.expect(TokenType::RParen)?;
                self.nesting -= 1;
                return Ok(parsed);
            }
            _ => {
                return Err(self.error(vec![
                    TokenType::Atom,
                    TokenType::True,
                    TokenType::False,
                    TokenType::Not,
                    TokenType::LParen,
                ]))
            }
        };
        self.advance();
        Ok((formula, 1))
    }
}

/// Parses `source` into a [`Formula`] using the standard lexicon.
///
/// **Example**:
/// ```rust
/// let formula = wff::parse("p AND q").unwrap();
/// assert_eq!("(p ∧ q)", formula.to_string());
///
/// assert!(wff::parse("p AND").is_err());
/// ```
pub fn parse(source: &str) -> Result<Formula, Error> {
    Parser::new().parse(source)
}

/// Splits `source` into tokens using the standard lexicon. The result always ends with a
/// single [`Token::End`].
pub fn tokenize(source: &str) -> Result<Vec<Lexeme>, Error> {
    Lexicon::standard().tokenize(source)
}

impl FromStr for Formula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, atom, prop};

    fn position(offset: usize, line: usize, column: usize) -> Position {
        Position {
            offset,
            line,
            column,
        }
    }

    #[test]
    fn atoms_and_constants() {
        assert_eq!(atom!(p), parse("p").unwrap());
        assert_eq!(atom!(p), parse("  (((p)))  ").unwrap());
        assert_eq!(Formula::Top, parse("true").unwrap());
        assert_eq!(Formula::Bottom, parse("FALSE").unwrap());
        assert_eq!(Formula::Top, parse("⊤").unwrap());
    }

    #[test]
    fn conjunction() {
        let formula = parse("p AND q").unwrap();
        assert_eq!(atom!(p).and(atom!(q)), formula);
        assert_debug_string!("(p & q)", formula);
    }

    #[test]
    fn implication_is_right_associative() {
        assert_eq!(
            atom!(p).implies(atom!(q).implies(atom!(r))),
            parse("p IMPLIES q IMPLIES r").unwrap()
        );
        assert_debug_string!("(p -> (q -> (r -> s)))", parse("p -> q => r → s").unwrap());
    }

    #[test]
    fn iff_is_left_associative() {
        assert_eq!(
            atom!(p).iff(atom!(q)).iff(atom!(r)),
            parse("p IFF q IFF r").unwrap()
        );
        assert_debug_string!("((p <=> q) <=> r)", parse("p <-> q <=> r").unwrap());
    }

    #[test]
    fn and_or_are_left_associative() {
        assert_debug_string!("((p & q) & r)", parse("p & q & r").unwrap());
        assert_debug_string!("((p | q) | r)", parse("p | q | r").unwrap());
        assert_debug_string!("(p & (q & r))", parse("p & (q & r)").unwrap());
    }

    #[test]
    fn precedence() {
        assert_debug_string!("((~p & q) | r)", parse("~p & q | r").unwrap());
        assert_debug_string!("(p | (q & r))", parse("p | q & r").unwrap());
        assert_debug_string!("((p | q) -> r)", parse("p | q -> r").unwrap());
        assert_debug_string!("((p -> q) <=> (r -> s))", parse("p -> q <=> r -> s").unwrap());
        assert_debug_string!("(~(p & q) -> r)", parse("not (p and q) implies r").unwrap());
        assert_debug_string!(
            "((p & q) <=> ((~r | s) -> t))",
            parse("p & q iff ~r | s -> t").unwrap()
        );
    }

    #[test]
    fn repeated_negation() {
        assert_eq!(
            Formula::not(Formula::not(atom!(p))),
            parse("~~p").unwrap()
        );
        assert_debug_string!("~~~p", parse("NOT ! ¬p").unwrap());
        assert_debug_string!("(~~p & q)", parse("~~p & q").unwrap());
    }

    #[test]
    fn round_trip() {
        let sources = [
            "p",
            "true",
            "~false",
            "p & q | ~r",
            "p -> q -> r",
            "p <=> q <=> r",
            "~(p | ~~q) -> (r <-> TRUE)",
            "((a & b) | (c & d)) iff not (e implies f)",
        ];
        for source in sources.iter() {
            let formula = parse(source).unwrap();
            assert_eq!(formula, parse(&formula.to_string()).unwrap());
            assert_eq!(formula, parse(&format!("{:?}", formula)).unwrap());
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            Err(Error::Syntax {
                position: position(0, 1, 1),
                expected: vec![
                    TokenType::Atom,
                    TokenType::True,
                    TokenType::False,
                    TokenType::Not,
                    TokenType::LParen
                ],
                found: Token::End,
            }),
            parse("")
        );
        assert!(matches!(
            parse("   "),
            Err(Error::Syntax {
                found: Token::End,
                ..
            })
        ));
    }

    #[test]
    fn unmatched_parentheses() {
        assert_eq!(
            Err(Error::Syntax {
                position: position(6, 1, 7),
                expected: vec![TokenType::RParen],
                found: Token::End,
            }),
            parse("(p & q")
        );
        assert_eq!(
            Err(Error::Syntax {
                position: position(5, 1, 6),
                expected: vec![TokenType::End],
                found: Token::RParen,
            }),
            parse("p & q)")
        );
        assert_eq!(
            Err(Error::Syntax {
                position: position(1, 1, 2),
                expected: vec![
                    TokenType::Atom,
                    TokenType::True,
                    TokenType::False,
                    TokenType::Not,
                    TokenType::LParen
                ],
                found: Token::RParen,
            }),
            parse("()")
        );
    }

    #[test]
    fn trailing_input() {
        assert_eq!(
            Err(Error::Syntax {
                position: position(2, 1, 3),
                expected: vec![TokenType::End],
                found: Token::Atom(prop!(q)),
            }),
            parse("p q")
        );
        assert_eq!(
            Err(Error::Syntax {
                position: position(4, 3, 1),
                expected: vec![TokenType::End],
                found: Token::LParen,
            }),
            parse("p\n\t\n(q)")
        );
    }

    #[test]
    fn missing_operands() {
        assert!(matches!(
            parse("p &"),
            Err(Error::Syntax {
                found: Token::End,
                ..
            })
        ));
        assert!(matches!(
            parse("-> q"),
            Err(Error::Syntax {
                found: Token::Implies,
                ..
            })
        ));
        assert!(matches!(
            parse("~"),
            Err(Error::Syntax {
                found: Token::End,
                ..
            })
        ));
        assert!(matches!(
            parse("p & | q"),
            Err(Error::Syntax {
                found: Token::Or,
                ..
            })
        ));
    }

    #[test]
    fn lex_errors_surface() {
        assert_eq!(
            Err(Error::Lex {
                position: position(4, 1, 5),
                found: '#'
            }),
            parse("p & #")
        );
        // reserved words are never atoms
        assert!(parse("and").is_err());
        assert!(parse("p & OR").is_err());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            "found end of input at line 1, column 7; expecting `)`",
            parse("(p & q").unwrap_err().to_string()
        );
        assert_eq!(
            "found `)` at line 1, column 2; expecting `atom`, `true`, `false`, `not`, or `(`",
            parse("()").unwrap_err().to_string()
        );
        assert_eq!(
            "unexpected character `#` at line 1, column 5",
            parse("p & #").unwrap_err().to_string()
        );
    }

    // Runs `test` where formulae close to the depth limit can be built and dropped.
    fn with_large_stack<F: FnOnce() + Send + 'static>(test: F) {
        std::thread::Builder::new()
            .stack_size(64 * 1024 * 1024)
            .spawn(test)
            .unwrap()
            .join()
            .unwrap();
    }

    #[test]
    fn nested_parentheses() {
        with_large_stack(|| {
            let source = format!("{}p{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
            assert_eq!(atom!(p), parse(&source).unwrap());

            let source = format!("{}p{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
            assert_eq!(
                Err(Error::Depth {
                    position: position(MAX_DEPTH, 1, MAX_DEPTH + 1),
                    limit: MAX_DEPTH,
                }),
                parse(&source)
            );

            let source = format!("{}p{}", "(".repeat(100_000), ")".repeat(100_000));
            assert!(matches!(parse(&source), Err(Error::Depth { .. })));
        });
    }

    #[test]
    fn nested_negations() {
        with_large_stack(|| {
            let source = format!("{}p", "~".repeat(MAX_DEPTH - 1));
            assert_eq!(MAX_DEPTH, parse(&source).unwrap().depth());

            let source = format!("{}p", "~".repeat(MAX_DEPTH));
            assert!(matches!(parse(&source), Err(Error::Depth { .. })));

            let source = format!("{}p", "~".repeat(200_000));
            assert_eq!(
                Err(Error::Depth {
                    position: position(MAX_DEPTH, 1, MAX_DEPTH + 1),
                    limit: MAX_DEPTH,
                }),
                parse(&source)
            );
        });
    }

    #[test]
    fn long_chains() {
        with_large_stack(|| {
            let source = vec!["p"; MAX_DEPTH].join(" & ");
            assert_eq!(MAX_DEPTH, parse(&source).unwrap().depth());
            let source = vec!["p"; MAX_DEPTH].join(" -> ");
            assert_eq!(MAX_DEPTH, parse(&source).unwrap().depth());

            for op in [" & ", " | ", " -> ", " <=> "].iter() {
                let source = vec!["p"; MAX_DEPTH + 1].join(*op);
                assert!(matches!(parse(&source), Err(Error::Depth { .. })));
            }
            let source = vec!["p"; 100_000].join(" -> ");
            assert!(matches!(parse(&source), Err(Error::Depth { .. })));
        });
    }

    #[test]
    fn depth_error_message() {
        with_large_stack(|| {
            let source = format!("{}p", "~".repeat(MAX_DEPTH + 1));
            assert_eq!(
                "formula nests deeper than 512 levels at line 1, column 513",
                parse(&source).unwrap_err().to_string()
            );
        });
    }

    #[test]
    fn custom_lexicon() {
        let lexicon = Lexicon::empty()
            .with_keyword("NEG", TokenType::Not)
            .unwrap()
            .with_symbol("*", TokenType::And)
            .unwrap()
            .with_symbol("+", TokenType::Or)
            .unwrap();
        let parser = Parser::with_lexicon(&lexicon);
        // `NEG_p` is a single identifier
        assert_debug_string!("((NEG_p & q) | ~r)", parser.parse("NEG_p * q + NEG r").unwrap());
        assert!(parser.parse("p & q").is_err());
    }
}
