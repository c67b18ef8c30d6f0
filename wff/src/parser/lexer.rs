//! Implements the lexer, turning formula text into a stream of [`Token`]s.
//!
//! The spellings of the connectives and constants are not hard-wired; they are read from a
//! [`Lexicon`]. The default lexicon (see [`Lexicon::standard`]) accepts the following:
//!
//! | token     | keywords              | symbols                     |
//! |-----------|-----------------------|-----------------------------|
//! | `not`     | `not`, `NOT`          | `~`, `!`, `¬`               |
//! | `and`     | `and`, `AND`          | `&`, `∧`                    |
//! | `or`      | `or`, `OR`            | <code>&#124;</code>, `∨`    |
//! | `implies` | `implies`, `IMPLIES`  | `->`, `=>`, `→`             |
//! | `iff`     | `iff`, `IFF`          | `<->`, `<=>`, `↔`, `⇔`      |
//! | `true`    | `true`, `TRUE`        | `⊤`                         |
//! | `false`   | `false`, `FALSE`      | `⟘`, `⊥`                    |
//!
//! Parentheses are always `(` and `)`. An identifier (an ASCII letter or `_` followed by ASCII
//! letters, digits or `_`) is a keyword if the lexicon says so and an atom otherwise.
use super::{Error, SourceInfo};
use crate::syntax::{is_identifier_char, is_identifier_start, Prop};
use std::{collections::HashMap, fmt, sync::OnceLock};

/// Is the kind of a [`Token`], used to report what the parser expected.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum TokenType {
    Atom,
    True,
    False,
    Not,
    And,
    Or,
    Implies,
    Iff,
    LParen,
    RParen,
    End,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::Atom => "`atom`",
            Self::True => "`true`",
            Self::False => "`false`",
            Self::Not => "`not`",
            Self::And => "`and`",
            Self::Or => "`or`",
            Self::Implies => "`implies`",
            Self::Iff => "`iff`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::End => "end of input",
        };
        write!(f, "{}", s)
    }
}

/// Is a lexical token of formula text.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum Token {
    Atom(Prop),
    True,
    False,
    Not,
    And,
    Or,
    Implies,
    Iff,
    LParen,
    RParen,
    End,
}

impl Token {
    /// Returns the kind of the receiver.
    pub fn token_type(&self) -> TokenType {
        match self {
            Self::Atom(_) => TokenType::Atom,
            Self::True => TokenType::True,
            Self::False => TokenType::False,
            Self::Not => TokenType::Not,
            Self::And => TokenType::And,
            Self::Or => TokenType::Or,
            Self::Implies => TokenType::Implies,
            Self::Iff => TokenType::Iff,
            Self::LParen => TokenType::LParen,
            Self::RParen => TokenType::RParen,
            Self::End => TokenType::End,
        }
    }

    // Returns the token of a kind that carries no payload.
    fn of_type(token_type: TokenType) -> Option<Self> {
        match token_type {
            TokenType::Atom => None,
            TokenType::True => Some(Self::True),
            TokenType::False => Some(Self::False),
            TokenType::Not => Some(Self::Not),
            TokenType::And => Some(Self::And),
            TokenType::Or => Some(Self::Or),
            TokenType::Implies => Some(Self::Implies),
            TokenType::Iff => Some(Self::Iff),
            TokenType::LParen => Some(Self::LParen),
            TokenType::RParen => Some(Self::RParen),
            TokenType::End => Some(Self::End),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Atom(this) => write!(f, "`{}`", this),
            _ => fmt::Display::fmt(&self.token_type(), f),
        }
    }
}

/// Is a [`Token`] together with the byte offset where it starts in the source.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Lexeme {
    pub(crate) token: Token,
    pub(crate) offset: usize,
}

impl Lexeme {
    /// Returns the token of the receiver.
    #[inline(always)]
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Returns the byte offset of the receiver in the source.
    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Is a fixed table of spellings for connectives and constants.
///
/// A lexicon is built once and is read-only afterwards; parsers borrow it.
///
/// **Example**:
/// ```rust
/// use wff::parser::{Lexicon, Parser, TokenType};
///
/// let lexicon = Lexicon::empty()
///     .with_keyword("no", TokenType::Not).unwrap()
///     .with_keyword("y", TokenType::And).unwrap()
///     .with_symbol("=>", TokenType::Implies).unwrap();
/// let parser = Parser::with_lexicon(&lexicon);
///
/// assert_eq!("(¬p → (q ∧ r))", parser.parse("no p => q y r").unwrap().to_string());
/// ```
#[derive(Clone, Debug)]
pub struct Lexicon {
    keywords: HashMap<String, TokenType>,
    // sorted by decreasing length for longest match
    symbols: Vec<(String, TokenType)>,
}

impl Lexicon {
    /// Returns a lexicon that only knows parentheses.
    pub fn empty() -> Self {
        let mut lexicon = Self {
            keywords: HashMap::new(),
            symbols: Vec::new(),
        };
        lexicon.insert_symbol("(", TokenType::LParen);
        lexicon.insert_symbol(")", TokenType::RParen);
        lexicon
    }

    /// Returns the shared default lexicon.
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<Lexicon> = OnceLock::new();
        STANDARD.get_or_init(Self::default)
    }

    /// Returns the receiver extended with the keyword `spelling` for tokens of `token_type`.
    /// A keyword must be an identifier and cannot spell an atom, a parenthesis or the end of
    /// input.
    pub fn with_keyword<S: Into<String>>(
        mut self,
        spelling: S,
        token_type: TokenType,
    ) -> Result<Self, Error> {
        let spelling = spelling.into();
        if !Prop::is_identifier(&spelling) || !Self::is_spellable(token_type) {
            return Err(Error::Spelling {
                spelling,
                token_type,
            });
        }
        self.keywords.insert(spelling, token_type);
        Ok(self)
    }

    /// Returns the receiver extended with the symbol `spelling` for tokens of `token_type`.
    /// A symbol must be non-empty, cannot start with whitespace or an identifier character,
    /// and cannot contain a parenthesis. Atoms, parentheses and the end of input cannot be
    /// spelled.
    pub fn with_symbol<S: Into<String>>(
        mut self,
        spelling: S,
        token_type: TokenType,
    ) -> Result<Self, Error> {
        let spelling = spelling.into();
        let valid = match spelling.chars().next() {
            Some(c) => !c.is_whitespace() && !is_identifier_char(c),
            None => false,
        } && !spelling.contains(|c: char| c == '(' || c == ')');
        if !valid || !Self::is_spellable(token_type) {
            return Err(Error::Spelling {
                spelling,
                token_type,
            });
        }
        self.insert_symbol(&spelling, token_type);
        Ok(self)
    }

    /// Returns true if `word` is a keyword of the receiver.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains_key(word)
    }

    // Parentheses are fixed; atoms and the end of input have no spelling.
    fn is_spellable(token_type: TokenType) -> bool {
        !matches!(
            token_type,
            TokenType::Atom | TokenType::LParen | TokenType::RParen | TokenType::End
        )
    }

    /// Splits `source` into tokens. The result always ends with a single [`Token::End`].
    pub fn tokenize(&self, source: &str) -> Result<Vec<Lexeme>, Error> {
        Lexer::new(source, self).collect()
    }

    fn insert_keyword(&mut self, spelling: &str, token_type: TokenType) {
        self.keywords.insert(spelling.to_owned(), token_type);
    }

    fn insert_symbol(&mut self, spelling: &str, token_type: TokenType) {
        self.symbols.retain(|(s, _)| s != spelling);
        self.symbols.push((spelling.to_owned(), token_type));
        self.symbols
            .sort_by(|(left, _), (right, _)| right.len().cmp(&left.len()));
    }

    fn keyword(&self, word: &str) -> Option<Token> {
        self.keywords.get(word).copied().and_then(Token::of_type)
    }

    fn symbol(&self, text: &str) -> Option<(Token, usize)> {
        self.symbols
            .iter()
            .find(|(spelling, _)| text.starts_with(spelling.as_str()))
            .and_then(|(spelling, t)| Token::of_type(*t).map(|token| (token, spelling.len())))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        let mut lexicon = Self::empty();
        let keywords = [
            (TokenType::Not, ["not", "NOT"]),
            (TokenType::And, ["and", "AND"]),
            (TokenType::Or, ["or", "OR"]),
            (TokenType::Implies, ["implies", "IMPLIES"]),
            (TokenType::Iff, ["iff", "IFF"]),
            (TokenType::True, ["true", "TRUE"]),
            (TokenType::False, ["false", "FALSE"]),
        ];
        for (token_type, spellings) in keywords.iter() {
            for spelling in spellings.iter() {
                lexicon.insert_keyword(spelling, *token_type);
            }
        }

        let symbols: [(TokenType, &[&str]); 7] = [
            (TokenType::Not, &["~", "!", "¬"]),
            (TokenType::And, &["&", "∧"]),
            (TokenType::Or, &["|", "∨"]),
            (TokenType::Implies, &["->", "=>", "→"]),
            (TokenType::Iff, &["<->", "<=>", "↔", "⇔"]),
            (TokenType::True, &["⊤"]),
            (TokenType::False, &["⟘", "⊥"]),
        ];
        for (token_type, spellings) in symbols.iter() {
            for spelling in spellings.iter() {
                lexicon.insert_symbol(spelling, *token_type);
            }
        }
        lexicon
    }
}

/// Is an iterator over the [`Lexeme`]s of a source string. The last item is either
/// [`Token::End`] or the first lexical error.
pub struct Lexer<'s, 'l> {
    source: &'s str,
    lexicon: &'l Lexicon,
    info: SourceInfo<'s>,
    offset: usize,
    done: bool,
}

impl<'s, 'l> Lexer<'s, 'l> {
    /// Creates a new lexer over `source`, recognizing the spellings of `lexicon`.
    pub fn new(source: &'s str, lexicon: &'l Lexicon) -> Self {
        Self {
            source,
            lexicon,
            info: SourceInfo::new(source),
            offset: 0,
            done: false,
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.source[self.offset..];
        let trimmed = rest.trim_start();
        self.offset += rest.len() - trimmed.len();
    }

    fn next_lexeme(&mut self) -> Result<Lexeme, Error> {
        self.skip_whitespace();
        let offset = self.offset;
        let rest = &self.source[offset..];

        let first = match rest.chars().next() {
            Some(c) => c,
            None => {
                self.done = true;
                return Ok(Lexeme {
                    token: Token::End,
                    offset,
                });
            }
        };

        if is_identifier_start(first) {
            let len = rest
                .char_indices()
                .find(|(_, c)| !is_identifier_char(*c))
                .map(|(i, _)| i)
                .unwrap_or_else(|| rest.len());
            let word = &rest[..len];
            self.offset += len;
            let token = self
                .lexicon
                .keyword(word)
                .unwrap_or_else(|| Token::Atom(Prop::unchecked(word)));
            return Ok(Lexeme { token, offset });
        }

        if let Some((token, len)) = self.lexicon.symbol(rest) {
            self.offset += len;
            return Ok(Lexeme { token, offset });
        }

        self.done = true;
        Err(Error::Lex {
            position: self.info.position(offset),
            found: first,
        })
    }
}

impl<'s, 'l> Iterator for Lexer<'s, 'l> {
    type Item = Result<Lexeme, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            None
        } else {
            Some(self.next_lexeme())
        }
    }
}
