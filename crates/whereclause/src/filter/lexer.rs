//! Lexer (tokenizer) for filter expressions.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use tracing::trace;

use super::error::{FilterError, FilterResult};

/// The kind of a token in a filter expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// The `AND` connective (case-insensitive).
    And,
    /// The `OR` connective (case-insensitive).
    Or,
    /// The `eq` comparator.
    Eq,
    /// The `ne` comparator.
    Ne,
    /// The `gt` comparator.
    Gt,
    /// The `lt` comparator.
    Lt,
    /// A bare word naming a field.
    Identifier,
    /// An unquoted decimal integer, optionally negative.
    Decimal,
    /// A single-quoted string that is neither a date nor a time.
    Text,
    /// A single-quoted `YYYY-MM-DD` literal.
    Date,
    /// A single-quoted `HH:MM:SS` literal.
    Time,
    /// Opening parenthesis `(`.
    LeftParen,
    /// Closing parenthesis `)`.
    RightParen,
    /// End of input.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Eq => "EQ",
            TokenKind::Ne => "NE",
            TokenKind::Gt => "GT",
            TokenKind::Lt => "LT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Decimal => "DECIMAL",
            TokenKind::Text => "TEXT",
            TokenKind::Date => "DATE",
            TokenKind::Time => "TIME",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Eof => "<EOF>",
        };
        f.write_str(name)
    }
}

/// A token with its raw lexeme and position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The text as written, including quotes for quoted literals.
    pub lexeme: String,
    /// The byte position where the token starts (0-indexed).
    pub position: usize,
}

impl Token {
    fn new(kind: TokenKind, lexeme: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// Returns the text used for this token in error messages.
    pub fn display_text(&self) -> &str {
        match self.kind {
            TokenKind::Eof => "<EOF>",
            _ => &self.lexeme,
        }
    }
}

/// Lexer for tokenizing filter expressions.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Returns the byte offset of the next character, or the input length at the end.
    fn offset(&mut self) -> usize {
        self.chars
            .peek()
            .map_or(self.input.len(), |&(index, _)| index)
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.chars.next();
        }
    }

    /// Consumes characters while `predicate` holds and returns the consumed slice.
    fn take_while(&mut self, start: usize, predicate: impl Fn(char) -> bool) -> &'a str {
        while self.peek().is_some_and(&predicate) {
            self.chars.next();
        }
        let end = self.offset();
        &self.input[start..end]
    }

    /// Reads a single-quoted literal starting at the opening quote.
    fn read_quoted(&mut self, start: usize) -> FilterResult<Token> {
        self.chars.next(); // opening quote

        loop {
            match self.chars.next() {
                Some((index, '\'')) => {
                    let lexeme = &self.input[start..index + 1];
                    let kind = classify_quoted(&lexeme[1..lexeme.len() - 1]);
                    return Ok(Token::new(kind, lexeme, start));
                }
                Some(_) => {}
                None => return Err(FilterError::lexical(&self.input[start..], start)),
            }
        }
    }

    /// Reads a decimal integer, with an optional leading minus sign.
    fn read_decimal(&mut self, start: usize) -> FilterResult<Token> {
        if self.peek() == Some('-') {
            self.chars.next();
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(FilterError::lexical("-", start));
            }
        }
        let lexeme = self.take_while(start, |c| c.is_ascii_digit());
        Ok(Token::new(TokenKind::Decimal, lexeme, start))
    }

    /// Reads an identifier or keyword.
    fn read_word(&mut self, start: usize) -> Token {
        let word = self.take_while(start, |c| c.is_alphanumeric() || c == '_');
        let kind = keyword(word).unwrap_or(TokenKind::Identifier);
        Token::new(kind, word, start)
    }

    /// Returns the next token. Returns an `Eof` token once the input is exhausted.
    pub fn next_token(&mut self) -> FilterResult<Token> {
        self.skip_whitespace();

        let start = self.offset();
        let Some(c) = self.peek() else {
            return Ok(Token::new(TokenKind::Eof, "", start));
        };

        match c {
            '(' => {
                self.chars.next();
                Ok(Token::new(TokenKind::LeftParen, "(", start))
            }
            ')' => {
                self.chars.next();
                Ok(Token::new(TokenKind::RightParen, ")", start))
            }
            '\'' => self.read_quoted(start),
            '-' => self.read_decimal(start),
            _ if c.is_ascii_digit() => self.read_decimal(start),
            _ if c.is_alphabetic() || c == '_' => Ok(self.read_word(start)),
            _ => Err(FilterError::lexical(c.to_string(), start)),
        }
    }

    /// Tokenizes the whole input.
    ///
    /// The returned sequence always ends with a single `Eof` token. The first
    /// unrecognized character aborts tokenization.
    pub fn tokenize(mut self) -> FilterResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        trace!(count = tokens.len(), "tokenized filter expression");
        Ok(tokens)
    }
}

/// Maps a bare word to a keyword token kind, ignoring case.
fn keyword(word: &str) -> Option<TokenKind> {
    const KEYWORDS: [(&str, TokenKind); 6] = [
        ("and", TokenKind::And),
        ("or", TokenKind::Or),
        ("eq", TokenKind::Eq),
        ("ne", TokenKind::Ne),
        ("gt", TokenKind::Gt),
        ("lt", TokenKind::Lt),
    ];

    KEYWORDS
        .iter()
        .find(|(name, _)| word.eq_ignore_ascii_case(name))
        .map(|&(_, kind)| kind)
}

/// Decides whether quoted content is a date, a time or plain text.
fn classify_quoted(content: &str) -> TokenKind {
    if matches_shape(content, "dddd-dd-dd") {
        TokenKind::Date
    } else if matches_shape(content, "dd:dd:dd") {
        TokenKind::Time
    } else {
        TokenKind::Text
    }
}

/// Checks `content` against a shape where `d` stands for any ASCII digit.
fn matches_shape(content: &str, shape: &str) -> bool {
    content.len() == shape.len()
        && content
            .bytes()
            .zip(shape.bytes())
            .all(|(c, s)| if s == b'd' { c.is_ascii_digit() } else { c == s })
}
