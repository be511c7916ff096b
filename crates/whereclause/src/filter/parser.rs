//! Recursive descent parser for filter expressions.

use tracing::debug;

use super::ast::{Expr, OperationType, ParsedLiteral};
use super::error::{FilterError, FilterResult};
use super::lexer::{Lexer, Token, TokenKind};
use super::value::resolve_literal;

const EXPECTED_ATOM: &str = "{'(', IDENTIFIER}";
const EXPECTED_COMPARATOR: &str = "{EQ, NE, GT, LT}";
const EXPECTED_LITERAL: &str = "{DECIMAL, TEXT, DATE, TIME}";
const EXPECTED_CLOSE: &str = "{')', AND, OR}";
const EXPECTED_END: &str = "{<EOF>, AND, OR}";

/// Parser for where-clause filter expressions.
///
/// # Grammar
///
/// ```text
/// expr         ::= or_expr
/// or_expr      ::= and_expr (OR and_expr)*
/// and_expr     ::= atom (AND atom)*
/// atom         ::= "(" expr ")" | comparator
/// comparator   ::= IDENTIFIER comparator_op literal
/// comparator_op::= EQ | NE | GT | LT
/// literal      ::= DECIMAL | TEXT | DATE | TIME
/// ```
///
/// # Operator Precedence (highest to lowest)
///
/// 1. `AND` - binary, left-associative
/// 2. `OR` - binary, left-associative
///
/// # Example
///
/// ```
/// use whereclause_rs::filter::{Expr, FilterParser};
///
/// let expr = FilterParser::parse("(name eq 'bob') AND (id gt 18)").unwrap();
/// assert!(matches!(expr, Expr::Binary { .. }));
/// ```
pub struct FilterParser {
    tokens: Vec<Token>,
    position: usize,
}

impl FilterParser {
    /// Parses a filter expression string into an [`Expr`].
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Lexical` if the input contains an unrecognized
    /// character, `FilterError::Syntax` if the tokens do not follow the
    /// grammar (including empty input).
    ///
    /// A literal with the right shape but no valid value (`'2018-20-20'`) does
    /// not fail the parse. It is kept as [`ParsedLiteral::Invalid`] and
    /// reported when the expression is compiled.
    pub fn parse(input: &str) -> FilterResult<Expr> {
        let tokens = Lexer::new(input).tokenize()?;

        let mut parser = Self {
            tokens,
            position: 0,
        };
        let expr = parser.parse_expression()?;

        let remaining = parser.peek();
        if remaining.kind != TokenKind::Eof {
            return Err(FilterError::mismatched(
                EXPECTED_END,
                remaining.display_text(),
                remaining.position,
            ));
        }

        debug!(%expr, "parsed filter expression");
        Ok(expr)
    }

    /// Returns the current token without consuming it.
    ///
    /// The token list always ends with `Eof`, and the parser never moves past it.
    fn peek(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.position.min(last)]
    }

    /// Consumes and returns the current token.
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.position += 1;
        }
        token
    }

    /// Checks if the current token is of the expected kind.
    fn check(&self, expected: TokenKind) -> bool {
        self.peek().kind == expected
    }

    /// Builds a mismatched-input error for the current token.
    fn mismatch(&self, expected: &str) -> FilterError {
        let found = self.peek();
        FilterError::mismatched(expected, found.display_text(), found.position)
    }

    /// Parses the top-level expression (OR expression).
    fn parse_expression(&mut self) -> FilterResult<Expr> {
        self.parse_or_expr()
    }

    /// Parses OR expressions: `and_expr (OR and_expr)*`
    fn parse_or_expr(&mut self) -> FilterResult<Expr> {
        let mut left = self.parse_and_expr()?;

        while self.check(TokenKind::Or) {
            self.advance();
            let right = self.parse_and_expr()?;
            left = Expr::or(left, right);
        }

        Ok(left)
    }

    /// Parses AND expressions: `atom (AND atom)*`
    fn parse_and_expr(&mut self) -> FilterResult<Expr> {
        let mut left = self.parse_atom()?;

        while self.check(TokenKind::And) {
            self.advance();
            let right = self.parse_atom()?;
            left = Expr::and(left, right);
        }

        Ok(left)
    }

    /// Parses atoms: `"(" expr ")" | comparator`
    fn parse_atom(&mut self) -> FilterResult<Expr> {
        match self.peek().kind {
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expression()?;
                match self.peek().kind {
                    TokenKind::RightParen => {
                        self.advance();
                        Ok(inner)
                    }
                    TokenKind::Eof => {
                        let eof = self.peek();
                        Err(FilterError::missing("')'", eof.display_text(), eof.position))
                    }
                    _ => Err(self.mismatch(EXPECTED_CLOSE)),
                }
            }
            TokenKind::Identifier => self.parse_comparator(),
            _ => Err(self.mismatch(EXPECTED_ATOM)),
        }
    }

    /// Parses comparators: `IDENTIFIER comparator_op literal`
    fn parse_comparator(&mut self) -> FilterResult<Expr> {
        let field = self.advance().lexeme;

        let op = match self.peek().kind {
            TokenKind::Eq => OperationType::Eq,
            TokenKind::Ne => OperationType::Ne,
            TokenKind::Gt => OperationType::Gt,
            TokenKind::Lt => OperationType::Lt,
            _ => return Err(self.mismatch(EXPECTED_COMPARATOR)),
        };
        self.advance();

        let value = match self.peek().kind {
            TokenKind::Decimal | TokenKind::Text | TokenKind::Date | TokenKind::Time => {
                let token = self.advance();
                resolve(&token, &field)
            }
            _ => return Err(self.mismatch(EXPECTED_LITERAL)),
        };

        Ok(Expr::comparator(field, op, value))
    }
}

/// Resolves a literal token, keeping a failure on the leaf.
fn resolve(token: &Token, field: &str) -> ParsedLiteral {
    match resolve_literal(token, field) {
        Ok(literal) => ParsedLiteral::Valid(literal),
        Err(error) => ParsedLiteral::Invalid {
            text: token.lexeme.clone(),
            error,
        },
    }
}
