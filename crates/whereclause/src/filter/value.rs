//! Literal token resolution into typed values.

use chrono::{NaiveDate, NaiveTime, Timelike};

use super::ast::Literal;
use super::error::{FilterError, FilterResult};
use super::lexer::{Token, TokenKind};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Strips one leading and one trailing single quote, leaving inner text untouched.
///
/// # Example
///
/// ```
/// use whereclause_rs::filter::remove_quotes;
///
/// assert_eq!(remove_quotes("'bob'"), "bob");
/// assert_eq!(remove_quotes("''quoted''"), "'quoted'");
/// assert_eq!(remove_quotes("plain"), "plain");
/// ```
pub fn remove_quotes(text: &str) -> &str {
    let text = text.strip_prefix('\'').unwrap_or(text);
    text.strip_suffix('\'').unwrap_or(text)
}

/// Converts a literal token into a typed [`Literal`].
///
/// `field` names the comparator's field and is only used for error reporting.
/// Values that have the right lexical shape but do not denote a valid integer,
/// date or time fail with [`FilterError::IncompatibleValueType`].
pub fn resolve_literal(token: &Token, field: &str) -> FilterResult<Literal> {
    let content = remove_quotes(&token.lexeme);
    match token.kind {
        TokenKind::Decimal => content
            .parse::<i64>()
            .map(Literal::Integer)
            .map_err(|_| FilterError::incompatible(field)),
        TokenKind::Text => Ok(Literal::Text(content.to_string())),
        TokenKind::Date => NaiveDate::parse_from_str(content, DATE_FORMAT)
            .map(Literal::Date)
            .map_err(|_| FilterError::incompatible(field)),
        TokenKind::Time => NaiveTime::parse_from_str(content, TIME_FORMAT)
            .ok()
            // chrono reads `:60` as a leap second; a time of day stops at `:59`.
            .filter(|time| time.nanosecond() < 1_000_000_000)
            .map(Literal::Time)
            .ok_or_else(|| FilterError::incompatible(field)),
        _ => Err(FilterError::unsupported_type(token.kind.to_string())),
    }
}
