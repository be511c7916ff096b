//! Parse command implementation.
//!
//! Shows how a filter is grouped and, given a record type, the predicate it
//! compiles to. Useful for checking precedence before running a query.

use serde::Serialize;
use whereclause_rs::filter::FilterParser;
use whereclause_rs::models::{Jogging, User};
use whereclause_rs::FilterEngine;

use super::{CommandContext, Result};
use crate::cli::RecordKind;

/// Options for the parse command.
#[derive(Debug)]
pub struct ParseOptions {
    /// Filter expression.
    pub filter: String,
    /// Record type to compile against.
    pub record: Option<RecordKind>,
}

/// Result of parsing (and optionally compiling) a filter.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ParseResult {
    /// The fully parenthesized expression tree.
    pub expression: String,
    /// The compiled predicate, when a record type was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicate: Option<String>,
}

/// Executes the parse command.
///
/// # Errors
///
/// Returns a filter error if the expression does not parse, or does not
/// compile against the requested record type.
pub fn execute(ctx: &CommandContext, opts: &ParseOptions) -> Result<()> {
    let result = parse_filter(opts)?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        if ctx.use_colors {
            println!("{} {}", "Expression:".dimmed(), result.expression);
        } else {
            println!("Expression: {}", result.expression);
        }
        if let Some(ref predicate) = result.predicate {
            if ctx.use_colors {
                println!("{} {}", "Predicate:".dimmed(), predicate);
            } else {
                println!("Predicate: {}", predicate);
            }
        }
    }

    Ok(())
}

fn parse_filter(opts: &ParseOptions) -> Result<ParseResult> {
    let expr = FilterParser::parse(&opts.filter)?;

    let engine = FilterEngine::new();
    let predicate = match opts.record {
        Some(RecordKind::User) => Some(engine.build_for::<User>(&opts.filter)?),
        Some(RecordKind::Jogging) => Some(engine.build_for::<Jogging>(&opts.filter)?),
        None => {
            if let Some(err) = expr.first_invalid_literal() {
                return Err(err.clone().into());
            }
            None
        }
    };

    Ok(ParseResult {
        expression: expr.to_string(),
        predicate: predicate.map(|p| p.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandError;
    use whereclause_rs::FilterError;

    fn opts(filter: &str, record: Option<RecordKind>) -> ParseOptions {
        ParseOptions {
            filter: filter.to_string(),
            record,
        }
    }

    #[test]
    fn test_parse_shows_grouping() {
        let result = parse_filter(&opts("a eq 1 OR b eq 2 AND c eq 3", None)).unwrap();
        assert_eq!(result.expression, "((a eq 1) OR ((b eq 2) AND (c eq 3)))");
        assert!(result.predicate.is_none());
    }

    #[test]
    fn test_parse_compiles_against_record() {
        let result = parse_filter(&opts("role eq 'ADMIN' and id gt 1", Some(RecordKind::User)))
            .unwrap();
        assert_eq!(result.expression, "((role eq 'ADMIN') AND (id gt 1))");
        assert_eq!(
            result.predicate.as_deref(),
            Some("(role = 'ADMIN' AND id > 1)")
        );
    }

    #[test]
    fn test_parse_unknown_field_for_record() {
        let err = parse_filter(&opts("role eq 'ADMIN'", Some(RecordKind::Jogging))).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Filter(FilterError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_parse_syntax_error() {
        let err = parse_filter(&opts("id eq", None)).unwrap_err();
        assert!(matches!(err, CommandError::Filter(ref e) if e.is_syntax()));
    }

    #[test]
    fn test_parse_invalid_literal_without_record() {
        let err = parse_filter(&opts("date eq '2018-20-20'", None)).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Filter(FilterError::IncompatibleValueType { .. })
        ));
    }

    #[test]
    fn test_parse_reports_errors_in_reading_order() {
        let err = parse_filter(&opts(
            "role eq 'rockstar' AND id eq 99999999999999999999",
            Some(RecordKind::User),
        ))
        .unwrap_err();
        assert_eq!(err.to_string(), "'rockstar' role doesn't exist");
    }

    #[test]
    fn test_parse_result_json_omits_missing_predicate() {
        let result = parse_filter(&opts("id eq 1", None)).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"expression":"(id eq 1)"}"#);
    }
}
