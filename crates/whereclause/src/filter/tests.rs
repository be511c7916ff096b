//! Tests for the filter parser.

use super::*;
use chrono::{NaiveDate, NaiveTime};

fn cmp(field: &str, op: OperationType, value: Literal) -> Expr {
    Expr::comparator(field, op, value)
}

fn text(value: &str) -> Literal {
    Literal::Text(value.to_string())
}

fn details(input: &str) -> String {
    FilterParser::parse(input).unwrap_err().to_string()
}

// ==================== Comparator Tests ====================

#[test]
fn test_parse_integer_comparator() {
    assert_eq!(
        FilterParser::parse("id eq 2").unwrap(),
        cmp("id", OperationType::Eq, Literal::Integer(2))
    );
}

#[test]
fn test_parse_all_operators() {
    assert_eq!(
        FilterParser::parse("id ne 1").unwrap(),
        cmp("id", OperationType::Ne, Literal::Integer(1))
    );
    assert_eq!(
        FilterParser::parse("id gt 1").unwrap(),
        cmp("id", OperationType::Gt, Literal::Integer(1))
    );
    assert_eq!(
        FilterParser::parse("id lt -1").unwrap(),
        cmp("id", OperationType::Lt, Literal::Integer(-1))
    );
}

#[test]
fn test_parse_operator_case_insensitive() {
    let expected = cmp("id", OperationType::Gt, Literal::Integer(5));
    assert_eq!(FilterParser::parse("id GT 5").unwrap(), expected);
    assert_eq!(FilterParser::parse("id Gt 5").unwrap(), expected);
}

#[test]
fn test_parse_field_keeps_written_spelling() {
    assert_eq!(
        FilterParser::parse("Name eq 'bob'").unwrap(),
        cmp("Name", OperationType::Eq, text("bob"))
    );
}

#[test]
fn test_parse_text_date_time_literals() {
    assert_eq!(
        FilterParser::parse("location eq 'New York'").unwrap(),
        cmp("location", OperationType::Eq, text("New York"))
    );
    assert_eq!(
        FilterParser::parse("date gt '2019-03-28'").unwrap(),
        cmp(
            "date",
            OperationType::Gt,
            Literal::Date(NaiveDate::from_ymd_opt(2019, 3, 28).unwrap())
        )
    );
    assert_eq!(
        FilterParser::parse("time lt '01:00:00'").unwrap(),
        cmp(
            "time",
            OperationType::Lt,
            Literal::Time(NaiveTime::from_hms_opt(1, 0, 0).unwrap())
        )
    );
}

#[test]
fn test_parse_empty_text_literal() {
    assert_eq!(
        FilterParser::parse("name eq ''").unwrap(),
        cmp("name", OperationType::Eq, text(""))
    );
}

// ==================== Logical Operator Tests ====================

#[test]
fn test_parse_and() {
    assert_eq!(
        FilterParser::parse("id gt 1 AND id lt 5").unwrap(),
        Expr::and(
            cmp("id", OperationType::Gt, Literal::Integer(1)),
            cmp("id", OperationType::Lt, Literal::Integer(5)),
        )
    );
}

#[test]
fn test_parse_connectives_case_insensitive() {
    let upper = FilterParser::parse("id eq 1 AND id eq 2 OR id eq 3").unwrap();
    assert_eq!(FilterParser::parse("id eq 1 and id eq 2 or id eq 3").unwrap(), upper);
    assert_eq!(FilterParser::parse("id eq 1 And id eq 2 Or id eq 3").unwrap(), upper);
}

#[test]
fn test_parse_and_binds_tighter_than_or() {
    let expr = FilterParser::parse("a eq 1 AND b eq 2 OR c eq 3").unwrap();
    assert_eq!(expr, FilterParser::parse("(a eq 1 AND b eq 2) OR c eq 3").unwrap());
    assert_eq!(expr.to_string(), "(((a eq 1) AND (b eq 2)) OR (c eq 3))");

    let expr = FilterParser::parse("a eq 1 OR b eq 2 AND c eq 3").unwrap();
    assert_eq!(expr.to_string(), "((a eq 1) OR ((b eq 2) AND (c eq 3)))");
}

#[test]
fn test_parse_left_associative() {
    let expr = FilterParser::parse("a eq 1 OR b eq 2 OR c eq 3").unwrap();
    assert_eq!(expr.to_string(), "(((a eq 1) OR (b eq 2)) OR (c eq 3))");
}

#[test]
fn test_parse_grouping() {
    let expr = FilterParser::parse("a eq 1 AND (b eq 2 OR c eq 3)").unwrap();
    assert_eq!(expr.to_string(), "((a eq 1) AND ((b eq 2) OR (c eq 3)))");
}

#[test]
fn test_parse_redundant_parentheses() {
    assert_eq!(
        FilterParser::parse("((id eq 1))").unwrap(),
        cmp("id", OperationType::Eq, Literal::Integer(1))
    );
}

#[test]
fn test_parse_complex_expression() {
    let expr = FilterParser::parse(
        "(date eq '2016-05-01') AND ((distance gt 20) OR (distance lt 10))",
    )
    .unwrap();
    assert_eq!(
        expr.to_string(),
        "((date eq '2016-05-01') AND ((distance gt 20) OR (distance lt 10)))"
    );
}

// ==================== Error Tests ====================

#[test]
fn test_parse_error_empty() {
    assert_eq!(
        details(""),
        "invalid filter expression. Details: mismatched input '<EOF>' expecting {'(', IDENTIFIER}"
    );
    assert!(FilterParser::parse("   ").unwrap_err().is_syntax());
}

#[test]
fn test_parse_error_missing_close_paren() {
    let err = FilterParser::parse("(id eq 2 OR id eq 3").unwrap_err();
    assert_eq!(err, FilterError::missing("')'", "<EOF>", 19));
    assert_eq!(
        err.to_string(),
        "invalid filter expression. Details: missing ')' at '<EOF>'"
    );
}

#[test]
fn test_parse_error_unexpected_close_paren() {
    assert_eq!(
        details("id eq 2)"),
        "invalid filter expression. Details: mismatched input ')' expecting {<EOF>, AND, OR}"
    );
}

#[test]
fn test_parse_error_unknown_connective() {
    assert_eq!(
        details("(date eq '2016-05-01') ORE (distance gt 20)"),
        "invalid filter expression. Details: mismatched input 'ORE' expecting {<EOF>, AND, OR}"
    );
}

#[test]
fn test_parse_error_symbol_operator() {
    assert_eq!(FilterParser::parse("id = 2").unwrap_err(), FilterError::lexical("=", 3));
}

#[test]
fn test_parse_error_missing_operator() {
    assert_eq!(
        details("id 2"),
        "invalid filter expression. Details: mismatched input '2' expecting {EQ, NE, GT, LT}"
    );
}

#[test]
fn test_parse_error_identifier_as_value() {
    assert_eq!(
        details("role eq ADMIN"),
        "invalid filter expression. Details: mismatched input 'ADMIN' expecting {DECIMAL, TEXT, DATE, TIME}"
    );
}

#[test]
fn test_parse_error_nested_expression_as_value() {
    assert_eq!(
        details("id eq (2)"),
        "invalid filter expression. Details: mismatched input '(' expecting {DECIMAL, TEXT, DATE, TIME}"
    );
}

#[test]
fn test_parse_error_literal_as_field() {
    assert_eq!(
        details("2 eq id"),
        "invalid filter expression. Details: mismatched input '2' expecting {'(', IDENTIFIER}"
    );
}

#[test]
fn test_parse_error_dangling_connective() {
    assert_eq!(
        details("id eq 1 AND"),
        "invalid filter expression. Details: mismatched input '<EOF>' expecting {'(', IDENTIFIER}"
    );
}

#[test]
fn test_parse_error_unclosed_group_followed_by_garbage() {
    assert_eq!(
        details("(id eq 1 id eq 2)"),
        "invalid filter expression. Details: mismatched input 'id' expecting {')', AND, OR}"
    );
}

#[test]
fn test_parse_error_unquoted_date() {
    assert!(FilterParser::parse("date eq 2018-20-20").unwrap_err().is_syntax());
    assert!(FilterParser::parse("time eq 10:05:06").unwrap_err().is_syntax());
}

// ==================== Literal Resolution Tests ====================

#[test]
fn test_parse_keeps_invalid_date_on_leaf() {
    let expr = FilterParser::parse("date eq '2018-20-20'").unwrap();
    assert_eq!(
        expr,
        Expr::comparator(
            "date",
            OperationType::Eq,
            ParsedLiteral::Invalid {
                text: "'2018-20-20'".to_string(),
                error: FilterError::incompatible("date"),
            }
        )
    );
    assert_eq!(expr.to_string(), "(date eq '2018-20-20')");
}

#[test]
fn test_parse_invalid_time_value() {
    let expr = FilterParser::parse("time eq '24:61:00'").unwrap();
    assert_eq!(
        expr.first_invalid_literal(),
        Some(&FilterError::incompatible("time"))
    );
}

#[test]
fn test_parse_leap_second_is_invalid() {
    let expr = FilterParser::parse("time eq '23:59:60'").unwrap();
    assert_eq!(
        expr.first_invalid_literal(),
        Some(&FilterError::incompatible("time"))
    );
}

#[test]
fn test_parse_integer_overflow() {
    let expr = FilterParser::parse("id eq 92233720368547758070").unwrap();
    assert_eq!(
        expr.first_invalid_literal(),
        Some(&FilterError::incompatible("id"))
    );
}

#[test]
fn test_first_invalid_literal_in_reading_order() {
    let expr = FilterParser::parse("id eq 1 OR (date eq '2018-20-20' AND time eq '25:00:00')").unwrap();
    assert_eq!(
        expr.first_invalid_literal(),
        Some(&FilterError::incompatible("date"))
    );
    assert!(FilterParser::parse("id eq 1 AND name eq 'x'")
        .unwrap()
        .first_invalid_literal()
        .is_none());
}

#[test]
fn test_parse_syntax_error_wins_over_bad_literal() {
    let err = FilterParser::parse("date eq '2018-20-20' ORE id eq 1").unwrap_err();
    assert!(err.is_syntax());
}
