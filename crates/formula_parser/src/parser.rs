use crate::error::{ParseError, ParseErrorKind};
use crate::options::{ParseOptions, TrailingInput, DEFAULT_MAX_DEPTH};
use formula_ast::{Node, Operator, Value};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{opt, recognize, value},
    sequence::{pair, tuple},
    IResult,
};
use std::rc::Rc;

// Rational literal: -?digits(/digits)?, no whitespace inside
fn rational_literal(input: &str) -> IResult<&str, &str> {
    recognize(tuple((opt(char('-')), digit1, opt(pair(char('/'), digit1)))))(input)
}

// Multi-character tokens are tried first: `--` must win over `-`, and
// `sqrt` is the only alphabetic token.
fn operator_token(input: &str) -> IResult<&str, Operator> {
    alt((
        value(Operator::Sqrt, tag("sqrt")),
        value(Operator::Neg, tag("--")),
        value(Operator::Add, tag("+")),
        value(Operator::Sub, tag("-")),
        value(Operator::Mul, tag("*")),
        value(Operator::Div, tag("/")),
        value(Operator::Pow, tag("^")),
        value(Operator::Factorial, tag("!")),
    ))(input)
}

/// Failure inside the recursive descent, located by the slice of input where
/// it was detected.
struct Located<'a> {
    at: &'a str,
    kind: ParseErrorKind,
}

impl<'a> Located<'a> {
    fn new(at: &'a str, kind: ParseErrorKind) -> Self {
        Located { at, kind }
    }

    fn into_error(self, input: &str) -> ParseError {
        ParseError {
            input: input.to_string(),
            offset: input.len() - self.at.len(),
            kind: self.kind,
        }
    }
}

// Parses one formula from the front of `input` and returns it together with
// whatever follows it. `level` is the nesting depth of the node being read.
fn parse_node<V: Value>(
    input: &str,
    level: usize,
    max_depth: usize,
) -> Result<(Rc<Node<V>>, &str), Located<'_>> {
    let rest = input.trim_start();

    if let Ok((after, literal)) = rational_literal(rest) {
        let value = V::from_literal(literal).map_err(|source| {
            Located::new(
                rest,
                ParseErrorKind::InvalidLiteral {
                    literal: literal.to_string(),
                    source,
                },
            )
        })?;
        return Ok((Node::leaf(value), after));
    }

    if rest.is_empty() {
        return Err(Located::new(rest, ParseErrorKind::EmptyInput));
    }

    let (after_op, op) = operator_token(rest).map_err(|_| {
        Located::new(rest, ParseErrorKind::UnrecognizedOperator(rest.to_string()))
    })?;
    if level >= max_depth {
        return Err(Located::new(rest, ParseErrorKind::TooDeep(max_depth)));
    }
    if after_op.trim_start().is_empty() {
        return Err(Located::new(
            after_op,
            ParseErrorKind::FirstOperandMissing(op),
        ));
    }

    let (first, after_first) = parse_node::<V>(after_op, level + 1, max_depth)?;
    if op.is_unary() {
        return Ok((Rc::new(Node::Unary(op, first)), after_first));
    }

    let (second, after_second) = parse_node::<V>(after_first, level + 1, max_depth).map_err(|cause| {
        if let ParseErrorKind::TooDeep(_) = cause.kind {
            return cause;
        }
        Located::new(
            cause.at,
            ParseErrorKind::SecondOperandMissing {
                operator: op,
                cause: Box::new(cause.kind),
            },
        )
    })?;
    Ok((Rc::new(Node::Binary(op, first, second)), after_second))
}

/// Reads one formula from the front of `input` and returns the unconsumed
/// remainder alongside it. Leftover text is not an error here. Nesting is
/// limited to [`DEFAULT_MAX_DEPTH`].
pub fn parse_prefix<V: Value>(input: &str) -> Result<(Rc<Node<V>>, &str), ParseError> {
    parse_prefix_within(input, DEFAULT_MAX_DEPTH)
}

fn parse_prefix_within<V: Value>(
    input: &str,
    max_depth: usize,
) -> Result<(Rc<Node<V>>, &str), ParseError> {
    parse_node(input, 0, max_depth).map_err(|located| {
        let err = located.into_error(input);
        tracing::trace!(target: "parse", offset = err.offset, "{}", err.kind);
        err
    })
}

pub fn parse_with<V: Value>(input: &str, options: &ParseOptions) -> Result<Rc<Node<V>>, ParseError> {
    let (node, remaining) = parse_prefix_within(input, options.max_depth)?;

    let remaining = remaining.trim_start();
    if options.trailing == TrailingInput::Reject && !remaining.is_empty() {
        let leftover = remaining.trim_end();
        tracing::trace!(target: "parse", leftover, "rejecting trailing input");
        return Err(Located::new(
            remaining,
            ParseErrorKind::TrailingInput(leftover.to_string()),
        )
        .into_error(input));
    }

    Ok(node)
}

/// Parses a complete formula in prefix notation, e.g. `+ 3 -- 2/5`.
///
/// Unary minus is written `--`; literals are `-?digits(/digits)?` with no
/// whitespace inside. Text after the formula is rejected.
pub fn parse<V: Value>(input: &str) -> Result<Rc<Node<V>>, ParseError> {
    parse_with(input, &ParseOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use formula_ast::{ArithmeticError, Rational};

    fn p(input: &str) -> Rc<Node> {
        parse(input).expect("parse failed")
    }

    fn kind_of(input: &str) -> ParseErrorKind {
        parse::<Rational>(input).expect_err("parse should fail").kind
    }

    #[test]
    fn test_literals() {
        assert_eq!(p("3"), Node::integer(3));
        assert_eq!(p("  -7/14  "), Node::leaf(Rational::new(-1, 2).unwrap()));
    }

    #[test]
    fn test_operators() {
        let e = p("+ 3 -- 2");
        assert_eq!(
            e,
            Node::binary(
                Operator::Add,
                Node::integer(3),
                Node::unary(Operator::Neg, Node::integer(2)).unwrap()
            )
            .unwrap()
        );

        let e = p("sqrt ! 4");
        assert_eq!(e.to_polish(), "sqrt ! 4");
        let e = p("^ / 1 2 - 3 4");
        assert_eq!(e.to_polish(), "^ / 1 2 - 3 4");
    }

    #[test]
    fn test_whitespace_is_optional_between_tokens() {
        assert_eq!(p("+3 2"), p("+ 3 2"));
        assert_eq!(p("sqrt4"), p("sqrt 4"));
        assert_eq!(p("\t*\n 2   5 "), p("* 2 5"));
    }

    #[test]
    fn test_minus_disambiguation() {
        // `-3` is a literal, `- 3 1` a subtraction, `--3` a negation
        assert_eq!(p("-3"), Node::integer(-3));
        assert_eq!(p("- 3 1").operator(), Some(Operator::Sub));
        assert_eq!(p("--3").operator(), Some(Operator::Neg));
        assert_eq!(p("- -3 1").to_polish(), "- -3 1");
        assert_eq!(p("-- -3").to_polish(), "-- -3");
    }

    #[test]
    fn test_literal_stops_at_incomplete_fraction() {
        // `2/` is not a fraction: the literal is `2` and `/ 4 1` follows
        let (node, rest) = parse_prefix::<Rational>("2/ 4 1").unwrap();
        assert_eq!(node, Node::integer(2));
        assert_eq!(rest, "/ 4 1");
    }

    #[test]
    fn test_parse_prefix_returns_remainder() {
        let (node, rest) = parse_prefix::<Rational>(" * 2 3  7 8").unwrap();
        assert_eq!(node.to_polish(), "* 2 3");
        assert_eq!(rest, "  7 8");
    }

    #[test]
    fn test_trailing_input_policy() {
        assert_eq!(kind_of("1 2"), ParseErrorKind::TrailingInput("2".into()));
        let lenient: Rc<Node> = parse_with("1 2", &ParseOptions::lenient()).unwrap();
        assert_eq!(lenient, Node::integer(1));
    }

    #[test]
    fn test_errors() {
        assert_eq!(kind_of(""), ParseErrorKind::EmptyInput);
        assert_eq!(kind_of("   "), ParseErrorKind::EmptyInput);
        assert_eq!(
            kind_of("@ 1 2"),
            ParseErrorKind::UnrecognizedOperator("@ 1 2".into())
        );
        assert_eq!(kind_of("+"), ParseErrorKind::FirstOperandMissing(Operator::Add));
        assert_eq!(kind_of("sqrt  "), ParseErrorKind::FirstOperandMissing(Operator::Sqrt));
        assert_eq!(
            kind_of("+ 3"),
            ParseErrorKind::SecondOperandMissing {
                operator: Operator::Add,
                cause: Box::new(ParseErrorKind::EmptyInput),
            }
        );
        assert_eq!(
            kind_of("1/0"),
            ParseErrorKind::InvalidLiteral {
                literal: "1/0".into(),
                source: ArithmeticError::DivisionByZero,
            }
        );
    }

    #[test]
    fn test_first_operand_errors_propagate_unchanged() {
        assert_eq!(
            kind_of("+ @ 1"),
            ParseErrorKind::UnrecognizedOperator("@ 1".into())
        );
    }

    #[test]
    fn test_second_operand_failure_keeps_cause() {
        assert_eq!(
            kind_of("* 2 x"),
            ParseErrorKind::SecondOperandMissing {
                operator: Operator::Mul,
                cause: Box::new(ParseErrorKind::UnrecognizedOperator("x".into())),
            }
        );
    }

    #[test]
    fn test_error_reports_offset_and_input() {
        let err = parse::<Rational>("+ 1 ?").unwrap_err();
        assert_eq!(err.offset, 4);
        assert_eq!(err.input, "+ 1 ?");
        assert_eq!(
            err.to_string(),
            "cannot parse '+ 1 ?' at offset 4: second operand missing for '+'"
        );
    }

    #[test]
    fn test_nesting_limit() {
        let options = ParseOptions {
            max_depth: 2,
            ..ParseOptions::default()
        };
        let ok: Rc<Node> = parse_with("-- + 1 2", &options).unwrap();
        assert_eq!(ok.depth(), 2);

        let err = parse_with::<Rational>("-- -- -- 1", &options).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::TooDeep(2));
        assert_eq!(err.offset, 6);

        // Not reported as a missing second operand
        let err = parse_with::<Rational>("+ 1 -- -- 2", &options).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::TooDeep(2));
        assert_eq!(err.offset, 7);
    }

    #[test]
    fn test_default_nesting_limit() {
        let deep = "-- ".repeat(DEFAULT_MAX_DEPTH) + "1";
        let node: Rc<Node> = p(&deep);
        assert_eq!(node.depth(), DEFAULT_MAX_DEPTH);

        let too_deep = "-- ".repeat(1000) + "1";
        assert_eq!(kind_of(&too_deep), ParseErrorKind::TooDeep(DEFAULT_MAX_DEPTH));
        assert!(matches!(
            parse_prefix::<Rational>(&too_deep).unwrap_err().kind,
            ParseErrorKind::TooDeep(DEFAULT_MAX_DEPTH)
        ));
    }
}
