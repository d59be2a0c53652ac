//! # Parsing expressions and comparisons
//!
//! Reads the tokens of a single line into its surface form. No meaning is attached to the
//! operators here, a strict inequality is read just like any other.
use std::ops::Neg;

use num_traits::One;

use crate::data::surface::{Comparison, Expression, Term};
use crate::io::alp::token::Token;
use crate::io::error::{Parse as ParseError, ParseResult};
use crate::io::number::Parse;

/// Read an expression: a sum of terms, each an optionally scaled variable.
///
/// The first term may be preceded by a sign, the others must be. A subtracted term is stored as a
/// scaled term with a negated coefficient.
///
/// # Errors
///
/// If the tokens are empty, a value appears without a variable, or signs and terms don't
/// alternate.
pub fn parse_expression<F: Parse + One + Neg<Output = F>>(tokens: &[Token]) -> ParseResult<Expression<F>> {
    let mut terms = Vec::new();

    let mut rest = tokens;
    loop {
        let (negative, after_sign) = match rest {
            [Token::Minus, tail @ ..] => (true, tail),
            [Token::Plus, tail @ ..] => (false, tail),
            _ if terms.is_empty() => (false, rest),
            [token, ..] => return Err(ParseError::new(format!(
                "Expected \"+\" or \"-\" between terms, found {:?}", token,
            ))),
            [] => unreachable!("loop ends when no tokens are left"),
        };

        let (term, tail) = match after_sign {
            [Token::Number(value), Token::Times, Token::Identifier(variable), tail @ ..]
            | [Token::Number(value), Token::Identifier(variable), tail @ ..] => {
                (Term::Scaled(parse_number(value, negative)?, variable.to_string()), tail)
            },
            [Token::Identifier(variable), tail @ ..] => {
                let term = if negative {
                    Term::Scaled(-F::one(), variable.to_string())
                } else {
                    Term::Variable(variable.to_string())
                };
                (term, tail)
            },
            [Token::Number(value)] | [Token::Number(value), Token::Plus | Token::Minus, ..] => {
                return Err(ParseError::new(format!(
                    "Value \"{}\" is not multiplied with a variable, constants are not supported", value,
                )));
            },
            [] => return Err(ParseError::new("Expected a term")),
            [token, ..] => return Err(ParseError::new(format!(
                "Expected a variable, optionally preceded by a coefficient, found {:?}", token,
            ))),
        };

        terms.push(term);
        rest = tail;
        if rest.is_empty() {
            break;
        }
    }

    Ok(if terms.len() == 1 {
        Expression::Term(terms.remove(0))
    } else {
        Expression::Sum(terms)
    })
}

/// Read a comparison in either of the two shapes.
///
/// With one operator, the expression comes first and the value second. With two operators, the
/// expression is in the middle and both operators are the same.
///
/// # Errors
///
/// If there is no operator or more than two, the parts around the operators are not of the
/// expected kind, or the two operators of a chained comparison differ.
pub fn parse_comparison<F: Parse + One + Neg<Output = F>>(tokens: &[Token]) -> ParseResult<Comparison<F>> {
    let operators = tokens.iter()
        .enumerate()
        .filter_map(|(index, token)| match token {
            Token::Comparator(comparator) => Some((index, *comparator)),
            _ => None,
        })
        .collect::<Vec<_>>();

    match operators[..] {
        [(index, comparator)] => {
            let (expression, value) = (&tokens[..index], &tokens[(index + 1)..]);
            if is_value(expression) && !is_value(value) {
                return Err(ParseError::new(
                    "Expected the expression before the value, write \"x >= 0\" rather than \"0 <= x\"",
                ));
            }

            Ok(Comparison::Simple {
                comparator,
                expression: parse_expression(expression)
                    .map_err(|error| error.wrap("Could not read the left hand side"))?,
                value: parse_value(value)
                    .map_err(|error| error.wrap("Could not read the right hand side"))?,
            })
        },
        [(first, comparator), (second, other)] => {
            if comparator != other {
                return Err(ParseError::new(format!(
                    "A chained comparison should use the same operator twice, found \"{}\" and \"{}\"",
                    comparator, other,
                )));
            }

            Ok(Comparison::Chained {
                comparator,
                left: parse_value(&tokens[..first])
                    .map_err(|error| error.wrap("Could not read the value on the left"))?,
                expression: parse_expression(&tokens[(first + 1)..second])
                    .map_err(|error| error.wrap("Could not read the expression in the middle"))?,
                right: parse_value(&tokens[(second + 1)..])
                    .map_err(|error| error.wrap("Could not read the value on the right"))?,
            })
        },
        [] => Err(ParseError::new("Expected a comparison operator")),
        _ => Err(ParseError::new(format!(
            "Expected at most two comparison operators, found {}", operators.len(),
        ))),
    }
}

fn is_value(tokens: &[Token]) -> bool {
    matches!(tokens, [Token::Number(_)] | [Token::Plus | Token::Minus, Token::Number(_)])
}

fn parse_value<F: Parse>(tokens: &[Token]) -> ParseResult<F> {
    match tokens {
        [Token::Number(value)] | [Token::Plus, Token::Number(value)] => parse_number(value, false),
        [Token::Minus, Token::Number(value)] => parse_number(value, true),
        [] => Err(ParseError::new("Expected a value")),
        _ => Err(ParseError::new(format!("Expected a single value, found {} tokens", tokens.len()))),
    }
}

fn parse_number<F: Parse>(value: &str, negative: bool) -> ParseResult<F> {
    if negative {
        F::parse(&format!("-{}", value))
    } else {
        F::parse(value)
    }
}
