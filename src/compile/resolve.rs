//! # Resolving comparisons
//!
//! Reads the bound values from a constraint or bound, whichever of the two shapes it was written
//! in.
use num_traits::One;

use crate::compile::error::{Compile, CompileResult, Shape};
use crate::compile::normalize::normalize;
use crate::data::linear_program::elements::BoundTriple;
use crate::data::surface::{Comparator, Comparison};

/// Resolve a comparison into an expression with a lower and an upper bound.
///
/// The simple shape `e OP v` gives:
///
/// * `=`: lower and upper bound `v`
/// * `<=`: only upper bound `v`
/// * `>=`: only lower bound `v`
///
/// The chained shape `a OP e OP b` is read from left to right, so the reading direction of `>=`
/// is reversed relative to `<=`:
///
/// * `<=`: lower bound `a`, upper bound `b`
/// * `>=`: lower bound `b`, upper bound `a`
///
/// # Errors
///
/// `InvalidComparator` for any other combination of shape and operator.
pub fn resolve<F: One + Clone>(comparison: &Comparison<F>) -> CompileResult<BoundTriple<F>> {
    let (lower, upper) = match comparison {
        Comparison::Simple { comparator, value, .. } => match comparator {
            Comparator::Equal => (Some(value.clone()), Some(value.clone())),
            Comparator::LessEqual => (None, Some(value.clone())),
            Comparator::GreaterEqual => (Some(value.clone()), None),
            Comparator::Less | Comparator::Greater | Comparator::NotEqual => {
                return Err(Compile::InvalidComparator { comparator: *comparator, shape: Shape::Simple });
            },
        },
        Comparison::Chained { comparator, left, right, .. } => match comparator {
            Comparator::LessEqual => (Some(left.clone()), Some(right.clone())),
            Comparator::GreaterEqual => (Some(right.clone()), Some(left.clone())),
            Comparator::Equal | Comparator::Less | Comparator::Greater | Comparator::NotEqual => {
                return Err(Compile::InvalidComparator { comparator: *comparator, shape: Shape::Chained });
            },
        },
    };

    Ok(BoundTriple {
        expression: normalize(comparison.expression()),
        lower,
        upper,
    })
}
