//! # Row and column metadata
//!
//! Turns resolved bounds into the name, kind and values that a solver needs for each row and
//! column.
use tracing::warn;

use crate::compile::error::{CompileResult, Malformed};
use crate::compile::ordering::ColumnIndex;
use crate::data::linear_program::elements::{BoundKind, BoundTriple};
use crate::data::linear_program::model::BoundSpec;
use crate::data::number_types::traits::Coefficient;

/// Generator of row names, unique within a single compilation.
///
/// Yields the prefix followed by a counter, skipping names that are already used by a variable.
#[derive(Debug)]
pub struct SyntheticNames<'a> {
    prefix: &'a str,
    reserved: &'a ColumnIndex,
    counter: usize,
}

impl<'a> SyntheticNames<'a> {
    /// Create a new generator, the first name will have counter value 1.
    pub fn new(prefix: &'a str, reserved: &'a ColumnIndex) -> Self {
        Self { prefix, reserved, counter: 0 }
    }
}

impl Iterator for SyntheticNames<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.counter += 1;
            let name = format!("{}{}", self.prefix, self.counter);
            if !self.reserved.contains(&name) {
                break Some(name);
            }
        }
    }
}

/// Create the metadata of a row.
///
/// # Arguments
///
/// * `triple`: Resolved constraint.
/// * `names`: Source of names for rows that are not a single variable with coefficient one.
///
/// # Return value
///
/// The row, named after its variable if the expression is a bare variable. The values are stored
/// as they were written, absent values are zero.
pub fn materialize_row<F: Coefficient>(
    triple: BoundTriple<F>,
    names: &mut impl Iterator<Item = String>,
) -> BoundSpec<F> {
    let name = match triple.single_term() {
        Some(term) if term.coefficient == F::one() => term.variable.clone(),
        _ => names.next().unwrap_or_default(),
    };

    into_spec(name, triple.lower, triple.upper)
}

/// Create the metadata of a column.
///
/// # Arguments
///
/// * `variable`: Name of the column.
/// * `triple`: Resolved bound on the variable, if there is one. Its expression should be the
/// variable, possibly scaled.
///
/// # Return value
///
/// A free column if there is no bound. Otherwise, the bound values are divided by the coefficient
/// of the variable, such that they bound the variable itself. A negative coefficient swaps the
/// lower and upper bound.
///
/// # Errors
///
/// If the expression is not a single term, or its coefficient is zero.
pub fn materialize_column<F: Coefficient>(
    variable: &str,
    triple: Option<BoundTriple<F>>,
) -> CompileResult<BoundSpec<F>> {
    let Some(triple) = triple else {
        return Ok(into_spec(variable.to_string(), None, None));
    };
    let Some(term) = triple.single_term() else {
        return Err(Malformed::BoundOnExpression { nr_terms: triple.expression.len() }.into());
    };
    debug_assert_eq!(term.variable, variable);

    let coefficient = term.coefficient.clone();
    let (lower, upper) = if coefficient == F::one() {
        (triple.lower, triple.upper)
    } else if coefficient.is_zero() {
        return Err(Malformed::ZeroBoundCoefficient(variable.to_string()).into());
    } else {
        let scale = |value: F| value / coefficient.clone();
        let (lower, upper) = (triple.lower.map(scale), triple.upper.map(scale));
        if coefficient < F::zero() {
            (upper, lower)
        } else {
            (lower, upper)
        }
    };

    Ok(into_spec(variable.to_string(), lower, upper))
}

fn into_spec<F: Coefficient>(name: String, lower: Option<F>, upper: Option<F>) -> BoundSpec<F> {
    let kind = BoundKind::classify(lower.as_ref(), upper.as_ref());
    if let (Some(lower), Some(upper)) = (&lower, &upper) {
        if lower > upper {
            warn!(
                component = "compile",
                operation = "materialize",
                status = "infeasible",
                name = name.as_str(),
                lower = %lower,
                upper = %upper,
                "Lower bound exceeds upper bound"
            );
        }
    }

    BoundSpec {
        name,
        kind,
        lower: lower.unwrap_or_else(F::zero),
        upper: upper.unwrap_or_else(F::zero),
    }
}

#[cfg(test)]
mod test {
    use relp_num::R64;
    use relp_num::Rational64;

    use crate::compile::error::{Compile, Malformed};
    use crate::compile::materialize::{materialize_column, materialize_row, SyntheticNames};
    use crate::compile::ordering::ColumnIndex;
    use crate::data::linear_program::elements::{BoundKind, BoundTriple, Term};
    use crate::data::linear_program::model::BoundSpec;

    fn triple(expression: Vec<(i64, &str)>, lower: Option<i64>, upper: Option<i64>) -> BoundTriple<Rational64> {
        BoundTriple {
            expression: expression.into_iter().map(|(c, v)| Term::new(R64!(c), v)).collect(),
            lower: lower.map(|v| R64!(v)),
            upper: upper.map(|v| R64!(v)),
        }
    }

    fn spec(name: &str, kind: BoundKind, lower: Rational64, upper: Rational64) -> BoundSpec<Rational64> {
        BoundSpec { name: name.to_string(), kind, lower, upper }
    }

    #[test]
    fn synthetic_names_skip_variables() {
        let objective = vec![Term::new(1, "R2"), Term::new(1, "x")];
        let index = ColumnIndex::from_objective(&objective).unwrap();
        let names = SyntheticNames::new("R", &index).take(3).collect::<Vec<_>>();

        assert_eq!(names, ["R1", "R3", "R4"]);
    }

    #[test]
    fn row_named_after_bare_variable() {
        let index = ColumnIndex::default();
        let mut names = SyntheticNames::new("R", &index);

        let row = materialize_row(triple(vec![(1, "x")], None, Some(5)), &mut names);
        assert_eq!(row, spec("x", BoundKind::Upper, R64!(0), R64!(5)));
    }

    #[test]
    fn row_with_synthetic_name() {
        let index = ColumnIndex::default();
        let mut names = SyntheticNames::new("R", &index);

        let row = materialize_row(triple(vec![(1, "x"), (1, "y")], None, Some(10)), &mut names);
        assert_eq!(row, spec("R1", BoundKind::Upper, R64!(0), R64!(10)));
        let row = materialize_row(triple(vec![(1, "x"), (-1, "y")], Some(1), Some(1)), &mut names);
        assert_eq!(row, spec("R2", BoundKind::Fixed, R64!(1), R64!(1)));
    }

    /// A row is never rescaled, its coefficient stays in the matrix.
    #[test]
    fn scaled_single_variable_row() {
        let index = ColumnIndex::default();
        let mut names = SyntheticNames::new("R", &index);

        let row = materialize_row(triple(vec![(2, "x")], None, Some(20)), &mut names);
        assert_eq!(row, spec("R1", BoundKind::Upper, R64!(0), R64!(20)));
    }

    #[test]
    fn free_column() {
        let column = materialize_column::<Rational64>("y", None).unwrap();
        assert_eq!(column, spec("y", BoundKind::Free, R64!(0), R64!(0)));
    }

    #[test]
    fn column_bound() {
        let column = materialize_column("x", Some(triple(vec![(1, "x")], Some(0), None))).unwrap();
        assert_eq!(column, spec("x", BoundKind::Lower, R64!(0), R64!(0)));

        let column = materialize_column("x", Some(triple(vec![(1, "x")], Some(2), Some(8)))).unwrap();
        assert_eq!(column, spec("x", BoundKind::Double, R64!(2), R64!(8)));
    }

    #[test]
    fn scaled_column_bound() {
        let column = materialize_column("x", Some(triple(vec![(2, "x")], None, Some(20)))).unwrap();
        assert_eq!(column, spec("x", BoundKind::Upper, R64!(0), R64!(10)));

        let column = materialize_column("x", Some(triple(vec![(4, "x")], Some(1), Some(3)))).unwrap();
        assert_eq!(column, spec("x", BoundKind::Double, R64!(1) / R64!(4), R64!(3) / R64!(4)));
    }

    #[test]
    fn negatively_scaled_column_bound() {
        // -2 x <= 20 means x >= -10
        let column = materialize_column("x", Some(triple(vec![(-2, "x")], None, Some(20)))).unwrap();
        assert_eq!(column, spec("x", BoundKind::Lower, R64!(-10), R64!(0)));
    }

    #[test]
    fn zero_coefficient() {
        assert_eq!(
            materialize_column("x", Some(triple(vec![(0, "x")], None, Some(20)))),
            Err(Compile::MalformedExpression(Malformed::ZeroBoundCoefficient("x".to_string()))),
        );
    }

    #[test]
    fn bound_on_expression() {
        assert_eq!(
            materialize_column("x", Some(triple(vec![(1, "x"), (1, "y")], None, Some(20)))),
            Err(Compile::MalformedExpression(Malformed::BoundOnExpression { nr_terms: 2 })),
        );
    }

    #[test]
    fn inverted_bounds_are_kept() {
        let column = materialize_column("x", Some(triple(vec![(1, "x")], Some(8), Some(2)))).unwrap();
        assert_eq!(column, spec("x", BoundKind::Double, R64!(8), R64!(2)));
    }
}
