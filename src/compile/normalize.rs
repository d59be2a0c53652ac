//! # Normalizing expressions
//!
//! Rewrites the different ways an expression can be written into a single list of coefficient,
//! variable pairs.
use num_traits::One;

use crate::data::linear_program::elements::{Expression, Term};
use crate::data::surface::Expression as SurfaceExpression;
use crate::data::surface::Term as SurfaceTerm;

/// Normalize an expression.
///
/// # Arguments
///
/// * `expression`: A bare variable, scaled variable or sum of those.
///
/// # Return value
///
/// One term per term written, in the same order. A bare variable gets coefficient one.
pub fn normalize<F: One + Clone>(expression: &SurfaceExpression<F>) -> Expression<F> {
    match expression {
        SurfaceExpression::Term(term) => vec![normalize_term(term)],
        SurfaceExpression::Sum(terms) => terms.iter().map(normalize_term).collect(),
    }
}

fn normalize_term<F: One + Clone>(term: &SurfaceTerm<F>) -> Term<F> {
    match term {
        SurfaceTerm::Variable(name) => Term::new(F::one(), name.as_str()),
        SurfaceTerm::Scaled(coefficient, name) => Term::new(coefficient.clone(), name.as_str()),
    }
}

#[cfg(test)]
mod test {
    use relp_num::R64;

    use crate::compile::normalize::normalize;
    use crate::data::linear_program::elements::Term;
    use crate::data::surface::Expression;
    use crate::data::surface::Term as SurfaceTerm;

    #[test]
    fn bare_variable() {
        assert_eq!(normalize(&Expression::variable("x")), vec![Term::new(R64!(1), "x")]);
    }

    #[test]
    fn scaled_variable() {
        assert_eq!(normalize(&Expression::scaled(R64!(-3) / R64!(4), "x")), vec![Term::new(R64!(-3) / R64!(4), "x")]);
        // An explicit coefficient of one is kept as it is
        assert_eq!(normalize(&Expression::scaled(R64!(1), "y")), vec![Term::new(R64!(1), "y")]);
    }

    #[test]
    fn sum() {
        let expression = Expression::Sum(vec![
            SurfaceTerm::Scaled(R64!(4), "x".to_string()),
            SurfaceTerm::Variable("z".to_string()),
            SurfaceTerm::Scaled(R64!(7), "y".to_string()),
        ]);
        assert_eq!(normalize(&expression), vec![
            Term::new(R64!(4), "x"),
            Term::new(R64!(1), "z"),
            Term::new(R64!(7), "y"),
        ]);
    }

    #[test]
    fn repeated_variable_is_not_merged() {
        let expression = Expression::Sum(vec![
            SurfaceTerm::Variable("x".to_string()),
            SurfaceTerm::Scaled(2, "x".to_string()),
        ]);
        assert_eq!(normalize(&expression), vec![Term::new(1, "x"), Term::new(2, "x")]);
    }

    #[test]
    fn empty_sum() {
        assert_eq!(normalize(&Expression::<i32>::Sum(Vec::new())), Vec::new());
    }
}
