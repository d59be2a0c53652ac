//! # Compiling linear programs
//!
//! Turns a `Problem` in its surface form into a `LinearProgramModel`. The steps are:
//!
//! * Normalize the objective. Its variables, in order, determine the columns.
//! * Resolve each constraint into a row and each bound into a column bound.
//! * Look up the column of every term of every constraint, creating the sparse matrix.
//! * Create the row and column metadata, naming rows that aren't a single variable.
//!
//! Whether a comparison is a row or a column bound is determined only by the list it was given in.
use enum_map::EnumMap;
use itertools::Itertools;
use tracing::{debug, trace};

use crate::compile::error::{Compile, CompileResult, Malformed};
use crate::compile::materialize::{materialize_column, materialize_row, SyntheticNames};
use crate::compile::normalize::normalize;
use crate::compile::options::CompileOptions;
use crate::compile::ordering::ColumnIndex;
use crate::compile::resolve::resolve;
use crate::data::linear_program::elements::{BoundKind, BoundTriple};
use crate::data::linear_program::model::{LinearProgramModel, MatrixEntry};
use crate::data::number_types::traits::Coefficient;
use crate::data::surface::{Comparison, Problem};

pub mod error;
pub mod materialize;
pub mod normalize;
pub mod options;
pub mod ordering;
pub mod resolve;

/// Compile a linear program with the default options.
///
/// # Errors
///
/// `InvalidComparator` if any constraint or bound uses an operator that can't be used in its
/// shape. `MalformedExpression` if an expression doesn't fit where it is used, such as a
/// constraint on a variable that is not in the objective.
pub fn compile<F: Coefficient>(problem: &Problem<F>) -> CompileResult<LinearProgramModel<F>> {
    compile_with(problem, &CompileOptions::default())
}

/// Compile a linear program.
///
/// # Arguments
///
/// * `problem`: Objective, constraints and bounds in their surface form.
/// * `options`: Configuration.
///
/// # Return value
///
/// A model with one row per constraint, in the order of the constraints, and one column per
/// variable of the objective, in the order of the objective.
///
/// # Errors
///
/// See `compile`. The first error found aborts compilation.
pub fn compile_with<F: Coefficient>(
    problem: &Problem<F>,
    options: &CompileOptions,
) -> CompileResult<LinearProgramModel<F>> {
    let objective = normalize(&problem.objective);
    let column_index = ColumnIndex::from_objective(&objective)?;

    let constraints = problem.constraints.iter()
        .map(resolve)
        .collect::<Result<Vec<_>, _>>()?;
    let bounds = collect_bounds(&problem.bounds, &column_index)?;

    let entries = compute_entries(&constraints, &column_index)?;

    let mut names = SyntheticNames::new(&options.row_name_prefix, &column_index);
    let rows = constraints.into_iter()
        .map(|triple| materialize_row(triple, &mut names))
        .collect::<Vec<_>>();
    let columns = column_index.names().iter()
        .zip(bounds)
        .map(|(variable, bound)| materialize_column(variable, bound))
        .collect::<Result<Vec<_>, _>>()?;

    // The objective's own order is the column order.
    let objective = objective.into_iter()
        .map(|term| term.coefficient)
        .collect::<Vec<_>>();

    let model = LinearProgramModel {
        rows,
        columns,
        entries,
        objective,
        direction: problem.sense.into(),
    };
    log_summary(&model);

    Ok(model)
}

impl<F: Coefficient> TryFrom<&Problem<F>> for LinearProgramModel<F> {
    type Error = Compile;

    /// Compile with the default options.
    fn try_from(problem: &Problem<F>) -> Result<Self, Self::Error> {
        compile(problem)
    }
}

/// Resolve the bounds and assign them to their columns.
///
/// # Arguments
///
/// * `bounds`: Comparisons on single variables.
/// * `column_index`: Columns that can be bounded.
///
/// # Return value
///
/// For each column, in column order, the bound on that column, if one was given.
///
/// # Errors
///
/// If a bound uses an invalid comparator, is on an expression that is not a single variable, is
/// on an unknown variable, or if a variable is bounded twice.
fn collect_bounds<F: Coefficient>(
    bounds: &[Comparison<F>],
    column_index: &ColumnIndex,
) -> CompileResult<Vec<Option<BoundTriple<F>>>> {
    let mut per_column = vec![None; column_index.len()];

    for bound in bounds {
        let triple = resolve(bound)?;
        let variable = match triple.single_term() {
            Some(term) => term.variable.as_str(),
            None => {
                let nr_terms = triple.expression.len();
                return Err(Malformed::BoundOnExpression { nr_terms }.into());
            },
        };
        let j = column_index.get(variable)?;
        if per_column[j].is_some() {
            return Err(Malformed::DuplicateBound(variable.to_string()).into());
        }
        per_column[j] = Some(triple);
    }

    Ok(per_column)
}

/// Build the sparse coefficient matrix.
///
/// # Return value
///
/// One entry per term of each constraint, with 1-based row and column indices. Sorted by row, and
/// within a row in the order the terms were written.
///
/// # Errors
///
/// If a constraint contains a variable that has no column.
fn compute_entries<F: Coefficient>(
    constraints: &[BoundTriple<F>],
    column_index: &ColumnIndex,
) -> CompileResult<Vec<MatrixEntry<F>>> {
    let mut entries = Vec::with_capacity(constraints.iter().map(|triple| triple.expression.len()).sum());

    for (i, triple) in constraints.iter().enumerate() {
        for term in &triple.expression {
            let j = column_index.get(&term.variable)?;
            entries.push(MatrixEntry {
                row: i + 1,
                column: j + 1,
                coefficient: term.coefficient.clone(),
            });
        }
        trace!(
            component = "compile",
            operation = "compute_entries",
            status = "success",
            row = i + 1,
            nr_terms = triple.expression.len(),
            "Resolved row"
        );
    }

    Ok(entries)
}

fn log_summary<F>(model: &LinearProgramModel<F>) {
    let tally = |counts: EnumMap<BoundKind, usize>| {
        counts.iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(kind, count)| format!("{}={}", kind, count))
            .join(",")
    };
    let (row_kinds, column_kinds) = model.kind_counts();
    let (row_kinds, column_kinds) = (tally(row_kinds), tally(column_kinds));

    debug!(
        component = "compile",
        operation = "compile",
        status = "success",
        direction = model.direction.as_str(),
        nr_rows = model.nr_rows(),
        nr_columns = model.nr_columns(),
        nr_entries = model.entries.len(),
        row_kinds = row_kinds.as_str(),
        column_kinds = column_kinds.as_str(),
        "Compiled linear program"
    );
}
