//! # Exporting MPS files
//!
//! Writing of compiled models in the free [MPS format](https://en.wikipedia.org/wiki/MPS_(format)),
//! which nearly every solver can read.
//!
//! MPS needs unique row names. A compiled model may have two rows named after the same variable,
//! the second and later of those get the row number appended. The cost row is called `COST`,
//! unless a row already has that name.
//!
//! A double bounded row with its lower bound above its upper bound can't be expressed with a
//! range, so it is written without one, as a "less than" row.
//!
//! Values are written with their `Display` implementation. For a floating point model, that is a
//! decimal number. Exact rational types may display a fraction, which few readers accept.
use std::collections::HashSet;
use std::fmt;
use std::fmt::{Display, Formatter};

use tracing::{debug, warn};

use crate::data::linear_program::elements::BoundKind;
use crate::data::linear_program::model::{BoundSpec, Direction, LinearProgramModel};
use crate::data::number_types::traits::Coefficient;
use crate::io::mps::token::{
    BOUND_NAME, BOUNDS, COLUMNS, COST_ROW_NAME, END_OF_DATA, MAXIMIZE, NAME, OBJECTIVE_SENSE, RANGE_NAME,
    RANGES, RHS, ROWS,
};

pub mod token;

/// Write a model as a free MPS file.
///
/// # Arguments
///
/// * `model`: Compiled linear program.
/// * `name`: Name of the program, written on the first line.
///
/// # Return value
///
/// The entire file contents.
pub fn write<F: Coefficient>(model: &LinearProgramModel<F>, name: &str) -> String {
    let (cost_row_name, row_names) = unique_row_names(&model.rows);
    let text = Mps { model, name, cost_row_name, row_names }.to_string();

    debug!(
        component = "io",
        operation = "write_mps",
        status = "ok",
        program = name,
        nr_rows = model.nr_rows(),
        nr_columns = model.nr_columns(),
        nr_entries = model.entries.len(),
        "Wrote MPS"
    );

    text
}

/// Borrowed model with everything needed to write it.
struct Mps<'a, F> {
    model: &'a LinearProgramModel<F>,
    name: &'a str,
    cost_row_name: String,
    row_names: Vec<String>,
}

/// Choose a cost row name and make the row names unique.
///
/// # Return value
///
/// The name of the cost row, and one name per row, in order.
fn unique_row_names<F>(rows: &[BoundSpec<F>]) -> (String, Vec<String>) {
    let mut cost_row_name = COST_ROW_NAME.to_string();
    while rows.iter().any(|row| row.name == cost_row_name) {
        cost_row_name.push('_');
    }

    let mut used = HashSet::with_capacity(rows.len() + 1);
    used.insert(cost_row_name.clone());
    let row_names = rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let mut name = row.name.clone();
            while used.contains(&name) {
                name = format!("{}_{}", name, i + 1);
            }
            used.insert(name.clone());
            name
        })
        .collect();

    (cost_row_name, row_names)
}

/// Type letter of a row in the `ROWS` section.
///
/// A double bounded row is a "less than" row with a range.
fn row_type(kind: BoundKind) -> &'static str {
    match kind {
        BoundKind::Free => "N",
        BoundKind::Lower => "G",
        BoundKind::Upper | BoundKind::Double => "L",
        BoundKind::Fixed => "E",
    }
}

/// Right hand side value of a row, if there is one.
fn rhs<F>(row: &BoundSpec<F>) -> Option<&F> {
    match row.kind {
        BoundKind::Free => None,
        BoundKind::Lower | BoundKind::Fixed => Some(&row.lower),
        BoundKind::Upper | BoundKind::Double => Some(&row.upper),
    }
}

fn write_line(f: &mut Formatter<'_>, first: &str, second: &str, value: impl Display) -> fmt::Result {
    writeln!(f, "    {:<9} {:<9} {}", first, second, value)
}

fn write_bound(f: &mut Formatter<'_>, bound_type: &str, column: &str, value: Option<&dyn Display>) -> fmt::Result {
    match value {
        Some(value) => writeln!(f, " {} {:<9} {:<9} {}", bound_type, BOUND_NAME, column, value),
        None => writeln!(f, " {} {:<9} {}", bound_type, BOUND_NAME, column),
    }
}

impl<F: Coefficient> Display for Mps<'_, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let model = self.model;

        writeln!(f, "{:<14}{}", NAME, self.name)?;
        if model.direction == Direction::Max {
            writeln!(f, "{}", OBJECTIVE_SENSE)?;
            writeln!(f, "    {}", MAXIMIZE)?;
        }

        writeln!(f, "{}", ROWS)?;
        writeln!(f, " N  {}", self.cost_row_name)?;
        for (row, name) in model.rows.iter().zip(&self.row_names) {
            writeln!(f, " {}  {}", row_type(row.kind), name)?;
        }

        writeln!(f, "{}", COLUMNS)?;
        for ((column, cost), entries) in model.columns.iter().zip(&model.objective).zip(model.column_major()) {
            write_line(f, &column.name, &self.cost_row_name, cost)?;
            for (row, coefficient) in entries {
                write_line(f, &column.name, &self.row_names[row - 1], coefficient)?;
            }
        }

        let rhs_values = model.rows.iter()
            .zip(&self.row_names)
            .filter_map(|(row, name)| rhs(row).filter(|value| !value.is_zero()).map(|value| (name, value)))
            .collect::<Vec<_>>();
        if !rhs_values.is_empty() {
            writeln!(f, "{}", RHS)?;
            for (name, value) in rhs_values {
                write_line(f, RHS, name, value)?;
            }
        }

        let ranges = model.rows.iter()
            .zip(&self.row_names)
            .filter(|(row, _)| row.kind == BoundKind::Double)
            .filter(|(row, name)| {
                let valid = row.lower <= row.upper;
                if !valid {
                    warn!(
                        component = "io",
                        operation = "write_mps",
                        status = "infeasible",
                        row = name.as_str(),
                        lower = %row.lower,
                        upper = %row.upper,
                        "Row has its lower bound above its upper bound, writing it without a range"
                    );
                }
                valid
            })
            .collect::<Vec<_>>();
        if !ranges.is_empty() {
            writeln!(f, "{}", RANGES)?;
            for (row, name) in ranges {
                write_line(f, RANGE_NAME, name, row.upper.clone() - row.lower.clone())?;
            }
        }

        // The MPS default for a column is a lower bound of zero, which needs no line.
        let needs_bound = |column: &&BoundSpec<F>| {
            !(column.kind == BoundKind::Lower && column.lower.is_zero())
        };
        if model.columns.iter().any(|column| needs_bound(&column)) {
            writeln!(f, "{}", BOUNDS)?;
            for column in model.columns.iter().filter(needs_bound) {
                let name = column.name.as_str();
                match column.kind {
                    BoundKind::Free => write_bound(f, "FR", name, None)?,
                    BoundKind::Lower => write_bound(f, "LO", name, Some(&column.lower))?,
                    BoundKind::Upper => {
                        write_bound(f, "MI", name, None)?;
                        write_bound(f, "UP", name, Some(&column.upper))?;
                    },
                    BoundKind::Double => {
                        write_bound(f, "LO", name, Some(&column.lower))?;
                        write_bound(f, "UP", name, Some(&column.upper))?;
                    },
                    BoundKind::Fixed => write_bound(f, "FX", name, Some(&column.lower))?,
                }
            }
        }

        writeln!(f, "{}", END_OF_DATA)
    }
}

#[cfg(test)]
mod test {
    use crate::compile::compile;
    use crate::data::linear_program::elements::BoundKind;
    use crate::data::linear_program::model::BoundSpec;
    use crate::io::alp;
    use crate::io::mps::{unique_row_names, write};

    fn spec(name: &str) -> BoundSpec<f64> {
        BoundSpec { name: name.to_string(), kind: BoundKind::Free, lower: 0_f64, upper: 0_f64 }
    }

    #[test]
    fn row_names() {
        let rows = vec![spec("x"), spec("COST"), spec("x"), spec("R1"), spec("x")];
        let (cost, names) = unique_row_names(&rows);

        assert_eq!(cost, "COST_");
        assert_eq!(names, ["x", "COST", "x_3", "R1", "x_5"]);
    }

    #[test]
    fn mixed() {
        let program = "\
minimize x + 2 y + 3 z + w
subject to
    x <= 4
    x >= 1
    -1 <= y - z <= 2
    y + z + w = 3
bounds
    x <= 5
    1 <= y <= 2
    z = 0.5
    w >= 2
";
        let problem = alp::parse::<f64>(program).unwrap();
        let model = compile(&problem).unwrap();

        assert_eq!(
            write(&model, "mixed"),
            [
                "NAME          mixed",
                "ROWS",
                " N  COST",
                " L  x",
                " G  x_2",
                " L  R1",
                " E  R2",
                "COLUMNS",
                "    x         COST      1",
                "    x         x         1",
                "    x         x_2       1",
                "    y         COST      2",
                "    y         R1        1",
                "    y         R2        1",
                "    z         COST      3",
                "    z         R1        -1",
                "    z         R2        1",
                "    w         COST      1",
                "    w         R2        1",
                "RHS",
                "    RHS       x         4",
                "    RHS       x_2       1",
                "    RHS       R1        2",
                "    RHS       R2        3",
                "RANGES",
                "    RNG       R1        3",
                "BOUNDS",
                " MI BND       x",
                " UP BND       x         5",
                " LO BND       y         1",
                " UP BND       y         2",
                " FX BND       z         0.5",
                " LO BND       w         2",
                "ENDATA",
            ].iter().map(|line| format!("{}\n", line)).collect::<String>(),
        );
    }

    #[test]
    fn inverted_range() {
        let program = "min x + y\nsubject to\n    5 <= x + y <= 1\n    0 <= x - y <= 2\n";
        let model = compile(&alp::parse::<f64>(program).unwrap()).unwrap();
        assert_eq!(model.rows[0].kind, BoundKind::Double);

        let text = write(&model, "inverted");
        assert!(text.contains(" L  R1\n L  R2\n"));
        assert!(text.contains("    RHS       R1        1\n"));
        assert!(text.contains("RANGES\n    RNG       R2        2\nBOUNDS\n"));
        assert!(!text.contains("-4"));
    }

    #[test]
    fn empty() {
        let model = compile(&alp::parse::<f64>("min x").unwrap()).unwrap();
        assert_eq!(
            write(&model, "empty"),
            "NAME          empty\nROWS\n N  COST\nCOLUMNS\n    x         COST      1\nBOUNDS\n FR BND       x\nENDATA\n",
        );
    }
}
