//! # Compiled linear programs
//!
//! The output of compilation: row and column metadata, a sparse coefficient matrix and an
//! objective vector. All indices that are exposed are 1-based, as solver interfaces in the GLPK
//! tradition expect them.
use std::fmt;
use std::fmt::{Display, Formatter};

use enum_map::EnumMap;

use crate::data::linear_program::elements::BoundKind;
use crate::data::surface::Sense;

/// Metadata of a single row or column.
///
/// # Note
///
/// The values are always present. Whether they carry meaning is determined by `kind`: a free bound
/// has a zero in both places, a lower bound a zero in the upper place, etc. Consumers should read
/// them through `kind`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoundSpec<F> {
    /// Name of the variable, or a synthesized name for a row without one.
    pub name: String,
    #[allow(missing_docs)]
    pub kind: BoundKind,
    #[allow(missing_docs)]
    pub lower: F,
    #[allow(missing_docs)]
    pub upper: F,
}

/// A nonzero coefficient in the constraint matrix.
///
/// Both indices are 1-based.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatrixEntry<F> {
    #[allow(missing_docs)]
    pub row: usize,
    #[allow(missing_docs)]
    pub column: usize,
    #[allow(missing_docs)]
    pub coefficient: F,
}

/// Direction of optimization, in the vocabulary of the solver.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Min,
    Max,
}

impl Direction {
    /// Integer code used by GLPK style solver interfaces.
    pub fn solver_code(self) -> i32 {
        match self {
            Direction::Min => 1,
            Direction::Max => 2,
        }
    }

    /// Short name.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Min => "min",
            Direction::Max => "max",
        }
    }
}

impl From<Sense> for Direction {
    fn from(sense: Sense) -> Self {
        match sense {
            Sense::Minimize => Direction::Min,
            Sense::Maximize => Direction::Max,
        }
    }
}

/// A linear program, ready to be loaded into a solver.
///
/// Row `i` (1-based) corresponds to the `i`-th constraint as it was written, column `j` to the
/// `j`-th variable of the objective. The matrix is sparse: coefficients of variables that don't
/// appear in a constraint are not stored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinearProgramModel<F> {
    /// One entry per constraint.
    pub rows: Vec<BoundSpec<F>>,
    /// One entry per variable.
    pub columns: Vec<BoundSpec<F>>,
    /// Nonzero coefficients, sorted by row and, within a row, in the order they were written.
    pub entries: Vec<MatrixEntry<F>>,
    /// Cost coefficient for each column, in column order.
    pub objective: Vec<F>,
    #[allow(missing_docs)]
    pub direction: Direction,
}

impl<F> LinearProgramModel<F> {
    /// Number of constraints.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of variables.
    pub fn nr_columns(&self) -> usize {
        self.columns.len()
    }

    /// The entries grouped by column.
    ///
    /// # Return value
    ///
    /// For each column, in order, the `(row, coefficient)` tuples of that column sorted by row.
    /// Row indices are 1-based, like in `entries`.
    pub fn column_major(&self) -> Vec<Vec<(usize, &F)>> {
        let mut columns = vec![Vec::new(); self.nr_columns()];
        // Entries are sorted by row, so each column is filled in row order.
        for entry in &self.entries {
            debug_assert!(entry.column >= 1 && entry.column <= self.nr_columns());
            columns[entry.column - 1].push((entry.row, &entry.coefficient));
        }

        columns
    }

    /// Count how many rows and how many columns there are of each bound kind.
    ///
    /// # Return value
    ///
    /// A tuple with the row counts first and the column counts second.
    pub fn kind_counts(&self) -> (EnumMap<BoundKind, usize>, EnumMap<BoundKind, usize>) {
        let count = |specs: &[BoundSpec<F>]| {
            let mut counts: EnumMap<BoundKind, usize> = EnumMap::default();
            for spec in specs {
                counts[spec.kind] += 1;
            }
            counts
        };

        (count(&self.rows), count(&self.columns))
    }
}

impl<F: Display> Display for BoundSpec<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            BoundKind::Free => write!(f, "{} free", self.name),
            BoundKind::Lower => write!(f, "{} >= {}", self.name, self.lower),
            BoundKind::Upper => write!(f, "{} <= {}", self.name, self.upper),
            BoundKind::Double => write!(f, "{} <= {} <= {}", self.lower, self.name, self.upper),
            BoundKind::Fixed => write!(f, "{} = {}", self.name, self.lower),
        }
    }
}

impl<F: Display> Display for LinearProgramModel<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = 8;
        let separator_width = (1 + self.nr_columns()) * width + 2;

        writeln!(f, "{}", self.direction.as_str())?;
        write!(f, "{:>width$}", "", width = width)?;
        for column in &self.columns {
            write!(f, "{:^width$}", column.name, width = width)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(separator_width))?;

        write!(f, "{:>width$}", "cost", width = width)?;
        for cost in &self.objective {
            write!(f, "{:^width$}", cost.to_string(), width = width)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(separator_width))?;

        let mut entries = self.entries.iter().peekable();
        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "{:>width$}", row.name, width = width)?;
            let mut values = vec![String::new(); self.nr_columns()];
            while let Some(entry) = entries.next_if(|entry| entry.row == i + 1) {
                values[entry.column - 1] = entry.coefficient.to_string();
            }
            for value in values {
                write!(f, "{:^width$}", value, width = width)?;
            }
            writeln!(f, "  {}", row.kind)?;
        }
        writeln!(f, "{}", "-".repeat(separator_width))?;

        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        for column in &self.columns {
            writeln!(f, "{}", column)?;
        }

        Ok(())
    }
}
