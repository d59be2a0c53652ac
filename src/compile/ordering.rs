//! # Column ordering
//!
//! Variables are numbered in the order in which they first appear in the objective. That order is
//! computed once per compilation and referenced by every later step.
use std::collections::HashMap;

use crate::compile::error::{CompileResult, Malformed};
use crate::data::linear_program::elements::Expression;

/// Ordered map from variable name to its (0-based) column index.
#[derive(Debug, Default)]
pub struct ColumnIndex {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Number the variables of the normalized objective.
    ///
    /// # Errors
    ///
    /// If a variable appears more than once in the objective.
    pub fn from_objective<F>(objective: &Expression<F>) -> CompileResult<Self> {
        let mut names = Vec::with_capacity(objective.len());
        let mut index = HashMap::with_capacity(objective.len());

        for term in objective {
            if index.insert(term.variable.clone(), names.len()).is_some() {
                return Err(Malformed::DuplicateObjectiveVariable(term.variable.clone()).into());
            }
            names.push(term.variable.clone());
        }

        Ok(Self { names, index })
    }

    /// Column index of a variable.
    ///
    /// # Errors
    ///
    /// If the variable is not in the objective.
    pub fn get(&self, variable: &str) -> CompileResult<usize> {
        self.index.get(variable)
            .copied()
            .ok_or_else(|| Malformed::UnknownVariable(variable.to_string()).into())
    }

    /// Whether the variable has a column.
    pub fn contains(&self, variable: &str) -> bool {
        self.index.contains_key(variable)
    }

    /// Variable names in column order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
