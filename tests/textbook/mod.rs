//! # Textbook problems
//!
//! Small linear programs of the kind found in introductory courses, written in the algebraic
//! format. Each is imported from disk, compiled and written back out as MPS.
use std::path::{Path, PathBuf};

use relp_num::Rational64;

use relp_dsl::compile::compile;
use relp_dsl::data::linear_program::model::LinearProgramModel;
use relp_dsl::io::import;

/// # Problems that compile and ones that don't
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().join("problem_files")
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("alp")
}

type T = Rational64;

fn model(file_name: &str) -> LinearProgramModel<T> {
    let problem = import::<T>(&get_test_file_path(file_name)).unwrap();
    compile(&problem).unwrap()
}
