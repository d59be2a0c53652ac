//! # Reading and writing of linear programs
//!
//! Linear programs are read in their algebraic form from `.alp` files and, once compiled, written
//! to `.mps` files.
use std::fs;
use std::ops::Neg;
use std::path::Path;

use num_traits::One;
use tracing::debug;

use crate::data::linear_program::model::LinearProgramModel;
use crate::data::number_types::traits::Coefficient;
use crate::data::surface::Problem;
use crate::io::error::Import;
use crate::io::number::Parse;

pub mod alp;
pub mod error;
pub mod mps;
pub mod number;

/// Import a problem from a file.
///
/// Currently only supports the algebraic (`.alp`) filetype.
///
/// # Return value
///
/// The problem in its surface form. It can be compiled with `compile::compile`.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, or the file is not
/// syntactically correct.
pub fn import<F: Parse + One + Neg<Output = F>>(file_path: &Path) -> Result<Problem<F>, Import> {
    match extension(file_path)? {
        "alp" => {},
        other => return Err(Import::FileExtension(format!(
            "Could not recognise file extension \"{}\" of file: {:?}",
            other, file_path,
        ))),
    }

    let program = fs::read_to_string(file_path)?;
    let problem = alp::parse(&program)?;
    debug!(
        component = "io",
        operation = "import",
        status = "ok",
        path = %file_path.display(),
        "Imported linear program"
    );

    Ok(problem)
}

/// Write a compiled model to a file.
///
/// Currently only supports the MPS filetype. The name of the program is the file stem.
///
/// # Errors
///
/// When the file extension is unknown or the file can't be written.
pub fn export<F: Coefficient>(model: &LinearProgramModel<F>, file_path: &Path) -> Result<(), Import> {
    let text = match extension(file_path)? {
        "mps" => {
            let name = file_path.file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default();
            mps::write(model, name)
        },
        other => return Err(Import::FileExtension(format!(
            "Could not write a model with file extension \"{}\" to file: {:?}",
            other, file_path,
        ))),
    };
    fs::write(file_path, text)?;

    debug!(
        component = "io",
        operation = "export",
        status = "ok",
        path = %file_path.display(),
        "Exported model"
    );

    Ok(())
}

fn extension(file_path: &Path) -> Result<&str, Import> {
    match file_path.extension() {
        Some(extension) => extension.to_str().ok_or_else(|| Import::FileExtension(format!(
            "Could not convert OsStr to &str, probably invalid unicode: {:?}",
            extension,
        ))),
        None => Err(Import::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path,
        ))),
    }
}
