//! # Error reporting for reading and writing of linear program files
//!
//! A collection of enums and structures describing any problems encountered during reading,
//! parsing and compiling.
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::io;

use crate::compile::error::Compile;

/// Shorthand for results of parsing steps.
pub type ParseResult<T> = Result<T, Parse>;

/// An `Import` error is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum Import {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into a linear program.
    ///
    /// # Note
    ///
    /// If the linear program can't be compiled, that will not be represented with this error. This
    /// variant should only be created for syntactically incorrect files.
    Parse(Parse),
    /// A problem that was read could not be compiled.
    ///
    /// # Note
    ///
    /// Neither `import` nor `export` compiles, so this variant is never returned by them. It exists
    /// so that a caller combining `io::import` and `compile::compile` can use `?` on both into one
    /// error type.
    Compile(Compile),
}

impl Display for Import {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Import::FileExtension(message) => f.write_str(message),
            Import::IO(error) => error.fmt(f),
            Import::Parse(error) => error.fmt(f),
            Import::Compile(error) => error.fmt(f),
        }
    }
}

impl Error for Import {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Import::FileExtension(_) => None,
            Import::IO(error) => Some(error),
            Import::Parse(error) => Some(error),
            Import::Compile(error) => Some(error),
        }
    }
}

impl From<Parse> for Import {
    fn from(error: Parse) -> Self {
        Import::Parse(error)
    }
}

impl From<Compile> for Import {
    fn from(error: Compile) -> Self {
        Import::Compile(error)
    }
}

impl From<io::Error> for Import {
    fn from(error: io::Error) -> Self {
        Import::IO(error)
    }
}

/// A `Parse` error represents all errors encountered during parsing.
///
/// It may recursively hold more `Parse` errors to provide more detail. Somewhere in this chain,
/// there may be a file location containing a line number and line, at which the error was caused.
#[derive(Debug)]
pub struct Parse {
    description: String,
    location: Option<(usize, String)>,
    source: Option<Source>,
}

/// Describes the cause of a `Parse` error.
///
/// It can be either another `Parse` error with its own description and optionally, a cause, or an
/// error from outside this crate.
#[derive(Debug)]
enum Source {
    Parse(Box<Parse>),
    Other(Box<dyn Error + Send + Sync>),
}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk, counting from 1. It contains a reference to the line itself.
pub type FileLocation<'a> = (usize, &'a str);

impl Parse {
    /// Create a new `Parse` error with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), location: None, source: None }
    }

    /// Create a new `Parse` error with a file location as a cause.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A reference to a line number and line that caused the error.
    pub fn with_file_location(description: impl Into<String>, file_location: FileLocation) -> Self {
        Self::new(description).at(file_location)
    }

    /// Attach the line that caused this error.
    pub fn at(mut self, file_location: FileLocation) -> Self {
        let (line_number, line) = file_location;
        self.location = Some((line_number, line.to_string()));
        self
    }

    /// Wrap a new `Parse` error around this one.
    ///
    /// # Arguments
    ///
    /// * `description`: What went wrong one level higher.
    pub fn wrap(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            location: None,
            source: Some(Source::Parse(Box::new(self))),
        }
    }

    /// Wrap a new `Parse` error around an error from outside this crate.
    pub fn wrap_other(source: impl Error + Send + Sync + 'static, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            location: None,
            source: Some(Source::Other(Box::new(source))),
        }
    }

    /// The line at which the error was caused, if it is known.
    pub fn line_number(&self) -> Option<usize> {
        match (&self.location, &self.source) {
            (Some((line_number, _)), _) => Some(*line_number),
            (None, Some(Source::Parse(error))) => error.line_number(),
            (None, _) => None,
        }
    }

    /// Get all errors in the chain, leading up to this one.
    fn chain_description(&self) -> Vec<String> {
        let mut descriptions = vec![self.description.clone()];

        if let Some((line_number, line)) = &self.location {
            descriptions.push(format!("\tCaused at line\t{}:\t{}", line_number, line));
        }
        match &self.source {
            Some(Source::Parse(error)) => descriptions.append(&mut error.chain_description()),
            Some(Source::Other(error)) => descriptions.push(error.to_string()),
            None => {},
        }

        descriptions
    }
}

impl Display for Parse {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ParseError: {}", self.chain_description().join("\n"))
    }
}

impl Error for Parse {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(Source::Parse(error)) => Some(error.as_ref()),
            Some(Source::Other(error)) => Some(error.as_ref()),
            None => None,
        }
    }
}

#[cfg(test)]
mod test {
    use std::error::Error;

    use crate::compile::error::{Compile, Malformed};
    use crate::io::error::{Import, Parse};

    #[test]
    fn chain() {
        let error = Parse::with_file_location("Unexpected token", (3, "x + + y <= 1"))
            .wrap("Could not read constraint");

        assert_eq!(error.line_number(), Some(3));
        assert_eq!(
            error.to_string(),
            "ParseError: Could not read constraint\nUnexpected token\n\tCaused at line\t3:\tx + + y <= 1",
        );

        let error = Parse::new("Expected a value").wrap("Could not read bound").at((7, "x >= y"));
        assert_eq!(error.line_number(), Some(7));
        assert_eq!(
            error.to_string(),
            "ParseError: Could not read bound\n\tCaused at line\t7:\tx >= y\nExpected a value",
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn other() {
        let error = Parse::wrap_other("1.2.3".parse::<f64>().unwrap_err(), "Could not parse number");
        assert_eq!(error.line_number(), None);
        assert!(error.to_string().starts_with("ParseError: Could not parse number\n"));
    }

    #[test]
    fn import_from() {
        let error = Import::from(Compile::from(Malformed::DuplicateBound("x".to_string())));
        assert!(matches!(error, Import::Compile(_)));
        assert!(error.source().is_some());
    }
}
