//! # Compilation configuration

/// Default prefix of synthesized row names.
pub const DEFAULT_ROW_NAME_PREFIX: &str = "R";

/// Configuration options for compilation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompileOptions {
    /// Prefix of the names that are synthesized for rows that are not a single variable.
    ///
    /// Names are this prefix followed by a counter starting at 1.
    pub row_name_prefix: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            row_name_prefix: DEFAULT_ROW_NAME_PREFIX.to_string(),
        }
    }
}

impl CompileOptions {
    /// Create a new configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix of synthesized row names.
    pub fn with_row_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.row_name_prefix = prefix.into();
        self
    }
}
