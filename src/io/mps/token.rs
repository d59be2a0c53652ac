//! # Tokens used in MPS files

/// Should be on the start of the first line of the non comment lines.
pub const NAME: &str = "NAME";

/// Section header for a non default direction of optimization.
pub const OBJECTIVE_SENSE: &str = "OBJSENSE";

/// Value in the `OBJSENSE` section for maximization.
pub const MAXIMIZE: &str = "MAX";

/// Section header of the row declarations.
pub const ROWS: &str = "ROWS";

/// Section header of the column major matrix entries.
pub const COLUMNS: &str = "COLUMNS";

/// Section header of the right hand side values, also used as the name of the right hand side
/// vector.
pub const RHS: &str = "RHS";

/// Section header for the widths of double bounded rows.
pub const RANGES: &str = "RANGES";

/// Name of the only range vector.
pub const RANGE_NAME: &str = "RNG";

/// Section header of the variable bounds.
pub const BOUNDS: &str = "BOUNDS";

/// Name of the only bound vector.
pub const BOUND_NAME: &str = "BND";

/// Marks the end of the file.
///
/// # Note
///
/// Notice the odd spelling.
pub const END_OF_DATA: &str = "ENDATA";

/// Preferred name of the cost row.
pub const COST_ROW_NAME: &str = "COST";
