//! Constants used throughout the ward core crate.

/// Largest number of beds a single ward may hold.
pub const MAX_WARD_BEDS: i64 = 10_000;

/// Environment variable naming the ward.
pub const WARD_NAME_ENV: &str = "WARD_NAME";

/// Environment variable holding the label of the first bed.
pub const WARD_FIRST_BED_ENV: &str = "WARD_FIRST_BED";

/// Environment variable holding the label of the last bed.
pub const WARD_LAST_BED_ENV: &str = "WARD_LAST_BED";

/// Label rendered in reports for a patient without a bed.
pub const UNASSIGNED_BED_LABEL: i64 = -1;
