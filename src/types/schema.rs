//! Column layout of the KMA `upp_idx` text payload.
//!
//! The payload carries no header row of its own. Column names are declared here
//! in the order the API emits them and matched positionally against each line.

/// Columns of one payload line, in wire order.
///
/// `STN` (station code) and `WD` (wind direction) are present on the wire but
/// are not part of an [`crate::ObservationRecord`]; they are projected away.
pub const PAYLOAD_COLUMNS: [&str; 10] = [
    "YYMMDDHHMI",
    "STN",
    "TA",
    "HM",
    "WD",
    "WS",
    "TPW",
    "UPRESS",
    "MPRESS",
    "LPRESS",
];

/// The eight columns kept on every record, also used as JSON keys in the cache file.
pub const RECORD_COLUMNS: [&str; 8] = [
    "YYMMDDHHMI",
    "TA",
    "HM",
    "WS",
    "TPW",
    "UPRESS",
    "MPRESS",
    "LPRESS",
];

/// Lines starting with this marker are comments.
pub const COMMENT_MARKER: char = '#';

/// Field separator within a data line.
pub const DELIMITER: char = ',';

/// Position of `name` within [`PAYLOAD_COLUMNS`].
pub(crate) fn payload_index(name: &str) -> Option<usize> {
    PAYLOAD_COLUMNS.iter().position(|column| *column == name)
}
