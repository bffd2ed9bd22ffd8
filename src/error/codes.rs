/// Error code registry
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Unit conversion errors
/// - 3000-3999: Matrix errors
/// - 4000-4999: Sequence errors
#[allow(dead_code)]
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;

    // Unit conversion errors (2000-2999)
    pub const UNITS_INVALID_UNIT: u16 = 2001;
    pub const UNITS_INVALID_SIZE: u16 = 2002;

    // Matrix errors (3000-3999)
    pub const MATRIX_RAGGED: u16 = 3001;

    // Sequence errors (4000-4999)
    pub const SEQUENCE_OVERFLOW: u16 = 4001;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1000 => "Generic configuration error",
        2001 => "Unrecognised byte unit",
        2002 => "Item size must be a positive finite number",
        3001 => "Matrix rows have differing lengths",
        4001 => "Sequence term exceeds the integer range",
        _ => "Unknown error code",
    }
}
