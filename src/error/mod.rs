use std::fmt;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Which operand of a capacity calculation carried the bad unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRole {
    Video,
    File,
    Drive,
    Item,
}

impl fmt::Display for UnitRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitRole::Video => write!(f, "video"),
            UnitRole::File => write!(f, "file"),
            UnitRole::Drive => write!(f, "drive"),
            UnitRole::Item => write!(f, "item"),
        }
    }
}

/// The error type shared by every fallible utility.
///
/// `Display` output for unit errors is the exact message callers have
/// historically matched on (`Invalid video unit`, `Invalid drive unit`, ...),
/// so the numeric code is kept out of it and exposed through [`UtilError::code`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilError {
    #[error("Invalid {role} unit")]
    InvalidUnit { role: UnitRole, unit: String },

    #[error("Invalid size: {0}")]
    InvalidSize(f64),

    #[error("Ragged matrix: row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Sequence overflow: term {index} does not fit in i64")]
    SequenceOverflow { index: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl UtilError {
    /// Create an invalid unit error
    pub fn invalid_unit(role: UnitRole, unit: impl Into<String>) -> Self {
        Self::InvalidUnit {
            role,
            unit: unit.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::InvalidUnit { .. } => ErrorCode::UNITS_INVALID_UNIT,
            Self::InvalidSize(_) => ErrorCode::UNITS_INVALID_SIZE,
            Self::RaggedMatrix { .. } => ErrorCode::MATRIX_RAGGED,
            Self::SequenceOverflow { .. } => ErrorCode::SEQUENCE_OVERFLOW,
            Self::Config(_) => ErrorCode::CONFIG_GENERIC,
        }
    }

    /// Message prefixed with the `[E####]` code, for logs
    pub fn developer_message(&self) -> String {
        format!("[E{:04}] {}", self.code(), self)
    }
}

impl From<toml::de::Error> for UtilError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid TOML: {}", err))
    }
}

impl From<serde_json::Error> for UtilError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("invalid JSON: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, UtilError>;

#[cfg(test)]
mod tests;
