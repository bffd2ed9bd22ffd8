//! Storage capacity and cost arithmetic
//!
//! Byte units are decimal: each step is a factor of 1000, not 1024.
//!
//! # Examples
//!
//! ```
//! use quickfns::core::units::{fuel_cost, number_of_videos};
//!
//! assert_eq!(number_of_videos(500.0, "MB", 100.0, "GB"), Ok(200));
//! assert_eq!(
//!     number_of_videos(500.0, "PB", 100.0, "GB").unwrap_err().to_string(),
//!     "Invalid video unit"
//! );
//! assert_eq!(fuel_cost(15.0, 5.0, 3.5), "$35.00");
//! ```

use crate::error::{Result, UnitRole, UtilError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decimal byte unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ByteUnit {
    B,
    KB,
    MB,
    GB,
    TB,
}

impl ByteUnit {
    /// Parse an exact, case-sensitive unit symbol
    pub fn parse(symbol: &str) -> Option<Self> {
        match symbol {
            "B" => Some(ByteUnit::B),
            "KB" => Some(ByteUnit::KB),
            "MB" => Some(ByteUnit::MB),
            "GB" => Some(ByteUnit::GB),
            "TB" => Some(ByteUnit::TB),
            _ => None,
        }
    }

    /// Number of bytes in one of this unit
    pub fn bytes(&self) -> f64 {
        match self {
            ByteUnit::B => 1.0,
            ByteUnit::KB => 1e3,
            ByteUnit::MB => 1e6,
            ByteUnit::GB => 1e9,
            ByteUnit::TB => 1e12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ByteUnit::B => "B",
            ByteUnit::KB => "KB",
            ByteUnit::MB => "MB",
            ByteUnit::GB => "GB",
            ByteUnit::TB => "TB",
        }
    }
}

impl fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ByteUnit {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| UtilError::invalid_unit(UnitRole::Item, s))
    }
}

fn parse_unit(symbol: &str, role: UnitRole) -> Result<ByteUnit> {
    ByteUnit::parse(symbol).ok_or_else(|| UtilError::invalid_unit(role, symbol))
}

/// Pure: How many whole items of `item_size` fit into `capacity`
pub fn items_that_fit(
    item_size: f64,
    item_unit: ByteUnit,
    capacity: f64,
    capacity_unit: ByteUnit,
) -> Result<u64> {
    if !item_size.is_finite() || item_size <= 0.0 {
        return Err(UtilError::InvalidSize(item_size));
    }
    if !capacity.is_finite() || capacity < 0.0 {
        return Err(UtilError::InvalidSize(capacity));
    }

    let item_bytes = item_size * item_unit.bytes();
    let capacity_bytes = capacity * capacity_unit.bytes();

    // float to int `as` saturates, which is the behaviour we want at the top end
    Ok((capacity_bytes / item_bytes).floor() as u64)
}

/// Pure: How many videos fit on a drive
///
/// The video unit is checked before the drive unit; the error message is
/// `Invalid video unit` or `Invalid drive unit` respectively.
pub fn number_of_videos(
    video_size: f64,
    video_unit: &str,
    drive_size: f64,
    drive_unit: &str,
) -> Result<u64> {
    let video_unit = parse_unit(video_unit, UnitRole::Video)?;
    let drive_unit = parse_unit(drive_unit, UnitRole::Drive)?;

    items_that_fit(video_size, video_unit, drive_size, drive_unit)
}

/// Pure: How many files fit on a drive measured in GB
pub fn number_of_files(file_size: f64, file_unit: &str, drive_size_gb: f64) -> Result<u64> {
    let file_unit = parse_unit(file_unit, UnitRole::File)?;

    items_that_fit(file_size, file_unit, drive_size_gb, ByteUnit::GB)
}

/// Pure: How many photos of `photo_size_mb` fit on a drive of `drive_size_gb`
///
/// Non-positive photo sizes yield 0.
pub fn number_of_photos(photo_size_mb: f64, drive_size_gb: f64) -> u64 {
    items_that_fit(photo_size_mb, ByteUnit::MB, drive_size_gb, ByteUnit::GB).unwrap_or(0)
}

/// Pure: Cost to top up a tank, formatted as `$0.00`
pub fn fuel_cost(tank_capacity: f64, current_level: f64, price_per_unit: f64) -> String {
    let cost = (tank_capacity - current_level) * price_per_unit;
    // half-cent ties round away from zero; `{:.2}` alone rounds them to even
    let cents = (cost * 100.0).round() / 100.0;
    format!("${:.2}", cents)
}
