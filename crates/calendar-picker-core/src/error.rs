//! Error types for picker configuration and date arithmetic.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while validating picker inputs.
#[derive(Error, Debug)]
pub enum PickerError {
  #[error(
    "invalid date: year {year}, month \
     {month} (zero-based), day {day}"
  )]
  InvalidDate {
    year:  i32,
    month: u32,
    day:   u32
  },

  #[error(
    "min date {min} is after max date \
     {max}"
  )]
  InvertedBounds {
    min: NaiveDate,
    max: NaiveDate
  },

  #[error(
    "range start {from} is after range \
     end {to}"
  )]
  InvertedRange {
    from: NaiveDate,
    to:   NaiveDate
  },

  #[error("range end given without a range start")]
  RangeEndWithoutStart,

  #[error(
    "expected {expected} {field} labels, \
     got {actual}"
  )]
  LabelCount {
    field:    &'static str,
    expected: usize,
    actual:   usize
  },

  #[error("scale factor must be a positive finite number, got {0}")]
  InvalidScale(f64),

  #[error("screen width {0} is too narrow for a 7-column grid")]
  InvalidScreenWidth(f64),

  #[error("config parse error: {0}")]
  Config(#[from] toml::de::Error)
}

/// Result type alias for picker operations.
pub type PickerResult<T> =
  Result<T, PickerError>;
