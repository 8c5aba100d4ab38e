//! Calendar arithmetic over zero-based months.

use chrono::{
  Datelike,
  NaiveDate,
  Weekday
};
use serde::{
  Deserialize,
  Serialize
};

use crate::error::{
  PickerError,
  PickerResult
};

pub const MONTHS_PER_YEAR: u32 = 12;
pub const DAYS_PER_WEEK: u32 = 7;

pub fn first_day_of_month(
  year: i32,
  month0: u32
) -> Option<NaiveDate> {
  NaiveDate::from_ymd_opt(
    year,
    month0.checked_add(1)?,
    1
  )
}

pub fn days_in_month(
  year: i32,
  month0: u32
) -> u32 {
  let (next_year, next_month0) =
    shift_month(year, month0, 1);
  match (
    first_day_of_month(year, month0),
    first_day_of_month(
      next_year,
      next_month0
    )
  ) {
    | (Some(first), Some(next)) => {
      next
        .signed_duration_since(first)
        .num_days() as u32
    }
    | (Some(first), None) => {
      // December of the last representable year.
      31 - first.day0()
    }
    | _ => 0
  }
}

/// Moves a (year, zero-based month) pair by `step` months, carrying into the
/// year on overflow in either direction.
pub fn shift_month(
  year: i32,
  month0: u32,
  step: i32
) -> (i32, u32) {
  let total = i64::from(year)
    * i64::from(MONTHS_PER_YEAR)
    + i64::from(month0)
    + i64::from(step);
  let months =
    i64::from(MONTHS_PER_YEAR);
  (
    total.div_euclid(months) as i32,
    total.rem_euclid(months) as u32
  )
}

/// Linear month number used for (year, month) comparisons that ignore the
/// day of month.
pub fn month_ordinal(
  year: i32,
  month0: u32
) -> i64 {
  i64::from(year)
    * i64::from(MONTHS_PER_YEAR)
    + i64::from(month0)
}

pub fn date_month_ordinal(
  date: NaiveDate
) -> i64 {
  month_ordinal(
    date.year(),
    date.month0()
  )
}

/// Builds a date with the day clamped to the month's length, so day 31 in
/// a 30-day month lands on the 30th.
pub fn clamped_date(
  year: i32,
  month0: u32,
  day: u32
) -> PickerResult<NaiveDate> {
  let invalid = || {
    PickerError::InvalidDate {
      year,
      month: month0,
      day
    }
  };
  if day == 0
    || month0 >= MONTHS_PER_YEAR
  {
    return Err(invalid());
  }
  let day =
    day.min(days_in_month(year, month0));
  NaiveDate::from_ymd_opt(
    year,
    month0 + 1,
    day
  )
  .ok_or_else(invalid)
}

/// Number of blank slots before the 1st of the month when weeks start on
/// `week_start`.
pub fn leading_blank_count(
  first: NaiveDate,
  week_start: Weekday
) -> u32 {
  let day_idx = first
    .weekday()
    .num_days_from_monday();
  let start_idx =
    week_start.num_days_from_monday();
  (DAYS_PER_WEEK + day_idx - start_idx)
    % DAYS_PER_WEEK
}

pub fn week_start_for(
  start_from_monday: bool
) -> Weekday {
  if start_from_monday {
    Weekday::Mon
  } else {
    Weekday::Sun
  }
}

/// Inclusive [min, max] limits on selectable dates.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct DateBounds {
  pub min: Option<NaiveDate>,
  pub max: Option<NaiveDate>
}

impl DateBounds {
  pub fn new(
    min: Option<NaiveDate>,
    max: Option<NaiveDate>
  ) -> PickerResult<Self> {
    if let (Some(min), Some(max)) =
      (min, max)
      && min > max
    {
      return Err(
        PickerError::InvertedBounds {
          min,
          max
        }
      );
    }
    Ok(Self { min, max })
  }

  pub fn contains(
    &self,
    date: NaiveDate
  ) -> bool {
    self.min.is_none_or(|min| date >= min)
      && self
        .max
        .is_none_or(|max| date <= max)
  }

  /// Whether the month is not before the lower bound's month. Day of month
  /// is ignored.
  pub fn month_not_before_min(
    &self,
    year: i32,
    month0: u32
  ) -> bool {
    self.min.is_none_or(|min| {
      month_ordinal(year, month0)
        >= date_month_ordinal(min)
    })
  }

  /// Whether the month is not after the upper bound's month.
  pub fn month_not_after_max(
    &self,
    year: i32,
    month0: u32
  ) -> bool {
    self.max.is_none_or(|max| {
      month_ordinal(year, month0)
        <= date_month_ordinal(max)
    })
  }
}
