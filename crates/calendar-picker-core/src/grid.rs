//! Month grid layout and per-day selection classification.
//!
//! A month view is always a fixed 6x7 matrix. Leading slots before the 1st
//! and trailing slots after the last day are blank; every day of the month
//! occupies exactly one slot, in order, starting at the weekday offset of
//! the 1st.

use chrono::{
  Datelike,
  Duration,
  NaiveDate,
  Weekday
};
use serde::Serialize;

use crate::date::{
  DateBounds,
  days_in_month,
  first_day_of_month,
  leading_blank_count
};
use crate::error::{
  PickerError,
  PickerResult
};

pub const MAX_ROWS: usize = 6;
pub const MAX_COLUMNS: usize = 7;

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
  #[default]
  None,
  Single,
  StartRange,
  EndRange,
  InRange
}

impl DayType {
  pub fn is_selected(self) -> bool {
    !matches!(self, Self::None)
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::None => "none",
      | Self::Single => "single",
      | Self::StartRange => {
        "start_range"
      }
      | Self::EndRange => "end_range",
      | Self::InRange => "in_range"
    }
  }
}

/// Classifies one date against a (start, end) highlight.
pub fn classify(
  date: NaiveDate,
  start: Option<NaiveDate>,
  end: Option<NaiveDate>
) -> DayType {
  match (start, end) {
    | (Some(start), None) => {
      if date == start {
        DayType::Single
      } else {
        DayType::None
      }
    }
    | (Some(start), Some(end)) => {
      if date == start {
        DayType::StartRange
      } else if date == end {
        DayType::EndRange
      } else if date > start
        && date < end
      {
        DayType::InRange
      } else {
        DayType::None
      }
    }
    | (None, _) => DayType::None
  }
}

/// Classification pass: one entry per day of the month, index `day - 1`.
pub fn classify_month(
  year: i32,
  month0: u32,
  start: Option<NaiveDate>,
  end: Option<NaiveDate>
) -> Vec<DayType> {
  let Some(first) =
    first_day_of_month(year, month0)
  else {
    return Vec::new();
  };
  (0..days_in_month(year, month0))
    .map(|offset| {
      let date = first
        + Duration::days(i64::from(
          offset
        ));
      classify(date, start, end)
    })
    .collect()
}

#[derive(
  Debug, Clone, PartialEq, Eq, Serialize,
)]
pub struct DayCell {
  pub date:     NaiveDate,
  pub day:      u32,
  pub kind:     DayType,
  pub disabled: bool,
  pub is_today: bool
}

impl DayCell {
  pub fn selected(&self) -> bool {
    self.kind.is_selected()
  }

  pub fn interactive(&self) -> bool {
    !self.disabled
  }
}

/// Inputs for one month view.
#[derive(Debug, Clone, PartialEq)]
pub struct GridParams {
  pub year:       i32,
  pub month0:     u32,
  pub start:      Option<NaiveDate>,
  pub end:        Option<NaiveDate>,
  pub bounds:     DateBounds,
  pub week_start: Weekday,
  pub today:      Option<NaiveDate>
}

pub type GridRow =
  [Option<DayCell>; MAX_COLUMNS];

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
  pub year:   i32,
  pub month0: u32,
  rows:       Vec<GridRow>
}

impl MonthGrid {
  pub fn rows(&self) -> &[GridRow] {
    &self.rows
  }

  /// Non-blank cells in day order.
  pub fn cells(
    &self
  ) -> impl Iterator<Item = &DayCell> {
    self
      .rows
      .iter()
      .flat_map(|row| row.iter())
      .flatten()
  }

  pub fn cell(
    &self,
    day: u32
  ) -> Option<&DayCell> {
    self
      .cells()
      .find(|cell| cell.day == day)
  }

  /// Flat slot index (row * 7 + column) of the 1st of the month.
  pub fn first_slot(&self) -> usize {
    self
      .rows
      .iter()
      .flat_map(|row| row.iter())
      .position(Option::is_some)
      .unwrap_or(0)
  }
}

/// Placement pass: lays the classified days into the 6x7 matrix.
#[tracing::instrument(
  level = "trace",
  skip_all,
  fields(
    year = params.year,
    month0 = params.month0
  )
)]
pub fn build_month_grid(
  params: &GridParams
) -> PickerResult<MonthGrid> {
  let first = first_day_of_month(
    params.year,
    params.month0
  )
  .ok_or(PickerError::InvalidDate {
    year:  params.year,
    month: params.month0,
    day:   1
  })?;
  let kinds = classify_month(
    params.year,
    params.month0,
    params.start,
    params.end
  );
  let offset = leading_blank_count(
    first,
    params.week_start
  ) as usize;

  let mut rows = Vec::with_capacity(
    MAX_ROWS
  );
  let mut slot = 0_usize;
  for _ in 0..MAX_ROWS {
    let mut row: GridRow =
      Default::default();
    for column in row.iter_mut() {
      let index = slot.checked_sub(offset);
      *column = index
        .and_then(|index| {
          kinds.get(index).map(|kind| (index, *kind))
        })
        .map(|(index, kind)| {
          let date = first
            + Duration::days(index as i64);
          DayCell {
            date,
            day: date.day(),
            kind,
            disabled: !params
              .bounds
              .contains(date),
            is_today: params.today
              == Some(date)
          }
        });
      slot += 1;
    }
    rows.push(row);
  }

  Ok(MonthGrid {
    year: params.year,
    month0: params.month0,
    rows
  })
}
