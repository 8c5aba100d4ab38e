//! Selection model: single dates and start/end ranges.

use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};

use crate::error::{
  PickerError,
  PickerResult
};

/// Three-state range selection.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum RangeSelection {
  Unset,
  Open(NaiveDate),
  Closed(NaiveDate, NaiveDate)
}

impl RangeSelection {
  pub fn from_dates(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>
  ) -> PickerResult<Self> {
    match (from, to) {
      | (None, None) => Ok(Self::Unset),
      | (None, Some(_)) => {
        Err(PickerError::RangeEndWithoutStart)
      }
      | (Some(from), None) => {
        Ok(Self::Open(from))
      }
      | (Some(from), Some(to)) => {
        if from > to {
          return Err(
            PickerError::InvertedRange {
              from,
              to
            }
          );
        }
        Ok(Self::Closed(from, to))
      }
    }
  }

  pub fn start(
    &self
  ) -> Option<NaiveDate> {
    match *self {
      | Self::Unset => None,
      | Self::Open(from)
      | Self::Closed(from, _) => {
        Some(from)
      }
    }
  }

  pub fn end(&self) -> Option<NaiveDate> {
    match *self {
      | Self::Closed(_, to) => Some(to),
      | _ => None
    }
  }

  /// Applies a tap on `date`. A tap before an open range's start restarts
  /// the range there; a tap on a closed range starts a new one.
  #[must_use]
  pub fn advance(
    self,
    date: NaiveDate
  ) -> Self {
    match self {
      | Self::Unset
      | Self::Closed(..) => {
        Self::Open(date)
      }
      | Self::Open(from) => {
        if date > from {
          Self::Closed(from, date)
        } else {
          Self::Open(date)
        }
      }
    }
  }
}

/// Selection state for one picker instance; the variant is fixed by the
/// range flag at construction.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Selection {
  Single(NaiveDate),
  Range(RangeSelection)
}

impl Selection {
  pub fn is_range(&self) -> bool {
    matches!(self, Self::Range(_))
  }

  /// (start, end) pair that drives day classification. An unset range
  /// falls back to highlighting the cursor date.
  pub fn highlight(
    &self,
    cursor_date: NaiveDate
  ) -> (Option<NaiveDate>, Option<NaiveDate>)
  {
    match self {
      | Self::Single(date) => {
        (Some(*date), None)
      }
      | Self::Range(
        RangeSelection::Unset
      ) => (Some(cursor_date), None),
      | Self::Range(range) => {
        (range.start(), range.end())
      }
    }
  }

  /// Commits `date` as the newly chosen date and returns the updated
  /// selection with the notification payload for it.
  #[must_use]
  pub fn commit(
    self,
    date: NaiveDate
  ) -> (Self, DateChange) {
    match self {
      | Self::Single(_) => {
        (
          Self::Single(date),
          DateChange::Single(date)
        )
      }
      | Self::Range(range) => {
        let next = range.advance(date);
        let change = DateChange::Range {
          start_date: next
            .start()
            .unwrap_or(date),
          end_date:   next.end()
        };
        (Self::Range(next), change)
      }
    }
  }
}

/// Payload handed to the embedding `on_date_change` callback.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(untagged)]
pub enum DateChange {
  Single(NaiveDate),
  Range {
    start_date: NaiveDate,
    end_date:   Option<NaiveDate>
  }
}

impl DateChange {
  pub fn start_date(&self) -> NaiveDate {
    match *self {
      | Self::Single(date) => date,
      | Self::Range {
        start_date,
        ..
      } => start_date
    }
  }

  pub fn end_date(
    &self
  ) -> Option<NaiveDate> {
    match *self {
      | Self::Single(_) => None,
      | Self::Range {
        end_date,
        ..
      } => end_date
    }
  }
}
