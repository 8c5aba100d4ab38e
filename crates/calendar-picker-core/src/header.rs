//! Month/year header: label text and navigation availability.

use serde::Serialize;

use crate::config::PickerOptions;
use crate::date::{
  DateBounds,
  MONTHS_PER_YEAR,
  shift_month
};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
  PrevMonth,
  NextMonth,
  PrevYear,
  NextYear
}

impl Navigation {
  pub fn month_step(self) -> i32 {
    let year = MONTHS_PER_YEAR as i32;
    match self {
      | Self::PrevMonth => -1,
      | Self::NextMonth => 1,
      | Self::PrevYear => -year,
      | Self::NextYear => year
    }
  }

  pub fn is_backward(self) -> bool {
    matches!(
      self,
      Self::PrevMonth | Self::PrevYear
    )
  }

  /// Target (year, zero-based month) after navigating from the given one.
  pub fn apply(
    self,
    year: i32,
    month0: u32
  ) -> (i32, u32) {
    shift_month(
      year,
      month0,
      self.month_step()
    )
  }
}

/// Backward moves are checked against the lower bound only and forward
/// moves against the upper bound only, comparing year and month. A view
/// already outside the bounds can always move back toward them.
pub fn can_navigate(
  year: i32,
  month0: u32,
  bounds: &DateBounds,
  navigation: Navigation
) -> bool {
  let (year, month0) =
    navigation.apply(year, month0);
  if navigation.is_backward() {
    bounds.month_not_before_min(year, month0)
  } else {
    bounds.month_not_after_max(year, month0)
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Serialize,
)]
pub struct HeaderModel {
  pub label:                String,
  pub previous_title:       String,
  pub next_title:           String,
  pub prev_disabled:        bool,
  pub next_disabled:        bool,
  pub show_year_navigation: bool,
  pub prev_year_disabled:   bool,
  pub next_year_disabled:   bool
}

impl HeaderModel {
  pub fn new(
    year: i32,
    month0: u32,
    bounds: &DateBounds,
    options: &PickerOptions
  ) -> Self {
    let blocked = |navigation| {
      !can_navigate(
        year, month0, bounds, navigation
      )
    };
    Self {
      label: format!(
        "{} {}",
        options.month_label(month0),
        year
      ),
      previous_title: options
        .previous_title
        .clone(),
      next_title: options
        .next_title
        .clone(),
      prev_disabled: blocked(
        Navigation::PrevMonth
      ),
      next_disabled: blocked(
        Navigation::NextMonth
      ),
      show_year_navigation: options
        .show_year_navigation,
      prev_year_disabled: blocked(
        Navigation::PrevYear
      ),
      next_year_disabled: blocked(
        Navigation::NextYear
      )
    }
  }

  pub fn is_disabled(
    &self,
    navigation: Navigation
  ) -> bool {
    match navigation {
      | Navigation::PrevMonth => {
        self.prev_disabled
      }
      | Navigation::NextMonth => {
        self.next_disabled
      }
      | Navigation::PrevYear => {
        self.prev_year_disabled
      }
      | Navigation::NextYear => {
        self.next_year_disabled
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn ymd(
    year: i32,
    month: u32,
    day: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(
      year, month, day
    )
    .expect("valid date")
  }

  #[test]
  fn previous_disabled_at_min_month_regardless_of_day() {
    let options = PickerOptions::default();
    for min_day in [1, 15, 31] {
      let bounds = DateBounds::new(
        Some(ymd(2024, 3, min_day)),
        None
      )
      .expect("bounds");
      let header =
        HeaderModel::new(2024, 2, &bounds, &options);
      assert!(header.prev_disabled);
      assert!(!header.next_disabled);

      let header =
        HeaderModel::new(2024, 3, &bounds, &options);
      assert!(!header.prev_disabled);
    }
  }

  #[test]
  fn next_disabled_at_max_month() {
    let options = PickerOptions::default();
    let bounds = DateBounds::new(
      None,
      Some(ymd(2025, 1, 1))
    )
    .expect("bounds");
    assert!(
      HeaderModel::new(2025, 0, &bounds, &options)
        .next_disabled
    );
    assert!(
      !HeaderModel::new(2024, 11, &bounds, &options)
        .next_disabled
    );
  }

  #[test]
  fn year_navigation_uses_the_same_month_rule() {
    let bounds = DateBounds::new(
      Some(ymd(2023, 6, 1)),
      Some(ymd(2025, 6, 30))
    )
    .expect("bounds");
    assert!(can_navigate(
      2024,
      5,
      &bounds,
      Navigation::PrevYear
    ));
    assert!(!can_navigate(
      2024,
      4,
      &bounds,
      Navigation::PrevYear
    ));
    assert!(can_navigate(
      2024,
      5,
      &bounds,
      Navigation::NextYear
    ));
    assert!(!can_navigate(
      2024,
      6,
      &bounds,
      Navigation::NextYear
    ));
  }

  #[test]
  fn view_outside_bounds_can_move_back_toward_them() {
    let options = PickerOptions::default();
    let after_min = DateBounds::new(
      Some(ymd(2024, 6, 1)),
      None
    )
    .expect("bounds");
    let header =
      HeaderModel::new(2024, 0, &after_min, &options);
    assert!(header.prev_disabled);
    assert!(!header.next_disabled);
    assert!(!header.next_year_disabled);

    let before_max = DateBounds::new(
      None,
      Some(ymd(2024, 3, 31))
    )
    .expect("bounds");
    let header =
      HeaderModel::new(2024, 9, &before_max, &options);
    assert!(!header.prev_disabled);
    assert!(header.next_disabled);
    assert!(!header.prev_year_disabled);
  }

  #[test]
  fn label_uses_month_overrides() {
    let options = PickerOptions {
      months: Some(
        [
          "Ene", "Feb", "Mar", "Abr", "May",
          "Jun", "Jul", "Ago", "Sep", "Oct",
          "Nov", "Dic"
        ]
        .iter()
        .map(|m| m.to_string())
        .collect()
      ),
      ..PickerOptions::default()
    };
    let header = HeaderModel::new(
      2024,
      0,
      &DateBounds::default(),
      &options
    );
    assert_eq!(header.label, "Ene 2024");
    assert_eq!(header.previous_title, "Previous");
  }
}
