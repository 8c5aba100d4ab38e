//! Picker state machine.
//!
//! `PickerState` owns the (year, month, day) cursor, the selection and the
//! date bounds. Every user interaction is a `PickerEvent`; `transition` is a
//! pure function returning the next state plus at most one `DateChange`
//! notification for the embedder.

use chrono::{
  Datelike,
  NaiveDate
};
use tracing::debug;

use crate::config::PickerOptions;
use crate::date::{
  DateBounds,
  clamped_date,
  days_in_month
};
use crate::error::PickerResult;
use crate::grid::{
  GridParams,
  MonthGrid,
  build_month_grid
};
use crate::header::{
  HeaderModel,
  Navigation,
  can_navigate
};
use crate::selection::{
  DateChange,
  RangeSelection,
  Selection
};

/// (year, zero-based month, day) triple driving the month view. The day is
/// kept as tapped and clamped to the month's length when read as a date.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct Cursor {
  pub year:   i32,
  pub month0: u32,
  pub day:    u32
}

impl Cursor {
  pub fn from_date(
    date: NaiveDate
  ) -> Self {
    Self {
      year:   date.year(),
      month0: date.month0(),
      day:    date.day()
    }
  }

  pub fn date(
    &self
  ) -> PickerResult<NaiveDate> {
    clamped_date(
      self.year,
      self.month0,
      self.day
    )
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum PickerEvent {
  DayTapped(u32),
  Navigate(Navigation)
}

/// Embedding inputs that seed a picker.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct PickerSeed {
  pub selected_date: NaiveDate,
  pub from_date:     Option<NaiveDate>,
  pub to_date:       Option<NaiveDate>
}

impl PickerSeed {
  pub fn single(
    selected_date: NaiveDate
  ) -> Self {
    Self {
      selected_date,
      from_date: None,
      to_date: None
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct PickerState {
  cursor:    Cursor,
  selection: Selection,
  bounds:    DateBounds
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
  pub state:  PickerState,
  pub change: Option<DateChange>
}

impl Transition {
  fn unchanged(
    state: &PickerState
  ) -> Self {
    Self {
      state:  *state,
      change: None
    }
  }
}

impl PickerState {
  /// Builds the initial state. In range mode the cursor starts at the range
  /// start when one is given, otherwise at the selected date.
  pub fn new(
    seed: PickerSeed,
    options: &PickerOptions
  ) -> PickerResult<Self> {
    let bounds = options.bounds()?;
    let selection = if options
      .allow_range_selection
    {
      Selection::Range(
        RangeSelection::from_dates(
          seed.from_date,
          seed.to_date
        )?
      )
    } else {
      Selection::Single(seed.selected_date)
    };
    let start = match selection {
      | Selection::Range(range) => range
        .start()
        .unwrap_or(seed.selected_date),
      | Selection::Single(date) => date
    };
    debug!(
      start = %start,
      range = selection.is_range(),
      "seeded picker state"
    );
    Ok(Self {
      cursor: Cursor::from_date(start),
      selection,
      bounds
    })
  }

  pub fn cursor(&self) -> Cursor {
    self.cursor
  }

  pub fn selection(&self) -> Selection {
    self.selection
  }

  pub fn bounds(&self) -> DateBounds {
    self.bounds
  }

  pub fn year(&self) -> i32 {
    self.cursor.year
  }

  pub fn month0(&self) -> u32 {
    self.cursor.month0
  }

  pub fn cursor_date(
    &self
  ) -> PickerResult<NaiveDate> {
    self.cursor.date()
  }

  pub fn can_navigate(
    &self,
    navigation: Navigation
  ) -> bool {
    can_navigate(
      self.cursor.year,
      self.cursor.month0,
      &self.bounds,
      navigation
    )
  }

  pub fn header(
    &self,
    options: &PickerOptions
  ) -> HeaderModel {
    HeaderModel::new(
      self.cursor.year,
      self.cursor.month0,
      &self.bounds,
      options
    )
  }

  pub fn grid_params(
    &self,
    options: &PickerOptions,
    today: Option<NaiveDate>
  ) -> PickerResult<GridParams> {
    let (start, end) = self
      .selection
      .highlight(self.cursor_date()?);
    Ok(GridParams {
      year: self.cursor.year,
      month0: self.cursor.month0,
      start,
      end,
      bounds: self.bounds,
      week_start: options.week_start(),
      today
    })
  }

  pub fn month_grid(
    &self,
    options: &PickerOptions,
    today: Option<NaiveDate>
  ) -> PickerResult<MonthGrid> {
    build_month_grid(
      &self.grid_params(options, today)?
    )
  }

  fn commit(
    &self,
    cursor: Cursor
  ) -> Option<Transition> {
    let date = cursor.date().ok()?;
    let (selection, change) =
      self.selection.commit(date);
    Some(Transition {
      state:  Self {
        cursor,
        selection,
        bounds: self.bounds
      },
      change: Some(change)
    })
  }
}

/// Applies one interaction. Rejected events (disabled days, blocked
/// navigation) return the state unchanged with no notification.
pub fn transition(
  state: &PickerState,
  event: PickerEvent
) -> Transition {
  let cursor = state.cursor;
  let next = match event {
    | PickerEvent::DayTapped(day) => {
      if day == 0
        || day
          > days_in_month(
            cursor.year,
            cursor.month0
          )
      {
        debug!(day, "ignoring tap outside the month");
        return Transition::unchanged(state);
      }
      let cursor = Cursor { day, ..cursor };
      match cursor.date() {
        | Ok(date)
          if state.bounds.contains(date) => {}
        | _ => {
          debug!(day, "ignoring tap on disabled day");
          return Transition::unchanged(state);
        }
      }
      cursor
    }
    | PickerEvent::Navigate(navigation) => {
      if !state.can_navigate(navigation) {
        debug!(?navigation, "navigation blocked by bounds");
        return Transition::unchanged(state);
      }
      let (year, month0) = navigation
        .apply(cursor.year, cursor.month0);
      Cursor {
        year,
        month0,
        ..cursor
      }
    }
  };

  match state.commit(next) {
    | Some(transition) => {
      debug!(
        ?event,
        year = next.year,
        month0 = next.month0,
        day = next.day,
        change = ?transition.change,
        "picker transition"
      );
      transition
    }
    | None => Transition::unchanged(state)
  }
}

#[cfg(test)]
mod tests {
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

  fn range_options() -> PickerOptions {
    PickerOptions {
      allow_range_selection: true,
      ..PickerOptions::default()
    }
  }

  #[test]
  fn single_tap_selects_and_notifies_plain_date() {
    let state = PickerState::new(
      PickerSeed::single(ymd(2024, 3, 1)),
      &PickerOptions::default()
    )
    .expect("state");
    let step = transition(
      &state,
      PickerEvent::DayTapped(12)
    );
    assert_eq!(
      step.change,
      Some(DateChange::Single(ymd(2024, 3, 12)))
    );
    assert_eq!(
      step.state.selection(),
      Selection::Single(ymd(2024, 3, 12))
    );
    assert_eq!(step.state.cursor().day, 12);
  }

  #[test]
  fn range_seed_starts_cursor_at_from_date() {
    let state = PickerState::new(
      PickerSeed {
        selected_date: ymd(2024, 1, 1),
        from_date:     Some(ymd(2024, 6, 10)),
        to_date:       Some(ymd(2024, 6, 12))
      },
      &range_options()
    )
    .expect("state");
    assert_eq!(
      state.cursor(),
      Cursor {
        year:   2024,
        month0: 5,
        day:    10
      }
    );
  }

  #[test]
  fn next_month_past_december_rolls_year_once() {
    let state = PickerState::new(
      PickerSeed::single(ymd(2024, 12, 15)),
      &PickerOptions::default()
    )
    .expect("state");
    let step = transition(
      &state,
      PickerEvent::Navigate(Navigation::NextMonth)
    );
    assert_eq!(step.state.year(), 2025);
    assert_eq!(step.state.month0(), 0);
    assert_eq!(
      step.change,
      Some(DateChange::Single(ymd(2025, 1, 15)))
    );
  }

  #[test]
  fn previous_month_before_january_rolls_year_back() {
    let state = PickerState::new(
      PickerSeed::single(ymd(2024, 1, 15)),
      &PickerOptions::default()
    )
    .expect("state");
    let step = transition(
      &state,
      PickerEvent::Navigate(Navigation::PrevMonth)
    );
    assert_eq!(step.state.year(), 2023);
    assert_eq!(step.state.month0(), 11);
  }

  #[test]
  fn navigation_clamps_day_and_restores_it() {
    let state = PickerState::new(
      PickerSeed::single(ymd(2024, 1, 31)),
      &PickerOptions::default()
    )
    .expect("state");
    let february = transition(
      &state,
      PickerEvent::Navigate(Navigation::NextMonth)
    );
    assert_eq!(
      february.change,
      Some(DateChange::Single(ymd(2024, 2, 29)))
    );
    let march = transition(
      &february.state,
      PickerEvent::Navigate(Navigation::NextMonth)
    );
    assert_eq!(
      march.change,
      Some(DateChange::Single(ymd(2024, 3, 31)))
    );
  }

  #[test]
  fn year_navigation_moves_year_only() {
    let state = PickerState::new(
      PickerSeed::single(ymd(2024, 2, 29)),
      &PickerOptions::default()
    )
    .expect("state");
    let step = transition(
      &state,
      PickerEvent::Navigate(Navigation::NextYear)
    );
    assert_eq!(step.state.year(), 2025);
    assert_eq!(step.state.month0(), 1);
    assert_eq!(
      step.change,
      Some(DateChange::Single(ymd(2025, 2, 28)))
    );
  }

  #[test]
  fn blocked_navigation_is_a_silent_no_op() {
    let options = PickerOptions {
      min_date: Some(ymd(2024, 3, 20)),
      ..PickerOptions::default()
    };
    let state = PickerState::new(
      PickerSeed::single(ymd(2024, 3, 25)),
      &options
    )
    .expect("state");
    assert!(!state.can_navigate(Navigation::PrevMonth));
    let step = transition(
      &state,
      PickerEvent::Navigate(Navigation::PrevMonth)
    );
    assert_eq!(step.change, None);
    assert_eq!(step.state, state);
  }

  #[test]
  fn seed_before_min_can_still_move_forward() {
    let options = PickerOptions {
      min_date: Some(ymd(2024, 6, 1)),
      ..PickerOptions::default()
    };
    let state = PickerState::new(
      PickerSeed::single(ymd(2024, 1, 15)),
      &options
    )
    .expect("state");
    assert!(!state.can_navigate(Navigation::PrevMonth));
    assert!(state.can_navigate(Navigation::NextMonth));
    assert!(!state.header(&options).next_disabled);

    let step = transition(
      &state,
      PickerEvent::Navigate(Navigation::NextMonth)
    );
    assert_eq!(
      step.change,
      Some(DateChange::Single(ymd(2024, 2, 15)))
    );
    assert_eq!(step.state.month0(), 1);
  }

  #[test]
  fn taps_on_disabled_or_missing_days_are_ignored() {
    let options = PickerOptions {
      max_date: Some(ymd(2024, 4, 10)),
      ..PickerOptions::default()
    };
    let state = PickerState::new(
      PickerSeed::single(ymd(2024, 4, 1)),
      &options
    )
    .expect("state");
    for day in [0, 11, 31] {
      let step = transition(
        &state,
        PickerEvent::DayTapped(day)
      );
      assert_eq!(step.change, None, "day {day}");
      assert_eq!(step.state, state);
    }
  }

  #[test]
  fn unset_range_highlights_cursor_in_grid() {
    let state = PickerState::new(
      PickerSeed::single(ymd(2024, 5, 9)),
      &range_options()
    )
    .expect("state");
    let grid = state
      .month_grid(&range_options(), None)
      .expect("grid");
    let selected: Vec<u32> = grid
      .cells()
      .filter(|cell| cell.selected())
      .map(|cell| cell.day)
      .collect();
    assert_eq!(selected, vec![9]);
  }
}
