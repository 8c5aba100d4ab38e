use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  error,
  info
};

use crate::date::{
  DateBounds,
  MONTHS_PER_YEAR,
  week_start_for
};
use crate::error::{
  PickerError,
  PickerResult
};
use crate::style::MIN_SCREEN_WIDTH;

pub const DEFAULT_WEEKDAYS: [&str; 7] = [
  "Sun", "Mon", "Tue", "Wed", "Thu",
  "Fri", "Sat"
];

pub const DEFAULT_MONTHS: [&str; 12] = [
  "January",
  "February",
  "March",
  "April",
  "May",
  "June",
  "July",
  "August",
  "September",
  "October",
  "November",
  "December"
];

fn picker_true() -> bool {
  true
}

fn picker_default_previous_title()
-> String {
  "Previous".to_string()
}

fn picker_default_next_title()
-> String {
  "Next".to_string()
}

/// Presentation and behavior options shared by every front-end.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
pub struct PickerOptions {
  #[serde(default)]
  pub allow_range_selection:   bool,
  #[serde(default)]
  pub start_from_monday:       bool,
  #[serde(default = "picker_true")]
  pub highlight_today:         bool,
  #[serde(default)]
  pub show_year_navigation:    bool,
  pub min_date:                Option<NaiveDate>,
  pub max_date:                Option<NaiveDate>,
  pub weekdays:                Option<Vec<String>>,
  pub months:                  Option<Vec<String>>,
  #[serde(
    default = "picker_default_previous_title"
  )]
  pub previous_title:          String,
  #[serde(
    default = "picker_default_next_title"
  )]
  pub next_title:              String,
  pub selected_day_color:      Option<String>,
  pub selected_day_text_color: Option<String>,
  pub text_style:              Option<String>,
  pub scale_factor:            Option<f64>,
  pub screen_width:            Option<f64>
}

impl Default for PickerOptions {
  fn default() -> Self {
    Self {
      allow_range_selection:   false,
      start_from_monday:       false,
      highlight_today:         true,
      show_year_navigation:    false,
      min_date:                None,
      max_date:                None,
      weekdays:                None,
      months:                  None,
      previous_title:
        picker_default_previous_title(),
      next_title:
        picker_default_next_title(),
      selected_day_color:      None,
      selected_day_text_color: None,
      text_style:              None,
      scale_factor:            None,
      screen_width:            None
    }
  }
}

impl PickerOptions {
  /// Parses, sanitizes and validates options from TOML.
  #[tracing::instrument(skip(raw))]
  pub fn from_toml_str(
    raw: &str
  ) -> PickerResult<Self> {
    let mut options =
      toml::from_str::<Self>(raw)?;
    options.sanitize();
    options.validate()?;
    Ok(options)
  }

  /// Blank strings are treated as absent.
  pub fn sanitize(&mut self) {
    if self.previous_title.trim().is_empty()
    {
      self.previous_title =
        picker_default_previous_title();
    }
    if self.next_title.trim().is_empty() {
      self.next_title =
        picker_default_next_title();
    }
    for field in [
      &mut self.selected_day_color,
      &mut self.selected_day_text_color,
      &mut self.text_style
    ] {
      if field
        .as_deref()
        .is_some_and(|value| {
          value.trim().is_empty()
        })
      {
        *field = None;
      }
    }
  }

  pub fn validate(
    &self
  ) -> PickerResult<()> {
    self.bounds()?;

    if let Some(weekdays) =
      self.weekdays.as_ref()
      && weekdays.len() != 7
    {
      return Err(
        PickerError::LabelCount {
          field:    "weekday",
          expected: 7,
          actual:   weekdays.len()
        }
      );
    }

    if let Some(months) =
      self.months.as_ref()
      && months.len()
        != MONTHS_PER_YEAR as usize
    {
      return Err(
        PickerError::LabelCount {
          field:    "month",
          expected: MONTHS_PER_YEAR
            as usize,
          actual:   months.len()
        }
      );
    }

    if let Some(scale) = self.scale_factor
      && !(scale.is_finite()
        && scale > 0.0)
    {
      return Err(
        PickerError::InvalidScale(scale)
      );
    }

    if let Some(width) = self.screen_width
      && !(width.is_finite()
        && width > MIN_SCREEN_WIDTH)
    {
      return Err(
        PickerError::InvalidScreenWidth(
          width
        )
      );
    }

    debug!("picker options validated");
    Ok(())
  }

  pub fn bounds(
    &self
  ) -> PickerResult<DateBounds> {
    DateBounds::new(
      self.min_date,
      self.max_date
    )
  }

  pub fn week_start(
    &self
  ) -> chrono::Weekday {
    week_start_for(
      self.start_from_monday
    )
  }

  /// Header labels in display order. Overrides are used verbatim; the
  /// default list is rotated when weeks start on Monday.
  pub fn weekday_labels(
    &self
  ) -> Vec<String> {
    if let Some(weekdays) =
      self.weekdays.as_ref()
    {
      return weekdays.clone();
    }
    let mut labels: Vec<String> =
      DEFAULT_WEEKDAYS
        .iter()
        .map(|label| label.to_string())
        .collect();
    if self.start_from_monday {
      labels.rotate_left(1);
    }
    labels
  }

  pub fn month_label(
    &self,
    month0: u32
  ) -> &str {
    let index = month0 as usize;
    self
      .months
      .as_ref()
      .and_then(|months| months.get(index))
      .map(String::as_str)
      .or_else(|| {
        DEFAULT_MONTHS.get(index).copied()
      })
      .unwrap_or("")
  }
}

/// Loads options from embedded TOML, falling back to defaults on error.
pub fn load_picker_options(
  raw: &str
) -> PickerOptions {
  match PickerOptions::from_toml_str(raw)
  {
    | Ok(options) => {
      info!(
        range = options.allow_range_selection,
        monday = options.start_from_monday,
        min = ?options.min_date,
        max = ?options.max_date,
        "loaded picker config"
      );
      options
    }
    | Err(error) => {
      error!(%error, "failed loading picker config; using defaults");
      PickerOptions::default()
    }
  }
}
