//! Scale-parameterized styles.
//!
//! Base sizes are tuned for a 375-unit-wide screen and multiplied by the
//! scale factor. Everything here is computed on demand from explicit
//! inputs; there is no shared style cache.

use serde::Serialize;

use crate::grid::{
  DayCell,
  DayType
};

pub const BASE_SCREEN_WIDTH: f64 = 375.0;
pub const GRID_HORIZONTAL_PADDING: f64 =
  16.0;
pub const SELECTED_DAY_INSET: f64 = 10.0;
/// Narrowest screen on which a selected-day circle still has positive size.
pub const MIN_SCREEN_WIDTH: f64 =
  GRID_HORIZONTAL_PADDING
    + SELECTED_DAY_INSET * 7.0;

pub const DEFAULT_SELECTED_COLOR: &str =
  "#5ce600";
pub const TODAY_COLOR: &str = "#cccccc";
pub const DISABLED_TEXT_COLOR: &str =
  "#bbbbbb";

pub fn default_scale(
  screen_width: f64
) -> f64 {
  screen_width / BASE_SCREEN_WIDTH
}

/// Per-cell geometry derived from the screen width.
#[derive(
  Debug, Clone, Copy, PartialEq, Serialize,
)]
pub struct CellMetrics {
  pub day_width:          f64,
  pub selected_day_width: f64,
  pub border_radius:      f64
}

impl CellMetrics {
  pub fn for_screen_width(
    screen_width: f64
  ) -> Self {
    let day_width = (screen_width
      - GRID_HORIZONTAL_PADDING)
      / 7.0;
    let selected_day_width =
      (day_width - SELECTED_DAY_INSET)
        .max(0.0);
    Self {
      day_width,
      selected_day_width,
      border_radius: selected_day_width
        / 2.0
    }
  }
}

/// Scaled sizes used across the picker.
#[derive(
  Debug, Clone, Copy, PartialEq, Serialize,
)]
pub struct CalendarStyles {
  pub scale:               f64,
  pub calendar_margin_top: f64,
  pub day_height:          f64,
  pub day_font_size:       f64,
  pub day_labels_width:    f64,
  pub day_labels_font_size: f64,
  pub month_label_font_size: f64,
  pub month_label_width:   f64,
  pub header_padding:      f64,
  pub nav_font_size:       f64,
  pub range_corner_radius: f64
}

pub fn make_styles(
  scale: f64
) -> CalendarStyles {
  CalendarStyles {
    scale,
    calendar_margin_top: 10.0 * scale,
    day_height: 40.0 * scale,
    day_font_size: 14.0 * scale,
    day_labels_width: 50.0 * scale,
    day_labels_font_size: 12.0 * scale,
    month_label_font_size: 16.0 * scale,
    month_label_width: 160.0 * scale,
    header_padding: 5.0 * scale,
    nav_font_size: 14.0 * scale,
    range_corner_radius: 20.0 * scale
  }
}

/// Colour overrides that apply to selected cells only.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct DayColors {
  pub selected_day_color:      Option<String>,
  pub selected_day_text_color: Option<String>
}

/// Inline CSS for the three layers of a day cell.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct DayAppearance {
  pub wrapper:  String,
  pub button:   String,
  pub label:    String,
  pub disabled: bool
}

pub fn day_appearance(
  cell: Option<&DayCell>,
  styles: &CalendarStyles,
  metrics: &CellMetrics,
  colors: &DayColors,
  highlight_today: bool
) -> DayAppearance {
  let wrapper_base = format!(
    "width:{:.2}px;height:{:.2}px;\
     display:flex;align-items:center;\
     justify-content:center;",
    metrics.day_width, styles.day_height
  );
  let label_base = format!(
    "font-size:{:.2}px;",
    styles.day_font_size
  );

  let Some(cell) = cell else {
    return DayAppearance {
      wrapper: wrapper_base,
      ..DayAppearance::default()
    };
  };

  if cell.selected() {
    let fill = colors
      .selected_day_color
      .as_deref()
      .unwrap_or(DEFAULT_SELECTED_COLOR);
    let radius =
      styles.range_corner_radius;
    let band = match cell.kind {
      | DayType::StartRange => format!(
        "background-color:{fill};\
         border-top-left-radius:{radius:.2}px;\
         border-bottom-left-radius:{radius:.2}px;"
      ),
      | DayType::EndRange => format!(
        "background-color:{fill};\
         border-top-right-radius:{radius:.2}px;\
         border-bottom-right-radius:{radius:.2}px;"
      ),
      | DayType::InRange => {
        format!("background-color:{fill};")
      }
      | _ => String::new()
    };
    let text_color = colors
      .selected_day_text_color
      .as_deref()
      .map(|color| {
        format!("color:{color};")
      })
      .unwrap_or_default();
    return DayAppearance {
      wrapper:  format!(
        "{wrapper_base}{band}"
      ),
      button:   format!(
        "width:{:.2}px;height:{:.2}px;\
         border-radius:{:.2}px;\
         background-color:{fill};",
        metrics.selected_day_width,
        metrics.selected_day_width,
        metrics.border_radius
      ),
      label:    format!(
        "{label_base}{text_color}"
      ),
      disabled: cell.disabled
    };
  }

  let today = if highlight_today
    && cell.is_today
  {
    format!(
      "background-color:{TODAY_COLOR};\
       border-radius:{:.2}px;",
      metrics.border_radius
    )
  } else {
    String::new()
  };

  if cell.disabled {
    return DayAppearance {
      wrapper:  format!(
        "{wrapper_base}{today}"
      ),
      button:   String::new(),
      label:    format!(
        "{label_base}color:{DISABLED_TEXT_COLOR};"
      ),
      disabled: true
    };
  }

  DayAppearance {
    wrapper:  format!(
      "{wrapper_base}{today}"
    ),
    button:   String::new(),
    label:    label_base,
    disabled: false
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn cell(kind: DayType) -> DayCell {
    DayCell {
      date: NaiveDate::from_ymd_opt(2024, 1, 10)
        .expect("valid date"),
      day: 10,
      kind,
      disabled: false,
      is_today: false
    }
  }

  #[test]
  fn metrics_follow_screen_width() {
    let metrics =
      CellMetrics::for_screen_width(366.0);
    assert!((metrics.day_width - 50.0).abs() < 1e-9);
    assert!(
      (metrics.selected_day_width - 40.0).abs() < 1e-9
    );
    assert!((metrics.border_radius - 20.0).abs() < 1e-9);
  }

  #[test]
  fn styles_scale_linearly() {
    let base = make_styles(1.0);
    let doubled = make_styles(2.0);
    assert!(
      (doubled.day_font_size - base.day_font_size * 2.0)
        .abs()
        < 1e-9
    );
    assert!((default_scale(750.0) - 2.0).abs() < 1e-9);
  }

  #[test]
  fn colour_overrides_only_touch_selected_cells() {
    let styles = make_styles(1.0);
    let metrics =
      CellMetrics::for_screen_width(375.0);
    let colors = DayColors {
      selected_day_color:      Some("#123456".to_string()),
      selected_day_text_color: Some("#ffffff".to_string())
    };

    let start = day_appearance(
      Some(&cell(DayType::StartRange)),
      &styles,
      &metrics,
      &colors,
      true
    );
    assert!(start.wrapper.contains("#123456"));
    assert!(start.wrapper.contains("border-top-left-radius"));
    assert!(start.label.contains("color:#ffffff"));

    let single = day_appearance(
      Some(&cell(DayType::Single)),
      &styles,
      &metrics,
      &colors,
      true
    );
    assert!(!single.wrapper.contains("#123456"));
    assert!(single.button.contains("#123456"));

    let plain = day_appearance(
      Some(&cell(DayType::None)),
      &styles,
      &metrics,
      &colors,
      true
    );
    assert!(!plain.wrapper.contains("#123456"));
    assert!(!plain.label.contains("#ffffff"));
  }

  #[test]
  fn today_ring_respects_flag() {
    let styles = make_styles(1.0);
    let metrics =
      CellMetrics::for_screen_width(375.0);
    let mut today = cell(DayType::None);
    today.is_today = true;

    let shown = day_appearance(
      Some(&today),
      &styles,
      &metrics,
      &DayColors::default(),
      true
    );
    assert!(shown.wrapper.contains(TODAY_COLOR));

    let hidden = day_appearance(
      Some(&today),
      &styles,
      &metrics,
      &DayColors::default(),
      false
    );
    assert!(!hidden.wrapper.contains(TODAY_COLOR));
  }
}
