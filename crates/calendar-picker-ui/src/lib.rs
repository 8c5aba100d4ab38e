//! Yew components for the month-grid calendar picker.

pub mod components;

pub use components::{
  CalendarPicker,
  CalendarPickerProps
};

use calendar_picker_core::style::BASE_SCREEN_WIDTH;

/// Current viewport width, falling back to the base layout width when no
/// window is available.
pub fn screen_width() -> f64 {
  web_sys::window()
    .and_then(|window| {
      window.inner_width().ok()
    })
    .and_then(|width| width.as_f64())
    .unwrap_or(BASE_SCREEN_WIDTH)
}
