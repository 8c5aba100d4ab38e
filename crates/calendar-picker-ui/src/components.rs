mod calendar_picker;
mod day;
mod days;
mod header_controls;
mod week_days_labels;

pub use calendar_picker::{
  CalendarPicker,
  CalendarPickerProps
};
pub use day::{
  Day,
  DayProps
};
pub use days::{
  Days,
  DaysProps
};
pub use header_controls::{
  HeaderControls,
  HeaderControlsProps
};
pub use week_days_labels::{
  WeekDaysLabels,
  WeekDaysLabelsProps
};
