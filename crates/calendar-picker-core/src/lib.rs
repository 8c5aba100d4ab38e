//! Month-grid calendar picker logic: grid layout, day classification and
//! the single/range selection state machine, independent of any UI
//! toolkit.

pub mod config;
pub mod date;
pub mod error;
pub mod grid;
pub mod header;
pub mod picker;
pub mod selection;
pub mod style;

pub use config::{
  PickerOptions,
  load_picker_options
};
pub use error::{
  PickerError,
  PickerResult
};
pub use grid::{
  DayCell,
  DayType,
  MAX_COLUMNS,
  MAX_ROWS,
  MonthGrid
};
pub use header::{
  HeaderModel,
  Navigation
};
pub use picker::{
  Cursor,
  PickerEvent,
  PickerSeed,
  PickerState,
  Transition,
  transition
};
pub use selection::{
  DateChange,
  RangeSelection,
  Selection
};
