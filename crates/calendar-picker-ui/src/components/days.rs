use calendar_picker_core::grid::{
  GridParams,
  build_month_grid
};
use calendar_picker_core::style::{
  CalendarStyles,
  CellMetrics,
  DayColors
};
use yew::{
  AttrValue,
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::day::Day;

#[derive(Properties, PartialEq)]
pub struct DaysProps {
  pub params:          GridParams,
  pub styles:          CalendarStyles,
  pub metrics:         CellMetrics,
  #[prop_or_default]
  pub colors:          DayColors,
  #[prop_or_default]
  pub text_style:      Option<AttrValue>,
  #[prop_or(true)]
  pub highlight_today: bool,
  pub on_day_change:   Callback<u32>
}

/// Month matrix. The grid is rebuilt from props on every render so the
/// classification always reflects the owning picker's current state.
#[function_component(Days)]
pub fn days(props: &DaysProps) -> Html {
  let grid = match build_month_grid(
    &props.params
  ) {
    | Ok(grid) => grid,
    | Err(error) => {
      tracing::error!(%error, "failed building month grid");
      return html! {
          <div class="calendar-days error">{ error.to_string() }</div>
      };
    }
  };

  html! {
      <div class="calendar-days">
          {
              for grid.rows().iter().enumerate().map(|(row_index, row)| html! {
                  <div class="calendar-week-row" key={row_index}>
                      {
                          for row.iter().enumerate().map(|(column, cell)| html! {
                              <Day
                                  key={column}
                                  cell={cell.clone()}
                                  styles={props.styles}
                                  metrics={props.metrics}
                                  colors={props.colors.clone()}
                                  text_style={props.text_style.clone()}
                                  highlight_today={props.highlight_today}
                                  on_day_change={props.on_day_change.clone()}
                              />
                          })
                      }
                  </div>
              })
          }
      </div>
  }
}
