use calendar_picker_core::DayCell;
use calendar_picker_core::style::{
  CalendarStyles,
  CellMetrics,
  DayColors,
  day_appearance
};
use yew::{
  AttrValue,
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct DayProps {
  pub cell:            Option<DayCell>,
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

#[function_component(Day)]
pub fn day(props: &DayProps) -> Html {
  let appearance = day_appearance(
    props.cell.as_ref(),
    &props.styles,
    &props.metrics,
    &props.colors,
    props.highlight_today
  );
  let text_style = props
    .text_style
    .as_deref()
    .unwrap_or_default();
  let label_style =
    format!("{text_style}{}", appearance.label);

  let Some(cell) = props.cell.as_ref() else {
    return html! {
        <div class="calendar-day blank" style={appearance.wrapper}></div>
    };
  };

  let day = cell.day;
  let kind = cell.kind.as_key();
  let class = classes!(
    "calendar-day",
    kind,
    cell.disabled.then_some("disabled"),
    cell.is_today.then_some("today")
  );

  if !cell.interactive() {
    return html! {
        <div class={class} style={appearance.wrapper} data-date={cell.date.to_string()}>
            <div class="calendar-day-button" style={appearance.button}>
                <span class="calendar-day-label" style={label_style}>{ day }</span>
            </div>
        </div>
    };
  }

  let on_day_change =
    props.on_day_change.clone();
  html! {
      <div class={class} style={appearance.wrapper} data-date={cell.date.to_string()}>
          <button
              type="button"
              class="calendar-day-button"
              style={appearance.button}
              onclick={Callback::from(move |_| on_day_change.emit(day))}
          >
              <span class="calendar-day-label" style={label_style}>{ day }</span>
          </button>
      </div>
  }
}
