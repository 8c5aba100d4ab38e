use calendar_picker_core::style::{
  CalendarStyles,
  CellMetrics
};
use yew::{
  AttrValue,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct WeekDaysLabelsProps {
  pub labels:     Vec<String>,
  pub styles:     CalendarStyles,
  pub metrics:    CellMetrics,
  #[prop_or_default]
  pub text_style: Option<AttrValue>
}

#[function_component(WeekDaysLabels)]
pub fn week_days_labels(
  props: &WeekDaysLabelsProps
) -> Html {
  let style = format!(
    "width:{:.2}px;font-size:{:.2}px;text-align:center;{}",
    props.metrics.day_width,
    props.styles.day_labels_font_size,
    props.text_style.as_deref().unwrap_or_default()
  );
  html! {
      <div class="calendar-weekday-row">
          {
              for props.labels.iter().map(|label| html! {
                  <div class="calendar-weekday" style={style.clone()}>{ label.clone() }</div>
              })
          }
      </div>
  }
}
