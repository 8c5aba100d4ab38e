use calendar_picker_core::style::CalendarStyles;
use calendar_picker_core::{
  HeaderModel,
  Navigation
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
pub struct HeaderControlsProps {
  pub model:       HeaderModel,
  pub styles:      CalendarStyles,
  #[prop_or_default]
  pub text_style:  Option<AttrValue>,
  pub on_navigate: Callback<Navigation>
}

#[function_component(HeaderControls)]
pub fn header_controls(
  props: &HeaderControlsProps
) -> Html {
  let text_style = props
    .text_style
    .as_deref()
    .unwrap_or_default();
  let nav_style = format!(
    "font-size:{:.2}px;{text_style}",
    props.styles.nav_font_size
  );

  let control = |navigation: Navigation,
                 title: &str,
                 extra: &'static str| {
    let disabled =
      props.model.is_disabled(navigation);
    let on_navigate =
      props.on_navigate.clone();
    html! {
        <button
            type="button"
            class={classes!("calendar-nav-btn", extra, disabled.then_some("disabled"))}
            style={nav_style.clone()}
            disabled={disabled}
            onclick={Callback::from(move |_| {
                if !disabled {
                    on_navigate.emit(navigation);
                }
            })}
        >
            { title.to_string() }
        </button>
    }
  };

  let year_control =
    |navigation: Navigation,
     title: &str,
     extra: &'static str| {
      if props.model.show_year_navigation {
        control(navigation, title, extra)
      } else {
        html! {}
      }
    };

  html! {
      <div
          class="calendar-header"
          style={format!("padding:{:.2}px;display:flex;align-items:center;justify-content:space-between;", props.styles.header_padding)}
      >
          <div class="calendar-month-selector">
              { year_control(Navigation::PrevYear, "«", "prev-year") }
              { control(Navigation::PrevMonth, props.model.previous_title.as_str(), "prev") }
          </div>
          <div
              class="calendar-month-label"
              style={format!(
                  "font-size:{:.2}px;min-width:{:.2}px;text-align:center;{text_style}",
                  props.styles.month_label_font_size,
                  props.styles.month_label_width
              )}
          >
              { props.model.label.clone() }
          </div>
          <div class="calendar-month-selector">
              { control(Navigation::NextMonth, props.model.next_title.as_str(), "next") }
              { year_control(Navigation::NextYear, "»", "next-year") }
          </div>
      </div>
  }
}
