use calendar_picker_core::{
  DateChange,
  load_picker_options
};
use calendar_picker_ui::CalendarPicker;
use chrono::Local;
use yew::{
  AttrValue,
  Callback,
  Html,
  function_component,
  html,
  use_state
};

const PICKER_CONFIG_TOML: &str = include_str!(
  "../assets/calendar-picker.toml"
);

#[function_component(Demo)]
fn demo() -> Html {
  let options = use_state(|| {
    load_picker_options(
      PICKER_CONFIG_TOML
    )
  });
  let last_change =
    use_state(|| None::<DateChange>);

  let on_date_change = {
    let last_change = last_change.clone();
    Callback::from(move |change: DateChange| {
      match serde_json::to_string(&change) {
        | Ok(json) => {
          tracing::info!(%json, "date changed")
        }
        | Err(error) => {
          tracing::warn!(%error, "failed encoding date change")
        }
      }
      last_change.set(Some(change));
    })
  };

  let summary = match *last_change {
    | Some(DateChange::Single(date)) => {
      format!("selected {date}")
    }
    | Some(DateChange::Range {
      start_date,
      end_date: Some(end_date)
    }) => {
      format!("{start_date} to {end_date}")
    }
    | Some(DateChange::Range {
      start_date,
      end_date: None
    }) => {
      format!("{start_date} to ...")
    }
    | None => "nothing selected".to_string()
  };

  html! {
      <div class="calendar-demo">
          <CalendarPicker
              selected_date={Local::now().date_naive()}
              min_date={options.min_date}
              max_date={options.max_date}
              on_date_change={on_date_change}
              allow_range_selection={options.allow_range_selection}
              start_from_monday={options.start_from_monday}
              highlight_today={options.highlight_today}
              show_year_navigation={options.show_year_navigation}
              weekdays={options.weekdays.clone()}
              months={options.months.clone()}
              previous_title={AttrValue::from(options.previous_title.clone())}
              next_title={AttrValue::from(options.next_title.clone())}
              selected_day_color={options.selected_day_color.clone()}
              selected_day_text_color={options.selected_day_text_color.clone()}
              text_style={options.text_style.clone()}
              scale_factor={options.scale_factor}
              screen_width={options.screen_width}
          />
          <div class="calendar-demo-summary">{ summary }</div>
      </div>
  }
}

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting calendar picker demo"
  );

  let Some(mount) = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.get_element_by_id("app")
    })
  else {
    tracing::error!("missing #app mount element");
    return;
  };

  yew::Renderer::<Demo>::with_root(
    mount
  )
  .render();
}
