use calendar_picker_core::style::{
  CellMetrics,
  DayColors,
  default_scale,
  make_styles
};
use calendar_picker_core::{
  DateChange,
  PickerEvent,
  PickerOptions,
  PickerResult,
  PickerSeed,
  PickerState,
  transition
};
use chrono::{
  Local,
  NaiveDate
};
use yew::{
  AttrValue,
  Callback,
  Html,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_state
};

use super::days::Days;
use super::header_controls::HeaderControls;
use super::week_days_labels::WeekDaysLabels;
use crate::screen_width;

#[derive(Properties, PartialEq)]
pub struct CalendarPickerProps {
  pub selected_date:           NaiveDate,
  #[prop_or_default]
  pub min_date:                Option<NaiveDate>,
  #[prop_or_default]
  pub max_date:                Option<NaiveDate>,
  #[prop_or_default]
  pub from_date:               Option<NaiveDate>,
  #[prop_or_default]
  pub to_date:                 Option<NaiveDate>,
  #[prop_or_default]
  pub on_date_change:          Callback<DateChange>,
  #[prop_or_default]
  pub allow_range_selection:   bool,
  #[prop_or_default]
  pub start_from_monday:       bool,
  #[prop_or(true)]
  pub highlight_today:         bool,
  #[prop_or_default]
  pub show_year_navigation:    bool,
  #[prop_or_default]
  pub weekdays:                Option<Vec<String>>,
  #[prop_or_default]
  pub months:                  Option<Vec<String>>,
  #[prop_or_default]
  pub previous_title:          Option<AttrValue>,
  #[prop_or_default]
  pub next_title:              Option<AttrValue>,
  #[prop_or_default]
  pub selected_day_color:      Option<AttrValue>,
  #[prop_or_default]
  pub selected_day_text_color: Option<AttrValue>,
  #[prop_or_default]
  pub text_style:              Option<AttrValue>,
  #[prop_or_default]
  pub scale_factor:            Option<f64>,
  #[prop_or_default]
  pub screen_width:            Option<f64>
}

impl CalendarPickerProps {
  /// Collects the presentation props into validated core options.
  pub fn options(
    &self
  ) -> PickerResult<PickerOptions> {
    let defaults = PickerOptions::default();
    let mut options = PickerOptions {
      allow_range_selection: self
        .allow_range_selection,
      start_from_monday: self
        .start_from_monday,
      highlight_today: self
        .highlight_today,
      show_year_navigation: self
        .show_year_navigation,
      min_date: self.min_date,
      max_date: self.max_date,
      weekdays: self.weekdays.clone(),
      months: self.months.clone(),
      previous_title: self
        .previous_title
        .as_deref()
        .map(str::to_string)
        .unwrap_or(defaults.previous_title),
      next_title: self
        .next_title
        .as_deref()
        .map(str::to_string)
        .unwrap_or(defaults.next_title),
      selected_day_color: self
        .selected_day_color
        .as_deref()
        .map(str::to_string),
      selected_day_text_color: self
        .selected_day_text_color
        .as_deref()
        .map(str::to_string),
      text_style: self
        .text_style
        .as_deref()
        .map(str::to_string),
      scale_factor: self.scale_factor,
      screen_width: self.screen_width
    };
    options.sanitize();
    options.validate()?;
    Ok(options)
  }

  pub fn seed(&self) -> PickerSeed {
    PickerSeed {
      selected_date: self.selected_date,
      from_date:     self.from_date,
      to_date:       self.to_date
    }
  }

  pub fn seed_inputs(&self) -> SeedInputs {
    SeedInputs {
      seed:                  self.seed(),
      allow_range_selection: self
        .allow_range_selection,
      min_date:              self.min_date,
      max_date:              self.max_date
    }
  }
}

/// Props that reset the picker state when the embedder changes them.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct SeedInputs {
  pub seed:                  PickerSeed,
  pub allow_range_selection: bool,
  pub min_date:              Option<NaiveDate>,
  pub max_date:              Option<NaiveDate>
}

/// Picker state together with the inputs it was built from. `state` is
/// `None` when those inputs were rejected.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
struct Seeded {
  inputs: SeedInputs,
  state:  Option<PickerState>
}

impl Seeded {
  fn build(
    inputs: SeedInputs,
    options: PickerResult<PickerOptions>
  ) -> Self {
    let state = options.and_then(|options| {
      PickerState::new(inputs.seed, &options)
    });
    match state {
      | Ok(state) => Self {
        inputs,
        state: Some(state)
      },
      | Err(error) => {
        tracing::error!(%error, "rejected picker props");
        Self {
          inputs,
          state: None
        }
      }
    }
  }
}

/// Returns a rebuilt state only when the seed inputs differ from the ones
/// the current state came from.
fn reseed(
  current: &Seeded,
  inputs: SeedInputs,
  options: PickerResult<PickerOptions>
) -> Option<Seeded> {
  if current.inputs == inputs {
    return None;
  }
  tracing::debug!(?inputs, "reseeding picker from props");
  Some(Seeded::build(inputs, options))
}

#[function_component(CalendarPicker)]
pub fn calendar_picker(
  props: &CalendarPickerProps
) -> Html {
  let seeded = use_state(|| {
    Seeded::build(
      props.seed_inputs(),
      props.options()
    )
  });

  {
    let seeded = seeded.clone();
    let options = props.options();
    use_effect_with(
      props.seed_inputs(),
      move |inputs| {
        if let Some(next) =
          reseed(&seeded, *inputs, options)
        {
          seeded.set(next);
        }
      }
    );
  }

  let options = match props.options() {
    | Ok(options) => options,
    | Err(error) => {
      return html! {
          <div class="calendar calendar-error">{ error.to_string() }</div>
      };
    }
  };
  let Seeded {
    inputs,
    state: Some(current)
  } = *seeded
  else {
    return html! {
        <div class="calendar calendar-error">{ "invalid picker state" }</div>
    };
  };

  let dispatch = {
    let seeded = seeded.clone();
    let on_date_change =
      props.on_date_change.clone();
    Callback::from(move |event: PickerEvent| {
      let step = transition(&current, event);
      if let Some(change) = step.change {
        seeded.set(Seeded {
          inputs,
          state: Some(step.state)
        });
        on_date_change.emit(change);
      }
    })
  };
  let on_day_change = dispatch.reform(PickerEvent::DayTapped);
  let on_navigate = dispatch.reform(PickerEvent::Navigate);

  let width = options
    .screen_width
    .unwrap_or_else(screen_width);
  let scale = options
    .scale_factor
    .unwrap_or_else(|| default_scale(width));
  let styles = make_styles(scale);
  let metrics =
    CellMetrics::for_screen_width(width);
  let colors = DayColors {
    selected_day_color:      options
      .selected_day_color
      .clone(),
    selected_day_text_color: options
      .selected_day_text_color
      .clone()
  };
  let text_style = options
    .text_style
    .clone()
    .map(AttrValue::from);
  let today = Local::now().date_naive();

  let params = match current.grid_params(
    &options,
    Some(today)
  ) {
    | Ok(params) => params,
    | Err(error) => {
      return html! {
          <div class="calendar calendar-error">{ error.to_string() }</div>
      };
    }
  };

  html! {
      <div
          class="calendar"
          style={format!("margin-top:{:.2}px;", styles.calendar_margin_top)}
      >
          <HeaderControls
              model={current.header(&options)}
              styles={styles}
              text_style={text_style.clone()}
              on_navigate={on_navigate}
          />
          <WeekDaysLabels
              labels={options.weekday_labels()}
              styles={styles}
              metrics={metrics}
              text_style={text_style.clone()}
          />
          <Days
              params={params}
              styles={styles}
              metrics={metrics}
              colors={colors}
              text_style={text_style}
              highlight_today={options.highlight_today}
              on_day_change={on_day_change}
          />
      </div>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ymd(
    year: i32,
    month: u32,
    day: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(
      year, month, day
    )
    .expect("valid date")
  }

  fn props() -> CalendarPickerProps {
    CalendarPickerProps {
      selected_date:           ymd(2024, 1, 15),
      min_date:                None,
      max_date:                None,
      from_date:               None,
      to_date:                 None,
      on_date_change:          Callback::noop(),
      allow_range_selection:   false,
      start_from_monday:       false,
      highlight_today:         true,
      show_year_navigation:    false,
      weekdays:                None,
      months:                  None,
      previous_title:          None,
      next_title:              Some(AttrValue::from("  ")),
      selected_day_color:      Some(AttrValue::from("#ff0000")),
      selected_day_text_color: None,
      text_style:              None,
      scale_factor:            None,
      screen_width:            Some(375.0)
    }
  }

  #[test]
  fn props_map_onto_sanitized_options() {
    let options =
      props().options().expect("valid props");
    assert_eq!(options.previous_title, "Previous");
    assert_eq!(options.next_title, "Next");
    assert_eq!(
      options.selected_day_color.as_deref(),
      Some("#ff0000")
    );
    assert!(options.highlight_today);
  }

  fn seeded(
    props: &CalendarPickerProps
  ) -> Seeded {
    Seeded::build(
      props.seed_inputs(),
      props.options()
    )
  }

  #[test]
  fn inverted_range_props_are_rejected() {
    let mut props = props();
    props.allow_range_selection = true;
    props.from_date = Some(ymd(2024, 1, 20));
    props.to_date = Some(ymd(2024, 1, 10));
    assert_eq!(seeded(&props).state, None);
  }

  #[test]
  fn range_props_seed_cursor_at_start() {
    let mut props = props();
    props.allow_range_selection = true;
    props.from_date = Some(ymd(2024, 3, 2));
    let state = seeded(&props)
      .state
      .expect("valid props");
    assert_eq!(state.month0(), 2);
    assert_eq!(state.cursor().day, 2);
  }

  #[test]
  fn unchanged_props_keep_the_current_state() {
    let props = props();
    let current = seeded(&props);
    assert_eq!(
      reseed(
        &current,
        props.seed_inputs(),
        props.options()
      ),
      None
    );

    // Local navigation survives a re-render with the same props.
    let state = current.state.expect("valid props");
    let step = transition(
      &state,
      PickerEvent::DayTapped(20)
    );
    let current = Seeded {
      inputs: current.inputs,
      state:  Some(step.state)
    };
    assert_eq!(
      reseed(
        &current,
        props.seed_inputs(),
        props.options()
      ),
      None
    );
  }

  #[test]
  fn changed_selected_date_reseeds_the_cursor() {
    let mut props = props();
    let current = seeded(&props);
    props.selected_date = ymd(2024, 7, 4);
    let next = reseed(
      &current,
      props.seed_inputs(),
      props.options()
    )
    .expect("reseeded");
    assert_eq!(next.inputs, props.seed_inputs());
    let state = next.state.expect("valid props");
    assert_eq!(state.month0(), 6);
    assert_eq!(state.cursor().day, 4);
  }

  #[test]
  fn changed_props_that_fail_validation_clear_the_state() {
    let mut props = props();
    let current = seeded(&props);
    props.min_date = Some(ymd(2024, 5, 1));
    props.max_date = Some(ymd(2024, 4, 1));
    let next = reseed(
      &current,
      props.seed_inputs(),
      props.options()
    )
    .expect("reseeded");
    assert_eq!(next.state, None);
  }
}
