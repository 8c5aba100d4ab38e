pub mod cli;
pub mod render;

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use calendar_picker_core::{PickerError, PickerOptions, PickerSeed, PickerState, transition};
use chrono::Local;
use clap::Parser;
use tracing::{debug, info, warn};

use crate::cli::GlobalCli;
use crate::render::Renderer;

#[tracing::instrument(skip_all)]
pub fn run(raw_args: Vec<OsString>) -> anyhow::Result<()> {
    let cli = GlobalCli::parse_from(raw_args);

    cli::init_tracing(cli.verbose, cli.quiet)?;

    info!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        steps = cli.steps.len(),
        "starting calpick"
    );

    let options = resolve_options(&cli)?;
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let seed = PickerSeed {
        selected_date: cli.date.unwrap_or(today),
        from_date: cli.from,
        to_date: cli.to,
    };
    let mut state =
        PickerState::new(seed, &options).context("invalid picker inputs")?;

    let mut out = io::stdout().lock();
    for step in &cli.steps {
        let next = transition(&state, step.0);
        match next.change {
            Some(change) => {
                let json = serde_json::to_string(&change)
                    .context("failed to encode date change")?;
                writeln!(out, "{json}")?;
            }
            None => warn!(?step, "step ignored"),
        }
        state = next.state;
    }

    let grid = state
        .month_grid(&options, Some(today))
        .context("failed to build month grid")?;
    Renderer::new(!cli.no_color).print_month(
        &mut out,
        &state.header(&options),
        &options.weekday_labels(),
        &grid,
        options.highlight_today,
    )?;

    info!("done");
    Ok(())
}

/// Config file first, then command-line flags on top.
fn resolve_options(cli: &GlobalCli) -> anyhow::Result<PickerOptions> {
    let mut options = match cli.config.as_deref() {
        Some(path) => load_config_file(path)?,
        None => PickerOptions::default(),
    };

    if cli.range {
        options.allow_range_selection = true;
    }
    if cli.monday {
        options.start_from_monday = true;
    }
    if cli.min.is_some() {
        options.min_date = cli.min;
    }
    if cli.max.is_some() {
        options.max_date = cli.max;
    }
    if cli.to.is_some() && cli.from.is_none() {
        return Err(PickerError::RangeEndWithoutStart).context("invalid picker inputs");
    }
    if cli.from.is_some() && !options.allow_range_selection {
        debug!("--from given; enabling range selection");
        options.allow_range_selection = true;
    }

    options.validate().context("invalid picker options")?;
    Ok(options)
}

fn load_config_file(path: &Path) -> anyhow::Result<PickerOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    info!(config = %path.display(), "loading picker config");
    PickerOptions::from_toml_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))
}
