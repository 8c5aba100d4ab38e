use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use calendar_picker_core::{Navigation, PickerEvent};
use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// One replayed interaction, written as `tap:<day>`, `prev`, `next`,
/// `prev-year` or `next-year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step(pub PickerEvent);

impl std::str::FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().to_ascii_lowercase();
        let event = match raw.as_str() {
            "prev" | "previous" => PickerEvent::Navigate(Navigation::PrevMonth),
            "next" => PickerEvent::Navigate(Navigation::NextMonth),
            "prev-year" => PickerEvent::Navigate(Navigation::PrevYear),
            "next-year" => PickerEvent::Navigate(Navigation::NextYear),
            other => {
                let day = other
                    .strip_prefix("tap:")
                    .ok_or_else(|| anyhow!("unknown step: {s}"))?;
                let day = day
                    .parse::<u32>()
                    .with_context(|| format!("invalid day in step: {s}"))?;
                PickerEvent::DayTapped(day)
            }
        };
        Ok(Self(event))
    }
}

fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("expected YYYY-MM-DD, got: {s}"))
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "calpick",
    version,
    about = "Month-grid calendar picker for the terminal"
)]
pub struct GlobalCli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// TOML file with picker options; flags below override it.
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Initially selected date (defaults to today).
    #[arg(long = "date", value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    #[arg(long = "from", value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    #[arg(long = "to", value_parser = parse_date)]
    pub to: Option<NaiveDate>,

    #[arg(long = "min", value_parser = parse_date)]
    pub min: Option<NaiveDate>,

    #[arg(long = "max", value_parser = parse_date)]
    pub max: Option<NaiveDate>,

    /// Select a start/end range instead of a single date.
    #[arg(long = "range")]
    pub range: bool,

    #[arg(long = "monday")]
    pub monday: bool,

    /// Date to mark as today (defaults to the local clock).
    #[arg(long = "today", value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Interactions to replay, in order.
    #[arg(value_parser = clap::builder::ValueParser::new(|s: &str| s.parse::<Step>()))]
    pub steps: Vec<Step>,
}

pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}
