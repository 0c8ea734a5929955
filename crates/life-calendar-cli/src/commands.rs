use anyhow::{bail, Context, Result};
use calendar_delta::{months_since, summarize, weeks_since, ymd_since, DateInput};
use tracing::{info, warn};

use crate::cli::{Command, DeltaArgs};
use crate::config::LifeCalendarConfig;
use crate::output;

/// Execute one subcommand and return what should be printed on stdout.
pub fn run(command: Command, config: &LifeCalendarConfig, json: bool) -> Result<String> {
    match command {
        Command::Months(args) => {
            let (start, reference) = resolve_dates(&args, config)?;
            let months = months_since(start, reference);
            info!(months, "computed full months");
            Ok(render_count("months", months, json))
        }
        Command::Weeks(args) => {
            let (start, reference) = resolve_dates(&args, config)?;
            let weeks = weeks_since(start, reference);
            info!(weeks, "computed full weeks");
            Ok(render_count("weeks", weeks, json))
        }
        Command::Ymd(args) => {
            let (start, reference) = resolve_dates(&args, config)?;
            let delta = ymd_since(start, reference);
            info!(?delta, "computed years/months/days");
            if json {
                Ok(serde_json::to_string_pretty(&delta)?)
            } else {
                Ok(output::format_ymd(&delta))
            }
        }
        Command::Summary(args) => {
            let (start, reference) = resolve_dates(&args, config)?;
            let summary = summarize(start.clone(), reference.clone())
                .with_context(|| format!("cannot interpret dates {start:?} / {reference:?}"))?;
            if json {
                Ok(serde_json::to_string_pretty(&summary)?)
            } else {
                Ok(output::format_summary(&summary))
            }
        }
    }
}

/// Pick the start and reference inputs: CLI arguments first, then config.
/// A missing reference is left absent so the engine uses today.
fn resolve_dates(args: &DeltaArgs, config: &LifeCalendarConfig) -> Result<(DateInput, DateInput)> {
    let Some(start) = args.date.as_ref().or(config.birth_date.as_ref()) else {
        bail!("no DATE given and no birth_date in config");
    };
    let reference = args.reference.as_ref().or(config.reference_date.as_ref());

    let start = DateInput::from(start);
    let reference = DateInput::from(reference);
    if let Err(e) = start.to_calendar_date() {
        warn!(error = %e, "start date unusable, result will be zero");
    }
    Ok((start, reference))
}

fn render_count(key: &str, value: i64, json: bool) -> String {
    if json {
        output::count_json(key, value).to_string()
    } else {
        value.to_string()
    }
}
