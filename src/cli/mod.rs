//! Terminal front end: loads the sheet, renders the dashboard, optionally keeps
//! it refreshed.

pub mod output;
pub mod ui;

use std::{env, path::PathBuf, thread, time::Duration as StdDuration};

use chrono::Utc;

use crate::{
    budget::PortfolioSummary,
    config::{ConfigManager, DashboardConfig},
    core::{seconds_to_duration, LiveDashboard, RefreshSchedule, SummaryService},
    errors::{CliError, DashboardError},
    storage::{source_for_path, SnapshotCache},
};

use output::OutputPreferences;
use ui::{palette_for, render_dashboard, DashboardView};

const MIN_POLL: StdDuration = StdDuration::from_millis(250);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub file: Option<PathBuf>,
    pub sheet: Option<String>,
    pub config: Option<PathBuf>,
    pub interval: Option<u64>,
    pub json: bool,
    pub plain: bool,
    pub watch: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show(CliOptions),
    Help,
    Version,
}

pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-f" | "--file" => options.file = Some(PathBuf::from(value_for(&arg, args.next())?)),
            "-s" | "--sheet" => options.sheet = Some(value_for(&arg, args.next())?),
            "-c" | "--config" => {
                options.config = Some(PathBuf::from(value_for(&arg, args.next())?))
            }
            "-i" | "--interval" => {
                let raw = value_for(&arg, args.next())?;
                let secs = raw.parse::<u64>().ok().filter(|secs| *secs > 0).ok_or_else(|| {
                    CliError::Input(format!("`{raw}` is not a positive number of seconds"))
                })?;
                options.interval = Some(secs);
            }
            "--json" => options.json = true,
            "--plain" => options.plain = true,
            "-w" | "--watch" => options.watch = true,
            other => return Err(CliError::Input(format!("unknown argument `{other}`"))),
        }
    }
    Ok(Command::Show(options))
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, CliError> {
    value
        .filter(|v| !v.starts_with('-') || v.len() == 1)
        .ok_or_else(|| CliError::Input(format!("`{flag}` expects a value")))
}

/// Applies command line overrides on top of the stored configuration.
pub fn resolve_config(options: &CliOptions) -> Result<DashboardConfig, CliError> {
    let manager = match &options.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };
    let mut config = manager.load()?;
    if let Some(file) = &options.file {
        config.file_path = file.clone();
    }
    if let Some(sheet) = &options.sheet {
        config.sheet_name = sheet.clone();
    }
    if let Some(interval) = options.interval {
        config.refresh_interval_secs = interval;
    }
    config.plain_mode |= options.plain;
    config.validate()?;
    Ok(config)
}

pub fn run_cli() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Version => {
            println!("{}", version_string());
            Ok(())
        }
        Command::Show(options) => {
            let config = resolve_config(&options)?;
            output::set_preferences(OutputPreferences {
                plain_mode: config.plain_mode || options.json,
                quiet_mode: options.json,
            });
            if options.watch {
                watch(&config, options.json)
            } else {
                show_once(&config, options.json)
            }
        }
    }
}

fn show_once(config: &DashboardConfig, json: bool) -> Result<(), CliError> {
    let source = source_for_path(&config.file_path, &config.sheet_name)?;
    let summary = SummaryService::load(&source)?;
    println!("{}", render(config, &summary, json)?);
    Ok(())
}

/// Re-renders on the refresh schedule until interrupted. Load failures are
/// reported and the last good dashboard stays on screen.
fn watch(config: &DashboardConfig, json: bool) -> Result<(), CliError> {
    let source = source_for_path(&config.file_path, &config.sheet_name)?;
    output::info(format!(
        "Watching {} every {}s",
        source.describe(),
        config.refresh_interval_secs
    ));
    let mut cache = SnapshotCache::new(source, seconds_to_duration(config.cache_ttl_secs));
    let mut schedule = RefreshSchedule::every_seconds(config.refresh_interval_secs);
    let live = LiveDashboard::default();

    loop {
        let now = Utc::now();
        if schedule.is_due(now) {
            match cache.rows(now) {
                Ok(rows) => {
                    live.replace(SummaryService::summarize(&rows));
                }
                Err(err) => {
                    output::warning(format!("refresh failed, keeping last data: {err}"))
                }
            }
            schedule.mark_refreshed(now);
            if !config.plain_mode && !json {
                print!("\u{1b}[2J\u{1b}[H");
            }
            println!("{}", render(config, &live.current(), json)?);
        }
        let wait = schedule
            .wait_time(Utc::now())
            .to_std()
            .unwrap_or(MIN_POLL)
            .max(MIN_POLL);
        thread::sleep(wait);
    }
}

fn render(
    config: &DashboardConfig,
    summary: &PortfolioSummary,
    json: bool,
) -> Result<String, CliError> {
    let report = SummaryService::report(summary);
    if json {
        let body = serde_json::to_string_pretty(&report).map_err(DashboardError::from)?;
        return Ok(body);
    }
    let palette = palette_for(config.plain_mode);
    let view = DashboardView {
        title: &config.title,
        bar_width: config.bar_width,
        plain: config.plain_mode,
        palette: palette.as_ref(),
    };
    Ok(render_dashboard(&report, &view))
}

pub fn version_string() -> String {
    format!(
        "budget_dashboard_cli {} ({} {}, built {}, {}/{}, {})",
        env!("CARGO_PKG_VERSION"),
        env!("BUDGET_DASHBOARD_BUILD_HASH"),
        env!("BUDGET_DASHBOARD_BUILD_STATUS"),
        env!("BUDGET_DASHBOARD_BUILD_TIMESTAMP"),
        env!("BUDGET_DASHBOARD_BUILD_TARGET"),
        env!("BUDGET_DASHBOARD_BUILD_PROFILE"),
        env!("BUDGET_DASHBOARD_BUILD_RUSTC"),
    )
}

fn print_usage() {
    println!(
        "Usage: budget_dashboard_cli [options]\n\
         Options:\n  \
         -f, --file <path>        budget sheet (.xlsx, .xls, .ods, .csv, .json)\n  \
         -s, --sheet <name>       worksheet to read from a workbook\n  \
         -c, --config <path>      configuration file\n  \
         -i, --interval <secs>    refresh interval for --watch\n  \
         -w, --watch              keep the dashboard refreshed\n      \
         --json               print the summary as JSON\n      \
         --plain              no colors or box-drawing characters\n  \
         -V, --version            print build information\n  \
         -h, --help               show this help"
    );
}
