//! Terminal entry point for the timeline engine.
//!
//! # Responsibility
//! - Load a payload, replay legend/search interactions, print the layout.
//! - Keep a tiny `ping`/`version` probe for core crate wiring.

mod report;
mod text_host;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;
use std::path::PathBuf;
use text_host::{TextHost, TextMetrics};
use timeline_core::{
    BootstrapOutcome, FileSource, TimelineConfig, TimelineController, TimelineEvent,
};

#[derive(Debug, Parser)]
#[command(name = "timeline", version, about = "Filter and lay out an era timeline")]
struct Cli {
    /// Absolute directory for rotating log files; logging is off without it.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prints `pong` from the core crate.
    Ping,
    /// Prints the core crate version.
    Version,
    /// Lays out the timeline after replaying legend and search input.
    Layout(LayoutArgs),
    /// Prints legend entries.
    Legend(SourceArgs),
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Timeline payload; defaults to the configured data path.
    #[arg(long)]
    data: Option<PathBuf>,
    /// TOML engine configuration.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct LayoutArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Viewport width in layout pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,
    /// Single-click these legend categories, in order.
    #[arg(long = "toggle", value_name = "CATEGORY")]
    toggles: Vec<String>,
    /// Double-click these legend categories, in order, after toggles.
    #[arg(long = "solo", value_name = "CATEGORY")]
    solos: Vec<String>,
    /// Search text applied last.
    #[arg(long)]
    query: Option<String>,
    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or(timeline_core::default_log_level());
        timeline_core::init_logging(level, &log_dir.to_string_lossy())
            .context("failed to initialize logging")?;
    }

    match cli.command {
        Command::Ping => println!("timeline_core ping={}", timeline_core::ping()),
        Command::Version => println!("timeline_core version={}", timeline_core::core_version()),
        Command::Layout(args) => run_layout(args)?,
        Command::Legend(args) => run_legend(args)?,
    }
    Ok(())
}

fn run_layout(args: LayoutArgs) -> Result<()> {
    let Some(mut controller) = bootstrap(&args.source, args.width)? else {
        return Ok(());
    };

    let schedule = controller.relayout_schedule();
    debug!(
        "event=cli_layout module=cli relayout_delays={:?}",
        schedule.delays
    );
    if schedule.on_window_load {
        controller.handle(TimelineEvent::WindowLoad);
    }

    for key in args.toggles {
        controller.handle(TimelineEvent::LegendClick(key));
    }
    for key in args.solos {
        controller.handle(TimelineEvent::LegendDoubleClick(key));
    }
    if let Some(query) = args.query {
        controller.handle(TimelineEvent::SearchInput(query));
    }

    let report = report::LayoutReport::new(&controller);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

fn run_legend(args: SourceArgs) -> Result<()> {
    let Some(controller) = bootstrap(&args, 1280.0)? else {
        return Ok(());
    };
    for entry in &controller.host().legend {
        println!("{}\t{}\t{}", entry.key, entry.label, entry.color);
    }
    Ok(())
}

/// Returns `None` after printing the fallback message when loading fails.
fn bootstrap(args: &SourceArgs, width: f64) -> Result<Option<TimelineController<TextHost>>> {
    let config = match &args.config {
        Some(path) => TimelineConfig::load(path)
            .with_context(|| format!("failed to load config `{}`", path.display()))?,
        None => TimelineConfig::default(),
    };
    let data_path = args
        .data
        .clone()
        .unwrap_or_else(|| config.data_path.clone());

    let host = TextHost::new(width, TextMetrics::default());
    let outcome = TimelineController::bootstrap(host, &FileSource::new(data_path), config)?;
    match outcome {
        BootstrapOutcome::Ready(controller) => Ok(Some(controller)),
        BootstrapOutcome::Fallback { host, error } => {
            debug!("event=cli_bootstrap module=cli status=fallback error={}", error);
            if let Some(message) = host.fallback {
                println!("{message}");
            }
            Ok(None)
        }
    }
}
