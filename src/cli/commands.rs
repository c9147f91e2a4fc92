//! Command implementation for the epw2wth CLI
//!
//! Sets up logging, loads the configuration, opens the input and output
//! files and runs the conversion with progress reporting.

use crate::app::models::ConversionStats;
use crate::cli::args::Args;
use crate::config::ConversionConfig;
use crate::constants::LOG_TARGET;
use crate::processor::convert_epw;
use anyhow::{Context, Result};
use colored::*;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Message printed after a successful conversion
pub const SUCCESS_MESSAGE: &str = "CONTAM Weather file created successfully.";

/// Message printed when the conversion fails
pub const FAILURE_MESSAGE: &str = "Weather file conversion failed.";

/// Run a conversion from command-line arguments
///
/// The configuration and input are checked before the output file is
/// created, so a bad configuration leaves no output behind.
pub fn run(args: Args) -> Result<ConversionStats> {
    setup_logging(&args);

    for warning in args.extension_warnings() {
        warn!("{}", warning);
    }

    let config = load_configuration(args.config_file.as_deref())?;

    let input = File::open(&args.epw_file)
        .with_context(|| format!("Failed to open EPW file {}", args.epw_file.display()))?;
    let input_size = input.metadata().map(|m| m.len()).unwrap_or(0);

    let output = File::create(&args.wth_file).with_context(|| {
        format!(
            "Failed to create weather file {}",
            args.wth_file.display()
        )
    })?;

    info!(
        "Converting {} to {}",
        args.epw_file.display(),
        args.wth_file.display()
    );

    let progress = create_progress_bar(&args, input_size)?;
    let start_time = Instant::now();

    let result = convert_epw(&config, BufReader::new(progress.wrap_read(input)), output);
    progress.finish_and_clear();

    let stats = result.with_context(|| {
        format!(
            "Failed to convert {} to {}",
            args.epw_file.display(),
            args.wth_file.display()
        )
    })?;

    println!("{}", SUCCESS_MESSAGE.bright_green());
    if !args.quiet {
        print_summary(&stats, start_time.elapsed());
    }

    Ok(stats)
}

/// Set up tracing with the verbosity selected on the command line
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load the JSON configuration, or the defaults when no file is given
pub fn load_configuration(path: Option<&Path>) -> Result<ConversionConfig> {
    match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ConversionConfig::from_file(path)
                .with_context(|| format!("Invalid configuration file {}", path.display()))
        }
        None => {
            info!("No configuration file given, converting the whole EPW data period");
            Ok(ConversionConfig::default())
        }
    }
}

fn create_progress_bar(args: &Args, total_bytes: u64) -> Result<ProgressBar> {
    if !args.show_progress() {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new(total_bytes);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}",
            )?
            .progress_chars("#>-"),
    );
    pb.set_message("Converting weather records...");
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

fn print_summary(stats: &ConversionStats, elapsed: Duration) {
    println!("\n{}", "Conversion Summary".bright_green().bold());
    println!("  {} {}", "Description:".bright_cyan(), stats.description);
    println!(
        "  {} {} to {} ({} days)",
        "Date range:".bright_cyan(),
        stats.start_date.bright_white().bold(),
        stats.end_date.bright_white().bold(),
        stats.days_written
    );
    println!(
        "  {} {} read, {} outside the date range",
        "Records:".bright_cyan(),
        stats.records_read.to_string().bright_white().bold(),
        stats.records_filtered
    );
    println!(
        "  {} {}{}",
        "Lines written:".bright_cyan(),
        stats.records_written.to_string().bright_white().bold(),
        if stats.padded_first_record {
            " (including midnight start line)"
        } else {
            ""
        }
    );
    println!("  {} {}", "Time elapsed:".bright_cyan(), HumanDuration(elapsed));
}
