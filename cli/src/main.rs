//! CLI entrypoint for car-diagnostics
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use diagnostics_application::{
    DiagnosticProgressNotifier, DiagnosticReport, NoProgress, RunDiagnosticsUseCase,
};
use diagnostics_domain::OutputFormat;
use diagnostics_infrastructure::{
    ConfigLoader, FileConfig, FileProgressStyle, FileRecordSource, RecordFormat,
};
use diagnostics_presentation::{
    Cli, ConsoleFormatter, InputFormat, OutputConfig, ProgressReporter, ProgressStyle,
    ReportFormatter, SimpleProgress,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(report)) if report.is_clean() => ExitCode::SUCCESS,
        Ok(Some(_)) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns `None` when the command exits without diagnosing anything
fn run() -> Result<Option<DiagnosticReport>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(None);
    }

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    file_config.validate()?;
    debug!("Loaded configuration: {:?}", file_config);

    let output = output_config(&cli, &file_config);
    if !output.color {
        ConsoleFormatter::disable_color();
    }

    // === Dependency Injection ===
    let Some(path) = cli.input.clone().or_else(|| file_config.input.path.clone()) else {
        bail!("No input record given. Pass a file path or set input.path in the config.");
    };

    let format = cli
        .format
        .map(record_format)
        .or(file_config.input.format);
    let source = match format {
        Some(format) => FileRecordSource::with_format(&path, format),
        None => FileRecordSource::new(&path)?,
    };
    info!("Diagnosing {} as {}", path.display(), source.format());

    let use_case = RunDiagnosticsUseCase::new(Arc::new(source));

    let show_progress = output.progress_enabled() && !cli.quiet;
    if show_progress {
        println!("{}", ConsoleFormatter::banner());
        println!();
    }

    let progress: Box<dyn DiagnosticProgressNotifier> = match (show_progress, output.progress_style) {
        (false, _) => Box::new(NoProgress),
        (true, ProgressStyle::Simple) => Box::new(SimpleProgress::new()),
        (true, ProgressStyle::Bar) => Box::new(ProgressReporter::new()),
    };

    let report = use_case
        .execute_with_progress(progress.as_ref())
        .with_context(|| format!("Diagnostics failed for {}", path.display()))?;

    if show_progress {
        println!();
    }
    print!("{}", ConsoleFormatter.render(&report, output.format));

    Ok(Some(report))
}

/// Merge CLI flags over the file configuration
fn output_config(cli: &Cli, file_config: &FileConfig) -> OutputConfig {
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(file_config.output.format)
        .unwrap_or_default();

    OutputConfig {
        format,
        color: file_config.output.color && !cli.no_color,
        show_progress: file_config.progress.show_progress,
        progress_style: match file_config.progress.style {
            FileProgressStyle::Simple => ProgressStyle::Simple,
            FileProgressStyle::Bar => ProgressStyle::Bar,
        },
    }
}

fn record_format(format: InputFormat) -> RecordFormat {
    match format {
        InputFormat::Xml => RecordFormat::Xml,
        InputFormat::Json => RecordFormat::Json,
        InputFormat::Toml => RecordFormat::Toml,
    }
}
