//! CLI command definitions

use clap::{Parser, ValueEnum};
use diagnostics_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for diagnostic reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Findings grouped by diagnostic step
    Full,
    /// Finding lines and the summary line
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Summary => DomainOutputFormat::Summary,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// Format of the input record file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Xml,
    Json,
    Toml,
}

/// CLI arguments for car-diagnostics
#[derive(Parser, Debug)]
#[command(name = "car-diagnostics")]
#[command(author, version, about = "Diagnose a vehicle record for missing data, missing parts and damaged parts")]
#[command(long_about = r#"
car-diagnostics checks a vehicle record in three steps and stops at the first
step that finds a problem:

1. Data fields: year, make and model must be present
2. Missing parts: 1 engine, 1 electrical, 1 fuel filter, 1 oil filter, 4 tires
3. Part condition: every part must be NEW, GOOD or WORN

Records are read from XML, JSON or TOML files. The exit status is 0 when the
vehicle is free of issues, 1 when it needs attention, 2 on errors.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./diagnostics.toml  Project-level config
3. ~/.config/car-diagnostics/config.toml   Global config

Example:
  car-diagnostics SampleCar.xml
  car-diagnostics -o full cars/civic.json
  car-diagnostics --format toml -o json record.txt
"#)]
pub struct Cli {
    /// Vehicle record file (falls back to input.path from the config)
    pub input: Option<PathBuf>,

    /// Input format (inferred from the file extension by default)
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and progress messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
