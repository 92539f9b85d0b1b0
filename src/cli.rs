use crate::config::{PulseConfig, Settings};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repopulse")]
#[command(about = "Commit histograms, momentum curves and repository lookup for GitHub activity snapshots")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    #[default]
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

#[derive(Args, Clone, Debug, Default)]
pub struct CommonArgs {
    #[arg(long, help = "Path to config file (defaults to ./.repopulse.toml when present)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Reference time (RFC3339, YYYY-MM-DD, or natural language); defaults to now")]
    pub now: Option<String>,

    #[arg(long, help = "Number of histogram buckets")]
    pub buckets: Option<usize>,

    #[arg(long, help = "Maximum look-back window, e.g. 180d or 26weeks")]
    pub lookback: Option<String>,

    #[arg(long, help = "Momentum decay rate, strictly between 0 and 1")]
    pub decay: Option<f64>,

    #[arg(long, help = "Trailing days used for the momentum curve")]
    pub days: Option<u32>,

    #[arg(long, help = "Number of top contributors to report")]
    pub top: Option<usize>,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn, help = "Diagnostic log level")]
    pub log_level: LogLevel,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bucket a snapshot's commits into a fixed-size histogram
    Histogram {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,

        #[arg(help = "Snapshot JSON file, or - for stdin")]
        input: Option<PathBuf>,
    },
    /// Compute the decayed momentum curve for daily commit counts
    Momentum {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,

        #[arg(help = "Daily counts or snapshot JSON file, or - for stdin")]
        input: Option<PathBuf>,
    },
    /// Full activity report for a snapshot
    Summary {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(help = "Snapshot JSON file, or - for stdin")]
        input: Option<PathBuf>,
    },
    /// Resolve owner/repo, a GitHub URL, or a username
    Resolve {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(help = "Repository reference")]
        input: String,
    },
    /// Choose the repository to show from a user's repository list
    Pick {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,

        #[arg(long, help = "Owner the list belongs to")]
        owner: Option<String>,

        #[arg(help = "Repository list JSON file, or - for stdin")]
        input: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        init_logging(self.common.log_level);

        let settings = || -> Result<Settings> {
            let config = PulseConfig::load(self.common.config.as_deref())
                .context("Failed to load configuration")?;
            Settings::resolve(&config, &self.common).context("Invalid settings")
        };

        match self.command {
            Commands::Histogram { json, ndjson, input } => {
                crate::histogram::exec(&settings()?, input.as_deref(), json, ndjson)
            }
            Commands::Momentum { json, ndjson, input } => {
                crate::momentum::exec(&settings()?, input.as_deref(), json, ndjson)
            }
            Commands::Summary { json, input } => crate::summary::exec(&settings()?, input.as_deref(), json),
            Commands::Resolve { json, input } => crate::lookup::exec::resolve(&input, json),
            Commands::Pick { json, ndjson, owner, input } => {
                crate::lookup::exec::pick(owner, input.as_deref(), json, ndjson)
            }
        }
    }
}

fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
