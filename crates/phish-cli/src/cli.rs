//! CLI argument definitions for the training pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "phish-pipeline",
    version,
    about = "Phishing detection training pipeline",
    long_about = "Run the batch training pipeline: export raw batches from the \
                  source store, validate them against the dataset schema, build \
                  balanced train/test matrices, and train a classifier."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run one end-to-end training run.
    Train(TrainArgs),

    /// Print the dataset schema rules the validator will enforce.
    Schema(SchemaArgs),
}

#[derive(Parser)]
pub struct TrainArgs {
    /// Source folder holding one subdirectory per database.
    #[arg(value_name = "SOURCE_FOLDER")]
    pub source_dir: PathBuf,

    /// Pipeline config file (JSON); built-in defaults when omitted.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Dataset schema rules file.
    #[arg(
        long = "schema",
        value_name = "PATH",
        default_value = "config/training_schema.json"
    )]
    pub schema: PathBuf,

    /// Override the artifact root directory from the config.
    #[arg(long = "artifact-root", value_name = "DIR")]
    pub artifact_root: Option<PathBuf>,

    /// Fixed seed for oversampling and the train/test split.
    ///
    /// Makes a run bit-reproducible; without it each run draws fresh
    /// entropy.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Dataset schema rules file.
    #[arg(
        long = "schema",
        value_name = "PATH",
        default_value = "config/training_schema.json"
    )]
    pub schema: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
