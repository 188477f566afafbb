use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Marine heatwave series manager.
#[derive(Parser)]
#[command(
    name = "mhw",
    version,
    about = "Incremental marine heatwave detection on daily temperature series"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Load a series file, merge its blocks and run detection.
    Detect(DetectArgs),
    /// Run the walk-through on synthetic data.
    Demo(DemoArgs),
}

/// Arguments for the `detect` subcommand.
#[derive(clap::Args)]
pub struct DetectArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override input series JSON path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override report JSON path from config (stdout when neither is set).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override one detection parameter, e.g. `--set pctile=95`.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

/// Arguments for the `demo` subcommand.
#[derive(clap::Args)]
pub struct DemoArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override report JSON path from config (stdout when neither is set).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
