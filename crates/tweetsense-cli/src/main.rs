//! tweetsense - tweet sentiment model selection CLI
//!
//! Usage:
//!   tweetsense run                               # Defaults: data/tweets.txt, data/labels.txt
//!   tweetsense run --config tweetsense.toml      # Load settings from TOML
//!   tweetsense run --metric auroc --parallel     # One metric, folds on all cores
//!   tweetsense run --json                        # Machine-readable report
//!   tweetsense vocab --tweets data/tweets.txt    # Inspect the vocabulary
//!   tweetsense config                            # Print the effective configuration

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

use error::{CliError, Result};
use tweetsense::config::PipelineConfig;

/// tweetsense - choose and evaluate a linear SVM for tweet sentiment
#[derive(Parser)]
#[command(name = "tweetsense")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (debug-level logs)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Quiet mode (warnings and errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Select C per metric by cross-validation, then score the held-out split
    Run(PipelineArgs),

    /// Build the vocabulary from a tweet file and list it
    Vocab {
        /// Tweet file, one tweet per line
        #[arg(long, value_name = "FILE", default_value = "data/tweets.txt")]
        tweets: PathBuf,

        /// Show at most this many tokens
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Print the effective configuration as TOML
    Config(PipelineArgs),
}

/// Settings shared by commands that resolve a [`PipelineConfig`].
#[derive(Args, Debug, Default)]
struct PipelineArgs {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Tweet file, one tweet per line
    #[arg(long, value_name = "FILE")]
    tweets: Option<PathBuf>,

    /// Label file, one +1/-1 label per line
    #[arg(long, value_name = "FILE")]
    labels: Option<PathBuf>,

    /// Leading examples used for training
    #[arg(long)]
    train_size: Option<usize>,

    /// Number of cross-validation folds
    #[arg(long)]
    folds: Option<usize>,

    /// Metric to select under (repeatable): accuracy, f1_score, auroc
    #[arg(long = "metric", value_name = "METRIC")]
    metrics: Vec<String>,

    /// Fixed C for the final model
    #[arg(long)]
    final_c: Option<f32>,

    /// Use plain K-fold instead of stratified folds
    #[arg(long)]
    no_stratify: bool,

    /// Evaluate folds in parallel
    #[arg(long)]
    parallel: bool,
}

impl PipelineArgs {
    /// Loads the config file (or defaults) and applies command-line overrides.
    fn resolve(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) if !path.exists() => return Err(CliError::FileNotFound(path.clone())),
            Some(path) => PipelineConfig::from_file(path)?,
            None => PipelineConfig::default(),
        };

        if let Some(tweets) = &self.tweets {
            config.data.tweets_path = tweets.clone();
        }
        if let Some(labels) = &self.labels {
            config.data.labels_path = labels.clone();
        }
        if let Some(train_size) = self.train_size {
            config.data.train_size = train_size;
        }
        if let Some(folds) = self.folds {
            config.cv.n_folds = folds;
        }
        if !self.metrics.is_empty() {
            config.model.metrics = self.metrics.clone();
        }
        if self.final_c.is_some() {
            config.model.final_c = self.final_c;
        }
        if self.no_stratify {
            config.cv.stratified = false;
        }
        if self.parallel {
            config.cv.parallel = true;
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Run(args) => args
            .resolve()
            .and_then(|config| commands::run::run(&config, cli.json)),
        Commands::Vocab { tweets, limit } => commands::vocab::run(&tweets, limit, cli.json),
        Commands::Config(args) => args.resolve().and_then(|config| commands::config::run(&config)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
