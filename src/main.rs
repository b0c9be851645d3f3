#![forbid(unsafe_code)]
//! Doxcheck Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use doxcheck::commands::{
    execute_check, execute_describe, execute_highlight, execute_skeleton, CheckOptions,
    DescribeOptions, HighlightOptions, SkeletonOptions,
};
use doxcheck::config::DEFAULT_CONFIG_FILE;
use doxcheck::Config;

#[derive(Parser)]
#[command(name = "doxcheck")]
#[command(about = "Doxygen comment hygiene for C codebases")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check documentation validity and comment density of every function
    Check {
        /// Record files or directories
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Exit with status 1 if any function needs attention
        #[arg(long)]
        strict: bool,
    },

    /// Highlight C source text
    Highlight {
        /// Source file, or - for stdin
        file: PathBuf,

        /// Categories to enable, in paint order (overrides config)
        #[arg(long, value_delimiter = ',')]
        rules: Option<Vec<String>>,

        /// Print one "category start end" line per tag
        #[arg(long)]
        spans: bool,
    },

    /// Print reconciled descriptions of documented functions
    Describe {
        /// Record files or directories
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// File of record hashes to skip (overrides config)
        #[arg(long)]
        ignore: Option<PathBuf>,
    },

    /// Generate skeleton doxygen blocks for undocumented functions
    Skeleton {
        /// Record files or directories
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Write the blocks into the source files instead of printing a diff
        #[arg(long)]
        apply: bool,

        /// Generate for every function, even those that already have a block
        #[arg(long)]
        all: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("doxcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Check { inputs, json, strict } => {
            let options = CheckOptions { inputs, json, strict };
            execute_check(options, config)?;
        }

        Commands::Highlight { file, rules, spans } => {
            let options = HighlightOptions { file, rules, spans };
            execute_highlight(options, config)?;
        }

        Commands::Describe { inputs, json, ignore } => {
            let options = DescribeOptions { inputs, json, ignore };
            execute_describe(options, config)?;
        }

        Commands::Skeleton { inputs, apply, all } => {
            let options = SkeletonOptions { inputs, apply, all };
            execute_skeleton(options, config)?;
        }
    }

    Ok(())
}
