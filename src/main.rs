//! Engram CLI - Holographic Associative Memory
//!
//! Command-line interface for the interactive shell and the scripted demo.

use clap::{Parser, Subcommand};
use log::error;

use engram::config::{Config, EngineConfig, QueryConfig};
use engram::{demo, Result, Session};

#[derive(Parser)]
#[command(name = "engram")]
#[command(author = "Engram Contributors")]
#[command(version)]
#[command(about = "Holographic associative memory engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell
    Shell {
        /// Vector dimension (default: 2048)
        #[arg(short, long, default_value = "2048")]
        dimension: usize,

        /// Random seed for reproducible sessions
        #[arg(short, long)]
        seed: Option<u64>,

        /// Minimum score for a query match to be displayed
        #[arg(short = 't', long, default_value = "0.1")]
        threshold: f64,
    },

    /// Run the fixed Apple demonstration and exit
    Demo {
        /// Vector dimension (default: 2048)
        #[arg(short, long, default_value = "2048")]
        dimension: usize,

        /// Random seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Shell {
            dimension,
            seed,
            threshold,
        } => run_shell(dimension, seed, threshold),

        Commands::Demo { dimension, seed } => demo::run(dimension, seed),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_shell(dimension: usize, seed: Option<u64>, threshold: f64) -> Result<()> {
    let config = Config {
        engine: EngineConfig { dimension, seed },
        query: QueryConfig {
            score_threshold: threshold,
        },
    };

    let mut session = Session::new(&config)?;
    session.run()
}
