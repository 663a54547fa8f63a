//! Helu - Main entrypoint.
//!
//! Loads configuration, reads the dictionary into a trie, prints the
//! occurrence count of each query word and tears the trie down.

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use helu_lib::config::{self, ConfigLoader, HeluConfig, LogConfig};
use helu_lib::error::{report_error, ErrorContext, HeluError, HeluResult};
use helu_lib::report::run_report;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Helu.
#[derive(Parser, Debug)]
#[clap(name = "helu", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Build the index from a dictionary and report word counts
    Run {
        /// Dictionary file, overriding `dictionary.path`
        #[clap(short, long, value_parser)]
        dictionary: Option<PathBuf>,

        /// Word to look up, repeatable; overrides `query.words`
        #[clap(short = 'q', long = "query")]
        queries: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file (.toml or .json)
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr.
fn init_logging(log: &LogConfig) -> HeluResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| HeluError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads the configuration and starts logging, exiting on failure.
fn load_config(loader: &ConfigLoader) -> HeluResult<HeluConfig> {
    match loader.load() {
        Ok(config) => {
            init_logging(&config.log)?;
            Ok(config)
        }
        Err(e) => {
            init_logging(&LogConfig::default())?;
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    }
}

/// Reads the dictionary, builds the trie and prints the report.
fn run(config: &HeluConfig, dictionary: Option<PathBuf>, queries: Vec<String>) -> HeluResult<()> {
    let path = dictionary.unwrap_or_else(|| config.dictionary.path.clone());
    run_report(config, &path, &queries, &mut io::stdout().lock())?;
    Ok(())
}

/// Writes the default configuration to `output`.
fn gen_config(output: &Path) -> HeluResult<()> {
    info!("Generating default configuration");
    HeluConfig::default().write_to_file(output)?;
    println!("Default configuration written to {}", output.display());
    Ok(())
}

/// Main entry point for the application.
fn main() -> HeluResult<()> {
    let args = <Args as clap::Parser>::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);

    let command = args.command.unwrap_or(Command::Run {
        dictionary: None,
        queries: Vec::new(),
    });

    match command {
        Command::Run {
            dictionary,
            queries,
        } => {
            let config = load_config(&loader)?;
            helu_lib::init();

            if let Err(e) = run(&config, dictionary, queries) {
                report_error(ErrorContext::new(e, "run"));
                process::exit(1);
            }
            Ok(())
        }
        Command::Validate => {
            let config = load_config(&loader)?;
            println!("Configuration is valid: {}", config.summary());
            Ok(())
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            gen_config(&output)
        }
    }
}
