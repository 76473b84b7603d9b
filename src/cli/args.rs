use crate::constants::{exit_codes, verbosity, TEMPLATES_ENV_VAR};
use clap::{error::ErrorKind, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for mcp-on-rails.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project to scaffold the MCP configuration into.
    #[arg(value_name = "PROJECT_PATH", default_value = ".")]
    pub project_path: PathBuf,

    /// Project name used in the generated files (defaults to the directory name).
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub project_name: Option<String>,

    /// Template bundle to generate from (defaults to the bundled templates).
    #[arg(short, long, value_name = "DIR", env = TEMPLATES_ENV_VAR)]
    pub templates: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Parse command line arguments, exiting with the failure code on bad input.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            let _ = e.print();
            std::process::exit(exit_codes::FAILURE);
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
