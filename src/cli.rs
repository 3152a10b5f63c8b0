//! Command-line argument parsing
//!
//! Supports:
//! - Choosing a form definition file
//! - Reading the session script from a file instead of stdin
//! - Disabling the log file

use clap::Parser;
use std::path::PathBuf;

/// Fill out the promotional entry form from a command script
#[derive(Parser, Debug)]
#[command(
    name = "entryform",
    version,
    about = "Fill out the promotional entry form from a command script"
)]
pub struct CliArgs {
    /// Form definition (YAML); defaults to the user config or the built-in form
    #[arg(short, long, value_name = "PATH")]
    pub form: Option<PathBuf>,

    /// Session script to run; reads stdin when omitted
    #[arg(short, long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Do not write logs to the config directory
    #[arg(long)]
    pub no_log_file: bool,

    /// Print the form after the script finishes
    #[arg(long)]
    pub show: bool,
}
