//! CLI argument parsing for the onboarding app
//!
//! Launches the TUI wizard when no flags are given.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "modulus")]
#[command(about = "🏪 Modulus Sell - set up your store in under 2 minutes")]
#[command(long_about = "🏪 Modulus Sell - set up your store in under 2 minutes\n\n\
    A friendly terminal wizard that collects your mobile number, verification code,\n\
    store details and location.\n\n\
    Nothing is sent anywhere: the finished record is printed when you pick\n\
    \"Go to Dashboard\".")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Dump TUI step render text to stdout and exit
    #[arg(long)]
    pub dump_tui: bool,

    /// Print the completed record as JSON
    #[arg(long)]
    pub json: bool,
}
