//! Command-line arguments, configuration and the interactive console

pub mod config;
pub mod console;
pub mod locale;
pub mod params;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use locale::Locale;

/// notebook - browse, search and create notes kept in a JSON file
#[derive(Parser, Debug)]
#[command(name = "notebook", version, about, long_about = None)]
pub struct Cli {
    /// Note store file (overrides config file; default: notes.json)
    pub file: Option<PathBuf>,

    /// Create an empty store if FILE does not exist
    #[arg(long)]
    pub init: bool,

    /// Menu and prompt language (overrides config file)
    #[arg(long, value_enum)]
    pub lang: Option<Locale>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
