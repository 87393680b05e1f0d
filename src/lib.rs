//! notebook - a console note-taking utility backed by a JSON file

pub mod actions;
pub mod cli;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod session;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, config::Config, console::StdConsole};
use infra::init_store;
use session::Session;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = Config::load()?;
    let store_path = config.store_path(cli.file.as_ref());
    let locale = config.locale(cli.lang);

    if cli.init {
        init_store(&store_path).with_context(|| {
            format!("failed to initialize note store: {}", store_path.display())
        })?;
    }

    let mut session = Session::new(&store_path, locale);
    let mut console = StdConsole::stdio();
    session
        .run(&mut console)
        .with_context(|| format!("session on {} failed", store_path.display()))
}
