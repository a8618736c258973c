use anyhow::Result;
use clap::Parser;
use snaketerm::cli::Cli;
use snaketerm::config::Config;
use snaketerm::{games, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Config file, then command-line overrides
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    // 2. Logging goes to a file; the terminal belongs to the game
    if let Err(e) = logging::init(&config.log_file) {
        eprintln!("warning: {e:#}; continuing without a log file");
    }

    // 3. Run, restoring the terminal even when the game fails
    let mut terminal = ratatui::init();
    let result = games::snake::run_game(&config, &mut terminal).await;
    ratatui::restore();
    result
}
