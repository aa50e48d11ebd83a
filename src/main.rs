use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::{AppConfig, PlayerKind};
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Connect Four with a heuristic computer player")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Who controls Red (moves first): human or computer
    #[arg(long)]
    red: Option<PlayerKind>,

    /// Who controls Yellow: human or computer
    #[arg(long)]
    yellow: Option<PlayerKind>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(red) = cli.red {
        config.players.red = red;
    }
    if let Some(yellow) = cli.yellow {
        config.players.yellow = yellow;
    }
    config.validate()?;

    run(&config).map_err(Into::into)
}

fn run(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
