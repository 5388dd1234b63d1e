use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect4_minimax::ai::MinimaxAgent;
use connect4_minimax::config::AppConfig;
use connect4_minimax::ui::App;

/// Play Connect Four against a minimax opponent.
#[derive(Parser)]
#[command(name = "connect4", about = "Connect Four against a minimax opponent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override search depth (plies)
    #[arg(long)]
    depth: Option<usize>,

    /// Override the tie-break RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(seed) = cli.seed {
        config.search.seed = Some(seed);
    }
    config.validate().context("validating configuration")?;

    let computer = match config.search.seed {
        Some(seed) => MinimaxAgent::seeded(config.search.depth, seed),
        None => MinimaxAgent::new(config.search.depth),
    };

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    // Create app and run
    let mut app = App::new(Box::new(computer));
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running game loop")
}
