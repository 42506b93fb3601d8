//! bill-splitter Entry Point
//!
//! Launches the terminal UI for splitting bills with friends.
//!
//! Usage:
//!   bill-splitter [OPTIONS]
//!
//! Options:
//!   -c, --config <FILE>      Configuration file
//!       --currency <SYMBOL>  Currency symbol shown in balances
//!       --avatar-url <URL>   Default image URL for new friends
//!       --no-seed            Start with an empty friends list
//!       --log-file <FILE>    Write logs to a file

use std::fs::File;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bill_splitter_tui::App;
use ledger_core::{default_config_path, load_config_from_path, ConfigOverrides, Ledger};

/// Split bills with friends from the terminal
#[derive(Parser, Debug)]
#[command(name = "bill-splitter")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short = 'c', long, env = "BILL_SPLITTER_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Currency symbol shown in balances
    #[arg(long, value_name = "SYMBOL")]
    currency: Option<String>,

    /// Default image URL for new friends
    #[arg(long, value_name = "URL")]
    avatar_url: Option<String>,

    /// Start with an empty friends list
    #[arg(long)]
    no_seed: bool,

    /// Write logs to this file (the terminal is busy drawing)
    #[arg(long, env = "BILL_SPLITTER_LOG", value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides::new();
        if let Some(ref symbol) = self.currency {
            overrides = overrides.with_currency_symbol(symbol.clone());
        }
        if let Some(ref url) = self.avatar_url {
            overrides = overrides.with_default_avatar_url(url.clone());
        }
        if self.no_seed {
            overrides = overrides.with_seed_enabled(false);
        }
        overrides
    }
}

/// Filter used when `RUST_LOG` is unset: this binary plus both library crates
fn default_directives(level: &str) -> String {
    format!(
        "{bin}={level},bill_splitter_tui={level},ledger_core={level}",
        bin = env!("CARGO_CRATE_NAME")
    )
}

fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directives("info")));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.log_file.as_ref())?;

    let path = args.config.clone().or_else(default_config_path);
    let mut config = load_config_from_path(path).context("failed to load configuration")?;
    args.overrides().apply(&mut config);

    tracing::info!(
        source = %config.source(),
        currency = %config.currency_symbol,
        seed = config.seed_enabled,
        "Starting bill-splitter"
    );

    let ledger = Ledger::new(config).context("invalid starting friends")?;

    // Check if we have a TTY before attempting initialization
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: bill-splitter requires a terminal (TTY)");
        eprintln!();
        eprintln!("Run it interactively, or over SSH with the -t flag.");
        std::process::exit(1);
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(ledger);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    // Balances after the TUI closes
    println!();
    for line in app.summary() {
        println!("  {line}");
    }
    println!();

    tracing::info!("bill-splitter exited");
    Ok(())
}
