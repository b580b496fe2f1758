// sortty: Step-Through Selection Sort Visualizer

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sortty::parser::parse_input;
use sortty::sorter::generate;
use sortty::ui::App;
use sortty::{Config, Cursor};

#[derive(Parser)]
#[command(name = "sortty")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Comma-separated numbers to sort (1 to 20 of them)
    #[arg(short, long, global = true)]
    input: Option<String>,

    /// Playback speed, 1 (slow) to 5 (fast)
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u8).range(1..=5))]
    speed: Option<u8>,

    /// Where to write logs while the UI is running
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every step of the sort and exit
    Trace {
        /// Emit the whole run as JSON
        #[arg(long)]
        json: bool,
    },
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "sortty=info".into())
}

/// Logs go to stderr when there is no UI on screen
fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

/// The UI owns the terminal, so logs are appended to a file instead
fn init_file_logging(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => Config::data_dir()?.join("sortty.log"),
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::registry()
        .with(filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(path)
}

fn build_cursor(cli: &Cli, config: &Config) -> Result<Cursor> {
    let text = cli.input.as_deref().unwrap_or(&config.default_input);
    let values = parse_input(text).with_context(|| format!("Invalid input {:?}", text))?;

    let mut cursor = Cursor::new(generate(&values));
    cursor.set_speed(cli.speed.unwrap_or_else(|| config.speed().level()));
    Ok(cursor)
}

/// Config for the UI; writes defaults on first run
fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using default configuration");
        Config::default()
    })
}

fn print_trace(cursor: &Cursor, json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut out, cursor.run())
            .context("Failed to serialize run")?;
        writeln!(out)?;
        return Ok(());
    }

    for (position, step) in cursor.run().history.iter().enumerate() {
        writeln!(out, "Step {}: {}", position, step.description)?;
        writeln!(out, "    {}", step)?;
    }
    let stats = cursor.stats();
    writeln!(
        out,
        "Total comparisons: {}  Total swaps: {}",
        stats.total_comparisons, stats.total_swaps
    )?;
    Ok(())
}

fn run_tui(cursor: Cursor, config: &Config) -> Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(cursor, Duration::from_millis(config.tick_rate_ms.max(1)));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("Terminal UI failed")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Trace { json }) => {
            init_stderr_logging();
            // Read-only: tracing never writes config.json
            let config = Config::load_or_default().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "using default configuration");
                Config::default()
            });
            let cursor = build_cursor(&cli, &config)?;
            print_trace(&cursor, *json)
        }
        None => {
            let log_path = init_file_logging(cli.log_file.clone())?;
            let config = load_config();
            let cursor = build_cursor(&cli, &config)?;
            tracing::info!(log = ?log_path, steps = cursor.len(), "starting UI");
            run_tui(cursor, &config)
        }
    }
}
