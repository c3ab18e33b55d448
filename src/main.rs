//! reeltui - terminal front end for a movie recommendation API
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! reeltui
//!
//! # CLI mode (for automation)
//! reeltui recommend "Inception"
//! reeltui search drama --by genre --json
//! reeltui stats
//! ```

use std::fs::{File, OpenOptions};
use std::io::{stdout, Stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reeltui::api::RecommendClient;
use reeltui::app::{ApiEvent, App};
use reeltui::cli::{Cli, Command, ExitCode, Output};
use reeltui::commands;
use reeltui::config::Config;
use reeltui::tasks;
use reeltui::ui::render_ui;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Frame interval for input polling and animation (~30 fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(!cli.is_cli_mode());

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli, config).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        run_tui(cli, config).await
    }
}

// =============================================================================
// Logging
// =============================================================================

/// Log file for TUI mode (<cache_dir>/reeltui/reeltui.log)
fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("reeltui").join("reeltui.log"))
}

fn open_log(path: &PathBuf) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Set up tracing. The TUI owns the screen, so it logs to a file instead
/// of stderr; without a writable cache dir it does not log at all.
fn init_logging(tui: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "reeltui=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if tui {
        let file_layer = log_path()
            .and_then(|p| open_log(&p).ok())
            .map(|file| fmt::layer().with_ansi(false).with_writer(Mutex::new(file)));
        registry.with(file_layer).init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

// =============================================================================
// CLI Mode
// =============================================================================

/// Run CLI command and return exit code
async fn run_cli(cli: Cli, config: Config) -> ExitCode {
    let output = Output::new(&cli);
    let client = RecommendClient::new(config.api_url(cli.api_url.as_deref()));
    tracing::debug!(api = client.base_url(), "cli mode");

    match cli.command {
        Some(Command::Health) => commands::health_cmd(&client, &output).await,

        Some(Command::Recommend(cmd)) => commands::recommend_cmd(cmd, &client, &config, &output).await,

        Some(Command::Search(cmd)) => commands::search_cmd(cmd, &client, &config, &output).await,

        Some(Command::Stats) => commands::stats_cmd(&client, &output).await,

        Some(Command::Suggest(cmd)) => commands::suggest_cmd(cmd, &config, &output),

        None => {
            // This shouldn't happen (handled by is_cli_mode check)
            ExitCode::Success
        }
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(cli: Cli, config: Config) -> Result<()> {
    let api_url = config.api_url(cli.api_url.as_deref());
    let client = RecommendClient::new(api_url.clone());

    let mut app = App::with_config(&config, api_url);
    app.hero_enabled = config.hero_3d && !cli.no_3d;
    tracing::info!(api = client.base_url(), hero = app.hero_enabled, "starting TUI");

    let mut terminal = init_terminal()?;

    let result = run_event_loop(&mut terminal, &mut app, &client).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, applies API results, animates, renders
async fn run_event_loop(terminal: &mut Tui, app: &mut App, client: &RecommendClient) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<ApiEvent>();

    let size = terminal.size()?;
    app.resize(Rect::new(0, 0, size.width, size.height));

    for action in app.startup_actions() {
        tasks::spawn_action(client, action, tx.clone());
    }

    while app.running {
        terminal.draw(|frame| render_ui(frame, app))?;

        if event::poll(FRAME_INTERVAL)? {
            let action = match event::read()? {
                // Only handle key press events (ignore releases on Windows)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    app.resize(Rect::new(0, 0, width, height));
                    None
                }
                _ => None,
            };
            if let Some(action) = action {
                tasks::spawn_action(client, action, tx.clone());
            }
        }

        // Completed requests, in arrival order
        while let Ok(event) = rx.try_recv() {
            app.apply(event);
        }

        app.on_frame(Instant::now());
    }

    tracing::info!("TUI exited");
    Ok(())
}
