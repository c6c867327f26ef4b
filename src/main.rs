//! A terminal portfolio: hero, about, a paginated project carousel and a
//! contact form.
//!
//! Run the binary to launch the viewer.  Pass `--content` to show your own
//! portfolio instead of the built-in sample.

use std::fs::OpenOptions;
use std::io::stderr;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use folio_deck::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    relay_runtime::{self, RelayUpdate},
    state::AppState,
};
use folio_deck::config::{self, AppConfig, ThemeMode};
use folio_deck::core::{
    content::Portfolio, i18n::Language, links, notification::NotificationKind,
};
use folio_deck::ui::page;

/// Frame interval; also drives slide and counter animation.
const TICK_RATE: Duration = Duration::from_millis(50);

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), version, about = "Terminal portfolio viewer")]
struct Cli {
    /// Portfolio content file (TOML).  Defaults to a built-in sample.
    #[arg(long)]
    content: Option<PathBuf>,

    /// Start with this theme (light or dark) without saving it.
    #[arg(long)]
    theme: Option<String>,

    /// Start with this language (en or nl) without saving it.
    #[arg(long)]
    lang: Option<String>,

    /// Write logs to this file.  Logging is off without it.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the config file location and exit.
    #[arg(long)]
    print_config_path: bool,
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(name) = &cli.theme {
        match ThemeMode::from_name(name) {
            Some(mode) => config.theme = mode,
            None => tracing::warn!("unknown theme {name:?}, keeping {}", config.theme.name()),
        }
    }
    if let Some(code) = &cli.lang {
        match Language::from_code(code) {
            Some(lang) => config.language = lang,
            None => tracing::warn!("unknown language {code:?}, keeping {}", config.language.code()),
        }
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config_path {
        println!("{}", config::config_path().display());
        return Ok(());
    }

    init_logging(cli.log_file.as_deref())?;

    let portfolio = match &cli.content {
        Some(path) => Portfolio::load(path)?,
        None => Portfolio::sample(),
    };
    let mut user_config = AppConfig::load();
    apply_overrides(&mut user_config, &cli);

    let (cols, rows) = crossterm::terminal::size()?;
    let mut state = AppState::new(user_config, portfolio, Rect::new(0, 0, cols, rows));
    state.config_path = Some(config::config_path());
    tracing::info!(
        cards = state.portfolio.projects.len(),
        cols,
        rows,
        "starting viewer"
    );

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stderr>>,
    state: &mut AppState,
) -> Result<()> {
    let mut events = spawn_event_reader(TICK_RATE);
    let (relay_tx, mut relay_rx) = mpsc::unbounded_channel::<RelayUpdate>();

    loop {
        terminal.draw(|frame| page::draw(frame, state))?;

        if let Some(submission) = state.pending_submission.take() {
            relay_runtime::spawn_submission(
                relay_tx.clone(),
                state.config.form_endpoint.clone(),
                submission,
            );
        }

        if let Some(url) = state.pending_link.take() {
            if let Err(e) = links::open_in_browser(&url) {
                tracing::warn!("{e:#}");
                let msg = state.t("notification.error.link").to_string();
                state.notify(NotificationKind::Error, msg, Instant::now());
            }
        }

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(state, m),
                    AppEvent::Resize(w, h) => state.on_resize(w, h, Instant::now()),
                    AppEvent::Tick => state.on_tick(Instant::now()),
                }
            }

            Some(update) = relay_rx.recv() => {
                match update {
                    RelayUpdate::Finished(result) => {
                        state.finish_submission(result, Instant::now());
                    }
                }
            }

            else => break,
        }

        if state.should_quit {
            break;
        }
    }
    Ok(())
}
