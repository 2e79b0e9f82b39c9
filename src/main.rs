// src/main.rs

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use scanview::app::{App, AppState, InputMode};
use scanview::cli::Cli;
use scanview::config::Config;
use scanview::core::query::filter_hosts;
use scanview::core::report::{self, ExportFormat};
use scanview::core::source::{load_and_parse, LoadedScan};
use scanview::error::Error;
use scanview::{logging, ui};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

type LoadSender = mpsc::Sender<scanview::Result<LoadedScan>>;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Before the runtime exists, so the local offset for log timestamps can be read.
    logging::initialize_logging()?;
    info!("Starting scanview.");

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);

    let runtime = tokio::runtime::Runtime::new()?;
    match cli.export {
        Some(format) => runtime.block_on(export_headless(&cli, format, &config)),
        None => runtime.block_on(run_tui(cli, config)),
    }
}

/// Writes a report for FILE and prints where it went, without starting the UI.
async fn export_headless(cli: &Cli, format: ExportFormat, config: &Config) -> Result<()> {
    let path = cli.file.clone().ok_or(Error::MissingInput)?;
    let loaded = load_and_parse(path).await?;
    let search = cli.search.as_deref().unwrap_or_default();
    let hosts: Vec<_> = filter_hosts(&loaded.hosts, search).into_iter().cloned().collect();
    let written = report::export(&hosts, format, &config.export_dir)?;
    println!("{}", written.display());
    Ok(())
}

/// Runs the viewer. The terminal is restored on every exit path; panics are
/// covered by the hook `ratatui::try_init` installs.
async fn run_tui(cli: Cli, config: Config) -> Result<()> {
    let mut terminal = match ratatui::try_init() {
        Ok(terminal) => terminal,
        Err(e) => {
            // Raw mode may already be on when the alternate screen fails.
            ratatui::restore();
            return Err(e.into());
        }
    };
    let outcome = run_app(&mut terminal, cli, config).await;
    ratatui::restore();
    info!("Exiting scanview.");
    outcome
}

async fn run_app(terminal: &mut DefaultTerminal, cli: Cli, config: Config) -> Result<()> {
    terminal.clear()?;

    let mut app = App::new(config);
    if let Some(search) = cli.search {
        app.search = search;
    }
    let (tx, mut rx) = mpsc::channel(1);

    if let Some(file) = cli.file {
        app.input = file.display().to_string();
        if let Some(path) = app.start_loading() {
            spawn_load(path, &tx);
        }
    }
    if app.show_logs {
        app.refresh_logs();
    }

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &tx)?;
        }

        if let Ok(outcome) = rx.try_recv() {
            app.finish_loading(outcome);
        }
        app.on_tick();
    }
    Ok(())
}

fn spawn_load(path: PathBuf, tx: &LoadSender) {
    let tx_clone = tx.clone();
    tokio::spawn(async move {
        let outcome = load_and_parse(path).await;
        let _ = tx_clone.send(outcome).await;
    });
}

fn handle_events(app: &mut App, tx: &LoadSender) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            if app.show_help {
                // Any key closes the help popup.
                app.toggle_help();
                return Ok(());
            }
            match app.state {
                AppState::Idle => handle_idle_input(app, key.code, tx),
                AppState::Loading => {
                    if key.code == KeyCode::Esc {
                        app.quit();
                    }
                }
                AppState::Finished => match app.input_mode {
                    InputMode::Search => handle_search_input(app, key.code),
                    InputMode::Browse => handle_finished_input(app, key.code),
                },
            }
        }
    }
    Ok(())
}

/// Typing a scan file path.
fn handle_idle_input(app: &mut App, key_code: KeyCode, tx: &LoadSender) {
    match key_code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char('q') if app.input.is_empty() => app.quit(),
        KeyCode::Char(c) => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Enter => {
            if let Some(path) = app.start_loading() {
                spawn_load(path, tx);
            }
        }
        _ => {}
    }
}

fn handle_search_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter | KeyCode::Esc => app.input_mode = InputMode::Browse,
        KeyCode::Char(c) => app.push_search_char(c),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        _ => {}
    }
}

fn handle_finished_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('n') => app.reset(),
        KeyCode::Char('/') => app.input_mode = InputMode::Search,
        KeyCode::Char('g') => app.cycle_group_by(),
        KeyCode::Char('e') => app.export(ExportFormat::Html),
        KeyCode::Char('j') => app.export(ExportFormat::Json),
        KeyCode::Char('l') => app.toggle_logs(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        KeyCode::PageUp => app.scroll_detail_up(),
        KeyCode::PageDown => app.scroll_detail_down(),
        KeyCode::Left => app.scroll_logs_left(),
        KeyCode::Right => app.scroll_logs_right(),
        _ => {}
    }
}
