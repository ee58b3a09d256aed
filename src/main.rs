//! Little Lemon - browse the restaurant menu from your terminal
//!
//! A terminal UI application that shows the Little Lemon menu, served from a
//! local SQLite cache that is filled from the published menu document on
//! first run.

use std::io;
use std::panic;
use std::process;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use littlelemon::app::{App, AppState};
use littlelemon::cli::{Cli, StartupConfig};
use littlelemon::config::AppConfig;
use littlelemon::{logging, ui};

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Renders the UI based on the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    match &app.state {
        AppState::Loading => {
            render_loading(frame);
        }
        AppState::Onboarding => {
            ui::render_onboarding(frame, app);
        }
        AppState::Menu => {
            ui::render_menu_list(frame, app);
        }
        AppState::Profile => {
            ui::render_profile(frame, app);
        }
    }

    if app.show_help {
        ui::render_help_overlay(frame, &app.state);
    }
}

/// Renders a loading message while the menu is being read or fetched
fn render_loading(frame: &mut ratatui::Frame) {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::{Color, Style},
        widgets::Paragraph,
    };

    let area = frame.area();

    // Center the loading message vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("Loading menu...")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let startup = match StartupConfig::from_cli(&cli) {
        Ok(startup) => startup,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    let config = AppConfig::from_cli(&cli);
    if let Err(e) = logging::init(config.log_file.as_deref()) {
        eprintln!("warning: logging disabled: {}", e);
    }
    info!(db = ?config.db, menu_url = %config.menu_url, "Starting Little Lemon");

    if let Err(e) = run(config, startup).await {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Opens the cache, takes over the terminal and runs the event loop
async fn run(config: AppConfig, startup: StartupConfig) -> io::Result<()> {
    let cache = config.open_cache();
    let client = config.menu_client();

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(cache, startup);

    // Initial render to show loading state
    terminal.draw(|f| render_ui(f, &app))?;

    // Serve from the local table, or fetch on first run
    app.load_menu(&client).await;

    // Main event loop
    loop {
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Commit search input once it has been idle long enough
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    info!("Exiting");

    Ok(())
}
