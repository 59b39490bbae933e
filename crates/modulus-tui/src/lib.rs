//! Modulus Sell onboarding TUI (ratatui-based wizard host).
//!
//! Provides an interactive terminal flow with:
//! - One screen per onboarding step
//! - Step sidebar and progress bar

pub mod app;
pub mod input;
pub mod transition;
mod ui;
pub mod widgets;

pub use app::{App, InputResult};
pub use ui::{draw, dump_step};

use anyhow::{bail, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modulus_core::{Category, FormData, OnboardConfig, Wizard};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::time::Duration;

/// How an onboarding session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The merchant reached the success screen and chose "Go to Dashboard".
    Completed(FormData),
    Quit,
}

/// Raw mode plus alternate screen for as long as the guard lives.
///
/// Dropping it restores the terminal, so an early `?` return or a panic in
/// the loop never leaves the shell in raw mode.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> Result<Self> {
        enable_raw_mode()?;
        // Built before anything else can fail so that Drop covers it.
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            log::warn!("failed to leave raw mode: {}", e);
        }
        if let Err(e) = execute!(
            self.out,
            LeaveAlternateScreen,
            DisableMouseCapture,
            cursor::Show
        ) {
            log::warn!("failed to restore terminal: {}", e);
        }
    }
}

/// Run the onboarding wizard (interactive TUI).
pub fn run(config: &OnboardConfig) -> Result<Outcome> {
    use std::io::IsTerminal;

    if !io::stdout().is_terminal() {
        bail!(
            "No TTY detected. The onboarding wizard requires an interactive terminal.\n\
             Try running directly in a terminal (not piped or via script),\n\
             or use --dump-tui to print the screens."
        );
    }

    let guard = TerminalGuard::enter(io::stdout())?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::from_config(config);
    let tick = Duration::from_millis(config.tick_ms);
    log::info!("onboarding session started");

    let result = run_loop(&mut terminal, &mut app, tick);
    drop(guard);

    let outcome = result?;
    match &outcome {
        Outcome::Completed(_) => log::info!("onboarding completed"),
        Outcome::Quit => log::info!("onboarding abandoned at {:?}", app.current_step()),
    }
    Ok(outcome)
}

/// Main application loop
pub fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<Outcome> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Polling keeps redrawing while a slide transition runs.
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                match app.handle_input(key) {
                    InputResult::Quit => return Ok(Outcome::Quit),
                    InputResult::Complete => {
                        return Ok(Outcome::Completed(app.wizard.data().clone()))
                    }
                    InputResult::Continue => {}
                }
            }
        }
    }
}

/// Plain-text rendering of every step, walked with sample data.
pub fn dump_all_steps(config: &OnboardConfig) -> String {
    let sample = FormData {
        phone: "9876543210".to_string(),
        otp: "4219".to_string(),
        store_name: "Gupta General Store".to_string(),
        category: Some(Category::Grocery),
        city: config.location.city.clone(),
        pincode: config.location.pincode.clone(),
    };
    let mut app = App::with_wizard(Wizard::with_data(sample));
    app.brand = config.brand.clone();

    let mut dumps = vec![dump_step(&app)];
    while app.advance().moved() {
        dumps.push(dump_step(&app));
    }
    dumps.join("\n")
}
