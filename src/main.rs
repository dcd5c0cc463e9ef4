//! rttplot - draws an RTT log as a terminal chart.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rttplot::app::{App, Theme};
use rttplot::data::{DataReader, DEFAULT_LOG_PATH};
use rttplot::ui;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "rttplot")]
#[command(about = "Plot RTT against timestamp from a two-column log", long_about = None)]
struct Args {
    /// Path to the `timestamp rtt` log
    #[arg(default_value = DEFAULT_LOG_PATH)]
    file: PathBuf,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_enum, default_value_t = Theme::GruvboxDark)]
    theme: Theme,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting rttplot");
    }

    // Load before touching the terminal so errors print normally
    let dataset = DataReader::read_file(&args.file)
        .with_context(|| format!("failed to load samples from {}", args.file.display()))?;

    tracing::debug!("Theme: {}", args.theme.name());
    let app = App::new(dataset, args.theme);

    let res = display(&app);

    if let Err(err) = &res {
        tracing::error!("Display failed: {}", err);
    }
    tracing::info!("rttplot exited");

    res
}

/// Runs `restore` when dropped.
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Best effort: leave raw mode and the alternate screen, show the cursor.
fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        tracing::warn!("Failed to disable raw mode: {}", err);
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show) {
        tracing::warn!("Failed to leave alternate screen: {}", err);
    }
}

/// Take over the terminal, show the chart, and put the terminal back on every
/// exit path, setup failures included.
fn display(app: &App) -> Result<()> {
    enable_raw_mode()?;
    let _guard = TerminalGuard {
        restore: restore_terminal,
    };

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, app)
}

/// Redraw until the user closes the chart.
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (key.modifiers, key.code) {
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc)
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),
                    _ => {},
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn failing_setup(restored: &Cell<usize>) -> Result<()> {
        let _guard = TerminalGuard {
            restore: || restored.set(restored.get() + 1),
        };
        let backend: Result<()> = Err(anyhow::anyhow!("backend unavailable"));
        backend?;
        Ok(())
    }

    #[test]
    fn guard_restores_when_setup_fails() {
        let restored = Cell::new(0);
        assert!(failing_setup(&restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn guard_restores_once_on_success() {
        let restored = Cell::new(0);
        {
            let _guard = TerminalGuard {
                restore: || restored.set(restored.get() + 1),
            };
        }
        assert_eq!(restored.get(), 1);
    }
}
