//! Terminal setup and the main event loop.

use crate::app::App;
use crate::lifecycle::{self, CycleOutcome};
use crate::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use limner_core::CompletionDriver;
use limner_error::LimnerError;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Poll interval; also paces the loading spinner.
const TICK: Duration = Duration::from_millis(80);

/// Runs the client until the user quits.
///
/// The terminal is restored on every exit path before the result is
/// returned.
pub async fn run(driver: Arc<dyn CompletionDriver>) -> Result<(), LimnerError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, driver).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    driver: Arc<dyn CompletionDriver>,
) -> Result<(), LimnerError> {
    let mut app = App::new();
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<CycleOutcome>();

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Cleanup point of the cycle: one outcome message per trigger,
        // handled here whatever the exit path was.
        while let Ok(outcome) = outcome_rx.try_recv() {
            lifecycle::complete_generation(&mut app, outcome);
        }

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let is_trigger = matches!(
                    (key.code, key.modifiers),
                    (KeyCode::Char('g'), KeyModifiers::CONTROL)
                ) || (key.code == KeyCode::Enter
                    && app.focus == crate::app::Focus::Generate);

                if is_trigger {
                    lifecycle::trigger_generation(&mut app, driver.clone(), outcome_tx.clone());
                } else {
                    app.handle_key(key);
                }
            }
        }

        app.tick();

        if app.should_quit {
            return Ok(());
        }
    }
}
