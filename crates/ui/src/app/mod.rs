// App module for UI state and main TUI entry point
mod state;

use crate::handlers::controller::InputController;
use crate::models::{CopyOutcome, Focus, ScheduledResult};
use crate::views::render_ui;
use clipboard::ClipboardChain;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

pub use state::App;

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Copy,
    Quit,
}

// Main entry point for the TUI interface
pub async fn run_solcheck_tui(prefill: Option<String>, delay: Duration) -> io::Result<()> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Log lines would corrupt the alternate screen
    logging::set_console_output(false);

    let (result_tx, mut result_rx) = mpsc::unbounded_channel::<ScheduledResult>();
    let (copy_tx, mut copy_rx) = mpsc::unbounded_channel::<CopyOutcome>();

    let clipboard = Arc::new(ClipboardChain::detect());
    let mut app = App::new();
    let mut controller = InputController::new(result_tx, delay);
    logging::debug(&format!(
        "Validation delay: {}ms",
        controller.delay().as_millis()
    ));

    let mechanisms = clipboard.provider_names();
    if mechanisms.is_empty() {
        logging::warning("No clipboard mechanism available, copying will fail");
    } else {
        logging::info(&format!("Clipboard mechanisms: {}", mechanisms.join(", ")));
    }

    apply_prefill(&mut app, &mut controller, prefill);

    let result = run_tui_event_loop(
        &mut terminal,
        &mut app,
        &mut controller,
        &mut result_rx,
        &copy_tx,
        &mut copy_rx,
        &clipboard,
    );

    // Clean up terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;
    logging::set_console_output(true);

    if let Err(e) = &result {
        logging::error(&format!("TUI exited with an error: {}", e));
    }

    result
}

#[allow(clippy::too_many_arguments)]
fn run_tui_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    controller: &mut InputController,
    result_rx: &mut mpsc::UnboundedReceiver<ScheduledResult>,
    copy_tx: &mpsc::UnboundedSender<CopyOutcome>,
    copy_rx: &mut mpsc::UnboundedReceiver<CopyOutcome>,
    clipboard: &Arc<ClipboardChain>,
) -> io::Result<()> {
    // Keep the poll timeout short so results show up promptly
    let event_poll_timeout = Duration::from_millis(50);
    let tick_rate = app.tick_rate;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| {
            render_ui(f, app);
        })?;

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        // Non-blocking check for finished validations
        while let Ok(scheduled) = result_rx.try_recv() {
            controller.deliver(scheduled, app);
        }

        while let Ok(outcome) = copy_rx.try_recv() {
            app.process_copy_outcome(outcome);
        }

        if !event::poll(event_poll_timeout)? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) => handle_key_event(app, controller, key),
            Event::Paste(text) => {
                handle_paste(app, controller, &text);
                KeyAction::Continue
            }
            _ => KeyAction::Continue,
        };

        match action {
            KeyAction::Quit => break Ok(()),
            KeyAction::Copy => start_copy(app, clipboard, copy_tx),
            KeyAction::Continue => {}
        }
    }
}

// Run the clipboard chain in the background and report back over the channel
fn start_copy(
    app: &mut App,
    clipboard: &Arc<ClipboardChain>,
    copy_tx: &mpsc::UnboundedSender<CopyOutcome>,
) {
    let Some(address) = app.address_to_copy() else {
        return;
    };

    app.start_copy();
    let clipboard = Arc::clone(clipboard);
    let tx = copy_tx.clone();

    tokio::spawn(async move {
        let outcome = clipboard
            .copy(&address)
            .await
            .map(|mechanism| mechanism.to_string())
            .map_err(|e| e.to_string());
        let _ = tx.send(outcome);
    });
}

fn input_edited(app: &mut App, controller: &mut InputController) {
    controller.input_changed(app);
}

fn clear_input(app: &mut App, controller: &mut InputController) {
    controller.input_changed(app);
    app.clear_input();
}

/// Put a start-up address in the field and validate it straight away.
///
/// Returns the ticket of the scheduled validation; a blank address only
/// fills the field.
pub fn apply_prefill(
    app: &mut App,
    controller: &mut InputController,
    prefill: Option<String>,
) -> Option<u64> {
    let address = prefill?;
    app.input.insert_str(&address);
    app.add_log(format!("Loaded test address: {}", address));

    let input = app.input.clone();
    controller.submit(&input, app)
}

fn submit(app: &mut App, controller: &mut InputController) {
    let input = app.input.clone();
    controller.submit(&input, app);
}

pub fn handle_paste(app: &mut App, controller: &mut InputController, text: &str) {
    if app.alert.is_some() || app.show_help {
        return;
    }

    app.focus = Focus::Input;
    app.input.insert_str(text);
    input_edited(app, controller);
}

/// Apply one key press to the app.
///
/// Copying and quitting need the event loop's resources, so they are
/// returned as actions instead of being performed here.
pub fn handle_key_event(
    app: &mut App,
    controller: &mut InputController,
    key: KeyEvent,
) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Continue;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        return KeyAction::Quit;
    }

    // The alert must be acknowledged before anything else happens
    if app.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_alert();
        }
        return KeyAction::Continue;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::F(1) | KeyCode::Esc | KeyCode::Enter) {
            app.show_help = false;
        }
        return KeyAction::Continue;
    }

    if ctrl {
        return match key.code {
            KeyCode::Char('u') => {
                clear_input(app, controller);
                KeyAction::Continue
            }
            KeyCode::Char('y') if app.can_copy() => KeyAction::Copy,
            _ => KeyAction::Continue,
        };
    }

    match key.code {
        KeyCode::F(1) => app.show_help = true,
        KeyCode::Tab => app.next_focus(),
        KeyCode::BackTab => app.previous_focus(),
        KeyCode::Esc => {
            if app.input.value().is_empty() {
                return KeyAction::Quit;
            }
            clear_input(app, controller);
        }
        KeyCode::Enter => match app.focus {
            Focus::Input | Focus::Validate => submit(app, controller),
            Focus::Copy if app.can_copy() => return KeyAction::Copy,
            Focus::Copy => {}
            Focus::Clear => clear_input(app, controller),
        },
        KeyCode::Char(c) => {
            app.focus = Focus::Input;
            app.input.insert_char(c);
            input_edited(app, controller);
        }
        KeyCode::Backspace => {
            if app.input.backspace() {
                input_edited(app, controller);
            }
        }
        KeyCode::Delete => {
            if app.input.delete() {
                input_edited(app, controller);
            }
        }
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_home(),
        KeyCode::End => app.input.move_end(),
        _ => {}
    }

    KeyAction::Continue
}
