// App state for the UI
use crate::components::{Spinner, TextInput};
use crate::models::{
    CopyOutcome, Focus, ResultSink, ValidationState, COPY_FAILED_MESSAGE,
};
use chrono::Local;
use models::{AddressWarning, ValidationResult};
use std::time::{Duration, Instant};

/// How long the copy button reads "Copied" after a successful copy
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(1500);

const STATUS_MESSAGE_DURATION: Duration = Duration::from_secs(3);

/// Application state
pub struct App {
    pub input: TextInput,
    pub state: ValidationState,
    pub focus: Focus,
    pub copy_enabled: bool,
    pub copy_in_progress: bool,
    pub copied_until: Option<Instant>, // Copy button shows "Copied" until then
    pub alert: Option<String>,         // Blocking message, dismissed with Enter/Esc
    pub show_help: bool,
    pub spinner: Spinner,
    pub logs: Vec<String>,
    pub log_line: Option<String>, // Latest log line shown in the status bar
    pub last_tick: Instant,
    pub tick_rate: Duration,
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> App {
        App {
            input: TextInput::new(),
            state: ValidationState::Prompt,
            focus: Focus::Input,
            copy_enabled: false,
            copy_in_progress: false,
            copied_until: None,
            alert: None,
            show_help: false,
            spinner: Spinner::new(),
            logs: Vec::new(),
            log_line: None,
            last_tick: Instant::now(),
            tick_rate: Duration::from_millis(250),
            status_message: None,
            status_message_time: None,
        }
    }

    /// The validate action is only offered for non-blank input
    pub fn can_validate(&self) -> bool {
        !self.input.is_blank()
    }

    pub fn can_copy(&self) -> bool {
        self.copy_enabled && !self.copy_in_progress
    }

    /// The clear hint is shown only when there is something to clear
    pub fn show_clear(&self) -> bool {
        !self.input.value().is_empty()
    }

    pub fn is_copied(&self) -> bool {
        self.copied_until
            .map(|until| Instant::now() < until)
            .unwrap_or(false)
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.focus = Focus::Input;
        self.reset();
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn previous_focus(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Text that a copy action would place on the clipboard
    pub fn address_to_copy(&self) -> Option<String> {
        let address = self.input.value().trim();
        if self.can_copy() && !address.is_empty() {
            Some(address.to_string())
        } else {
            None
        }
    }

    pub fn start_copy(&mut self) {
        self.copy_in_progress = true;
    }

    pub fn process_copy_outcome(&mut self, outcome: CopyOutcome) {
        self.copy_in_progress = false;

        match outcome {
            Ok(mechanism) => {
                self.copied_until = Some(Instant::now() + COPY_FEEDBACK_DURATION);
                self.add_log(format!("Copied address to clipboard via {}", mechanism));
                self.set_status_message("✅ Address copied to clipboard".to_string());
            }
            Err(e) => {
                self.add_log(format!("Copy failed: {}", e));
                logging::error(&format!("Failed to copy address: {}", e));
                self.alert = Some(COPY_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub fn dismiss_alert(&mut self) -> bool {
        self.alert.take().is_some()
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_message_time = Some(Instant::now());
    }

    pub fn add_log(&mut self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        self.logs.push(format!("[{}] {}", timestamp, message));
        if self.logs.len() > logging::MAX_LOG_LINES {
            let excess = self.logs.len() - logging::MAX_LOG_LINES;
            self.logs.drain(..excess);
        }
    }

    // Advance animations, expire transient messages and pick up new log lines
    pub fn tick(&mut self) {
        self.last_tick = Instant::now();
        self.log_line = logging::last_log_at(logging::get_log_level());

        if self.state == ValidationState::Pending {
            self.spinner.tick();
        }

        if let Some(until) = self.copied_until {
            if Instant::now() >= until {
                self.copied_until = None;
            }
        }

        if let Some(time) = self.status_message_time {
            if time.elapsed() >= STATUS_MESSAGE_DURATION {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }
}

impl ResultSink for App {
    fn show_pending(&mut self) {
        self.state = ValidationState::Pending;
        self.copy_enabled = false;
    }

    fn show_result(&mut self, result: &ValidationResult) {
        self.state = ValidationState::from_result(result);
        self.copy_enabled = result.is_valid;

        let address = self.input.value().trim().to_string();
        if result.is_valid {
            self.add_log(format!("Valid: {}", address));
            logging::info(&format!("Valid address: {}", address));
            if let Some(AddressWarning::ConfusableCharacters(chars)) = result.warning() {
                logging::warning(&format!(
                    "{} contains {} confusable character(s)",
                    address,
                    chars.len()
                ));
            }
        } else {
            self.add_log(format!("Invalid: {} ({})", address, result.summary()));
            logging::info(&format!("Invalid address {}: {}", address, result.summary()));
        }
    }

    fn reset(&mut self) {
        self.state = ValidationState::Prompt;
        self.copy_enabled = false;
    }
}
