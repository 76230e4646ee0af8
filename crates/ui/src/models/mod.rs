// UI Models for solcheck
use models::ValidationResult;

/// Outcome of a background copy: the mechanism used, or the error text
pub type CopyOutcome = Result<String, String>;

/// A validation result tagged with the ticket it was scheduled under
pub type ScheduledResult = (u64, ValidationResult);

pub const PROMPT_MESSAGE: &str =
    "Press Enter or \"Validate Address\" to check if the address is valid";
pub const PENDING_MESSAGE: &str = "Validating address...";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy address. Please copy manually.";

/// Read access to the text the user typed
pub trait InputSource {
    fn current_text(&self) -> String;
}

/// Somewhere a validation outcome can be shown
pub trait ResultSink {
    /// Validation has been requested and is in flight
    fn show_pending(&mut self);

    fn show_result(&mut self, result: &ValidationResult);

    /// Back to the neutral prompt
    fn reset(&mut self);
}

/// State of the result region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationState {
    Prompt,
    Pending,
    Valid { warnings: Vec<String> },
    Invalid { errors: Vec<String> },
}

impl ValidationState {
    pub fn from_result(result: &ValidationResult) -> Self {
        if result.is_valid {
            ValidationState::Valid {
                warnings: result.warnings.clone(),
            }
        } else {
            ValidationState::Invalid {
                errors: result.errors.clone(),
            }
        }
    }

    /// Glyph shown next to the message; pending uses the spinner instead
    pub fn icon(&self) -> &'static str {
        match self {
            ValidationState::Prompt => "→",
            ValidationState::Pending => "…",
            ValidationState::Valid { .. } => "✓",
            ValidationState::Invalid { .. } => "✗",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ValidationState::Prompt => PROMPT_MESSAGE.to_string(),
            ValidationState::Pending => PENDING_MESSAGE.to_string(),
            ValidationState::Valid { warnings } if warnings.is_empty() => {
                "Valid Solana address".to_string()
            }
            ValidationState::Valid { warnings } => {
                format!("Valid Solana address ({})", warnings.join(", "))
            }
            ValidationState::Invalid { errors } => errors.join(", "),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationState::Valid { .. })
    }
}

/// Which control keyboard actions apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Validate,
    Copy,
    Clear,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Input => Focus::Validate,
            Focus::Validate => Focus::Copy,
            Focus::Copy => Focus::Clear,
            Focus::Clear => Focus::Input,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Focus::Input => Focus::Clear,
            Focus::Validate => Focus::Input,
            Focus::Copy => Focus::Validate,
            Focus::Clear => Focus::Copy,
        }
    }
}
