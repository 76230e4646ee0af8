// solcheck library surface, shared by the binary and integration tests

pub use clipboard;
pub use logging;
pub use models;
pub use ui;
pub use utils;
pub use validators;

use std::time::Duration;

/// Environment variable overriding the validation delay, in milliseconds
pub const DELAY_ENV: &str = "SOLCHECK_DELAY_MS";

/// Map the global flags to a log level; `--debug` wins over `--verbose`
pub fn log_level_for(verbose: bool, debug: bool) -> logging::LogLevel {
    if debug {
        logging::LogLevel::Debug
    } else if verbose {
        logging::LogLevel::Info
    } else {
        logging::LogLevel::Warning
    }
}

/// Pick the validation delay from the flag, then the environment, then the default
pub fn resolve_delay(flag: Option<u64>) -> Duration {
    let env_value = std::env::var(DELAY_ENV).ok();
    delay_from(flag, env_value.as_deref())
}

fn delay_from(flag: Option<u64>, env_value: Option<&str>) -> Duration {
    if let Some(ms) = flag {
        return Duration::from_millis(ms);
    }

    match env_value.map(str::trim) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(ms) => Duration::from_millis(ms),
            Err(_) => {
                logging::warning(&format!(
                    "Ignoring {}={:?}: not a number of milliseconds",
                    DELAY_ENV, raw
                ));
                ui::DEFAULT_VALIDATION_DELAY
            }
        },
        None => ui::DEFAULT_VALIDATION_DELAY,
    }
}

/// Address to pre-fill the form with: `--test` first, else the `test`
/// parameter of `--url`
pub fn resolve_prefill(test: Option<&str>, url: Option<&str>) -> Option<String> {
    test.filter(|t| !t.is_empty())
        .map(str::to_string)
        .or_else(|| url.and_then(utils::test_param))
}
