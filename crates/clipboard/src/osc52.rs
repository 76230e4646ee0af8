use crate::{Clipboard, ClipboardError};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::{self, IsTerminal, Write};
use std::sync::Mutex;

/// Set to any value to stop solcheck from emitting OSC 52 sequences
pub const DISABLE_ENV: &str = "SOLCHECK_NO_OSC52";

/// Asks the terminal emulator to set the clipboard via the OSC 52 escape
/// sequence. Works over SSH, but only in terminals that honour it, and the
/// terminal never reports whether it did.
pub struct Osc52Clipboard<W: Write + Send> {
    writer: Mutex<W>,
    enabled: bool,
}

impl Osc52Clipboard<io::Stdout> {
    /// The terminal on stdout; disabled when stdout is redirected
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let is_terminal = stdout.is_terminal();
        let mut clipboard = Osc52Clipboard::from_env(stdout);
        clipboard.enabled &= is_terminal;
        clipboard
    }
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(writer: W) -> Self {
        Osc52Clipboard {
            writer: Mutex::new(writer),
            enabled: true,
        }
    }

    /// Like `new`, but disabled when `SOLCHECK_NO_OSC52` is set
    pub fn from_env(writer: W) -> Self {
        Osc52Clipboard {
            writer: Mutex::new(writer),
            enabled: std::env::var_os(DISABLE_ENV).is_none(),
        }
    }

    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Build the OSC 52 sequence that stores `text` in the system clipboard
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

#[async_trait]
impl<W: Write + Send> Clipboard for Osc52Clipboard<W> {
    fn name(&self) -> &str {
        "osc52"
    }

    fn is_available(&self) -> bool {
        self.enabled
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if !self.enabled {
            return Err(ClipboardError::Unavailable);
        }

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ClipboardError::Unavailable)?;
        writer.write_all(osc52_sequence(text).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
