// clipboard crate
//
// Copying goes through the `Clipboard` capability. Two implementations
// exist: a system clipboard tool driven as a child process, and the OSC 52
// terminal escape sequence used when no tool is installed or it fails.

mod chain;
mod command;
mod osc52;

use async_trait::async_trait;
use std::io;
use thiserror::Error;

pub use chain::ClipboardChain;
pub use command::CommandClipboard;
pub use osc52::Osc52Clipboard;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Failed to start clipboard tool '{tool}': {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Clipboard tool '{tool}' exited with {status}")]
    CommandFailed { tool: String, status: String },

    #[error("Clipboard is not available")]
    Unavailable,
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Whether this mechanism can be tried on the current platform
    fn is_available(&self) -> bool;

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
