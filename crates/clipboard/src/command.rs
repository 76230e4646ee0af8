use crate::{Clipboard, ClipboardError};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// A system clipboard tool and the environment it needs
struct ClipboardTool {
    program: &'static str,
    args: &'static [&'static str],
    // Only usable when this variable is set (display server tools)
    requires_env: Option<&'static str>,
}

// Checked in order, first installed one wins
const KNOWN_TOOLS: [ClipboardTool; 5] = [
    ClipboardTool {
        program: "pbcopy",
        args: &[],
        requires_env: None,
    },
    ClipboardTool {
        program: "wl-copy",
        args: &[],
        requires_env: Some("WAYLAND_DISPLAY"),
    },
    ClipboardTool {
        program: "xclip",
        args: &["-selection", "clipboard"],
        requires_env: Some("DISPLAY"),
    },
    ClipboardTool {
        program: "xsel",
        args: &["--clipboard", "--input"],
        requires_env: Some("DISPLAY"),
    },
    ClipboardTool {
        program: "clip.exe",
        args: &[],
        requires_env: None,
    },
];

/// Copies by piping text into a clipboard tool such as `pbcopy` or `xclip`
pub struct CommandClipboard {
    name: String,
    program: PathBuf,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Find the first usable clipboard tool on `PATH`
    pub fn detect() -> Option<Self> {
        KNOWN_TOOLS.iter().find_map(|tool| {
            if let Some(var) = tool.requires_env {
                if std::env::var_os(var).is_none() {
                    return None;
                }
            }

            which::which(tool.program).ok().map(|path| {
                logging::debug(&format!(
                    "Found clipboard tool {} at {}",
                    tool.program,
                    path.display()
                ));
                Self::with_command(path, tool.args)
            })
        })
    }

    pub fn with_command(program: impl Into<PathBuf>, args: &[&str]) -> Self {
        let program = program.into();
        let name = program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| program.display().to_string());

        CommandClipboard {
            name,
            program,
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                tool: self.name.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A tool that exits early closes the pipe; its exit status says more
            match stdin.write_all(text.as_bytes()).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                Err(e) => return Err(e.into()),
            }
            // Dropping stdin closes the pipe so the tool sees end of input
            drop(stdin);
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(ClipboardError::CommandFailed {
                tool: self.name.clone(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}
