//! System clipboard access through the platform's command-line tools.

use std::io::Write;
use std::process::{Command, Stdio};

use tokio::sync::mpsc;

/// External program able to receive clipboard contents on stdin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipboardTool {
    /// `wl-copy` from wl-clipboard (Wayland).
    WlCopy,
    /// `xclip -selection clipboard` (X11).
    Xclip,
    /// `xsel --clipboard --input` (X11).
    Xsel,
    /// `pbcopy` (macOS).
    Pbcopy,
}

impl ClipboardTool {
    /// Program name looked up on `PATH`.
    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::WlCopy => "wl-copy",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::Pbcopy => "pbcopy",
        }
    }

    /// Arguments selecting the clipboard (not the primary selection).
    #[must_use]
    pub const fn args(self) -> &'static [&'static str] {
        match self {
            Self::WlCopy | Self::Pbcopy => &[],
            Self::Xclip => &["-selection", "clipboard"],
            Self::Xsel => &["--clipboard", "--input"],
        }
    }
}

/// Result of a background copy, delivered to the main loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The text reached the clipboard.
    Copied(String),
    /// No tool worked; the payload is a diagnostic for the log.
    Failed(String),
}

/// What: Candidate tools in priority order for the current session.
///
/// Inputs:
/// - `wayland`: Whether `WAYLAND_DISPLAY` is set
///
/// Output:
/// - Tools to try; Wayland sessions try `wl-copy` first
#[must_use]
pub fn candidate_tools(wayland: bool) -> Vec<ClipboardTool> {
    let mut tools = Vec::with_capacity(4);
    if wayland {
        tools.push(ClipboardTool::WlCopy);
    }
    tools.extend([ClipboardTool::Xclip, ClipboardTool::Xsel, ClipboardTool::Pbcopy]);
    tools
}

/// What: Pipe `text` into the first available clipboard tool.
///
/// Inputs:
/// - `text`: Payload to copy
///
/// Output:
/// - The tool that accepted the text
///
/// # Errors
/// - Returns `Err` when no candidate tool is installed or every tool failed
pub fn copy_text(text: &str) -> Result<ClipboardTool, String> {
    let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
    let mut last_err = String::from("no clipboard tool on PATH");
    for tool in candidate_tools(wayland) {
        if which::which(tool.program()).is_err() {
            continue;
        }
        match pipe_into(tool, text) {
            Ok(()) => return Ok(tool),
            Err(e) => {
                tracing::debug!(tool = tool.program(), error = %e, "[Clipboard] tool failed");
                last_err = format!("{}: {e}", tool.program());
            }
        }
    }
    Err(last_err)
}

/// Run one tool with `text` on stdin and wait for it.
fn pipe_into(tool: ClipboardTool, text: &str) -> std::io::Result<()> {
    let mut child = Command::new(tool.program())
        .args(tool.args())
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("exited with {status}")))
    }
}

/// What: Copy `text` on a short-lived thread and report back over `tx`.
///
/// Inputs:
/// - `text`: Payload to copy
/// - `tx`: Channel drained by the main loop
///
/// Details:
/// - In headless mode no external program runs and the copy is reported as failed.
pub fn spawn_copy(text: String, tx: mpsc::UnboundedSender<CopyOutcome>) {
    std::thread::spawn(move || {
        let outcome = if crate::util::is_headless() {
            CopyOutcome::Failed("headless mode".to_string())
        } else {
            match copy_text(&text) {
                Ok(tool) => {
                    tracing::info!(tool = tool.program(), "[Clipboard] copied server address");
                    CopyOutcome::Copied(text)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "[Clipboard] copy failed");
                    CopyOutcome::Failed(e)
                }
            }
        };
        let _ = tx.send(outcome);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Wayland sessions try wl-copy first; X11 skips it
    ///
    /// - Input: `wayland` true and false
    /// - Output: Ordered tool lists
    fn clipboard_candidate_order() {
        assert_eq!(
            candidate_tools(true),
            vec![
                ClipboardTool::WlCopy,
                ClipboardTool::Xclip,
                ClipboardTool::Xsel,
                ClipboardTool::Pbcopy
            ]
        );
        assert_eq!(candidate_tools(false)[0], ClipboardTool::Xclip);
        assert_eq!(ClipboardTool::Xclip.args(), &["-selection", "clipboard"]);
    }
}
