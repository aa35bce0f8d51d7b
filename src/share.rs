//! Share links and the platform URL opener.

use std::io;
use std::process::{Command, Stdio};
use std::thread;

use thiserror::Error;
use tracing::{debug, warn};

use crate::quote::Quote;

/// Tweet composer used when no other intent URL is configured.
pub const DEFAULT_INTENT_URL: &str = "https://twitter.com/intent/tweet";

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("'{command}' exited with code {code:?}")]
    Exited { command: String, code: Option<i32> },
}

/// `{intent_url}?text={"{text} — {author}" percent-encoded}`.
pub fn share_url(intent_url: &str, quote: &Quote) -> String {
    let separator = if intent_url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}text={}",
        intent_url,
        separator,
        urlencoding::encode(&quote.display_line())
    )
}

/// Opens a URL in an external browsing context.
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<(), ShareError>;
}

/// Hands the URL to the desktop's default handler.
///
/// The opener runs detached: `open` returns once the process has started, and
/// its exit status is only logged.
#[derive(Debug, Clone)]
pub struct SystemOpener {
    program: String,
    args: Vec<String>,
}

impl Default for SystemOpener {
    fn default() -> Self {
        if cfg!(target_os = "macos") {
            Self::with_command("open", &[])
        } else if cfg!(target_os = "windows") {
            Self::with_command("cmd", &["/C", "start", ""])
        } else {
            Self::with_command("xdg-open", &[])
        }
    }
}

impl SystemOpener {
    /// Run `program args... <url>` instead of the platform opener.
    pub fn with_command(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), ShareError> {
        // Opener output would draw over the TUI.
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ShareError::Launch {
                command: self.program.clone(),
                source,
            })?;

        let command = self.program.clone();
        thread::spawn(move || match child.wait() {
            Ok(status) if status.success() => debug!(command = %command, "Opener exited"),
            Ok(status) => {
                let err = ShareError::Exited {
                    command,
                    code: status.code(),
                };
                warn!(error = %err, "Share opener failed");
            }
            Err(err) => warn!(error = %err, command = %command, "Failed to wait for opener"),
        });

        Ok(())
    }
}
