use std::fmt::Debug;
use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};

use anyhow::Context;

use crate::telemetry::spawn_blocking_with_tracing;

/// Something that can place text on a clipboard.
///
/// `write_text` only *requests* the write. It returns as soon as the request
/// is handed off; whether the write eventually succeeds is never reported.
pub trait Clipboard: Debug + Send + Sync {
    fn write_text(&self, text: &str) -> bool;
}

/// Pipes the text into an external program such as `wl-copy`, `pbcopy`
/// or `xclip -selection clipboard`.
///
/// Needs a running tokio runtime.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }

    fn run(&self, text: &str) -> Result<(), anyhow::Error> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to spawn clipboard program `{}`", self.program))?;

        child
            .stdin
            .take()
            .context("Clipboard program has no stdin")?
            .write_all(text.as_bytes())
            .context("Failed to write to clipboard program")?;

        let status = child.wait().context("Failed to wait on clipboard program")?;
        if !status.success() {
            anyhow::bail!("Clipboard program exited with {status}");
        }
        Ok(())
    }
}

impl Clipboard for CommandClipboard {
    #[tracing::instrument(name = "Write text to clipboard", skip_all, fields(program = %self.program))]
    fn write_text(&self, text: &str) -> bool {
        let clipboard = self.clone();
        let text = text.to_owned();
        // Fire and forget.
        drop(spawn_blocking_with_tracing(move || {
            if let Err(e) = clipboard.run(&text) {
                tracing::debug!(error = ?e, "Clipboard write failed");
            }
        }));
        true
    }
}

/// Accepts every write and does nothing with it.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClipboard;

impl Clipboard for NoopClipboard {
    fn write_text(&self, _text: &str) -> bool {
        true
    }
}

/// Keeps every text written to it, oldest first.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .map(|writes| writes.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.writes().pop()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> bool {
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(text.to_owned());
        }
        true
    }
}
