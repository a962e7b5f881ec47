//! Key dispatch through `xdotool -`.
//!
//! Each signal is looked up in the keymap. A non-empty command is written as
//! `key <command>` to xdotool's stdin, an empty command is deliberately
//! ignored, and a signal missing from the keymap is logged as unhandled.

use super::SignalSink;
use crate::error::{GestureError, Result};
use crate::gesture::GestureSignal;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::process::{Child, ChildStdin, Command, Stdio};

/// Writes are blocking on purpose: a signal's key command must reach xdotool
/// before the run loop reads the next input event, so this sink uses
/// `std::process` rather than `tokio::process`.
pub struct KeySink<W: Write> {
    // Option so Drop can close stdin before waiting on the child.
    writer: Option<W>,
    keymap: BTreeMap<String, String>,
    child: Option<Child>,
}

impl<W: Write + Send> KeySink<W> {
    pub fn new(writer: W, keymap: BTreeMap<String, String>) -> Self {
        Self {
            writer: Some(writer),
            keymap,
            child: None,
        }
    }

    pub fn into_inner(mut self) -> Option<W> {
        self.writer.take()
    }
}

impl KeySink<ChildStdin> {
    /// Start `<program> -` reading commands from stdin.
    pub fn spawn_xdotool(program: &str, keymap: BTreeMap<String, String>) -> Result<Self> {
        let mut child = Command::new(program)
            .arg("-")
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|source| GestureError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| GestureError::other(format!("`{program}` has no stdin pipe")))?;

        log::info!("dispatching keys through `{program} -`");
        Ok(Self {
            writer: Some(stdin),
            keymap,
            child: Some(child),
        })
    }
}

impl<W: Write + Send> SignalSink for KeySink<W> {
    fn emit(&mut self, signal: &GestureSignal) -> Result<()> {
        let name = signal.name();
        let command = match self.keymap.get(&name) {
            Some(command) if command.is_empty() => return Ok(()),
            Some(command) => command,
            None => {
                log::info!("unhandled event {name}");
                return Ok(());
            }
        };

        let writer = self.writer.as_mut().ok_or_else(|| GestureError::SinkClosed {
            sink: "xdotool".to_string(),
        })?;

        log::debug!("{name} -> key {command}");
        writeln!(writer, "key {command}")
            .and_then(|()| writer.flush())
            .map_err(|err| match err.kind() {
                io::ErrorKind::BrokenPipe => GestureError::SinkClosed {
                    sink: "xdotool".to_string(),
                },
                _ => GestureError::from(err),
            })
    }

    fn name(&self) -> &str {
        "xdotool"
    }
}

impl<W: Write> Drop for KeySink<W> {
    fn drop(&mut self) {
        // xdotool exits once its stdin closes, so the wait is short.
        drop(self.writer.take());
        if let Some(mut child) = self.child.take() {
            if let Err(err) = child.wait() {
                log::warn!("failed to wait for xdotool: {err}");
            }
        }
    }
}
