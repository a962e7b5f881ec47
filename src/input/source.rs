//! Input sources: where typed events come from.
//!
//! The gesture core only needs a pull-based sequence of events. The production
//! source reads `libinput debug-events` output, either from a spawned `libinput`
//! child or from a recorded transcript. Tests use [`ScriptedSource`].

use super::debug_events::parse_line;
use super::event::InputEvent;
use crate::error::{GestureError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, ChildStdout, Command};

/// Pull-based event source.
///
/// `next_event` waits until an event is available and returns `Ok(None)` once
/// the source is exhausted. Implementations must be cancel-safe: the run loop
/// races this future against the shutdown signal.
#[async_trait]
pub trait EventSource: Send {
    async fn next_event(&mut self) -> Result<Option<InputEvent>>;

    /// Human-readable description for logging.
    fn describe(&self) -> String;
}

/// Events read line by line from `libinput debug-events` text.
///
/// Lines are decoded lossily: device names are not guaranteed to be UTF-8.
pub struct DebugEventsSource<R> {
    reader: BufReader<R>,
    // Survives a cancelled read so a partially received line is not lost.
    pending: Vec<u8>,
    label: String,
    // Held so the child lives as long as its stdout; killed on drop.
    _child: Option<Child>,
}

impl<R> DebugEventsSource<R>
where
    R: AsyncRead + Unpin + Send,
{
    /// Read a transcript from any async reader (a file, stdin, a test buffer).
    pub fn from_reader(reader: R, label: impl Into<String>) -> Self {
        Self {
            reader: BufReader::new(reader),
            pending: Vec::new(),
            label: label.into(),
            _child: None,
        }
    }
}

/// Build `[stdbuf -oL --] <program> debug-events --udev <seat>`.
///
/// libinput block-buffers stdout when it is a pipe, so without `stdbuf`
/// events arrive in bursts rather than as they happen.
pub fn debug_events_command(program: &str, seat: &str, line_buffered: bool) -> Command {
    let mut command = if line_buffered {
        let mut command = Command::new("stdbuf");
        command.arg("-oL").arg("--").arg(program);
        command
    } else {
        Command::new(program)
    };
    command.arg("debug-events").arg("--udev").arg(seat);
    command
}

impl DebugEventsSource<ChildStdout> {
    /// Spawn `libinput debug-events` (see [`debug_events_command`]) and read its stdout.
    pub fn spawn(program: &str, seat: &str, line_buffered: bool) -> Result<Self> {
        let spawner = if line_buffered { "stdbuf" } else { program };
        let mut child = debug_events_command(program, seat, line_buffered)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| GestureError::Spawn {
                program: spawner.to_string(),
                source,
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| GestureError::other(format!("`{program}` has no stdout pipe")))?;

        log::info!("reading events from `{program} debug-events` on {seat}");
        Ok(Self {
            reader: BufReader::new(stdout),
            pending: Vec::new(),
            label: format!("{program} debug-events --udev {seat}"),
            _child: Some(child),
        })
    }
}

#[async_trait]
impl<R> EventSource for DebugEventsSource<R>
where
    R: AsyncRead + Unpin + Send,
{
    async fn next_event(&mut self) -> Result<Option<InputEvent>> {
        loop {
            let read = self
                .reader
                .read_until(b'\n', &mut self.pending)
                .await
                .map_err(|err| GestureError::io(format!("reading {}", self.label), err))?;

            if read == 0 && self.pending.is_empty() {
                return Ok(None);
            }

            let line = String::from_utf8_lossy(&self.pending).into_owned();
            self.pending.clear();

            if let Some(event) = parse_line(line.trim_end_matches(['\n', '\r']))? {
                return Ok(Some(event));
            }
        }
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

/// In-memory sequence of events, replayed in order.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    events: VecDeque<InputEvent>,
}

impl ScriptedSource {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

#[async_trait]
impl EventSource for ScriptedSource {
    async fn next_event(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.events.pop_front())
    }

    fn describe(&self) -> String {
        format!("scripted ({} events)", self.events.len())
    }
}
