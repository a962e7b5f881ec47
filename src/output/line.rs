use super::SignalSink;
use crate::error::{GestureError, Result};
use crate::gesture::GestureSignal;
use std::io::{self, Write};

/// Writes `event: <NAME>` lines and flushes after every line.
pub struct LineSink<W> {
    writer: W,
    label: String,
}

impl<W: Write + Send> LineSink<W> {
    pub fn new(writer: W, label: impl Into<String>) -> Self {
        Self {
            writer,
            label: label.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl LineSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), "stdout")
    }
}

impl<W: Write + Send> SignalSink for LineSink<W> {
    fn emit(&mut self, signal: &GestureSignal) -> Result<()> {
        writeln!(self.writer, "event: {signal}")
            .and_then(|()| self.writer.flush())
            .map_err(|err| match err.kind() {
                io::ErrorKind::BrokenPipe => GestureError::SinkClosed {
                    sink: self.label.clone(),
                },
                _ => GestureError::from(err),
            })
    }

    fn name(&self) -> &str {
        &self.label
    }
}
