//! Output side: where emitted signals go.
//!
//! - [`LineSink`] writes the `event: <NAME>` stream, one flushed line per signal
//! - [`KeySink`] translates signals to xdotool commands through the keymap

pub mod keys;
pub mod line;

pub use keys::KeySink;
pub use line::LineSink;

use crate::error::Result;
use crate::gesture::GestureSignal;

/// Destination for emitted signals. `emit` must finish writing (and flushing)
/// before returning; the run loop reads the next event only afterwards.
pub trait SignalSink: Send {
    fn emit(&mut self, signal: &GestureSignal) -> Result<()>;

    fn name(&self) -> &str;
}
