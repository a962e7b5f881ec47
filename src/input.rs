//! Input subsystem: typed events, the `libinput debug-events` parser and the
//! sources that feed events into the run loop.

pub mod debug_events;
pub mod event;
pub mod source;

// Public re-exports for convenience. Modules outside this crate should prefer importing
// from `crate::input` rather than reaching into submodules.
pub use debug_events::parse_line;
pub use event::InputEvent;
pub use source::{DebugEventsSource, EventSource, ScriptedSource};
