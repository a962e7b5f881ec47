//! # gesture-reader - one-shot swipe and mouse gesture events from libinput
//!
//! Watches touchpad swipes and "hold a mouse button and move" gestures and
//! reports each one as a single direction event, so a window manager helper can
//! bind them to keys.
//!
//! ## Features
//!
//! - **Swipe gestures**: touchpad swipes classified as right, down, left or up
//!   once they travel far enough, reported once per swipe
//! - **Mouse gestures**: pointer motion while a trigger button is held,
//!   classified the same way with a coarser threshold
//! - **Custom buttons**: press/release of extra mouse buttons as named signals
//! - **xdotool dispatch**: optional key presses driven by a configurable keymap
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`config`] - Thresholds, button codes and keymap loaded from TOML
//! - [`gesture`] - Classifier, sessions and the event router (no I/O)
//! - [`input`] - Typed events and the `libinput debug-events` source
//! - [`output`] - `event: <NAME>` line stream and xdotool key sink
//! - [`app`] - Run loop tying source, router and sinks together

pub mod error;

pub mod config;
pub mod gesture;
pub mod input;
pub mod output;

pub mod app;

// Re-export commonly used types for convenience
pub use error::{GestureError, Result};

pub use app::{Application, RunSummary};
pub use config::GestureConfig;
pub use gesture::{Direction, GestureRouter, GestureSignal};
pub use input::{EventSource, InputEvent};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
