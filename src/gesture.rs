//! Gesture core: direction classification, sessions, button dispatch and the
//! router that ties them together. Performs no I/O.

pub mod buttons;
pub mod direction;
pub mod router;
pub mod session;
pub mod signal;

pub use buttons::{ButtonAction, ButtonDispatcher};
pub use direction::{classify, Direction};
pub use router::GestureRouter;
pub use session::{GestureSession, HoldOutcome, HoldSession, Step, SwipeSession};
pub use signal::{ButtonEdge, GestureSignal};
