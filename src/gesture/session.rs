//! Gesture sessions: accumulate motion deltas until the magnitude gate opens,
//! then classify exactly once.
//!
//! [`GestureSession`] holds the shared accumulate/threshold/one-shot logic.
//! [`SwipeSession`] and [`HoldSession`] differ only in what happens after the
//! gate opens: a swipe stays alive but suppressed until its end event, while a
//! hold gesture stops tracking immediately.

use super::direction::{classify, Direction};

/// Result of feeding one delta into a [`GestureSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The session already crossed its threshold; the delta was dropped.
    Suppressed,
    /// Delta accumulated, magnitude still below threshold.
    Accumulating,
    /// Threshold crossed by this delta. `None` means the angle fell in a
    /// diagonal gap.
    Crossed(Option<Direction>),
}

/// Running displacement plus the one-shot flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureSession {
    accumulated: (f64, f64),
    emitted: bool,
}

impl GestureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulated(&self) -> (f64, f64) {
        self.accumulated
    }

    pub fn is_emitted(&self) -> bool {
        self.emitted
    }

    /// Apply one delta and classify if the magnitude reaches `threshold`.
    ///
    /// `emitted` flips on the first crossing whether or not a direction
    /// resulted, and never flips back.
    pub fn push(&mut self, dx: f64, dy: f64, threshold: f64) -> Step {
        if self.emitted {
            return Step::Suppressed;
        }

        self.accumulated.0 += dx;
        self.accumulated.1 += dy;

        let (x, y) = self.accumulated;
        if x.hypot(y) < threshold {
            return Step::Accumulating;
        }

        self.emitted = true;
        Step::Crossed(classify(x, y))
    }
}

/// One touchpad swipe, from `GESTURE_SWIPE_BEGIN` to `GESTURE_SWIPE_END`.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeSession {
    session: GestureSession,
    threshold: f64,
}

impl SwipeSession {
    pub fn begin(threshold: f64) -> Self {
        Self {
            session: GestureSession::new(),
            threshold,
        }
    }

    /// Feed a swipe update; returns the direction on the one qualifying update.
    pub fn update(&mut self, dx: f64, dy: f64) -> Option<Direction> {
        match self.session.push(dx, dy, self.threshold) {
            Step::Crossed(direction) => direction,
            Step::Suppressed | Step::Accumulating => None,
        }
    }

    pub fn is_emitted(&self) -> bool {
        self.session.is_emitted()
    }

    pub fn accumulated(&self) -> (f64, f64) {
        self.session.accumulated()
    }
}

/// Outcome of pointer motion during a hold gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldOutcome {
    Tracking,
    /// Threshold crossed; the session must be discarded.
    Finished(Option<Direction>),
}

/// Pointer motion while the gesture button is held down.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldSession {
    session: GestureSession,
    threshold: f64,
}

impl HoldSession {
    pub fn press(threshold: f64) -> Self {
        Self {
            session: GestureSession::new(),
            threshold,
        }
    }

    pub fn motion(&mut self, dx: f64, dy: f64) -> HoldOutcome {
        match self.session.push(dx, dy, self.threshold) {
            Step::Crossed(direction) => HoldOutcome::Finished(direction),
            Step::Accumulating => HoldOutcome::Tracking,
            // unreachable in practice: the owner drops the session on Finished
            Step::Suppressed => HoldOutcome::Finished(None),
        }
    }

    pub fn accumulated(&self) -> (f64, f64) {
        self.session.accumulated()
    }
}
