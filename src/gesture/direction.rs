//! Direction classification for accumulated displacement vectors.
//!
//! Angles follow screen coordinates: +x is right and +y is down, so a vector
//! pointing down the screen has an angle of +90°. Each direction owns a 30°
//! bucket centred on its axis; the 60° wedges between buckets are diagonal and
//! produce no direction.

use std::fmt;

/// Cardinal swipe direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// Upper-case label used in emitted signal names.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Right => "RIGHT",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Up => "UP",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Angle of `(dx, dy)` in degrees, in `(-180, 180]`.
///
/// `atan2(0, 0)` is defined as 0, so a zero vector reads as pointing right.
pub fn angle_degrees(dx: f64, dy: f64) -> f64 {
    dy.atan2(dx).to_degrees()
}

/// Map an angle in degrees to its bucket, or `None` inside a diagonal gap.
pub fn direction_for_angle(angle: f64) -> Option<Direction> {
    if (-15.0..15.0).contains(&angle) {
        Some(Direction::Right)
    } else if angle > 75.0 && angle < 105.0 {
        Some(Direction::Down)
    } else if angle > 165.0 || angle < -165.0 {
        Some(Direction::Left)
    } else if angle > -105.0 && angle < -75.0 {
        Some(Direction::Up)
    } else {
        None
    }
}

/// Classify an accumulated displacement.
///
/// Only meaningful once the magnitude gate has passed; callers never invoke
/// this for sub-threshold vectors.
pub fn classify(dx: f64, dy: f64) -> Option<Direction> {
    direction_for_angle(angle_degrees(dx, dy))
}
