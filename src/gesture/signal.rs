//! Signals produced by the gesture core.

use super::direction::Direction;
use std::fmt;

/// Press or release edge of a pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonEdge {
    Pressed,
    Released,
}

impl ButtonEdge {
    pub fn from_pressed(pressed: bool) -> Self {
        if pressed {
            ButtonEdge::Pressed
        } else {
            ButtonEdge::Released
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ButtonEdge::Pressed => "PRESSED",
            ButtonEdge::Released => "RELEASED",
        }
    }
}

/// A classified gesture or button signal, emitted at most once per trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureSignal {
    /// Touchpad swipe crossed the swipe threshold.
    Swipe(Direction),
    /// Pointer moved past the hold threshold while the gesture button was held.
    Mouse(Direction),
    /// Edge of a custom button; `index` counts from 1 in configuration order.
    CustomButton { index: usize, edge: ButtonEdge },
}

impl GestureSignal {
    /// Wire name, e.g. `SWIPE_GESTURE_LEFT_INCOMPLETE` or `MOUSE_CUSTOM_BTN_1_PRESSED`.
    pub fn name(&self) -> String {
        match self {
            GestureSignal::Swipe(direction) => format!("SWIPE_GESTURE_{direction}_INCOMPLETE"),
            GestureSignal::Mouse(direction) => format!("MOUSE_GESTURE_{direction}_INCOMPLETE"),
            GestureSignal::CustomButton { index, edge } => {
                format!("MOUSE_CUSTOM_BTN_{index}_{}", edge.as_str())
            }
        }
    }
}

impl fmt::Display for GestureSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
