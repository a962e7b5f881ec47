//! Stateless button dispatch: gesture-trigger edges and custom button signals.

use super::signal::{ButtonEdge, GestureSignal};

/// What the router should do with a pointer button edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Gesture button pressed: start a fresh hold session.
    StartHold,
    /// Gesture button released: drop the hold session, if any.
    EndHold,
    /// Custom button edge, emitted immediately.
    Emit(GestureSignal),
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDispatcher {
    gesture_button: u32,
    custom_buttons: Vec<u32>,
}

impl ButtonDispatcher {
    pub fn new(gesture_button: u32, custom_buttons: Vec<u32>) -> Self {
        Self {
            gesture_button,
            custom_buttons,
        }
    }

    pub fn dispatch(&self, button: u32, pressed: bool) -> ButtonAction {
        if button == self.gesture_button {
            return if pressed {
                ButtonAction::StartHold
            } else {
                ButtonAction::EndHold
            };
        }

        match self.custom_buttons.iter().position(|&code| code == button) {
            Some(position) => ButtonAction::Emit(GestureSignal::CustomButton {
                index: position + 1,
                edge: ButtonEdge::from_pressed(pressed),
            }),
            None => ButtonAction::Ignore,
        }
    }
}
