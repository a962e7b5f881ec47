//! Event router: demultiplexes input events into sessions and button dispatch.

use super::buttons::{ButtonAction, ButtonDispatcher};
use super::session::{HoldOutcome, HoldSession, SwipeSession};
use super::signal::GestureSignal;
use crate::config::GestureConfig;
use crate::input::InputEvent;

/// Owns the live sessions and turns each input event into at most one signal.
///
/// Events must be fed in arrival order; accumulation is order-sensitive.
#[derive(Debug, Clone)]
pub struct GestureRouter {
    swipe_threshold: f64,
    mouse_threshold: f64,
    buttons: ButtonDispatcher,
    swipe: Option<SwipeSession>,
    hold: Option<HoldSession>,
}

impl GestureRouter {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            swipe_threshold: config.swipe_threshold,
            mouse_threshold: config.mouse_threshold,
            buttons: ButtonDispatcher::new(config.gesture_button, config.custom_buttons.clone()),
            swipe: None,
            hold: None,
        }
    }

    pub fn swipe_session(&self) -> Option<&SwipeSession> {
        self.swipe.as_ref()
    }

    pub fn hold_session(&self) -> Option<&HoldSession> {
        self.hold.as_ref()
    }

    pub fn handle(&mut self, event: &InputEvent) -> Option<GestureSignal> {
        match *event {
            InputEvent::SwipeBegin { fingers } => {
                log::debug!("SWIPE_GESTURE_BEGIN ({fingers} fingers)");
                self.swipe = Some(SwipeSession::begin(self.swipe_threshold));
                None
            }
            InputEvent::SwipeUpdate { dx, dy, .. } => self
                .swipe
                .as_mut()
                .and_then(|swipe| swipe.update(dx, dy))
                .map(GestureSignal::Swipe),
            InputEvent::SwipeEnd { cancelled, .. } => {
                log::debug!("SWIPE_GESTURE_END{}", if cancelled { " (cancelled)" } else { "" });
                self.swipe = None;
                None
            }
            InputEvent::PointerButton { button, pressed } => self.handle_button(button, pressed),
            InputEvent::PointerMotion { dx, dy } => self.handle_motion(dx, dy),
            InputEvent::DeviceAdded { ref device } => {
                log::debug!("device added: {device}");
                None
            }
            InputEvent::Other { .. } => {
                log::trace!("ignoring {}", event.kind());
                None
            }
        }
    }

    fn handle_button(&mut self, button: u32, pressed: bool) -> Option<GestureSignal> {
        match self.buttons.dispatch(button, pressed) {
            ButtonAction::StartHold => {
                log::debug!("MOUSE_GESTURE_BEGIN");
                self.hold = Some(HoldSession::press(self.mouse_threshold));
                None
            }
            ButtonAction::EndHold => {
                if self.hold.take().is_some() {
                    log::debug!("MOUSE_GESTURE_END");
                }
                None
            }
            ButtonAction::Emit(signal) => Some(signal),
            ButtonAction::Ignore => None,
        }
    }

    fn handle_motion(&mut self, dx: f64, dy: f64) -> Option<GestureSignal> {
        let hold = self.hold.as_mut()?;
        match hold.motion(dx, dy) {
            HoldOutcome::Tracking => None,
            HoldOutcome::Finished(direction) => {
                self.hold = None;
                direction.map(GestureSignal::Mouse)
            }
        }
    }
}
