//! Typed input events consumed by the gesture router.

/// One event from the input source.
///
/// Deltas are libinput's accelerated relative motion in device-independent
/// units; +y points down.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    DeviceAdded {
        device: String,
    },
    SwipeBegin {
        fingers: u32,
    },
    SwipeUpdate {
        fingers: u32,
        dx: f64,
        dy: f64,
    },
    SwipeEnd {
        fingers: u32,
        cancelled: bool,
    },
    PointerMotion {
        dx: f64,
        dy: f64,
    },
    PointerButton {
        button: u32,
        pressed: bool,
    },
    /// Any event type the router has no use for, kept by name for logging.
    Other {
        kind: String,
    },
}

impl InputEvent {
    /// libinput's name for this event type.
    pub fn kind(&self) -> &str {
        match self {
            InputEvent::DeviceAdded { .. } => "DEVICE_ADDED",
            InputEvent::SwipeBegin { .. } => "GESTURE_SWIPE_BEGIN",
            InputEvent::SwipeUpdate { .. } => "GESTURE_SWIPE_UPDATE",
            InputEvent::SwipeEnd { .. } => "GESTURE_SWIPE_END",
            InputEvent::PointerMotion { .. } => "POINTER_MOTION",
            InputEvent::PointerButton { .. } => "POINTER_BUTTON",
            InputEvent::Other { kind } => kind,
        }
    }
}
