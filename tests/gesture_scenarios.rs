use std::io::Write;
use std::sync::{Arc, Mutex};

use gesture_reader::config::GestureConfig;
use gesture_reader::input::{InputEvent, ScriptedSource};
use gesture_reader::output::LineSink;
use gesture_reader::Application;

/// Write half of an in-memory buffer shared with the test body.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

async fn run(events: Vec<InputEvent>) -> Vec<String> {
    let output = SharedBuffer::default();
    let mut app = Application::new(
        Box::new(ScriptedSource::new(events)),
        &GestureConfig::default(),
        vec![Box::new(LineSink::new(output.clone(), "buffer"))],
    );
    app.run_until(std::future::pending()).await.unwrap();
    output.lines()
}

fn begin() -> InputEvent {
    InputEvent::SwipeBegin { fingers: 3 }
}

fn update(dx: f64, dy: f64) -> InputEvent {
    InputEvent::SwipeUpdate { fingers: 3, dx, dy }
}

fn end() -> InputEvent {
    InputEvent::SwipeEnd {
        fingers: 3,
        cancelled: false,
    }
}

fn press(button: u32) -> InputEvent {
    InputEvent::PointerButton {
        button,
        pressed: true,
    }
}

fn release(button: u32) -> InputEvent {
    InputEvent::PointerButton {
        button,
        pressed: false,
    }
}

fn motion(dx: f64, dy: f64) -> InputEvent {
    InputEvent::PointerMotion { dx, dy }
}

#[tokio::test]
async fn swipe_down_reported_once() {
    let lines = run(vec![begin(), update(0.0, 40.0), update(0.0, 40.0), end()]).await;
    assert_eq!(lines, vec!["event: SWIPE_GESTURE_DOWN_INCOMPLETE"]);
}

#[tokio::test]
async fn swipe_uses_fully_accumulated_vector() {
    // only the third update reaches 30; a diagonal partial sum would never classify
    let lines = run(vec![
        begin(),
        update(10.0, 0.0),
        update(10.0, 0.0),
        update(10.0, 0.0),
        end(),
    ])
    .await;
    assert_eq!(lines, vec!["event: SWIPE_GESTURE_RIGHT_INCOMPLETE"]);
}

#[tokio::test]
async fn small_swipe_produces_nothing() {
    let lines = run(vec![begin(), update(5.0, 5.0), end()]).await;
    assert!(lines.is_empty());
}

#[tokio::test]
async fn each_swipe_session_reports_independently() {
    let lines = run(vec![
        begin(),
        update(-35.0, 0.0),
        end(),
        begin(),
        update(0.0, -35.0),
        update(0.0, -35.0),
        end(),
    ])
    .await;
    assert_eq!(
        lines,
        vec![
            "event: SWIPE_GESTURE_LEFT_INCOMPLETE",
            "event: SWIPE_GESTURE_UP_INCOMPLETE"
        ]
    );
}

#[tokio::test]
async fn hold_gesture_right_then_silent() {
    let lines = run(vec![
        press(275),
        motion(130.0, 0.0),
        motion(0.0, 200.0),
        release(275),
    ])
    .await;
    assert_eq!(lines, vec!["event: MOUSE_GESTURE_RIGHT_INCOMPLETE"]);
}

#[tokio::test]
async fn hold_gesture_needs_coarser_threshold() {
    let lines = run(vec![press(275), motion(-100.0, 0.0), release(275)]).await;
    assert!(lines.is_empty());
}

#[tokio::test]
async fn custom_button_press_and_release() {
    let lines = run(vec![press(276), release(276)]).await;
    assert_eq!(
        lines,
        vec![
            "event: MOUSE_CUSTOM_BTN_1_PRESSED",
            "event: MOUSE_CUSTOM_BTN_1_RELEASED"
        ]
    );
}

#[tokio::test]
async fn unrelated_events_are_absorbed() {
    let lines = run(vec![
        InputEvent::DeviceAdded {
            device: "Touchpad".to_string(),
        },
        InputEvent::Other {
            kind: "GESTURE_PINCH_BEGIN".to_string(),
        },
        press(272),
        motion(500.0, 0.0),
        release(272),
    ])
    .await;
    assert!(lines.is_empty());
}
