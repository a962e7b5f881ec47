use std::sync::{Arc, Mutex};

use gesture_reader::config::GestureConfig;
use gesture_reader::gesture::GestureSignal;
use gesture_reader::input::DebugEventsSource;
use gesture_reader::output::SignalSink;
use gesture_reader::{Application, RunSummary};
use tokio::time::{timeout, Duration};

const TIMEOUT_MS: u64 = 500;

struct Recorder(Arc<Mutex<Vec<String>>>);

impl SignalSink for Recorder {
    fn emit(&mut self, signal: &GestureSignal) -> gesture_reader::Result<()> {
        self.0.lock().unwrap().push(signal.name());
        Ok(())
    }

    fn name(&self) -> &str {
        "recorder"
    }
}

async fn replay(chunks: &[&str]) -> (RunSummary, Vec<String>) {
    let bytes: Vec<&[u8]> = chunks.iter().map(|chunk| chunk.as_bytes()).collect();
    replay_bytes(&bytes).await
}

async fn replay_bytes(chunks: &[&[u8]]) -> (RunSummary, Vec<String>) {
    let mut builder = tokio_test::io::Builder::new();
    for chunk in chunks {
        builder.read(chunk);
    }
    let reader = builder.build();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut app = Application::new(
        Box::new(DebugEventsSource::from_reader(reader, "mock")),
        &GestureConfig::default(),
        vec![Box::new(Recorder(Arc::clone(&seen)))],
    );

    let summary = timeout(
        Duration::from_millis(TIMEOUT_MS),
        app.run_until(std::future::pending()),
    )
    .await
    .expect("replay timed out")
    .expect("replay failed");

    let names = seen.lock().unwrap().clone();
    (summary, names)
}

#[tokio::test]
async fn touchpad_swipe_transcript() {
    let (summary, names) = replay(&[
        "-event12  DEVICE_ADDED            SynPS/2 Synaptics TouchPad  seat0 default group9  cap:pg\n",
        " event12  GESTURE_SWIPE_BEGIN     +1.000s\t3\n",
        " event12  GESTURE_SWIPE_UPDATE    +1.010s\t3 -12.00/  1.00 (-24.00/  2.00 unaccelerated)\n",
        " event12  GESTURE_SWIPE_UPDATE    +1.020s\t3 -12.00/  0.50 (-24.00/  1.00 unaccelerated)\n",
        " event12  GESTURE_SWIPE_UPDATE    +1.030s\t3 -12.00/  0.00 (-24.00/  0.00 unaccelerated)\n",
        " event12  GESTURE_SWIPE_UPDATE    +1.040s\t3 -12.00/  0.00 (-24.00/  0.00 unaccelerated)\n",
        " event12  GESTURE_SWIPE_END       +1.100s\t3\n",
    ])
    .await;

    assert_eq!(names, vec!["SWIPE_GESTURE_LEFT_INCOMPLETE"]);
    assert_eq!(summary.events, 7);
    assert_eq!(summary.signals, 1);
}

#[tokio::test]
async fn mouse_gesture_transcript_split_across_reads() {
    // line boundaries do not line up with read boundaries
    let (summary, names) = replay(&[
        " event7   POINTER_BUTTON          +2.000s\tBTN_SIDE (275) pre",
        "ssed, seat count: 1\n event7   POINTER_MOTION          +2.010s\t  0.00/-60.00 (  0.00/-30.00)\n",
        " event7   POINTER_MOTION          +2.020s\t  0.00/-70.00 (  0.00/-35.00)\n",
        " event7   POINTER_MOTION          +2.030s\t  0.00/-70.00 (  0.00/-35.00)\n",
        " event7   POINTER_BUTTON          +2.100s\tBTN_SIDE (275) released, seat count: 0\n",
        " event7   POINTER_BUTTON          +3.000s\tBTN_EXTRA (276) pressed, seat count: 1\n",
    ])
    .await;

    assert_eq!(
        names,
        vec!["MOUSE_GESTURE_UP_INCOMPLETE", "MOUSE_CUSTOM_BTN_1_PRESSED"]
    );
    assert_eq!(summary.signals, 2);
}

#[tokio::test]
async fn malformed_lines_are_skipped() {
    let (summary, names) = replay(&[
        " event12  GESTURE_SWIPE_BEGIN     +1.000s\t3\n",
        " event12  GESTURE_SWIPE_UPDATE    +1.010s\t3 oops\n",
        " event12  GESTURE_SWIPE_UPDATE    +1.020s\t3  0.00/ 31.00 (  0.00/ 62.00 unaccelerated)\n",
        " event12  GESTURE_SWIPE_END       +1.100s\t3\n",
    ])
    .await;

    assert_eq!(names, vec!["SWIPE_GESTURE_DOWN_INCOMPLETE"]);
    assert_eq!(
        summary,
        RunSummary {
            events: 3,
            signals: 1,
            skipped_lines: 1
        }
    );
}

#[tokio::test]
async fn non_utf8_device_name_does_not_stop_the_run() {
    let (summary, names) = replay_bytes(&[
        b"-event7   DEVICE_ADDED            Mouse \xff\xfe  seat0 default group7  cap:p\n",
        b" event7   POINTER_BUTTON          +1.000s\tBTN_EXTRA (276) pressed, seat count: 1\n",
    ])
    .await;

    assert_eq!(names, vec!["MOUSE_CUSTOM_BTN_1_PRESSED"]);
    assert_eq!(
        summary,
        RunSummary {
            events: 2,
            signals: 1,
            skipped_lines: 0
        }
    );
}
