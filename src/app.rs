//! Application orchestration layer
//!
//! Pulls events from the input source one at a time, runs them through the
//! gesture router and hands any resulting signal to every sink before reading
//! the next event.

use crate::config::GestureConfig;
use crate::error::Result;
use crate::gesture::{GestureRouter, GestureSignal};
use crate::input::{EventSource, InputEvent};
use crate::output::SignalSink;
use std::future::Future;

/// Counters reported when the run loop exits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub events: u64,
    pub signals: u64,
    pub skipped_lines: u64,
}

/// Application orchestrator - owns the source, the router state and the sinks
pub struct Application {
    source: Box<dyn EventSource>,
    router: GestureRouter,
    sinks: Vec<Box<dyn SignalSink>>,
}

impl Application {
    pub fn new(
        source: Box<dyn EventSource>,
        config: &GestureConfig,
        sinks: Vec<Box<dyn SignalSink>>,
    ) -> Self {
        Self {
            source,
            router: GestureRouter::new(config),
            sinks,
        }
    }

    /// Run until the source ends or Ctrl-C is received.
    pub async fn run(&mut self) -> Result<RunSummary> {
        self.run_until(shutdown_signal()).await
    }

    /// Run until the source ends or `shutdown` completes. Shutdown is only
    /// observed between events; an event being processed always finishes.
    pub async fn run_until<F>(&mut self, shutdown: F) -> Result<RunSummary>
    where
        F: Future<Output = ()>,
    {
        let mut summary = RunSummary::default();
        tokio::pin!(shutdown);

        log::info!("reading input from {}", self.source.describe());

        loop {
            let next = tokio::select! {
                biased;
                _ = &mut shutdown => {
                    log::info!("shutdown requested");
                    break;
                }
                next = self.source.next_event() => next,
            };

            match next {
                Ok(Some(event)) => {
                    summary.events += 1;
                    if self.process(&event)?.is_some() {
                        summary.signals += 1;
                    }
                }
                Ok(None) => {
                    log::info!("input source ended");
                    break;
                }
                Err(err) if err.is_recoverable() => {
                    log::warn!("skipping input: {err}");
                    summary.skipped_lines += 1;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(summary)
    }

    /// Route one event and deliver the resulting signal, if any, to every sink.
    pub fn process(&mut self, event: &InputEvent) -> Result<Option<GestureSignal>> {
        let Some(signal) = self.router.handle(event) else {
            return Ok(None);
        };

        log::debug!("emitting {signal}");
        for sink in &mut self.sinks {
            sink.emit(&signal)?;
        }
        Ok(Some(signal))
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::warn!("cannot listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedSource;
    use crate::output::LineSink;
    use std::sync::{Arc, Mutex};

    /// Sink that records signal names for assertions.
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl SignalSink for Recorder {
        fn emit(&mut self, signal: &GestureSignal) -> Result<()> {
            self.0.lock().unwrap().push(signal.name());
            Ok(())
        }

        fn name(&self) -> &str {
            "recorder"
        }
    }

    #[tokio::test]
    async fn run_stops_when_source_ends() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let source = ScriptedSource::new(vec![
            InputEvent::SwipeBegin { fingers: 3 },
            InputEvent::SwipeUpdate {
                fingers: 3,
                dx: 0.0,
                dy: -31.0,
            },
            InputEvent::SwipeEnd {
                fingers: 3,
                cancelled: false,
            },
        ]);
        let mut app = Application::new(
            Box::new(source),
            &GestureConfig::default(),
            vec![
                Box::new(Recorder(Arc::clone(&seen))),
                Box::new(LineSink::new(std::io::sink(), "null")),
            ],
        );

        let summary = app.run_until(std::future::pending()).await.unwrap();
        assert_eq!(
            summary,
            RunSummary {
                events: 3,
                signals: 1,
                skipped_lines: 0
            }
        );
        assert_eq!(*seen.lock().unwrap(), vec!["SWIPE_GESTURE_UP_INCOMPLETE"]);
    }

    #[tokio::test]
    async fn shutdown_before_reading_processes_nothing() {
        let source = ScriptedSource::new(vec![InputEvent::PointerButton {
            button: 276,
            pressed: true,
        }]);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut app = Application::new(
            Box::new(source),
            &GestureConfig::default(),
            vec![Box::new(Recorder(Arc::clone(&seen)))],
        );

        let summary = app.run_until(async {}).await.unwrap();
        assert_eq!(summary.events, 0);
        assert!(seen.lock().unwrap().is_empty());
    }
}
