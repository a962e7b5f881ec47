//! gesture-reader - one-shot swipe and mouse gesture events from libinput
//!
//! Prints `event: <NAME>` lines on stdout and optionally drives xdotool.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use gesture_reader::input::{DebugEventsSource, EventSource};
use gesture_reader::output::{KeySink, LineSink, SignalSink};
use gesture_reader::{Application, GestureConfig};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the event stream
    env_logger::init();

    let matches = Command::new("gesture-reader")
        .version(gesture_reader::VERSION)
        .about("Turns libinput swipes and button-held mouse gestures into direction events")
        .long_about(
            "gesture-reader reads `libinput debug-events`, classifies touchpad swipes and \
             mouse movement while a gesture button is held into right/down/left/up, and \
             prints one `event: <NAME>` line per gesture.",
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("TOML file with thresholds, button codes and keymap"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("FILE")
                .help("Read a recorded `libinput debug-events` transcript ('-' for stdin)"),
        )
        .arg(
            Arg::new("libinput")
                .long("libinput")
                .value_name("PROGRAM")
                .default_value("libinput")
                .help("libinput executable to spawn when --input is not given"),
        )
        .arg(
            Arg::new("seat")
                .long("seat")
                .value_name("SEAT")
                .default_value("seat0")
                .help("udev seat passed to `libinput debug-events`"),
        )
        .arg(
            Arg::new("no-stdbuf")
                .long("no-stdbuf")
                .action(ArgAction::SetTrue)
                .help("Spawn libinput directly instead of under `stdbuf -oL`"),
        )
        .arg(
            Arg::new("xdotool")
                .long("xdotool")
                .action(ArgAction::SetTrue)
                .help("Send mapped key commands to `xdotool -`"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Do not print `event:` lines"),
        )
        .get_matches();

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let config = GestureConfig::load(config_path.as_deref()).context("loading configuration")?;

    let quiet = matches.get_flag("quiet");
    let xdotool = matches.get_flag("xdotool");
    if quiet && !xdotool {
        anyhow::bail!("--quiet without --xdotool leaves nothing to do");
    }

    let mut sinks: Vec<Box<dyn SignalSink>> = Vec::new();
    if !quiet {
        sinks.push(Box::new(LineSink::stdout()));
    }
    if xdotool {
        sinks.push(Box::new(KeySink::spawn_xdotool(
            "xdotool",
            config.keymap.clone(),
        )?));
    }

    let source: Box<dyn EventSource> = match matches.get_one::<String>("input") {
        Some(path) if path == "-" => {
            Box::new(DebugEventsSource::from_reader(tokio::io::stdin(), "stdin"))
        }
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("opening input transcript {path}"))?;
            Box::new(DebugEventsSource::from_reader(file, path.clone()))
        }
        None => {
            let program = matches
                .get_one::<String>("libinput")
                .map(String::as_str)
                .unwrap_or("libinput");
            let seat = matches
                .get_one::<String>("seat")
                .map(String::as_str)
                .unwrap_or("seat0");
            let line_buffered = !matches.get_flag("no-stdbuf");
            Box::new(DebugEventsSource::spawn(program, seat, line_buffered)?)
        }
    };

    let mut app = Application::new(source, &config, sinks);
    let summary = app.run().await?;

    log::info!(
        "processed {} events, emitted {} signals, skipped {} lines",
        summary.events,
        summary.signals,
        summary.skipped_lines
    );

    Ok(())
}
