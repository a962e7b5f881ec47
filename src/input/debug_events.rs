//! Parser for the text printed by `libinput debug-events`.
//!
//! Each event is one line made of a device column, an event type column, a
//! `+<seconds>s` timestamp and a type-specific payload:
//!
//! ```text
//! -event7   DEVICE_ADDED            Logitech M590 Multi-Device Mouse  seat0 default group7  cap:p
//!  event7   POINTER_MOTION          +1.234s	  1.00/  2.00 (  1.00/  2.00)
//!  event7   POINTER_BUTTON          +2.345s	BTN_SIDE (275) pressed, seat count: 1
//!  event12  GESTURE_SWIPE_BEGIN     +3.001s	3
//!  event12  GESTURE_SWIPE_UPDATE    +3.010s	3  1.23/-0.45 ( 2.00/-0.73 unaccelerated)
//!  event12  GESTURE_SWIPE_END       +3.200s	3 cancelled
//! ```
//!
//! The leading `-` marks the first event of a new device and carries no meaning
//! here. Lines that do not start with an `eventN` column are skipped.

use super::event::InputEvent;
use crate::error::{GestureError, Result};

/// Parse one line. `Ok(None)` for lines that are not events.
pub fn parse_line(line: &str) -> Result<Option<InputEvent>> {
    let trimmed = line.trim_start().trim_start_matches('-');
    let Some((device, rest)) = split_token(trimmed) else {
        return Ok(None);
    };
    if !device.starts_with("event") {
        return Ok(None);
    }
    let Some((kind, rest)) = split_token(rest) else {
        return Ok(None);
    };
    let payload = skip_timestamp(rest);

    let event = match kind {
        "DEVICE_ADDED" => InputEvent::DeviceAdded {
            device: device_name(payload).to_string(),
        },
        "GESTURE_SWIPE_BEGIN" => InputEvent::SwipeBegin {
            fingers: parse_fingers(line, payload)?.0,
        },
        "GESTURE_SWIPE_UPDATE" => {
            let (fingers, rest) = parse_fingers(line, payload)?;
            let (dx, dy) = parse_delta(line, rest)?;
            InputEvent::SwipeUpdate { fingers, dx, dy }
        }
        "GESTURE_SWIPE_END" => {
            let (fingers, rest) = parse_fingers(line, payload)?;
            InputEvent::SwipeEnd {
                fingers,
                cancelled: rest.trim_start().starts_with("cancelled"),
            }
        }
        "POINTER_MOTION" => {
            let (dx, dy) = parse_delta(line, payload)?;
            InputEvent::PointerMotion { dx, dy }
        }
        "POINTER_BUTTON" => parse_button(line, payload)?,
        other => InputEvent::Other {
            kind: other.to_string(),
        },
    };

    Ok(Some(event))
}

/// Split off the first whitespace-delimited token.
fn split_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(end) => Some((&s[..end], &s[end..])),
        None => Some((s, "")),
    }
}

fn is_timestamp(token: &str) -> bool {
    token
        .strip_prefix('+')
        .and_then(|t| t.strip_suffix('s'))
        .is_some_and(|t| t.parse::<f64>().is_ok())
}

/// Drop everything up to and including the `+N.NNNs` token, if there is one.
/// Some libinput versions put a frame counter between the type and the time.
fn skip_timestamp(rest: &str) -> &str {
    let mut cursor = rest;
    for _ in 0..2 {
        match split_token(cursor) {
            Some((token, after)) if is_timestamp(token) => return after,
            Some((_, after)) => cursor = after,
            None => break,
        }
    }
    rest
}

/// Device name column, which is padded with at least two spaces before the seat.
fn device_name(payload: &str) -> &str {
    let payload = payload.trim();
    match payload.find("  ") {
        Some(end) => &payload[..end],
        None => payload,
    }
}

fn parse_fingers<'a>(line: &str, payload: &'a str) -> Result<(u32, &'a str)> {
    let (token, rest) =
        split_token(payload).ok_or_else(|| GestureError::parse(line, "missing finger count"))?;
    let fingers = token
        .parse()
        .map_err(|_| GestureError::parse(line, format!("invalid finger count `{token}`")))?;
    Ok((fingers, rest))
}

/// First `dx/dy` pair of the payload; the parenthesised unaccelerated pair is ignored.
fn parse_delta(line: &str, payload: &str) -> Result<(f64, f64)> {
    let accelerated = payload.split('(').next().unwrap_or(payload);
    let (left, right) = accelerated
        .split_once('/')
        .ok_or_else(|| GestureError::parse(line, "missing dx/dy pair"))?;

    let dx_text = left.split_whitespace().next_back().unwrap_or("");
    let dy_text = right.split_whitespace().next().unwrap_or("");

    let dx = parse_coord(line, dx_text)?;
    let dy = parse_coord(line, dy_text)?;
    Ok((dx, dy))
}

fn parse_coord(line: &str, text: &str) -> Result<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(GestureError::parse(
            line,
            format!("invalid motion delta `{text}`"),
        )),
    }
}

/// `BTN_SIDE (275) pressed, seat count: 1`
fn parse_button(line: &str, payload: &str) -> Result<InputEvent> {
    let open = payload
        .find('(')
        .ok_or_else(|| GestureError::parse(line, "missing button code"))?;
    let close = payload[open..]
        .find(')')
        .map(|i| open + i)
        .ok_or_else(|| GestureError::parse(line, "unterminated button code"))?;

    let code_text = payload[open + 1..close].trim();
    let button = code_text
        .parse()
        .map_err(|_| GestureError::parse(line, format!("invalid button code `{code_text}`")))?;

    let state = payload[close + 1..]
        .split(|c: char| c.is_whitespace() || c == ',')
        .find(|token| !token.is_empty());
    let pressed = match state {
        Some("pressed") => true,
        Some("released") => false,
        _ => return Err(GestureError::parse(line, "missing button state")),
    };

    Ok(InputEvent::PointerButton { button, pressed })
}
