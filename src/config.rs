//! Runtime configuration loaded once at startup.
//!
//! Thresholds and button codes vary per device, so they live in a TOML file
//! rather than in the router. Lookup order:
//!
//! 1. the path passed with `--config` (must exist)
//! 2. `<config dir>/gesture-reader/config.toml`, if present
//! 3. built-in defaults
//!
//! Button codes are Linux input event codes as printed by
//! `libinput debug-events`, e.g. `BTN_SIDE (275)`.

use crate::error::{GestureError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_SWIPE_THRESHOLD: f64 = 30.0;
pub const DEFAULT_MOUSE_THRESHOLD: f64 = 120.0;
/// `BTN_SIDE`
pub const DEFAULT_GESTURE_BUTTON: u32 = 275;
/// `BTN_EXTRA`
pub const DEFAULT_CUSTOM_BUTTON: u32 = 276;

const CONFIG_DIR_NAME: &str = "gesture-reader";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Accumulated swipe distance needed before a swipe is classified.
    pub swipe_threshold: f64,
    /// Accumulated pointer distance needed while the gesture button is held.
    pub mouse_threshold: f64,
    /// Button that starts a hold gesture while pressed.
    pub gesture_button: u32,
    /// Buttons reported as `MOUSE_CUSTOM_BTN_<n>_*`, numbered from 1.
    pub custom_buttons: Vec<u32>,
    /// Signal name to xdotool key command. An empty command is an explicit no-op.
    pub keymap: BTreeMap<String, String>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            mouse_threshold: DEFAULT_MOUSE_THRESHOLD,
            gesture_button: DEFAULT_GESTURE_BUTTON,
            custom_buttons: vec![DEFAULT_CUSTOM_BUTTON],
            keymap: default_keymap(),
        }
    }
}

/// Gestures move between workspaces: the window manager binds super+arrow to
/// the opposite direction, so an upward swipe sends super+Down.
fn default_keymap() -> BTreeMap<String, String> {
    let mut keymap = BTreeMap::new();
    for prefix in ["SWIPE_GESTURE", "MOUSE_GESTURE"] {
        for (direction, key) in [
            ("UP", "Down"),
            ("RIGHT", "Left"),
            ("DOWN", "Up"),
            ("LEFT", "Right"),
        ] {
            keymap.insert(
                format!("{prefix}_{direction}_INCOMPLETE"),
                super_chord(key),
            );
        }
    }
    keymap.insert("MOUSE_CUSTOM_BTN_1_PRESSED".to_string(), super_chord("s"));
    keymap.insert("MOUSE_CUSTOM_BTN_1_RELEASED".to_string(), String::new());
    keymap
}

fn super_chord(key: &str) -> String {
    format!("keydown super keydown {key} keyup {key} keyup super")
}

impl GestureConfig {
    /// Resolve and load the configuration, then validate it.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|path| path.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    log::debug!("no config file found, using defaults");
                    Self::default()
                }
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// `<config dir>/gesture-reader/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GestureError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading config from {}", path.display());
        Self::from_toml_str(&text).map_err(|err| match err {
            GestureError::Config { message } => GestureError::ConfigParse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| GestureError::config(err.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("swipe_threshold", self.swipe_threshold),
            ("mouse_threshold", self.mouse_threshold),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GestureError::config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        if self.custom_buttons.contains(&self.gesture_button) {
            return Err(GestureError::config(format!(
                "button {} cannot be both the gesture button and a custom button",
                self.gesture_button
            )));
        }

        for (i, code) in self.custom_buttons.iter().enumerate() {
            if self.custom_buttons[..i].contains(code) {
                return Err(GestureError::config(format!(
                    "custom button {code} is listed more than once"
                )));
            }
        }

        Ok(())
    }
}
