//! Configuration loading and parsing.
//!
//! Parses `pico.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [editor]
//! scroll_padding = 4
//! quit_times = 3
//! message_timeout_secs = 5
//! line_numbers = false
//! ```
//!
//! Every field is optional. A missing file or a parse error yields defaults.
//! The scroll padding is clamped against the current text height in
//! `Config::apply_context`; the raw parsed value is retained so a later resize
//! can re-clamp. Unknown fields are ignored.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf, time::Duration};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "pico.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_scroll_padding")]
    pub scroll_padding: u16,
    #[serde(default = "EditorConfig::default_quit_times")]
    pub quit_times: u8,
    #[serde(default = "EditorConfig::default_message_timeout_secs")]
    pub message_timeout_secs: u64,
    #[serde(default)]
    pub line_numbers: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            scroll_padding: Self::default_scroll_padding(),
            quit_times: Self::default_quit_times(),
            message_timeout_secs: Self::default_message_timeout_secs(),
            line_numbers: false,
        }
    }
}

impl EditorConfig {
    const fn default_scroll_padding() -> u16 {
        4
    }
    const fn default_quit_times() -> u8 {
        3
    }
    const fn default_message_timeout_secs() -> u64 {
        5
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub file: ConfigFile,              // parsed (or default) data
    pub effective_scroll_padding: u16, // clamped to viewport semantics
}

impl Default for Config {
    fn default() -> Self {
        let file = ConfigFile::default();
        Self {
            effective_scroll_padding: file.editor.scroll_padding,
            file,
        }
    }
}

/// Best-effort config path: local working directory first, then the platform
/// config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("pico").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            let effective_scroll_padding = file.editor.scroll_padding;
            Ok(Config {
                file,
                effective_scroll_padding,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Clamp the scroll padding so the cursor band fits in `text_rows`.
    /// Returns the effective (possibly clamped) value.
    pub fn apply_context(&mut self, text_rows: u16) -> u16 {
        let raw = self.file.editor.scroll_padding;
        let max = text_rows.saturating_sub(1) / 2;
        let clamped = raw.min(max);
        if clamped != raw {
            info!(
                target: "config",
                raw,
                clamped,
                max,
                text_rows,
                "scroll_padding_clamped"
            );
        }
        self.effective_scroll_padding = clamped;
        clamped
    }

    /// Recompute the effective padding after a resize. Returns `Some(new)` when it changed.
    pub fn recompute_after_resize(&mut self, text_rows: u16) -> Option<u16> {
        let prev = self.effective_scroll_padding;
        let current = self.apply_context(text_rows);
        if current != prev { Some(current) } else { None }
    }

    pub fn quit_times(&self) -> usize {
        usize::from(self.file.editor.quit_times.max(1))
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_secs(self.file.editor.message_timeout_secs)
    }

    pub fn line_numbers(&self) -> bool {
        self.file.editor.line_numbers
    }
}
