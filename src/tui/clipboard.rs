//! Clipboard helper for copying alert payloads
//!
//! Uses `arboard` for cross-platform support. The clipboard handle is created
//! per call so nothing is held between copies.

use anyhow::{Context, Result};
use arboard::Clipboard;
use serde_json::Value;

/// Copy `value` as pretty-printed JSON; returns the number of bytes copied
///
/// Fails without a display server (headless Linux) or on permission errors.
pub fn copy_json(value: &Value) -> Result<usize> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize alerts")?;
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text.as_str())
        .context("Failed to set clipboard text")?;
    Ok(text.len())
}
