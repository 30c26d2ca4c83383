//! Clipboard functionality for copying calculator results.

use anyhow::Context;
use arboard::Clipboard;

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = Clipboard::new().context("failed to access clipboard")?;

    clipboard
        .set_text(text.to_string())
        .context("failed to copy to clipboard")
}
