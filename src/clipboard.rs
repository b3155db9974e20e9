use clipboard::{ClipboardContext, ClipboardProvider};

use crate::error::{Result, WidgetError};

/// Destination for copied passwords.
///
/// Implementations are called off the UI thread, hence `Send + Sync`.
pub trait ClipboardWriter: Send + Sync {
    fn write(&self, text: &str) -> Result<()>;
}

/// The operating system clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write(&self, text: &str) -> Result<()> {
        let mut ctx: ClipboardContext = ClipboardProvider::new()
            .map_err(|e| WidgetError::ClipboardWriteFailed(format!("Clipboard init error: {}", e)))?;

        ctx.set_contents(text.to_string())
            .map_err(|e| WidgetError::ClipboardWriteFailed(format!("Clipboard set error: {}", e)))
    }
}
