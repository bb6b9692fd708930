use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Arboard-based clipboard implementation.
///
/// Connection to the system clipboard is deferred to the first write, so
/// sessions that never copy (e.g. `--out` only, headless runs) do not require
/// a clipboard to exist.
#[derive(Default)]
pub struct ArboardClipboard {
    clipboard: Option<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| AppError::Clipboard(format!("{}", e)))?;
            self.clipboard = Some(clipboard);
        }

        self.clipboard
            .as_mut()
            .ok_or_else(|| AppError::Clipboard("clipboard unavailable".to_string()))?
            .set_text(text)
            .map_err(|e| AppError::Clipboard(format!("{}", e)))
    }
}
