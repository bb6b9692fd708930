use crate::domain::AppError;

/// Port for copying generated memo text to the system clipboard.
pub trait ClipboardWriter {
    /// Place `text` on the clipboard, replacing any previous contents.
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;
}
