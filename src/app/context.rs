use crate::ports::{ClipboardWriter, MemoGenerator};

/// Application context holding dependencies for command execution.
pub struct AppContext<G: MemoGenerator, C: ClipboardWriter> {
    generator: G,
    clipboard: C,
}

impl<G: MemoGenerator, C: ClipboardWriter> AppContext<G, C> {
    /// Create a new application context.
    pub fn new(generator: G, clipboard: C) -> Self {
        Self { generator, clipboard }
    }

    /// Get a reference to the memo generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Get a mutable reference to the clipboard writer.
    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }
}
