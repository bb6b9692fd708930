pub mod clipboard_writer;
pub mod memo_generator;

pub use clipboard_writer::ClipboardWriter;
pub use memo_generator::{MemoGenerator, MockMemoGenerator};
