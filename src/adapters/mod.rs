pub mod clipboard_arboard;
pub mod export_filesystem;
pub mod gemini_client_http;

pub use clipboard_arboard::ArboardClipboard;
pub use export_filesystem::{open_print_preview, save_document, write_print_page};
pub use gemini_client_http::HttpGeminiClient;
