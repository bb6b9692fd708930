pub mod checklist;
pub mod config;
pub mod document;
pub mod error;
pub mod prompt;
pub mod request;

pub use checklist::{ChecklistItem, supporting_documents};
pub use config::{API_KEY_ENV, GeminiConfig, MOCK_ENV, MODEL_ENV};
pub use document::{WordDocument, print_page};
pub use error::AppError;
pub use request::{ASSET_TYPE_CHOICES, AssetItem, MAX_ITEMS, MemoRequest, RequestType};
