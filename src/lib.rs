//! sarabun: draft Thai asset-management memos (บันทึกข้อความ) with a generative AI assistant.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use adapters::{ArboardClipboard, HttpGeminiClient};
use app::{
    AppContext,
    commands::{checklist, draft},
};
use domain::{GeminiConfig, MOCK_ENV};
use ports::MockMemoGenerator;

pub use app::commands::draft::{
    CONNECTION_ERROR_FALLBACK, DraftOptions, DraftOutcome, EMPTY_RESPONSE_FALLBACK,
};
pub use domain::{AppError, AssetItem, MemoRequest, RequestType, WordDocument};

/// Draft a memo: collect the request, generate, and deliver the outputs.
///
/// With `SARABUN_MOCK` set (or `--show-prompt`, which never calls the
/// service), the mock generator is wired in and no API key is required.
pub fn draft(options: DraftOptions) -> Result<DraftOutcome, AppError> {
    if mock_mode() || options.show_prompt {
        let mut ctx = AppContext::new(MockMemoGenerator, ArboardClipboard::new());
        return draft::execute(&mut ctx, options);
    }

    let config = GeminiConfig::from_env();
    let generator = HttpGeminiClient::from_env(&config)?;
    let mut ctx = AppContext::new(generator, ArboardClipboard::new());
    draft::execute(&mut ctx, options)
}

/// Show the supporting-document checklist for a request type.
pub fn checklist(request_type: RequestType) {
    checklist::execute(request_type);
}

fn mock_mode() -> bool {
    std::env::var(MOCK_ENV).is_ok_and(|value| value == "1" || value.eq_ignore_ascii_case("true"))
}
