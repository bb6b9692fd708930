//! Draft command: collect the request, compile the prompt, generate the memo,
//! and deliver the outputs.
//!
//! The whole flow is a linear one-shot pipeline per submission; the user
//! restarts from the top by running the command again.

use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use dialoguer::Select;

use crate::adapters::{open_print_preview, save_document};
use crate::app::AppContext;
use crate::app::cli::form;
use crate::domain::{AppError, MemoRequest, WordDocument, prompt};
use crate::ports::{ClipboardWriter, MemoGenerator};

/// Fallback memo text when the service succeeds but returns nothing.
pub const EMPTY_RESPONSE_FALLBACK: &str =
    "ขออภัย ไม่สามารถร่างหนังสือได้ในขณะนี้ กรุณาลองใหม่อีกครั้ง";

/// Fallback memo text when the service call fails.
pub const CONNECTION_ERROR_FALLBACK: &str =
    "เกิดข้อผิดพลาดในการเชื่อมต่อกับ AI กรุณาตรวจสอบ API Key หรือลองใหม่อีกครั้ง";

/// Options for the draft command.
#[derive(Debug, Clone, Default)]
pub struct DraftOptions {
    /// Load the request from a TOML file instead of the interactive form.
    pub from: Option<PathBuf>,
    /// Write the Word export here (file or directory) without the action menu.
    pub out: Option<PathBuf>,
    /// Copy the memo to the clipboard without the action menu.
    pub copy: bool,
    /// Open the print preview without the action menu.
    pub print_preview: bool,
    /// Print the compiled prompt and exit without calling the service.
    pub show_prompt: bool,
}

/// Result of a draft run.
#[derive(Debug, Clone)]
pub struct DraftOutcome {
    /// Generated memo text, or a fallback sentence.
    pub memo: String,
    /// Path the Word export was written to, when requested.
    pub exported_to: Option<PathBuf>,
}

/// Execute the draft command.
pub fn execute<G, C>(
    ctx: &mut AppContext<G, C>,
    options: DraftOptions,
) -> Result<DraftOutcome, AppError>
where
    G: MemoGenerator,
    C: ClipboardWriter,
{
    let request = match &options.from {
        Some(path) => load_request(path)?,
        None => {
            if !std::io::stdin().is_terminal() {
                return Err(AppError::config_error(
                    "No terminal available for the interactive form; pass --from <request.toml>",
                ));
            }
            let request = form::collect_request()?;
            print_checklist_reminder(&request);
            request
        }
    };

    let compiled = prompt::compile(&request);
    if options.show_prompt {
        println!("{compiled}");
        return Ok(DraftOutcome { memo: String::new(), exported_to: None });
    }

    println!("AI กำลังเรียบเรียงข้อความและจัดรูปแบบ...");
    let memo = generate_or_fallback(ctx.generator(), &compiled);

    println!();
    println!("ร่างบันทึกข้อความ (Draft)");
    println!("----------------------------------------");
    println!("{memo}");
    println!("----------------------------------------");

    let mut exported_to = None;
    let requested_action = options.out.is_some() || options.copy || options.print_preview;

    if let Some(target) = &options.out {
        exported_to = Some(export_word(&memo, &request, target)?);
    }
    if options.copy {
        copy_to_clipboard(ctx, &memo)?;
    }
    if options.print_preview {
        print_preview(&memo)?;
    }

    if !requested_action && std::io::stdin().is_terminal() {
        exported_to = action_menu(ctx, &memo, &request)?;
    }

    Ok(DraftOutcome { memo, exported_to })
}

/// Generation boundary: always yields memo text, never an error.
///
/// Empty or whitespace-only output takes the "unable to draft" sentence; any
/// transport or service failure is logged to stderr and takes the connection
/// error sentence.
pub fn generate_or_fallback<G: MemoGenerator>(generator: &G, compiled_prompt: &str) -> String {
    match generator.generate(compiled_prompt) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => EMPTY_RESPONSE_FALLBACK.to_string(),
        Err(e) => {
            eprintln!("Error generating memo: {e}");
            CONNECTION_ERROR_FALLBACK.to_string()
        }
    }
}

fn load_request(path: &Path) -> Result<MemoRequest, AppError> {
    if !path.exists() {
        return Err(AppError::RequestFileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    let request = MemoRequest::from_toml_str(&content)?;
    request.validate()?;
    Ok(request)
}

fn print_checklist_reminder(request: &MemoRequest) {
    println!();
    print!("{}", super::checklist::render(request.request_type));
    println!();
}

fn export_word(memo: &str, request: &MemoRequest, target: &Path) -> Result<PathBuf, AppError> {
    let document = WordDocument::compose(memo, &request.requester_name);
    let path = save_document(&document, target)?;
    println!("✅ บันทึกไฟล์ Word แล้ว: {}", path.display());
    Ok(path)
}

fn copy_to_clipboard<G, C>(ctx: &mut AppContext<G, C>, memo: &str) -> Result<(), AppError>
where
    G: MemoGenerator,
    C: ClipboardWriter,
{
    ctx.clipboard_mut().write_text(memo)?;
    println!("✅ คัดลอกข้อความแล้ว");
    Ok(())
}

fn print_preview(memo: &str) -> Result<(), AppError> {
    let path = open_print_preview(memo)?;
    println!("✅ เปิดหน้าพิมพ์แล้ว: {}", path.display());
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputAction {
    Copy,
    ExportWord,
    PrintPreview,
    Done,
}

impl OutputAction {
    const ALL: [OutputAction; 4] = [
        OutputAction::Copy,
        OutputAction::ExportWord,
        OutputAction::PrintPreview,
        OutputAction::Done,
    ];

    fn label(self) -> &'static str {
        match self {
            OutputAction::Copy => "คัดลอก (Copy)",
            OutputAction::ExportWord => "บันทึกไฟล์ Word (.doc)",
            OutputAction::PrintPreview => "พิมพ์ / PDF (Print)",
            OutputAction::Done => "เสร็จสิ้น",
        }
    }
}

/// Post-generation action menu; loops until the user is done.
fn action_menu<G, C>(
    ctx: &mut AppContext<G, C>,
    memo: &str,
    request: &MemoRequest,
) -> Result<Option<PathBuf>, AppError>
where
    G: MemoGenerator,
    C: ClipboardWriter,
{
    let labels: Vec<&str> = OutputAction::ALL.iter().map(|action| action.label()).collect();
    let mut exported_to = None;

    loop {
        let selection = Select::new()
            .with_prompt("ต้องการทำอะไรกับร่างนี้")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| AppError::config_error(format!("Action selection failed: {e}")))?;

        match OutputAction::ALL[selection] {
            OutputAction::Copy => copy_to_clipboard(ctx, memo)?,
            OutputAction::ExportWord => {
                exported_to = Some(export_word(memo, request, Path::new("."))?);
            }
            OutputAction::PrintPreview => print_preview(memo)?,
            OutputAction::Done => break,
        }
    }

    Ok(exported_to)
}
