//! Memo output documents.
//!
//! `WordDocument` wraps the generated memo text in the minimal HTML shell
//! that legacy word processors accept as a `.doc` file. Line breaks in the
//! memo are taken as paragraph boundaries; markup the model may have emitted
//! (e.g. a table) is passed through uninterpreted.

/// Fixed Thai filename label for exported memos.
const FILENAME_LABEL: &str = "บันทึกข้อความ";

/// A legacy word-processor-compatible document ready to save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDocument {
    /// Derived output filename, e.g. `บันทึกข้อความ_สมชาย.doc`.
    pub filename: String,
    /// BOM-prefixed HTML payload.
    pub content: String,
}

impl WordDocument {
    /// Compose the export document from the memo text and requester name.
    pub fn compose(memo_text: &str, requester_name: &str) -> Self {
        let paragraphs: String = memo_text
            .split('\n')
            .map(|line| {
                if line.trim().is_empty() {
                    // Preserve blank-line spacing in renderers that collapse
                    // empty paragraphs.
                    "<p>&nbsp;</p>".to_string()
                } else {
                    format!("<p>{line}</p>")
                }
            })
            .collect();

        let html = format!(
            "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
             xmlns:w='urn:schemas-microsoft-com:office:word' \
             xmlns='http://www.w3.org/TR/REC-html40'>\
             <head><meta charset='utf-8'><title>{FILENAME_LABEL}</title>\
             <style>\
             body {{ font-family: 'TH SarabunPSK', 'Sarabun', sans-serif; font-size: 16pt; }}\
             table {{ border-collapse: collapse; }}\
             table, th, td {{ border: 1px solid windowtext; padding: 2pt 5pt; }}\
             </style></head><body>{paragraphs}</body></html>"
        );

        // BOM keeps Thai text readable in legacy consumers.
        Self { filename: derive_filename(requester_name), content: format!("\u{FEFF}{html}") }
    }

    /// MIME type for the platform save mechanism.
    pub fn content_type() -> &'static str {
        "application/msword"
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

fn derive_filename(requester_name: &str) -> String {
    let name = requester_name.trim();
    let name = if name.is_empty() { "draft" } else { name };
    format!("{FILENAME_LABEL}_{name}.doc")
}

/// Render the memo as a print-ready page that invokes the platform print
/// action when opened.
pub fn print_page(memo_text: &str) -> String {
    format!(
        "<html>\
         <head>\
         <title>{FILENAME_LABEL}</title>\
         <meta charset=\"utf-8\">\
         <link href=\"https://fonts.googleapis.com/css2?family=Sarabun:wght@300;400;700&display=swap\" rel=\"stylesheet\">\
         <style>\
         body {{ font-family: 'Sarabun', sans-serif; padding: 50px; line-height: 1.6; max-width: 800px; margin: 0 auto; }}\
         .content {{ white-space: pre-wrap; }}\
         @media print {{ body {{ padding: 0; }} }}\
         </style>\
         </head>\
         <body>\
         <div class=\"content\">{memo_text}</div>\
         <script>window.print();</script>\
         </body>\
         </html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_becomes_nbsp_paragraph() {
        let document = WordDocument::compose("A\n\nB", "สมชาย");

        assert_eq!(document.content.matches("<p>").count(), 3);
        assert!(document.content.contains("<p>A</p><p>&nbsp;</p><p>B</p>"));
    }

    #[test]
    fn whitespace_only_line_becomes_nbsp_paragraph() {
        let document = WordDocument::compose("A\n   \nB", "สมชาย");
        assert!(document.content.contains("<p>A</p><p>&nbsp;</p><p>B</p>"));
    }

    #[test]
    fn filename_derives_from_requester_name() {
        let document = WordDocument::compose("เรียน ผู้จัดการ", "สมชาย");
        assert_eq!(document.filename, "บันทึกข้อความ_สมชาย.doc");
    }

    #[test]
    fn empty_requester_name_falls_back_to_draft() {
        assert_eq!(WordDocument::compose("x", "").filename, "บันทึกข้อความ_draft.doc");
        assert_eq!(WordDocument::compose("x", "   ").filename, "บันทึกข้อความ_draft.doc");
    }

    #[test]
    fn content_starts_with_byte_order_marker() {
        let document = WordDocument::compose("เรียน", "สมชาย");
        assert!(document.content.starts_with('\u{FEFF}'));
        assert_eq!(document.as_bytes()[..3], [0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn export_mime_type_is_legacy_word() {
        assert_eq!(WordDocument::content_type(), "application/msword");
    }

    #[test]
    fn office_namespaces_present() {
        let document = WordDocument::compose("x", "");
        assert!(document.content.contains("urn:schemas-microsoft-com:office:word"));
        assert!(document.content.contains("urn:schemas-microsoft-com:office:office"));
    }

    #[test]
    fn model_markup_passes_through_uninterpreted() {
        let document = WordDocument::compose("<table><tr><td>110002345-0001</td></tr></table>", "");
        assert!(document.content.contains("<p><table><tr><td>110002345-0001</td></tr></table></p>"));
    }

    #[test]
    fn print_page_preserves_line_breaks_and_triggers_print() {
        let page = print_page("บรรทัดแรก\nบรรทัดสอง");
        assert!(page.contains("white-space: pre-wrap"));
        assert!(page.contains("บรรทัดแรก\nบรรทัดสอง"));
        assert!(page.contains("window.print();"));
    }
}
