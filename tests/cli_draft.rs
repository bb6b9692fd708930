mod common;

use std::fs;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn draft_from_request_file_prints_mock_memo() {
    let ctx = TestContext::new();
    let request = ctx.disposal_request();

    ctx.cli()
        .args(["draft", "--from"])
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("ร่างบันทึกข้อความ (Draft)"))
        .stdout(predicate::str::contains("บันทึกข้อความ"))
        .stderr(predicate::str::contains("=== MOCK MODE ==="));
}

#[test]
fn draft_exports_word_document_with_byte_order_marker() {
    let ctx = TestContext::new();
    let request = ctx.disposal_request();
    let out_dir = ctx.work_dir().join("exports");
    fs::create_dir_all(&out_dir).unwrap();

    ctx.cli()
        .args(["draft", "--from"])
        .arg(&request)
        .arg("--out")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ บันทึกไฟล์ Word แล้ว"));

    let exported = out_dir.join("บันทึกข้อความ_สมชาย ใจดี.doc");
    assert!(exported.exists(), "exported .doc should exist at {}", exported.display());

    let bytes = fs::read(&exported).unwrap();
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF], "export must start with a UTF-8 BOM");
    let content = String::from_utf8(bytes).unwrap();
    assert!(content.contains("urn:schemas-microsoft-com:office:word"));
    assert!(content.contains("<p>&nbsp;</p>"));
}

#[test]
fn show_prompt_compiles_without_calling_the_service() {
    let ctx = TestContext::new();
    let request = ctx.disposal_request();

    ctx.cli()
        .args(["draft", "--show-prompt", "--from"])
        .arg(&request)
        .env_remove("SARABUN_MOCK")
        .assert()
        .success()
        .stdout(predicate::str::contains("เรื่อง: ขออนุมัติจำหน่ายทรัพย์สินออกจากบัญชี"))
        .stdout(predicate::str::contains("1. Dell Latitude 7420"))
        .stdout(predicate::str::contains("รหัสทรัพย์สิน: 110002345-0001"))
        .stderr(predicate::str::contains("MOCK MODE").not());
}

#[test]
fn show_prompt_renders_attachment_sentence() {
    let ctx = TestContext::new();
    let request = ctx.write_request(
        "attachment.toml",
        r#"
requester_name = "สมชาย"
attachment_mode = true
reason = "ปรับปรุงข้อมูลศูนย์ต้นทุน"
"#,
    );

    ctx.cli()
        .args(["draft", "--show-prompt", "--from"])
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("รายละเอียดปรากฏตามสิ่งที่ส่งมาด้วย (เอกสารแนบ)"));
}

#[test]
fn draft_rejects_request_without_items_or_attachment() {
    let ctx = TestContext::new();
    let request = ctx.write_request("empty.toml", "reason = \"ชำรุด\"\n");

    ctx.cli()
        .args(["draft", "--from"])
        .arg(&request)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("attachment_mode"));
}

#[test]
fn draft_rejects_request_without_reason() {
    let ctx = TestContext::new();
    let request = ctx.write_request("no_reason.toml", "attachment_mode = true\n");

    ctx.cli()
        .args(["draft", "--from"])
        .arg(&request)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Reason cannot be empty"));
}

#[test]
fn draft_rejects_malformed_asset_id() {
    let ctx = TestContext::new();
    let request = ctx.write_request(
        "bad_id.toml",
        r#"
reason = "ชำรุด"

[[items]]
main_asset_id = "12AB"
sub_asset_id = "0001"
asset_name = "Printer"
"#,
    );

    ctx.cli()
        .args(["draft", "--from"])
        .arg(&request)
        .assert()
        .failure()
        .stderr(predicate::str::contains("digits only"));
}

#[test]
fn draft_reports_missing_request_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["draft", "--from", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Request file not found"));
}

#[test]
fn draft_without_terminal_requires_request_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("draft")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--from"));
}
