//! Interactive form wizard.
//!
//! Stands in for the browser form: collects a `MemoRequest` field by field,
//! validating as it goes, so the result always passes the submit gate.

use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::domain::request::{validate_main_asset_id, validate_sub_asset_id};
use crate::domain::{ASSET_TYPE_CHOICES, AppError, AssetItem, MAX_ITEMS, MemoRequest, RequestType};

/// Run the full form wizard.
pub fn collect_request() -> Result<MemoRequest, AppError> {
    println!("กรอกข้อมูลทรัพย์สิน");
    println!();

    let requester_name = optional_text("ชื่อผู้ขอ / ผู้ถือครอง")?;
    let position = optional_text("ตำแหน่ง")?;
    let department = optional_text("หน่วยงาน / แผนก")?;
    let request_type = prompt_request_type()?;

    let attachment_mode = Confirm::new()
        .with_prompt(format!("รายการทรัพย์สินเกิน {MAX_ITEMS} รายการ (ใช้เอกสารแนบ)?"))
        .default(false)
        .interact()
        .map_err(|e| AppError::config_error(format!("Attachment mode selection failed: {e}")))?;

    let items = if attachment_mode {
        println!(
            "ระบบจะระบุในหนังสือว่า \"รายละเอียดปรากฏตามสิ่งที่ส่งมาด้วย\" โปรดแนบรายการทรัพย์สินแยกต่างหาก"
        );
        Vec::new()
    } else {
        collect_items()?
    };

    let reason = prompt_reason(request_type)?;
    let additional_note = optional_field("หมายเหตุเพิ่มเติม (เว้นว่างได้)")?;

    println!("ผู้ลงนาม (เว้นว่างเพื่อเว้นบรรทัดไว้เติมเอง)");
    let head_of_department = optional_field("หัวหน้าแผนก (ผู้ตรวจสอบ)")?;
    let head_of_unit = optional_field("หัวหน้าหน่วยงาน (ผู้อนุมัติ)")?;

    Ok(MemoRequest {
        requester_name,
        department,
        position,
        items,
        attachment_mode,
        request_type,
        reason,
        additional_note,
        head_of_department,
        head_of_unit,
    })
}

fn prompt_request_type() -> Result<RequestType, AppError> {
    let labels: Vec<&str> = RequestType::ALL.iter().map(|t| t.label()).collect();

    let selection = Select::new()
        .with_prompt("ประเภทคำร้อง")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| AppError::config_error(format!("Request type selection failed: {e}")))?;

    Ok(RequestType::ALL[selection])
}

/// Collect 1 to `MAX_ITEMS` asset line items.
fn collect_items() -> Result<Vec<AssetItem>, AppError> {
    let mut items = Vec::new();

    loop {
        println!("รายการที่ {}/{MAX_ITEMS}", items.len() + 1);
        items.push(prompt_item()?);

        if items.len() == MAX_ITEMS {
            println!("ครบ {MAX_ITEMS} รายการแล้ว หากมีมากกว่านี้โปรดใช้เอกสารแนบ");
            break;
        }

        let more = Confirm::new()
            .with_prompt("เพิ่มรายการอีกหรือไม่?")
            .default(false)
            .interact()
            .map_err(|e| AppError::config_error(format!("Confirmation failed: {e}")))?;
        if !more {
            break;
        }
    }

    Ok(items)
}

fn prompt_item() -> Result<AssetItem, AppError> {
    // First entry leaves the category unset; the prompt renders it as "ไม่ระบุ".
    let mut type_choices = vec!["-- ไม่ระบุ --"];
    type_choices.extend(ASSET_TYPE_CHOICES);

    let type_index = Select::new()
        .with_prompt("ประเภททรัพย์สิน")
        .items(&type_choices)
        .default(0)
        .interact()
        .map_err(|e| AppError::config_error(format!("Asset type selection failed: {e}")))?;
    let asset_type =
        if type_index == 0 { String::new() } else { type_choices[type_index].to_string() };

    let main_asset_id: String = Input::new()
        .with_prompt("รหัสหลัก (9-12 หลัก)")
        .validate_with(|input: &String| validate_main_asset_id(input))
        .interact_text()
        .map_err(|e| AppError::config_error(format!("Failed to read main asset id: {e}")))?;

    let sub_asset_id: String = Input::new()
        .with_prompt("รหัสย่อย (4 หลัก)")
        .validate_with(|input: &String| validate_sub_asset_id(input))
        .interact_text()
        .map_err(|e| AppError::config_error(format!("Failed to read sub asset id: {e}")))?;

    let asset_name: String = Input::new()
        .with_prompt("ชื่อทรัพย์สิน เช่น Dell Latitude 7420")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err(AppError::validation("Asset name cannot be empty"))
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(|e| AppError::config_error(format!("Failed to read asset name: {e}")))?;

    Ok(AssetItem { asset_type, main_asset_id, sub_asset_id, asset_name })
}

/// Reason intake: canned suggestions first, free text appended. The combined
/// result must be non-empty (the submit gate).
fn prompt_reason(request_type: RequestType) -> Result<String, AppError> {
    let suggestions = request_type.reason_suggestions();

    let picked = MultiSelect::new()
        .with_prompt(format!("{} — เลือกข้อความสำเร็จรูป (เว้นว่างเพื่อพิมพ์เอง)", request_type.reason_label()))
        .items(suggestions)
        .interact()
        .map_err(|e| AppError::config_error(format!("Reason selection failed: {e}")))?;

    let mut lines: Vec<String> = picked.iter().map(|&i| suggestions[i].to_string()).collect();
    let has_suggestion = !lines.is_empty();

    let custom: String = Input::new()
        .with_prompt("รายละเอียดเพิ่มเติม")
        .allow_empty(has_suggestion)
        .interact_text()
        .map_err(|e| AppError::config_error(format!("Failed to read reason: {e}")))?;

    if !custom.trim().is_empty() {
        lines.push(custom.trim().to_string());
    }

    if lines.is_empty() {
        return Err(AppError::validation("Reason cannot be empty"));
    }

    Ok(lines.join("\n"))
}

fn optional_text(prompt: &str) -> Result<String, AppError> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| AppError::config_error(format!("Failed to read {prompt}: {e}")))?;
    Ok(value.trim().to_string())
}

fn optional_field(prompt: &str) -> Result<Option<String>, AppError> {
    let value = optional_text(prompt)?;
    Ok(if value.is_empty() { None } else { Some(value) })
}
