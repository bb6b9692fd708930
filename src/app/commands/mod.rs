pub mod checklist;
pub mod draft;
