pub mod catalog;
pub mod checklist;
