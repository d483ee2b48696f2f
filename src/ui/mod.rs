pub mod can_view;
pub mod checklist_list;
pub mod confirm_popup;
pub mod footer;
pub mod help;
pub mod skin_view;
pub mod theme;
