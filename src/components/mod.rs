//! UI components: chrome, pure content renderers, and the two flows
//! (lead submission, admin triage) that run their own requests.

pub mod admin_panel;
pub mod document_list;
pub mod faq_list;
pub mod lead_form;
pub mod project_grid;
pub mod tab_bar;
pub mod user_line;
