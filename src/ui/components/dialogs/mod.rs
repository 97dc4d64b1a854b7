//! Dialog rendering helpers used by the dialog component

pub mod common;
pub mod page_dialogs;
pub mod system_dialogs;
