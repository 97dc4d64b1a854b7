#[path = "dialogs/system_dialogs.rs"]
mod system_dialogs;
