//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Default seed
pub const SEED_FIRST_NAME: &str = "Klaus";
pub const SEED_FIRST_EMAIL: &str = "klaus@formik.com";
pub const SEED_SECOND_NAME: &str = "Hans";
pub const SEED_SECOND_EMAIL: &str = "hans@formik.com";

// Table headers
pub const HEADER_GROUP_NAME: &str = "Name";
pub const HEADER_GROUP_INFO: &str = "Info";
pub const HEADER_FIRST_NAME: &str = "First Name";
pub const HEADER_EMAIL: &str = "Email";
pub const CHECKBOX_CHECKED: &str = "[x]";
pub const CHECKBOX_UNCHECKED: &str = "[ ]";

// Form placeholders
pub const PLACEHOLDER_NAME: &str = "Jane Doe";
pub const PLACEHOLDER_EMAIL: &str = "jane@acme.com";

// Titles
pub const TITLE_TABLE: &str = " 👥 Friends ";
pub const TITLE_FORM: &str = " 📝 Form ";
pub const TITLE_SELECTION: &str = " Selection ";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc' or 'L' to close";
pub const DIALOG_TITLE_HELP: &str = "❓ Help - Press 'Esc' or '?' to close";
pub const DIALOG_TITLE_GOTO_PAGE: &str = "Go to page";
pub const DIALOG_TITLE_SUBMITTED: &str = "✅ Submitted";
pub const DIALOG_TITLE_ERROR: &str = "❌ Error";

// Success Messages
pub const SUCCESS_FRIEND_ADDED: &str = "✅ Friend added";
pub const SUCCESS_FRIEND_REMOVED: &str = "✅ Friend removed";
pub const SUCCESS_FORM_RESET: &str = "✅ Form reset";

// Error Messages
pub const ERROR_EMAIL_REQUIRED: &str = "Required";
pub const ERROR_EMAIL_INVALID: &str = "Invalid email address";
pub const ERROR_FORM_INVALID: &str = "❌ Fix the highlighted fields before submitting";
pub const ERROR_INVALID_PAGE_NUMBER: &str = "❌ Invalid page number";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const STATUS_TABLE_SHORTCUTS: &str =
    "Space: select • n/p: page • a: add • d: remove • R: reset • s: submit • Tab: form • ?: help • q: quit";
pub const STATUS_FORM_SHORTCUTS: &str =
    "↑↓: field • Ctrl+N: add • Ctrl+D: remove • Ctrl+R: reset • Ctrl+S: submit • Esc: table";

// Pagination
/// Default rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Largest accepted page size
pub const MAX_PAGE_SIZE: usize = 100;
/// Page sizes cycled with '+' and '-'
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 20, 30, 50];

// UI Layout Constants
/// Minimum table pane width as a percentage of the screen
pub const TABLE_MIN_WIDTH_PERCENT: u16 = 20;
/// Maximum table pane width as a percentage of the screen
pub const TABLE_MAX_WIDTH_PERCENT: u16 = 80;
/// Default table pane width as a percentage of the screen
pub const TABLE_DEFAULT_WIDTH_PERCENT: u16 = 50;
/// Lines taken by one friend in the form (borders, name, email, error)
pub const FORM_ROW_HEIGHT: u16 = 5;
