//! Reusable UI components

pub mod dialogs;
pub mod scrollbar_helper;
pub mod selection_panel;
pub mod status_bar;

// Component architecture
pub mod dialog_component;
pub mod friends_form;
pub mod friends_table;

// Component exports
pub use dialog_component::DialogComponent;
pub use friends_form::FriendsFormComponent;
pub use friends_table::FriendsTableComponent;
pub use selection_panel::SelectionPanel;
pub use status_bar::StatusBar;
