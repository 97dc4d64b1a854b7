#[path = "components/dialog_component.rs"]
mod dialog_component;

#[path = "components/dialogs.rs"]
mod dialogs;

#[path = "components/friends_form.rs"]
mod friends_form;

#[path = "components/friends_table.rs"]
mod friends_table;
