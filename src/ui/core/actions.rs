use crate::store::FriendField;

/// Which pane receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    Form,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Store operations
    ToggleSelect(usize),
    AddFriend,
    RemoveFriend(usize),
    UpdateField {
        index: usize,
        field: FriendField,
        value: String,
    },
    ResetForm,
    SubmitForm,

    // Pagination
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    GotoPage(usize), // 0-based
    GrowPageSize,
    ShrinkPageSize,

    // Focus
    Focus(Focus),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    DialogScrollUp,
    DialogScrollDown,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    GotoPage,
    Submitted(String),
    Error(String),
    Help,
    Logs,
}
