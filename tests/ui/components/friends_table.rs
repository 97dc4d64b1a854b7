use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use friendlist::pagination::Pager;
use friendlist::store::Friend;
use friendlist::ui::components::FriendsTableComponent;
use friendlist::ui::core::{Action, Component, DialogType, Focus};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn table_with(rows: usize, page_size: usize) -> FriendsTableComponent {
    let mut table = FriendsTableComponent::new(Pager::new(page_size).unwrap());
    table.update_data(
        (0..rows)
            .map(|i| Friend::new(format!("Friend {}", i), format!("f{}@x.io", i)))
            .collect(),
    );
    table
}

#[test]
fn test_space_toggles_row_under_cursor() {
    let mut table = table_with(3, 10);
    table.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(table.cursor, 1);
    assert_eq!(table.handle_key_events(key(KeyCode::Char(' '))), Action::ToggleSelect(1));
    assert_eq!(table.handle_key_events(key(KeyCode::Enter)), Action::ToggleSelect(1));
}

#[test]
fn test_empty_table_emits_no_row_actions() {
    let mut table = table_with(0, 10);
    assert_eq!(table.handle_key_events(key(KeyCode::Char(' '))), Action::None);
    assert_eq!(table.handle_key_events(key(KeyCode::Char('d'))), Action::None);
    assert_eq!(table.handle_key_events(key(KeyCode::Char('a'))), Action::AddFriend);
}

#[test]
fn test_cursor_crossing_page_boundary_flips_page() {
    let mut table = table_with(5, 2);
    table.handle_key_events(key(KeyCode::Down));
    table.handle_key_events(key(KeyCode::Down));
    assert_eq!(table.cursor, 2);
    assert_eq!(table.pager.page_index(), 1);

    table.handle_key_events(key(KeyCode::Up));
    assert_eq!(table.pager.page_index(), 0);
}

#[test]
fn test_page_actions_move_cursor_with_page() {
    let mut table = table_with(5, 2);
    assert_eq!(table.handle_key_events(key(KeyCode::Char('n'))), Action::NextPage);

    assert_eq!(table.update(Action::NextPage), Action::None);
    assert_eq!(table.pager.page_index(), 1);
    assert_eq!(table.cursor, 2);
    assert_eq!(table.visible_rows().len(), 2);

    table.update(Action::LastPage);
    assert_eq!(table.pager.page_index(), 2);
    assert_eq!(table.visible_rows().len(), 1);
    assert_eq!(table.cursor, 4);

    table.update(Action::GotoPage(0));
    assert_eq!(table.cursor, 0);
}

#[test]
fn test_update_passes_other_actions_through() {
    let mut table = table_with(2, 10);
    assert_eq!(table.update(Action::AddFriend), Action::AddFriend);
}

#[test]
fn test_page_size_steps_through_options() {
    let mut table = table_with(30, 10);
    table.update(Action::GrowPageSize);
    assert_eq!(table.pager.page_size(), 20);
    table.update(Action::ShrinkPageSize);
    table.update(Action::ShrinkPageSize);
    assert_eq!(table.pager.page_size(), 5);
    // Already the smallest option
    table.update(Action::ShrinkPageSize);
    assert_eq!(table.pager.page_size(), 5);
}

#[test]
fn test_shrinking_data_clamps_page_and_cursor() {
    let mut table = table_with(5, 2);
    table.update(Action::LastPage);
    table.update_data(vec![Friend::new("Only", "only@x.io")]);
    assert_eq!(table.pager.page_index(), 0);
    assert_eq!(table.cursor, 0);
}

#[test]
fn test_navigation_keys() {
    let mut table = table_with(2, 10);
    assert_eq!(table.handle_key_events(key(KeyCode::Char(':'))), Action::ShowDialog(DialogType::GotoPage));
    assert_eq!(table.handle_key_events(key(KeyCode::Tab)), Action::Focus(Focus::Form));
    assert_eq!(table.handle_key_events(key(KeyCode::Char('d'))), Action::RemoveFriend(0));
    assert_eq!(table.handle_key_events(key(KeyCode::Char('R'))), Action::ResetForm);
    assert_eq!(table.handle_key_events(key(KeyCode::Char('s'))), Action::SubmitForm);
}
