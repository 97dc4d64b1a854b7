use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use friendlist::store::{Friend, FriendField};
use friendlist::ui::components::FriendsFormComponent;
use friendlist::ui::core::{Action, Component, Focus};
use friendlist::validation::validate_all;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn form() -> FriendsFormComponent {
    let mut form = FriendsFormComponent::new();
    form.update_data(vec![
        Friend::new("Klaus", "klaus@formik.com"),
        Friend::new("Hans", "hans@formik.com"),
    ]);
    form
}

#[test]
fn test_typing_edits_focused_field() {
    let mut form = form();
    assert_eq!(
        form.handle_key_events(key(KeyCode::Char('i'))),
        Action::UpdateField {
            index: 0,
            field: FriendField::Name,
            value: "Klausi".to_string(),
        }
    );
}

#[test]
fn test_backspace_edits_and_ignores_empty_field() {
    let mut form = form();
    assert_eq!(
        form.handle_key_events(key(KeyCode::Backspace)),
        Action::UpdateField {
            index: 0,
            field: FriendField::Name,
            value: "Klau".to_string(),
        }
    );

    form.update_data(vec![Friend::blank()]);
    assert_eq!(form.handle_key_events(key(KeyCode::Backspace)), Action::None);
}

#[test]
fn test_field_navigation_walks_rows() {
    let mut form = form();
    form.handle_key_events(key(KeyCode::Tab));
    assert_eq!((form.focused_row, form.focused_field), (0, FriendField::Email));
    form.handle_key_events(key(KeyCode::Down));
    assert_eq!((form.focused_row, form.focused_field), (1, FriendField::Name));
    form.handle_key_events(key(KeyCode::Enter));
    form.handle_key_events(key(KeyCode::Enter));
    // Stays on the last field
    assert_eq!((form.focused_row, form.focused_field), (1, FriendField::Email));

    form.handle_key_events(key(KeyCode::BackTab));
    form.handle_key_events(key(KeyCode::Up));
    assert_eq!((form.focused_row, form.focused_field), (0, FriendField::Email));
}

#[test]
fn test_control_shortcuts() {
    let mut form = form();
    form.focus_field(1, FriendField::Email);
    assert_eq!(form.handle_key_events(ctrl('n')), Action::AddFriend);
    assert_eq!(form.handle_key_events(ctrl('d')), Action::RemoveFriend(1));
    assert_eq!(form.handle_key_events(ctrl('r')), Action::ResetForm);
    assert_eq!(form.handle_key_events(ctrl('s')), Action::SubmitForm);
    assert_eq!(form.handle_key_events(key(KeyCode::Esc)), Action::Focus(Focus::Table));
}

#[test]
fn test_focus_first_error() {
    let mut form = form();
    form.update_data(vec![
        Friend::new("Klaus", "klaus@formik.com"),
        Friend::new("Hans", "hans@formik.com"),
        Friend::new("Ana", "nope"),
    ]);
    form.set_errors(validate_all(&form.friends));
    form.focus_first_error();
    assert_eq!((form.focused_row, form.focused_field), (2, FriendField::Email));

    form.remove_errors_at(2);
    assert_eq!(form.errors.len(), 2);
}
