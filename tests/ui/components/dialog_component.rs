use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use friendlist::ui::components::DialogComponent;
use friendlist::ui::core::{Action, Component, DialogType};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_dialog_component_creation() {
    let dialog = DialogComponent::new();
    assert!(!dialog.is_visible());
    assert!(dialog.input_buffer.is_empty());
}

#[test]
fn test_show_and_hide() {
    let mut dialog = DialogComponent::new();
    assert_eq!(dialog.update(Action::ShowDialog(DialogType::Help)), Action::None);
    assert!(dialog.is_visible());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::HideDialog);
    dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());
}

#[test]
fn test_goto_page_accepts_digits_only() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::GotoPage);
    for c in ['1', 'x', '2'] {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
    assert_eq!(dialog.input_buffer, "12");
    dialog.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::GotoPage(0));
    assert!(!dialog.is_visible());
}

#[test]
fn test_goto_page_empty_means_first_page() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::GotoPage);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::GotoPage(0));
    assert!(!dialog.is_visible());
}

#[test]
fn test_goto_page_rejects_zero() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::GotoPage);
    dialog.handle_key_events(key(KeyCode::Char('0')));
    assert!(matches!(
        dialog.handle_key_events(key(KeyCode::Enter)),
        Action::ShowDialog(DialogType::Error(_))
    ));
}

#[test]
fn test_text_dialog_scrolling() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::Submitted("{}".to_string()));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('j'))), Action::DialogScrollDown);
    dialog.update(Action::DialogScrollDown);
    dialog.update(Action::DialogScrollDown);
    dialog.update(Action::DialogScrollUp);
    assert_eq!(dialog.scroll_offset, 1);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog);
}

#[test]
fn test_reopening_clears_previous_state() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::GotoPage);
    dialog.handle_key_events(key(KeyCode::Char('3')));
    dialog.show(DialogType::GotoPage);
    assert!(dialog.input_buffer.is_empty());
}
