use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use friendlist::config::Config;
use friendlist::logger::Logger;
use friendlist::store::FriendField;
use friendlist::ui::app_component::AppState;
use friendlist::ui::core::{Action, Component, DialogType, EventType, Focus};
use friendlist::ui::AppComponent;
use ratatui::{backend::TestBackend, Terminal};

fn app() -> AppComponent {
    AppComponent::new(&Config::default(), Logger::new())
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn click(app: &mut AppComponent, column: u16, row: u16) {
    app.handle_event(EventType::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
    .unwrap();
}

fn selected_flags(app: &AppComponent) -> Vec<bool> {
    app.store().friends().iter().map(|f| f.is_selected()).collect()
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert_eq!(state.focus, Focus::Table);
    assert!(state.status_message.is_none());
}

#[test]
fn test_space_selects_and_reselect_deselects() {
    let mut app = app();
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(selected_flags(&app), vec![true, false]);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(selected_flags(&app), vec![false, true]);

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(selected_flags(&app), vec![false, false]);
}

#[test]
fn test_table_and_form_share_one_snapshot() {
    let mut app = app();
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.table().friends, app.store().friends());
    assert_eq!(app.form().friends, app.store().friends());
}

#[test]
fn test_add_then_edit_in_form() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.store().len(), 3);
    assert_eq!(app.table().cursor, 2);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().focus, Focus::Form);
    assert_eq!(app.form().focused_row, 2);

    type_text(&mut app, "Ana");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "ana@formik.com");

    let ana = &app.store().friends()[2];
    assert_eq!(ana.name, "Ana");
    assert_eq!(ana.email, "ana@formik.com");
    assert!(!ana.is_selected());

    // 'q' is text while the form has focus
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    assert_eq!(app.store().friends()[2].email, "ana@formik.comq");
}

#[test]
fn test_remove_row_under_cursor() {
    let mut app = app();
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('d'));

    assert_eq!(app.store().len(), 1);
    assert_eq!(app.store().friends()[0].name, "Klaus");
    assert_eq!(app.store().selected_index(), None);
    assert_eq!(app.table().cursor, 0);
}

#[test]
fn test_remove_missing_row_shows_error_dialog() {
    let mut app = app();
    let Action::ShowDialog(DialogType::Error(message)) = app.handle_app_action(Action::RemoveFriend(99)) else {
        panic!("expected an error dialog");
    };
    assert!(message.starts_with("Remove failed"));
    assert_eq!(app.store().len(), 2);
    assert!(app.state().status_message.is_none());
}

#[test]
fn test_submit_with_blank_email_shows_error() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('s'));

    assert!(matches!(app.dialog().dialog_type, Some(DialogType::Error(_))));
    assert_eq!(app.form().errors[2].get(FriendField::Email), Some("Required"));
    assert_eq!(app.form().focused_row, 2);
    assert_eq!(app.form().focused_field, FriendField::Email);
}

#[test]
fn test_submit_valid_values() {
    let mut app = app();
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('s'));

    let Some(DialogType::Submitted(values)) = app.dialog().dialog_type.clone() else {
        panic!("expected the submitted values dialog");
    };
    let value: serde_json::Value = serde_json::from_str(&values).unwrap();
    assert_eq!(value["friends"][0]["email"], "klaus@formik.com");
    assert_eq!(value["friends"][0]["isSelected"], true);

    // Keys go to the dialog while it is open
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    assert!(!app.dialog().is_visible());
}

#[test]
fn test_reset_restores_seed() {
    let mut app = app();
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('R'));

    assert_eq!(app.store().len(), 2);
    assert_eq!(app.store().selected_index(), None);
    assert_eq!(app.table().cursor, 0);
    assert!(app.state().status_message.is_some());
}

#[test]
fn test_goto_page_dialog() {
    let mut config = Config::default();
    config.ui.page_size = 1;
    let mut app = AppComponent::new(&config, Logger::new());

    press(&mut app, KeyCode::Char(':'));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::GotoPage));
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Enter);

    assert!(!app.dialog().is_visible());
    assert_eq!(app.table().pager.page_index(), 1);
    assert_eq!(app.table().cursor, 1);

    // Pages past the end are ignored
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.table().pager.page_index(), 0);
    press(&mut app, KeyCode::Char(':'));
    type_text(&mut app, "9");
    press(&mut app, KeyCode::Enter);
    assert!(!app.dialog().is_visible());
    assert_eq!(app.table().pager.page_index(), 0);
    assert_eq!(app.table().cursor, 0);
}

#[test]
fn test_click_on_row_toggles_it() {
    let mut app = app();
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    // Border plus a two-line header puts the first body row on line 3
    click(&mut app, 5, 4);
    assert_eq!(selected_flags(&app), vec![false, true]);

    click(&mut app, 5, 4);
    assert_eq!(selected_flags(&app), vec![false, false]);

    // Clicks below the last row do nothing
    click(&mut app, 5, 8);
    assert_eq!(selected_flags(&app), vec![false, false]);
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = self::app();
    press(&mut app, KeyCode::Tab);
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .unwrap();
    assert!(app.should_quit());
}

#[test]
fn test_help_and_logs_dialogs() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Help));
    press(&mut app, KeyCode::Esc);
    assert!(!app.dialog().is_visible());
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Char('L'));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Logs));
}
