use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use friendlist::ui::core::{Action, Component};
use ratatui::{layout::Rect, Frame};

#[derive(Default)]
struct StubComponent {
    focused: bool,
}

impl Component for StubComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('x') => Action::Quit,
            _ => Action::None,
        }
    }

    fn render(&mut self, _f: &mut Frame, _rect: Rect) {}

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}

#[test]
fn test_default_update_passes_actions_through() {
    let mut stub = StubComponent::default();
    assert_eq!(stub.update(Action::NextPage), Action::NextPage);
    assert_eq!(stub.update(Action::None), Action::None);
}

#[test]
fn test_component_key_handling_and_focus() {
    let mut stub = StubComponent::default();
    let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
    assert_eq!(stub.handle_key_events(key), Action::Quit);

    stub.on_focus();
    assert!(stub.focused);
    stub.on_blur();
    assert!(!stub.focused);
}

#[test]
fn test_handle_events_forwards_keys_only() {
    let mut stub = StubComponent::default();
    let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
    assert_eq!(stub.handle_events(Some(Event::Key(key))), Action::Quit);
    assert_eq!(stub.handle_events(Some(Event::FocusGained)), Action::None);
    assert_eq!(stub.handle_events(None), Action::None);
}
