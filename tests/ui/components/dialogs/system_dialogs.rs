use friendlist::ui::components::dialogs::system_dialogs::{
    clamp_scroll, render_message_dialog, MessageKind, HELP_TEXT,
};
use ratatui::{backend::TestBackend, widgets::ScrollbarState, Terminal};

#[test]
fn test_clamp_scroll() {
    assert_eq!(clamp_scroll(0, 10, 5), 0);
    assert_eq!(clamp_scroll(3, 10, 5), 3);
    assert_eq!(clamp_scroll(99, 10, 5), 5);
    // Content shorter than the view never scrolls
    assert_eq!(clamp_scroll(4, 3, 5), 0);
}

#[test]
fn test_help_lists_selection_keys() {
    assert!(HELP_TEXT.contains("Space/Enter"));
    assert!(HELP_TEXT.contains("Ctrl+S"));
}

fn render_text(kind: MessageKind, message: &str) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal
        .draw(|f| {
            let mut state = ScrollbarState::new(0);
            render_message_dialog(f, f.area(), kind, message, 0, &mut state);
        })
        .unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_message_dialogs_render_their_kind() {
    let error = render_text(MessageKind::Error, "Please fix the highlighted fields");
    assert!(error.contains("Error"));
    assert!(error.contains("Please fix the highlighted fields"));

    let submitted = render_text(MessageKind::Submitted, "{ \"friends\": [] }");
    assert!(submitted.contains("Submitted"));
    assert!(submitted.contains("\"friends\""));
}
