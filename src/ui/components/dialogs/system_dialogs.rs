use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::constants::{
    DIALOG_TITLE_ERROR, DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS, DIALOG_TITLE_SUBMITTED,
};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

pub const HELP_TEXT: &str = r"
FRIENDLIST
==========

TABLE
-----
j/k ↑↓      Move the cursor
Space/Enter Select the row (again to deselect)
n/p →←      Next / previous page
g/G         First / last page
:           Go to page
+/-         More / fewer rows per page
a           Add a friend
d           Remove the friend under the cursor
R           Reset to the initial friends
s           Submit
Tab         Edit in the form
Click       Select the clicked row

FORM
----
↑↓ Tab      Move between fields
Type        Edit the focused field
Backspace   Delete the last character
Ctrl+N      Add a friend
Ctrl+D      Remove the focused friend
Ctrl+R      Reset
Ctrl+S      Submit
Esc         Back to the table

GENERAL
-------
?           Help
L           Logs
q / Ctrl+C  Quit

Only one friend can be selected at a time. Emails are checked on submit.
";

/// Clamp `scroll_offset` for `total_lines` shown in `visible_height` lines
pub fn clamp_scroll(scroll_offset: usize, total_lines: usize, visible_height: usize) -> usize {
    scroll_offset.min(total_lines.saturating_sub(visible_height))
}

fn render_scrollable_text(
    f: &mut Frame,
    dialog_area: Rect,
    title: &str,
    color: Color,
    text: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(title, color);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);
    let content_area = chunks[0];

    let total_lines = text.lines().count();
    let visible_height = content_area.height as usize;
    let offset = clamp_scroll(scroll_offset, total_lines, visible_height);

    let paragraph = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false })
        .scroll((offset as u16, 0));
    f.render_widget(paragraph, content_area);

    f.render_widget(
        create_instructions_paragraph(&[shortcuts::SCROLL, shortcuts::SEPARATOR, shortcuts::ESC_CLOSE]),
        chunks[1],
    );

    if total_lines > visible_height {
        *scrollbar_state = scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(offset);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐");
        f.render_stateful_widget(scrollbar, content_area, scrollbar_state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) {
    let (width, height) = LayoutManager::large_dialog_dimensions(area.width, area.height);
    let dialog_area = LayoutManager::centered_rect(width, height, area);
    render_scrollable_text(
        f,
        dialog_area,
        DIALOG_TITLE_HELP,
        Color::Yellow,
        HELP_TEXT,
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logs: &[String],
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let (width, height) = LayoutManager::large_dialog_dimensions(area.width, area.height);
    let dialog_area = LayoutManager::centered_rect(width, height, area);
    let text = if logs.is_empty() {
        "No log entries yet".to_string()
    } else {
        logs.join("\n")
    };
    render_scrollable_text(
        f,
        dialog_area,
        DIALOG_TITLE_LOGS,
        Color::Cyan,
        &text,
        scroll_offset,
        scrollbar_state,
    );
}

/// Which message dialog to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Submitted,
}

pub fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    kind: MessageKind,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let (title, color, percent_y) = match kind {
        MessageKind::Error => (DIALOG_TITLE_ERROR, Color::Red, 30),
        MessageKind::Submitted => (DIALOG_TITLE_SUBMITTED, Color::Green, 70),
    };
    let dialog_area = LayoutManager::centered_rect(60, percent_y, area);
    render_scrollable_text(f, dialog_area, title, color, message, scroll_offset, scrollbar_state);
}
