use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::constants::DIALOG_TITLE_GOTO_PAGE;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

/// Go-to-page prompt: a number input and its shortcuts
pub fn render_goto_page_dialog(f: &mut Frame, area: Rect, input_buffer: &str, page_count: usize) {
    let dialog_area = LayoutManager::centered_rect_lines(40, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(DIALOG_TITLE_GOTO_PAGE, Color::Cyan);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let field_title = format!("Page (1-{})", page_count);
    f.render_widget(create_input_paragraph(input_buffer, &field_title), chunks[0]);
    f.render_widget(
        create_instructions_paragraph(&[shortcuts::ENTER_CONFIRM, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]),
        chunks[1],
    );
}
