//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::constants::{STATUS_FORM_SHORTCUTS, STATUS_TABLE_SHORTCUTS};
use crate::ui::core::Focus;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the transient message if there is one, the shortcuts otherwise
    pub fn render(f: &mut Frame, area: Rect, focus: Focus, message: Option<&str>) {
        let (text, color) = match message {
            Some(message) if message.starts_with('❌') => (message, Color::Red),
            Some(message) => (message, Color::Green),
            None => match focus {
                Focus::Table => (STATUS_TABLE_SHORTCUTS, Color::Gray),
                Focus::Form => (STATUS_FORM_SHORTCUTS, Color::Gray),
            },
        };

        let status_bar = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));

        f.render_widget(status_bar, area);
    }
}
