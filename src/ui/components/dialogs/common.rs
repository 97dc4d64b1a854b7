use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block with a visual cursor
pub fn create_input_paragraph<'a>(input_buffer: &'a str, field_title: &str) -> Paragraph<'a> {
    let cursor_char = "█";
    let input_display = format!("{}{}", input_buffer, cursor_char);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(Color::Gray));

    Paragraph::new(input_display)
        .block(input_block)
        .style(Style::default().fg(Color::White))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Builds a line of color-coded instruction shortcuts
pub fn create_instructions_line<'a>(instructions: &[InstructionShortcut]) -> Line<'a> {
    let mut spans = Vec::new();
    for (key, color, desc) in instructions {
        spans.push(Span::styled(*key, Style::default().fg(*color).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }
    Line::from(spans)
}

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    Paragraph::new(create_instructions_line(instructions)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs and the form
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const ENTER_CONFIRM: InstructionShortcut = ("Enter", Color::Green, " Go");
    pub const SCROLL: InstructionShortcut = ("↑↓", Color::Cyan, " Scroll");
    pub const ADD_FRIEND: InstructionShortcut = ("Ctrl+N", Color::Blue, " Add Friend");
    pub const RESET: InstructionShortcut = ("Ctrl+R", Color::LightRed, " Reset");
    pub const SUBMIT: InstructionShortcut = ("Ctrl+S", Color::Magenta, " Submit");
}
