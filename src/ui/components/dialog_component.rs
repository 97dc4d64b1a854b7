//! Modal dialog component.
//!
//! Holds which dialog is open plus the little state dialogs need: the
//! go-to-page input buffer and a scroll offset for long text. Rendering is
//! delegated to the functions in [`dialogs`](crate::ui::components::dialogs).

use crate::constants::ERROR_INVALID_PAGE_NUMBER;
use crate::logger::Logger;
use crate::ui::components::dialogs::{page_dialogs, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    /// Page count of the table, for the go-to-page prompt
    pub page_count: usize,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            page_count: 1,
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn show(&mut self, dialog_type: DialogType) {
        self.clear_dialog();
        self.dialog_type = Some(dialog_type);
    }

    pub fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    /// Parse the 1-based page typed by the user; empty input means the first page
    fn submit_goto_page(&mut self) -> Action {
        if self.input_buffer.trim().is_empty() {
            self.clear_dialog();
            return Action::GotoPage(0);
        }
        match self.input_buffer.trim().parse::<usize>() {
            Ok(page) if page >= 1 => {
                self.clear_dialog();
                Action::GotoPage(page - 1)
            }
            _ => {
                log::warn!("Go to page: rejected input '{}'", self.input_buffer);
                Action::ShowDialog(DialogType::Error(ERROR_INVALID_PAGE_NUMBER.to_string()))
            }
        }
    }

    fn handle_goto_page_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => self.submit_goto_page(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
                Action::None
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.input_buffer.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_text_dialog_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Action::HideDialog,
            KeyCode::Char('?') if matches!(self.dialog_type, Some(DialogType::Help)) => Action::HideDialog,
            KeyCode::Char('L') if matches!(self.dialog_type, Some(DialogType::Logs)) => Action::HideDialog,
            KeyCode::Up | KeyCode::Char('k') => Action::DialogScrollUp,
            KeyCode::Down | KeyCode::Char('j') => Action::DialogScrollDown,
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.dialog_type {
            None => Action::None,
            Some(DialogType::GotoPage) => self.handle_goto_page_key(key),
            Some(_) => self.handle_text_dialog_key(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.show(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            Action::DialogScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            Action::DialogScrollDown => {
                // Clamped against the content when rendered
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::GotoPage => {
                page_dialogs::render_goto_page_dialog(f, rect, &self.input_buffer, self.page_count);
            }
            DialogType::Help => {
                system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state);
            }
            DialogType::Logs => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                system_dialogs::render_logs_dialog(f, rect, &logs, self.scroll_offset, &mut self.scrollbar_state);
            }
            DialogType::Error(message) => system_dialogs::render_message_dialog(
                f,
                rect,
                system_dialogs::MessageKind::Error,
                &message,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            DialogType::Submitted(values) => system_dialogs::render_message_dialog(
                f,
                rect,
                system_dialogs::MessageKind::Submitted,
                &values,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
        }
    }
}
