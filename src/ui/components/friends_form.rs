//! Editable form with one name/email pair per friend.
//!
//! Keystrokes become [`Action::UpdateField`]; the form re-renders from the
//! snapshot it is given afterwards, so it always agrees with the table.

use crate::constants::{FORM_ROW_HEIGHT, PLACEHOLDER_EMAIL, PLACEHOLDER_NAME, TITLE_FORM};
use crate::store::{Friend, FriendField};
use crate::ui::components::dialogs::common::{create_instructions_paragraph, shortcuts};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{
    actions::{Action, Focus},
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::validation::FieldErrors;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct FriendsFormComponent {
    pub friends: Vec<Friend>,
    /// Index-aligned with `friends`; filled on submit
    pub errors: Vec<FieldErrors>,
    pub focused_row: usize,
    pub focused_field: FriendField,
    pub focused: bool,
    scroll_offset: usize,
    scrollbar: ScrollbarHelper,
}

impl Default for FriendsFormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl FriendsFormComponent {
    pub fn new() -> Self {
        Self {
            friends: Vec::new(),
            errors: Vec::new(),
            focused_row: 0,
            focused_field: FriendField::Name,
            focused: false,
            scroll_offset: 0,
            scrollbar: ScrollbarHelper::new(),
        }
    }

    pub fn update_data(&mut self, friends: Vec<Friend>) {
        self.friends = friends;
        self.errors.resize_with(self.friends.len(), FieldErrors::default);
        self.focused_row = self.focused_row.min(self.friends.len().saturating_sub(1));
    }

    pub fn set_errors(&mut self, errors: Vec<FieldErrors>) {
        self.errors = errors;
        self.errors.resize_with(self.friends.len(), FieldErrors::default);
    }

    pub fn clear_errors(&mut self) {
        self.errors = vec![FieldErrors::default(); self.friends.len()];
    }

    /// Drop the errors of a removed row so the rest stay aligned
    pub fn remove_errors_at(&mut self, index: usize) {
        if index < self.errors.len() {
            self.errors.remove(index);
        }
    }

    pub fn focus_field(&mut self, row: usize, field: FriendField) {
        self.focused_row = row.min(self.friends.len().saturating_sub(1));
        self.focused_field = field;
    }

    /// Focus the first field that has an error, if any
    pub fn focus_first_error(&mut self) {
        let first = self.errors.iter().enumerate().find_map(|(row, errors)| {
            [FriendField::Name, FriendField::Email]
                .into_iter()
                .find(|field| errors.get(*field).is_some())
                .map(|field| (row, field))
        });
        if let Some((row, field)) = first {
            self.focus_field(row, field);
        }
    }

    fn next_field(&mut self) {
        match self.focused_field {
            FriendField::Name => self.focused_field = FriendField::Email,
            FriendField::Email => {
                if self.focused_row + 1 < self.friends.len() {
                    self.focused_row += 1;
                    self.focused_field = FriendField::Name;
                }
            }
        }
    }

    fn previous_field(&mut self) {
        match self.focused_field {
            FriendField::Email => self.focused_field = FriendField::Name,
            FriendField::Name => {
                if self.focused_row > 0 {
                    self.focused_row -= 1;
                    self.focused_field = FriendField::Email;
                }
            }
        }
    }

    fn edit_focused(&self, edit: impl FnOnce(&mut String)) -> Action {
        let Some(friend) = self.friends.get(self.focused_row) else {
            return Action::None;
        };
        let mut value = friend.field(self.focused_field).to_string();
        edit(&mut value);
        Action::UpdateField {
            index: self.focused_row,
            field: self.focused_field,
            value,
        }
    }

    fn field_line(&self, row: usize, friend: &Friend, field: FriendField) -> Line<'static> {
        let is_focused = self.focused && row == self.focused_row && field == self.focused_field;
        let value = friend.field(field);
        let label_style = if is_focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut spans = vec![Span::styled(format!("{:<6} ", field.label()), label_style)];
        if value.is_empty() && !is_focused {
            let placeholder = match field {
                FriendField::Name => PLACEHOLDER_NAME,
                FriendField::Email => PLACEHOLDER_EMAIL,
            };
            spans.push(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
        } else {
            spans.push(Span::styled(value.to_string(), Style::default().fg(Color::White)));
        }
        if is_focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
        }
        Line::from(spans)
    }

    fn error_line(&self, row: usize) -> Line<'static> {
        let errors = self.errors.get(row);
        let message = [FriendField::Name, FriendField::Email]
            .into_iter()
            .find_map(|field| errors.and_then(|e| e.get(field)).map(|msg| (field, msg)));
        match message {
            Some((field, msg)) => Line::from(Span::styled(
                format!("{}: {}", field.label(), msg),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(""),
        }
    }

    fn render_row(&self, f: &mut Frame, area: Rect, row: usize, friend: &Friend) {
        let mut title = format!(" Friend {} ", row + 1);
        if friend.is_selected() {
            title.push_str("● selected ");
        }
        let border_style = if friend.is_selected() {
            Style::default().fg(Color::LightBlue)
        } else if self.focused && row == self.focused_row {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(border_style);

        let lines = vec![
            self.field_line(row, friend, FriendField::Name),
            self.field_line(row, friend, FriendField::Email),
            self.error_line(row),
        ];
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Component for FriendsFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('n') => Action::AddFriend,
                KeyCode::Char('d') if !self.friends.is_empty() => Action::RemoveFriend(self.focused_row),
                KeyCode::Char('r') => Action::ResetForm,
                KeyCode::Char('s') => Action::SubmitForm,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Esc => Action::Focus(Focus::Table),
            KeyCode::Down | KeyCode::Tab | KeyCode::Enter => {
                self.next_field();
                Action::None
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.previous_field();
                Action::None
            }
            KeyCode::Backspace => {
                let Some(friend) = self.friends.get(self.focused_row) else {
                    return Action::None;
                };
                if friend.field(self.focused_field).is_empty() {
                    return Action::None;
                }
                self.edit_focused(|value| {
                    value.pop();
                })
            }
            KeyCode::Char(c) => self.edit_focused(|value| value.push(c)),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(TITLE_FORM)
            .style(Style::default().fg(border_color));
        let inner = outer.inner(rect);
        f.render_widget(outer, rect);

        let (rows_area, legend_area) = LayoutManager::with_footer(inner);
        let visible = ScrollbarHelper::visible_items(rows_area.height, FORM_ROW_HEIGHT);
        self.scroll_offset = ScrollbarHelper::offset_for(self.focused_row, self.scroll_offset, visible);
        self.scroll_offset = self.scroll_offset.min(self.friends.len().saturating_sub(visible));

        let (content_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rows_area, self.friends.len(), visible);

        for (slot, (row, friend)) in self
            .friends
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible)
            .enumerate()
        {
            let area = Rect {
                x: content_area.x,
                y: content_area.y + slot as u16 * FORM_ROW_HEIGHT,
                width: content_area.width,
                height: FORM_ROW_HEIGHT,
            };
            self.render_row(f, area, row, friend);
        }

        self.scrollbar.update_state(self.friends.len(), self.focused_row, visible);
        self.scrollbar.render(f, scrollbar_area);

        let legend = create_instructions_paragraph(&[
            shortcuts::ADD_FRIEND,
            shortcuts::SEPARATOR,
            shortcuts::RESET,
            shortcuts::SEPARATOR,
            shortcuts::SUBMIT,
        ]);
        f.render_widget(legend, legend_area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
