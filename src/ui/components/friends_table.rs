//! Paginated friends table.
//!
//! Shows one page of the store's snapshot with a selection checkbox column.
//! The table owns only view state (page and cursor); toggling a row returns
//! [`Action::ToggleSelect`] for the app to apply to the store.

use crate::constants::{
    CHECKBOX_CHECKED, CHECKBOX_UNCHECKED, HEADER_EMAIL, HEADER_FIRST_NAME, HEADER_GROUP_INFO, HEADER_GROUP_NAME,
    PAGE_SIZE_OPTIONS, TITLE_TABLE,
};
use crate::pagination::Pager;
use crate::store::Friend;
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// Lines taken by the two-level column header
const HEADER_HEIGHT: u16 = 2;

pub struct FriendsTableComponent {
    pub friends: Vec<Friend>,
    pub pager: Pager,
    /// Absolute index of the row under the cursor
    pub cursor: usize,
    pub focused: bool,
    table_state: TableState,
    last_area: Option<Rect>,
}

impl Default for FriendsTableComponent {
    fn default() -> Self {
        Self::new(Pager::default())
    }
}

impl FriendsTableComponent {
    pub fn new(pager: Pager) -> Self {
        Self {
            friends: Vec::new(),
            pager,
            cursor: 0,
            focused: true,
            table_state: TableState::default(),
            last_area: None,
        }
    }

    pub fn update_data(&mut self, friends: Vec<Friend>) {
        self.friends = friends;
        self.pager.clamp(self.friends.len());
        self.cursor = self.cursor.min(self.friends.len().saturating_sub(1));
        self.keep_cursor_on_page();
    }

    /// Rows on the current page
    pub fn visible_rows(&self) -> &[Friend] {
        &self.friends[self.pager.page_range(self.friends.len())]
    }

    /// Move the cursor to `index` and flip to the page that shows it
    pub fn move_cursor_to(&mut self, index: usize) {
        if self.friends.is_empty() {
            self.cursor = 0;
            return;
        }
        self.cursor = index.min(self.friends.len() - 1);
        self.pager.goto_page(self.pager.page_of(self.cursor), self.friends.len());
    }

    fn keep_cursor_on_page(&mut self) {
        let range = self.pager.page_range(self.friends.len());
        if !range.contains(&self.cursor) {
            self.cursor = range.start;
        }
    }

    fn cursor_down(&mut self) {
        if self.cursor + 1 < self.friends.len() {
            self.move_cursor_to(self.cursor + 1);
        }
    }

    fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.move_cursor_to(self.cursor - 1);
        }
    }

    fn change_page_size(&mut self, grow: bool) {
        let current = self.pager.page_size();
        let next = if grow {
            PAGE_SIZE_OPTIONS.iter().copied().find(|size| *size > current)
        } else {
            PAGE_SIZE_OPTIONS.iter().rev().copied().find(|size| *size < current)
        };
        if let Some(size) = next {
            if self.pager.set_page_size(size, self.friends.len()).is_ok() {
                log::info!("Table: page size set to {}", size);
                self.keep_cursor_on_page();
            }
        }
    }

    /// Map a left click on a body row to a toggle of that row
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let Some(area) = self.last_area else {
            return Action::None;
        };
        if !LayoutManager::contains(area, mouse.column, mouse.row) {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let body_top = area.y + 1 + HEADER_HEIGHT;
                let body_bottom = area.y + area.height.saturating_sub(1);
                if mouse.row < body_top || mouse.row >= body_bottom {
                    return Action::None;
                }
                let range = self.pager.page_range(self.friends.len());
                let clicked = range.start + self.table_state.offset() + (mouse.row - body_top) as usize;
                if clicked >= range.end {
                    return Action::None;
                }
                self.cursor = clicked;
                Action::ToggleSelect(clicked)
            }
            MouseEventKind::ScrollDown => {
                self.cursor_down();
                Action::None
            }
            MouseEventKind::ScrollUp => {
                self.cursor_up();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn header_row(&self) -> Row<'static> {
        let cell = |group: &'static str, column: &'static str| {
            Cell::from(Text::from(vec![
                Line::from(Span::styled(group, Style::default().fg(Color::DarkGray))),
                Line::from(column),
            ]))
        };
        Row::new(vec![
            cell("", ""),
            cell(HEADER_GROUP_NAME, HEADER_FIRST_NAME),
            cell(HEADER_GROUP_INFO, HEADER_EMAIL),
        ])
        .height(HEADER_HEIGHT)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
    }

    fn body_rows(&self) -> Vec<Row<'static>> {
        self.visible_rows()
            .iter()
            .map(|friend| {
                let checkbox = if friend.is_selected() {
                    CHECKBOX_CHECKED
                } else {
                    CHECKBOX_UNCHECKED
                };
                let row = Row::new(vec![
                    Cell::from(checkbox),
                    Cell::from(friend.name.clone()),
                    Cell::from(friend.email.clone()),
                ]);
                if friend.is_selected() {
                    row.style(Style::default().bg(Color::LightBlue).fg(Color::Black))
                } else {
                    row
                }
            })
            .collect()
    }

    fn pagination_line(&self) -> Line<'static> {
        let len = self.friends.len();
        let enabled = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let disabled = Style::default().fg(Color::DarkGray);
        let prev_style = if self.pager.can_previous_page() { enabled } else { disabled };
        let next_style = if self.pager.can_next_page(len) { enabled } else { disabled };

        Line::from(vec![
            Span::styled("<<", prev_style),
            Span::raw(" "),
            Span::styled("<", prev_style),
            Span::raw(" "),
            Span::styled(">", next_style),
            Span::raw(" "),
            Span::styled(">>", next_style),
            Span::raw("  Page "),
            Span::styled(
                format!("{} of {}", self.pager.page_index() + 1, self.pager.page_count(len)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  | {} per page", self.pager.page_size()),
                Style::default().fg(Color::Gray),
            ),
        ])
    }
}

impl Component for FriendsTableComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.cursor_down();
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.cursor_up();
                Action::None
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                if self.friends.is_empty() {
                    Action::None
                } else {
                    Action::ToggleSelect(self.cursor)
                }
            }
            KeyCode::Char('n') | KeyCode::Right => Action::NextPage,
            KeyCode::Char('p') | KeyCode::Left => Action::PreviousPage,
            KeyCode::Char('g') | KeyCode::Home => Action::FirstPage,
            KeyCode::Char('G') | KeyCode::End => Action::LastPage,
            KeyCode::Char(':') => Action::ShowDialog(DialogType::GotoPage),
            KeyCode::Char('+') => Action::GrowPageSize,
            KeyCode::Char('-') => Action::ShrinkPageSize,
            KeyCode::Char('a') => Action::AddFriend,
            KeyCode::Char('d') => {
                if self.friends.is_empty() {
                    Action::None
                } else {
                    Action::RemoveFriend(self.cursor)
                }
            }
            KeyCode::Char('R') => Action::ResetForm,
            KeyCode::Char('s') => Action::SubmitForm,
            KeyCode::Tab => Action::Focus(Focus::Form),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        let len = self.friends.len();
        match action {
            Action::NextPage => self.pager.next_page(len),
            Action::PreviousPage => self.pager.previous_page(),
            Action::FirstPage => self.pager.first_page(),
            Action::LastPage => self.pager.last_page(len),
            Action::GotoPage(page) => {
                if !self.pager.goto_page(page, len) {
                    log::info!("Table: page {} does not exist, staying on page {}", page + 1, self.pager.page_index() + 1);
                }
            }
            Action::GrowPageSize => self.change_page_size(true),
            Action::ShrinkPageSize => self.change_page_size(false),
            other => return other,
        }
        self.keep_cursor_on_page();
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (table_area, footer_area) = LayoutManager::with_footer(rect);
        self.last_area = Some(table_area);

        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(TITLE_TABLE)
            .style(Style::default().fg(border_color));

        let page_start = self.pager.page_range(self.friends.len()).start;
        if self.friends.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(self.cursor - page_start));
        }

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        let widths = [Constraint::Length(4), Constraint::Percentage(40), Constraint::Min(10)];
        let table = Table::new(self.body_rows(), widths)
            .header(self.header_row())
            .block(block)
            .row_highlight_style(highlight);

        f.render_stateful_widget(table, table_area, &mut self.table_state);
        f.render_widget(Paragraph::new(self.pagination_line()), footer_area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
