//! Read-only JSON view of the current selection.

use crate::constants::TITLE_SELECTION;
use crate::store::Friend;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Serialized in declaration order: row ids first, then the records.
#[derive(Serialize)]
struct SelectionView<'a> {
    #[serde(rename = "selectedRowIds")]
    selected_row_ids: BTreeMap<usize, bool>,
    #[serde(rename = "selectedFlatRows[].original")]
    selected_rows: Vec<&'a Friend>,
}

/// Pretty JSON with the selected row ids and the selected records.
pub fn selection_json(friends: &[Friend]) -> String {
    let mut view = SelectionView {
        selected_row_ids: BTreeMap::new(),
        selected_rows: Vec::new(),
    };
    for (index, friend) in friends.iter().enumerate().filter(|(_, f)| f.is_selected()) {
        view.selected_row_ids.insert(index, true);
        view.selected_rows.push(friend);
    }
    serde_json::to_string_pretty(&view).unwrap_or_else(|e| format!("<{}>", e))
}

pub struct SelectionPanel;

impl SelectionPanel {
    /// Lines needed to show the whole JSON inside the borders
    pub fn height(friends: &[Friend]) -> u16 {
        let lines = selection_json(friends).lines().count();
        u16::try_from(lines + 2).unwrap_or(u16::MAX)
    }

    pub fn render(f: &mut Frame, area: Rect, friends: &[Friend]) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(TITLE_SELECTION)
            .style(Style::default().fg(Color::DarkGray));

        let paragraph = Paragraph::new(selection_json(friends))
            .block(block)
            .style(Style::default().fg(Color::Green));
        f.render_widget(paragraph, area);
    }
}
