//! Scrollbar helper for the form, whose rows are several lines tall.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scroll state plus the arithmetic to keep a focused item in view.
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Update the scrollbar with the item count, focused item and visible count
    pub fn update_state(&mut self, total_items: usize, current_position: usize, visible_items: usize) {
        self.state = self
            .state
            .content_length(total_items)
            .position(current_position)
            .viewport_content_length(visible_items);
    }

    /// How many items of `item_height` lines fit in `available_height`
    pub fn visible_items(available_height: u16, item_height: u16) -> usize {
        if item_height == 0 {
            return 0;
        }
        (available_height / item_height) as usize
    }

    /// Smallest change to `offset` that keeps `focused` inside the window
    pub fn offset_for(focused: usize, offset: usize, visible_items: usize) -> usize {
        if visible_items == 0 {
            return focused;
        }
        if focused < offset {
            focused
        } else if focused >= offset + visible_items {
            focused + 1 - visible_items
        } else {
            offset
        }
    }

    /// Split `rect` into content and a one-column scrollbar when items overflow
    pub fn calculate_areas(rect: Rect, total_items: usize, visible_items: usize) -> (Rect, Option<Rect>) {
        if total_items > visible_items {
            let content_area = Rect {
                width: rect.width.saturating_sub(1),
                ..rect
            };
            let scrollbar_area = Rect {
                x: rect.x + rect.width.saturating_sub(1),
                y: rect.y,
                width: 1,
                height: rect.height,
            };
            (content_area, Some(scrollbar_area))
        } else {
            (rect, None)
        }
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
