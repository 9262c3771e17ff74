//! Shared helpers for pane rendering
//!
//! All functions here are `pub(super)`: they exist so every pane frames and
//! scrolls its content the same way.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focus-dependent border style
pub(super) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Rows available inside a bordered pane (at least one)
pub(super) fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Clamp a scroll offset so the last page is never scrolled past
pub(super) fn clamp_scroll(offset: usize, total_items: usize, visible_height: usize) -> usize {
    if total_items > visible_height {
        offset.min(total_items - visible_height)
    } else {
        0
    }
}

/// Adjust `offset` so that `selected` lies within the visible window
pub(super) fn follow_selection(offset: usize, selected: usize, visible_height: usize) -> usize {
    if selected < offset {
        selected
    } else if selected >= offset + visible_height {
        selected + 1 - visible_height
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        assert_eq!(clamp_scroll(usize::MAX, 30, 10), 20);
        assert_eq!(clamp_scroll(5, 30, 10), 5);
        assert_eq!(clamp_scroll(5, 8, 10), 0);
    }

    #[test]
    fn test_follow_selection() {
        assert_eq!(follow_selection(0, 3, 10), 0);
        assert_eq!(follow_selection(0, 12, 10), 3);
        assert_eq!(follow_selection(8, 2, 10), 2);
    }
}
