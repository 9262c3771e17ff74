//! Trace pane: recorded compiler events with the current step selected

use super::utils::{follow_selection, pane_block, visible_height};
use crate::trace::Event;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

fn event_style(event: &Event) -> Style {
    match event {
        Event::Folded { .. } => Style::default().fg(DEFAULT_THEME.number),
        Event::SymbolDefined { .. } => Style::default().fg(DEFAULT_THEME.type_name),
        Event::Lookup { found: false, .. } => Style::default().fg(DEFAULT_THEME.error),
        Event::Lookup { .. } => Style::default().fg(DEFAULT_THEME.fg),
        Event::ScopeEntered { .. } | Event::ScopeLeft { .. } => {
            Style::default().fg(DEFAULT_THEME.primary)
        }
    }
}

/// Render the trace pane, keeping `selected` in view
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    events: &[Event],
    selected: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Trace ", is_focused);

    if events.is_empty() {
        let paragraph = Paragraph::new("(no events)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = visible_height(area);
    *scroll_offset = follow_selection(*scroll_offset, selected, visible_height);

    let items: Vec<ListItem> = events
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, event)| {
            let marker = if idx == selected { "▶ " } else { "  " };
            let mut style = event_style(event);
            if idx == selected {
                style = style
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}{:4} ", marker, idx + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(event.to_string(), style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
