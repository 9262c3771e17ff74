//! Output pane: emitted Python, or the diagnostic that stopped compilation

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::errors::CompileError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph, Wrap},
    Frame,
};

/// Render the output pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    python: Option<&str>,
    error: Option<&CompileError>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    if let Some(error) = error {
        let block = pane_block(" Diagnostic ", is_focused).padding(Padding::new(1, 0, 0, 0));
        let text = vec![
            Line::from(Span::styled(
                format!("{} failed", error.phase()),
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(DEFAULT_THEME.fg),
            )),
        ];
        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
        return;
    }

    let block = pane_block(" Python ", is_focused).padding(Padding::new(1, 0, 0, 0));
    let python = python.unwrap_or_default();
    let rows: Vec<&str> = python.lines().collect();
    let visible_height = visible_height(area);
    *scroll_offset = clamp_scroll(*scroll_offset, rows.len(), visible_height);

    let visible: Vec<Line> = rows
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|row| {
            let style = if row.starts_with("def ") || row.starts_with("if ") {
                Style::default().fg(DEFAULT_THEME.keyword)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            Line::from(Span::styled(*row, style))
        })
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}
