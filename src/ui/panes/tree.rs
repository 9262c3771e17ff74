//! Tree pane: outline of the parsed or optimized program

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Colour one outline row: `<indent><label>: <Kind> <details> (line N)`
fn highlight_outline_row(row: &str) -> Line<'_> {
    let content = row.trim_start();
    let indent = &row[..row.len() - content.len()];
    let mut spans = vec![Span::raw(indent)];

    let (label, rest) = match content.split_once(": ") {
        Some((label, rest)) if !label.contains(' ') => (Some(label), rest),
        _ => (None, content),
    };
    if let Some(label) = label {
        spans.push(Span::styled(
            format!("{}: ", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    let (kind, details) = rest.split_once(' ').unwrap_or((rest, ""));
    spans.push(Span::styled(
        kind,
        Style::default().fg(DEFAULT_THEME.node_kind),
    ));

    if !details.is_empty() {
        let (details, line_tag) = match details.rfind(" (line ") {
            Some(at) => details.split_at(at),
            None if details.starts_with("(line ") => ("", details),
            None => (details, ""),
        };
        if !details.is_empty() {
            spans.push(Span::styled(
                format!(" {}", details),
                Style::default().fg(DEFAULT_THEME.fg),
            ));
        }
        if !line_tag.is_empty() {
            spans.push(Span::styled(
                format!(" {}", line_tag.trim_start()),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
    }

    Line::from(spans)
}

/// Render the tree pane.
///
/// `outline` is the text produced by `tree::render`, or `None` when the
/// requested tree does not exist (parse failed, or optimization never ran).
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    outline: Option<&str>,
    show_optimized: bool,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = if show_optimized {
        " Optimized Tree "
    } else {
        " Parsed Tree "
    };
    let block = pane_block(title, is_focused);

    let Some(outline) = outline else {
        let paragraph = Paragraph::new("(not available)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let rows: Vec<&str> = outline.lines().collect();
    let visible_height = visible_height(area);
    *scroll_offset = clamp_scroll(*scroll_offset, rows.len(), visible_height);

    let items: Vec<ListItem> = rows
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|row| ListItem::new(highlight_outline_row(row)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &Line) -> Vec<String> {
        line.spans.iter().map(|span| span.content.to_string()).collect()
    }

    #[test]
    fn test_outline_row_parts() {
        let line = highlight_outline_row("    body[0]: VarDecl c: char (line 2)");
        assert_eq!(
            texts(&line),
            vec!["    ", "body[0]: ", "VarDecl", " c: char", " (line 2)"]
        );
    }

    #[test]
    fn test_root_and_bare_rows() {
        assert_eq!(texts(&highlight_outline_row("Program")), vec!["", "Program"]);
        assert_eq!(
            texts(&highlight_outline_row("  body[1]: Return (line 4)")),
            vec!["  ", "body[1]: ", "Return", " (line 4)"]
        );
    }
}
