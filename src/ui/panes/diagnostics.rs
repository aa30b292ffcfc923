//! Diagnostics pane rendering

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::parser::diagnostic::Diagnostic;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// One row per fault: position, message, then the quoted line and caret
/// when the source line is known.
fn diagnostic_lines(diagnostic: &Diagnostic) -> Vec<Line<'_>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{}:{} ", diagnostic.line(), diagnostic.column()),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(diagnostic.message.as_str(), Style::default().fg(DEFAULT_THEME.fg)),
    ])];

    if let Some(source_line) = &diagnostic.source_line {
        lines.push(Line::from(Span::styled(
            format!("  {}", source_line),
            Style::default().fg(DEFAULT_THEME.comment),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", diagnostic.caret()),
            Style::default().fg(DEFAULT_THEME.error),
        )));
    }

    lines
}

/// Render the diagnostics pane
pub fn render_diagnostics_pane(
    frame: &mut Frame,
    area: Rect,
    diagnostics: &[Diagnostic],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Diagnostics ({}) ", diagnostics.len());
    let block = pane_block(&title, is_focused);

    if diagnostics.is_empty() {
        let paragraph = Paragraph::new("No syntax errors")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.success));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = diagnostics
        .iter()
        .flat_map(diagnostic_lines)
        .map(ListItem::new)
        .collect();

    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, all_items.len(), visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
