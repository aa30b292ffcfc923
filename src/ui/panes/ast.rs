//! AST pane rendering
//!
//! Shows the printer output line by line. The node kind before the first `:`
//! is highlighted; labels such as `Left:` or `Body:` are dimmed.

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

const LABELS: &[&str] = &[
    "Value",
    "Condition",
    "Then",
    "Else",
    "Body",
    "Parameters",
    "Left",
    "Right",
    "Arguments",
];

fn style_tree_line(line: &str) -> Line<'_> {
    let content = line.trim_start();
    let indent = &line[..line.len() - content.len()];

    let Some((kind, rest)) = content.split_once(':') else {
        return Line::from(line);
    };

    let kind_style = if LABELS.contains(&kind) {
        Style::default().fg(DEFAULT_THEME.comment)
    } else {
        Style::default().fg(DEFAULT_THEME.node_label)
    };

    Line::from(vec![
        Span::raw(indent),
        Span::styled(kind, kind_style),
        Span::styled(":", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(rest, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Render the AST pane from pre-rendered printer lines
pub fn render_ast_pane(
    frame: &mut Frame,
    area: Rect,
    tree_lines: &[String],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" AST ", is_focused);

    if tree_lines.is_empty() {
        let paragraph = Paragraph::new("(empty program)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, tree_lines.len(), visible_height);

    let visible_items: Vec<ListItem> = tree_lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| ListItem::new(style_tree_line(line)))
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
