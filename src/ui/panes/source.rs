//! Source code pane rendering with syntax highlighting
//!
//! Displays the parsed program with line numbers and basic highlighting for
//! keywords, strings, numbers, call names and `#` comments. Lines that carry
//! at least one syntax fault get a marker and a tinted background.
//!
//! The pane uses a simple character-by-character scanner to apply styles
//! without going back through the lexer, so it still renders text the lexer
//! would reject.

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rustc_hash::FxHashMap;

/// Simple syntax highlighting for minipy source
fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '#' {
            flush_word(&mut spans, &mut current_word, false);
            let rest: String = chars[i..].iter().collect();
            spans.push(Span::styled(rest, Style::default().fg(DEFAULT_THEME.comment)));
            break;
        }

        // Strings have no escapes; an unterminated one runs to end of line
        if c == '"' {
            flush_word(&mut spans, &mut current_word, false);
            let mut end = i + 1;
            while end < chars.len() && chars[end] != '"' {
                end += 1;
            }
            if end < chars.len() {
                end += 1;
            }
            let literal: String = chars[i..end].iter().collect();
            spans.push(Span::styled(literal, Style::default().fg(DEFAULT_THEME.string)));
            i = end;
            continue;
        }

        if !c.is_alphanumeric() && c != '_' && !(c == '.' && is_number(&current_word)) {
            flush_word(&mut spans, &mut current_word, c == '(');

            let style = match c {
                '{' | '}' | '(' | ')' => Style::default().fg(DEFAULT_THEME.primary), // Brackets
                _ => Style::default().fg(DEFAULT_THEME.fg), // Operators, separators
            };

            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    flush_word(&mut spans, &mut current_word, false);

    Line::from(spans)
}

fn flush_word(spans: &mut Vec<Span<'_>>, word: &mut String, is_function: bool) {
    if !word.is_empty() {
        let style = get_keyword_style(word, is_function);
        spans.push(Span::styled(std::mem::take(word), style));
    }
}

fn is_number(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn get_keyword_style(word: &str, is_function: bool) -> Style {
    match word {
        "var" | "def" | "if" | "else" | "while" | "return" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ if is_number(word) => Style::default().fg(DEFAULT_THEME.number),
        _ if is_function => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg), // Variables/Identifiers
    }
}

/// Render the source code pane.
///
/// `fault_lines` maps 1-based line numbers to the number of faults on them.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    fault_lines: &FxHashMap<usize, usize>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Source ", is_focused);

    let lines: Vec<&str> = source_code.lines().collect();
    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_fault = fault_lines.contains_key(&line_num);

            let marker = if is_fault { '!' } else { ' ' };
            let num_style = if is_fault {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content_line = highlight_source_code(line);
            if is_fault {
                let fault_bg = Style::default().bg(DEFAULT_THEME.fault_line_bg);
                for span in &mut content_line.spans {
                    span.style = span.style.patch(fault_bg);
                }
            }

            let mut final_spans = vec![Span::styled(format!("{}{:4} ", marker, line_num), num_style)];
            final_spans.extend(content_line.spans);

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
