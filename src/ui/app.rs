//! Explorer application state and event loop

use crate::parser::diagnostic::Diagnostic;
use crate::parser::ParseOutcome;
use crate::visitor::{print_program, NodeStats};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;

/// Rows moved by PageUp/PageDown
const PAGE_SCROLL: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Ast,
    Diagnostics,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> ast -> diagnostics)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Ast,
            FocusedPane::Ast => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Diagnostics,
            FocusedPane::Ast => FocusedPane::Source,
            FocusedPane::Diagnostics => FocusedPane::Ast,
        }
    }

    fn name(self) -> &'static str {
        match self {
            FocusedPane::Source => "source",
            FocusedPane::Ast => "AST",
            FocusedPane::Diagnostics => "diagnostics",
        }
    }
}

/// The main application state
pub struct App {
    /// The source code that was parsed
    pub source_code: String,

    /// Syntax faults, in the order they were found
    pub diagnostics: Vec<Diagnostic>,

    /// Printer output, one entry per line
    pub tree_lines: Vec<String>,

    /// Fault count per 1-based source line
    pub fault_lines: FxHashMap<usize, usize>,

    pub statement_count: usize,
    pub node_count: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub ast_scroll: usize,
    pub diagnostics_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create an explorer over a finished parse of `source_code`
    pub fn new(source_code: String, outcome: ParseOutcome) -> Self {
        let tree_lines = print_program(&outcome.program)
            .lines()
            .map(str::to_string)
            .collect();
        let node_count = NodeStats::collect(&outcome.program).total();

        let mut fault_lines = FxHashMap::default();
        for diagnostic in &outcome.diagnostics {
            *fault_lines.entry(diagnostic.line()).or_insert(0) += 1;
        }

        let status_message = if outcome.diagnostics.is_empty() {
            String::from("Parsing successful")
        } else {
            format!("Parsing completed with {} error(s)", outcome.diagnostics.len())
        };

        App {
            source_code,
            statement_count: outcome.program.statements.len(),
            diagnostics: outcome.diagnostics,
            tree_lines,
            fault_lines,
            node_count,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            ast_scroll: 0,
            diagnostics_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Diagnostics (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            &self.fault_lines,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_diagnostics_pane(
            frame,
            left_rows[1],
            &self.diagnostics,
            self.focused_pane == FocusedPane::Diagnostics,
            &mut self.diagnostics_scroll,
        );

        super::panes::render_ast_pane(
            frame,
            columns[1],
            &self.tree_lines,
            self.focused_pane == FocusedPane::Ast,
            &mut self.ast_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &super::panes::StatusRenderData {
                message: &self.status_message,
                statements: self.statement_count,
                nodes: self.node_count,
                faults: self.diagnostics.len(),
            },
        );
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Ast => &mut self.ast_scroll,
            FocusedPane::Diagnostics => &mut self.diagnostics_scroll,
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
                self.status_message = format!("Focused {} pane", self.focused_pane.name());
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
                self.status_message = format!("Focused {} pane", self.focused_pane.name());
            }
            // Offsets may overshoot here; each pane clamps its own on render
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(PAGE_SCROLL);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(PAGE_SCROLL);
            }
            _ => {}
        }
    }
}
