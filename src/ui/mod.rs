//! Terminal explorer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: explorer state, keyboard event loop, pane focus and scrolling
//! - **[`panes`]**: render functions for each visible pane (source, AST,
//!   diagnostics, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it from the source text
//! and its [`ParseOutcome`] and call [`App::run`] to start the event loop.
//!
//! [`ParseOutcome`]: crate::parser::ParseOutcome
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
