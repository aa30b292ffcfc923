//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source code with syntax highlighting and fault line markers
//! - [`ast`]: Printer output of the parsed tree
//! - [`diagnostics`]: Syntax faults with quoted source and caret
//! - [`status`]: Status bar with keybindings and parse summary
//! - `utils`: Pane frame and scroll helpers
//!
//! Each pane module exports a primary `render_*` function that takes the
//! frame, its area, the data to show, the focus flag and a mutable scroll
//! offset which it clamps to the content.

mod utils;

pub mod ast;
pub mod diagnostics;
pub mod source;
pub mod status;

// Re-export render functions for convenience
pub use ast::render_ast_pane;
pub use diagnostics::render_diagnostics_pane;
pub use source::render_source_pane;
pub use status::{render_status_bar, StatusRenderData};
