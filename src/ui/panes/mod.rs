//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: source code with syntax highlighting, focus line and error line
//! - [`tree`]: outline of the parsed or optimized tree
//! - [`trace`]: recorded compiler events with the current step selected
//! - [`output`]: emitted Python, or the diagnostic
//! - [`status`]: status bar with keybindings and outcome
//! - `utils`: shared block, scroll and selection helpers
//!
//! Each pane module exports a primary `render_*` function; panes hold no
//! state of their own beyond the scroll offsets passed in by the app.

mod utils;

pub mod output;
pub mod source;
pub mod status;
pub mod trace;
pub mod tree;

// Re-export render functions for convenience
pub use output::render_output_pane;
pub use source::{render_source_pane, SourceScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use trace::render_trace_pane;
pub use tree::render_tree_pane;
