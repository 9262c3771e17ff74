//! Phase explorer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: explorer state, keyboard event loop, pane focus, trace stepping
//! - **[`panes`]**: render functions for each visible pane (source, tree,
//!   trace, output, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point is [`App`]: construct it with the source and a
//! [`CompilerConfig`], then call [`App::run`] to start the event loop.
//!
//! [`CompilerConfig`]: crate::config::CompilerConfig
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
