//! Explorer application state and logic

use crate::config::CompilerConfig;
use crate::errors::CompileError;
use crate::parser::Parser;
use crate::pipeline;
use crate::trace::Event;
use crate::tree;
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use super::panes::{self, SourceScrollState, StatusRenderData};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tree,
    Trace,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> output -> tree -> trace)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Trace,
            FocusedPane::Trace => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Trace,
            FocusedPane::Output => FocusedPane::Source,
            FocusedPane::Tree => FocusedPane::Output,
            FocusedPane::Trace => FocusedPane::Tree,
        }
    }
}

/// The main application state
pub struct App {
    /// The source code being compiled
    pub source_code: String,

    /// Outlines of the trees each phase produced (None = phase never ran)
    pub parsed_outline: Option<String>,
    pub optimized_outline: Option<String>,

    /// Emitted Python, on success
    pub python: Option<String>,

    /// Diagnostic that stopped compilation
    pub error: Option<CompileError>,

    /// Events recorded during compilation, in order
    pub events: Vec<Event>,

    /// Index of the selected event
    pub step: usize,

    /// Whether the tree pane shows the optimized tree
    pub show_optimized: bool,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: SourceScrollState,
    pub tree_scroll: usize,
    pub trace_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Compile `source_code` with a recording sink and build the explorer state
    pub fn new(source_code: String, config: &CompilerConfig) -> Self {
        let mut events = Vec::new();
        let outcome = pipeline::compile(&source_code, config, &mut events);

        let (parsed, optimized, python, error) = match outcome {
            Ok(compilation) => (
                Some(compilation.parsed),
                Some(compilation.optimized),
                Some(compilation.python),
                None,
            ),
            Err(err) => {
                // Later phases fail on a tree that did parse
                let parsed = match err {
                    CompileError::Syntax(_) => None,
                    _ => Parser::from_source(&source_code).parse_program().ok(),
                };
                (parsed, None, None, Some(err))
            }
        };

        let status_message = match &error {
            None => format!("Compiled successfully ({} events)", events.len()),
            Some(err) => format!("Compilation stopped during {}", err.phase()),
        };

        App {
            source_code,
            parsed_outline: parsed.as_ref().map(tree::render),
            optimized_outline: optimized.as_ref().map(tree::render),
            python,
            error,
            events,
            step: 0,
            show_optimized: false,
            focused_pane: FocusedPane::Source,
            source_scroll: SourceScrollState::default(),
            tree_scroll: 0,
            trace_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let event::Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Source line of the selected event, if it has one
    pub fn focus_line(&self) -> Option<usize> {
        self.events.get(self.step).and_then(Event::line)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        // Right column: Tree (top) | Trace (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        let focus_line = self.focus_line();
        let error_line = self.error.as_ref().and_then(CompileError::line);

        panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            focus_line.or(error_line),
            error_line,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_output_pane(
            frame,
            left_rows[1],
            self.python.as_deref(),
            self.error.as_ref(),
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        let outline = if self.show_optimized {
            self.optimized_outline.as_deref()
        } else {
            self.parsed_outline.as_deref()
        };
        panes::render_tree_pane(
            frame,
            right_rows[0],
            outline,
            self.show_optimized,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        panes::render_trace_pane(
            frame,
            right_rows[1],
            &self.events,
            self.step,
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                current_step: self.step,
                total_steps: self.events.len(),
                failed_phase: self.error.as_ref().map(CompileError::phase),
                show_optimized: self.show_optimized,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => self.step_backward(),
            KeyCode::Right => self.step_forward(),
            KeyCode::Enter => {
                self.step = self.events.len().saturating_sub(1);
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.step = 0;
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.show_optimized = !self.show_optimized;
                self.tree_scroll = 0;
                self.status_message = if self.show_optimized {
                    "Showing optimized tree".to_string()
                } else {
                    "Showing parsed tree".to_string()
                };
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the focus line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                    self.source_scroll.offset = self.source_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Tree => self.tree_scroll = self.tree_scroll.saturating_sub(1),
                FocusedPane::Trace => self.trace_scroll = self.trace_scroll.saturating_sub(1),
                FocusedPane::Output => self.output_scroll = self.output_scroll.saturating_sub(1),
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                    self.source_scroll.offset = self.source_scroll.offset.saturating_add(1);
                }
                FocusedPane::Tree => self.tree_scroll = self.tree_scroll.saturating_add(1),
                FocusedPane::Trace => self.trace_scroll = self.trace_scroll.saturating_add(1),
                FocusedPane::Output => self.output_scroll = self.output_scroll.saturating_add(1),
            },
            _ => {}
        }
    }

    fn step_forward(&mut self) {
        if self.step + 1 < self.events.len() {
            self.step += 1;
            self.status_message = "Stepped forward".to_string();
        } else {
            self.status_message = "Cannot step forward: at last event".to_string();
        }
    }

    fn step_backward(&mut self) {
        if self.step > 0 {
            self.step -= 1;
            self.status_message = "Stepped backward".to_string();
        } else {
            self.status_message = "Cannot step backward: at first event".to_string();
        }
    }
}
