//! Ratatui rendering and the terminal event loop for the reader.
//!
//! The reader pane shows the wrapped blocks with the highlighted sentence
//! styled and a gutter marker on the selection row; the status bar exposes
//! the solver diagnostics (selection ratio and both edge distances) plus the
//! key bindings.

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};

use crate::state::{handle_action, relayout, KeyAction, ReaderState};

/// Columns reserved for the selection marker gutter.
const GUTTER_COLS: u16 = 2;
/// Rows reserved for the status bar.
const STATUS_ROWS: u16 = 1;

fn highlight_style() -> Style {
    Style::default().bg(Color::Yellow).fg(Color::Black)
}

fn marker_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

fn status_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Run the reader until quit; owns terminal setup and teardown.
pub fn run(mut state: ReaderState) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut state);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, state: &mut ReaderState) -> io::Result<()> {
    let size = terminal.size()?;
    let (width, rows) = text_area(size.width, size.height);
    relayout(state, width, rows);

    loop {
        terminal.draw(|frame| draw(frame, state))?;
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if let Some(action) = KeyAction::from_key(key) {
                    if handle_action(state, action) {
                        return Ok(());
                    }
                }
            }
            Event::Resize(width, height) => {
                let (width, rows) = text_area(width, height);
                relayout(state, width, rows);
            }
            _ => {}
        }
    }
}

/// Text dimensions (wrap width, rows) inside a terminal of `width x height`
/// cells, accounting for the gutter and the status bar.
fn text_area(width: u16, height: u16) -> (u16, u16) {
    (
        width.saturating_sub(GUTTER_COLS),
        height.saturating_sub(STATUS_ROWS),
    )
}

/// Draw the reader pane and the status bar.
pub fn draw(frame: &mut Frame, state: &ReaderState) {
    let [reader, status] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(STATUS_ROWS)])
            .areas(frame.area());
    frame.render_widget(Paragraph::new(reader_lines(state, reader)), reader);
    frame.render_widget(
        Paragraph::new(status_line(state)).style(status_style()),
        status,
    );
}

/// One rendered line per viewport row: gutter marker plus the wrapped text,
/// with the highlighted sentence range styled where it intersects the row.
fn reader_lines<'a>(state: &'a ReaderState, area: Rect) -> Vec<Line<'a>> {
    let layout = &state.layout;
    let selection_row = state.selection_row();
    let mut out = Vec::with_capacity(usize::from(area.height));

    for viewport_row in 0..area.height {
        let row = layout.scroll_row() + usize::from(viewport_row);
        let marker = if selection_row == Some(row) {
            Span::styled("▌ ", marker_style())
        } else {
            Span::raw("  ")
        };
        let mut spans = vec![marker];

        if let Some((block, span)) = layout.line_at_row(row) {
            let text = layout.block_text(block);
            match &state.highlight {
                Some(h) if h.block == block && h.start < span.end && span.start < h.end => {
                    let from = h.start.max(span.start);
                    let to = h.end.min(span.end);
                    if from > span.start {
                        spans.push(Span::raw(&text[span.start..from]));
                    }
                    spans.push(Span::styled(&text[from..to], highlight_style()));
                    if to < span.end {
                        spans.push(Span::raw(&text[to..span.end]));
                    }
                }
                _ => spans.push(Span::raw(span.slice(text))),
            }
        }
        out.push(Line::from(spans));
    }
    out
}

/// Status bar: solver diagnostics plus the key bindings.
fn status_line(state: &ReaderState) -> Line<'static> {
    let selection = match state.selection.selection_y {
        Some(y) => format!("{y:.2}"),
        None => "-".to_string(),
    };
    Line::from(format!(
        " sel {selection}  top {top}  bottom {bottom}  mid {mid:.2}  stiff {stiff:.2}  \
         [j/k space g/G scroll  m/M s/S tune  q quit]",
        top = state.selection.top_distance,
        bottom = state.selection.bottom_distance,
        mid = state.params.selection_y_mid,
        stiff = state.params.stiffness,
    ))
}
