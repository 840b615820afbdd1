//! Input handling: scroll actions, parameter tweaks, highlight updates.
//!
//! Pure state transforms in the scroll-event path: a key maps to a row
//! delta, the layout clamps it, and the solver runs only when the scroll
//! position actually changed.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::app_state::{Highlight, ReaderState};
use crate::segment::Segmenter;
use crate::solver::solve;

/// Step applied by the mid/stiffness tweak keys.
const TWEAK_STEP: f64 = 0.05;

/// Input actions the reader responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Scroll up one row.
    ScrollUp,
    /// Scroll down one row.
    ScrollDown,
    /// Scroll up one viewport (minus one row of overlap).
    PageUp,
    /// Scroll down one viewport (minus one row of overlap).
    PageDown,
    /// Jump to the top of the content.
    Top,
    /// Jump to the bottom of the content.
    Bottom,
    /// Decrease `selection_y_mid`.
    MidDown,
    /// Increase `selection_y_mid`.
    MidUp,
    /// Decrease `stiffness`.
    StiffnessDown,
    /// Increase `stiffness`.
    StiffnessUp,
    /// Leave the reader.
    Quit,
}

impl KeyAction {
    /// Map a terminal key event to an action.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Self::ScrollUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Self::ScrollDown),
            KeyCode::PageUp => Some(Self::PageUp),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(Self::PageDown),
            KeyCode::Home | KeyCode::Char('g') => Some(Self::Top),
            KeyCode::End | KeyCode::Char('G') => Some(Self::Bottom),
            KeyCode::Char('m') => Some(Self::MidDown),
            KeyCode::Char('M') => Some(Self::MidUp),
            KeyCode::Char('s') => Some(Self::StiffnessDown),
            KeyCode::Char('S') => Some(Self::StiffnessUp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Apply an action; returns `true` when the reader should quit.
pub fn handle_action(state: &mut ReaderState, action: KeyAction) -> bool {
    let page = state.layout.viewport_rows().max(2) as isize - 1;
    match action {
        KeyAction::Quit => return true,
        KeyAction::ScrollUp => scroll_by(state, -1),
        KeyAction::ScrollDown => scroll_by(state, 1),
        KeyAction::PageUp => scroll_by(state, -page),
        KeyAction::PageDown => scroll_by(state, page),
        KeyAction::Top => scroll_to(state, 0),
        KeyAction::Bottom => scroll_to(state, usize::MAX),
        KeyAction::MidDown => tweak_mid(state, -TWEAK_STEP),
        KeyAction::MidUp => tweak_mid(state, TWEAK_STEP),
        KeyAction::StiffnessDown => tweak_stiffness(state, -TWEAK_STEP),
        KeyAction::StiffnessUp => tweak_stiffness(state, TWEAK_STEP),
    }
    false
}

/// Apply new viewport dimensions (wrap width, rows) and recompute.
pub fn relayout(state: &mut ReaderState, width: u16, rows: u16) {
    state.layout.relayout(width, rows);
    refresh_selection(state);
}

/// Probe, compose, and retarget the highlight for the current frame.
pub fn refresh_selection(state: &mut ReaderState) {
    let mut sizer = state.layout.sizer();
    state.selection = solve(&state.layout, &mut sizer, &state.params);
    update_highlight(state);
    debug!(
        selection = ?state.selection.selection_y,
        top = %state.selection.top_distance,
        bottom = %state.selection.bottom_distance,
        "selection updated"
    );
}

fn scroll_by(state: &mut ReaderState, delta: isize) {
    // Only a delta that actually moved the viewport re-runs the solver.
    if state.layout.scroll_by(delta) != 0 {
        refresh_selection(state);
    }
}

fn scroll_to(state: &mut ReaderState, row: usize) {
    let before = state.layout.scroll_row();
    state.layout.scroll_to(row);
    if state.layout.scroll_row() != before {
        refresh_selection(state);
    }
}

fn tweak_mid(state: &mut ReaderState, delta: f64) {
    state.params.selection_y_mid = (state.params.selection_y_mid + delta).clamp(0.0, 1.0);
    refresh_selection(state);
}

fn tweak_stiffness(state: &mut ReaderState, delta: f64) {
    state.params.stiffness = (state.params.stiffness + delta).clamp(0.0, 1.0);
    refresh_selection(state);
}

/// Move the highlight to the sentence under the selection row.
///
/// Spacing rows between blocks keep the previous highlight; an undefined
/// selection clears it.
fn update_highlight(state: &mut ReaderState) {
    let Some(row) = state.selection_row() else {
        state.highlight = None;
        return;
    };
    let hit = state
        .layout
        .line_at_row(row)
        .or_else(|| state.layout.line_at_row(row.saturating_sub(1)));
    let Some((block, span)) = hit else {
        return;
    };
    let (start, end) = state
        .segmenter
        .interval_at(state.layout.block_text(block), span.midpoint());
    let next = Highlight { block, start, end };
    if state.highlight.as_ref() != Some(&next) {
        debug!(block, start, end, "highlight moved");
        state.highlight = Some(next);
    }
}
