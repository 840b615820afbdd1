//! End-to-end: the real wrapped-text layout driving the solver through a
//! whole scroll traversal, the way the reader does per key press.

use scrollsel::model::{Edge, EdgeDistance, SelectionParams};
use scrollsel::state::{handle_action, relayout, KeyAction, ReaderState};
use scrollsel::view_state::blocks_from_text;

fn demo_blocks() -> Vec<String> {
    (0..12)
        .map(|i| {
            format!(
                "Block {i} opens here. Block {i} continues with more words. Block {i} closes."
            )
        })
        .collect()
}

fn demo_state() -> ReaderState {
    let params = SelectionParams::new(10, 10, 0.5, 0.5).expect("valid params");
    let mut state = ReaderState::new(demo_blocks(), params);
    relayout(&mut state, 20, 8);
    state
}

#[test]
fn selection_traverses_the_document_monotonically() {
    let mut state = demo_state();

    let mut ys = vec![state.selection.selection_y.expect("defined at top")];
    while state.layout.scroll_row() < state.layout.max_scroll_row() {
        handle_action(&mut state, KeyAction::ScrollDown);
        ys.push(state.selection.selection_y.expect("defined while scrolling"));
    }

    assert!(ys[0].abs() < 1e-9, "top of document should select 0, got {}", ys[0]);
    let last = ys.last().copied().expect("at least one sample");
    assert!(
        (last - 1.0).abs() < 1e-9,
        "bottom of document should select 1, got {last}"
    );
    assert!(
        ys.iter().any(|y| (y - 0.5).abs() < 1e-12),
        "interior scrolling should rest exactly at mid"
    );
    for pair in ys.windows(2) {
        assert!(
            pair[1] >= pair[0] - 1e-9,
            "selection moved backwards: {} -> {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn interior_scrolling_reports_both_sentinels() {
    let mut state = demo_state();
    let total = state.layout.total_rows();
    let viewport = usize::from(state.layout.viewport_rows());
    assert!(
        total > 2 * 10 + viewport,
        "fixture must be tall enough to have an interior"
    );

    // Deep enough that neither edge is within its 10-row range.
    for _ in 0..12 {
        handle_action(&mut state, KeyAction::ScrollDown);
    }
    assert_eq!(state.selection.top_distance, EdgeDistance::OutOfRange(Edge::Top));
    assert_eq!(
        state.selection.bottom_distance,
        EdgeDistance::OutOfRange(Edge::Bottom)
    );
    assert_eq!(state.selection.selection_y, Some(0.5));
}

#[test]
fn top_of_document_highlights_the_opening_sentence() {
    let state = demo_state();
    let highlight = state.highlight.clone().expect("highlight at top");
    assert_eq!(highlight.block, 0);
    let text = state.layout.block_text(0);
    assert_eq!(&text[highlight.start..highlight.end], "Block 0 opens here. ");
}

#[test]
fn bottom_of_document_highlights_the_last_block() {
    let mut state = demo_state();
    handle_action(&mut state, KeyAction::Bottom);
    assert_eq!(state.selection.selection_y, Some(1.0));
    let highlight = state.highlight.clone().expect("highlight at bottom");
    assert_eq!(highlight.block, state.layout.block_count() - 1);
}

#[test]
fn narrowing_the_viewport_keeps_the_selection_defined() {
    let mut state = demo_state();
    for _ in 0..5 {
        handle_action(&mut state, KeyAction::ScrollDown);
    }
    relayout(&mut state, 11, 5);
    assert!(state.selection.selection_y.is_some());
    relayout(&mut state, 35, 20);
    assert!(state.selection.selection_y.is_some());
}

#[test]
fn empty_document_has_no_selection() {
    let params = SelectionParams::default();
    let mut state = ReaderState::new(blocks_from_text(""), params);
    relayout(&mut state, 20, 8);
    assert_eq!(state.selection.selection_y, None);
    assert_eq!(state.selection.top_distance, EdgeDistance::Unknown);
    assert_eq!(state.selection.bottom_distance, EdgeDistance::Unknown);
    assert_eq!(state.highlight, None);
}
