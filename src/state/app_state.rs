//! Reader state: layout, solver parameters, and the tracked highlight.

use crate::model::{SelectionParams, SelectionResult};
use crate::segment::SentenceSegmenter;
use crate::view_state::TextListLayout;

/// Currently highlighted sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    /// Block containing the sentence.
    pub block: usize,
    /// Start byte offset within the block text.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

/// Top-level state of the reader demo.
#[derive(Debug)]
pub struct ReaderState {
    /// Virtualized block layout.
    pub layout: TextListLayout,
    /// Solver parameters; mutable through the tweak keys.
    pub params: SelectionParams,
    /// Most recent solver output.
    pub selection: SelectionResult,
    /// Sentence lookup used by the highlight tracker.
    pub segmenter: SentenceSegmenter,
    /// Highlight retained across scroll events; cleared only when the
    /// selection becomes undefined.
    pub highlight: Option<Highlight>,
}

impl ReaderState {
    /// State over `blocks` with `params`; no layout yet.
    pub fn new(blocks: Vec<String>, params: SelectionParams) -> Self {
        Self {
            layout: TextListLayout::new(blocks),
            params,
            selection: SelectionResult::default(),
            segmenter: SentenceSegmenter,
            highlight: None,
        }
    }

    /// Absolute row of the selection point, `None` while undefined.
    pub fn selection_row(&self) -> Option<usize> {
        self.selection
            .selection_y
            .map(|y| self.layout.row_at_ratio(y))
    }
}
