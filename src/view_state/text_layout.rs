//! The reader's virtualized block layout.
//!
//! Holds the text blocks, their wrapped line spans at the current width, and
//! cumulative row heights. Implements the solver's [`ListLayout`] view over
//! the laid-out (visible) blocks and hands out a [`BlockSizer`] for phantom
//! measurement of off-screen blocks.
//!
//! One terminal row plays the role of one content pixel throughout.

use super::height_index::HeightIndex;
use super::wrap::{wrap_spans, LineSpan};
use crate::solver::{ItemBounds, ItemSizer, ListLayout};

/// Blank rows rendered after each block.
const BLOCK_SPACING: usize = 1;

/// Virtualized list of text blocks wrapped to a terminal viewport.
#[derive(Debug, Clone)]
pub struct TextListLayout {
    blocks: Vec<String>,
    /// Wrapped line spans per block; empty until the first relayout.
    lines: Vec<Vec<LineSpan>>,
    heights: HeightIndex,
    width: u16,
    viewport_rows: u16,
    scroll_row: usize,
}

impl TextListLayout {
    /// A layout over `blocks` with no rows yet; call [`Self::relayout`] once
    /// the viewport dimensions are known.
    pub fn new(blocks: Vec<String>) -> Self {
        let capacity = blocks.len();
        Self {
            blocks,
            lines: Vec::new(),
            heights: HeightIndex::new(capacity),
            width: 0,
            viewport_rows: 0,
            scroll_row: 0,
        }
    }

    /// True once a layout pass has produced rows.
    pub fn is_laid_out(&self) -> bool {
        self.width > 0 && self.viewport_rows > 0 && !self.blocks.is_empty()
    }

    /// Re-wrap every block for a new viewport, clamping the scroll offset
    /// into the new row count.
    pub fn relayout(&mut self, width: u16, viewport_rows: u16) {
        self.width = width;
        self.viewport_rows = viewport_rows;
        self.lines.clear();
        self.heights.clear();
        for block in &self.blocks {
            let spans = wrap_spans(block, width);
            self.heights.push(spans.len() + BLOCK_SPACING);
            self.lines.push(spans);
        }
        self.scroll_row = self.scroll_row.min(self.max_scroll_row());
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Text of block `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn block_text(&self, index: usize) -> &str {
        &self.blocks[index]
    }

    /// Wrapped line spans of block `index`; empty before layout.
    pub fn block_lines(&self, index: usize) -> &[LineSpan] {
        self.lines.get(index).map_or(&[], Vec::as_slice)
    }

    /// Total content height in rows (block spacing included).
    pub fn total_rows(&self) -> usize {
        self.heights.total()
    }

    /// Current scroll offset: the absolute row at the viewport top.
    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    /// Viewport height in rows.
    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    /// Greatest reachable scroll offset.
    pub fn max_scroll_row(&self) -> usize {
        self.total_rows()
            .saturating_sub(usize::from(self.viewport_rows))
    }

    /// Scroll by `delta` rows, clamped to the content; returns the delta
    /// actually applied.
    pub fn scroll_by(&mut self, delta: isize) -> isize {
        let target = if delta < 0 {
            self.scroll_row.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll_row
                .saturating_add(delta.unsigned_abs())
                .min(self.max_scroll_row())
        };
        let applied = target as isize - self.scroll_row as isize;
        self.scroll_row = target;
        applied
    }

    /// Jump to an absolute scroll offset, clamped to the content.
    pub fn scroll_to(&mut self, row: usize) {
        self.scroll_row = row.min(self.max_scroll_row());
    }

    /// First absolute row of block `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= block_count()` or before layout.
    pub fn block_first_row(&self, index: usize) -> usize {
        if index == 0 {
            0
        } else {
            self.heights.prefix_sum(index - 1)
        }
    }

    /// Block and line span at an absolute row; `None` on the spacing rows
    /// between blocks or beyond the content.
    pub fn line_at_row(&self, row: usize) -> Option<(usize, LineSpan)> {
        let block = self.heights.lower_bound(row)?;
        let line = row - self.block_first_row(block);
        self.lines
            .get(block)?
            .get(line)
            .copied()
            .map(|span| (block, span))
    }

    /// Absolute row closest to a normalized viewport position.
    pub fn row_at_ratio(&self, ratio: f64) -> usize {
        let rows = usize::from(self.viewport_rows);
        if rows == 0 {
            return self.scroll_row;
        }
        let within = (f64::from(self.viewport_rows) * ratio) as usize;
        self.scroll_row + within.min(rows - 1)
    }

    /// Phantom sizer measuring blocks off-screen at the current width.
    pub fn sizer(&self) -> BlockSizer<'_> {
        BlockSizer {
            blocks: &self.blocks,
            width: self.width,
        }
    }

    fn visible_range(&self) -> Option<(usize, usize)> {
        if !self.is_laid_out() || self.total_rows() == 0 {
            return None;
        }
        let first = self.heights.lower_bound(self.scroll_row)?;
        let bottom_row = self.scroll_row + usize::from(self.viewport_rows) - 1;
        let last = self
            .heights
            .lower_bound(bottom_row)
            .unwrap_or(self.block_count() - 1);
        Some((first, last))
    }
}

impl ListLayout for TextListLayout {
    fn item_count(&self) -> usize {
        self.blocks.len()
    }

    fn first_visible(&self) -> Option<usize> {
        self.visible_range().map(|(first, _)| first)
    }

    fn last_visible(&self) -> Option<usize> {
        self.visible_range().map(|(_, last)| last)
    }

    fn item_bounds(&self, index: usize) -> Option<ItemBounds> {
        let (first, last) = self.visible_range()?;
        if index < first || index > last {
            return None;
        }
        Some(ItemBounds {
            y: self.block_first_row(index) as i32 - self.scroll_row as i32,
            height: (self.lines[index].len() + BLOCK_SPACING) as i32,
        })
    }

    fn viewport_height(&self) -> i32 {
        i32::from(self.viewport_rows)
    }
}

/// Measures blocks without binding them into the visible layout: wraps the
/// block's text at the layout width and counts rows.
///
/// Obtained from [`TextListLayout::sizer`]; borrows the blocks immutably, so
/// the layout stays readable while the probe runs.
#[derive(Debug)]
pub struct BlockSizer<'a> {
    blocks: &'a [String],
    width: u16,
}

impl ItemSizer for BlockSizer<'_> {
    fn measure(&mut self, index: usize) -> i32 {
        (wrap_spans(&self.blocks[index], self.width).len() + BLOCK_SPACING) as i32
    }
}

/// Split source text into blocks on blank lines, reflowing each block's
/// internal whitespace to single spaces.
pub fn blocks_from_text(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(|block| {
            block
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|block| !block.is_empty())
        .collect()
}
