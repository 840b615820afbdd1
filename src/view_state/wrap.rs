//! Display-width-aware wrapping that preserves byte offsets.
//!
//! The reader needs every rendered row to map back to a byte range of its
//! block so the selection row can be resolved to text offsets for the
//! segmenter. General wrapping crates return owned lines and lose that
//! mapping, hence spans.

use unicode_width::UnicodeWidthChar;

/// Half-open byte range of one wrapped line within its block's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    /// Byte offset of the first char of the line.
    pub start: usize,
    /// Byte offset one past the last char of the line.
    pub end: usize,
}

impl LineSpan {
    /// The line's text within `text`.
    ///
    /// # Panics
    ///
    /// Panics if the span does not lie on char boundaries of `text`, i.e.
    /// when it was produced from different text.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// Midpoint byte offset, used as the segment lookup anchor.
    pub fn midpoint(&self) -> usize {
        self.start + (self.end - self.start) / 2
    }
}

/// Wrap `text` to `width` display columns, returning one span per line.
///
/// Greedy word wrap over whitespace-separated words; words wider than the
/// line are hard-broken by char. `\n` forces a break. Always returns at
/// least one (possibly empty) line, and every line's display width fits in
/// `width` (treated as at least 1).
pub fn wrap_spans(text: &str, width: u16) -> Vec<LineSpan> {
    let max = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut segment_start = 0;
    for segment in text.split('\n') {
        wrap_segment(text, segment_start, segment_start + segment.len(), max, &mut lines);
        segment_start += segment.len() + 1;
    }
    lines
}

/// Wrap one newline-free segment `text[start..end]`.
fn wrap_segment(text: &str, start: usize, end: usize, max: usize, out: &mut Vec<LineSpan>) {
    // Open line as (start, end, display width).
    let mut current: Option<(usize, usize, usize)> = None;

    for (word_start, word_end, word_width) in words(text, start, end) {
        if let Some((line_start, line_end, line_width)) = current {
            if line_width + 1 + word_width <= max {
                current = Some((line_start, word_end, line_width + 1 + word_width));
                continue;
            }
            out.push(LineSpan {
                start: line_start,
                end: line_end,
            });
            current = None;
        }

        if word_width <= max {
            current = Some((word_start, word_end, word_width));
        } else {
            // Hard-break an overlong word; the trailing chunk stays open so
            // following words can share its line.
            let mut chunk_start = word_start;
            let mut chunk_width = 0usize;
            let mut chunk_end = word_start;
            for (i, c) in text[word_start..word_end].char_indices() {
                let char_width = c.width().unwrap_or(0);
                if chunk_width + char_width > max && chunk_width > 0 {
                    out.push(LineSpan {
                        start: chunk_start,
                        end: word_start + i,
                    });
                    chunk_start = word_start + i;
                    chunk_width = 0;
                }
                chunk_width += char_width;
                chunk_end = word_start + i + c.len_utf8();
            }
            current = Some((chunk_start, chunk_end, chunk_width));
        }
    }

    match current {
        Some((line_start, line_end, _)) => out.push(LineSpan {
            start: line_start,
            end: line_end,
        }),
        // Blank segment: one empty line keeps the row <-> span mapping total.
        None => out.push(LineSpan { start, end: start }),
    }
}

/// Words (maximal non-whitespace runs) in `text[start..end]` as
/// `(start, end, display_width)` byte-offset triples.
fn words(text: &str, start: usize, end: usize) -> Vec<(usize, usize, usize)> {
    let mut out = Vec::new();
    let mut word: Option<(usize, usize, usize)> = None;
    for (i, c) in text[start..end].char_indices() {
        let at = start + i;
        if c.is_whitespace() {
            if let Some(w) = word.take() {
                out.push(w);
            }
        } else {
            let char_width = c.width().unwrap_or(0);
            word = match word {
                Some((word_start, _, word_width)) => {
                    Some((word_start, at + c.len_utf8(), word_width + char_width))
                }
                None => Some((at, at + c.len_utf8(), char_width)),
            };
        }
    }
    if let Some(w) = word {
        out.push(w);
    }
    out
}
