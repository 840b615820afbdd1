//! Sentence segmentation contract used by the highlight tracker.
//!
//! The solver core never touches text; the reader host maps the selection
//! row to a line of a block and asks a [`Segmenter`] for the enclosing
//! sentence. The contract is a plain `(text, offset) -> (start, end)`
//! interval lookup, so hosts can swap in a heavier segmentation library
//! without the tracker noticing.

/// Looks up the interval of the segment enclosing a byte offset.
pub trait Segmenter {
    /// Half-open byte interval `[start, end)` of the segment containing
    /// `offset`. `offset` is clamped into the text; the returned bounds lie
    /// on char boundaries.
    fn interval_at(&self, text: &str, offset: usize) -> (usize, usize);
}

/// Plain-text sentence segmenter.
///
/// A sentence ends after a run of terminator characters (`.`, `!`, `?`,
/// `…`), optionally followed by closing quotes or brackets, then whitespace;
/// the trailing whitespace belongs to the sentence it ends. Interior
/// periods without following whitespace (`3.14`) do not split.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceSegmenter;

impl SentenceSegmenter {
    fn is_terminator(c: char) -> bool {
        matches!(c, '.' | '!' | '?' | '…')
    }

    fn is_closer(c: char) -> bool {
        matches!(c, '"' | '\'' | ')' | ']' | '»' | '”' | '’')
    }

    /// Byte offsets at which sentences start; always includes 0.
    fn sentence_starts(text: &str) -> Vec<usize> {
        let mut starts = vec![0];
        let mut after_terminator = false;
        let mut after_break = false;
        for (i, c) in text.char_indices() {
            if Self::is_terminator(c) {
                after_terminator = true;
            } else if after_terminator && Self::is_closer(c) {
                // Closers extend the sentence past its terminator.
            } else if c.is_whitespace() {
                if after_terminator {
                    after_break = true;
                }
            } else {
                if after_break {
                    starts.push(i);
                }
                after_terminator = false;
                after_break = false;
            }
        }
        starts
    }
}

impl Segmenter for SentenceSegmenter {
    fn interval_at(&self, text: &str, offset: usize) -> (usize, usize) {
        let offset = offset.min(text.len());
        let starts = Self::sentence_starts(text);
        // starts[0] == 0, so the partition point is always >= 1.
        let idx = starts.partition_point(|&s| s <= offset);
        let start = starts[idx - 1];
        let end = starts.get(idx).copied().unwrap_or(text.len());
        (start, end)
    }
}
