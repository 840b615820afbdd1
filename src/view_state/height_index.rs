//! Cumulative block heights via a Fenwick tree.
//!
//! Maps between block indices and absolute row offsets: `prefix_sum` gives
//! the rows occupied up to and including a block, `lower_bound` finds the
//! block covering a row. All operations are O(log n) or better, so the
//! reader can resolve scroll offsets without walking every block.

/// Fenwick-tree index over per-block row heights.
#[derive(Debug, Clone, Default)]
pub struct HeightIndex {
    /// Fenwick tree backing storage; 0-indexed API over the usual layout.
    tree: Vec<isize>,
    /// Number of valid blocks (`len <= tree.len()`).
    len: usize,
}

impl HeightIndex {
    /// Create an index with pre-allocated capacity for `capacity` blocks.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scrollsel::view_state::height_index::HeightIndex;
    /// let index = HeightIndex::new(16);
    /// assert_eq!(index.len(), 0);
    /// assert_eq!(index.total(), 0);
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self {
            tree: vec![0; capacity],
            len: 0,
        }
    }

    /// Append a block of `height` rows, growing storage if necessary.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scrollsel::view_state::height_index::HeightIndex;
    /// let mut index = HeightIndex::new(4);
    /// index.push(3);
    /// index.push(5);
    /// assert_eq!(index.total(), 8);
    /// ```
    pub fn push(&mut self, height: usize) {
        if self.len >= self.tree.len() {
            self.tree.resize(self.tree.len().max(1) * 2, 0);
        }
        let index = self.len;
        self.len += 1;
        fenwick::array::update(&mut self.tree, index, height as isize);
    }

    /// Rows occupied by blocks `0..=index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn prefix_sum(&self, index: usize) -> usize {
        assert!(
            index < self.len,
            "block {} out of bounds (len: {})",
            index,
            self.len
        );
        fenwick::array::prefix_sum(&self.tree, index).max(0) as usize
    }

    /// The block covering the absolute `row`: the first index whose prefix
    /// sum exceeds it. `None` when `row >= total()` or the index is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scrollsel::view_state::height_index::HeightIndex;
    /// let mut index = HeightIndex::new(4);
    /// index.push(10); // rows [0..10)
    /// index.push(20); // rows [10..30)
    /// assert_eq!(index.lower_bound(9), Some(0));
    /// assert_eq!(index.lower_bound(10), Some(1));
    /// assert_eq!(index.lower_bound(30), None);
    /// ```
    pub fn lower_bound(&self, row: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        // Block i covers rows [prefix_sum(i-1), prefix_sum(i)).
        let mut left = 0;
        let mut right = self.len;
        while left < right {
            let mid = left + (right - left) / 2;
            if self.prefix_sum(mid) > row {
                right = mid;
            } else {
                left = mid + 1;
            }
        }
        (left < self.len).then_some(left)
    }

    /// Total rows over all blocks.
    pub fn total(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.prefix_sum(self.len - 1)
        }
    }

    /// Number of blocks in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the index holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove all blocks, retaining allocated capacity.
    pub fn clear(&mut self) {
        // Updates propagate past `len`, so the whole tree is zeroed.
        for slot in &mut self.tree {
            *slot = 0;
        }
        self.len = 0;
    }
}
