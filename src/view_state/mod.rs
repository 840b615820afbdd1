//! Reader-host view state: wrapped text layout over a virtualized block list.

pub mod height_index;
pub mod text_layout;
pub mod wrap;

pub use text_layout::{blocks_from_text, BlockSizer, TextListLayout};
pub use wrap::LineSpan;
