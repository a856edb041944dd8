//! Byte-range editing of source text.
//!
//! The include rule locates header tokens and describes each replacement as
//! an [`Edit`]; [`ByteRangeRewriter`] checks the edits and applies them
//! without disturbing any surrounding bytes.

mod rewriter;

pub use rewriter::{ByteRangeRewriter, Edit, RewriteError};
