//! Error types for imgsplit.

use crate::block::ContentId;

/// Errors that can occur while splitting an image or querying its blocks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    /// The striding geometry is unusable for the given buffer.
    ///
    /// Raised at construction only; no splitter is produced.
    #[error("invalid geometry: {message}")]
    InvalidGeometry {
        /// Description of what was invalid.
        message: String,
    },

    /// A block index was past the end of the block list.
    #[error("block index {index} out of range (block count {count})")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of blocks held by the splitter.
        count: usize,
    },

    /// No block carries the requested content id.
    #[error("no block with content id {cid}")]
    NotFound {
        /// The content id that was looked up.
        cid: ContentId,
    },
}

impl SplitError {
    pub(crate) fn geometry(message: impl Into<String>) -> Self {
        SplitError::InvalidGeometry {
            message: message.into(),
        }
    }

    /// Returns true for the recoverable "no such content id" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SplitError::NotFound { .. })
    }
}
