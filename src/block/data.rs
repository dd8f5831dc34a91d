//! The Block type - one fixed-size piece of a split image.

use bytes::Bytes;
use std::fmt;

use super::ContentId;
use crate::config::CidAlgorithm;

/// A block cut from the source image.
///
/// The data is an owned copy; it stays valid after the source buffer is
/// dropped.
///
/// # Example
///
/// ```
/// use imgsplit::ImageSplitter;
///
/// let image: Vec<u8> = (0..16).collect();
/// let splitter = ImageSplitter::with_geometry(&image, 4, 0, 8, 1)?;
/// drop(image);
///
/// let block = splitter.block(1)?;
/// assert_eq!(block.data.as_ref(), &[8, 9, 10, 11, 12, 13, 14, 15]);
/// assert_eq!((block.width, block.height), (4, 2));
/// # Ok::<(), imgsplit::SplitError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The assembled block bytes.
    pub data: Bytes,

    /// Position of this block in production order.
    pub index: usize,

    /// Width in pixels.
    pub width: usize,

    /// Height in rows.
    pub height: usize,

    /// Digest of `data`.
    pub cid: ContentId,
}

impl Block {
    /// Returns the length of the block data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the block has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the block data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the content id.
    pub fn cid(&self) -> ContentId {
        self.cid
    }

    /// Recomputes the digest of `data` and compares it with `cid`.
    pub fn verify(&self, algorithm: CidAlgorithm) -> bool {
        algorithm.digest(&self.data) == self.cid
    }

    /// Consumes the block and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }

    /// Splits the block into (data, cid).
    pub fn into_parts(self) -> (Bytes, ContentId) {
        (self.data, self.cid)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Block#{}({} bytes, {}x{}, cid={})",
            self.index,
            self.len(),
            self.width,
            self.height,
            self.cid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(data: &'static [u8]) -> Block {
        Block {
            data: Bytes::from_static(data),
            index: 3,
            width: 2,
            height: 2,
            cid: CidAlgorithm::Sha256.digest(data),
        }
    }

    #[test]
    fn test_len() {
        let b = block(b"abcd");
        assert_eq!(b.len(), 4);
        assert!(!b.is_empty());
    }

    #[test]
    fn test_verify() {
        let mut b = block(b"abcd");
        assert!(b.verify(CidAlgorithm::Sha256));

        b.data = Bytes::from_static(b"abce");
        assert!(!b.verify(CidAlgorithm::Sha256));
    }

    #[test]
    fn test_into_parts() {
        let b = block(b"abcd");
        let cid = b.cid();
        let (data, got) = b.into_parts();
        assert_eq!(data.as_ref(), b"abcd");
        assert_eq!(got, cid);
    }

    #[test]
    fn test_display() {
        let s = block(b"abcd").to_string();
        assert!(s.starts_with("Block#3(4 bytes, 2x2"));
    }
}
