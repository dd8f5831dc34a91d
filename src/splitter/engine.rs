//! ImageSplitter - eager split of one image buffer into content-addressed blocks.
//!
//! Construction runs the whole split; every query afterwards is a read over
//! the precomputed blocks.
//!
//! # Example
//!
//! ```
//! use imgsplit::{ImageSplitter, SplitConfig};
//!
//! let image: Vec<u8> = (0..16).collect();
//! let splitter = ImageSplitter::new(&image, SplitConfig::new(4, 0, 8, 1)?)?;
//!
//! assert_eq!(splitter.part_count(), 2);
//! assert_eq!(splitter.part(0)?.as_ref(), &[0, 1, 2, 3, 4, 5, 6, 7]);
//!
//! let cid = splitter.part_cid(1)?;
//! assert_eq!(splitter.index_for_cid(&cid)?, 1);
//! # Ok::<(), imgsplit::SplitError>(())
//! ```

use bytes::Bytes;
use tracing::{debug, trace, warn};

use super::geometry::Geometry;
use crate::block::{Block, ContentId};
use crate::config::SplitConfig;
use crate::error::SplitError;

/// Splits an image buffer into fixed-size blocks and indexes them by content id.
///
/// Blocks are produced in ascending output offset order and never change
/// after construction, so a shared `&ImageSplitter` can be read from any
/// number of threads.
#[derive(Debug, Clone)]
pub struct ImageSplitter {
    config: SplitConfig,
    image_size: usize,
    blocks: Vec<Block>,
}

impl ImageSplitter {
    /// Splits `buffer` according to `config`.
    ///
    /// Fails with `InvalidGeometry` when the buffer length is not a multiple
    /// of the block length, or when a block would read outside the buffer.
    /// No blocks are kept on failure.
    pub fn new(buffer: &[u8], config: SplitConfig) -> Result<Self, SplitError> {
        let image_size = buffer.len();
        let block_length = config.block_length();

        let geometry =
            Geometry::new(&config).inspect_err(|e| warn!(error = %e, "rejected split config"))?;

        if image_size % block_length != 0 {
            warn!(image_size, block_length, "image size not divisible by block length");
            return Err(SplitError::geometry(format!(
                "image size {image_size} is not evenly divisible by block length {block_length}"
            )));
        }

        let width = config.block_width();
        let height = config.rows_per_block();
        let algorithm = config.cid_algorithm();

        let mut blocks = Vec::with_capacity(image_size / block_length);
        for (index, output_offset) in (0..image_size).step_by(block_length).enumerate() {
            let segments = geometry
                .segments(output_offset, image_size)
                .inspect_err(|e| warn!(index, error = %e, "block falls outside image"))?;

            let mut data = Vec::with_capacity(block_length);
            for range in segments {
                data.extend_from_slice(&buffer[range]);
            }

            let cid = algorithm.digest(&data);
            trace!(index, output_offset, %cid, "split block");

            blocks.push(Block {
                data: Bytes::from(data),
                index,
                width,
                height,
                cid,
            });
        }

        debug!(
            image_size,
            blocks = blocks.len(),
            block_stride = config.block_stride(),
            line_stride = config.line_stride(),
            block_length,
            "image split"
        );

        Ok(Self {
            config,
            image_size,
            blocks,
        })
    }

    /// Convenience constructor taking the geometry as plain values.
    pub fn with_geometry(
        buffer: &[u8],
        block_stride: usize,
        line_stride: usize,
        block_length: usize,
        channels: usize,
    ) -> Result<Self, SplitError> {
        let config = SplitConfig::new(block_stride, line_stride, block_length, channels)?;
        Self::new(buffer, config)
    }

    /// Returns the block at `part`.
    pub fn block(&self, part: usize) -> Result<&Block, SplitError> {
        self.blocks.get(part).ok_or(SplitError::IndexOutOfRange {
            index: part,
            count: self.blocks.len(),
        })
    }

    /// Returns the bytes of the block at `part`.
    pub fn part(&self, part: usize) -> Result<&Bytes, SplitError> {
        self.block(part).map(|b| &b.data)
    }

    /// Returns the byte length of the block at `part`.
    pub fn part_size(&self, part: usize) -> Result<usize, SplitError> {
        self.block(part).map(Block::len)
    }

    /// Returns the width in pixels of the block at `part`.
    pub fn part_width(&self, part: usize) -> Result<usize, SplitError> {
        self.block(part).map(|b| b.width)
    }

    /// Returns the height in rows of the block at `part`.
    pub fn part_height(&self, part: usize) -> Result<usize, SplitError> {
        self.block(part).map(|b| b.height)
    }

    /// Returns the row stride of the block at `part`, in pixels.
    ///
    /// Blocks are stored tightly packed, so this equals the width.
    pub fn part_stride(&self, part: usize) -> Result<usize, SplitError> {
        self.part_width(part)
    }

    /// Returns the content id of the block at `part`.
    pub fn part_cid(&self, part: usize) -> Result<ContentId, SplitError> {
        self.block(part).map(Block::cid)
    }

    /// Returns the index of the first block whose content id equals `cid`.
    pub fn find_cid(&self, cid: &ContentId) -> Option<usize> {
        self.blocks.iter().position(|b| b.cid == *cid)
    }

    /// Like [`find_cid`](Self::find_cid), but reports a miss as `NotFound`.
    pub fn index_for_cid(&self, cid: &ContentId) -> Result<usize, SplitError> {
        self.find_cid(cid).ok_or(SplitError::NotFound { cid: *cid })
    }

    /// Returns the number of blocks.
    pub fn part_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns the byte length of the source image.
    pub fn image_size(&self) -> usize {
        self.image_size
    }

    /// Returns the configuration used for the split.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Returns all blocks in production order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterates over blocks in production order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Iterates over content ids in production order.
    pub fn cids(&self) -> impl Iterator<Item = ContentId> + '_ {
        self.blocks.iter().map(Block::cid)
    }

    /// Rehashes every block and returns the indices whose id no longer matches.
    pub fn verify_all(&self) -> Vec<usize> {
        let algorithm = self.config.cid_algorithm();
        self.blocks
            .iter()
            .filter(|b| !b.verify(algorithm))
            .map(|b| b.index)
            .collect()
    }

    /// Consumes the splitter and returns its blocks.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}

impl<'a> IntoIterator for &'a ImageSplitter {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl IntoIterator for ImageSplitter {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}
