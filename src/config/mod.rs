//! Configuration for splitting behavior.
//!
//! This module provides types to configure how an image buffer is cut:
//!
//! - [`SplitConfig`] - Striding geometry of the source buffer and output blocks
//! - [`CidAlgorithm`] - Digest used for block content ids
//!
//! # Example
//!
//! ```
//! use imgsplit::{CidAlgorithm, SplitConfig};
//!
//! // 4-byte rows, no padding, two rows per block, one channel
//! let config = SplitConfig::new(4, 0, 8, 1)?;
//! assert_eq!(config.rows_per_block(), 2);
//!
//! // 64x64 RGBA image cut into 16x16 tiles
//! let tiles = SplitConfig::for_tiles(64, 64, 4, 16, 16)?
//!     .with_cid_algorithm(CidAlgorithm::Sha256);
//! assert_eq!(tiles.block_stride(), 64);
//! assert_eq!(tiles.line_stride(), 192);
//! # Ok::<(), imgsplit::SplitError>(())
//! ```

use crate::block::ContentId;
use crate::error::SplitError;

/// Striding geometry for [`ImageSplitter`](crate::ImageSplitter).
///
/// The source buffer is read as a sequence of payload segments of
/// `block_stride` bytes, each followed by `line_stride` bytes that belong to
/// no block. Every output block is `block_length` bytes, assembled from
/// `block_length / block_stride` consecutive segments.
///
/// Strides, length and channel count must be non-zero. Consistency of the
/// geometry with the actual buffer layout is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitConfig {
    block_stride: usize,
    line_stride: usize,
    block_length: usize,
    channels: usize,
    cid_algorithm: CidAlgorithm,
}

impl SplitConfig {
    /// Creates a new configuration.
    ///
    /// Returns `InvalidGeometry` if `block_stride`, `block_length` or
    /// `channels` is zero.
    pub fn new(
        block_stride: usize,
        line_stride: usize,
        block_length: usize,
        channels: usize,
    ) -> Result<Self, SplitError> {
        let config = Self {
            block_stride,
            line_stride,
            block_length,
            channels,
            cid_algorithm: CidAlgorithm::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Derives the geometry that cuts a row-major image into a grid of tiles.
    ///
    /// Each tile is `tile_width x tile_height` pixels. The line stride skips
    /// the rest of the image row, so blocks come out left to right, then top
    /// to bottom.
    pub fn for_tiles(
        image_width: usize,
        image_height: usize,
        channels: usize,
        tile_width: usize,
        tile_height: usize,
    ) -> Result<Self, SplitError> {
        if tile_width == 0 || tile_height == 0 {
            return Err(SplitError::geometry("tile dimensions must be non-zero"));
        }
        if tile_width > image_width || tile_height > image_height {
            return Err(SplitError::geometry("tile is larger than the image"));
        }
        if image_width % tile_width != 0 || image_height % tile_height != 0 {
            return Err(SplitError::geometry(
                "tile dimensions must evenly divide the image",
            ));
        }

        let block_stride = tile_width
            .checked_mul(channels)
            .ok_or_else(|| SplitError::geometry("tile row size overflows"))?;
        let line_stride = (image_width - tile_width)
            .checked_mul(channels)
            .ok_or_else(|| SplitError::geometry("image row size overflows"))?;
        let block_length = block_stride
            .checked_mul(tile_height)
            .ok_or_else(|| SplitError::geometry("tile size overflows"))?;

        Self::new(block_stride, line_stride, block_length, channels)
    }

    /// Sets the block stride.
    pub fn with_block_stride(mut self, stride: usize) -> Self {
        self.block_stride = stride;
        self
    }

    /// Sets the line stride.
    pub fn with_line_stride(mut self, stride: usize) -> Self {
        self.line_stride = stride;
        self
    }

    /// Sets the block length.
    pub fn with_block_length(mut self, length: usize) -> Self {
        self.block_length = length;
        self
    }

    /// Sets the channel count.
    pub fn with_channels(mut self, channels: usize) -> Self {
        self.channels = channels;
        self
    }

    /// Sets the content id digest.
    pub fn with_cid_algorithm(mut self, algorithm: CidAlgorithm) -> Self {
        self.cid_algorithm = algorithm;
        self
    }

    /// Returns the number of payload bytes copied per segment.
    pub fn block_stride(&self) -> usize {
        self.block_stride
    }

    /// Returns the number of padding bytes skipped after each segment.
    pub fn line_stride(&self) -> usize {
        self.line_stride
    }

    /// Returns the byte length of one output block.
    pub fn block_length(&self) -> usize {
        self.block_length
    }

    /// Returns the number of color channels per pixel.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the content id digest.
    pub fn cid_algorithm(&self) -> CidAlgorithm {
        self.cid_algorithm
    }

    /// Width of every block in pixels.
    pub fn block_width(&self) -> usize {
        self.block_stride / self.channels
    }

    /// Height of every block in rows.
    pub fn rows_per_block(&self) -> usize {
        self.block_length / self.block_stride
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.block_stride == 0 {
            return Err(SplitError::geometry("block_stride must be non-zero"));
        }
        if self.block_length == 0 {
            return Err(SplitError::geometry("block_length must be non-zero"));
        }
        if self.channels == 0 {
            return Err(SplitError::geometry("channel count must be non-zero"));
        }
        if self.block_stride.checked_add(self.line_stride).is_none() {
            return Err(SplitError::geometry("row period overflows"));
        }
        Ok(())
    }
}

/// Digest used to derive block content ids.
///
/// Both produce 256-bit ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CidAlgorithm {
    /// SHA-256.
    #[default]
    Sha256,

    /// BLAKE3 (requires `hash-blake3` feature).
    #[cfg(feature = "hash-blake3")]
    Blake3,
}

impl CidAlgorithm {
    /// Computes the content id of `data`.
    pub fn digest(&self, data: &[u8]) -> ContentId {
        crate::hash::digest(*self, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_config_valid() {
        let config = SplitConfig::new(4, 2, 8, 1).unwrap();
        assert_eq!(config.block_stride(), 4);
        assert_eq!(config.line_stride(), 2);
        assert_eq!(config.block_length(), 8);
        assert_eq!(config.channels(), 1);
        assert_eq!(config.cid_algorithm(), CidAlgorithm::Sha256);
    }

    #[test]
    fn test_split_config_invalid_zero() {
        assert!(SplitConfig::new(0, 0, 8, 1).is_err());
        assert!(SplitConfig::new(4, 0, 0, 1).is_err());
        assert!(SplitConfig::new(4, 0, 8, 0).is_err());
    }

    #[test]
    fn test_split_config_zero_line_stride_is_valid() {
        assert!(SplitConfig::new(4, 0, 4, 4).is_ok());
    }

    #[test]
    fn test_split_config_builder() {
        let config = SplitConfig::new(4, 0, 8, 1)
            .unwrap()
            .with_block_stride(12)
            .with_line_stride(3)
            .with_block_length(36)
            .with_channels(3);
        assert_eq!(config.block_width(), 4);
        assert_eq!(config.rows_per_block(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_split_config_validate() {
        let config = SplitConfig::new(4, 0, 8, 1).unwrap().with_channels(0);
        assert!(matches!(
            config.validate(),
            Err(SplitError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn test_split_config_row_period_overflow() {
        assert!(SplitConfig::new(usize::MAX, 1, usize::MAX, 1).is_err());
    }

    #[test]
    fn test_for_tiles() {
        let config = SplitConfig::for_tiles(8, 4, 3, 4, 2).unwrap();
        assert_eq!(config.block_stride(), 12);
        assert_eq!(config.line_stride(), 12);
        assert_eq!(config.block_length(), 24);
        assert_eq!(config.block_width(), 4);
        assert_eq!(config.rows_per_block(), 2);
    }

    #[test]
    fn test_for_tiles_full_width() {
        let config = SplitConfig::for_tiles(8, 4, 1, 8, 1).unwrap();
        assert_eq!(config.line_stride(), 0);
    }

    #[test]
    fn test_for_tiles_rejects_bad_tiles() {
        assert!(SplitConfig::for_tiles(8, 4, 1, 0, 2).is_err());
        assert!(SplitConfig::for_tiles(8, 4, 1, 16, 2).is_err());
        assert!(SplitConfig::for_tiles(8, 4, 1, 3, 2).is_err());
        assert!(SplitConfig::for_tiles(8, 4, 0, 4, 2).is_err());
    }

    #[test]
    fn test_cid_algorithm_default() {
        assert_eq!(CidAlgorithm::default(), CidAlgorithm::Sha256);
    }
}
