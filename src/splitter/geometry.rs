//! Offset arithmetic mapping output blocks onto the strided source buffer.
//!
//! The source is a run of rows, each `block_stride` payload bytes followed by
//! `line_stride` bytes that belong to no block. A *band* is the stretch of
//! output covered by one full pass over `rows_per_block` source rows: when the
//! line stride spans further columns of blocks, one band holds
//! `blocks_per_row` blocks side by side.
//!
//! For the block starting at output offset `i` the source offset is found in
//! three steps:
//!
//! 1. `rows_done = i / band_length`: bands fully consumed by earlier blocks.
//! 2. `naive = (i / block_length) * block_stride`: the offset if blocks were
//!    laid side by side with no padding.
//! 3. Padding correction: subtract one row period per finished band and add
//!    back the band length, so the cursor lands on the first row of the
//!    current band without counting padding twice.
//!
//! Inside a block, segment `s` is read at `offset + s * (block_stride + line_stride)`.

use std::ops::Range;

use crate::config::SplitConfig;
use crate::error::SplitError;

/// Precomputed stride quantities for one split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Geometry {
    block_stride: usize,
    block_length: usize,
    row_period: usize,
    band_length: usize,
}

impl Geometry {
    pub(crate) fn new(config: &SplitConfig) -> Result<Self, SplitError> {
        config.validate()?;

        let block_stride = config.block_stride();
        let block_length = config.block_length();
        let row_period = block_stride
            .checked_add(config.line_stride())
            .ok_or_else(|| SplitError::geometry("row period overflows"))?;
        let blocks_per_row = row_period / block_stride;
        let band_length = block_length
            .checked_mul(blocks_per_row)
            .ok_or_else(|| SplitError::geometry("band length overflows"))?;

        Ok(Self {
            block_stride,
            block_length,
            row_period,
            band_length,
        })
    }

    /// Source offset of the first segment of the block at `output_offset`.
    pub(crate) fn source_offset(&self, output_offset: usize) -> Result<usize, SplitError> {
        let rows_done = output_offset / self.band_length;

        let naive = (output_offset / self.block_length)
            .checked_mul(self.block_stride)
            .ok_or_else(|| SplitError::geometry("source offset overflows"))?;

        let skipped = self
            .row_period
            .checked_mul(rows_done)
            .ok_or_else(|| SplitError::geometry("source offset overflows"))?;
        let band_start = rows_done
            .checked_mul(self.band_length)
            .and_then(|b| b.checked_add(naive))
            .ok_or_else(|| SplitError::geometry("source offset overflows"))?;

        band_start.checked_sub(skipped).ok_or_else(|| {
            SplitError::geometry(format!(
                "line stride is inconsistent with block layout at output offset {output_offset}"
            ))
        })
    }

    /// Source ranges copied, in order, into the block at `output_offset`.
    ///
    /// Ranges sum to exactly `block_length` bytes. When `block_stride` does not
    /// divide `block_length` the last segment is cut short. Every range is
    /// checked against `image_size`.
    pub(crate) fn segments(
        &self,
        output_offset: usize,
        image_size: usize,
    ) -> Result<Vec<Range<usize>>, SplitError> {
        let mut cursor = self.source_offset(output_offset)?;
        let mut ranges = Vec::with_capacity(self.block_length.div_ceil(self.block_stride));
        let mut filled = 0;

        while filled < self.block_length {
            let len = self.block_stride.min(self.block_length - filled);
            let end = cursor
                .checked_add(len)
                .filter(|&end| end <= image_size)
                .ok_or_else(|| {
                    SplitError::geometry(format!(
                        "segment at source offset {cursor} runs past the {image_size}-byte buffer"
                    ))
                })?;
            ranges.push(cursor..end);
            filled += len;
            // Past the final segment the cursor is never read.
            cursor = cursor.saturating_add(self.row_period);
        }

        Ok(ranges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(block_stride: usize, line_stride: usize, block_length: usize) -> Geometry {
        Geometry::new(&SplitConfig::new(block_stride, line_stride, block_length, 1).unwrap())
            .unwrap()
    }

    #[test]
    fn test_contiguous_offsets() {
        let g = geometry(4, 0, 8);
        assert_eq!(g.source_offset(0).unwrap(), 0);
        assert_eq!(g.source_offset(8).unwrap(), 8);
        assert_eq!(g.source_offset(16).unwrap(), 16);
        assert_eq!(g.segments(8, 16).unwrap(), vec![8..12, 12..16]);
    }

    #[test]
    fn test_single_segment_block() {
        let g = geometry(4, 0, 4);
        assert_eq!(g.segments(12, 16).unwrap(), vec![12..16]);
    }

    #[test]
    fn test_narrow_padding() {
        // 4-byte rows, 2-byte gap
        let g = geometry(4, 2, 8);
        assert_eq!(g.segments(0, 24).unwrap(), vec![0..4, 6..10]);
        assert_eq!(g.segments(8, 24).unwrap(), vec![6..10, 12..16]);
        assert_eq!(g.segments(16, 24).unwrap(), vec![12..16, 18..22]);
    }

    #[test]
    fn test_tile_grid_offsets() {
        // 8-byte image rows cut into 4x2 tiles
        let g = geometry(4, 4, 8);
        assert_eq!(g.source_offset(0).unwrap(), 0);
        assert_eq!(g.source_offset(8).unwrap(), 4);
        assert_eq!(g.source_offset(16).unwrap(), 16);
        assert_eq!(g.source_offset(24).unwrap(), 20);
        assert_eq!(g.segments(24, 32).unwrap(), vec![20..24, 28..32]);
    }

    #[test]
    fn test_partial_last_segment() {
        let g = geometry(4, 0, 6);
        assert_eq!(g.segments(6, 12).unwrap(), vec![6..10, 10..12]);
    }

    #[test]
    fn test_segment_past_buffer_is_rejected() {
        // Padding pushes the second row of the last block off the end.
        let g = geometry(4, 4, 8);
        assert!(matches!(
            g.segments(8, 12),
            Err(SplitError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn test_underflowing_offset_is_rejected() {
        // Blocks shorter than one row, followed by a gap wider than a block.
        let g = geometry(8, 6, 4);
        assert!(g.source_offset(4).is_err());
    }
}
