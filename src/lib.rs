//! imgsplit
//!
//! Fixed-size, content-addressed splitting of raw image buffers.
//!
//! `imgsplit` cuts a flat, already-decoded pixel buffer into equally sized
//! blocks following a caller-supplied striding geometry, and gives every block
//! a 256-bit content id. It is meant for pipelines that hand pieces of one
//! image to different workers, or look pieces up again by digest.
//!
//! The crate intentionally:
//! - does NOT decode or encode image formats
//! - does NOT move blocks over the network
//! - does NOT persist blocks
//! - does NOT split in parallel
//!
//! It only does one thing: **Buffer → blocks + content ids**
//!
//! # Example
//!
//! ```
//! use imgsplit::{ImageSplitter, SplitConfig};
//!
//! // 8x4 grayscale image, cut into four 4x2 tiles
//! let image: Vec<u8> = (0..32).collect();
//! let config = SplitConfig::for_tiles(8, 4, 1, 4, 2)?;
//! let splitter = ImageSplitter::new(&image, config)?;
//!
//! assert_eq!(splitter.part_count(), 4);
//! assert_eq!(splitter.part(1)?.as_ref(), &[4, 5, 6, 7, 12, 13, 14, 15]);
//!
//! for block in &splitter {
//!     println!("{block}");
//! }
//! # Ok::<(), imgsplit::SplitError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod block;
mod config;
mod error;
mod hash;
mod splitter;

//
// Public surface
//

pub use block::{Block, ContentId};
pub use config::{CidAlgorithm, SplitConfig};
pub use error::SplitError;
pub use hash::Sha256Hasher;
pub use splitter::ImageSplitter;

#[cfg(feature = "hash-blake3")]
pub use hash::Blake3Hasher;
