//! Splitting engine.
//!
//! - [`ImageSplitter`] - Eager splitter with indexed and content-id lookup

mod engine;
mod geometry;

pub use engine::ImageSplitter;
