//! Block types.
//!
//! - [`Block`] - One output block with its dimensions and content id
//! - [`ContentId`] - 32-byte cryptographic digest

mod cid;
mod data;

pub use cid::ContentId;
pub use data::Block;
