//! SHA-256 content ids.

use sha2::{Digest, Sha256};

use crate::block::ContentId;

/// A hasher that computes SHA-256 content ids.
#[derive(Debug, Clone, Default)]
pub struct Sha256Hasher {
    state: Sha256,
}

impl Sha256Hasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self {
            state: Sha256::new(),
        }
    }

    /// Updates the hasher with more data.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Consumes the hasher and returns the content id.
    pub fn finalize(self) -> ContentId {
        ContentId::new(self.state.finalize().into())
    }

    /// Convenience method to hash data in one shot.
    pub fn hash(data: &[u8]) -> ContentId {
        ContentId::new(Sha256::digest(data).into())
    }
}
