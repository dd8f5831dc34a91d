//! BLAKE3 content ids.

use crate::block::ContentId;

/// A hasher that computes BLAKE3 content ids.
#[derive(Debug, Clone, Default)]
pub struct Blake3Hasher {
    state: blake3::Hasher,
}

impl Blake3Hasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self {
            state: blake3::Hasher::new(),
        }
    }

    /// Updates the hasher with more data.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Finalizes and returns the content id.
    pub fn finalize(&self) -> ContentId {
        ContentId::new(self.state.finalize().into())
    }

    /// Convenience method to hash data in one shot.
    pub fn hash(data: &[u8]) -> ContentId {
        ContentId::new(blake3::hash(data).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash() {
        let hash = Blake3Hasher::hash(b"hello world");
        assert_eq!(hash, Blake3Hasher::hash(b"hello world"));
        assert_ne!(hash, Blake3Hasher::hash(b"hello world!"));
    }

    #[test]
    fn test_incremental_hashing() {
        let mut hasher = Blake3Hasher::new();
        hasher.update(b"hello ");
        hasher.update(b"world");
        assert_eq!(hasher.finalize(), Blake3Hasher::hash(b"hello world"));
    }
}
