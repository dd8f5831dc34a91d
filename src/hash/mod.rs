//! Digest back-ends for block content ids.
//!
//! - [`Sha256Hasher`] - SHA-256, the default content id
//! - [`Blake3Hasher`] - BLAKE3 (requires `hash-blake3` feature)

mod sha256;

#[cfg(feature = "hash-blake3")]
mod blake3;

pub use sha256::Sha256Hasher;

#[cfg(feature = "hash-blake3")]
pub use blake3::Blake3Hasher;

use crate::block::ContentId;
use crate::config::CidAlgorithm;

/// Computes the content id of `data` with the given algorithm.
pub(crate) fn digest(algorithm: CidAlgorithm, data: &[u8]) -> ContentId {
    match algorithm {
        CidAlgorithm::Sha256 => Sha256Hasher::hash(data),
        #[cfg(feature = "hash-blake3")]
        CidAlgorithm::Blake3 => Blake3Hasher::hash(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_dispatches_sha256() {
        assert_eq!(
            digest(CidAlgorithm::Sha256, b"abc"),
            Sha256Hasher::hash(b"abc")
        );
    }

    #[cfg(feature = "hash-blake3")]
    #[test]
    fn test_algorithms_disagree() {
        assert_ne!(
            digest(CidAlgorithm::Sha256, b"abc"),
            digest(CidAlgorithm::Blake3, b"abc")
        );
    }
}
