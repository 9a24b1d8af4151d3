//! # Hashing Utilities
//!
//! BLAKE2b with a 256-bit output is the only hash function in the
//! transaction format. It produces the content digest of a signed
//! transaction, which becomes the transaction's identity and the value later
//! transactions cite as a parent.
//!
//! The digest width follows the hasher's output size (32 bytes). See
//! [`crate::config::DIGEST_LENGTH`].

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

use crate::config::DIGEST_LENGTH;

/// BLAKE2b parameterized for a 32-byte output.
pub type Blake2b256 = Blake2b<U32>;

/// Compute the BLAKE2b-256 hash of the input data.
///
/// # Example
///
/// ```
/// use tangle_protocol::crypto::blake2b_256;
///
/// let hash = blake2b_256(b"tangle");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn blake2b_256(data: &[u8]) -> [u8; DIGEST_LENGTH] {
    Blake2b256::digest(data).into()
}

/// Hash multiple byte slices as if they had been concatenated.
///
/// Lets the hash layer digest `unsigned_bytes || signature` without
/// building the joined buffer first.
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; DIGEST_LENGTH] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}
