//! # Protocol Configuration & Constants
//!
//! Every fixed width in the transaction byte layout lives here. The encoder,
//! the fixed-size field types and the CLI all read their sizes from this
//! module, so a width only ever changes in one place.
//!
//! Changing any of these after transactions exist on a ledger changes every
//! encoding, every signature input and every hash. Treat them as frozen.

use blake2::digest::typenum::Unsigned;
use blake2::digest::OutputSizeUser;

use crate::crypto::hash::Blake2b256;

// ---------------------------------------------------------------------------
// Protocol Version
// ---------------------------------------------------------------------------

/// The full version string of the transaction format.
pub const PROTOCOL_VERSION: &str = "0.1.0";

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Signature scheme used for transaction authentication.
pub const SIGNING_ALGORITHM: &str = "Ed25519";

/// Hash function that gives a transaction its identity.
pub const HASH_FUNCTION: &str = "BLAKE2b-256";

/// Secret key length in bytes. Ed25519 secret keys are 32-byte seeds.
pub const SECRET_KEY_LENGTH: usize = ed25519_dalek::SECRET_KEY_LENGTH;

/// Address length in bytes. An address *is* an Ed25519 public key.
pub const ADDRESS_LENGTH: usize = ed25519_dalek::PUBLIC_KEY_LENGTH;

/// Ed25519 signature length. Always 64 bytes.
pub const SIGNATURE_LENGTH: usize = ed25519_dalek::SIGNATURE_LENGTH;

/// Digest length in bytes, taken from the hash function's actual output
/// size rather than declared independently.
pub const DIGEST_LENGTH: usize =
    <<Blake2b256 as OutputSizeUser>::OutputSize as Unsigned>::USIZE;

// ---------------------------------------------------------------------------
// Byte Layout
// ---------------------------------------------------------------------------

/// Width of the big-endian `amount` field.
pub const AMOUNT_LENGTH: usize = 8;

/// Width of the big-endian `nonce` field.
pub const NONCE_LENGTH: usize = 8;

/// Bytes preceding the parent list: `from || to || amount || nonce`.
pub const UNSIGNED_HEADER_LENGTH: usize =
    ADDRESS_LENGTH + ADDRESS_LENGTH + AMOUNT_LENGTH + NONCE_LENGTH;

// ---------------------------------------------------------------------------
// Utility
// ---------------------------------------------------------------------------

/// Length of an unsigned transaction encoding with `parent_count` parents.
pub const fn unsigned_encoded_len(parent_count: usize) -> usize {
    UNSIGNED_HEADER_LENGTH + parent_count * DIGEST_LENGTH
}

/// Length of a signed transaction encoding with `parent_count` parents.
pub const fn signed_encoded_len(parent_count: usize) -> usize {
    unsigned_encoded_len(parent_count) + SIGNATURE_LENGTH
}
