//! # Cryptographic Primitives
//!
//! Every signature and every hash a transaction carries flows through here.
//!
//! - **Ed25519** for signatures. Deterministic, 32-byte public keys, so a
//!   public key can double as an account address.
//! - **BLAKE2b-256** for content hashing. Its 32-byte output is the digest
//!   width used for parent references and transaction identity.
//!
//! Everything here is a thin, type-safe wrapper around audited
//! implementations (`ed25519-dalek`, `blake2`).

pub mod hash;
pub mod keys;
pub mod signatures;

pub use hash::{blake2b_256, blake2b_256_multi, Blake2b256};
pub use keys::{KeyError, TangleKeypair};
pub use signatures::{sign, verify_raw, SignatureError};
