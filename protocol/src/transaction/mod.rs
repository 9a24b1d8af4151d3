//! # Transaction Module
//!
//! The transaction record of the tangle: three layers, each wrapping the
//! one before and adding exactly one thing.
//!
//! ## Architecture
//!
//! ```text
//! types.rs        - Fixed-size values: Address, Digest, Signature
//! builder.rs      - UnsignedTransaction, its canonical encoding, and the builder
//! signing.rs      - SignedTransaction: Ed25519 signature over the unsigned encoding
//! hashing.rs      - HashedTransaction: BLAKE2b-256 identity over the signed encoding
//! verification.rs - TransactionError, single and batch admission checks
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build** with [`TransactionBuilder`], citing parent hashes.
//! 2. **Sign** with [`sign_transaction`], which consumes the unsigned value.
//! 3. **Hash** with [`SignedTransaction::into_hashed`].
//! 4. **Verify** on receipt with [`verify_transaction`] or [`verify_batch`].
//!
//! States only move forward. A transaction that needs a change is rebuilt
//! from step 1 and ends up with a different hash.
//!
//! ## Byte Layout
//!
//! ```text
//! unsigned = from(32) || to(32) || amount(8 BE) || nonce(8 BE) || parent_1(32) .. parent_k(32)
//! signed   = unsigned || signature(64)
//! hash     = BLAKE2b-256(signed)
//! ```

pub mod builder;
pub mod hashing;
pub mod signing;
pub mod types;
pub mod verification;

pub use builder::{TransactionBuilder, UnsignedTransaction};
pub use hashing::HashedTransaction;
pub use signing::{sign_transaction, signature_for, SignedTransaction};
pub use types::{Address, Digest, Signature};
pub use verification::{verify_batch, verify_transaction, TransactionError};
