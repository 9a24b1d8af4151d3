// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Tangle Protocol: Transaction Record
//!
//! The transaction record for a DAG-structured ledger. Instead of pointing
//! at one predecessor block, each transaction cites one or more earlier
//! transactions by hash as its parents.
//!
//! This crate does three things and nothing else:
//!
//! 1. Encode transaction fields into one deterministic byte sequence.
//! 2. Sign that encoding with Ed25519 and verify the signature against the
//!    sender address, which is itself the public key.
//! 3. Hash the signed encoding with BLAKE2b-256 to give the transaction its
//!    identity, and verify stored identities.
//!
//! DAG construction, tip selection, consensus, networking, storage and key
//! custody belong to the layers around this crate.
//!
//! ## Modules
//!
//! - **crypto** - Ed25519 keypairs and verification, BLAKE2b-256 hashing.
//! - **transaction** - The unsigned, signed and hashed layers.
//! - **config** - Field widths and layout constants.
//!
//! ## Example
//!
//! ```
//! use tangle_protocol::crypto::TangleKeypair;
//! use tangle_protocol::transaction::{sign_transaction, Address, Digest, TransactionBuilder};
//!
//! let sender = TangleKeypair::generate();
//! let unsigned = TransactionBuilder::new(Address::from(&sender), Address::from_bytes([7; 32]))
//!     .amount(1)
//!     .nonce(2)
//!     .parent(Digest::of(b"some earlier transaction"))
//!     .build();
//!
//! let hashed = sign_transaction(unsigned, &sender).into_hashed();
//! assert!(hashed.verify().is_ok());
//! ```

pub mod config;
pub mod crypto;
pub mod transaction;
