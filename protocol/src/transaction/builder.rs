//! Unsigned transactions and their canonical encoding.
//!
//! The [`TransactionBuilder`] assembles an [`UnsignedTransaction`]: the
//! sender and receiver are required up front, everything else is chained.
//! The builder does not sign. That happens in [`super::signing`], which
//! keeps construction testable without key material.

use serde::{Deserialize, Serialize};

use super::types::{Address, Digest};
use crate::config::unsigned_encoded_len;

// ---------------------------------------------------------------------------
// UnsignedTransaction
// ---------------------------------------------------------------------------

/// A transaction as created by its sender, before signing.
///
/// # Canonical Byte Format
///
/// ```text
/// from(32) || to(32) || amount(8, BE) || nonce(8, BE) || parent_1(32) || .. || parent_k(32)
/// ```
///
/// No length prefixes, no separators, no terminators. Every field is fixed
/// width, so the parent count is implied by the total length. Parent order
/// is part of the encoding: the same set of parents in a different order is
/// a different transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnsignedTransaction {
    /// Sender address, which is also the key the signature is checked against.
    pub from: Address,

    /// Receiver address.
    pub to: Address,

    /// Amount transferred.
    pub amount: u64,

    /// Number of transactions the sender issued before this one.
    pub nonce: u64,

    /// Hashes of the previously hashed transactions this one approves.
    pub parents: Vec<Digest>,
}

impl UnsignedTransaction {
    /// Returns the canonical byte encoding. This is the exact message the
    /// sender signs.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut buf);
        buf
    }

    /// Appends the canonical encoding to `buf`.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.from.as_bytes());
        buf.extend_from_slice(self.to.as_bytes());
        buf.extend_from_slice(&self.amount.to_be_bytes());
        buf.extend_from_slice(&self.nonce.to_be_bytes());
        for parent in &self.parents {
            buf.extend_from_slice(parent.as_bytes());
        }
    }

    /// Length of [`encode`](Self::encode)'s output, computed without encoding.
    pub fn encoded_len(&self) -> usize {
        unsigned_encoded_len(self.parents.len())
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`UnsignedTransaction`].
///
/// ```
/// use tangle_protocol::transaction::{Address, Digest, TransactionBuilder};
///
/// let tx = TransactionBuilder::new(Address::from_bytes([1; 32]), Address::from_bytes([2; 32]))
///     .amount(500)
///     .nonce(3)
///     .parent(Digest::of(b"tip-a"))
///     .parent(Digest::of(b"tip-b"))
///     .build();
///
/// assert_eq!(tx.parents.len(), 2);
/// ```
///
/// Defaults: `amount` 0, `nonce` 0, no parents.
pub struct TransactionBuilder {
    from: Address,
    to: Address,
    amount: u64,
    nonce: u64,
    parents: Vec<Digest>,
}

impl TransactionBuilder {
    /// Creates a new builder for a transfer from `from` to `to`.
    pub fn new(from: Address, to: Address) -> Self {
        Self {
            from,
            to,
            amount: 0,
            nonce: 0,
            parents: Vec::new(),
        }
    }

    /// Sets the amount.
    pub fn amount(mut self, amount: u64) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the sender's nonce.
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    /// Appends one parent reference. Call order is encoding order.
    pub fn parent(mut self, parent: Digest) -> Self {
        self.parents.push(parent);
        self
    }

    /// Appends several parent references, preserving their order.
    pub fn parents<I: IntoIterator<Item = Digest>>(mut self, parents: I) -> Self {
        self.parents.extend(parents);
        self
    }

    /// Consumes the builder and produces the unsigned transaction.
    pub fn build(self) -> UnsignedTransaction {
        UnsignedTransaction {
            from: self.from,
            to: self.to,
            amount: self.amount,
            nonce: self.nonce,
            parents: self.parents,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
