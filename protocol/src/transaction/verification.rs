//! Transaction verification and its error type.
//!
//! [`verify_transaction`] is the admission check the DAG layer runs before
//! a transaction may be cited as a parent. It checks the signature first,
//! then the hash. Both failures are terminal: the transaction as presented
//! must be rejected, not retried or repaired.
//!
//! Every check is a pure function of the transaction value, so
//! [`verify_batch`] can spread independent transactions across threads
//! with no locking.

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use super::hashing::HashedTransaction;
use super::types::{Address, Digest};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while constructing or verifying a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// The signature does not verify against `from` over the unsigned encoding.
    #[error("invalid signature: does not verify against sender {from}")]
    SignatureInvalid { from: Address },

    /// The stored hash differs from the digest of the signed encoding.
    #[error("hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: Digest, actual: Digest },

    /// A fixed-size field was supplied with the wrong number of bytes.
    #[error("malformed {field}: expected {expected} bytes, got {actual}")]
    MalformedField {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A fixed-size field was supplied as text that is not valid hex.
    #[error("malformed {field}: {reason}")]
    InvalidHex { field: &'static str, reason: String },
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Verifies a hashed transaction for admission to the DAG.
///
/// Equivalent to [`HashedTransaction::verify`].
///
/// # Errors
///
/// [`TransactionError::SignatureInvalid`] or [`TransactionError::HashMismatch`],
/// whichever check fails first.
pub fn verify_transaction(tx: &HashedTransaction) -> Result<(), TransactionError> {
    tx.verify()
}

/// Verifies many independent transactions in parallel.
///
/// Results come back in input order, one per transaction, so the caller
/// can reject exactly the ones that failed.
pub fn verify_batch(txs: &[HashedTransaction]) -> Vec<Result<(), TransactionError>> {
    let results: Vec<_> = txs.par_iter().map(verify_transaction).collect();

    let rejected = results.iter().filter(|r| r.is_err()).count();
    debug!(total = txs.len(), rejected, "batch verified");

    results
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::TangleKeypair;
    use crate::transaction::builder::TransactionBuilder;
    use crate::transaction::signing::{sign_transaction, SignedTransaction};

    /// Helper: build, sign and hash a valid transaction.
    fn valid_hashed_tx(nonce: u64) -> HashedTransaction {
        let kp = TangleKeypair::generate();
        let unsigned = TransactionBuilder::new(Address::from(&kp), Address::from_bytes([0x33; 32]))
            .amount(1_000)
            .nonce(nonce)
            .parent(Digest::of(b"tip"))
            .build();
        sign_transaction(unsigned, &kp).into_hashed()
    }

    #[test]
    fn valid_transaction_passes() {
        assert!(verify_transaction(&valid_hashed_tx(1)).is_ok());
    }

    #[test]
    fn bad_hash_is_reported() {
        let (signed, _) = valid_hashed_tx(1).into_parts();
        let tx = HashedTransaction::from_parts(signed, Digest::from_bytes([9; 32]));
        assert!(matches!(
            verify_transaction(&tx),
            Err(TransactionError::HashMismatch { .. })
        ));
    }

    #[test]
    fn bad_signature_is_reported() {
        let (signed, _) = valid_hashed_tx(1).into_parts();
        let (mut unsigned, signature) = signed.into_parts();
        unsigned.amount = 1_000_000;
        let forged = SignedTransaction::from_parts(unsigned, signature).into_hashed();

        // The hash was recomputed, so only the signature can be at fault.
        assert!(matches!(
            verify_transaction(&forged),
            Err(TransactionError::SignatureInvalid { .. })
        ));
    }

    #[test]
    fn batch_preserves_order_and_isolates_failures() {
        let mut txs: Vec<_> = (1..=16).map(valid_hashed_tx).collect();

        let (signed, _) = txs[5].clone().into_parts();
        txs[5] = HashedTransaction::from_parts(signed, Digest::from_bytes([0; 32]));

        let results = verify_batch(&txs);
        assert_eq!(results.len(), 16);
        for (i, result) in results.iter().enumerate() {
            if i == 5 {
                assert!(result.is_err());
            } else {
                assert!(result.is_ok(), "transaction {i} should verify");
            }
        }
    }

    #[test]
    fn batch_empty() {
        assert!(verify_batch(&[]).is_empty());
    }

    #[test]
    fn error_messages_name_the_fields() {
        let err = TransactionError::MalformedField {
            field: "digest",
            expected: 32,
            actual: 64,
        };
        assert_eq!(err.to_string(), "malformed digest: expected 32 bytes, got 64");

        let from = Address::from_bytes([0xab; 32]);
        let err = TransactionError::SignatureInvalid { from };
        assert!(err.to_string().contains(&from.to_hex()));
    }
}
