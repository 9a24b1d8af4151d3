//! The hash layer.
//!
//! A [`HashedTransaction`] is a [`SignedTransaction`] plus the BLAKE2b-256 digest
//! of its signed encoding. That digest is the transaction's identity in the
//! DAG and the value later transactions list in their `parents`.
//!
//! The hash is stored alongside the signed transaction. It is never appended
//! into any further encoding.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::builder::UnsignedTransaction;
use super::signing::SignedTransaction;
use super::types::{Digest, Signature};
use super::verification::TransactionError;
use crate::crypto::hash::blake2b_256_multi;

impl SignedTransaction {
    /// BLAKE2b-256 of `encode(unsigned) || signature`.
    pub fn compute_hash(&self) -> Digest {
        let unsigned_bytes = self.unsigned().encode();
        Digest::from_bytes(blake2b_256_multi(&[
            unsigned_bytes.as_slice(),
            self.signature().as_ref(),
        ]))
    }

    /// Hashes the transaction, consuming it.
    pub fn into_hashed(self) -> HashedTransaction {
        let hash = self.compute_hash();
        debug!(hash = %hash, "transaction hashed");
        HashedTransaction { signed: self, hash }
    }
}

/// A signed transaction carrying its content hash.
///
/// Immutable once built: fields are reachable only through shared
/// references, and any change means rebuilding from an
/// [`UnsignedTransaction`], which yields a different hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashedTransaction {
    #[serde(flatten)]
    signed: SignedTransaction,
    hash: Digest,
}

impl HashedTransaction {
    /// Assembles a hashed transaction from parts received elsewhere.
    /// Nothing is checked; call [`verify`](Self::verify) before admitting it.
    pub fn from_parts(signed: SignedTransaction, hash: Digest) -> Self {
        Self { signed, hash }
    }

    /// Splits the transaction back into its parts.
    pub fn into_parts(self) -> (SignedTransaction, Digest) {
        (self.signed, self.hash)
    }

    pub fn signed(&self) -> &SignedTransaction {
        &self.signed
    }

    pub fn unsigned(&self) -> &UnsignedTransaction {
        self.signed.unsigned()
    }

    pub fn signature(&self) -> &Signature {
        self.signed.signature()
    }

    /// The transaction's identity.
    pub fn hash(&self) -> &Digest {
        &self.hash
    }

    /// The parents this transaction approves, in encoding order.
    pub fn parents(&self) -> &[Digest] {
        &self.signed.unsigned().parents
    }

    /// Checks that the stored hash equals the digest of the signed encoding.
    ///
    /// # Errors
    ///
    /// [`TransactionError::HashMismatch`] if they differ in any byte.
    pub fn verify_hash(&self) -> Result<(), TransactionError> {
        let expected = self.signed.compute_hash();
        if expected != self.hash {
            debug!(stored = %self.hash, computed = %expected, "hash rejected");
            return Err(TransactionError::HashMismatch {
                expected,
                actual: self.hash,
            });
        }
        Ok(())
    }

    /// Full admission check: the signature, then the hash.
    ///
    /// Returns the first failure. A transaction that fails either check must
    /// be rejected by the caller, not repaired.
    pub fn verify(&self) -> Result<(), TransactionError> {
        self.signed.verify_signature()?;
        self.verify_hash()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::TangleKeypair;
    use crate::transaction::builder::TransactionBuilder;
    use crate::transaction::signing::sign_transaction;
    use crate::transaction::types::Address;

    fn signed_tx(kp: &TangleKeypair, parents: Vec<Digest>) -> SignedTransaction {
        let unsigned = TransactionBuilder::new(Address::from(kp), Address::from_bytes([0x42; 32]))
            .amount(250)
            .nonce(7)
            .parents(parents)
            .build();
        sign_transaction(unsigned, kp)
    }

    /// 32 bytes starting with `head`, zero-padded.
    fn padded(head: &[u8]) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[..head.len()].copy_from_slice(head);
        out
    }

    #[test]
    fn hash_matches_known_blake2b_256_fixture() {
        let unsigned = TransactionBuilder::new(
            Address::from_bytes(padded(&[0x05, 0x06])),
            Address::from_bytes(padded(&[0x07, 0x08])),
        )
        .amount(1)
        .nonce(2)
        .parent(Digest::from_bytes(padded(&[0x03, 0x07])))
        .parent(Digest::from_bytes(padded(&[0x11, 0x23])))
        .build();
        let mut sig = [0u8; 64];
        sig[..2].copy_from_slice(&[0x11, 0x98]);
        let signed = SignedTransaction::from_parts(unsigned, Signature::from_bytes(sig));

        assert_eq!(
            signed.compute_hash().to_hex(),
            "5082a0253cde20aed36b51f9276177499cad2d6a52adeeb284dc8d3314c767b4"
        );
    }

    #[test]
    fn streamed_hash_equals_hash_of_joined_encoding() {
        let kp = TangleKeypair::generate();
        let signed = signed_tx(&kp, vec![Digest::of(b"genesis")]);
        assert_eq!(signed.compute_hash(), Digest::of(&signed.encode()));
    }

    #[test]
    fn fresh_hash_verifies() {
        let kp = TangleKeypair::generate();
        let hashed = signed_tx(&kp, vec![Digest::of(b"genesis")]).into_hashed();
        assert!(hashed.verify_hash().is_ok());
        assert!(hashed.verify().is_ok());
    }

    #[test]
    fn wrong_stored_hash_is_rejected() {
        let kp = TangleKeypair::generate();
        let signed = signed_tx(&kp, vec![]);
        let real = signed.compute_hash();
        let bogus = Digest::from_bytes([0u8; 32]);

        let hashed = HashedTransaction::from_parts(signed, bogus);
        match hashed.verify_hash() {
            Err(TransactionError::HashMismatch { expected, actual }) => {
                assert_eq!(expected, real);
                assert_eq!(actual, bogus);
            }
            other => panic!("expected HashMismatch, got {other:?}"),
        }
    }

    #[test]
    fn changing_signature_changes_hash() {
        let kp = TangleKeypair::generate();
        let hashed = signed_tx(&kp, vec![Digest::of(b"a")]).into_hashed();
        let (signed, hash) = hashed.into_parts();
        let (unsigned, signature) = signed.into_parts();

        let mut sig_bytes = *signature.as_bytes();
        sig_bytes[63] ^= 0x80;
        let tampered = SignedTransaction::from_parts(unsigned, Signature::from_bytes(sig_bytes));

        let rehashed = HashedTransaction::from_parts(tampered, hash);
        assert!(matches!(
            rehashed.verify_hash(),
            Err(TransactionError::HashMismatch { .. })
        ));
    }

    #[test]
    fn changing_any_field_breaks_stored_hash() {
        let kp = TangleKeypair::generate();
        let hashed = signed_tx(&kp, vec![Digest::of(b"a"), Digest::of(b"b")]).into_hashed();

        let tamperers: Vec<fn(&mut UnsignedTransaction)> = vec![
            |tx| tx.from = Address::from_bytes([0x01; 32]),
            |tx| tx.to = Address::from_bytes([0x01; 32]),
            |tx| tx.amount = 0,
            |tx| tx.nonce = 0,
            |tx| tx.parents.swap(0, 1),
            |tx| tx.parents.clear(),
        ];

        for tamper in tamperers {
            let (signed, hash) = hashed.clone().into_parts();
            let (mut unsigned, signature) = signed.into_parts();
            tamper(&mut unsigned);
            let signed = SignedTransaction::from_parts(unsigned, signature);
            let forged = HashedTransaction::from_parts(signed, hash);
            assert!(forged.verify_hash().is_err());
        }
    }

    #[test]
    fn reordering_parents_changes_identity() {
        let kp = TangleKeypair::generate();
        let a = Digest::of(b"a");
        let b = Digest::of(b"b");
        let first = signed_tx(&kp, vec![a, b]).into_hashed();
        let second = signed_tx(&kp, vec![b, a]).into_hashed();

        assert_ne!(first.signature(), second.signature());
        assert_ne!(first.hash(), second.hash());
    }

    #[test]
    fn verify_reports_signature_before_hash() {
        // Hash recomputed over a forged signature still matches, so only the
        // signature check can catch it.
        let owner = TangleKeypair::generate();
        let forger = TangleKeypair::generate();
        let unsigned = TransactionBuilder::new(Address::from(&owner), Address::from_bytes([1; 32]))
            .amount(1)
            .build();
        let hashed = sign_transaction(unsigned, &forger).into_hashed();

        assert!(hashed.verify_hash().is_ok());
        assert!(matches!(
            hashed.verify(),
            Err(TransactionError::SignatureInvalid { .. })
        ));
    }

    #[test]
    fn accessors_expose_nested_layers() {
        let kp = TangleKeypair::generate();
        let parents = vec![Digest::of(b"x")];
        let hashed = signed_tx(&kp, parents.clone()).into_hashed();
        assert_eq!(hashed.parents(), parents.as_slice());
        assert_eq!(hashed.unsigned().amount, 250);
        assert_eq!(hashed.signed().signature(), hashed.signature());
    }

    #[test]
    fn hash_can_be_cited_as_parent() {
        let kp = TangleKeypair::generate();
        let genesis = signed_tx(&kp, vec![]).into_hashed();
        let child = signed_tx(&kp, vec![*genesis.hash()]).into_hashed();
        assert_eq!(child.parents(), &[*genesis.hash()]);
        assert!(child.verify().is_ok());
    }

    #[test]
    fn serde_roundtrip_preserves_validity() {
        let kp = TangleKeypair::generate();
        let hashed = signed_tx(&kp, vec![Digest::of(b"p")]).into_hashed();
        let json = serde_json::to_string(&hashed).unwrap();
        let recovered: HashedTransaction = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, hashed);
        assert!(recovered.verify().is_ok());
    }
}
