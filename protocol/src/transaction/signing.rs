//! The signature layer.
//!
//! A [`SignedTransaction`] is an [`UnsignedTransaction`] plus an Ed25519
//! signature over its canonical encoding. Signing consumes the unsigned
//! value, so there is no way back: a corrected transaction is rebuilt and
//! signed from scratch.
//!
//! Signing does not check that the keypair matches `from`. Binding is
//! enforced only by [`SignedTransaction::verify_signature`], which takes
//! the public key from `from` itself.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::builder::UnsignedTransaction;
use super::types::{Address, Signature};
use super::verification::TransactionError;
use crate::config::signed_encoded_len;
use crate::crypto::keys::TangleKeypair;
use crate::crypto::signatures::{sign, verify_raw};

/// An unsigned transaction with its sender's signature attached.
///
/// Encodes as `unsigned_bytes || signature(64)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignedTransaction {
    #[serde(flatten)]
    unsigned: UnsignedTransaction,
    signature: Signature,
}

/// Computes the signature over `encode(unsigned)` without attaching it.
///
/// Useful for remote signers that hand back only the signature bytes.
pub fn signature_for(unsigned: &UnsignedTransaction, keypair: &TangleKeypair) -> Signature {
    Signature::from_bytes(sign(keypair, &unsigned.encode()))
}

/// Signs a transaction, consuming it.
///
/// The caller is responsible for passing the keypair that owns
/// `unsigned.from`. A mismatch is logged but not rejected here; the result
/// will simply fail [`SignedTransaction::verify_signature`].
///
/// # Example
///
/// ```
/// use tangle_protocol::crypto::TangleKeypair;
/// use tangle_protocol::transaction::{sign_transaction, Address, TransactionBuilder};
///
/// let keypair = TangleKeypair::generate();
/// let unsigned = TransactionBuilder::new(Address::from(&keypair), Address::from_bytes([9; 32]))
///     .amount(10)
///     .nonce(1)
///     .build();
///
/// let signed = sign_transaction(unsigned, &keypair);
/// assert!(signed.verify_signature().is_ok());
/// ```
pub fn sign_transaction(
    unsigned: UnsignedTransaction,
    keypair: &TangleKeypair,
) -> SignedTransaction {
    if Address::from(keypair) != unsigned.from {
        warn!(
            from = %unsigned.from,
            signer = %keypair.public_key_hex(),
            "signing key does not match sender address"
        );
    }

    let signature = signature_for(&unsigned, keypair);
    debug!(
        from = %unsigned.from,
        nonce = unsigned.nonce,
        parents = unsigned.parents.len(),
        "transaction signed"
    );

    SignedTransaction {
        unsigned,
        signature,
    }
}

impl SignedTransaction {
    /// Assembles a signed transaction from parts received elsewhere.
    /// Nothing is checked; call [`verify_signature`](Self::verify_signature).
    pub fn from_parts(unsigned: UnsignedTransaction, signature: Signature) -> Self {
        Self {
            unsigned,
            signature,
        }
    }

    /// Splits the transaction back into its parts.
    pub fn into_parts(self) -> (UnsignedTransaction, Signature) {
        (self.unsigned, self.signature)
    }

    pub fn unsigned(&self) -> &UnsignedTransaction {
        &self.unsigned
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Returns `encode(unsigned) || signature`, the input to the hash layer.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.unsigned.encode_into(&mut buf);
        buf.extend_from_slice(self.signature.as_bytes());
        buf
    }

    /// Length of [`encode`](Self::encode)'s output.
    pub fn encoded_len(&self) -> usize {
        signed_encoded_len(self.unsigned.parents.len())
    }

    /// Verifies the signature against `from` over the re-derived unsigned
    /// encoding.
    ///
    /// # Errors
    ///
    /// [`TransactionError::SignatureInvalid`] if the signature does not
    /// verify, including when `from` is not a usable Ed25519 public key.
    pub fn verify_signature(&self) -> Result<(), TransactionError> {
        let message = self.unsigned.encode();
        verify_raw(
            self.unsigned.from.as_bytes(),
            &message,
            self.signature.as_bytes(),
        )
        .map_err(|e| {
            debug!(from = %self.unsigned.from, error = %e, "signature rejected");
            TransactionError::SignatureInvalid {
                from: self.unsigned.from,
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
