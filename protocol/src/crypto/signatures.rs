//! # Digital Signatures
//!
//! Ed25519 signing and verification over raw byte components.
//!
//! Verification uses `ed25519-dalek`'s strict mode. It rejects small-order
//! public keys and non-canonical signature encodings that lenient
//! implementations accept, so a signature has exactly one valid form.

use ed25519_dalek::{Signature as DalekSignature, VerifyingKey};
use thiserror::Error;

use super::keys::TangleKeypair;
use crate::config::{ADDRESS_LENGTH, SIGNATURE_LENGTH};

/// Errors during signature verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("signature verification failed")]
    VerificationFailed,

    #[error("invalid public key")]
    InvalidPublicKey,
}

/// Sign a message with a keypair.
///
/// # Example
///
/// ```
/// use tangle_protocol::crypto::{sign, verify_raw, TangleKeypair};
///
/// let keypair = TangleKeypair::generate();
/// let signature = sign(&keypair, b"message");
/// assert!(verify_raw(&keypair.public_key_bytes(), b"message", &signature).is_ok());
/// ```
pub fn sign(keypair: &TangleKeypair, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
    keypair.sign(message)
}

/// Verify a signature given the raw public key and signature bytes.
///
/// This is the path transaction verification takes: the public key comes
/// straight off the transaction's `from` field, not from a key registry.
pub fn verify_raw(
    public_key_bytes: &[u8; ADDRESS_LENGTH],
    message: &[u8],
    signature_bytes: &[u8; SIGNATURE_LENGTH],
) -> Result<(), SignatureError> {
    let verifying_key =
        VerifyingKey::from_bytes(public_key_bytes).map_err(|_| SignatureError::InvalidPublicKey)?;

    let signature = DalekSignature::from_bytes(signature_bytes);

    verifying_key
        .verify_strict(message, &signature)
        .map_err(|_| SignatureError::VerificationFailed)
}
