//! # Key Management
//!
//! Ed25519 keypairs for transaction senders.
//!
//! The transaction format never stores or looks up keys: the sender's
//! address *is* the 32-byte Ed25519 public key, and verification derives the
//! key from the transaction itself. This module only exists so that the
//! key-management collaborator (a wallet, a test, the CLI) has a typed way
//! to hold the secret half and produce signatures.
//!
//! Key bytes are never logged.

use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;

use crate::config::{ADDRESS_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_LENGTH};

/// Errors that can occur during key operations.
///
/// Deliberately vague about *why* something failed.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid secret key bytes: expected 32 hex-encoded bytes")]
    InvalidSecretKey,
}

/// An Ed25519 signing keypair.
///
/// Intentionally does NOT implement `Serialize`/`Deserialize`. Exporting a
/// secret key should be an explicit call to [`secret_key_bytes`](Self::secret_key_bytes).
///
/// # Examples
///
/// ```
/// use tangle_protocol::crypto::keys::TangleKeypair;
///
/// let kp = TangleKeypair::generate();
/// let sig = kp.sign(b"payload");
/// assert_eq!(sig.len(), 64);
/// ```
pub struct TangleKeypair {
    signing_key: SigningKey,
}

impl TangleKeypair {
    /// Generate a fresh keypair using the OS cryptographic RNG.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        Self { signing_key }
    }

    /// Constructs a keypair deterministically from a 32-byte seed.
    ///
    /// A weak seed gives a weak key. Use a CSPRNG or KDF to produce it.
    pub fn from_seed(seed: &[u8; SECRET_KEY_LENGTH]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// Reconstruct a keypair from a hex-encoded secret key.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str.trim()).map_err(|_| KeyError::InvalidSecretKey)?;
        let seed: [u8; SECRET_KEY_LENGTH] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self::from_seed(&seed))
    }

    /// Raw public key bytes. These are the sender's on-ledger address.
    pub fn public_key_bytes(&self) -> [u8; ADDRESS_LENGTH] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// The public key as a hex string. Safe to log and display.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key_bytes())
    }

    /// Sign a message, returning the raw 64-byte Ed25519 signature.
    ///
    /// Deterministic per RFC 8032: same key and message, same signature.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        self.signing_key.sign(message).to_bytes()
    }

    /// Exports the raw 32-byte secret key material. Handle with care.
    pub fn secret_key_bytes(&self) -> [u8; SECRET_KEY_LENGTH] {
        self.signing_key.to_bytes()
    }

    /// The secret key as hex, for handing to a key file or the CLI.
    pub fn secret_key_hex(&self) -> String {
        hex::encode(self.secret_key_bytes())
    }
}

impl Clone for TangleKeypair {
    fn clone(&self) -> Self {
        Self::from_seed(&self.signing_key.to_bytes())
    }
}

impl fmt::Debug for TangleKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print secret key material, not even partially.
        write!(f, "TangleKeypair(pub={})", self.public_key_hex())
    }
}

impl PartialEq for TangleKeypair {
    /// Compared by public key; secret bytes are not compared in
    /// non-constant time.
    fn eq(&self, other: &Self) -> bool {
        self.public_key_bytes() == other.public_key_bytes()
    }
}

impl Eq for TangleKeypair {}
