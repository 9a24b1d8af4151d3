//! Fixed-size value types for transactions.
//!
//! These types form the vocabulary of every transaction in the tangle.
//! Each wraps a byte array of exactly the width the encoding expects, so a
//! well-typed transaction can never encode with a short address or a
//! truncated parent digest. The only fallible entry points are the slice
//! and hex constructors, which reject the wrong length with
//! [`TransactionError::MalformedField`] before anything is encoded.
//!
//! All three serialize as lowercase hex strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::verification::TransactionError;
use crate::config::{ADDRESS_LENGTH, DIGEST_LENGTH, SIGNATURE_LENGTH};
use crate::crypto::hash::blake2b_256;
use crate::crypto::keys::TangleKeypair;

macro_rules! fixed_bytes {
    ($(#[$meta:meta])* $name:ident, $len:expr, $field:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name([u8; $len]);

        impl $name {
            /// Width of this field in the byte encoding.
            pub const LENGTH: usize = $len;

            /// Wraps an array of the correct width. Cannot fail.
            pub const fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Parses a byte slice, rejecting anything but the exact width.
            pub fn try_from_slice(slice: &[u8]) -> Result<Self, TransactionError> {
                let bytes: [u8; $len] =
                    slice
                        .try_into()
                        .map_err(|_| TransactionError::MalformedField {
                            field: $field,
                            expected: $len,
                            actual: slice.len(),
                        })?;
                Ok(Self(bytes))
            }

            /// Parses a hex string of exactly the right decoded width.
            pub fn from_hex(s: &str) -> Result<Self, TransactionError> {
                let bytes = hex::decode(s).map_err(|e| TransactionError::InvalidHex {
                    field: $field,
                    reason: e.to_string(),
                })?;
                Self::try_from_slice(&bytes)
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            pub fn to_hex(&self) -> String {
                hex::encode(self.0)
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = TransactionError;

            fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
                Self::try_from_slice(slice)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({}..)", stringify!($name), &self.to_hex()[..16])
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::from_hex(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

fixed_bytes!(
    /// An account address. It is the account's Ed25519 public key, so the
    /// verifier derives the key from the address directly.
    Address,
    ADDRESS_LENGTH,
    "address"
);

fixed_bytes!(
    /// A BLAKE2b-256 digest: either a transaction's identity or a parent reference
    /// to a previously hashed transaction.
    Digest,
    DIGEST_LENGTH,
    "digest"
);

fixed_bytes!(
    /// An Ed25519 signature over an unsigned transaction encoding.
    Signature,
    SIGNATURE_LENGTH,
    "signature"
);

impl From<&TangleKeypair> for Address {
    fn from(keypair: &TangleKeypair) -> Self {
        Self(keypair.public_key_bytes())
    }
}

impl Digest {
    /// Digest of arbitrary bytes with the transaction hash function.
    pub fn of(data: &[u8]) -> Self {
        Self(blake2b_256(data))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_from_keypair_is_public_key() {
        let kp = TangleKeypair::generate();
        let address = Address::from(&kp);
        assert_eq!(address.as_bytes(), &kp.public_key_bytes());
    }

    #[test]
    fn try_from_slice_rejects_wrong_length() {
        let err = Address::try_from_slice(&[0u8; 31]).unwrap_err();
        assert!(matches!(
            err,
            TransactionError::MalformedField {
                field: "address",
                expected: 32,
                actual: 31
            }
        ));

        assert!(Digest::try_from_slice(&[0u8; 64]).is_err());
        assert!(Signature::try_from_slice(&[0u8; 32]).is_err());
        assert!(Signature::try_from_slice(&[0u8; 64]).is_ok());
    }

    #[test]
    fn try_from_trait_matches_inherent() {
        let bytes = [7u8; 32];
        let a = Digest::try_from(&bytes[..]).unwrap();
        assert_eq!(a, Digest::from_bytes(bytes));
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(matches!(
            Digest::from_hex("zz"),
            Err(TransactionError::InvalidHex { field: "digest", .. })
        ));
        assert!(matches!(
            Digest::from_hex("0011"),
            Err(TransactionError::MalformedField { actual: 2, .. })
        ));
    }

    #[test]
    fn hex_roundtrip() {
        let digest = Digest::of(b"parent");
        assert_eq!(Digest::from_hex(&digest.to_hex()).unwrap(), digest);
        assert_eq!(digest.to_string(), digest.to_hex());
    }

    #[test]
    fn debug_is_abbreviated() {
        let sig = Signature::from_bytes([0xab; 64]);
        assert_eq!(format!("{:?}", sig), "Signature(abababababababab..)");
    }

    #[test]
    fn serializes_as_hex_string() {
        let address = Address::from_bytes([0x01; 32]);
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(32)));

        let recovered: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, address);
    }

    #[test]
    fn deserialize_rejects_wrong_width() {
        let json = format!("\"{}\"", "01".repeat(31));
        assert!(serde_json::from_str::<Address>(&json).is_err());
    }
}
