/*!
Key material captured from key-generating algorithms.

The registry owns this material between runs; a front end reads it
through the hex and display accessors rather than touching raw bytes.
*/

use std::fmt;

use num_bigint_dig::BigUint;

#[cfg(feature = "serde-support")]
use serde::Serialize;

/// One half of an RSA key pair
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub struct RsaKey {
    /// Public or private exponent
    pub exponent: BigUint,
    /// Modulus n = p * q
    pub modulus: BigUint,
}

impl fmt::Display for RsaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.exponent, self.modulus)
    }
}

/// Key material generated during an encryption run
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub enum KeyMaterial {
    /// Block cipher key and initialization vector
    Symmetric {
        /// Raw key bytes
        key: Vec<u8>,
        /// Raw initialization vector bytes
        iv: Vec<u8>,
    },
    /// RSA key pairs plus the per-symbol byte lengths needed to split
    /// the concatenated ciphertext back into symbols
    Asymmetric {
        /// Encryption key pair
        public_key: RsaKey,
        /// Decryption key pair
        private_key: RsaKey,
        /// Big-endian byte length of each encrypted symbol
        encoded_lengths: Vec<usize>,
    },
}

impl KeyMaterial {
    /// Symmetric key as lowercase hex, when this is symmetric material
    pub fn key_hex(&self) -> Option<String> {
        match self {
            KeyMaterial::Symmetric { key, .. } => Some(hex::encode(key)),
            KeyMaterial::Asymmetric { .. } => None,
        }
    }

    /// Initialization vector as lowercase hex, when this is symmetric
    /// material
    pub fn iv_hex(&self) -> Option<String> {
        match self {
            KeyMaterial::Symmetric { iv, .. } => Some(hex::encode(iv)),
            KeyMaterial::Asymmetric { .. } => None,
        }
    }
}
