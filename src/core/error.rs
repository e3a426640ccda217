/*!
Error handling for the cipher engine.

The dispatch layer attaches the originating algorithm id to every
cipher-level failure before surfacing it to the caller.
*/

use thiserror::Error;

use crate::core::crypto::types::algorithms::KeyKind;

/// Result type for the cipher engine
pub type Result<T> = std::result::Result<T, Error>;

/// Error type surfaced by the registry
#[derive(Error, Debug)]
pub enum Error {
    /// Requested algorithm id is not registered
    #[error("algorithm '{0}' is not available")]
    UnknownAlgorithm(String),

    /// Supplied key does not match the algorithm's expected key kind
    #[error("algorithm '{algorithm}' expects {expected}")]
    InvalidKeyType {
        /// Algorithm the key was supplied for
        algorithm: String,
        /// Key kind the algorithm's descriptor declares
        expected: KeyKind,
    },

    /// A cipher failed while encrypting
    #[error("algorithm '{algorithm}' failed")]
    Cipher {
        /// Algorithm that raised the failure
        algorithm: String,
        #[source]
        source: CipherError,
    },
}

/// Failures raised inside the individual ciphers
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CipherError {
    /// Message must not be empty
    #[error("message is empty")]
    EmptyMessage,

    /// Required key absent or empty
    #[error("required key is absent or empty")]
    EmptyKey,

    /// Text key contained something other than ASCII letters
    #[error("key must contain only ASCII letters")]
    NonAlphabeticKey,

    /// Key generation found no usable public exponent
    #[error("no public exponent coprime with the totient")]
    NoValidExponent,

    /// Prime search used up its trial budget without finding a prime
    #[error("prime search exhausted its trial budget")]
    PrimeSearchExhausted,

    /// Binary-to-text conversion failed
    #[error("encoding failed: {0}")]
    EncodingFailure(String),
}
