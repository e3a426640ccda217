/*!
Request and output types for a single cipher invocation.
*/

use crate::core::crypto::types::material::KeyMaterial;

/// Key supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherKey {
    /// Integer key
    Integer(i64),
    /// Text key
    Text(String),
}

/// A single encryption request, built by the registry after validation
/// and discarded once the output is produced
#[derive(Debug, Clone)]
pub struct CipherRequest {
    /// Message to encrypt
    pub message: String,
    /// Caller-supplied key, when the algorithm expects one
    pub key: Option<CipherKey>,
    /// Pass non-alphabetic characters through unchanged; only meaningful
    /// for the alphabetic ciphers
    pub include_non_alphabetic: bool,
}

/// Result of a cipher invocation
#[derive(Debug)]
pub struct CipherOutput {
    /// Encoded ciphertext
    pub ciphertext: String,
    /// Key material generated by the algorithm, when it makes its own
    pub material: Option<KeyMaterial>,
}
