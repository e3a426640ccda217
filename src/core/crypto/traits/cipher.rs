/*!
Trait for the uniform cipher interface.

Every algorithm is driven through the same encrypt operation; the
registry selects the implementation by id at dispatch time.
*/

use crate::core::crypto::types::algorithms::CipherAlgorithm;
use crate::core::crypto::types::request::{CipherOutput, CipherRequest};
use crate::core::error::CipherError;

/// Trait for cipher operations
pub trait Cipher: Send + Sync {
    /// Encrypt the request's message, returning the encoded ciphertext
    /// and any key material the algorithm generated
    fn encrypt(&self, request: &CipherRequest) -> Result<CipherOutput, CipherError>;

    /// The algorithm this cipher implements
    fn algorithm(&self) -> CipherAlgorithm;
}
