/*!
Caesar shift cipher.

Shifts alphabetic characters backward within their own case's alphabet.
Non-alphabetic characters are never shifted; they pass through or are
dropped depending on the request flag.
*/

use crate::core::crypto::traits::cipher::Cipher;
use crate::core::crypto::types::algorithms::CipherAlgorithm;
use crate::core::crypto::types::constants::alphabet;
use crate::core::crypto::types::request::{CipherKey, CipherOutput, CipherRequest};
use crate::core::error::CipherError;

/// Caesar shift cipher implementation
pub struct CaesarCipher;

/// Shift one ASCII letter backward by `shift` positions, wrapping within
/// its case's alphabet. The euclidean remainder normalizes any i64
/// shift, negative or far beyond the alphabet range.
pub(crate) fn shift_character(c: char, shift: i64) -> char {
    let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
    let shift = shift.rem_euclid(alphabet::RANGE);
    let position = (c as u8 - base) as i64;
    let shifted = (position - shift).rem_euclid(alphabet::RANGE);
    (base + shifted as u8) as char
}

impl Cipher for CaesarCipher {
    fn encrypt(&self, request: &CipherRequest) -> Result<CipherOutput, CipherError> {
        let shift = match request.key {
            Some(CipherKey::Integer(shift)) => shift,
            _ => return Err(CipherError::EmptyKey),
        };

        let mut result = String::with_capacity(request.message.len());
        for c in request.message.chars() {
            if c.is_ascii_alphabetic() {
                result.push(shift_character(c, shift));
            } else if request.include_non_alphabetic {
                result.push(c);
            }
        }

        Ok(CipherOutput {
            ciphertext: result,
            material: None,
        })
    }

    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::Caesar
    }
}
