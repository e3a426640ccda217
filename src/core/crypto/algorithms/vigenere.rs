/*!
Vigenere polyalphabetic cipher.

The key is tiled over the full message up-front, so the key position
advances on every input character whether or not that character is
alphabetic. Output case comes from the message character; the key
character's case is normalized away.
*/

use crate::core::crypto::traits::cipher::Cipher;
use crate::core::crypto::types::algorithms::CipherAlgorithm;
use crate::core::crypto::types::constants::alphabet;
use crate::core::crypto::types::request::{CipherKey, CipherOutput, CipherRequest};
use crate::core::error::CipherError;

/// Vigenere cipher implementation
pub struct VigenereCipher;

/// Combine a message letter with the aligned key letter, modulo the
/// alphabet range.
fn combine(c: char, key_c: char) -> char {
    let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
    let message_position = c as u8 - base;
    let key_position = key_c.to_ascii_lowercase() as u8 - b'a';
    let combined = (message_position + key_position) % alphabet::RANGE as u8;
    (base + combined) as char
}

impl Cipher for VigenereCipher {
    fn encrypt(&self, request: &CipherRequest) -> Result<CipherOutput, CipherError> {
        let key = match &request.key {
            Some(CipherKey::Text(key)) if !key.is_empty() => key,
            _ => return Err(CipherError::EmptyKey),
        };
        if !key.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CipherError::NonAlphabeticKey);
        }

        let key_chars: Vec<char> = key.chars().collect();
        let mut result = String::with_capacity(request.message.len());
        for (i, c) in request.message.chars().enumerate() {
            if c.is_ascii_alphabetic() {
                result.push(combine(c, key_chars[i % key_chars.len()]));
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
        CipherAlgorithm::Vigenere
    }
}
