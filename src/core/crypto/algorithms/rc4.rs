/*!
RC4 stream cipher.

Standard key-scheduling and pseudo-random generation phases. The XOR
combiner makes encryption and decryption the same operation given the
same keystream.
*/

use crate::core::crypto::traits::cipher::Cipher;
use crate::core::crypto::types::algorithms::CipherAlgorithm;
use crate::core::crypto::types::constants::stream::STATE_SIZE;
use crate::core::crypto::types::request::{CipherKey, CipherOutput, CipherRequest};
use crate::core::error::CipherError;

/// RC4 stream cipher implementation
pub struct Rc4Cipher;

/// Build the 256-entry permutation from the key bytes (KSA). The key is
/// tiled across the whole state.
fn key_schedule(key: &[u8]) -> [u8; STATE_SIZE] {
    let mut state = [0u8; STATE_SIZE];
    for (i, entry) in state.iter_mut().enumerate() {
        *entry = i as u8;
    }

    let mut j = 0usize;
    for i in 0..STATE_SIZE {
        j = (j + state[i] as usize + key[i % key.len()] as usize) % STATE_SIZE;
        state.swap(i, j);
    }
    state
}

/// Emit `length` keystream bytes from the scheduled state (PRGA).
fn keystream(state: &mut [u8; STATE_SIZE], length: usize) -> Vec<u8> {
    let mut i = 0usize;
    let mut j = 0usize;
    let mut output = Vec::with_capacity(length);
    for _ in 0..length {
        i = (i + 1) % STATE_SIZE;
        j = (j + state[i] as usize) % STATE_SIZE;
        state.swap(i, j);
        let t = (state[i] as usize + state[j] as usize) % STATE_SIZE;
        output.push(state[t]);
    }
    output
}

impl Cipher for Rc4Cipher {
    fn encrypt(&self, request: &CipherRequest) -> Result<CipherOutput, CipherError> {
        let key = match &request.key {
            Some(CipherKey::Text(key)) if !key.is_empty() => key.as_bytes(),
            _ => return Err(CipherError::EmptyKey),
        };

        let mut state = key_schedule(key);
        let message = request.message.as_bytes();
        let stream = keystream(&mut state, message.len());

        let encrypted: Vec<String> = message
            .iter()
            .zip(stream.iter())
            .map(|(byte, key_byte)| format!("{:02x}", byte ^ key_byte))
            .collect();

        Ok(CipherOutput {
            ciphertext: encrypted.join(" "),
            material: None,
        })
    }

    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::Rc4
    }
}
