/*!
RSA public-key cipher.

A fresh key pair is generated per invocation. Each character of the
message is raised to the public exponent modulo n; the variable-width
big-endian results are concatenated and base64-encoded. The caller gets
the ciphertext; both key pairs and the per-symbol byte lengths needed
to split the concatenation again are captured as generated material.
*/

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use num_bigint_dig::{BigUint, RandBigInt};
use num_traits::One;
use rand::{thread_rng, Rng};

use crate::core::crypto::traits::cipher::Cipher;
use crate::core::crypto::types::algorithms::CipherAlgorithm;
use crate::core::crypto::types::constants::public_key::{
    MAX_PRIME_TRIALS, MAX_PUBLIC_EXPONENT, PRIME_BITS,
};
use crate::core::crypto::types::material::{KeyMaterial, RsaKey};
use crate::core::crypto::types::request::{CipherOutput, CipherRequest};
use crate::core::error::CipherError;
use crate::core::math::{is_coprime, is_probable_prime, mod_inverse};

/// RSA cipher implementation
pub struct RsaCipher {
    prime_bits: usize,
}

impl RsaCipher {
    /// Create a cipher that draws primes of the default magnitude
    pub fn new() -> Self {
        Self {
            prime_bits: PRIME_BITS,
        }
    }

    /// Create a cipher that draws primes of a specific magnitude;
    /// smaller values keep tests fast
    pub fn with_prime_bits(prime_bits: usize) -> Self {
        Self { prime_bits }
    }
}

impl Default for RsaCipher {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw random odd candidates with the top bit forced until one passes
/// the primality test. The trial count is bounded; running out is an
/// error, not a retry loop.
fn generate_prime<R: Rng>(rng: &mut R, bits: usize) -> Result<BigUint, CipherError> {
    for _ in 0..MAX_PRIME_TRIALS {
        let mut candidate = rng.gen_biguint(bits);
        candidate |= BigUint::one() << (bits - 1);
        candidate |= BigUint::one();
        if is_probable_prime(&candidate) {
            return Ok(candidate);
        }
    }
    Err(CipherError::PrimeSearchExhausted)
}

/// Smallest exponent >= 2 coprime with phi. The scan stops at the
/// conventional upper bound rather than walking toward phi.
fn find_public_exponent(phi: &BigUint) -> Result<BigUint, CipherError> {
    for candidate in 2..=MAX_PUBLIC_EXPONENT {
        let e = BigUint::from(candidate);
        if &e >= phi {
            break;
        }
        if is_coprime(&e, phi) {
            return Ok(e);
        }
    }
    Err(CipherError::NoValidExponent)
}

/// Derive a public/private key pair from two fresh primes.
fn generate_key_pair<R: Rng>(rng: &mut R, bits: usize) -> Result<(RsaKey, RsaKey), CipherError> {
    let p = generate_prime(rng, bits)?;
    let mut q = generate_prime(rng, bits)?;
    while q == p {
        q = generate_prime(rng, bits)?;
    }

    let one = BigUint::one();
    let n = &p * &q;
    let phi = (&p - &one) * (&q - &one);

    let e = find_public_exponent(&phi)?;
    let d = mod_inverse(&e, &phi).ok_or(CipherError::NoValidExponent)?;

    Ok((
        RsaKey {
            exponent: e,
            modulus: n.clone(),
        },
        RsaKey {
            exponent: d,
            modulus: n,
        },
    ))
}

impl Cipher for RsaCipher {
    fn encrypt(&self, request: &CipherRequest) -> Result<CipherOutput, CipherError> {
        let mut rng = thread_rng();
        let (public_key, private_key) = generate_key_pair(&mut rng, self.prime_bits)?;

        let mut packed = Vec::new();
        let mut encoded_lengths = Vec::new();
        for c in request.message.chars() {
            let code = BigUint::from(c as u32);
            let encrypted = code.modpow(&public_key.exponent, &public_key.modulus);
            let bytes = encrypted.to_bytes_be();
            encoded_lengths.push(bytes.len());
            packed.extend_from_slice(&bytes);
        }

        Ok(CipherOutput {
            ciphertext: STANDARD.encode(&packed),
            material: Some(KeyMaterial::Asymmetric {
                public_key,
                private_key,
                encoded_lengths,
            }),
        })
    }

    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::Rsa
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;

    // Small primes keep key generation fast; the arithmetic is the
    // same at any magnitude.
    const TEST_PRIME_BITS: usize = 128;

    fn encrypt(message: &str) -> CipherOutput {
        let request = CipherRequest {
            message: message.to_string(),
            key: None,
            include_non_alphabetic: true,
        };
        RsaCipher::with_prime_bits(TEST_PRIME_BITS)
            .encrypt(&request)
            .unwrap()
    }

    fn decrypt(ciphertext: &str, private_key: &RsaKey, lengths: &[usize]) -> String {
        let packed = STANDARD.decode(ciphertext).unwrap();
        let mut offset = 0;
        let mut message = String::new();
        for &length in lengths {
            let value = BigUint::from_bytes_be(&packed[offset..offset + length]);
            offset += length;
            let code = value.modpow(&private_key.exponent, &private_key.modulus);
            message.push(char::from_u32(code.to_u32().unwrap()).unwrap());
        }
        assert_eq!(offset, packed.len(), "lengths must partition the buffer");
        message
    }

    #[test]
    fn test_round_trip_with_generated_keys() {
        let message = "Attack at dawn! (held in reserve)";
        let output = encrypt(message);

        match output.material.unwrap() {
            KeyMaterial::Asymmetric {
                private_key,
                encoded_lengths,
                ..
            } => {
                assert_eq!(encoded_lengths.len(), message.chars().count());
                assert_eq!(
                    decrypt(&output.ciphertext, &private_key, &encoded_lengths),
                    message
                );
            }
            other => panic!("expected asymmetric material, got {other:?}"),
        }
    }

    #[test]
    fn test_fresh_keys_per_run() {
        let first = encrypt("same message");
        let second = encrypt("same message");
        assert_ne!(first.ciphertext, second.ciphertext);
    }

    #[test]
    fn test_exponents_are_inverse_modulo_totient() {
        let mut rng = thread_rng();
        let (public_key, private_key) =
            generate_key_pair(&mut rng, TEST_PRIME_BITS).unwrap();

        assert_eq!(public_key.modulus, private_key.modulus);

        let sample = BigUint::from(0x2764u32);
        let encrypted = sample.modpow(&public_key.exponent, &public_key.modulus);
        let decrypted = encrypted.modpow(&private_key.exponent, &private_key.modulus);
        assert_eq!(decrypted, sample);
    }

    #[test]
    fn test_public_exponent_is_smallest_coprime() {
        // phi = 20 shares factors with 2, 4, 5 but not 3
        assert_eq!(
            find_public_exponent(&BigUint::from(20u32)).unwrap(),
            BigUint::from(3u32)
        );
        // phi = 12 rejects 2, 3, 4 and lands on 5
        assert_eq!(
            find_public_exponent(&BigUint::from(12u32)).unwrap(),
            BigUint::from(5u32)
        );
    }

    #[test]
    fn test_no_exponent_below_phi() {
        // phi = 2 leaves no candidate strictly below it
        assert_eq!(
            find_public_exponent(&BigUint::from(2u32)).unwrap_err(),
            CipherError::NoValidExponent
        );
    }

    #[test]
    fn test_generated_primes_have_requested_magnitude() {
        let mut rng = thread_rng();
        let prime = generate_prime(&mut rng, 64).unwrap();
        assert_eq!(prime.bits(), 64);
        assert!(is_probable_prime(&prime));
    }
}
