/*!
Shared arithmetic primitives for the cipher implementations.

This module provides the finite-field byte multiplication used by the
block cipher and the modular arithmetic used by the public-key cipher.
*/

use num_bigint_dig::{prime, BigInt, BigUint, Sign, ToBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Rounds of Miller-Rabin applied when testing prime candidates
const MILLER_RABIN_ROUNDS: usize = 25;

/// Multiply two bytes in GF(2^8) modulo the AES polynomial
/// x^8 + x^4 + x^3 + x + 1.
pub fn gf_mul(a: u8, b: u8) -> u8 {
    let mut a = a;
    let mut b = b;
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
    }
    product
}

/// True when `a` and `b` share no factor other than 1.
pub fn is_coprime(a: &BigUint, b: &BigUint) -> bool {
    a.gcd(b).is_one()
}

/// Modular multiplicative inverse of `a` modulo `m`, computed with the
/// iterative extended Euclidean algorithm. Returns `None` when
/// gcd(a, m) != 1 and no inverse exists.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let a = a.to_bigint()?;
    let modulus = m.to_bigint()?;

    let (mut old_r, mut r) = (a, modulus.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = r;
        r = next_r;
        let next_s = &old_s - &q * &s;
        old_s = s;
        s = next_s;
    }

    if !old_r.is_one() {
        return None;
    }

    let mut inverse = old_s % &modulus;
    if inverse.sign() == Sign::Minus {
        inverse += &modulus;
    }
    inverse.to_biguint()
}

/// Probabilistic primality test.
pub fn is_probable_prime(candidate: &BigUint) -> bool {
    prime::probably_prime(candidate, MILLER_RABIN_ROUNDS)
}
