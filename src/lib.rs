/*!
# Cipher Engine

A multi-algorithm message-encryption engine exposing five classroom
cipher implementations behind one uniform dispatch contract.

## Overview

This library provides:

- Caesar and Vigenere alphabetic substitution
- RC4 keystream generation with an XOR combiner
- AES-128 in cipher-block-chaining mode with a fresh key and IV per run
- RSA with per-invocation key-pair generation
- A registry that validates key shapes against a static descriptor
  table and captures generated key material for later display

The ciphers follow the classroom constructions faithfully. None of
this is hardened against side channels and none of it should guard
real secrets.

## Usage

```
use cipher_engine::{CipherKey, CipherRegistry};

let mut registry = CipherRegistry::new();
let ciphertext = registry
    .run("caesar", "Hello", Some(CipherKey::Integer(3)), Some(true))
    .unwrap();
assert_eq!(ciphertext, "Ebiil");

registry.run("aes128cbc", "Hello", None, None).unwrap();
let material = registry.get_generated_key("aes128cbc").unwrap();
assert_eq!(material.key_hex().unwrap().len(), 32);
```
*/

// Core components
pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::crypto::registry::CipherRegistry;
pub use crate::core::crypto::traits::cipher::Cipher;
pub use crate::core::crypto::types::algorithms::{
    AlgorithmDescriptor, CipherAlgorithm, KeyKind, ALGORITHMS,
};
pub use crate::core::crypto::types::material::{KeyMaterial, RsaKey};
pub use crate::core::crypto::types::request::{CipherKey, CipherOutput, CipherRequest};
pub use crate::core::crypto::BigUint;
pub use crate::core::error::{CipherError, Error, Result};
