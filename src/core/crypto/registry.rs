/*!
Registry and dispatch layer for the cipher algorithms.

Maps algorithm ids to cipher implementations, validates the caller's
key against the static descriptor table, and captures key material
from the algorithms that generate their own. The material store is
owned by the registry instance, so independent registries never share
state.
*/

use std::collections::HashMap;

use log::debug;

use crate::core::crypto::algorithms::{
    Aes128CbcCipher, CaesarCipher, Rc4Cipher, RsaCipher, VigenereCipher,
};
use crate::core::crypto::traits::cipher::Cipher;
use crate::core::crypto::types::algorithms::{AlgorithmDescriptor, KeyKind};
use crate::core::crypto::types::material::KeyMaterial;
use crate::core::crypto::types::request::{CipherKey, CipherRequest};
use crate::core::error::{CipherError, Error, Result};

/// Registry of cipher algorithms with an owned store for generated
/// key material
pub struct CipherRegistry {
    /// Registered ciphers, keyed by algorithm id
    algorithms: HashMap<String, Box<dyn Cipher>>,

    /// Material captured from the most recent run of each
    /// key-generating algorithm
    generated_material: HashMap<String, KeyMaterial>,
}

impl CipherRegistry {
    /// Create a registry with the default algorithms registered
    pub fn new() -> Self {
        let mut registry = Self {
            algorithms: HashMap::new(),
            generated_material: HashMap::new(),
        };

        registry.register(Box::new(CaesarCipher));
        registry.register(Box::new(VigenereCipher));
        registry.register(Box::new(Rc4Cipher));
        registry.register(Box::new(Aes128CbcCipher));
        registry.register(Box::new(RsaCipher::new()));

        registry
    }

    fn register(&mut self, cipher: Box<dyn Cipher>) {
        self.algorithms
            .insert(cipher.algorithm().name().to_string(), cipher);
    }

    /// Run an algorithm over a message and return the encoded
    /// ciphertext.
    ///
    /// Key material generated during the run is stored under the
    /// algorithm id, replacing any material from a previous run. The
    /// `include_non_alphabetic` flag is forwarded only to the
    /// alphabetic ciphers and defaults to pass-through when omitted.
    pub fn run(
        &mut self,
        algorithm_id: &str,
        message: &str,
        key: Option<CipherKey>,
        include_non_alphabetic: Option<bool>,
    ) -> Result<String> {
        let cipher = self
            .algorithms
            .get(algorithm_id)
            .ok_or_else(|| Error::UnknownAlgorithm(algorithm_id.to_string()))?;
        let algorithm = cipher.algorithm();
        let descriptor = algorithm.descriptor();

        if message.is_empty() {
            return Err(Error::Cipher {
                algorithm: algorithm_id.to_string(),
                source: CipherError::EmptyMessage,
            });
        }
        validate_key(algorithm_id, &descriptor, key.as_ref())?;

        let request = CipherRequest {
            message: message.to_string(),
            key,
            include_non_alphabetic: if algorithm.uses_alphabetic_flag() {
                include_non_alphabetic.unwrap_or(true)
            } else {
                true
            },
        };

        let output = cipher.encrypt(&request).map_err(|source| Error::Cipher {
            algorithm: algorithm_id.to_string(),
            source,
        })?;

        debug!(
            "ran '{}' over {} input bytes",
            algorithm_id,
            message.len()
        );

        if descriptor.generates_key {
            if let Some(material) = output.material {
                self.generated_material
                    .insert(algorithm_id.to_string(), material);
            }
        }

        Ok(output.ciphertext)
    }

    /// Key material generated by the most recent run of the algorithm,
    /// or `None` when it never generated any in this registry
    pub fn get_generated_key(&self, algorithm_id: &str) -> Option<&KeyMaterial> {
        self.generated_material.get(algorithm_id)
    }

    /// Static descriptor for a registered algorithm
    pub fn descriptor(&self, algorithm_id: &str) -> Option<AlgorithmDescriptor> {
        self.algorithms
            .get(algorithm_id)
            .map(|cipher| cipher.algorithm().descriptor())
    }

    /// Ids of all registered algorithms
    pub fn list_algorithms(&self) -> Vec<String> {
        self.algorithms.keys().cloned().collect()
    }
}

impl Default for CipherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Check the supplied key against the descriptor's expected kind.
fn validate_key(
    algorithm_id: &str,
    descriptor: &AlgorithmDescriptor,
    key: Option<&CipherKey>,
) -> Result<()> {
    match (descriptor.key_kind, key) {
        (KeyKind::Integer, Some(CipherKey::Integer(_))) => Ok(()),
        (KeyKind::Text, Some(CipherKey::Text(text))) => {
            if text.is_empty() {
                Err(Error::Cipher {
                    algorithm: algorithm_id.to_string(),
                    source: CipherError::EmptyKey,
                })
            } else {
                Ok(())
            }
        }
        (KeyKind::None, None) => Ok(()),
        (KeyKind::Integer | KeyKind::Text, None) => Err(Error::Cipher {
            algorithm: algorithm_id.to_string(),
            source: CipherError::EmptyKey,
        }),
        _ => Err(Error::InvalidKeyType {
            algorithm: algorithm_id.to_string(),
            expected: descriptor.key_kind,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_algorithm() {
        let mut registry = CipherRegistry::new();
        let result = registry.run("rot13", "message", None, None);
        assert!(matches!(result, Err(Error::UnknownAlgorithm(id)) if id == "rot13"));
    }

    #[test]
    fn test_empty_message_rejected() {
        let mut registry = CipherRegistry::new();
        let result = registry.run("caesar", "", Some(CipherKey::Integer(3)), None);
        match result {
            Err(Error::Cipher { algorithm, source }) => {
                assert_eq!(algorithm, "caesar");
                assert_eq!(source, CipherError::EmptyMessage);
            }
            other => panic!("expected cipher error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_required_key() {
        let mut registry = CipherRegistry::new();
        let result = registry.run("vigenere", "message", None, None);
        match result {
            Err(Error::Cipher { source, .. }) => assert_eq!(source, CipherError::EmptyKey),
            other => panic!("expected cipher error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_text_key() {
        let mut registry = CipherRegistry::new();
        let result = registry.run(
            "rc4",
            "message",
            Some(CipherKey::Text(String::new())),
            None,
        );
        match result {
            Err(Error::Cipher { source, .. }) => assert_eq!(source, CipherError::EmptyKey),
            other => panic!("expected cipher error, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_key_variant() {
        let mut registry = CipherRegistry::new();
        let result = registry.run(
            "caesar",
            "message",
            Some(CipherKey::Text("three".to_string())),
            None,
        );
        assert!(matches!(
            result,
            Err(Error::InvalidKeyType {
                expected: KeyKind::Integer,
                ..
            })
        ));
    }

    #[test]
    fn test_unexpected_key_for_generating_algorithm() {
        let mut registry = CipherRegistry::new();
        let result = registry.run(
            "aes128cbc",
            "message",
            Some(CipherKey::Text("unwanted".to_string())),
            None,
        );
        assert!(matches!(
            result,
            Err(Error::InvalidKeyType {
                expected: KeyKind::None,
                ..
            })
        ));
    }

    #[test]
    fn test_flag_defaults_to_passthrough() {
        let mut registry = CipherRegistry::new();
        let with_flag = registry
            .run("caesar", "a b", Some(CipherKey::Integer(1)), Some(true))
            .unwrap();
        let without_flag = registry
            .run("caesar", "a b", Some(CipherKey::Integer(1)), None)
            .unwrap();
        assert_eq!(with_flag, without_flag);
    }

    #[test]
    fn test_material_only_stored_for_generating_algorithms() {
        let mut registry = CipherRegistry::new();
        registry
            .run("caesar", "abc", Some(CipherKey::Integer(1)), None)
            .unwrap();
        assert!(registry.get_generated_key("caesar").is_none());
    }

    #[test]
    fn test_material_overwritten_per_run() {
        let mut registry = CipherRegistry::new();
        assert!(registry.get_generated_key("aes128cbc").is_none());

        registry.run("aes128cbc", "first", None, None).unwrap();
        let first_key = registry
            .get_generated_key("aes128cbc")
            .and_then(KeyMaterial::key_hex)
            .unwrap();

        registry.run("aes128cbc", "second", None, None).unwrap();
        let second_key = registry
            .get_generated_key("aes128cbc")
            .and_then(KeyMaterial::key_hex)
            .unwrap();

        assert_ne!(first_key, second_key);
    }

    #[test]
    fn test_registries_do_not_share_material() {
        let mut first = CipherRegistry::new();
        let second = CipherRegistry::new();

        first.run("aes128cbc", "isolated", None, None).unwrap();
        assert!(first.get_generated_key("aes128cbc").is_some());
        assert!(second.get_generated_key("aes128cbc").is_none());
    }

    #[test]
    fn test_descriptor_lookup() {
        let registry = CipherRegistry::new();
        let descriptor = registry.descriptor("caesar").unwrap();
        assert_eq!(descriptor.key_kind, KeyKind::Integer);
        assert!(registry.descriptor("rot13").is_none());

        let mut ids = registry.list_algorithms();
        ids.sort();
        assert_eq!(ids, vec!["aes128cbc", "caesar", "rc4", "rsa", "vigenere"]);
    }
}
