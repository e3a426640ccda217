/*!
Algorithm identifiers and their static metadata.

One descriptor per algorithm, loaded once and never mutated. A caller
consults the descriptor to decide which key input to collect and whether
generated key material will be available after a run.
*/

use std::fmt;

#[cfg(feature = "serde-support")]
use serde::Serialize;

/// The supported cipher algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub enum CipherAlgorithm {
    /// Alphabetic shift cipher
    Caesar,
    /// Polyalphabetic substitution cipher
    Vigenere,
    /// RC4 stream cipher
    Rc4,
    /// AES-128 in cipher-block-chaining mode
    Aes128Cbc,
    /// RSA public-key cipher
    Rsa,
}

/// Kind of key an algorithm expects from the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub enum KeyKind {
    /// The algorithm generates its own key material
    None,
    /// Integer key
    Integer,
    /// Text key
    Text,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::None => write!(f, "no key"),
            KeyKind::Integer => write!(f, "an integer key"),
            KeyKind::Text => write!(f, "a text key"),
        }
    }
}

/// Static metadata describing one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub struct AlgorithmDescriptor {
    /// Registry id
    pub id: &'static str,
    /// Kind of key the caller must supply
    pub key_kind: KeyKind,
    /// Label for the key input field
    pub key_label: &'static str,
    /// Whether the algorithm returns generated key material
    pub generates_key: bool,
}

/// All supported algorithms, in registration order
pub const ALGORITHMS: [CipherAlgorithm; 5] = [
    CipherAlgorithm::Caesar,
    CipherAlgorithm::Vigenere,
    CipherAlgorithm::Rc4,
    CipherAlgorithm::Aes128Cbc,
    CipherAlgorithm::Rsa,
];

impl CipherAlgorithm {
    /// Registry id of the algorithm
    pub fn name(&self) -> &'static str {
        match self {
            CipherAlgorithm::Caesar => "caesar",
            CipherAlgorithm::Vigenere => "vigenere",
            CipherAlgorithm::Rc4 => "rc4",
            CipherAlgorithm::Aes128Cbc => "aes128cbc",
            CipherAlgorithm::Rsa => "rsa",
        }
    }

    /// Kind of key the algorithm expects
    pub fn key_kind(&self) -> KeyKind {
        match self {
            CipherAlgorithm::Caesar => KeyKind::Integer,
            CipherAlgorithm::Vigenere | CipherAlgorithm::Rc4 => KeyKind::Text,
            CipherAlgorithm::Aes128Cbc | CipherAlgorithm::Rsa => KeyKind::None,
        }
    }

    /// Label for the key input field
    pub fn key_label(&self) -> &'static str {
        match self {
            CipherAlgorithm::Caesar => "Number of Shifts",
            CipherAlgorithm::Vigenere | CipherAlgorithm::Rc4 => "Key",
            CipherAlgorithm::Aes128Cbc | CipherAlgorithm::Rsa => "",
        }
    }

    /// Whether the algorithm returns generated key material
    pub fn generates_key(&self) -> bool {
        matches!(self, CipherAlgorithm::Aes128Cbc | CipherAlgorithm::Rsa)
    }

    /// Whether the non-alphabetic pass-through flag applies
    pub fn uses_alphabetic_flag(&self) -> bool {
        matches!(self, CipherAlgorithm::Caesar | CipherAlgorithm::Vigenere)
    }

    /// The static descriptor for this algorithm
    pub fn descriptor(&self) -> AlgorithmDescriptor {
        AlgorithmDescriptor {
            id: self.name(),
            key_kind: self.key_kind(),
            key_label: self.key_label(),
            generates_key: self.generates_key(),
        }
    }
}
