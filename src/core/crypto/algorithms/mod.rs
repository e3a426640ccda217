/*!
The five cipher algorithm implementations.
*/

// Alphabetic shift cipher
pub mod caesar;

// Polyalphabetic substitution cipher
pub mod vigenere;

// Stream cipher
pub mod rc4;

// Block cipher in chained mode
pub mod aes;

// Public-key cipher
pub mod rsa;

pub use aes::Aes128CbcCipher;
pub use caesar::CaesarCipher;
pub use rc4::Rc4Cipher;
pub use rsa::RsaCipher;
pub use vigenere::VigenereCipher;
