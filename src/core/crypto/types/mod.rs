/*!
Common types for the crypto subsystem.
*/

// Algorithm identifiers and static metadata
pub mod algorithms;

// Fixed tables and size parameters
pub mod constants;

// Generated key material
pub mod material;

// Per-invocation request and output
pub mod request;

pub use algorithms::{AlgorithmDescriptor, CipherAlgorithm, KeyKind, ALGORITHMS};
pub use material::{KeyMaterial, RsaKey};
pub use request::{CipherKey, CipherOutput, CipherRequest};
