/*!
Cipher implementations and dispatch for the engine.

This module provides the five cipher algorithms, the uniform trait
they implement, and the registry that dispatches between them.
*/

// Algorithm implementations
pub mod algorithms;

// Registry for algorithm dispatch
pub mod registry;

// Shared traits
pub mod traits;

// Common types
pub mod types;

// Re-export frequently used types

// Big-integer type carried inside RSA key material
pub use num_bigint_dig::BigUint;

pub use registry::CipherRegistry;
pub use traits::cipher::Cipher;
pub use types::algorithms::{AlgorithmDescriptor, CipherAlgorithm, KeyKind, ALGORITHMS};
pub use types::material::{KeyMaterial, RsaKey};
pub use types::request::{CipherKey, CipherOutput, CipherRequest};
