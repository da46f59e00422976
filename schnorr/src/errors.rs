//! Error types for key derivation, signing and ECDH.

use thiserror::Error;

/// Errors that can occur while deriving keys, signing or computing shared secrets.
///
/// Every operation in this crate is a deterministic function of its inputs,
/// so retrying with the same input reproduces the same error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SchnorrError {
    /// The private scalar is zero or not below the group order n.
    #[error("private key is outside the range 0 < d < n")]
    InvalidKeyRange,

    /// A point at infinity was produced where a finite point was expected.
    ///
    /// For a valid private key this cannot happen during key derivation; it
    /// is reachable through ECDH with a scalar that reduces to zero mod n.
    #[error("point at infinity")]
    PointAtInfinity,

    /// The message to sign is not a 32-byte digest.
    #[error("message must be 32 bytes, got {len}")]
    InvalidMessageLength { len: usize },

    /// The derived signing nonce reduced to zero. Cryptographically negligible.
    #[error("signing nonce is zero")]
    NonceIsZero,

    /// An x-only public key is not the x-coordinate of any curve point.
    #[error("public key is not a valid x-coordinate on secp256k1")]
    InvalidPublicKey,
}
