//! Constants used by key derivation, BIP-340 signing and ECDH.

/// Size of a serialized secret key in bytes (big-endian scalar).
pub const SECRET_KEY_SIZE: usize = 32;

/// Size of an x-only public key in bytes.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of a BIP-340 signature in bytes: `R.x || s`.
pub const SIGNATURE_SIZE: usize = 64;

/// Messages are pre-hashed 32-byte digests (for Nostr, the event id).
pub const MESSAGE_SIZE: usize = 32;

/// Size of the auxiliary randomness mixed into the nonce.
pub const AUX_RAND_SIZE: usize = 32;

/// Tagged-hash domain for the auxiliary randomness mask.
pub(crate) const TAG_AUX: &str = "BIP0340/aux";

/// Tagged-hash domain for nonce derivation.
pub(crate) const TAG_NONCE: &str = "BIP0340/nonce";

/// Tagged-hash domain for the Fiat-Shamir challenge.
pub(crate) const TAG_CHALLENGE: &str = "BIP0340/challenge";
