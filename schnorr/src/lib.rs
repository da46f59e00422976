//! BIP-340 Schnorr signatures, x-only key derivation and legacy ECDH over secp256k1.
//!
//! This library implements the signing side of the primitives a Nostr client
//! needs, on top of the in-tree `curve` crate:
//! - x-only public key derivation ([`pubkey_create`])
//! - BIP-340 signing of 32-byte digests with tagged hashing ([`schnorr_sign`])
//! - the NIP-04 x-only Diffie-Hellman shared x-coordinate ([`ecdh_nip04`])
//!
//! Every function is pure and stateless; the only outside input is the
//! CSPRNG used for auxiliary randomness when the caller does not supply it.
//!
//! # Example
//!
//! ```
//! use schnorr::SecretKey;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let secret = SecretKey::random(&mut rng);
//! let public = secret.public_key().expect("valid key");
//!
//! // Nostr signs the 32-byte event id.
//! let event_id = [0x5a; 32];
//! let signature = secret.sign(&mut rng, &event_id).expect("signing failed");
//! assert_eq!(signature.to_bytes().len(), 64);
//! assert_eq!(public.to_bytes().len(), 32);
//! ```
//!
//! # Security Considerations
//!
//! - Scalar multiplication is variable-time double-and-add
//! - Messages must be pre-hashed to exactly 32 bytes
//! - Auxiliary randomness should come from a CSPRNG; it is never reused across calls

mod constants;
mod ecdh;
mod errors;
mod keys;
mod signatures;


pub use constants::{AUX_RAND_SIZE, MESSAGE_SIZE, PUBLIC_KEY_SIZE, SECRET_KEY_SIZE, SIGNATURE_SIZE};
pub use ecdh::ecdh_nip04;
pub use errors::SchnorrError;
pub use keys::{SecretKey, XOnlyPublicKey, pubkey_create};
pub use signatures::{Signature, schnorr_sign, tagged_hash};
