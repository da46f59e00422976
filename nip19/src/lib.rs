//! Bech32 and NIP-19 key encodings for Nostr.
//!
//! - [`bech32`]: the BIP-173 codec (checksum, 8/5-bit regrouping, strict decoding)
//! - `npub` / `nsec` encoding and decoding of 32-byte keys as lowercase hex
//! - parsing of user-supplied keys in either hex or bech32 form
//! - display shortening of public keys
//!
//! # Example
//!
//! ```
//! let secret = "67dea2ed018072d675f5415ecfaed7d2597555e202d85b3d65ea4e58d2d92ffa";
//! let nsec = nip19::encode_nsec(secret).expect("valid key");
//! assert!(nsec.starts_with("nsec1"));
//! assert_eq!(nip19::parse_private_key(&nsec).expect("parse"), secret);
//!
//! let public = nip19::derive_public_key(secret).expect("in range");
//! let short = nip19::shorten_pubkey(&public, nip19::DEFAULT_SHORTEN_WIDTH);
//! assert!(short.starts_with("npub1") && short.ends_with("..."));
//! ```

pub mod bech32;
mod constants;
mod errors;
mod keys;

#[cfg(test)]
mod tests;

pub use constants::{CHARSET, CHECKSUM_LENGTH, DEFAULT_SHORTEN_WIDTH, MAX_HRP_LENGTH, NPUB_HRP, NSEC_HRP};
pub use errors::{Bech32Error, Nip19Error};
pub use keys::{
    decode_npub, decode_nsec, derive_public_key, encode_npub, encode_nsec, parse_private_key,
    parse_public_key, shorten_pubkey,
};
