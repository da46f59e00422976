//! Error types for the bech32 codec and the key format helpers.

use schnorr::SchnorrError;
use thiserror::Error;

/// Reasons a string is not valid bech32, or an hrp cannot be encoded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum Bech32Error {
    #[error("bech32 string mixes upper and lower case")]
    MixedCase,

    #[error("bech32 string has no '1' separator")]
    MissingSeparator,

    /// Empty hrp, or fewer than six characters after the separator.
    #[error("bech32 string is too short")]
    InvalidLength,

    /// The hrp is empty, longer than 83 characters, contains uppercase
    /// letters or characters outside ASCII 33..=126.
    #[error("invalid human-readable part")]
    InvalidHrp,

    #[error("invalid bech32 character {0:?}")]
    InvalidChar(char),

    #[error("bech32 checksum mismatch")]
    InvalidChecksum,

    /// The 5-bit groups do not pack into whole bytes with zero padding.
    #[error("non-canonical bech32 padding")]
    InvalidPadding,
}

/// Errors from parsing or encoding human-readable Nostr keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Nip19Error {
    #[error(transparent)]
    InvalidBech32(#[from] Bech32Error),

    #[error("expected prefix {expected:?}, found {found:?}")]
    UnexpectedPrefix {
        expected: &'static str,
        found: String,
    },

    #[error("key payload must be 32 bytes, got {0}")]
    InvalidPayloadLength(usize),

    #[error("invalid hex encoding")]
    InvalidHex,

    /// Neither a bech32 key with the right prefix nor 64 hex characters.
    #[error("unrecognized key format")]
    InvalidKeyFormat,

    #[error(transparent)]
    Key(#[from] SchnorrError),
}
