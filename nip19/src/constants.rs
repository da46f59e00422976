//! Bech32 alphabet, checksum parameters and NIP-19 prefixes.

/// The 32-character bech32 alphabet, indexed by 5-bit value.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// BCH generator constants for the bech32 checksum.
pub(crate) const GENERATOR: [u32; 5] = [
    0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3,
];

/// Constant the polymod of a valid bech32 (not bech32m) string must equal.
pub(crate) const CHECKSUM_CONST: u32 = 1;

/// Number of checksum characters at the end of every bech32 string.
pub const CHECKSUM_LENGTH: usize = 6;

/// Longest human-readable part bech32 allows.
pub const MAX_HRP_LENGTH: usize = 83;

/// Separator between the human-readable part and the data.
pub(crate) const SEPARATOR: char = '1';

/// Human-readable part for public keys.
pub const NPUB_HRP: &str = "npub";

/// Human-readable part for private keys.
pub const NSEC_HRP: &str = "nsec";

/// Characters of an npub kept by [`crate::shorten_pubkey`] in the usual
/// list layout.
pub const DEFAULT_SHORTEN_WIDTH: usize = 12;

/// Length of a hex-encoded 32-byte key.
pub(crate) const HEX_KEY_LENGTH: usize = 64;
