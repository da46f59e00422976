//! NIP-19 `npub` / `nsec` encoding and hex key parsing.
//!
//! Keys travel as lowercase hex strings between these helpers and the rest of
//! the client. Inputs are trimmed of surrounding whitespace before parsing.

use schnorr::{PUBLIC_KEY_SIZE, SECRET_KEY_SIZE, pubkey_create};

use crate::bech32;
use crate::constants::{HEX_KEY_LENGTH, NPUB_HRP, NSEC_HRP};
use crate::errors::Nip19Error;

const ELLIPSIS: &str = "...";

fn is_hex_key(s: &str) -> bool {
    s.len() == HEX_KEY_LENGTH && s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn has_prefix(s: &str, hrp: &str) -> bool {
    s.get(..hrp.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(hrp))
        && s[hrp.len()..].starts_with('1')
}

fn key_bytes_from_hex(hex_key: &str) -> Result<[u8; 32], Nip19Error> {
    let bytes = hex::decode(hex_key.trim()).map_err(|_| Nip19Error::InvalidHex)?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| Nip19Error::InvalidPayloadLength(len))
}

/// Decodes a bech32 key and checks its prefix and 32-byte payload.
fn decode_key(s: &str, expected: &'static str) -> Result<[u8; 32], Nip19Error> {
    let (hrp, data) = bech32::decode(s.trim())?;
    if hrp != expected {
        return Err(Nip19Error::UnexpectedPrefix {
            expected,
            found: hrp,
        });
    }
    let len = data.len();
    data.try_into()
        .map_err(|_| Nip19Error::InvalidPayloadLength(len))
}

fn encode_key(hex_key: &str, hrp: &str) -> Result<String, Nip19Error> {
    let bytes = key_bytes_from_hex(hex_key)?;
    Ok(bech32::encode(hrp, &bytes)?)
}

/// Parses a private key given as `nsec1...` or 64 hex characters into lowercase hex.
///
/// The scalar range is not checked here; [`derive_public_key`] does that.
pub fn parse_private_key(s: &str) -> Result<String, Nip19Error> {
    let s = s.trim();
    if has_prefix(s, NSEC_HRP) {
        return decode_nsec(s);
    }
    if is_hex_key(s) {
        return Ok(s.to_ascii_lowercase());
    }
    Err(Nip19Error::InvalidKeyFormat)
}

/// Parses a public key given as `npub1...` or 64 hex characters into lowercase hex.
pub fn parse_public_key(s: &str) -> Result<String, Nip19Error> {
    let s = s.trim();
    if has_prefix(s, NPUB_HRP) {
        return decode_npub(s);
    }
    if is_hex_key(s) {
        return Ok(s.to_ascii_lowercase());
    }
    Err(Nip19Error::InvalidKeyFormat)
}

/// Derives the hex x-only public key for a hex private key.
pub fn derive_public_key(secret_hex: &str) -> Result<String, Nip19Error> {
    let secret: [u8; SECRET_KEY_SIZE] = key_bytes_from_hex(secret_hex)?;
    let public = pubkey_create(&secret)?;
    Ok(hex::encode(public))
}

/// Encodes a 32-byte hex public key as `npub1...`.
///
/// # Example
///
/// ```
/// let npub = nip19::encode_npub(
///     "7e7e9c42a91bfef19fa929e5fda1b72e0ebc1a4c1141673e2794234d86addf4e",
/// )
/// .expect("valid key");
/// assert_eq!(npub, "npub10elfcs4fr0l0r8af98jlmgdh9c8tcxjvz9qkw038js35mp4dma8qzvjptg");
/// ```
pub fn encode_npub(public_hex: &str) -> Result<String, Nip19Error> {
    encode_key(public_hex, NPUB_HRP)
}

/// Encodes a 32-byte hex private key as `nsec1...`.
pub fn encode_nsec(secret_hex: &str) -> Result<String, Nip19Error> {
    encode_key(secret_hex, NSEC_HRP)
}

/// Decodes `npub1...` into lowercase hex.
pub fn decode_npub(s: &str) -> Result<String, Nip19Error> {
    let bytes: [u8; PUBLIC_KEY_SIZE] = decode_key(s, NPUB_HRP)?;
    Ok(hex::encode(bytes))
}

/// Decodes `nsec1...` into lowercase hex.
pub fn decode_nsec(s: &str) -> Result<String, Nip19Error> {
    let bytes: [u8; SECRET_KEY_SIZE] = decode_key(s, NSEC_HRP)?;
    Ok(hex::encode(bytes))
}

/// Shortens a hex public key for display: the first `width` characters of
/// its npub followed by `...`.
///
/// If the key cannot be encoded the raw input is shortened the same way.
/// Strings no longer than `width` are returned unchanged.
pub fn shorten_pubkey(public_hex: &str, width: usize) -> String {
    match encode_npub(public_hex) {
        Ok(npub) => truncate(&npub, width),
        Err(err) => {
            tracing::warn!(error = %err, "cannot encode npub for display, shortening raw key");
            truncate(public_hex, width)
        }
    }
}

fn truncate(s: &str, width: usize) -> String {
    match s.char_indices().nth(width) {
        Some((idx, _)) => format!("{}{ELLIPSIS}", &s[..idx]),
        None => s.to_string(),
    }
}
