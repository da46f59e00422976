//! BIP-173 bech32: a checksummed base-32 text encoding with a human-readable prefix.
//!
//! Only the original bech32 checksum constant is supported (not bech32m).
//! No overall length cap is enforced, since NIP-19 payloads may exceed the
//! 90 characters BIP-173 recommends for addresses.

use crate::constants::{
    CHARSET, CHECKSUM_CONST, CHECKSUM_LENGTH, GENERATOR, MAX_HRP_LENGTH, SEPARATOR,
};
use crate::errors::Bech32Error;

/// The BCH checksum over a sequence of 5-bit values.
pub fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &value in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ u32::from(value);
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

/// Expands the hrp for checksumming: high 3 bits of each byte, a zero, then the low 5 bits.
pub fn hrp_expand(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() * 2 + 1);
    out.extend(bytes.iter().map(|b| b >> 5));
    out.push(0);
    out.extend(bytes.iter().map(|b| b & 0x1f));
    out
}

/// Regroups a bit stream from `from`-bit to `to`-bit words.
///
/// With `pad`, a trailing partial group is zero-filled. Without it, the
/// leftover bits must be fewer than `from` and all zero. Returns `None` for
/// an input word wider than `from` bits or for non-canonical padding.
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Option<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let max_value: u32 = (1 << to) - 1;
    let max_acc: u32 = (1 << (from + to - 1)) - 1;
    let mut out = Vec::with_capacity(data.len() * from as usize / to as usize + 1);

    for &value in data {
        let value = u32::from(value);
        if value >> from != 0 {
            return None;
        }
        acc = ((acc << from) | value) & max_acc;
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (to - bits)) & max_value) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & max_value) != 0 {
        return None;
    }

    Some(out)
}

fn create_checksum(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0u8; CHECKSUM_LENGTH]);
    let pm = polymod(&values) ^ CHECKSUM_CONST;

    let mut checksum = [0u8; CHECKSUM_LENGTH];
    for (i, c) in checksum.iter_mut().enumerate() {
        *c = ((pm >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
    }
    checksum
}

fn verify_checksum(hrp: &str, data: &[u8]) -> bool {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    polymod(&values) == CHECKSUM_CONST
}

fn is_valid_hrp_char(c: char) -> bool {
    matches!(c, '!'..='~')
}

fn charset_index(c: char) -> Option<u8> {
    CHARSET
        .iter()
        .position(|&b| char::from(b) == c)
        .map(|i| i as u8)
}

/// Encodes `data` bytes under `hrp`.
///
/// The hrp must be 1..=83 characters of printable ASCII (33..=126) with no
/// uppercase letters.
///
/// # Example
///
/// ```
/// let s = nip19::bech32::encode("a", &[]).expect("valid hrp");
/// assert_eq!(s, "a12uel5l");
/// ```
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, Bech32Error> {
    if hrp.is_empty()
        || hrp.len() > MAX_HRP_LENGTH
        || !hrp.chars().all(is_valid_hrp_char)
        || hrp.chars().any(|c| c.is_ascii_uppercase())
    {
        return Err(Bech32Error::InvalidHrp);
    }

    // 8-bit input always regroups.
    let values = convert_bits(data, 8, 5, true).ok_or(Bech32Error::InvalidPadding)?;
    let checksum = create_checksum(hrp, &values);

    let mut out = String::with_capacity(hrp.len() + 1 + values.len() + CHECKSUM_LENGTH);
    out.push_str(hrp);
    out.push(SEPARATOR);
    for &v in values.iter().chain(checksum.iter()) {
        out.push(char::from(CHARSET[usize::from(v)]));
    }
    Ok(out)
}

/// Decodes a bech32 string into its lowercase hrp and payload bytes.
///
/// The string may be all lowercase or all uppercase. The payload must pack
/// into whole bytes with zero padding.
pub fn decode(s: &str) -> Result<(String, Vec<u8>), Bech32Error> {
    decode_inner(s).inspect_err(|err| {
        tracing::debug!(reason = %err, "rejected bech32 string");
    })
}

fn decode_inner(s: &str) -> Result<(String, Vec<u8>), Bech32Error> {
    let has_lower = s.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = s.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(Bech32Error::MixedCase);
    }
    if let Some(c) = s.chars().find(|&c| !is_valid_hrp_char(c)) {
        return Err(Bech32Error::InvalidChar(c));
    }

    let lower = s.to_ascii_lowercase();
    let sep = lower.rfind(SEPARATOR).ok_or(Bech32Error::MissingSeparator)?;
    let (hrp, rest) = lower.split_at(sep);
    let data_part = &rest[1..];
    if hrp.is_empty() || data_part.len() < CHECKSUM_LENGTH {
        return Err(Bech32Error::InvalidLength);
    }

    let values = data_part
        .chars()
        .map(|c| charset_index(c).ok_or(Bech32Error::InvalidChar(c)))
        .collect::<Result<Vec<u8>, _>>()?;

    if !verify_checksum(hrp, &values) {
        return Err(Bech32Error::InvalidChecksum);
    }

    let payload = &values[..values.len() - CHECKSUM_LENGTH];
    let bytes = convert_bits(payload, 5, 8, false).ok_or(Bech32Error::InvalidPadding)?;
    Ok((hrp.to_string(), bytes))
}
