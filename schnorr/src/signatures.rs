//! BIP-340 signature generation and tagged hashing.

use curve::{Affine, Scalar};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::constants::{
    AUX_RAND_SIZE, MESSAGE_SIZE, SECRET_KEY_SIZE, SIGNATURE_SIZE, TAG_AUX, TAG_CHALLENGE,
    TAG_NONCE,
};
use crate::errors::SchnorrError;
use crate::keys::{SecretKey, x_only_bytes};

/// A BIP-340 signature: the x-coordinate of the nonce point `R` and the scalar `s`.
///
/// Serialized on the wire as the 64 bytes `R.x || s`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// x-coordinate of R = k * G, big-endian
    pub r: [u8; 32],
    /// s = k + e * d mod n, big-endian
    pub s: [u8; 32],
}

impl Signature {
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut out = [0u8; SIGNATURE_SIZE];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }

    pub fn from_bytes(bytes: &[u8; SIGNATURE_SIZE]) -> Self {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Self { r, s }
    }
}

/// `SHA256(SHA256(tag) || SHA256(tag) || data)`, with `data` given as consecutive chunks.
pub fn tagged_hash(tag: &str, chunks: &[&[u8]]) -> [u8; 32] {
    let tag_hash = Sha256::digest(tag.as_bytes());
    let mut hasher = Sha256::new();
    hasher.update(&tag_hash);
    hasher.update(&tag_hash);
    for chunk in chunks {
        hasher.update(*chunk);
    }
    hasher.finalize().into()
}

/// Computes the BIP-340 challenge `e = H_challenge(R.x || P.x || msg) mod n`.
pub(crate) fn hash_challenge(rx: &[u8; 32], px: &[u8; 32], msg: &[u8]) -> Scalar {
    Scalar::from_bytes_reduced(&tagged_hash(TAG_CHALLENGE, &[rx, px, msg]))
}

/// BIP-340 signing of a 32-byte digest.
///
/// 1. `P = d0 * G`; negate `d0` if `P.y` is odd
/// 2. `t = d XOR H_aux(aux)`
/// 3. `k0 = H_nonce(t || P.x || msg) mod n`, which must be non-zero
/// 4. `R = k0 * G`; negate `k0` if `R.y` is odd
/// 5. `s = k + e * d` with `e` from [`hash_challenge`]
pub(crate) fn sign_prehashed(
    key: &SecretKey,
    msg: &[u8],
    aux: &[u8; AUX_RAND_SIZE],
) -> Result<Signature, SchnorrError> {
    if msg.len() != MESSAGE_SIZE {
        return Err(SchnorrError::InvalidMessageLength { len: msg.len() });
    }

    let public = key.public_point()?;
    let px = x_only_bytes(&public)?;
    let d = if public.has_even_y() {
        key.scalar()
    } else {
        -key.scalar()
    };

    let mut t: [u8; SECRET_KEY_SIZE] = d.to_bytes();
    let mask = tagged_hash(TAG_AUX, &[aux]);
    for (byte, m) in t.iter_mut().zip(mask.iter()) {
        *byte ^= m;
    }

    let mut nonce_hash = tagged_hash(TAG_NONCE, &[&t, &px, msg]);
    t.zeroize();
    let k0 = Scalar::from_bytes_reduced(&nonce_hash);
    nonce_hash.zeroize();

    if k0.is_zero() {
        tracing::debug!("BIP-340 nonce reduced to zero, refusing to sign");
        return Err(SchnorrError::NonceIsZero);
    }

    let nonce_point = Affine::mul_generator(&k0);
    let rx = x_only_bytes(&nonce_point)?;
    let k = if nonce_point.has_even_y() { k0 } else { -k0 };

    let e = hash_challenge(&rx, &px, msg);
    let s = k + e * d;

    tracing::trace!(pubkey = ?px, "produced BIP-340 signature");

    Ok(Signature {
        r: rx,
        s: s.to_bytes(),
    })
}

/// Signs a 32-byte message digest with a raw 32-byte private key.
///
/// With `aux = None`, 32 bytes of auxiliary randomness are drawn from the
/// thread-local CSPRNG for this call only; with `Some(aux)` the signature is
/// deterministic.
///
/// # Example
///
/// ```
/// let mut key = [0u8; 32];
/// key[31] = 3;
/// let msg = [0u8; 32];
/// let aux = [0u8; 32];
/// let sig = schnorr::schnorr_sign(&msg, &key, Some(&aux)).expect("sign");
/// assert_eq!(sig[0], 0xe9);
/// ```
pub fn schnorr_sign(
    msg: &[u8],
    privkey: &[u8; SECRET_KEY_SIZE],
    aux: Option<&[u8; AUX_RAND_SIZE]>,
) -> Result<[u8; SIGNATURE_SIZE], SchnorrError> {
    if msg.len() != MESSAGE_SIZE {
        return Err(SchnorrError::InvalidMessageLength { len: msg.len() });
    }
    let key = SecretKey::from_bytes(privkey)?;
    let signature = match aux {
        Some(aux) => key.sign_with_aux(msg, aux)?,
        None => key.sign(&mut rand::rng(), msg)?,
    };
    Ok(signature.to_bytes())
}
