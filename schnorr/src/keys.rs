//! Secret keys and x-only public keys.

use core::fmt;

use curve::{Affine, FieldElement, RandomField, Scalar};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::constants::{AUX_RAND_SIZE, PUBLIC_KEY_SIZE, SECRET_KEY_SIZE};
use crate::errors::SchnorrError;
use crate::signatures::{Signature, sign_prehashed};

/// A secp256k1 private key: a scalar `d` with `0 < d < n`.
///
/// The `Debug` output never includes the scalar.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct SecretKey {
    scalar: Scalar,
}

/// A BIP-340 x-only public key: the x-coordinate of the even-y point `d * G`.
///
/// Construction through [`XOnlyPublicKey::from_bytes`] (and deserialization)
/// checks that the bytes are the x-coordinate of a curve point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 32]", into = "[u8; 32]")]
pub struct XOnlyPublicKey([u8; PUBLIC_KEY_SIZE]);

impl SecretKey {
    /// Parses a 32-byte big-endian scalar, rejecting `0` and anything `>= n`.
    pub fn from_bytes(bytes: &[u8; SECRET_KEY_SIZE]) -> Result<Self, SchnorrError> {
        match Scalar::from_bytes(bytes) {
            Some(scalar) if !scalar.is_zero() => Ok(Self { scalar }),
            _ => Err(SchnorrError::InvalidKeyRange),
        }
    }

    /// Generates a fresh key from a cryptographically secure RNG.
    pub fn random<R: CryptoRng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let scalar = Scalar::random(rng);
            if !scalar.is_zero() {
                return Self { scalar };
            }
        }
    }

    /// The 32-byte big-endian encoding of the scalar.
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_SIZE] {
        self.scalar.to_bytes()
    }

    pub(crate) fn scalar(&self) -> Scalar {
        self.scalar
    }

    /// `d * G`, the full public point (before the even-y normalization).
    pub(crate) fn public_point(&self) -> Result<Affine, SchnorrError> {
        let point = Affine::mul_generator(&self.scalar);
        if point.is_infinity() {
            return Err(SchnorrError::PointAtInfinity);
        }
        Ok(point)
    }

    /// Derives the x-only public key.
    pub fn public_key(&self) -> Result<XOnlyPublicKey, SchnorrError> {
        let point = self.public_point()?;
        Ok(XOnlyPublicKey(x_only_bytes(&point)?))
    }

    /// Signs a 32-byte message digest with explicit auxiliary randomness.
    ///
    /// The output is fully determined by the key, the message and `aux`.
    pub fn sign_with_aux(
        &self,
        msg: &[u8],
        aux: &[u8; AUX_RAND_SIZE],
    ) -> Result<Signature, SchnorrError> {
        sign_prehashed(self, msg, aux)
    }

    /// Signs a 32-byte message digest, drawing fresh auxiliary randomness from `rng`.
    pub fn sign<R: CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        msg: &[u8],
    ) -> Result<Signature, SchnorrError> {
        let mut aux = [0u8; AUX_RAND_SIZE];
        rng.fill_bytes(&mut aux);
        let signature = sign_prehashed(self, msg, &aux);
        aux.zeroize();
        signature
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

impl XOnlyPublicKey {
    /// Accepts the bytes only if they are the x-coordinate of a curve point.
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_SIZE]) -> Result<Self, SchnorrError> {
        lift_x_bytes(bytes)?;
        Ok(Self(*bytes))
    }

    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// The even-y curve point this key stands for.
    pub fn to_point(&self) -> Result<Affine, SchnorrError> {
        lift_x_bytes(&self.0)
    }
}

impl TryFrom<[u8; PUBLIC_KEY_SIZE]> for XOnlyPublicKey {
    type Error = SchnorrError;

    fn try_from(bytes: [u8; PUBLIC_KEY_SIZE]) -> Result<Self, Self::Error> {
        Self::from_bytes(&bytes)
    }
}

impl From<XOnlyPublicKey> for [u8; PUBLIC_KEY_SIZE] {
    fn from(key: XOnlyPublicKey) -> Self {
        key.0
    }
}

/// Computes the x-only public key for a 32-byte private scalar.
///
/// Fails with [`SchnorrError::InvalidKeyRange`] unless `0 < d < n`.
///
/// # Example
///
/// ```
/// let mut one = [0u8; 32];
/// one[31] = 1;
/// let pubkey = schnorr::pubkey_create(&one).expect("1 is a valid key");
/// assert_eq!(pubkey[0], 0x79);
/// ```
pub fn pubkey_create(secret: &[u8; SECRET_KEY_SIZE]) -> Result<[u8; PUBLIC_KEY_SIZE], SchnorrError> {
    let key = SecretKey::from_bytes(secret)?;
    Ok(key.public_key()?.to_bytes())
}

/// The 32-byte x-coordinate of a finite point.
pub(crate) fn x_only_bytes(point: &Affine) -> Result<[u8; 32], SchnorrError> {
    point
        .x()
        .map(|x| x.to_bytes())
        .ok_or(SchnorrError::PointAtInfinity)
}

/// BIP-340 `lift_x` on a 32-byte big-endian x-coordinate.
pub(crate) fn lift_x_bytes(bytes: &[u8; 32]) -> Result<Affine, SchnorrError> {
    let x = FieldElement::from_bytes(bytes).ok_or(SchnorrError::InvalidPublicKey)?;
    Affine::lift_x(&x).ok_or(SchnorrError::InvalidPublicKey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ORDER: [u8; 32] = [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
        0x41, 0x41,
    ];

    #[test]
    fn test_secret_key_range() {
        assert_eq!(
            SecretKey::from_bytes(&[0u8; 32]),
            Err(SchnorrError::InvalidKeyRange)
        );
        assert_eq!(
            SecretKey::from_bytes(&ORDER),
            Err(SchnorrError::InvalidKeyRange)
        );
        assert_eq!(
            SecretKey::from_bytes(&[0xff; 32]),
            Err(SchnorrError::InvalidKeyRange)
        );

        let mut max = ORDER;
        max[31] -= 1;
        let key = SecretKey::from_bytes(&max).expect("n - 1 is in range");
        assert_eq!(key.to_bytes(), max);
    }

    #[test]
    fn test_random_key_roundtrip() {
        let mut rng = StdRng::seed_from_u64(42);
        let key = SecretKey::random(&mut rng);
        let parsed = SecretKey::from_bytes(&key.to_bytes()).expect("parse");
        assert_eq!(parsed, key);
    }

    #[test]
    fn test_debug_hides_scalar() {
        let mut one = [0u8; 32];
        one[31] = 1;
        let key = SecretKey::from_bytes(&one).expect("key");
        assert_eq!(format!("{:?}", key), "SecretKey(..)");
    }

    #[test]
    fn test_public_key_lifts_to_even_y() {
        let mut rng = StdRng::seed_from_u64(7);
        let key = SecretKey::random(&mut rng);
        let pk = key.public_key().expect("public key");
        let point = pk.to_point().expect("lift");

        assert!(point.has_even_y());
        assert_eq!(point.x().map(|x| x.to_bytes()), Some(pk.to_bytes()));

        let full = key.public_point().expect("point");
        assert!(point == full || point == -full);
    }

    #[test]
    fn test_xonly_rejects_invalid_x() {
        let mut five = [0u8; 32];
        five[31] = 5;
        assert_eq!(
            XOnlyPublicKey::from_bytes(&five),
            Err(SchnorrError::InvalidPublicKey)
        );
        // Not below p.
        assert_eq!(
            XOnlyPublicKey::from_bytes(&[0xff; 32]),
            Err(SchnorrError::InvalidPublicKey)
        );
    }
}
