//! Base field of secp256k1. p = 2^256 - 2^32 - 977
//!
//! Elements are kept in Montgomery form as [u64; 4] in little-endian order.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use crate::arithmetic::{
    add_mod, is_canonical, limbs_from_be_bytes, limbs_to_be_bytes, montgomery_mul, neg_mod,
    sub_mod, Montgomery,
};

/// Field element of GF(p), in Montgomery form.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FieldElement {
    /// Montgomery form: value * R mod p, where R = 2^256
    limbs: [u64; 4],
}

// Field modulus: p = 0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f
const MODULUS: [u64; 4] = [
    0xfffffffefffffc2f,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
];

const PARAMS: Montgomery = Montgomery {
    modulus: MODULUS,
    r: [0x00000001000003d1, 0, 0, 0],
    r2: [0x000007a2000e90a1, 0x0000000000000001, 0, 0],
    mu: 0xd838091dd2253531,
};

// p - 2, the Fermat inversion exponent
const P_MINUS_2: [u64; 4] = [
    0xfffffffefffffc2d,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
];

// (p + 1) / 4, the square root exponent (p = 3 mod 4)
const SQRT_EXP: [u64; 4] = [
    0xffffffffbfffff0c,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0x3fffffffffffffff,
];

impl FieldElement {
    pub const ZERO: Self = FieldElement {
        limbs: [0, 0, 0, 0],
    };

    pub const ONE: Self = FieldElement { limbs: PARAMS.r };

    /// Build from canonical little-endian limbs. Returns `None` if the value is not below p.
    pub fn from_canonical_limbs(limbs: [u64; 4]) -> Option<Self> {
        if !is_canonical(limbs, MODULUS) {
            return None;
        }
        Some(FieldElement {
            limbs: montgomery_mul(limbs, PARAMS.r2, &PARAMS),
        })
    }

    #[inline]
    pub fn from_canonical_u64(val: u64) -> Self {
        FieldElement {
            limbs: montgomery_mul([val, 0, 0, 0], PARAMS.r2, &PARAMS),
        }
    }

    /// Parse a 32-byte big-endian encoding. Values >= p are rejected.
    pub fn from_bytes(bytes: &[u8; 32]) -> Option<Self> {
        Self::from_canonical_limbs(limbs_from_be_bytes(bytes))
    }

    /// The canonical value as 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        limbs_to_be_bytes(self.to_canonical_limbs())
    }

    /// Convert out of Montgomery form.
    #[inline]
    pub fn to_canonical_limbs(&self) -> [u64; 4] {
        montgomery_mul(self.limbs, [1, 0, 0, 0], &PARAMS)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    /// Parity of the canonical value.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.to_canonical_limbs()[0] & 1 == 1
    }

    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Variable-time exponentiation by a canonical exponent.
    pub fn pow_vartime(&self, exp: [u64; 4]) -> Self {
        let mut result = Self::ONE;
        let mut base = *self;

        // Process bits from least significant to most significant
        for &limb in exp.iter() {
            let mut remaining = limb;
            for _ in 0..64 {
                if remaining & 1 == 1 {
                    result *= base;
                }
                base = base.square();
                remaining >>= 1;
            }
        }

        result
    }

    /// Multiplicative inverse via a^{p-2}. The inverse of zero is zero.
    pub fn inverse(&self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        self.pow_vartime(P_MINUS_2)
    }

    /// Square root, if one exists. Returns the candidate a^((p+1)/4) only when it squares back.
    pub fn sqrt(&self) -> Option<Self> {
        let candidate = self.pow_vartime(SQRT_EXP);
        if candidate.square() == *self {
            Some(candidate)
        } else {
            None
        }
    }
}

impl Add for FieldElement {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        FieldElement {
            limbs: add_mod(self.limbs, rhs.limbs, MODULUS),
        }
    }
}

impl AddAssign for FieldElement {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for FieldElement {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        FieldElement {
            limbs: sub_mod(self.limbs, rhs.limbs, MODULUS),
        }
    }
}

impl SubAssign for FieldElement {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for FieldElement {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        FieldElement {
            limbs: neg_mod(self.limbs, MODULUS),
        }
    }
}

impl Mul for FieldElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        FieldElement {
            limbs: montgomery_mul(self.limbs, rhs.limbs, &PARAMS),
        }
    }
}

impl MulAssign for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Div for FieldElement {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let canonical = self.to_canonical_limbs();
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            canonical[3], canonical[2], canonical[1], canonical[0]
        )
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn modulus() -> BigUint {
        BigUint::from_bytes_be(&limbs_to_be_bytes(MODULUS))
    }

    fn to_big(a: &FieldElement) -> BigUint {
        BigUint::from_bytes_be(&a.to_bytes())
    }

    fn from_hex(s: &str) -> FieldElement {
        let mut bytes = [0u8; 32];
        let raw: Vec<u8> = (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect();
        bytes[32 - raw.len()..].copy_from_slice(&raw);
        FieldElement::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn test_zero_one() {
        assert_eq!(FieldElement::ZERO + FieldElement::ZERO, FieldElement::ZERO);
        assert_eq!(FieldElement::ONE * FieldElement::ONE, FieldElement::ONE);
        assert_eq!(FieldElement::ZERO * FieldElement::ONE, FieldElement::ZERO);
        assert_eq!(FieldElement::from_canonical_u64(1), FieldElement::ONE);
    }

    #[test]
    fn test_small_arithmetic() {
        let a = FieldElement::from_canonical_u64(6);
        let b = FieldElement::from_canonical_u64(7);
        assert_eq!(a * b, FieldElement::from_canonical_u64(42));
        assert_eq!(a + b, FieldElement::from_canonical_u64(13));
        assert_eq!(b - a, FieldElement::ONE);
        assert_eq!(a + (-a), FieldElement::ZERO);
    }

    #[test]
    fn test_matches_biguint_near_modulus() {
        let p = modulus();
        let a = from_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2e");
        let b = from_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");

        assert_eq!(to_big(&(a * b)), (to_big(&a) * to_big(&b)) % &p);
        assert_eq!(to_big(&(a + b)), (to_big(&a) + to_big(&b)) % &p);
        assert_eq!(to_big(&(b - a)), (to_big(&b) + &p - to_big(&a)) % &p);
        assert_eq!(to_big(&a.square()), (to_big(&a) * to_big(&a)) % &p);
    }

    #[test]
    fn test_inverse() {
        let a = FieldElement::from_canonical_u64(5);
        assert_eq!(a * a.inverse(), FieldElement::ONE);
        assert_eq!(FieldElement::ZERO.inverse(), FieldElement::ZERO);
    }

    #[test]
    fn test_sqrt() {
        let nine = FieldElement::from_canonical_u64(9);
        let root = nine.sqrt().unwrap();
        assert_eq!(root.square(), nine);

        // 7 = y^2 at x = 0 has no solution on secp256k1.
        assert!(FieldElement::from_canonical_u64(7).sqrt().is_none());
    }

    #[test]
    fn test_bytes_reject_modulus() {
        assert!(FieldElement::from_bytes(&limbs_to_be_bytes(MODULUS)).is_none());
        assert!(FieldElement::from_bytes(&[0xff; 32]).is_none());

        let x = from_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
        assert_eq!(FieldElement::from_bytes(&x.to_bytes()), Some(x));
    }

    #[test]
    fn test_parity() {
        assert!(FieldElement::ONE.is_odd());
        assert!(!FieldElement::from_canonical_u64(2).is_odd());
        // p - 1 is even.
        assert!(!(-FieldElement::ONE).is_odd());
    }
}
