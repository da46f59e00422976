//! Scalar field of secp256k1. n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
//!
//! This implementation uses Montgomery form for modular arithmetic.
//! The field element is represented as [u64; 4] in little-endian order.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use crate::arithmetic::{
    add_mod, is_canonical, limbs_from_be_bytes, limbs_to_be_bytes, montgomery_mul, neg_mod,
    sub_limbs, sub_mod, Montgomery,
};
use crate::group::ScalarBits;

/// Scalar field element for the curve
/// Represented in Montgomery form with [u64; 4]
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Scalar {
    /// Montgomery form: value * R mod n, where R = 2^256
    limbs: [u64; 4],
}

// Group order: n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
pub(crate) const MODULUS: [u64; 4] = [
    0xbfd25e8cd0364141,
    0xbaaedce6af48a03b,
    0xfffffffffffffffe,
    0xffffffffffffffff,
];

const PARAMS: Montgomery = Montgomery {
    modulus: MODULUS,
    r: [0x402da1732fc9bebf, 0x4551231950b75fc4, 0x0000000000000001, 0],
    r2: [
        0x896cf21467d7d140,
        0x741496c20e7cf878,
        0xe697f5e45bcd07c6,
        0x9d671cd581c69bc5,
    ],
    mu: 0x4b0dff665588b13f,
};

// n - 2, the Fermat inversion exponent
const N_MINUS_2: [u64; 4] = [
    0xbfd25e8cd036413f,
    0xbaaedce6af48a03b,
    0xfffffffffffffffe,
    0xffffffffffffffff,
];

impl Scalar {
    /// Zero element (in Montgomery form)
    pub const ZERO: Self = Scalar {
        limbs: [0, 0, 0, 0],
    };

    /// One element (in Montgomery form: R mod n)
    pub const ONE: Self = Scalar { limbs: PARAMS.r };

    /// Create a new scalar from a u64 value
    #[inline]
    pub fn from_canonical_u64(val: u64) -> Self {
        Scalar {
            limbs: montgomery_mul([val, 0, 0, 0], PARAMS.r2, &PARAMS),
        }
    }

    /// Build from canonical little-endian limbs. Returns `None` if the value is not below n.
    pub fn from_canonical_limbs(limbs: [u64; 4]) -> Option<Self> {
        if !is_canonical(limbs, MODULUS) {
            return None;
        }
        Some(Self::from_reduced_limbs(limbs))
    }

    #[inline]
    fn from_reduced_limbs(limbs: [u64; 4]) -> Self {
        Scalar {
            limbs: montgomery_mul(limbs, PARAMS.r2, &PARAMS),
        }
    }

    /// Parse a 32-byte big-endian integer, rejecting values >= n.
    pub fn from_bytes(bytes: &[u8; 32]) -> Option<Self> {
        Self::from_canonical_limbs(limbs_from_be_bytes(bytes))
    }

    /// Interpret 32 big-endian bytes as an integer and reduce it mod n.
    ///
    /// Any 256-bit value is below 2n, so one conditional subtraction suffices.
    pub fn from_bytes_reduced(bytes: &[u8; 32]) -> Self {
        let limbs = limbs_from_be_bytes(bytes);
        let (reduced, borrow) = sub_limbs(limbs, MODULUS);
        if borrow {
            Self::from_reduced_limbs(limbs)
        } else {
            Self::from_reduced_limbs(reduced)
        }
    }

    /// The canonical value as 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        limbs_to_be_bytes(self.to_canonical_limbs())
    }

    /// Convert from Montgomery form to canonical form
    #[inline]
    pub fn to_canonical_limbs(&self) -> [u64; 4] {
        montgomery_mul(self.limbs, [1, 0, 0, 0], &PARAMS)
    }

    /// Check if this scalar is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    /// Compute multiplicative inverse using Fermat's little theorem: a^{n-2}
    pub fn inverse(&self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        self.pow_vartime(N_MINUS_2)
    }

    /// Variable-time exponentiation
    fn pow_vartime(&self, exp: [u64; 4]) -> Self {
        let mut result = Self::ONE;
        let mut base = *self;

        for &limb in exp.iter() {
            let mut remaining = limb;
            for _ in 0..64 {
                if remaining & 1 == 1 {
                    result *= base;
                }
                base = base * base;
                remaining >>= 1;
            }
        }

        result
    }
}

impl ScalarBits for Scalar {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        self.to_canonical_limbs()
    }
}

// Arithmetic operations
impl Add for Scalar {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Scalar {
            limbs: add_mod(self.limbs, rhs.limbs, MODULUS),
        }
    }
}

impl AddAssign for Scalar {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Scalar {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Scalar {
            limbs: sub_mod(self.limbs, rhs.limbs, MODULUS),
        }
    }
}

impl SubAssign for Scalar {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Scalar {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Scalar {
            limbs: neg_mod(self.limbs, MODULUS),
        }
    }
}

impl Mul for Scalar {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Scalar {
            limbs: montgomery_mul(self.limbs, rhs.limbs, &PARAMS),
        }
    }
}

impl MulAssign for Scalar {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Display and Debug
impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let canonical = self.to_canonical_limbs();
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            canonical[3], canonical[2], canonical[1], canonical[0]
        )
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", self)
    }
}
