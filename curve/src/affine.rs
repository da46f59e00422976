// secp256k1: y^2 = x^3 + 7 over GF(p), p = 2^256 - 2^32 - 977
// Generator (SEC 2):
//   x = 0x79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798
//   y = 0x483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8
// Group order (prime):
//   n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
// Cofactor: 1

use crate::{FieldElement, Group, Scalar};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

const GENERATOR_X: [u64; 4] = [
    0x59f2815b16f81798,
    0x029bfcdb2dce28d9,
    0x55a06295ce870b07,
    0x79be667ef9dcbbac,
];

const GENERATOR_Y: [u64; 4] = [
    0x9c47d08ffb10d4b8,
    0xfd17b448a6855419,
    0x5da4fbfc0e1108a8,
    0x483ada7726a3c465,
];

/// Affine point on secp256k1, or the point at infinity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Affine {
    /// The identity element.
    Infinity,
    /// A finite point (x, y).
    Point { x: FieldElement, y: FieldElement },
}

impl Affine {
    /// The point at infinity (identity element)
    pub const INFINITY: Self = Affine::Infinity;

    /// Create a new finite affine point. The caller is responsible for it being on the curve.
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        Affine::Point { x, y }
    }

    /// Get the 'b' coefficient: 7
    #[inline]
    fn curve_b() -> FieldElement {
        FieldElement::from_canonical_u64(7)
    }

    /// x^3 + 7
    #[inline]
    fn curve_rhs(x: &FieldElement) -> FieldElement {
        x.square() * *x + Self::curve_b()
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        matches!(self, Affine::Infinity)
    }

    /// The coordinates of a finite point.
    #[inline]
    pub fn coordinates(&self) -> Option<(FieldElement, FieldElement)> {
        match self {
            Affine::Infinity => None,
            Affine::Point { x, y } => Some((*x, *y)),
        }
    }

    /// The x-coordinate of a finite point.
    #[inline]
    pub fn x(&self) -> Option<FieldElement> {
        self.coordinates().map(|(x, _)| x)
    }

    /// Whether a finite point has an even y-coordinate. `false` for infinity.
    #[inline]
    pub fn has_even_y(&self) -> bool {
        match self {
            Affine::Infinity => false,
            Affine::Point { y, .. } => !y.is_odd(),
        }
    }

    /// Check if a point is on the curve: y^2 = x^3 + 7.
    pub fn is_on_curve(&self) -> bool {
        match self {
            Affine::Infinity => true,
            Affine::Point { x, y } => y.square() == Self::curve_rhs(x),
        }
    }

    /// The standard generator G.
    pub fn generator() -> Self {
        // Both coordinates are below p.
        let x = FieldElement::from_canonical_limbs(GENERATOR_X).unwrap_or_default();
        let y = FieldElement::from_canonical_limbs(GENERATOR_Y).unwrap_or_default();
        Affine::new(x, y)
    }

    /// The even-y point with the given x-coordinate, if x is on the curve.
    pub fn lift_x(x: &FieldElement) -> Option<Self> {
        let y = Self::curve_rhs(x).sqrt()?;
        let y = if y.is_odd() { -y } else { y };
        Some(Affine::new(*x, y))
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        let (x, y) = match self {
            Affine::Infinity => return *self,
            Affine::Point { x, y } => (*x, *y),
        };

        // If y = 0, then 2P = O
        if y.is_zero() {
            return Self::INFINITY;
        }

        // Compute slope: λ = 3x^2 / 2y
        let x2 = x.square();
        let numerator = x2 + x2 + x2;
        let lambda = numerator / (y + y);

        // x_r = λ^2 - 2x
        let x_r = lambda.square() - x - x;

        // y_r = λ(x - x_r) - y
        let y_r = lambda * (x - x_r) - y;

        Affine::new(x_r, y_r)
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        match self {
            Affine::Infinity => *self,
            Affine::Point { x, y } => Affine::new(*x, -*y),
        }
    }

    /// Multiply the fixed generator.
    pub fn mul_generator(scalar: &Scalar) -> Self {
        <Self as Group>::mul_generator(scalar)
    }
}

impl Group for Affine {
    type Scalar = Scalar;

    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    #[inline]
    fn generator() -> Self {
        Affine::generator()
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }
}

impl Add for Affine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let ((x1, y1), (x2, y2)) = match (self, other) {
            (Affine::Infinity, _) => return other,
            (_, Affine::Infinity) => return self,
            (Affine::Point { x: x1, y: y1 }, Affine::Point { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        if x1 == x2 {
            if y1 == y2 {
                return self.double();
            }
            // P + (-P)
            return Self::INFINITY;
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = (y2 - y1) / (x2 - x1);

        // x_r = λ^2 - x1 - x2
        let x_r = lambda.square() - x1 - x2;

        // y_r = λ(x1 - x_r) - y1
        let y_r = lambda * (x1 - x_r) - y1;

        Affine::new(x_r, y_r)
    }
}

impl AddAssign for Affine {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Affine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for Affine {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Affine {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<&Scalar> for Affine {
    type Output = Self;

    fn mul(self, scalar: &Scalar) -> Self {
        <Self as Group>::scalar_mul(&self, scalar)
    }
}

impl Mul<Affine> for Scalar {
    type Output = Affine;

    fn mul(self, point: Affine) -> Affine {
        <Affine as Group>::scalar_mul(&point, &self)
    }
}
