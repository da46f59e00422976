use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::arithmetic::limbs_from_be_bytes;
use crate::{FieldElement, Scalar};

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl RandomField for FieldElement {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

impl RandomField for Scalar {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

// Rejection sampling: both moduli are close enough to 2^256 that a retry is rare.
impl Distribution<FieldElement> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        loop {
            let bytes: [u8; 32] = rng.random();
            if let Some(element) = FieldElement::from_canonical_limbs(limbs_from_be_bytes(&bytes)) {
                return element;
            }
        }
    }
}

impl Distribution<Scalar> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Scalar {
        loop {
            let bytes: [u8; 32] = rng.random();
            if let Some(scalar) = Scalar::from_bytes(&bytes) {
                return scalar;
            }
        }
    }
}
