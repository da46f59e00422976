//! Elliptic curve group secp256k1: y^2 = x^3 + 7 over GF(2^256 - 2^32 - 977).
//!
//! This crate provides affine curve points with an explicit point at
//! infinity, Montgomery-form base and scalar fields with fixed 32-byte
//! big-endian encodings, and helpers for random sampling. Scalar
//! multiplication is a plain double-and-add and is not constant time.

mod affine;
mod arithmetic;
mod basefield;
mod group;
mod random;
mod scalarfield;

pub use affine::Affine;
pub use basefield::FieldElement;
pub use group::{Group, ScalarBits};
pub use random::RandomField;
pub use scalarfield::Scalar;
