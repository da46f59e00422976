//! Legacy x-only Diffie-Hellman for NIP-04 direct messages.
//!
//! The counterpart's key is x-only, so its point is rebuilt with the even-y
//! convention before multiplying. The result is the raw shared x-coordinate;
//! deriving a symmetric key from it is left to the caller.

use curve::{Affine, Group, Scalar};

use crate::constants::{PUBLIC_KEY_SIZE, SECRET_KEY_SIZE};
use crate::errors::SchnorrError;
use crate::keys::{SecretKey, XOnlyPublicKey, lift_x_bytes, x_only_bytes};

/// Computes `(d mod n) * lift_x(peer_x)` and returns its x-coordinate.
///
/// Fails with [`SchnorrError::InvalidPublicKey`] when `peer_x` is not the
/// x-coordinate of a curve point, and with [`SchnorrError::PointAtInfinity`]
/// when the product is the identity (a scalar that reduces to zero).
pub fn ecdh_nip04(
    privkey: &[u8; SECRET_KEY_SIZE],
    peer_x: &[u8; PUBLIC_KEY_SIZE],
) -> Result<[u8; 32], SchnorrError> {
    let peer = lift_x_bytes(peer_x).inspect_err(|_| {
        tracing::debug!("rejected ECDH peer key: not an x-coordinate on secp256k1");
    })?;
    let scalar = Scalar::from_bytes_reduced(privkey);
    shared_x(&scalar, &peer)
}

impl SecretKey {
    /// ECDH with an already validated x-only public key.
    pub fn shared_x(&self, peer: &XOnlyPublicKey) -> Result<[u8; 32], SchnorrError> {
        let point = peer.to_point()?;
        shared_x(&self.scalar(), &point)
    }
}

fn shared_x(scalar: &Scalar, peer: &Affine) -> Result<[u8; 32], SchnorrError> {
    let shared = peer.scalar_mul(scalar);
    x_only_bytes(&shared)
}
