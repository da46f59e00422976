//! 256-bit limb arithmetic shared by the base field and the scalar field.
//!
//! Values are `[u64; 4]` in little-endian limb order. Both secp256k1 moduli
//! sit just below 2^256, so sums and Montgomery intermediates can carry one
//! bit past the top limb; every routine here accounts for that bit.

/// Parameters of a Montgomery-form prime field with `R = 2^256`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Montgomery {
    /// The prime modulus.
    pub modulus: [u64; 4],
    /// R mod m
    pub r: [u64; 4],
    /// R^2 mod m (for Montgomery conversion)
    pub r2: [u64; 4],
    /// -m^{-1} mod 2^64
    pub mu: u64,
}

/// Helper: Carrying addition
#[inline]
pub(crate) const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

/// Helper: Borrowing subtraction
#[inline]
pub(crate) const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Plain 256-bit subtraction, returning the wrapped difference and the borrow.
#[inline]
pub(crate) const fn sub_limbs(a: [u64; 4], b: [u64; 4]) -> ([u64; 4], bool) {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], b[3], borrow);
    ([r0, r1, r2, r3], borrow)
}

/// `a < m`
#[inline]
pub(crate) const fn is_canonical(limbs: [u64; 4], modulus: [u64; 4]) -> bool {
    let (_, borrow) = sub_limbs(limbs, modulus);
    borrow
}

#[inline]
pub(crate) const fn is_zero(limbs: [u64; 4]) -> bool {
    limbs[0] == 0 && limbs[1] == 0 && limbs[2] == 0 && limbs[3] == 0
}

/// Add two reduced values mod m.
#[inline]
pub(crate) const fn add_mod(a: [u64; 4], b: [u64; 4], modulus: [u64; 4]) -> [u64; 4] {
    let (r0, carry) = a[0].overflowing_add(b[0]);
    let (r1, carry) = carrying_add(a[1], b[1], carry);
    let (r2, carry) = carrying_add(a[2], b[2], carry);
    let (r3, carry) = carrying_add(a[3], b[3], carry);

    let sum = [r0, r1, r2, r3];
    let (reduced, borrow) = sub_limbs(sum, modulus);

    // A carry out of the top limb means the true sum is 2^256 + sum >= m.
    if carry || !borrow {
        reduced
    } else {
        sum
    }
}

/// Subtract two reduced values mod m.
#[inline]
pub(crate) const fn sub_mod(a: [u64; 4], b: [u64; 4], modulus: [u64; 4]) -> [u64; 4] {
    let (r, borrow) = sub_limbs(a, b);

    if borrow {
        let (r0, carry) = r[0].overflowing_add(modulus[0]);
        let (r1, carry) = carrying_add(r[1], modulus[1], carry);
        let (r2, carry) = carrying_add(r[2], modulus[2], carry);
        let (r3, _) = carrying_add(r[3], modulus[3], carry);
        [r0, r1, r2, r3]
    } else {
        r
    }
}

/// Negate a reduced value mod m.
#[inline]
pub(crate) const fn neg_mod(a: [u64; 4], modulus: [u64; 4]) -> [u64; 4] {
    if is_zero(a) {
        return [0, 0, 0, 0];
    }
    sub_mod(modulus, a, modulus)
}

/// Montgomery multiplication: (a * b * R^{-1}) mod m
pub(crate) fn montgomery_mul(a: [u64; 4], b: [u64; 4], params: &Montgomery) -> [u64; 4] {
    let modulus = params.modulus;

    // t[8] holds the bit that reduction may carry past 512 bits.
    let mut t = [0u64; 9];

    for i in 0..4 {
        let mut carry = 0u128;
        for j in 0..4 {
            let product = (a[i] as u128) * (b[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }
        t[i + 4] = carry as u64;
    }

    for i in 0..4 {
        let k = t[i].wrapping_mul(params.mu);
        let mut carry = 0u128;

        for j in 0..4 {
            let product = (k as u128) * (modulus[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }

        for limb in t.iter_mut().skip(i + 4) {
            if carry == 0 {
                break;
            }
            let sum = (*limb as u128) + carry;
            *limb = sum as u64;
            carry = sum >> 64;
        }
    }

    // The high half is < 2m; subtract once if it reached m.
    let result = [t[4], t[5], t[6], t[7]];
    let (reduced, borrow) = sub_limbs(result, modulus);
    if t[8] != 0 || !borrow {
        reduced
    } else {
        result
    }
}

/// Big-endian bytes to little-endian limbs.
#[inline]
pub(crate) fn limbs_from_be_bytes(bytes: &[u8; 32]) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let start = 32 - (i + 1) * 8;
        let mut chunk = [0u8; 8];
        chunk.copy_from_slice(&bytes[start..start + 8]);
        *limb = u64::from_be_bytes(chunk);
    }
    limbs
}

/// Little-endian limbs to big-endian bytes.
#[inline]
pub(crate) fn limbs_to_be_bytes(limbs: [u64; 4]) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    for (i, limb) in limbs.iter().enumerate() {
        let start = 32 - (i + 1) * 8;
        bytes[start..start + 8].copy_from_slice(&limb.to_be_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_order_roundtrip() {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let limbs = limbs_from_be_bytes(&bytes);
        assert_eq!(limbs[0], 0x18191a1b1c1d1e1f);
        assert_eq!(limbs[3], 0x0001020304050607);
        assert_eq!(limbs_to_be_bytes(limbs), bytes);
    }

    #[test]
    fn test_add_mod_wraps_past_top_limb() {
        // (m - 1) + (m - 1) = m - 2 (mod m) for a modulus near 2^256.
        let m = [0xfffffffefffffc2f, u64::MAX, u64::MAX, u64::MAX];
        let m_minus_1 = [0xfffffffefffffc2e, u64::MAX, u64::MAX, u64::MAX];
        let m_minus_2 = [0xfffffffefffffc2d, u64::MAX, u64::MAX, u64::MAX];
        assert_eq!(add_mod(m_minus_1, m_minus_1, m), m_minus_2);
    }

    #[test]
    fn test_sub_mod_underflow() {
        let m = [0xfffffffefffffc2f, u64::MAX, u64::MAX, u64::MAX];
        let m_minus_1 = [0xfffffffefffffc2e, u64::MAX, u64::MAX, u64::MAX];
        assert_eq!(sub_mod([0, 0, 0, 0], [1, 0, 0, 0], m), m_minus_1);
        assert_eq!(neg_mod([1, 0, 0, 0], m), m_minus_1);
        assert_eq!(neg_mod([0, 0, 0, 0], m), [0, 0, 0, 0]);
    }
}
