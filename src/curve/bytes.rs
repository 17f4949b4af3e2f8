//! Big-endian byte <-> little-endian limb conversion for the P-256 (4-limb)
//! and P-384 (6-limb) fixed sizes (spec.md §4.7, §6).
//!
//! Byte format: a big-endian byte string of length `8*k`; `byte[0]` is the
//! most significant byte of `limb[k-1]`.

fn frombytes(z: &mut [u64], bytes: &[u8]) {
    let k = z.len();
    debug_assert_eq!(bytes.len(), 8 * k);
    for (i, zi) in z.iter_mut().enumerate() {
        let off = bytes.len() - 8 * (i + 1);
        let chunk: [u8; 8] = bytes[off..off + 8].try_into().unwrap();
        *zi = u64::from_be_bytes(chunk);
    }
}

fn tobytes(bytes: &mut [u8], x: &[u64]) {
    let k = x.len();
    debug_assert_eq!(bytes.len(), 8 * k);
    for (i, &xi) in x.iter().enumerate() {
        let off = bytes.len() - 8 * (i + 1);
        bytes[off..off + 8].copy_from_slice(&xi.to_be_bytes());
    }
}

/// Reverses limb order and byte order within each limb: the same
/// transformation as [`frombytes`]/[`tobytes`] but limb-to-limb rather than
/// through a byte string.
fn bigendian(z: &mut [u64], x: &[u64]) {
    let k = z.len();
    debug_assert_eq!(x.len(), k);
    for i in 0..k {
        z[i] = x[k - 1 - i].swap_bytes();
    }
}

/// Parses a 32-byte big-endian string into a 4-limb little-endian bignum.
pub fn frombytes_4(bytes: &[u8; 32]) -> [u64; 4] {
    let mut z = [0u64; 4];
    frombytes(&mut z, bytes);
    z
}

/// Serializes a 4-limb bignum into a 32-byte big-endian string.
pub fn tobytes_4(x: &[u64; 4]) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    tobytes(&mut bytes, x);
    bytes
}

/// Parses a 48-byte big-endian string into a 6-limb little-endian bignum.
pub fn frombytes_6(bytes: &[u8; 48]) -> [u64; 6] {
    let mut z = [0u64; 6];
    frombytes(&mut z, bytes);
    z
}

/// Serializes a 6-limb bignum into a 48-byte big-endian string.
pub fn tobytes_6(x: &[u64; 6]) -> [u8; 48] {
    let mut bytes = [0u8; 48];
    tobytes(&mut bytes, x);
    bytes
}

/// Limb-to-limb big-endian reversal, 4-limb form.
pub fn bigendian_4(x: &[u64; 4]) -> [u64; 4] {
    let mut z = [0u64; 4];
    bigendian(&mut z, x);
    z
}

/// Limb-to-limb big-endian reversal, 6-limb form.
pub fn bigendian_6(x: &[u64; 6]) -> [u64; 6] {
    let mut z = [0u64; 6];
    bigendian(&mut z, x);
    z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_4() {
        let x: [u64; 4] = [
            0x0123_4567_89ab_cdef,
            0xfedc_ba98_7654_3210,
            0x1111_2222_3333_4444,
            0x5555_6666_7777_8888,
        ];
        let bytes = tobytes_4(&x);
        assert_eq!(frombytes_4(&bytes), x);
    }

    #[test]
    fn roundtrip_6() {
        let x: [u64; 6] = [1, 2, 3, 4, 5, 6];
        let bytes = tobytes_6(&x);
        assert_eq!(frombytes_6(&bytes), x);
    }

    #[test]
    fn frombytes_msb_is_top_limb_msb() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x80; // MSB of the whole string
        let z = frombytes_4(&bytes);
        assert_eq!(z[3], 1u64 << 63);
        assert_eq!(z[0] | z[1] | z[2], 0);
    }

    #[test]
    fn bigendian_is_involution() {
        let x: [u64; 4] = [1, 2, 3, 4];
        let once = bigendian_4(&x);
        let twice = bigendian_4(&once);
        assert_eq!(twice, x);
        assert_eq!(once, [4u64.swap_bytes(), 3u64.swap_bytes(), 2u64.swap_bytes(), 1u64.swap_bytes()]);
    }
}
