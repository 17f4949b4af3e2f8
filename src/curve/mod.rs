//! P-256 / P-384 specializations (spec.md §4.7): fixed-`k` arithmetic modulo
//! the NIST curve primes and group orders, built from the generic additive,
//! multiplicative, Montgomery, and byte-conversion layers.
//!
//! These are deliberately *not* hand-tuned pseudo-Mersenne fast paths (the
//! kind s2n-bignum's `bignum_montmul_p256` assembly implements by exploiting
//! `p_256`'s special bit pattern) — that optimization can't be safely
//! hand-derived without a compiler and test suite to check it against. What
//! is here is the same generic kernels from [`crate::add`], [`crate::mul`],
//! [`crate::montgomery`] instantiated at the curve's fixed size, which gives
//! identical contracts (spec.md §4.7: "deliver identical contracts to the
//! generic kernels ... but with hand-tuned constant-time paths exploiting
//! the special structure of p") at the cost of the constant-factor speedup
//! those fast paths would give. Noted in DESIGN.md.

pub mod bytes;
pub mod constants;
pub mod p256;
pub mod p384;

use crate::limb::ge;

/// Reduces `x` (any length) modulo `m`, writing the `m.len()`-limb residue
/// to `out`. Binary shift-and-subtract long division: not constant-time and
/// not fast, but agrees with the textbook definition by construction, which
/// is what spec.md §8's "mod-reduction agreement" property asks for.
pub(crate) fn reduce_generic(out: &mut [u64], x: &[u64], m: &[u64]) {
    for o in out.iter_mut() {
        *o = 0;
    }
    let total_bits = 64 * x.len();
    for bit in (0..total_bits).rev() {
        let mut carry = (x[bit / 64] >> (bit % 64)) & 1;
        for w in out.iter_mut() {
            let next_carry = *w >> 63;
            *w = (*w << 1) | carry;
            carry = next_carry;
        }
        // `carry` here is the bit shifted out past `out`'s top limb: the
        // remainder has overflowed `2^(64*out.len())` and a subtraction is
        // mandatory regardless of what `ge` sees on the truncated value.
        if carry == 1 || ge(out, m) == 1 {
            crate::add::sub_assign(out, m);
        }
    }
}

/// Reduces a fixed-size `x` (same width as `m`) modulo `m`. Since every
/// curve modulus here has its top bit set (`m > 2^(64k - 1)`), `2m >
/// 2^(64k) > x` always holds, so a single conditional subtraction always
/// suffices — this is the "constant-time full mod" spec.md §4.7 asks the
/// `_4`/`_6` fixed-size reductions to provide.
pub(crate) fn reduce_fixed(z: &mut [u64], m: &[u64]) {
    let need_sub = ge(z, m);
    crate::add::cond_sub_assign(z, need_sub, m);
}
