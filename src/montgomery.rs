//! Montgomery layer: the negated modular inverse, the `R` and `R^2`
//! constants for a given modulus, domain conversion, and multiply/square in
//! both strict (`< m`) and "almost" (`< 2m`) forms.
//!
//! Every modulus here is odd (Montgomery's construction requires it) and
//! `k` limbs with a nonzero top limb (`m` itself uses all `k` limbs). These
//! preconditions are `debug_assert`-checked, not validated at runtime, per
//! spec.md §7.

use crate::add::cond_sub_assign;
use crate::limb::{digit, ge};
use crate::mul::{madd, mul};
use crate::word::word_negmodinv;

/// `z <- w` such that `w * m[0] ≡ -1 (mod 2^64)`, lifted to the full `k`-limb
/// negated inverse: `z * m ≡ -1 (mod 2^(64 * z.len()))`.
///
/// Doubling-precision Hensel lifting (spec.md §4.5): starting from the
/// word-level seed, each round computes `y = m*z + 1 (mod 2^(64*2b))` for
/// the current precision `b`, then `z <- z*(1 + y) (mod 2^(64*2b))`, which
/// is a fixed point of the same recurrence that produces [`word_negmodinv`]
/// (see that function's proof sketch; here `y` plays the role of `e`).
/// `t` is scratch of at least `2 * z.len()` limbs.
pub fn negmodinv(z: &mut [u64], m: &[u64], t: &mut [u64]) {
    let k = z.len();
    debug_assert!(t.len() >= 2 * k);
    for zi in z.iter_mut() {
        *zi = 0;
    }
    if k == 0 {
        return;
    }
    z[0] = word_negmodinv(digit(m, 0));
    let mut b = 1usize;
    while b < k {
        let nb = (2 * b).min(k);
        let (y, rest) = t.split_at_mut(nb);
        let zc = &mut rest[..b];
        for w in y.iter_mut() {
            *w = 0;
        }
        madd(y, m, &z[..b]);
        crate::add::add_assign(y, &[1]);
        zc.copy_from_slice(&z[..b]);
        madd(&mut z[..nb], zc, y);
        b = nb;
    }
}

/// Doubles `z` in place (as a `64*z.len()`-bit integer). Returns the bit
/// shifted out of the top, i.e. the `(64*z.len())`-th bit of `2*z`.
fn double_assign(z: &mut [u64]) -> u64 {
    let mut carry = 0u64;
    for zi in z.iter_mut() {
        let next_carry = *zi >> 63;
        *zi = (*zi << 1) | carry;
        carry = next_carry;
    }
    carry
}

/// Given `z < m`, replaces `z` with `(2*z) mod m`. One conditional
/// subtraction suffices since `2*z < 2*m`.
fn double_mod_assign(z: &mut [u64], m: &[u64]) {
    let carry = double_assign(z);
    let borrow = crate::add::sub_assign(z, m);
    // Overflowed past the top limb (carry == 1) means the subtraction was
    // certainly valid (no add-back); otherwise add `m` back iff the
    // subtraction itself borrowed (z was already < m before subtracting).
    let need_add_back = borrow & (1 ^ carry);
    crate::add::cond_add_assign(z, need_add_back, m);
}

/// `z <- R mod m`, where `R = 2^(64 * z.len())`, via repeated doubling from 1
/// (spec.md §4.5's "repeated-doubling-with-reduction" construction).
pub fn modifier(z: &mut [u64], m: &[u64]) {
    let k = z.len();
    crate::limb::of_word(z, if k == 0 { 0 } else { 1 });
    for _ in 0..64 * k {
        double_mod_assign(z, m);
    }
}

/// `z <- R^2 mod m`. Continues the same doubling construction for twice as
/// many rounds as [`modifier`].
pub fn montifier(z: &mut [u64], m: &[u64]) {
    let k = z.len();
    crate::limb::of_word(z, if k == 0 { 0 } else { 1 });
    for _ in 0..128 * k {
        double_mod_assign(z, m);
    }
}

/// "Almost" form of [`montifier`]: congruent to `R^2 mod m`, bound `< 2m`.
/// Our doubling construction already keeps every intermediate strictly `< m`,
/// so the strict result is a valid instance of the relaxed contract.
pub fn amontifier(z: &mut [u64], m: &[u64]) {
    montifier(z, m);
}

/// Core of the `p`-round CIOS reduction shared by [`montredc`] and
/// [`amontredc`]: clears the low `p` limbs of a copy of `x` against `m`,
/// leaving the (possibly unreduced, `< 2m`-ish) quotient in `z`.
/// `t` is scratch of at least `x.len().max(p + z.len())` limbs.
fn reduce_core(z: &mut [u64], x: &[u64], m: &[u64], p: usize, t: &mut [u64]) {
    let k = z.len();
    let buf_len = x.len().max(p + k);
    debug_assert!(t.len() >= buf_len);
    let buf = &mut t[..buf_len];
    crate::limb::copy(buf, x);
    let w = word_negmodinv(digit(m, 0));
    for i in 0..p {
        let qi = buf[i].wrapping_mul(w);
        let mut carry: u128 = 0;
        for j in 0..m.len() {
            let idx = i + j;
            if idx >= buf.len() {
                break;
            }
            let prod = (buf[idx] as u128) + (qi as u128) * (m[j] as u128) + carry;
            buf[idx] = prod as u64;
            carry = prod >> 64;
        }
        let mut idx = i + m.len();
        while carry != 0 {
            if idx >= buf.len() {
                break;
            }
            let prod = (buf[idx] as u128) + carry;
            buf[idx] = prod as u64;
            carry = prod >> 64;
            idx += 1;
        }
    }
    crate::limb::copy(z, &buf[p..]);
}

/// `z <- (x * 2^(-64p)) mod m`, strict: `z < m`. `x` is zero-extended to
/// whatever width the reduction needs. `t` is scratch of at least
/// `x.len().max(p + z.len())` limbs.
pub fn montredc(z: &mut [u64], x: &[u64], m: &[u64], p: usize, t: &mut [u64]) {
    reduce_core(z, x, m, p, t);
    let need_sub = ge(z, m);
    cond_sub_assign(z, need_sub, m);
}

/// Almost form of [`montredc`]: `z < 2m`, `z ≡ x * 2^(-64p) (mod m)`. Skips
/// the final conditional subtraction.
pub fn amontredc(z: &mut [u64], x: &[u64], m: &[u64], p: usize, t: &mut [u64]) {
    reduce_core(z, x, m, p, t);
}

/// `z <- (x * 2^(-64k)) mod m` for `z.len() == k`, strict. The `emontredc`
/// specialization for a full `2k`-limb input reduced against a `k`-limb
/// modulus: equivalent to `reduce_core` with `p == k`, `x.len() == 2k`, but
/// operates on `z`'s own 2k-limb buffer in place rather than copying through
/// scratch, matching spec.md §4.5's in-place `emontredc` contract.
///
/// `z` must be `2 * m.len()` limbs on entry (the double-width product to
/// reduce); on return `z[m.len()..]` holds the quotient. Returns the extra
/// top carry bit (spec.md: "1 iff `x + q*m >= R*(m+R)`").
pub fn emontredc(z: &mut [u64], m: &[u64], w: u64) -> u64 {
    let k = m.len();
    debug_assert_eq!(z.len(), 2 * k);
    let mut top_carry = 0u64;
    for i in 0..k {
        let qi = z[i].wrapping_mul(w);
        let mut carry: u128 = 0;
        for j in 0..k {
            let idx = i + j;
            let prod = (z[idx] as u128) + (qi as u128) * (m[j] as u128) + carry;
            z[idx] = prod as u64;
            carry = prod >> 64;
        }
        let mut idx = i + k;
        let mut c = carry;
        while c != 0 {
            if idx < z.len() {
                let prod = (z[idx] as u128) + c;
                z[idx] = prod as u64;
                c = prod >> 64;
            } else {
                top_carry += c as u64;
                break;
            }
            idx += 1;
        }
    }
    top_carry
}

/// Unrolled-by-8 specialization of [`emontredc`] for `m.len()` a positive
/// multiple of 8. We rely on the compiler to unroll the inner loops rather
/// than hand-unrolling source; this is purely a naming/contract
/// specialization over the same algorithm.
pub fn emontredc_8n(z: &mut [u64], m: &[u64], w: u64) -> u64 {
    debug_assert!(!m.is_empty() && m.len() % 8 == 0);
    emontredc(z, m, w)
}

/// `z <- (x * y * R^-1) mod m`, strict: requires `x, y < m`, gives `z < m`.
/// `t` is scratch of at least `2 * z.len()` limbs.
pub fn montmul(z: &mut [u64], x: &[u64], y: &[u64], m: &[u64], t: &mut [u64]) {
    let k = z.len();
    debug_assert!(t.len() >= 2 * k);
    let buf = &mut t[..2 * k];
    mul(buf, x, y);
    let w = word_negmodinv(digit(m, 0));
    let top_carry = emontredc(buf, m, w);
    crate::limb::copy(z, &buf[k..]);
    let need_sub = top_carry | ge(z, m);
    cond_sub_assign(z, need_sub, m);
}

/// `z <- (x * x * R^-1) mod m`, strict form of [`montmul`] with `y == x`.
pub fn montsqr(z: &mut [u64], x: &[u64], m: &[u64], t: &mut [u64]) {
    montmul(z, x, x, m, t);
}

/// Almost form of [`montmul`]: `x, y` may be any `k`-limb Montgomery-domain
/// values produced by chained `amont*` operations (bound `< 2m`), result
/// `< 2m`. Skips the final conditional subtraction.
pub fn amontmul(z: &mut [u64], x: &[u64], y: &[u64], m: &[u64], t: &mut [u64]) {
    let k = z.len();
    debug_assert!(t.len() >= 2 * k);
    let buf = &mut t[..2 * k];
    mul(buf, x, y);
    let w = word_negmodinv(digit(m, 0));
    let _top_carry = emontredc(buf, m, w);
    crate::limb::copy(z, &buf[k..]);
}

/// Almost form of [`montsqr`].
pub fn amontsqr(z: &mut [u64], x: &[u64], m: &[u64], t: &mut [u64]) {
    amontmul(z, x, x, m, t);
}

/// `z <- (x * R^-1) mod m`, strict: converts a Montgomery-domain value back
/// to canonical form. Equivalent to [`montredc`] with `p == z.len()`.
pub fn demont(z: &mut [u64], x: &[u64], m: &[u64], t: &mut [u64]) {
    let p = z.len();
    montredc(z, x, m, p, t);
}

/// Almost form of [`demont`]: result `< 2m`.
pub fn deamont(z: &mut [u64], x: &[u64], m: &[u64], t: &mut [u64]) {
    let p = z.len();
    amontredc(z, x, m, p, t);
}
