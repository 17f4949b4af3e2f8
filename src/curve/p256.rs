//! Fixed-4-limb arithmetic modulo the P-256 field prime and group order.
//!
//! Every function here is a typed (`[u64; 4]` rather than `&[u64]`) wrapper
//! around the generic kernels in [`crate::modular`] and [`crate::montgomery`],
//! instantiated with [`constants::P_256`] or [`constants::N_256`]. See
//! [`crate::curve`]'s module doc for why these aren't the hand-tuned
//! pseudo-Mersenne fast paths the name might suggest.

use super::constants::{I_256, N_256, P_256};
use crate::montgomery::{amontmul, amontsqr, demont, montmul, montsqr};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

const K: usize = 4;

/// Constant-time equality at the public curve boundary, mirroring how
/// `k256`'s `FieldElementMontgomery` implements `ConstantTimeEq` over its
/// four limbs (`elliptic_curve::subtle`) instead of exposing a plain `bool`.
/// The internal kernels keep the teacher's `wrapping_neg`-mask style; this
/// wrapper is for callers who want a `subtle::Choice` to compose further.
pub fn ct_eq_p256(x: &[u64; K], y: &[u64; K]) -> Choice {
    x[0].ct_eq(&y[0]) & x[1].ct_eq(&y[1]) & x[2].ct_eq(&y[2]) & x[3].ct_eq(&y[3])
}

/// Constant-time select between two P-256 field elements.
pub fn conditional_select_p256(a: &[u64; K], b: &[u64; K], choice: Choice) -> [u64; K] {
    [
        u64::conditional_select(&a[0], &b[0], choice),
        u64::conditional_select(&a[1], &b[1], choice),
        u64::conditional_select(&a[2], &b[2], choice),
        u64::conditional_select(&a[3], &b[3], choice),
    ]
}

// ---- field prime (p_256) ----

pub fn add_p256(x: &[u64; K], y: &[u64; K]) -> [u64; K] {
    let mut z = [0u64; K];
    crate::modular::modadd(&mut z, x, y, &P_256);
    z
}

pub fn sub_p256(x: &[u64; K], y: &[u64; K]) -> [u64; K] {
    let mut z = [0u64; K];
    crate::modular::modsub(&mut z, x, y, &P_256);
    z
}

pub fn double_p256(x: &[u64; K]) -> [u64; K] {
    let mut z = [0u64; K];
    crate::modular::moddouble(&mut z, x, &P_256);
    z
}

/// `3x mod p_256`.
pub fn triple_p256(x: &[u64; K]) -> [u64; K] {
    let d = double_p256(x);
    add_p256(&d, x)
}

/// `x * 2^-1 mod p_256`.
pub fn half_p256(x: &[u64; K]) -> [u64; K] {
    let mut z = [0u64; K];
    let mut t = [0u64; K + 1];
    crate::modular::modhalve(&mut z, x, &P_256, &mut t);
    z
}

/// `-x mod p_256`.
pub fn neg_p256(x: &[u64; K]) -> [u64; K] {
    let mut z = [0u64; K];
    crate::add::modoptneg(&mut z, 1, x, &P_256);
    z
}

/// `(-x mod p_256)` if `p != 0`, else `x`.
pub fn optneg_p256(p: u64, x: &[u64; K]) -> [u64; K] {
    let mut z = [0u64; K];
    crate::add::modoptneg(&mut z, p, x, &P_256);
    z
}

pub fn montmul_p256(x: &[u64; K], y: &[u64; K]) -> [u64; K] {
    let mut z = [0u64; K];
    let mut t = [0u64; 2 * K];
    montmul(&mut z, x, y, &P_256, &mut t);
    z
}

pub fn montsqr_p256(x: &[u64; K]) -> [u64; K] {
    let mut z = [0u64; K];
    let mut t = [0u64; 2 * K];
    montsqr(&mut z, x, &P_256, &mut t);
    z
}

pub fn amontmul_p256(x: &[u64; K], y: &[u64; K]) -> [u64; K] {
    let mut z = [0u64; K];
    let mut t = [0u64; 2 * K];
    amontmul(&mut z, x, y, &P_256, &mut t);
    z
}

pub fn amontsqr_p256(x: &[u64; K]) -> [u64; K] {
    let mut z = [0u64; K];
    let mut t = [0u64; 2 * K];
    amontsqr(&mut z, x, &P_256, &mut t);
    z
}

/// Canonical -> Montgomery form: `x * R mod p_256`, via `montmul(x, R^2 mod p_256)`.
///
/// `R^2 mod p_256` isn't one of the literals spec.md §9 hands us (only
/// `R mod p_256` is, as [`I_256`]), so it's derived here via the generic
/// [`crate::montgomery::montifier`] rather than hand-computed as a second
/// 256-bit constant that would need independent verification.
pub fn tomont_p256(x: &[u64; K]) -> [u64; K] {
    let mut r2 = [0u64; K];
    crate::montgomery::montifier(&mut r2, &P_256);
    montmul_p256(x, &r2)
}

/// Montgomery -> canonical, strict (`< p_256`).
pub fn demont_p256(x: &[u64; K]) -> [u64; K] {
    let mut z = [0u64; K];
    let mut t = [0u64; 2 * K];
    demont(&mut z, x, &P_256, &mut t);
    z
}

/// Montgomery -> canonical, almost (`< 2*p_256`).
pub fn deamont_p256(x: &[u64; K]) -> [u64; K] {
    let mut z = [0u64; K];
    let mut t = [0u64; 2 * K];
    crate::montgomery::deamont(&mut z, x, &P_256, &mut t);
    z
}

/// `x mod p_256` for an arbitrary-length input.
pub fn mod_p256(x: &[u64]) -> [u64; K] {
    let mut z = [0u64; K];
    super::reduce_generic(&mut z, x, &P_256);
    z
}

/// `x mod p_256` for an exactly-4-limb input (single conditional subtraction).
pub fn mod_p256_4(x: &[u64; K]) -> [u64; K] {
    let mut z = *x;
    super::reduce_fixed(&mut z, &P_256);
    z
}

// ---- group order (n_256) ----

pub fn add_n256(x: &[u64; K], y: &[u64; K]) -> [u64; K] {
    let mut z = [0u64; K];
    crate::modular::modadd(&mut z, x, y, &N_256);
    z
}

pub fn sub_n256(x: &[u64; K], y: &[u64; K]) -> [u64; K] {
    let mut z = [0u64; K];
    crate::modular::modsub(&mut z, x, y, &N_256);
    z
}

pub fn montmul_n256(x: &[u64; K], y: &[u64; K]) -> [u64; K] {
    let mut z = [0u64; K];
    let mut t = [0u64; 2 * K];
    montmul(&mut z, x, y, &N_256, &mut t);
    z
}

pub fn montsqr_n256(x: &[u64; K]) -> [u64; K] {
    let mut z = [0u64; K];
    let mut t = [0u64; 2 * K];
    montsqr(&mut z, x, &N_256, &mut t);
    z
}

/// `x mod n_256` for an arbitrary-length input.
pub fn mod_n256(x: &[u64]) -> [u64; K] {
    let mut z = [0u64; K];
    super::reduce_generic(&mut z, x, &N_256);
    z
}

/// `x mod n_256` for an exactly-4-limb input.
pub fn mod_n256_4(x: &[u64; K]) -> [u64; K] {
    let mut z = *x;
    super::reduce_fixed(&mut z, &N_256);
    z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tomont_then_demont_is_identity() {
        let x = [1u64, 0, 0, 0];
        let m = tomont_p256(&x);
        assert_eq!(m, I_256, "tomont(1) should equal R mod p_256");
        let back = demont_p256(&m);
        assert_eq!(back, x);
    }

    #[test]
    fn montmul_roundtrips_plain_product() {
        let x = [7u64, 0, 0, 0];
        let y = [11u64, 0, 0, 0];
        let xm = tomont_p256(&x);
        let ym = tomont_p256(&y);
        let zm = montmul_p256(&xm, &ym);
        let z = demont_p256(&zm);
        assert_eq!(z, [77u64, 0, 0, 0]);
    }

    #[test]
    fn triple_matches_add_add() {
        let x = [5u64, 0, 0, 0];
        let t = triple_p256(&x);
        let expected = add_p256(&add_p256(&x, &x), &x);
        assert_eq!(t, expected);
    }

    #[test]
    fn half_is_inverse_of_double() {
        let x = [9u64, 0, 0, 0];
        let d = double_p256(&x);
        let h = half_p256(&d);
        assert_eq!(h, x);
    }

    #[test]
    fn neg_then_neg_is_identity() {
        let x = [123u64, 0, 0, 0];
        let n = neg_p256(&x);
        let nn = neg_p256(&n);
        assert_eq!(nn, x);
    }

    #[test]
    fn mod_p256_4_matches_generic_reduce_for_values_below_2p() {
        let mut x = P_256;
        crate::add::add_assign(&mut x, &[5]); // p_256 + 5, still < 2p
        let via_fixed = mod_p256_4(&x);
        let via_generic = mod_p256(&x);
        assert_eq!(via_fixed, via_generic);
        assert_eq!(via_fixed, [5, 0, 0, 0]);
    }

    #[test]
    fn n256_coprime_to_p256() {
        let mut t = [0u64; 8];
        assert_eq!(crate::modular::coprime(&N_256, &P_256, &mut t), 1);
    }

    #[test]
    fn ct_eq_matches_plain_equality() {
        let x = [1u64, 2, 3, 4];
        let y = [1u64, 2, 3, 4];
        let z = [1u64, 2, 3, 5];
        assert_eq!(bool::from(ct_eq_p256(&x, &y)), true);
        assert_eq!(bool::from(ct_eq_p256(&x, &z)), false);
    }

    #[test]
    fn conditional_select_picks_correct_branch() {
        let a = [1u64, 2, 3, 4];
        let b = [5u64, 6, 7, 8];
        assert_eq!(conditional_select_p256(&a, &b, Choice::from(0)), a);
        assert_eq!(conditional_select_p256(&a, &b, Choice::from(1)), b);
    }
}
