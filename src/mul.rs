//! Multiplicative layer: the general `m x n -> k` multiply/multiply-accumulate
//! kernel, fixed-size exact products built on it, and Karatsuba for the
//! 16x16->32 and 32x32->64 sizes.
//!
//! `mul`/`madd` require `z` disjoint from `x` and `y` (spec.md §4.4):
//! unlike the additive layer, there is no sound in-place variant, since
//! every output limb can depend on every input limb.

use crate::add::add_assign;
use crate::limb::digit;

/// Schoolbook multiply-accumulate: `z[i] += x[a] * y[b]` for every `a, b`
/// with `a + b == i`, truncated to `z.len()` limbs and carried through.
/// Shared by [`mul`] (which zeroes `z` first) and [`crate::modular`]'s use
/// as an accumulate-in-place primitive.
fn mac_into(z: &mut [u64], x: &[u64], y: &[u64]) {
    let k = z.len();
    for i in 0..x.len() {
        if i >= k {
            break;
        }
        let xi = x[i] as u128;
        if xi == 0 {
            continue;
        }
        let mut carry = 0u128;
        for j in 0..y.len() {
            let idx = i + j;
            if idx >= k {
                break;
            }
            let p = (z[idx] as u128) + xi * (y[j] as u128) + carry;
            z[idx] = p as u64;
            carry = p >> 64;
        }
        let mut idx = i + y.len();
        while carry != 0 && idx < k {
            let p = (z[idx] as u128) + carry;
            z[idx] = p as u64;
            carry = p >> 64;
            idx += 1;
        }
    }
}

/// `z <- (x * y) mod 2^(64 * z.len())`. `z` is zeroed first (this is an
/// assignment, not an accumulation). Exact whenever `z.len() >= x.len() + y.len()`.
pub fn mul(z: &mut [u64], x: &[u64], y: &[u64]) {
    for zi in z.iter_mut() {
        *zi = 0;
    }
    mac_into(z, x, y);
}

/// `z <- (z + x * y) mod 2^(64 * z.len())`. Requires `z` disjoint from `x`, `y`.
pub fn madd(z: &mut [u64], x: &[u64], y: &[u64]) {
    mac_into(z, x, y);
}

/// Exact `x^2`, written to `z` (zeroed first). `z.len()` must be at least
/// `2 * x.len()` for an exact result.
pub fn sqr(z: &mut [u64], x: &[u64]) {
    mul(z, x, x);
}

macro_rules! fixed_mul {
    ($name:ident, $half:expr, $full:expr) => {
        #[doc = concat!(
            "Exact ", stringify!($half), "x", stringify!($half), " -> ",
            stringify!($full), " product. Delegates to the generic, ",
            "disjointness-checked `mul` kernel, which is exact whenever the ",
            "output is at least as wide as the sum of the input widths — ",
            "true here by construction."
        )]
        pub fn $name(z: &mut [u64; $full], x: &[u64; $half], y: &[u64; $half]) {
            mul(z, x, y);
        }
    };
}

macro_rules! fixed_sqr {
    ($name:ident, $half:expr, $full:expr) => {
        #[doc = concat!(
            "Exact ", stringify!($half), "-limb square, ", stringify!($full),
            " limb result. Delegates to the generic `mul` kernel with both ",
            "operands equal."
        )]
        pub fn $name(z: &mut [u64; $full], x: &[u64; $half]) {
            mul(z, x, x);
        }
    };
}

fixed_mul!(mul_4_8, 4, 8);
fixed_mul!(mul_6_12, 6, 12);
fixed_mul!(mul_8_16, 8, 16);

fixed_sqr!(sqr_4_8, 4, 8);
fixed_sqr!(sqr_6_12, 6, 12);
fixed_sqr!(sqr_8_16, 8, 16);

/// Karatsuba multiplication of two 16-limb operands into a 32-limb result.
/// `t` is scratch of at least `3 * 16 = 48` limbs (spec.md §9: "the scratch
/// requirement is 3k limbs for k -> 2k Karatsuba").
///
/// Splits `x = x1*B + x0`, `y = y1*B + y0` with `B = 2^(64*8)`, and computes
/// the product from three half-size multiplications instead of four:
/// `z0 = x0*y0`, `z2 = x1*y1`, `z1 = (x0+x1)*(y0+y1) - z0 - z2`.
pub fn kmul_16_32(z: &mut [u64; 32], x: &[u64; 16], y: &[u64; 16], t: &mut [u64]) {
    debug_assert!(t.len() >= 48);
    karatsuba_mul(z, x, y, t, 8);
}

/// Karatsuba square of a 16-limb operand into a 32-limb result.
pub fn ksqr_16_32(z: &mut [u64; 32], x: &[u64; 16], t: &mut [u64]) {
    debug_assert!(t.len() >= 48);
    karatsuba_sqr(z, x, t, 8);
}

/// Karatsuba square of a 32-limb operand into a 64-limb result.
pub fn ksqr_32_64(z: &mut [u64; 64], x: &[u64; 32], t: &mut [u64]) {
    debug_assert!(t.len() >= 96);
    karatsuba_sqr(z, x, t, 16);
}

/// Generic Karatsuba step over slices, parametrized by the half-width `h`
/// (so `x.len() == y.len() == z.len()/2 == 2*h`). `t` needs `3*2*h` limbs.
fn karatsuba_mul(z: &mut [u64], x: &[u64], y: &[u64], t: &mut [u64], h: usize) {
    let n = 2 * h;
    debug_assert_eq!(x.len(), n);
    debug_assert_eq!(y.len(), n);
    debug_assert_eq!(z.len(), 2 * n);
    debug_assert!(t.len() >= 3 * n);

    let (lo, rest) = z.split_at_mut(n);
    let (hi, _) = rest.split_at_mut(n);
    let (mid, t_rest) = t.split_at_mut(2 * h + 2);
    let (sx, sy) = t_rest.split_at_mut(h + 1);
    let sx = &mut sx[..h + 1];
    let sy = &mut sy[..h + 1];

    // lo <- x0 * y0, hi <- x1 * y1 (exact, disjoint half-size products)
    mul(lo, &x[..h], &y[..h]);
    mul(hi, &x[h..], &y[h..]);

    // sx <- x0 + x1, sy <- y0 + y1 (may carry into limb h)
    for w in sx.iter_mut() {
        *w = 0;
    }
    for w in sy.iter_mut() {
        *w = 0;
    }
    crate::limb::copy(&mut sx[..h], &x[..h]);
    let cx = add_assign(&mut sx[..h], &x[h..]);
    sx[h] = cx;
    crate::limb::copy(&mut sy[..h], &y[..h]);
    let cy = add_assign(&mut sy[..h], &y[h..]);
    sy[h] = cy;

    // mid <- sx * sy (exact: both operands fit in h+1 limbs)
    mul(mid, sx, sy);

    // mid <- mid - lo - hi  (now holds x0*y1 + x1*y0)
    let b1 = crate::add::sub_assign(mid, lo);
    debug_assert_eq!(b1 & !1, 0);
    let b2 = crate::add::sub_assign(mid, hi);
    debug_assert_eq!(b2 & !1, 0);

    // z[h..h+n] += mid, propagating carry all the way to the top.
    let window = &mut z[h..];
    let carry = add_assign(&mut window[..mid.len().min(window.len())], mid);
    if carry != 0 {
        let mut idx = h + mid.len();
        let mut c = carry;
        while c != 0 && idx < z.len() {
            let (s, co) = z[idx].overflowing_add(c);
            z[idx] = s;
            c = co as u64;
            idx += 1;
        }
    }
}

fn karatsuba_sqr(z: &mut [u64], x: &[u64], t: &mut [u64], h: usize) {
    karatsuba_mul(z, x, x, t, h);
}
