//! Constant-time, fixed-precision big-integer arithmetic over slices of
//! 64-bit limbs, with specialized fast-path layers for the prime fields
//! underlying the NIST P-256 and P-384 elliptic curves.
//!
//! This crate is a library of leaf arithmetic kernels, not a cryptographic
//! protocol implementation: no elliptic-curve point arithmetic, no RSA key
//! schedule, no ASN.1/DER, no I/O beyond byte <-> limb conversion. Every
//! kernel is a synchronous function over caller-owned memory; none of them
//! allocates, and none of them signals failure — preconditions (odd
//! modulus, operand ranges, coprimality, buffer aliasing class) are
//! contracts enforced by the caller, documented on each function.
//!
//! # Module overview
//!
//! - [`word`] — single 64-bit-word helpers: clz/ctz, byte reversal, the
//!   negated modular inverse that seeds Montgomery reduction.
//! - [`limb`] — the size-parametric core over `&[u64]` slices: copy,
//!   comparison, parity, bit/digit extraction, shifts, `mux` selection.
//! - [`add`] — carry-chain add, borrow-chain sub, and their constant-time
//!   conditional variants.
//! - [`mul`] — general and fixed-size multiply/multiply-accumulate,
//!   including Karatsuba for the 16x16->32 and 32x32->64 sizes.
//! - [`montgomery`] — Montgomery reduction and multiplication, in both
//!   strict (`< m`) and almost (`< 2m`) forms.
//! - [`modular`] — modular add/sub/double/halve over an arbitrary odd
//!   modulus, plus (non-constant-time) modular inverse and coprimality.
//! - [`curve`] — fixed-size P-256 / P-384 specializations built from the
//!   layers above: field/order arithmetic, Montgomery domain conversion,
//!   curve-modulus reduction, big-endian byte conversion.
//!
//! # Design goals
//!
//! - No heap allocation in any kernel; all scratch is caller-supplied.
//! - Constant-time with respect to data everywhere except [`modular::modinv`]
//!   and [`modular::coprime`], which are explicitly documented as
//!   data-variable.
//! - No hidden state: the only globals are the compile-time curve/order
//!   constants in [`curve::constants`].

pub mod add;
pub mod curve;
pub mod limb;
pub mod modular;
pub mod montgomery;
pub mod mul;
pub mod word;
