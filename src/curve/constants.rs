//! Fixed little-endian limb constants for the P-256 and P-384 prime and
//! group-order moduli (spec.md §6), plus their precomputed Montgomery
//! modifiers (R mod m). Encoded as static arrays rather than computed at
//! startup — spec.md §9: "No hidden state. No globals are used beyond
//! compile-time constants ... Encode these as static byte arrays."

/// P-256 field prime: `2^256 - 2^224 + 2^192 + 2^96 - 1`.
pub static P_256: [u64; 4] = [
    0xffff_ffff_ffff_ffff,
    0x0000_0000_ffff_ffff,
    0x0000_0000_0000_0000,
    0xffff_ffff_0000_0001,
];

/// P-256 group order.
pub static N_256: [u64; 4] = [
    0xf3b9_cac2_fc63_2551,
    0xbce6_faad_a717_9e84,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_0000_0000,
];

/// P-384 field prime: `2^384 - 2^128 - 2^96 + 2^32 - 1`.
pub static P_384: [u64; 6] = [
    0x0000_0000_ffff_ffff,
    0xffff_ffff_0000_0000,
    0xffff_ffff_ffff_fffe,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
];

/// P-384 group order.
pub static N_384: [u64; 6] = [
    0xecec_196a_ccc5_2973,
    0x581a_0db2_48b0_a77a,
    0xc763_4d81_f437_2ddf,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
];

/// `R mod p_256`, i.e. the Montgomery modifier ("i_256" in spec.md §9's
/// naming) for `R = 2^256`.
pub static I_256: [u64; 4] = [
    0x0000_0000_0000_0001,
    0xffff_ffff_0000_0000,
    0xffff_ffff_ffff_ffff,
    0x0000_0000_ffff_fffe,
];

/// `R mod p_384` for `R = 2^384`. Since `p_384 = 2^384 - 2^128 - 2^96 +
/// 2^32 - 1`, `2^384 ≡ 2^128 + 2^96 - 2^32 + 1 (mod p_384)`.
pub static I_384: [u64; 6] = [
    0xffff_ffff_0000_0001,
    0x0000_0000_ffff_ffff,
    0x0000_0000_0000_0001,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];
