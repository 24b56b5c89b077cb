//! Bit-field helpers for 16-bit LC-3 instruction words.
//!
//! Bit 15 is the most significant bit and bit 0 the least significant. All ranges are
//! inclusive. Callers pass literal ranges taken from the instruction formats, so range
//! violations are only checked in debug builds.

/// Extract bits `from` down to `to` of `word`, right-justified and zero-extended.
#[inline]
pub fn bits(word: u16, from: u32, to: u32) -> u16 {
    debug_assert!(to <= from && from <= 15, "bad bit range [{}:{}]", from, to);
    let width = from - to + 1;
    let mask = if width >= 16 { 0xFFFF } else { (1u16 << width) - 1 };
    (word >> to) & mask
}

/// Whether bit `n` of `word` is set.
#[inline]
pub fn bit(word: u16, n: u32) -> bool {
    bits(word, n, n) != 0
}

/// Sign-extend the low `width` bits of `value` as a two's-complement quantity.
#[inline]
pub fn sign_extend(value: u16, width: u32) -> i16 {
    debug_assert!((1..=16).contains(&width), "bad sign-extend width {}", width);
    if width >= 16 {
        return value as i16;
    }

    let value = value & ((1u16 << width) - 1);
    if bit(value, width - 1) {
        (value | (0xFFFF << width)) as i16
    } else {
        value as i16
    }
}
