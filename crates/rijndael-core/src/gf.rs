//! Arithmetic in GF(2^8) modulo the Rijndael polynomial `x^8 + x^4 + x^3 + x + 1`.

/// Low byte of the reduction polynomial `0x11b`.
const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by `{02}`.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Returns `{02}^exp` in the field.
pub const fn pow2(exp: u32) -> u8 {
    let mut acc = 1u8;
    let mut i = 0;
    while i < exp {
        acc = xtime(acc);
        i += 1;
    }
    acc
}
