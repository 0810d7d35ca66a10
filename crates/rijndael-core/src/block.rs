//! Block representation helpers.
//!
//! A block doubles as the cipher state: a 4×4 byte matrix flattened
//! column-major, so byte `r + 4 * c` sits in row `r`, column `c`.

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// Flat index of the byte at `(row, col)`.
#[inline]
pub const fn index(row: usize, col: usize) -> usize {
    row + 4 * col
}

/// Reads column `col` as a big-endian word.
#[inline]
pub fn column_word(state: &Block, col: usize) -> u32 {
    let idx = col * 4;
    u32::from_be_bytes([state[idx], state[idx + 1], state[idx + 2], state[idx + 3]])
}

/// Writes `word` (big-endian) into column `col`.
#[inline]
pub fn set_column_word(state: &mut Block, col: usize, word: u32) {
    let idx = col * 4;
    state[idx..idx + 4].copy_from_slice(&word.to_be_bytes());
}

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
