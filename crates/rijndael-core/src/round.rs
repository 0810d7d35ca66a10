//! AES round transformations.

use crate::block::{column_word, index, set_column_word, Block};
use crate::gf::xtime;
use crate::sbox::sbox;

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[index(row, col)] = src[index(row, (col + row) % 4)];
        }
    }
}

fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    let [b0, b1, b2, b3] = [xtime(a0), xtime(a1), xtime(a2), xtime(a3)];
    col[0] = b0 ^ a3 ^ a2 ^ b1 ^ a1;
    col[1] = b1 ^ a0 ^ a3 ^ b2 ^ a2;
    col[2] = b2 ^ a1 ^ a0 ^ b3 ^ a3;
    col[3] = b3 ^ a2 ^ a1 ^ b0 ^ a0;
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for chunk in state.chunks_exact_mut(4) {
        let mut column = [chunk[0], chunk[1], chunk[2], chunk[3]];
        mix_single_column(&mut column);
        chunk.copy_from_slice(&column);
    }
}

/// Adds (XORs) a round key into the state, one column word at a time.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &[u32; 4]) {
    for (col, word) in round_key.iter().enumerate() {
        let mixed = column_word(state, col) ^ word;
        set_column_word(state, col, mixed);
    }
}
