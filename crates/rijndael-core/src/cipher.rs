//! AES-128 key schedule and block encryption.

use core::convert::TryInto;

use log::trace;

use crate::block::Block;
use crate::gf;
use crate::key::{Aes128Key, KeySchedule, SCHEDULE_WORDS};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::sbox::sbox;

/// Number of 32-bit words in the cipher key.
const NK: usize = 4;

/// Number of rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

/// `RCON[i - 1]` is `Rcon(i)`: `{02}^(i-1)` in the high byte of a word.
const RCON: [u32; ROUNDS] = build_rcon();

const fn build_rcon() -> [u32; ROUNDS] {
    let mut table = [0u32; ROUNDS];
    let mut i = 0;
    while i < ROUNDS {
        table[i] = (gf::pow2(i as u32) as u32) << 24;
        i += 1;
    }
    table
}

/// Round constant `Rcon(i)` for `i` in `1..=10`; `None` outside that range.
#[inline]
pub fn rcon(i: usize) -> Option<u32> {
    RCON.get(i.checked_sub(1)?).copied()
}

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a 128-bit key into the 44-word key schedule.
pub fn expand_key(key: &Aes128Key) -> KeySchedule {
    let mut w = [0u32; SCHEDULE_WORDS];
    for (i, chunk) in key.0.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }

    for i in NK..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % NK == 0 {
            temp = sub_word(rot_word(temp)) ^ RCON[i / NK - 1];
        }
        w[i] = w[i - NK] ^ temp;
    }

    KeySchedule::from_words(w)
}

/// Encrypts a single 16-byte block with a pre-expanded key schedule.
pub fn encrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let mut state = *block;

    add_round_key(&mut state, &schedule.round_key(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &schedule.round_key(round));
        trace!("round {round}: {}", hex::encode(state));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &schedule.round_key(ROUNDS));

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{Aes128Key, ROUND_KEYS};
    use rand::RngCore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    const APPENDIX_A_KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];

    #[test]
    fn encrypt_matches_nist_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let schedule = expand_key(&key);
        let ct = encrypt_block(&NIST_PLAIN, &schedule);
        assert_eq!(ct, NIST_CIPHER);
    }

    #[test]
    fn encrypt_zero_key_zero_block() {
        let schedule = expand_key(&Aes128Key::from([0u8; 16]));
        let ct = encrypt_block(&[0u8; 16], &schedule);
        assert_eq!(hex::encode(ct), "66e94bd4ef8a2c3b884cfa59ca342b2e");
    }

    #[test]
    fn encrypt_matches_appendix_b_vector() {
        let schedule = expand_key(&Aes128Key::from(APPENDIX_A_KEY));
        let mut plain = [0u8; 16];
        hex::decode_to_slice("3243f6a8885a308d313198a2e0370734", &mut plain)
            .expect("valid hex");
        let ct = encrypt_block(&plain, &schedule);
        assert_eq!(hex::encode(ct), "3925841d02dc09fbdc118597196a0b32");
    }

    #[test]
    fn key_expansion_matches_appendix_a() {
        let schedule = expand_key(&Aes128Key::from(APPENDIX_A_KEY));
        let w = schedule.words();
        assert_eq!(w.len(), 44);
        assert_eq!(&w[..4], &[0x2b7e1516, 0x28aed2a6, 0xabf71588, 0x09cf4f3c]);
        assert_eq!(&w[4..8], &[0xa0fafe17, 0x88542cb1, 0x23a33939, 0x2a6c7605]);
        assert_eq!(&w[40..], &[0xd014f9a8, 0xc9ee2589, 0xe13f0cc8, 0xb6630ca6]);
        assert_eq!(schedule.round_key(10), [0xd014f9a8, 0xc9ee2589, 0xe13f0cc8, 0xb6630ca6]);
    }

    #[test]
    fn key_expansion_is_deterministic_and_sized() {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        for _ in 0..32 {
            let mut key_bytes = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            let key = Aes128Key::from(key_bytes);
            let first = expand_key(&key);
            let second = expand_key(&key);
            assert_eq!(first, second);
            assert_eq!(first.words().len(), ROUND_KEYS * 4);
            assert_eq!(first.round_key(0), [
                u32::from_be_bytes([key_bytes[0], key_bytes[1], key_bytes[2], key_bytes[3]]),
                u32::from_be_bytes([key_bytes[4], key_bytes[5], key_bytes[6], key_bytes[7]]),
                u32::from_be_bytes([key_bytes[8], key_bytes[9], key_bytes[10], key_bytes[11]]),
                u32::from_be_bytes([key_bytes[12], key_bytes[13], key_bytes[14], key_bytes[15]]),
            ]);
        }
    }

    #[test]
    fn rcon_sequence() {
        let expected = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];
        for (i, byte) in expected.iter().enumerate() {
            assert_eq!(rcon(i + 1), Some((*byte as u32) << 24));
        }
    }

    #[test]
    fn rcon_outside_schedule_range_is_none() {
        assert_eq!(rcon(0), None);
        assert_eq!(rcon(11), None);
        assert_eq!(rcon(usize::MAX), None);
    }

    #[test]
    fn word_helpers() {
        assert_eq!(rot_word(0x09cf4f3c), 0xcf4f3c09);
        assert_eq!(sub_word(0xcf4f3c09), 0x8a84eb01);
    }

    #[test]
    fn encrypt_is_deterministic_random() {
        let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
        for _ in 0..32 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let schedule = expand_key(&Aes128Key::from(key_bytes));
            assert_eq!(encrypt_block(&block, &schedule), encrypt_block(&block, &schedule));
        }
    }
}
