//! Block padding schemes.
//!
//! Both schemes add `k = n - (len mod n)` bytes for block size `n`. They
//! disagree on aligned input: PKCS#7 always appends a full block of `n`,
//! while ANSI X.923 leaves aligned input untouched.

use core::convert::TryInto;
use core::num::NonZeroU8;

use crate::block::{Block, BLOCK_SIZE};

/// Block size used by the cipher, as a padding parameter.
pub const AES_BLOCK: NonZeroU8 = match NonZeroU8::new(BLOCK_SIZE as u8) {
    Some(size) => size,
    None => panic!("block size is non-zero"),
};

/// Padding applied to plaintext before it is split into blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaddingScheme {
    /// RFC 5652: `k` bytes each holding `k`; aligned input gains a full block.
    #[default]
    Pkcs7,
    /// `k - 1` zero bytes then `k`; aligned input is left as is.
    AnsiX923,
}

impl PaddingScheme {
    /// Pads `bytes` to a multiple of `block_size`.
    pub fn pad(self, bytes: &[u8], block_size: NonZeroU8) -> Vec<u8> {
        match self {
            PaddingScheme::Pkcs7 => pkcs7(bytes, block_size),
            PaddingScheme::AnsiX923 => ansi_x923(bytes, block_size),
        }
    }

    /// Pads `bytes` and splits the result into `block_size` chunks.
    pub fn pad_chunks(self, bytes: &[u8], block_size: NonZeroU8) -> Vec<Vec<u8>> {
        self.pad(bytes, block_size)
            .chunks_exact(usize::from(block_size.get()))
            .map(<[u8]>::to_vec)
            .collect()
    }

    /// Pads `bytes` to the AES block size and splits it into blocks.
    pub fn blocks(self, bytes: &[u8]) -> Vec<Block> {
        split_blocks(&self.pad(bytes, AES_BLOCK))
    }

    /// Recovers the padding length `k` from the tail of `padded`.
    ///
    /// Returns `None` when the tail is not well-formed for this scheme.
    pub fn padding_len(self, padded: &[u8], block_size: NonZeroU8) -> Option<usize> {
        let n = usize::from(block_size.get());
        if padded.is_empty() || padded.len() % n != 0 {
            return None;
        }
        let k = usize::from(*padded.last()?);
        if k == 0 || k > n {
            return None;
        }
        let filler = &padded[padded.len() - k..padded.len() - 1];
        let well_formed = match self {
            PaddingScheme::Pkcs7 => filler.iter().all(|&b| usize::from(b) == k),
            PaddingScheme::AnsiX923 => filler.iter().all(|&b| b == 0),
        };
        well_formed.then_some(k)
    }
}

fn fill_len(len: usize, block_size: NonZeroU8) -> u8 {
    let n = block_size.get();
    // len % n < n <= 255, so the narrowing is lossless.
    n - (len % usize::from(n)) as u8
}

/// PKCS#7: append `k` bytes with value `k`.
pub fn pkcs7(bytes: &[u8], block_size: NonZeroU8) -> Vec<u8> {
    let k = fill_len(bytes.len(), block_size);
    let mut out = Vec::with_capacity(bytes.len() + usize::from(k));
    out.extend_from_slice(bytes);
    out.resize(bytes.len() + usize::from(k), k);
    out
}

/// ANSI X.923: append `k - 1` zeros and a final `k`, only for unaligned input.
pub fn ansi_x923(bytes: &[u8], block_size: NonZeroU8) -> Vec<u8> {
    let mut out = bytes.to_vec();
    if bytes.len() % usize::from(block_size.get()) != 0 {
        let k = fill_len(bytes.len(), block_size);
        out.resize(bytes.len() + usize::from(k) - 1, 0);
        out.push(k);
    }
    out
}

/// Splits block-aligned bytes into AES blocks; a trailing partial block is dropped.
pub fn split_blocks(bytes: &[u8]) -> Vec<Block> {
    bytes
        .chunks_exact(BLOCK_SIZE)
        .map(|chunk| chunk.try_into().expect("chunk length is sixteen"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn size(n: u8) -> NonZeroU8 {
        NonZeroU8::new(n).expect("non-zero")
    }

    #[test]
    fn pkcs7_short_input() {
        let padded = pkcs7(b"YELLOW SUBMARINE", size(20));
        assert_eq!(padded, b"YELLOW SUBMARINE\x04\x04\x04\x04");
    }

    #[test]
    fn pkcs7_empty_input_gets_full_block() {
        let blocks = PaddingScheme::Pkcs7.blocks(&[]);
        assert_eq!(blocks, vec![[16u8; 16]]);
    }

    #[test]
    fn pkcs7_aligned_input_gets_extra_block() {
        let blocks = PaddingScheme::Pkcs7.blocks(&[0xaa; 16]);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], [0xaa; 16]);
        assert_eq!(blocks[1], [16u8; 16]);
    }

    #[test]
    fn ansi_x923_pads_unaligned_input() {
        let padded = ansi_x923(b"abcde", size(8));
        assert_eq!(padded, b"abcde\x00\x00\x03");
        let padded = ansi_x923(b"abcdefg", size(8));
        assert_eq!(padded, b"abcdefg\x01");
    }

    #[test]
    fn ansi_x923_leaves_aligned_input() {
        assert_eq!(ansi_x923(b"abcdefgh", size(8)), b"abcdefgh");
        assert!(ansi_x923(&[], size(8)).is_empty());
        assert!(PaddingScheme::AnsiX923.blocks(&[]).is_empty());
    }

    #[test]
    fn pad_chunks_splits_by_block_size() {
        let chunks = PaddingScheme::Pkcs7.pad_chunks(b"abcdefghij", size(4));
        assert_eq!(
            chunks,
            vec![b"abcd".to_vec(), b"efgh".to_vec(), b"ij\x02\x02".to_vec()]
        );
    }

    #[test]
    fn padded_length_is_recoverable() {
        let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
        for _ in 0..256 {
            let n = size(rng.gen_range(1..=255u8));
            let len = rng.gen_range(0..600usize);
            let mut data = vec![0u8; len];
            rng.fill_bytes(&mut data);
            let block = usize::from(n.get());

            let padded = pkcs7(&data, n);
            assert_eq!(padded.len() % block, 0);
            assert!(padded.len() > len);
            let k = PaddingScheme::Pkcs7.padding_len(&padded, n).expect("valid padding");
            assert!((1..=block).contains(&k));
            assert_eq!(padded.len() - k, len);
            assert_eq!(&padded[..len], data.as_slice());

            let padded = ansi_x923(&data, n);
            assert_eq!(padded.len() % block, 0);
            if len % block != 0 {
                let k = PaddingScheme::AnsiX923
                    .padding_len(&padded, n)
                    .expect("valid padding");
                assert!((1..=block).contains(&k));
                assert_eq!(padded.len() - k, len);
            } else {
                assert_eq!(padded, data);
            }
        }
    }

    #[test]
    fn padding_len_rejects_malformed_tails() {
        let n = size(4);
        assert_eq!(PaddingScheme::Pkcs7.padding_len(b"abc\x00", n), None);
        assert_eq!(PaddingScheme::Pkcs7.padding_len(b"abc\x05", n), None);
        assert_eq!(PaddingScheme::Pkcs7.padding_len(b"ab\x01\x02", n), None);
        assert_eq!(PaddingScheme::AnsiX923.padding_len(b"a\x01\x00\x03", n), None);
        assert_eq!(PaddingScheme::AnsiX923.padding_len(b"abc", n), None);
        assert_eq!(PaddingScheme::AnsiX923.padding_len(b"a\x00\x00\x03", n), Some(3));
    }

    #[test]
    fn split_blocks_preserves_order() {
        let bytes: Vec<u8> = (0..48).collect();
        let blocks = split_blocks(&bytes);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1][0], 16);
        assert_eq!(blocks[2][15], 47);
    }
}
