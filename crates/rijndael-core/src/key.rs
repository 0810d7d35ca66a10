//! Key types for AES-128.

use core::convert::TryFrom;

use crate::error::Error;

/// Cipher key length in bytes.
pub const KEY_LEN: usize = 16;

/// Number of 32-bit words in an expanded AES-128 key.
pub const SCHEDULE_WORDS: usize = 44;

/// Number of round keys (one per round plus the initial whitening key).
pub const ROUND_KEYS: usize = SCHEDULE_WORDS / 4;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_LEN]);

impl Aes128Key {
    /// Returns the raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex rendering of the key.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; KEY_LEN]> for Aes128Key {
    fn from(value: [u8; KEY_LEN]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; KEY_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| Error::InvalidKeyLength {
                actual: bytes.len(),
            })
    }
}

/// Expanded key schedule `w[0..44]`; round key `i` is `w[4i..4i + 4]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySchedule([u32; SCHEDULE_WORDS]);

impl KeySchedule {
    pub(crate) fn from_words(words: [u32; SCHEDULE_WORDS]) -> Self {
        Self(words)
    }

    /// All schedule words in order.
    #[inline]
    pub fn words(&self) -> &[u32; SCHEDULE_WORDS] {
        &self.0
    }

    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn round_key(&self, round: usize) -> [u32; 4] {
        let base = round * 4;
        [
            self.0[base],
            self.0[base + 1],
            self.0[base + 2],
            self.0[base + 3],
        ]
    }
}
