//! From-scratch AES-128 (Rijndael) encryption built on byte and word operations.
//!
//! This crate follows the FIPS-197 forward cipher and provides:
//! - Key schedule for AES-128.
//! - The four round transforms and GF(2^8) `xtime`.
//! - PKCS#7 and ANSI X.923 padding.
//! - A message-level [`Engine`] producing lowercase hex ciphertext (ECB).
//!
//! Only encryption is implemented. The code aims for clarity and testability
//! rather than constant-time guarantees; it should not be treated as
//! side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod block;
mod cipher;
mod engine;
mod error;
pub mod gf;
mod key;
pub mod padding;
mod provider;
pub mod round;
pub mod sbox;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{encrypt_block, expand_key, rcon, ROUNDS};
pub use crate::engine::{encrypt, Engine, EngineConfig};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, KeySchedule, KEY_LEN, ROUND_KEYS, SCHEDULE_WORDS};
pub use crate::padding::PaddingScheme;
pub use crate::provider::{KeyObserver, KeyProvider};
