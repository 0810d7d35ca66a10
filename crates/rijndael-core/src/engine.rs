//! Message-level encryption: padding, key schedule and hex output.

use std::fmt;

use log::debug;
use rayon::prelude::*;

use crate::block::Block;
use crate::cipher::{encrypt_block, expand_key};
use crate::error::Result;
use crate::key::{Aes128Key, KeySchedule};
use crate::padding::PaddingScheme;
use crate::provider::{KeyObserver, KeyProvider};

/// Below this many blocks the sequential path is used even when parallel
/// processing is enabled.
const PARALLEL_MIN_BLOCKS: usize = 64;

/// Configuration for the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Padding applied before the message is split into blocks.
    pub padding: PaddingScheme,
    /// Whether large messages are encrypted across the rayon pool.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            padding: PaddingScheme::Pkcs7,
            parallel: true,
        }
    }
}

/// Encrypts whole messages block by block (ECB, no chaining).
#[derive(Default)]
pub struct Engine {
    config: EngineConfig,
    observer: Option<KeyObserver>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Engine {
    /// Creates an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with explicit configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            observer: None,
        }
    }

    /// Registers a callback that receives the key before encryption starts.
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&Aes128Key) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Encrypts a text message, returning lowercase hex ciphertext.
    ///
    /// The text is taken as its UTF-8 bytes, which for ASCII is one byte
    /// per character.
    pub fn encrypt(&self, message: &str, key: &Aes128Key) -> String {
        self.encrypt_bytes(message.as_bytes(), key)
    }

    /// Encrypts raw bytes, returning lowercase hex ciphertext.
    pub fn encrypt_bytes(&self, data: &[u8], key: &Aes128Key) -> String {
        let blocks = self.config.padding.blocks(data);
        if let Some(observer) = &self.observer {
            observer(key);
        }
        debug!(
            "encrypting {} byte(s) as {} block(s) with {:?} padding",
            data.len(),
            blocks.len(),
            self.config.padding
        );

        let schedule = expand_key(key);
        let cipher = self.encrypt_blocks(&blocks, &schedule);
        hex::encode(cipher.concat())
    }

    /// Encrypts `message` with `key` if given, otherwise with a key from `provider`.
    ///
    /// An explicit key that is not 16 bytes is rejected, never truncated or padded.
    pub fn encrypt_with<P>(
        &self,
        message: &str,
        key: Option<&[u8]>,
        provider: &mut P,
    ) -> Result<String>
    where
        P: KeyProvider + ?Sized,
    {
        let key = match key {
            Some(bytes) => Aes128Key::try_from(bytes)?,
            None => provider.provide_key()?,
        };
        Ok(self.encrypt(message, &key))
    }

    /// Encrypts independent blocks against a shared schedule, preserving order.
    pub fn encrypt_blocks(&self, blocks: &[Block], schedule: &KeySchedule) -> Vec<Block> {
        if self.config.parallel && blocks.len() >= PARALLEL_MIN_BLOCKS {
            blocks
                .par_iter()
                .map(|block| encrypt_block(block, schedule))
                .collect()
        } else {
            blocks
                .iter()
                .map(|block| encrypt_block(block, schedule))
                .collect()
        }
    }
}

/// Encrypts `message` under `key` with the default engine.
///
/// Fails with [`Error::InvalidKeyLength`](crate::Error::InvalidKeyLength)
/// unless `key` is exactly 16 bytes.
pub fn encrypt(message: &str, key: &[u8]) -> Result<String> {
    let key = Aes128Key::try_from(key)?;
    Ok(Engine::new().encrypt(message, &key))
}
