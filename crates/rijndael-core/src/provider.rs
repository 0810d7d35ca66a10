//! Seams for acquiring a cipher key and observing the key in use.

use crate::error::Result;
use crate::key::Aes128Key;

/// Supplies a key when the caller did not pass one explicitly.
///
/// Interactive implementations may re-prompt on bad input; whatever they
/// return has already been validated as a 16-byte key.
pub trait KeyProvider {
    /// Produces the key to encrypt with.
    fn provide_key(&mut self) -> Result<Aes128Key>;
}

impl KeyProvider for Aes128Key {
    fn provide_key(&mut self) -> Result<Aes128Key> {
        Ok(*self)
    }
}

/// Callback notified with the key right before any block is processed.
pub type KeyObserver = Box<dyn Fn(&Aes128Key) + Send + Sync>;
