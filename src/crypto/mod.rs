// src/crypto/mod.rs
//! Pure cryptographic operations — no I/O, no database
//!
//! Everything here works on in-memory values: a one-way SHA-256
//! fingerprint for lookups, and a reversible AES-Crypt payload for
//! recovery. The lookup path never sees plaintext.

mod fingerprint;
mod payload;

pub use fingerprint::sha256_hex;
pub use payload::{decrypt_pan, encrypt_pan};

use crate::aliases::{Pan, VaultPassphrase};
use crate::consts::{FAST_KDF_ITERATIONS, PAN_KDF_ITERATIONS};
use crate::error::Result;

/// Fingerprint + payload transforms under one configured passphrase.
///
/// The passphrase is injected once at construction and never changes;
/// a `CardCodec` is immutable and safe to share across threads by
/// reference.
pub struct CardCodec {
    passphrase: VaultPassphrase,
    kdf_iterations: u32,
}

impl CardCodec {
    pub fn new(passphrase: VaultPassphrase) -> Self {
        Self {
            passphrase,
            kdf_iterations: PAN_KDF_ITERATIONS,
        }
    }

    /// Same codec with an explicit KDF cost (tests, bulk tuning)
    pub fn with_kdf_iterations(passphrase: VaultPassphrase, kdf_iterations: u32) -> Self {
        Self {
            passphrase,
            kdf_iterations,
        }
    }

    /// Build the process-wide codec from config + environment.
    ///
    /// Outside dev mode the passphrase must come from
    /// `CARD_VAULT_PASSPHRASE`; a missing value is startup-fatal.
    pub fn from_config() -> Self {
        let config = crate::config::load();

        let passphrase = if config.features.use_dev_keys {
            config.keys.passphrase.clone()
        } else {
            std::env::var("CARD_VAULT_PASSPHRASE").expect("CARD_VAULT_PASSPHRASE required")
        };

        let kdf_iterations = if config.features.skip_kdf_slowdown {
            FAST_KDF_ITERATIONS
        } else {
            PAN_KDF_ITERATIONS
        };

        Self::with_kdf_iterations(VaultPassphrase::new(passphrase), kdf_iterations)
    }

    /// Deterministic lookup fingerprint: SHA-256 of the PAN bytes,
    /// lowercase hex. Total — defined for the empty string too.
    pub fn fingerprint(&self, pan: &Pan) -> String {
        sha256_hex(pan.expose_secret().as_bytes())
    }

    /// Reversible payload: AES-Crypt v3 under the configured passphrase,
    /// base64-encoded. Fresh salt/IV every call — two encryptions of the
    /// same PAN are not expected to match.
    pub fn encrypt(&self, pan: &Pan) -> Result<String> {
        encrypt_pan(pan, &self.passphrase, self.kdf_iterations)
    }

    /// Inverse of [`CardCodec::encrypt`]
    pub fn decrypt(&self, payload: &str) -> Result<Pan> {
        decrypt_pan(payload, &self.passphrase)
    }
}
