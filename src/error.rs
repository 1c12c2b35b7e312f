// src/error.rs
//! Public error type for the entire crate

use aescrypt_rs::AescryptError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("card number must be one or more digits")]
    InvalidPan,

    #[error("crypto operation failed: {0}")]
    Crypto(AescryptError),

    #[error("payload decryption failed: {0}")]
    Decryption(#[from] DecryptionError),

    #[error("card store error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("registration failed at line {line_number} (batch {batch_number:?}): {source}")]
    Ingest {
        line_number: u32,
        batch_number: Option<String>,
        #[source]
        source: Box<CoreError>,
    },

    #[error("ingest worker exited without a result")]
    WorkerGone,
}

/// Why a stored payload could not be turned back into a PAN.
///
/// Kept separate from [`CoreError::Crypto`]: an encrypt-side cipher failure
/// is fatal, a decrypt-side failure is a caller problem (corrupt payload or
/// wrong passphrase).
#[derive(Error, Debug)]
pub enum DecryptionError {
    #[error("payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("cipher rejected payload: {0}")]
    Cipher(AescryptError),

    #[error("decrypted payload is not UTF-8")]
    NotText,
}
