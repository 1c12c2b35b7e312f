// src/crypto/payload.rs
use crate::aliases::{Pan, VaultPassphrase};
use crate::error::{CoreError, DecryptionError, Result};
use aescrypt_rs::{decrypt, encrypt};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::Cursor;

/// Encrypt a PAN → base64(AES-Crypt v3 ciphertext), in-memory
pub fn encrypt_pan(pan: &Pan, passphrase: &VaultPassphrase, kdf_iterations: u32) -> Result<String> {
    let mut out = Vec::new();
    encrypt(
        Cursor::new(pan.expose_secret().as_bytes()),
        &mut out,
        passphrase,
        kdf_iterations,
    )
    .map_err(CoreError::Crypto)?;
    Ok(STANDARD.encode(&out))
}

/// Decrypt a stored payload back into a PAN
pub fn decrypt_pan(payload: &str, passphrase: &VaultPassphrase) -> Result<Pan> {
    let ciphertext = STANDARD
        .decode(payload)
        .map_err(DecryptionError::Encoding)?;

    let mut out = Vec::new();
    decrypt(Cursor::new(ciphertext), &mut out, passphrase).map_err(DecryptionError::Cipher)?;

    let pan = String::from_utf8(out).map_err(|_| DecryptionError::NotText)?;
    Ok(Pan::new(pan))
}
