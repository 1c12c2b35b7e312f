// src/crypto/fingerprint.rs
use sha2::{Digest, Sha256};

/// Compute a SHA-256 digest and return it as lowercase hex (64 chars)
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
