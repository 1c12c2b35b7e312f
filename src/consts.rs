// src/consts.rs
//! Shared constants — security parameters and batch-file layout

/// Recommended KDF iterations for SQLCipher databases (2025+)
// ~0.1–0.2s on modern hardware — good default
pub const DB_KDF_ITERATIONS: u32 = 256_000;

/// KDF iterations for AES-Crypt PAN payloads
// One derivation per registered card; 10_000 keeps bulk ingestion
// throughput acceptable while the store itself is encrypted at rest
pub const PAN_KDF_ITERATIONS: u32 = 10_000;

/// Fast-path iterations when `features.skip_kdf_slowdown` is set
pub const FAST_KDF_ITERATIONS: u32 = 1;

/// Length of a rendered SHA-256 fingerprint in hex characters
pub const FINGERPRINT_HEX_LEN: usize = 64;

// ──────────────────────────────────────────────────────────────
// Batch-file layout — byte offsets in the UNTRIMMED line
// ──────────────────────────────────────────────────────────────

/// Minimum raw length for a line to classify as a header
pub const HEADER_MIN_LEN: usize = 45;
/// Header batch-number field: bytes [37,45)
pub const HEADER_BATCH_START: usize = 37;
pub const HEADER_BATCH_END: usize = 45;

/// Detail-line marker (first non-blank character)
pub const DETAIL_MARKER: char = 'C';
/// Minimum raw length for the fixed-offset detail branch
pub const DETAIL_FIXED_MIN_LEN: usize = 8;
/// Detail sequence field: bytes [1,7)
pub const DETAIL_SEQ_START: usize = 1;
pub const DETAIL_SEQ_END: usize = 7;
/// Detail card field starts at byte 7, nominally ends at byte 26
pub const DETAIL_CARD_START: usize = 7;
pub const DETAIL_CARD_END: usize = 26;
/// Hard cap on the card field when scanning past byte 26 for a space
pub const DETAIL_CARD_MAX_END: usize = 30;

/// Footer marker and batch-number field: bytes [0,8)
pub const FOOTER_PREFIX: &str = "LOTE";
pub const FOOTER_MIN_LEN: usize = 8;
pub const FOOTER_BATCH_END: usize = 8;
