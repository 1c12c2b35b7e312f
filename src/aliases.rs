// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret types used throughout card-vault.
//! A PAN only ever exists in memory wrapped in one of these: zeroized
//! on drop, redacted from Debug output.

pub use secure_gate::{dynamic_alias, SecureConversionsExt};

// Dynamic secrets
dynamic_alias!(Pan, String); // raw card number, transient only
dynamic_alias!(VaultPassphrase, String); // PBE passphrase for PAN payloads
