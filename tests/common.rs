// tests/common.rs
//! Shared test utilities — logging + throwaway encrypted stores

use card_vault::aliases::VaultPassphrase;
use card_vault::{open_card_db_at, CardCodec};
use rusqlite::Connection;
use tempfile::TempDir;

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // pretty + works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times
}

pub const TEST_DB_KEY: &str = "test-card-db-key";
pub const TEST_PASSPHRASE: &str = "test-card-passphrase";

/// One throwaway SQLCipher card store in a temp dir
pub struct TestStore {
    pub conn: Connection,
    dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let conn = open_card_db_at(dir.path().join("cards.db"), TEST_DB_KEY).unwrap();
        Self { conn, dir }
    }

    /// A second connection to the same store (concurrency tests, jobs)
    pub fn second_conn(&self) -> Connection {
        open_card_db_at(self.dir.path().join("cards.db"), TEST_DB_KEY).unwrap()
    }
}

/// Codec with a fixed passphrase and a fast KDF
pub fn test_codec() -> CardCodec {
    CardCodec::with_kdf_iterations(VaultPassphrase::new(TEST_PASSPHRASE.to_string()), 1)
}
