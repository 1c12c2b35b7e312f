// src/db/card_db_conn.rs
use crate::consts::DB_KDF_ITERATIONS;
use rusqlite::{Connection, Result};
use std::{env, fs, path::Path};

/// Open the configured card store (path/key from config + env overrides)
pub fn open_card_db() -> Result<Connection> {
    let config = crate::config::load();

    // Allow full test isolation via env vars
    let db_path = env::var("CARD_VAULT_DB").unwrap_or_else(|_| config.paths.card_db.clone());

    let key: &str = if config.features.use_dev_keys {
        config.keys.card_db_key.as_str()
    } else {
        Box::leak(
            std::env::var("CARD_VAULT_DB_KEY")
                .expect("CARD_VAULT_DB_KEY required")
                .into_boxed_str(),
        )
    };

    open_card_db_at(&db_path, key)
}

/// Open (and initialize) a card store at an explicit path with an
/// explicit SQLCipher key
pub fn open_card_db_at<P: AsRef<Path>>(db_path: P, key: &str) -> Result<Connection> {
    if let Some(parent) = db_path.as_ref().parent() {
        let _ = fs::create_dir_all(parent);
    }

    let conn = Connection::open(db_path.as_ref())?;

    conn.execute_batch(&format!("PRAGMA key = '{key}';"))?;
    conn.execute_batch(&format!(
        r#"
        PRAGMA cipher_page_size = 4096;
        PRAGMA kdf_iter = {DB_KDF_ITERATIONS};
        PRAGMA cipher_hmac_algorithm = HMAC_SHA512;
        PRAGMA cipher_kdf_algorithm = PBKDF2_HMAC_SHA512;
        PRAGMA cipher_plaintext_header_size = 0;
        PRAGMA busy_timeout = 5000;

        CREATE TABLE IF NOT EXISTS cards (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            card_hash       TEXT NOT NULL UNIQUE,
            encrypted_pan   TEXT NOT NULL,
            batch_number    TEXT,
            sequence_number INTEGER,
            created_at      TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at      TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_cards_batch_number ON cards(batch_number);
        "#
    ))?;

    Ok(conn)
}
