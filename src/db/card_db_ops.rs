// src/db/card_db_ops.rs
//! Row operations for the `cards` table
//!
//! Connection setup is not handled here (see `card_db_conn`).
//! All functions take `&Connection` so callers own transaction scope
//! and connection lifetime.

use rusqlite::{params, Connection, OptionalExtension, Row};

/// One persisted card registration. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct CardRecord {
    pub id: i64,
    pub card_hash: String,
    pub encrypted_pan: String,
    pub batch_number: Option<String>,
    pub sequence_number: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

/// Insert payload for a card not yet in the store
#[derive(Debug, Clone)]
pub struct NewCard {
    pub card_hash: String,
    pub encrypted_pan: String,
    pub batch_number: Option<String>,
    pub sequence_number: Option<i64>,
}

const CARD_COLUMNS: &str =
    "id, card_hash, encrypted_pan, batch_number, sequence_number, created_at, updated_at";

fn card_from_row(row: &Row<'_>) -> rusqlite::Result<CardRecord> {
    Ok(CardRecord {
        id: row.get(0)?,
        card_hash: row.get(1)?,
        encrypted_pan: row.get(2)?,
        batch_number: row.get(3)?,
        sequence_number: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

/// Insert a new card row and return its assigned id.
///
/// A plain INSERT on purpose: a duplicate fingerprint must surface as a
/// UNIQUE violation (see [`is_unique_violation`]) so the registration
/// gate can re-read the winning row.
pub fn insert_card(conn: &Connection, card: &NewCard) -> rusqlite::Result<i64> {
    conn.execute(
        r#"
        INSERT INTO cards (card_hash, encrypted_pan, batch_number, sequence_number)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        params![
            &card.card_hash,
            &card.encrypted_pan,
            &card.batch_number,
            card.sequence_number,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_by_hash(conn: &Connection, card_hash: &str) -> rusqlite::Result<Option<CardRecord>> {
    conn.query_row(
        &format!("SELECT {CARD_COLUMNS} FROM cards WHERE card_hash = ?1"),
        [card_hash],
        card_from_row,
    )
    .optional()
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<CardRecord>> {
    conn.query_row(
        &format!("SELECT {CARD_COLUMNS} FROM cards WHERE id = ?1"),
        [id],
        card_from_row,
    )
    .optional()
}

pub fn card_exists(conn: &Connection, card_hash: &str) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM cards WHERE card_hash = ?1)",
        [card_hash],
        |row| row.get(0),
    )
}

/// True when an insert lost the uniqueness race on `card_hash`
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
                && (e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                    || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY)
    )
}
