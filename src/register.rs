// src/register.rs
//! Idempotent card registration
//!
//! `register_if_absent` owns the "at most one record per fingerprint"
//! invariant: fingerprint → lookup → reuse-or-insert, with one bounded
//! re-read when a concurrent caller wins the insert. The check-then-act
//! window is closed by the store's UNIQUE constraint, not by a lock.

use rusqlite::Connection;
use serde::Serialize;
use tracing::{info, warn};

use crate::aliases::Pan;
use crate::crypto::CardCodec;
use crate::db::{find_by_hash, insert_card, is_unique_violation, NewCard};
use crate::error::{CoreError, Result};

/// Outcome of one `register_if_absent` call
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub card_id: i64,
    pub message: String,
    pub already_registered: bool,
}

/// Outcome of one `check_card` call
#[derive(Debug, Clone, Serialize)]
pub struct CardCheck {
    pub exists: bool,
    pub card_id: Option<i64>,
    pub message: String,
}

/// A PAN is acceptable iff it is non-empty and all ASCII digits
fn validate_pan(pan: &Pan) -> Result<()> {
    let digits = pan.expose_secret();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::InvalidPan);
    }
    Ok(())
}

/// Register a card unless an identical one is already stored.
///
/// An existing record is returned untouched — batch/sequence metadata is
/// fixed at creation time, even when the caller supplies different values.
pub fn register_if_absent(
    conn: &Connection,
    codec: &CardCodec,
    pan: &Pan,
    batch_number: Option<&str>,
    sequence_number: Option<i64>,
) -> Result<Registration> {
    validate_pan(pan)?;

    let card_hash = codec.fingerprint(pan);
    info!(
        batch = ?batch_number,
        sequence = ?sequence_number,
        fingerprint = &card_hash[..8],
        "registering card"
    );

    if let Some(existing) = find_by_hash(conn, &card_hash)? {
        warn!(card_id = existing.id, "card already exists in store");
        return Ok(Registration {
            card_id: existing.id,
            message: "Card already registered".into(),
            already_registered: true,
        });
    }

    let encrypted_pan = codec.encrypt(pan)?;
    let new_card = NewCard {
        card_hash: card_hash.clone(),
        encrypted_pan,
        batch_number: batch_number.map(str::to_owned),
        sequence_number,
    };

    match insert_card(conn, &new_card) {
        Ok(card_id) => {
            info!(card_id, "card registered");
            Ok(Registration {
                card_id,
                message: "Card registered successfully".into(),
                already_registered: false,
            })
        }
        Err(err) if is_unique_violation(&err) => {
            // Lost the insert race — the row that won is authoritative
            warn!(fingerprint = &card_hash[..8], "concurrent insert won, reusing winner");
            let winner = find_by_hash(conn, &card_hash)?.ok_or(CoreError::Sql(err))?;
            Ok(Registration {
                card_id: winner.id,
                message: "Card already registered".into(),
                already_registered: true,
            })
        }
        Err(err) => Err(err.into()),
    }
}

/// Read-only fingerprint lookup — no writes, no validation error:
/// a malformed PAN simply hashes to nothing stored.
pub fn check_card(conn: &Connection, codec: &CardCodec, pan: &Pan) -> Result<CardCheck> {
    let card_hash = codec.fingerprint(pan);

    match find_by_hash(conn, &card_hash)? {
        Some(card) => {
            info!(card_id = card.id, "card found");
            Ok(CardCheck {
                exists: true,
                card_id: Some(card.id),
                message: "Card found".into(),
            })
        }
        None => {
            info!("card not found");
            Ok(CardCheck {
                exists: false,
                card_id: None,
                message: "Card not found".into(),
            })
        }
    }
}
