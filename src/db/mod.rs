// src/db/mod.rs
//! SQLCipher-backed card store
//!
//! Connection setup lives in `card_db_conn`, row operations in
//! `card_db_ops`. The UNIQUE constraint on `card_hash` is the only
//! cross-process arbiter of card uniqueness.

pub mod card_db_conn;
pub mod card_db_ops;

pub use card_db_conn::{open_card_db, open_card_db_at};
pub use card_db_ops::{
    card_exists, find_by_hash, find_by_id, insert_card, is_unique_violation, CardRecord, NewCard,
};
