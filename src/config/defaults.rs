// src/config/defaults.rs
use crate::config::app::{Features, Keys, Paths};

pub const DEFAULT_PASSPHRASE: &str = "dev-card-passphrase-2025";
pub const DEFAULT_CARD_DB_KEY: &str = "dev-card-db-password-2025";

pub fn default_keys() -> Keys {
    Keys {
        passphrase: DEFAULT_PASSPHRASE.into(),
        card_db_key: DEFAULT_CARD_DB_KEY.into(),
    }
}

pub fn default_paths() -> Paths {
    Paths {
        card_db: "tests/data/cards.db".into(),
    }
}

pub fn default_features() -> Features {
    Features {
        use_dev_keys: true,
        skip_kdf_slowdown: true,
    }
}
