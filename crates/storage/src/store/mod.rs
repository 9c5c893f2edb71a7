#![forbid(unsafe_code)]

mod collabs;
mod error;
mod events;
mod methods;
mod schema;
mod support;
mod types;

pub use error::StoreError;
pub use types::*;

use pl_core::catalog::Catalog;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub(in crate::store) use events::insert_event_tx;
pub(in crate::store) use support::*;

const DB_FILE: &str = "pairlab.db";

/// Authoritative store for active collaborations and custom methods.
///
/// One mutation, one transaction: every write bumps the owning collab's
/// revision and appends an event row before committing.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    storage_dir: PathBuf,
    catalog: Catalog,
}

impl SqliteStore {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&storage_dir)?;

        let conn = Connection::open(storage_dir.join(DB_FILE))?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        schema::install_schema(&conn)?;

        Ok(Self {
            conn,
            storage_dir,
            catalog: Catalog::builtin(),
        })
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

pub(in crate::store) fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis().min(i64::MAX as u128) as i64)
        .unwrap_or(0)
}
