#![forbid(unsafe_code)]

use super::{EventRow, SqliteStore, StoreError};
use pl_core::ids::CollabId;
use rusqlite::{OptionalExtension, Transaction, params};

pub(in crate::store) fn insert_event_tx(
    tx: &Transaction<'_>,
    collab_id: i64,
    ts_ms: i64,
    event_type: &str,
    payload_json: &str,
) -> Result<EventRow, StoreError> {
    tx.execute(
        "INSERT INTO collab_events(collab_id, ts_ms, event_type, payload_json) VALUES (?1, ?2, ?3, ?4)",
        params![collab_id, ts_ms, event_type, payload_json],
    )?;
    Ok(EventRow {
        seq: tx.last_insert_rowid(),
        collab_id,
        ts_ms,
        event_type: event_type.to_string(),
        payload_json: payload_json.to_string(),
    })
}

impl SqliteStore {
    pub fn collab_events(
        &self,
        collab_id: CollabId,
        limit: usize,
    ) -> Result<Vec<EventRow>, StoreError> {
        let exists = self
            .conn
            .query_row(
                "SELECT 1 FROM collabs WHERE id = ?1",
                params![collab_id.as_i64()],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        if !exists {
            return Err(StoreError::UnknownCollab {
                collab_id: collab_id.as_i64(),
            });
        }

        let mut stmt = self.conn.prepare(
            r#"
            SELECT seq, collab_id, ts_ms, event_type, payload_json
            FROM collab_events
            WHERE collab_id = ?1
            ORDER BY seq DESC
            LIMIT ?2
            "#,
        )?;
        let rows = stmt.query_map(params![collab_id.as_i64(), limit as i64], |row| {
            Ok(EventRow {
                seq: row.get(0)?,
                collab_id: row.get(1)?,
                ts_ms: row.get(2)?,
                event_type: row.get(3)?,
                payload_json: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}
