#![forbid(unsafe_code)]

use super::super::*;
use crate::store::methods::method_get_conn;
use rusqlite::{OptionalExtension, params};
use serde_json::json;

impl SqliteStore {
    /// Explicit status transition. Status never changes as a side effect
    /// of progress; completing every step still leaves the collaboration
    /// where it was until this is called. With `require_steps_completed`
    /// the transition is refused while open steps remain.
    pub fn collab_set_status(
        &mut self,
        request: SetStatusRequest,
    ) -> Result<(i64, EventRow), StoreError> {
        let SetStatusRequest {
            collab_id,
            expected_revision,
            status,
            require_steps_completed,
        } = request;

        let now_ms = now_ms();
        let tx = self.conn.transaction()?;

        let row = tx
            .query_row(
                "SELECT revision, method_id FROM collabs WHERE id = ?1",
                params![collab_id.as_i64()],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
            )
            .optional()?;
        let Some((revision, method_id_raw)) = row else {
            return Err(StoreError::UnknownCollab {
                collab_id: collab_id.as_i64(),
            });
        };
        if let Some(expected) = expected_revision
            && expected != revision
        {
            return Err(StoreError::RevisionMismatch {
                expected,
                actual: revision,
            });
        }

        if require_steps_completed {
            let method = method_get_conn(&tx, &self.catalog, method_id_from_db(method_id_raw)?)?;
            let completed: i64 = tx.query_row(
                "SELECT COUNT(*) FROM collab_steps WHERE collab_id = ?1 AND completed = 1",
                params![collab_id.as_i64()],
                |row| row.get(0),
            )?;
            let open_steps = method.step_count().saturating_sub(completed as usize);
            if open_steps > 0 {
                return Err(StoreError::StepsNotCompleted { open_steps });
            }
        }

        let new_revision = revision + 1;
        tx.execute(
            "UPDATE collabs SET revision = ?2, status = ?3, updated_at_ms = ?4 WHERE id = ?1",
            params![
                collab_id.as_i64(),
                new_revision,
                status.as_str(),
                now_ms
            ],
        )?;

        let payload = json!({
            "collab": collab_id.as_i64(),
            "status": status.as_str(),
        })
        .to_string();
        let event = insert_event_tx(&tx, collab_id.as_i64(), now_ms, "status_set", &payload)?;

        tx.commit()?;
        Ok((new_revision, event))
    }
}
