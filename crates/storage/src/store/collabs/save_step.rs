#![forbid(unsafe_code)]

use super::super::*;
use crate::store::methods::method_get_conn;
use pl_core::model::{MAX_STEP_NOTE_CHARS, step_note_chars};
use pl_core::progress;
use rusqlite::{OptionalExtension, params};
use serde_json::json;

impl SqliteStore {
    /// Commits one step's edited notes and criterion flags as a single
    /// state transition: step completion is rederived from the flags, the
    /// completed-step set and progress are recomputed against the method's
    /// step count, the revision is bumped and a `step_saved` event is
    /// appended — all in one transaction.
    pub fn save_step(&mut self, request: SaveStepRequest) -> Result<SaveStepResult, StoreError> {
        let SaveStepRequest {
            collab_id,
            expected_revision,
            step_index,
            notes,
            criteria,
        } = request;

        let chars = step_note_chars(&notes);
        if chars > MAX_STEP_NOTE_CHARS {
            return Err(StoreError::NoteTooLong { chars });
        }

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

        let method_id = method_id_from_db(method_id_raw)?;
        let method = method_get_conn(&tx, &self.catalog, method_id)?;
        let Some(step) = method.step(step_index) else {
            return Err(StoreError::StepOutOfRange {
                step_index,
                step_count: method.step_count(),
            });
        };
        let expected_len = step.success_criteria.len();
        if criteria.len() != expected_len {
            return Err(StoreError::CriteriaLengthMismatch {
                expected: expected_len,
                actual: criteria.len(),
            });
        }

        let step_completed = progress::step_complete(&criteria);
        tx.execute(
            r#"
            INSERT INTO collab_steps(collab_id, step_index, note, criteria_json, completed, updated_at_ms)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(collab_id, step_index) DO UPDATE SET
              note = excluded.note,
              criteria_json = excluded.criteria_json,
              completed = excluded.completed,
              updated_at_ms = excluded.updated_at_ms
            "#,
            params![
                collab_id.as_i64(),
                step_index as i64,
                &notes,
                encode_criteria(&criteria)?,
                if step_completed { 1i64 } else { 0i64 },
                now_ms
            ],
        )?;

        let mut stmt = tx.prepare(
            "SELECT step_index FROM collab_steps WHERE collab_id = ?1 AND completed = 1 ORDER BY step_index ASC",
        )?;
        let raw_completed = stmt
            .query_map(params![collab_id.as_i64()], |row| row.get::<_, i64>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        drop(stmt);

        let mut completed_steps = Vec::with_capacity(raw_completed.len());
        for raw in raw_completed {
            completed_steps.push(step_index_from_db(raw)?);
        }

        let progress = progress::completion_percent(completed_steps.len(), method.step_count());
        let new_revision = revision + 1;
        tx.execute(
            "UPDATE collabs SET revision = ?2, progress = ?3, updated_at_ms = ?4 WHERE id = ?1",
            params![
                collab_id.as_i64(),
                new_revision,
                progress as i64,
                now_ms
            ],
        )?;

        let payload = json!({
            "collab": collab_id.as_i64(),
            "step_index": step_index,
            "step_completed": step_completed,
            "completed_steps": completed_steps,
            "progress": progress,
        })
        .to_string();
        let event = insert_event_tx(&tx, collab_id.as_i64(), now_ms, "step_saved", &payload)?;

        tx.commit()?;

        Ok(SaveStepResult {
            collab_id,
            revision: new_revision,
            step_index,
            step_completed,
            completed_steps,
            progress,
            event,
        })
    }
}
