#![forbid(unsafe_code)]

use super::super::*;
use pl_core::ids::CollabId;
use pl_core::model::CollabStatus;
use rusqlite::{OptionalExtension, params};

pub(in crate::store) struct CollabColumns {
    pub id: i64,
    pub revision: i64,
    pub method_id: i64,
    pub title: String,
    pub partner_name: String,
    pub partner_photo: Option<String>,
    pub status: String,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub category: String,
    pub progress: i64,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

pub(in crate::store) fn collab_columns(
    row: &rusqlite::Row<'_>,
) -> rusqlite::Result<CollabColumns> {
    Ok(CollabColumns {
        id: row.get(0)?,
        revision: row.get(1)?,
        method_id: row.get(2)?,
        title: row.get(3)?,
        partner_name: row.get(4)?,
        partner_photo: row.get(5)?,
        status: row.get(6)?,
        start_date: row.get(7)?,
        due_date: row.get(8)?,
        category: row.get(9)?,
        progress: row.get(10)?,
        created_at_ms: row.get(11)?,
        updated_at_ms: row.get(12)?,
    })
}

pub(in crate::store) fn collab_row_from_columns(
    columns: CollabColumns,
) -> Result<CollabRow, StoreError> {
    Ok(CollabRow {
        id: collab_id_from_db(columns.id)?,
        revision: columns.revision,
        method_id: method_id_from_db(columns.method_id)?,
        title: columns.title,
        partner_name: columns.partner_name,
        partner_photo: columns.partner_photo,
        status: status_from_db(&columns.status)?,
        start_date: columns.start_date,
        due_date: columns.due_date,
        category: category_from_db(&columns.category)?,
        progress: progress_from_db(columns.progress),
        created_at_ms: columns.created_at_ms,
        updated_at_ms: columns.updated_at_ms,
    })
}

impl SqliteStore {
    pub fn collab_get(&self, collab_id: CollabId) -> Result<CollabDetail, StoreError> {
        let row = self
            .conn
            .query_row(
                r#"
                SELECT id, revision, method_id, title, partner_name, partner_photo, status,
                       start_date, due_date, category, progress, created_at_ms, updated_at_ms
                FROM collabs
                WHERE id = ?1
                "#,
                params![collab_id.as_i64()],
                collab_columns,
            )
            .optional()?;

        let Some(columns) = row else {
            return Err(StoreError::UnknownCollab {
                collab_id: collab_id.as_i64(),
            });
        };
        let collab = collab_row_from_columns(columns)?;

        let mut stmt = self.conn.prepare(
            r#"
            SELECT step_index, note, criteria_json, completed, updated_at_ms
            FROM collab_steps
            WHERE collab_id = ?1
            ORDER BY step_index ASC
            "#,
        )?;
        let raw_steps = stmt
            .query_map(params![collab_id.as_i64()], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, i64>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut steps = Vec::with_capacity(raw_steps.len());
        for (step_index, note, criteria_json, completed, updated_at_ms) in raw_steps {
            steps.push(StepState {
                step_index: step_index_from_db(step_index)?,
                note,
                criteria: decode_criteria(&criteria_json)?,
                completed: completed != 0,
                updated_at_ms,
            });
        }

        let completed_steps = steps
            .iter()
            .filter(|step| step.completed)
            .map(|step| step.step_index)
            .collect();

        Ok(CollabDetail {
            collab,
            steps,
            completed_steps,
        })
    }

    pub fn collab_list(
        &self,
        status: Option<CollabStatus>,
    ) -> Result<Vec<CollabRow>, StoreError> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, revision, method_id, title, partner_name, partner_photo, status,
                   start_date, due_date, category, progress, created_at_ms, updated_at_ms
            FROM collabs
            WHERE ?1 IS NULL OR status = ?1
            ORDER BY id ASC
            "#,
        )?;
        let raw_rows = stmt
            .query_map(params![status.map(CollabStatus::as_str)], collab_columns)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut rows = Vec::with_capacity(raw_rows.len());
        for columns in raw_rows {
            rows.push(collab_row_from_columns(columns)?);
        }
        Ok(rows)
    }
}
