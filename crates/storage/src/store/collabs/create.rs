#![forbid(unsafe_code)]

use super::super::*;
use rusqlite::params;
use serde_json::json;

impl SqliteStore {
    /// Instantiates a method as a new collaboration with a partner. The
    /// method must resolve; status starts at `Proposed`, progress at 0.
    pub fn collab_create(
        &mut self,
        request: CollabCreateRequest,
    ) -> Result<(CollabRow, EventRow), StoreError> {
        let CollabCreateRequest {
            method_id,
            partner_name,
            partner_photo,
            start_date,
            due_date,
        } = request;

        let partner_name = partner_name.trim().to_string();
        if partner_name.is_empty() {
            return Err(StoreError::InvalidInput("partner_name must not be empty"));
        }

        let method = self.method_get(method_id)?;
        let status = pl_core::model::CollabStatus::Proposed;
        let now_ms = now_ms();

        let tx = self.conn.transaction()?;
        tx.execute(
            r#"
            INSERT INTO collabs(
              revision, method_id, title, partner_name, partner_photo, status,
              start_date, due_date, category, progress, created_at_ms, updated_at_ms
            ) VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 0, ?9, ?9)
            "#,
            params![
                method_id.as_i64(),
                &method.title,
                &partner_name,
                &partner_photo,
                status.as_str(),
                &start_date,
                &due_date,
                method.category.as_str(),
                now_ms
            ],
        )?;
        let collab_id = tx.last_insert_rowid();

        let payload = json!({
            "collab": collab_id,
            "method": method_id.as_i64(),
            "partner": partner_name,
        })
        .to_string();
        let event = insert_event_tx(&tx, collab_id, now_ms, "collab_proposed", &payload)?;

        tx.commit()?;

        let row = CollabRow {
            id: collab_id_from_db(collab_id)?,
            revision: 1,
            method_id,
            title: method.title,
            partner_name,
            partner_photo,
            status,
            start_date,
            due_date,
            category: method.category,
            progress: 0,
            created_at_ms: now_ms,
            updated_at_ms: now_ms,
        };
        Ok((row, event))
    }
}
