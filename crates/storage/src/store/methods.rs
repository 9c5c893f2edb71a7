#![forbid(unsafe_code)]

use super::*;
use pl_core::builder::MethodSpec;
use pl_core::catalog::{Catalog, CollabMethod};
use pl_core::ids::MethodId;
use rusqlite::{Connection, OptionalExtension, params};

/// Custom ids are allocated above this floor so they can never collide
/// with the built-in catalog (1..=6).
const CUSTOM_METHOD_ID_FLOOR: i64 = 1000;

impl SqliteStore {
    /// Resolves a method: built-in catalog first, then custom records.
    pub fn method_get(&self, id: MethodId) -> Result<CollabMethod, StoreError> {
        method_get_conn(&self.conn, &self.catalog, id)
    }

    pub fn method_list(&self) -> Result<Vec<CollabMethod>, StoreError> {
        let mut methods = self.catalog.methods().to_vec();

        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, title, description, duration, difficulty, category, outcome,
                   steps_json, success_criteria_json
            FROM custom_methods
            ORDER BY id ASC
            "#,
        )?;
        let rows = stmt.query_map([], custom_method_columns)?;
        for row in rows {
            methods.push(custom_method_from_columns(row?)?);
        }
        Ok(methods)
    }

    /// Appends a validated builder spec to the catalog and returns the
    /// stored method with its assigned id.
    pub fn custom_method_create(&mut self, spec: MethodSpec) -> Result<CollabMethod, StoreError> {
        let now_ms = now_ms();
        let tx = self.conn.transaction()?;

        let next_id: i64 = tx.query_row(
            "SELECT COALESCE(MAX(id), ?1) + 1 FROM custom_methods",
            params![CUSTOM_METHOD_ID_FLOOR],
            |row| row.get(0),
        )?;
        let id = method_id_from_db(next_id)?;
        let method = spec.into_method(id);

        tx.execute(
            r#"
            INSERT INTO custom_methods(
              id, title, description, duration, difficulty, category, outcome,
              steps_json, success_criteria_json, created_at_ms
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                id.as_i64(),
                &method.title,
                &method.description,
                &method.duration,
                method.difficulty.as_str(),
                method.category.as_str(),
                &method.outcome,
                encode_steps(&method.steps)?,
                encode_string_list(&method.success_criteria)?,
                now_ms
            ],
        )?;

        tx.commit()?;
        Ok(method)
    }
}

type CustomMethodColumns = (
    i64,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
);

fn custom_method_columns(row: &rusqlite::Row<'_>) -> rusqlite::Result<CustomMethodColumns> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
        row.get(8)?,
    ))
}

fn custom_method_from_columns(columns: CustomMethodColumns) -> Result<CollabMethod, StoreError> {
    let (id, title, description, duration, difficulty, category, outcome, steps, criteria) =
        columns;
    Ok(CollabMethod {
        id: method_id_from_db(id)?,
        title,
        description,
        duration,
        difficulty: difficulty_from_db(&difficulty)?,
        category: category_from_db(&category)?,
        steps: decode_steps(&steps)?,
        outcome,
        success_criteria: decode_string_list(&criteria)?,
    })
}

/// Shared resolver usable both outside and inside a transaction
/// (`Transaction` derefs to `Connection`).
pub(in crate::store) fn method_get_conn(
    conn: &Connection,
    catalog: &Catalog,
    id: MethodId,
) -> Result<CollabMethod, StoreError> {
    if let Some(method) = catalog.find(id) {
        return Ok(method.clone());
    }

    let row = conn
        .query_row(
            r#"
            SELECT id, title, description, duration, difficulty, category, outcome,
                   steps_json, success_criteria_json
            FROM custom_methods
            WHERE id = ?1
            "#,
            params![id.as_i64()],
            custom_method_columns,
        )
        .optional()?;

    let Some(columns) = row else {
        return Err(StoreError::UnknownMethod {
            method_id: id.as_i64(),
        });
    };
    custom_method_from_columns(columns)
}
