#![forbid(unsafe_code)]

use super::StoreError;
use rusqlite::Connection;

pub(in crate::store) fn install_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(FULL_SCHEMA_SQL)?;
    Ok(())
}

const FULL_SCHEMA_SQL: &str = r#"
        PRAGMA journal_mode = WAL;

        CREATE TABLE IF NOT EXISTS custom_methods (
          id INTEGER PRIMARY KEY,
          title TEXT NOT NULL,
          description TEXT NOT NULL,
          duration TEXT NOT NULL,
          difficulty TEXT NOT NULL,
          category TEXT NOT NULL,
          outcome TEXT NOT NULL,
          steps_json TEXT NOT NULL,
          success_criteria_json TEXT NOT NULL,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS collabs (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          revision INTEGER NOT NULL,
          method_id INTEGER NOT NULL,
          title TEXT NOT NULL,
          partner_name TEXT NOT NULL,
          partner_photo TEXT,
          status TEXT NOT NULL DEFAULT 'Proposed',
          start_date TEXT,
          due_date TEXT,
          category TEXT NOT NULL,
          progress INTEGER NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS collab_steps (
          collab_id INTEGER NOT NULL,
          step_index INTEGER NOT NULL,
          note TEXT NOT NULL DEFAULT '',
          criteria_json TEXT NOT NULL,
          completed INTEGER NOT NULL DEFAULT 0,
          updated_at_ms INTEGER NOT NULL,
          PRIMARY KEY (collab_id, step_index)
        );

        CREATE TABLE IF NOT EXISTS collab_events (
          seq INTEGER PRIMARY KEY AUTOINCREMENT,
          collab_id INTEGER NOT NULL,
          ts_ms INTEGER NOT NULL,
          event_type TEXT NOT NULL,
          payload_json TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_collabs_status ON collabs(status);
        CREATE INDEX IF NOT EXISTS idx_collab_steps_completed
          ON collab_steps(collab_id, completed);
        CREATE INDEX IF NOT EXISTS idx_collab_events_collab
          ON collab_events(collab_id, seq);
"#;
