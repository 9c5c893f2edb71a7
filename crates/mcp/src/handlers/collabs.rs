#![forbid(unsafe_code)]

use super::{collab_row_json, event_json, method_summary_json, step_state_json};
use crate::{
    McpServer, ai_error, ai_ok, args_object, collab_id_arg, method_id_arg, optional_bool,
    optional_i64, optional_str, optional_usize, required_str, store_error_response,
};
use pl_core::model::CollabStatus;
use pl_storage::{CollabCreateRequest, SetStatusRequest};
use serde_json::{Value, json};

impl McpServer {
    pub(crate) fn tool_collab_start(&mut self, args: Value) -> Value {
        let obj = match args_object(&args) {
            Ok(obj) => obj,
            Err(resp) => return resp,
        };
        let method_id = match method_id_arg(obj, "method") {
            Ok(id) => id,
            Err(resp) => return resp,
        };
        let partner_name = match required_str(obj, "partner_name") {
            Ok(name) => name.to_string(),
            Err(resp) => return resp,
        };
        let partner_photo = match optional_str(obj, "partner_photo") {
            Ok(photo) => photo.map(|s| s.to_string()),
            Err(resp) => return resp,
        };
        let start_date = match optional_str(obj, "start_date") {
            Ok(date) => date.map(|s| s.to_string()),
            Err(resp) => return resp,
        };
        let due_date = match optional_str(obj, "due_date") {
            Ok(date) => date.map(|s| s.to_string()),
            Err(resp) => return resp,
        };

        match self.store_mut().collab_create(CollabCreateRequest {
            method_id,
            partner_name,
            partner_photo,
            start_date,
            due_date,
        }) {
            Ok((row, _event)) => ai_ok("collab_start", json!({ "collab": collab_row_json(&row) })),
            Err(err) => store_error_response(err),
        }
    }

    pub(crate) fn tool_collab_list(&mut self, args: Value) -> Value {
        let obj = match args_object(&args) {
            Ok(obj) => obj,
            Err(resp) => return resp,
        };
        let status = match optional_str(obj, "status") {
            Ok(None) => None,
            Ok(Some(label)) => match CollabStatus::parse(label) {
                Some(status) => Some(status),
                None => return ai_error("INVALID_INPUT", "unknown status label"),
            },
            Err(resp) => return resp,
        };

        match self.store().collab_list(status) {
            Ok(rows) => ai_ok(
                "collab_list",
                json!({
                    "collabs": rows.iter().map(collab_row_json).collect::<Vec<_>>(),
                }),
            ),
            Err(err) => store_error_response(err),
        }
    }

    pub(crate) fn tool_collab_open(&mut self, args: Value) -> Value {
        let obj = match args_object(&args) {
            Ok(obj) => obj,
            Err(resp) => return resp,
        };
        let collab_id = match collab_id_arg(obj, "collab") {
            Ok(id) => id,
            Err(resp) => return resp,
        };

        let detail = match self.store().collab_get(collab_id) {
            Ok(detail) => detail,
            Err(err) => return store_error_response(err),
        };
        let method = match self.store().method_get(detail.collab.method_id) {
            Ok(method) => method,
            Err(err) => return store_error_response(err),
        };

        ai_ok(
            "collab_open",
            json!({
                "collab": collab_row_json(&detail.collab),
                "method": method_summary_json(&method),
                "steps": detail.steps.iter().map(step_state_json).collect::<Vec<_>>(),
                "completed_steps": detail.completed_steps,
            }),
        )
    }

    pub(crate) fn tool_collab_status(&mut self, args: Value) -> Value {
        let obj = match args_object(&args) {
            Ok(obj) => obj,
            Err(resp) => return resp,
        };
        let collab_id = match collab_id_arg(obj, "collab") {
            Ok(id) => id,
            Err(resp) => return resp,
        };
        let status = match required_str(obj, "status") {
            Ok(label) => match CollabStatus::parse(label) {
                Some(status) => status,
                None => return ai_error("INVALID_INPUT", "unknown status label"),
            },
            Err(resp) => return resp,
        };
        let require_steps_completed = match optional_bool(obj, "require_steps_completed") {
            Ok(flag) => flag.unwrap_or(false),
            Err(resp) => return resp,
        };
        let expected_revision = match optional_i64(obj, "expected_revision") {
            Ok(revision) => revision,
            Err(resp) => return resp,
        };

        match self.store_mut().collab_set_status(SetStatusRequest {
            collab_id,
            expected_revision,
            status,
            require_steps_completed,
        }) {
            Ok((revision, _event)) => ai_ok(
                "collab_status",
                json!({
                    "collab": collab_id.as_i64(),
                    "status": status.as_str(),
                    "revision": revision,
                }),
            ),
            Err(err) => store_error_response(err),
        }
    }

    pub(crate) fn tool_collab_events(&mut self, args: Value) -> Value {
        let obj = match args_object(&args) {
            Ok(obj) => obj,
            Err(resp) => return resp,
        };
        let collab_id = match collab_id_arg(obj, "collab") {
            Ok(id) => id,
            Err(resp) => return resp,
        };
        let limit = match optional_usize(obj, "limit") {
            Ok(limit) => limit.unwrap_or(20).clamp(1, 200),
            Err(resp) => return resp,
        };

        match self.store().collab_events(collab_id, limit) {
            Ok(events) => ai_ok(
                "collab_events",
                json!({
                    "collab": collab_id.as_i64(),
                    "events": events.iter().map(event_json).collect::<Vec<_>>(),
                }),
            ),
            Err(err) => store_error_response(err),
        }
    }
}
