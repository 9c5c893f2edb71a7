#![forbid(unsafe_code)]

use crate::{
    McpServer, ai_error, ai_ok, args_object, collab_id_arg, required_str, required_usize,
    store_error_response,
};
use pl_core::editor::{EditorError, StepSeed};
use pl_storage::SaveStepRequest;
use serde_json::{Value, json};

impl McpServer {
    /// Opens one step for editing. The draft seeds from stored state; a
    /// stale criteria vector (method definition changed underneath it)
    /// restarts all-false at the step's current criteria count. An already
    /// open session is replaced.
    pub(crate) fn tool_step_open(&mut self, args: Value) -> Value {
        let obj = match args_object(&args) {
            Ok(obj) => obj,
            Err(resp) => return resp,
        };
        let collab_id = match collab_id_arg(obj, "collab") {
            Ok(id) => id,
            Err(resp) => return resp,
        };
        let step_index = match required_usize(obj, "step") {
            Ok(index) => index,
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
        let Some(step) = method.step(step_index) else {
            return ai_error(
                "STEP_OUT_OF_RANGE",
                &format!(
                    "step index out of range (index={step_index}, steps={})",
                    method.step_count()
                ),
            );
        };

        let stored = detail
            .steps
            .iter()
            .find(|state| state.step_index == step_index);
        self.editor_mut().open(
            collab_id,
            method.id,
            step_index,
            StepSeed {
                criteria_count: step.success_criteria.len(),
                stored_notes: stored.map(|state| state.note.as_str()),
                stored_criteria: stored.map(|state| state.criteria.as_slice()),
            },
        );

        let session = self.session_json();
        ai_ok(
            "step_open",
            json!({
                "step": {
                    "title": step.title,
                    "description": step.description,
                    "success_criteria": step.success_criteria,
                },
                "session": session,
            }),
        )
    }

    pub(crate) fn tool_step_toggle(&mut self, args: Value) -> Value {
        let obj = match args_object(&args) {
            Ok(obj) => obj,
            Err(resp) => return resp,
        };
        let criterion = match required_usize(obj, "criterion") {
            Ok(index) => index,
            Err(resp) => return resp,
        };

        match self.editor_mut().toggle_criterion(criterion) {
            Ok(checked) => {
                let session = self.session_json();
                ai_ok(
                    "step_toggle",
                    json!({ "criterion": criterion, "checked": checked, "session": session }),
                )
            }
            Err(err) => editor_error_response(err),
        }
    }

    pub(crate) fn tool_step_note(&mut self, args: Value) -> Value {
        let obj = match args_object(&args) {
            Ok(obj) => obj,
            Err(resp) => return resp,
        };
        let note = match required_str(obj, "note") {
            Ok(note) => note.to_string(),
            Err(resp) => return resp,
        };

        match self.editor_mut().set_notes(note) {
            Ok(()) => {
                let session = self.session_json();
                ai_ok("step_note", json!({ "session": session }))
            }
            Err(err) => editor_error_response(err),
        }
    }

    /// Commits the draft through the store and closes the editor. With no
    /// open session this is a no-op, not an error.
    pub(crate) fn tool_step_save(&mut self, _args: Value) -> Value {
        let Some(commit) = self.editor_mut().save() else {
            return ai_ok("step_save", json!({ "noop": true }));
        };

        match self.store_mut().save_step(SaveStepRequest {
            collab_id: commit.collab_id,
            expected_revision: None,
            step_index: commit.step_index,
            notes: commit.notes,
            criteria: commit.criteria,
        }) {
            Ok(result) => ai_ok(
                "step_save",
                json!({
                    "noop": false,
                    "collab": result.collab_id.as_i64(),
                    "step_index": result.step_index,
                    "step_completed": result.step_completed,
                    "completed_steps": result.completed_steps,
                    "progress": result.progress,
                    "revision": result.revision,
                }),
            ),
            Err(err) => store_error_response(err),
        }
    }

    pub(crate) fn tool_step_discard(&mut self, _args: Value) -> Value {
        let discarded = self.editor_mut().discard();
        ai_ok("step_discard", json!({ "discarded": discarded }))
    }

    fn session_json(&self) -> Value {
        match self.editor().session() {
            Some(session) => json!({
                "collab": session.collab_id().as_i64(),
                "step_index": session.step_index(),
                "notes": session.notes(),
                "criteria": session.criteria(),
            }),
            None => Value::Null,
        }
    }
}

fn editor_error_response(err: EditorError) -> Value {
    let code = match &err {
        EditorError::NoOpenSession => "NO_OPEN_SESSION",
        EditorError::CriterionOutOfRange { .. } => "CRITERION_OUT_OF_RANGE",
        EditorError::NotesTooLong { .. } => "NOTE_TOO_LONG",
    };
    ai_error(code, &err.to_string())
}
