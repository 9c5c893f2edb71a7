#![forbid(unsafe_code)]

use crate::ts_ms_to_rfc3339;
use pl_core::catalog::CollabMethod;
use pl_storage::{CollabRow, EventRow, StepState};
use serde_json::{Value, json};

pub(in crate::handlers) fn method_summary_json(method: &CollabMethod) -> Value {
    json!({
        "id": method.id.as_i64(),
        "title": method.title,
        "description": method.description,
        "duration": method.duration,
        "difficulty": method.difficulty.as_str(),
        "category": method.category.as_str(),
        "steps": method.step_count(),
    })
}

pub(in crate::handlers) fn method_full_json(method: &CollabMethod) -> Value {
    json!({
        "id": method.id.as_i64(),
        "title": method.title,
        "description": method.description,
        "duration": method.duration,
        "difficulty": method.difficulty.as_str(),
        "category": method.category.as_str(),
        "steps": method.steps.iter().map(|step| json!({
            "title": step.title,
            "description": step.description,
            "success_criteria": step.success_criteria,
        })).collect::<Vec<_>>(),
        "outcome": method.outcome,
        "success_criteria": method.success_criteria,
    })
}

pub(in crate::handlers) fn collab_row_json(row: &CollabRow) -> Value {
    json!({
        "id": row.id.as_i64(),
        "revision": row.revision,
        "method": row.method_id.as_i64(),
        "title": row.title,
        "partner_name": row.partner_name,
        "partner_photo": row.partner_photo,
        "status": row.status.as_str(),
        "start_date": row.start_date,
        "due_date": row.due_date,
        "category": row.category.as_str(),
        "progress": row.progress,
    })
}

pub(in crate::handlers) fn step_state_json(step: &StepState) -> Value {
    json!({
        "step_index": step.step_index,
        "note": step.note,
        "criteria": step.criteria,
        "completed": step.completed,
    })
}

pub(in crate::handlers) fn event_json(event: &EventRow) -> Value {
    json!({
        "seq": event.seq,
        "collab": event.collab_id,
        "ts": ts_ms_to_rfc3339(event.ts_ms),
        "type": event.event_type,
        "payload": serde_json::from_str::<Value>(&event.payload_json)
            .unwrap_or(Value::Null),
    })
}
