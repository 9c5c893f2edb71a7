#![forbid(unsafe_code)]

use pl_storage::StoreError;
use serde_json::{Value, json};

pub(crate) fn ai_ok(intent: &str, result: Value) -> Value {
    json!({
        "success": true,
        "intent": intent,
        "result": result,
        "warnings": [],
        "refs": [],
        "error": null
    })
}

pub(crate) fn ai_error(code: &str, message: &str) -> Value {
    json!({
        "success": false,
        "intent": "error",
        "result": null,
        "warnings": [],
        "refs": [],
        "error": { "code": code, "message": message.trim() }
    })
}

pub(crate) fn store_error_response(err: StoreError) -> Value {
    let code = match &err {
        StoreError::Io(_) => "IO_ERROR",
        StoreError::Sql(_) | StoreError::Json(_) => "STORE_ERROR",
        StoreError::InvalidInput(_) => "INVALID_INPUT",
        StoreError::UnknownMethod { .. } => "UNKNOWN_METHOD",
        StoreError::UnknownCollab { .. } => "UNKNOWN_COLLAB",
        StoreError::StepOutOfRange { .. } => "STEP_OUT_OF_RANGE",
        StoreError::CriteriaLengthMismatch { .. } => "CRITERIA_LENGTH_MISMATCH",
        StoreError::NoteTooLong { .. } => "NOTE_TOO_LONG",
        StoreError::RevisionMismatch { .. } => "REVISION_MISMATCH",
        StoreError::StepsNotCompleted { .. } => "STEPS_NOT_COMPLETED",
    };
    ai_error(code, &err.to_string())
}
