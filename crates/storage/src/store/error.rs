#![forbid(unsafe_code)]

use pl_core::model::MAX_STEP_NOTE_CHARS;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Sql(rusqlite::Error),
    Json(serde_json::Error),
    InvalidInput(&'static str),
    UnknownMethod {
        method_id: i64,
    },
    UnknownCollab {
        collab_id: i64,
    },
    StepOutOfRange {
        step_index: usize,
        step_count: usize,
    },
    CriteriaLengthMismatch {
        expected: usize,
        actual: usize,
    },
    NoteTooLong {
        chars: usize,
    },
    RevisionMismatch {
        expected: i64,
        actual: i64,
    },
    StepsNotCompleted {
        open_steps: usize,
    },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io: {err}"),
            Self::Sql(err) => write!(f, "sqlite: {err}"),
            Self::Json(err) => write!(f, "json: {err}"),
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::UnknownMethod { method_id } => {
                write!(f, "unknown collaboration method (id={method_id})")
            }
            Self::UnknownCollab { collab_id } => {
                write!(f, "unknown collaboration (id={collab_id})")
            }
            Self::StepOutOfRange {
                step_index,
                step_count,
            } => write!(
                f,
                "step index out of range (index={step_index}, steps={step_count})"
            ),
            Self::CriteriaLengthMismatch { expected, actual } => write!(
                f,
                "criteria length mismatch (expected={expected}, actual={actual})"
            ),
            Self::NoteTooLong { chars } => write!(
                f,
                "note exceeds {MAX_STEP_NOTE_CHARS} characters (got {chars})"
            ),
            Self::RevisionMismatch { expected, actual } => write!(
                f,
                "revision mismatch (expected={expected}, actual={actual})"
            ),
            Self::StepsNotCompleted { open_steps } => {
                write!(f, "steps not completed (open={open_steps})")
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sql(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
