#![forbid(unsafe_code)]

use pl_core::ids::{CollabId, MethodId};
use pl_core::model::{Category, CollabStatus};

#[derive(Clone, Debug)]
pub struct CollabRow {
    pub id: CollabId,
    pub revision: i64,
    pub method_id: MethodId,
    pub title: String,
    pub partner_name: String,
    pub partner_photo: Option<String>,
    pub status: CollabStatus,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub category: Category,
    pub progress: u8,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

/// One touched step of a collaboration, as persisted.
#[derive(Clone, Debug)]
pub struct StepState {
    pub step_index: usize,
    pub note: String,
    pub criteria: Vec<bool>,
    pub completed: bool,
    pub updated_at_ms: i64,
}

#[derive(Clone, Debug)]
pub struct CollabDetail {
    pub collab: CollabRow,
    pub steps: Vec<StepState>,
    pub completed_steps: Vec<usize>,
}

#[derive(Clone, Debug)]
pub struct CollabCreateRequest {
    pub method_id: MethodId,
    pub partner_name: String,
    pub partner_photo: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
}

#[derive(Clone, Debug)]
pub struct SaveStepRequest {
    pub collab_id: CollabId,
    pub expected_revision: Option<i64>,
    pub step_index: usize,
    pub notes: String,
    pub criteria: Vec<bool>,
}

#[derive(Clone, Debug)]
pub struct SaveStepResult {
    pub collab_id: CollabId,
    pub revision: i64,
    pub step_index: usize,
    pub step_completed: bool,
    pub completed_steps: Vec<usize>,
    pub progress: u8,
    pub event: EventRow,
}

#[derive(Clone, Debug)]
pub struct SetStatusRequest {
    pub collab_id: CollabId,
    pub expected_revision: Option<i64>,
    pub status: CollabStatus,
    pub require_steps_completed: bool,
}

#[derive(Clone, Debug)]
pub struct EventRow {
    pub seq: i64,
    pub collab_id: i64,
    pub ts_ms: i64,
    pub event_type: String,
    pub payload_json: String,
}
