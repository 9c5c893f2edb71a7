#![forbid(unsafe_code)]

//! Transient editing session for one step of an active collaboration.
//!
//! The editor is a two-state machine (closed / open) with no knowledge of
//! storage or transport. Opening seeds a draft from stored state, toggling
//! and note edits mutate only the draft, and saving yields a commit payload
//! for the store's single mutation entry point. Closing without saving
//! drops the draft.


use crate::ids::{CollabId, MethodId};
use crate::model::{MAX_STEP_NOTE_CHARS, step_note_chars};

/// Stored state a session seeds from. Criteria are reused only when their
/// length matches the step's current criteria count; a mismatch means the
/// stored vector is stale and the draft restarts all-false.
#[derive(Clone, Copy, Debug)]
pub struct StepSeed<'a> {
    pub criteria_count: usize,
    pub stored_notes: Option<&'a str>,
    pub stored_criteria: Option<&'a [bool]>,
}

/// Draft values committed to the store on save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepCommit {
    pub collab_id: CollabId,
    pub step_index: usize,
    pub notes: String,
    pub criteria: Vec<bool>,
}

#[derive(Clone, Debug)]
pub struct StepSession {
    collab_id: CollabId,
    method_id: MethodId,
    step_index: usize,
    notes: String,
    criteria: Vec<bool>,
}

impl StepSession {
    pub fn collab_id(&self) -> CollabId {
        self.collab_id
    }

    pub fn method_id(&self) -> MethodId {
        self.method_id
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn criteria(&self) -> &[bool] {
        &self.criteria
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorError {
    NoOpenSession,
    CriterionOutOfRange { index: usize, len: usize },
    NotesTooLong { chars: usize },
}

impl std::fmt::Display for EditorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoOpenSession => write!(f, "no step session is open"),
            Self::CriterionOutOfRange { index, len } => {
                write!(f, "criterion index out of range (index={index}, len={len})")
            }
            Self::NotesTooLong { chars } => write!(
                f,
                "notes exceed {MAX_STEP_NOTE_CHARS} characters (got {chars})"
            ),
        }
    }
}

impl std::error::Error for EditorError {}

/// At most one session is open at a time; opening replaces any prior draft.
#[derive(Clone, Debug, Default)]
pub struct StepEditor {
    session: Option<StepSession>,
}

impl StepEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&StepSession> {
        self.session.as_ref()
    }

    pub fn open(
        &mut self,
        collab_id: CollabId,
        method_id: MethodId,
        step_index: usize,
        seed: StepSeed<'_>,
    ) {
        let criteria = match seed.stored_criteria {
            Some(stored) if stored.len() == seed.criteria_count => stored.to_vec(),
            _ => vec![false; seed.criteria_count],
        };
        self.session = Some(StepSession {
            collab_id,
            method_id,
            step_index,
            notes: seed.stored_notes.unwrap_or_default().to_string(),
            criteria,
        });
    }

    /// Flips one criterion flag and returns its new value. The criteria
    /// vector never grows; an out-of-range index is rejected.
    pub fn toggle_criterion(&mut self, index: usize) -> Result<bool, EditorError> {
        let Some(session) = self.session.as_mut() else {
            return Err(EditorError::NoOpenSession);
        };
        let len = session.criteria.len();
        let Some(flag) = session.criteria.get_mut(index) else {
            return Err(EditorError::CriterionOutOfRange { index, len });
        };
        *flag = !*flag;
        Ok(*flag)
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) -> Result<(), EditorError> {
        let Some(session) = self.session.as_mut() else {
            return Err(EditorError::NoOpenSession);
        };
        let notes = notes.into();
        let chars = step_note_chars(&notes);
        if chars > MAX_STEP_NOTE_CHARS {
            return Err(EditorError::NotesTooLong { chars });
        }
        session.notes = notes;
        Ok(())
    }

    /// Commits the draft and closes. A save with no open session is a
    /// no-op, not an error.
    pub fn save(&mut self) -> Option<StepCommit> {
        let session = self.session.take()?;
        Some(StepCommit {
            collab_id: session.collab_id,
            step_index: session.step_index,
            notes: session.notes,
            criteria: session.criteria,
        })
    }

    /// Closes without committing; returns whether a draft was dropped.
    pub fn discard(&mut self) -> bool {
        self.session.take().is_some()
    }
}
