use pl_core::ids::{CollabId, MethodId};
use pl_core::model::CollabStatus;
use pl_storage::{
    CollabCreateRequest, SaveStepRequest, SetStatusRequest, SqliteStore, StoreError,
};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_storage_dir(label: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be monotonic enough for tests")
        .as_nanos();
    path.push(format!(
        "pl-storage-{label}-{}-{nanos}",
        std::process::id()
    ));
    std::fs::create_dir_all(&path).expect("temp storage dir must be creatable");
    path
}

fn start_collab(store: &mut SqliteStore, method: i64, partner: &str) -> CollabId {
    let (row, event) = store
        .collab_create(CollabCreateRequest {
            method_id: MethodId::try_new(method).unwrap(),
            partner_name: partner.to_string(),
            partner_photo: None,
            start_date: Some("2024-01-15".to_string()),
            due_date: Some("2024-01-17".to_string()),
        })
        .expect("collab should be created");
    assert_eq!(row.status, CollabStatus::Proposed);
    assert_eq!(row.progress, 0);
    assert_eq!(event.event_type, "collab_proposed");
    row.id
}

fn save(
    store: &mut SqliteStore,
    collab: CollabId,
    step_index: usize,
    notes: &str,
    criteria: &[bool],
) -> pl_storage::SaveStepResult {
    store
        .save_step(SaveStepRequest {
            collab_id: collab,
            expected_revision: None,
            step_index,
            notes: notes.to_string(),
            criteria: criteria.to_vec(),
        })
        .expect("save_step should succeed")
}

#[test]
fn completing_all_criteria_marks_the_step_and_moves_progress() {
    let dir = temp_storage_dir("save-complete");
    let mut store = SqliteStore::open(&dir).expect("fresh storage should open");
    let collab = start_collab(&mut store, 1, "Sarah Chen");

    let result = save(
        &mut store,
        collab,
        0,
        "Shared React component library on GitHub",
        &[true, true, true],
    );
    assert!(result.step_completed);
    assert_eq!(result.completed_steps, vec![0]);
    assert_eq!(result.progress, 20);
    assert_eq!(result.event.event_type, "step_saved");

    let detail = store.collab_get(collab).expect("detail");
    assert_eq!(detail.collab.progress, 20);
    assert_eq!(detail.completed_steps, vec![0]);
    assert_eq!(
        detail.steps[0].note,
        "Shared React component library on GitHub"
    );
}

#[test]
fn unchecking_a_criterion_removes_the_step_again() {
    let dir = temp_storage_dir("save-uncheck");
    let mut store = SqliteStore::open(&dir).expect("fresh storage should open");
    let collab = start_collab(&mut store, 1, "Sarah Chen");

    save(&mut store, collab, 0, "done", &[true, true, true]);
    let result = save(&mut store, collab, 0, "one got reopened", &[true, false, true]);

    assert!(!result.step_completed);
    assert_eq!(result.completed_steps, Vec::<usize>::new());
    assert_eq!(result.progress, 0);

    let detail = store.collab_get(collab).expect("detail");
    assert_eq!(detail.completed_steps, Vec::<usize>::new());
    assert_eq!(detail.steps[0].criteria, vec![true, false, true]);
    assert!(!detail.steps[0].completed);
}

#[test]
fn sequential_completion_accumulates_progress() {
    let dir = temp_storage_dir("save-sequential");
    let mut store = SqliteStore::open(&dir).expect("fresh storage should open");
    let collab = start_collab(&mut store, 2, "Maya Patel");

    for step_index in 0..4 {
        let result = save(&mut store, collab, step_index, "", &[true, true, true]);
        let expected = ((step_index + 1) * 20) as u8;
        assert_eq!(result.progress, expected);
    }

    let detail = store.collab_get(collab).expect("detail");
    assert_eq!(detail.completed_steps, vec![0, 1, 2, 3]);
    assert_eq!(detail.collab.progress, 80);
}

#[test]
fn save_step_is_idempotent() {
    let dir = temp_storage_dir("save-idempotent");
    let mut store = SqliteStore::open(&dir).expect("fresh storage should open");
    let collab = start_collab(&mut store, 1, "Sarah Chen");

    let first = save(&mut store, collab, 1, "clean auth code", &[true, true, true]);
    let after_first = store.collab_get(collab).expect("detail");
    let second = save(&mut store, collab, 1, "clean auth code", &[true, true, true]);
    let after_second = store.collab_get(collab).expect("detail");

    assert_eq!(first.completed_steps, second.completed_steps);
    assert_eq!(first.progress, second.progress);
    assert_eq!(after_first.collab.progress, after_second.collab.progress);
    assert_eq!(after_first.completed_steps, after_second.completed_steps);
    assert_eq!(after_first.steps[0].note, after_second.steps[0].note);
    assert_eq!(after_first.steps[0].criteria, after_second.steps[0].criteria);
}

#[test]
fn completion_equivalence_holds_after_every_save() {
    let dir = temp_storage_dir("save-equivalence");
    let mut store = SqliteStore::open(&dir).expect("fresh storage should open");
    let collab = start_collab(&mut store, 3, "Alex Rodriguez");

    let patterns: &[&[bool]] = &[
        &[true, true, true],
        &[false, false, false],
        &[true, false, true],
        &[true, true, true],
    ];
    for (step_index, criteria) in patterns.iter().enumerate() {
        save(&mut store, collab, step_index, "", criteria);
        let detail = store.collab_get(collab).expect("detail");
        for step in &detail.steps {
            assert_eq!(
                step.completed,
                step.criteria.iter().all(|flag| *flag),
                "completed flag must match all-criteria-true for step {}",
                step.step_index
            );
            assert_eq!(
                detail.completed_steps.contains(&step.step_index),
                step.completed
            );
        }
        assert!(detail.collab.progress <= 100);
    }
}

#[test]
fn save_step_rejects_bad_input() {
    let dir = temp_storage_dir("save-rejects");
    let mut store = SqliteStore::open(&dir).expect("fresh storage should open");
    let collab = start_collab(&mut store, 1, "Sarah Chen");

    let err = store
        .save_step(SaveStepRequest {
            collab_id: collab,
            expected_revision: None,
            step_index: 5,
            notes: String::new(),
            criteria: vec![true, true, true],
        })
        .expect_err("out-of-range step must be rejected");
    assert!(matches!(
        err,
        StoreError::StepOutOfRange {
            step_index: 5,
            step_count: 5
        }
    ));

    let err = store
        .save_step(SaveStepRequest {
            collab_id: collab,
            expected_revision: None,
            step_index: 0,
            notes: String::new(),
            criteria: vec![true, true],
        })
        .expect_err("length mismatch must be rejected");
    assert!(matches!(
        err,
        StoreError::CriteriaLengthMismatch {
            expected: 3,
            actual: 2
        }
    ));

    let err = store
        .save_step(SaveStepRequest {
            collab_id: collab,
            expected_revision: None,
            step_index: 0,
            notes: "x".repeat(501),
            criteria: vec![true, true, true],
        })
        .expect_err("oversized note must be rejected");
    assert!(matches!(err, StoreError::NoteTooLong { chars: 501 }));

    let err = store
        .save_step(SaveStepRequest {
            collab_id: collab,
            expected_revision: Some(99),
            step_index: 0,
            notes: String::new(),
            criteria: vec![true, true, true],
        })
        .expect_err("stale revision must be rejected");
    assert!(matches!(err, StoreError::RevisionMismatch { .. }));

    let err = store
        .save_step(SaveStepRequest {
            collab_id: CollabId::try_new(404).unwrap(),
            expected_revision: None,
            step_index: 0,
            notes: String::new(),
            criteria: vec![true, true, true],
        })
        .expect_err("unknown collab must be rejected");
    assert!(matches!(err, StoreError::UnknownCollab { collab_id: 404 }));
}

#[test]
fn status_transitions_are_explicit_and_guardable() {
    let dir = temp_storage_dir("status");
    let mut store = SqliteStore::open(&dir).expect("fresh storage should open");
    let collab = start_collab(&mut store, 1, "Sarah Chen");

    // Finishing every step does not move the status by itself.
    for step_index in 0..5 {
        save(&mut store, collab, step_index, "", &[true, true, true]);
    }
    let detail = store.collab_get(collab).expect("detail");
    assert_eq!(detail.collab.progress, 100);
    assert_eq!(detail.collab.status, CollabStatus::Proposed);

    let (_, event) = store
        .collab_set_status(SetStatusRequest {
            collab_id: collab,
            expected_revision: None,
            status: CollabStatus::Completed,
            require_steps_completed: true,
        })
        .expect("guarded completion should pass with all steps done");
    assert_eq!(event.event_type, "status_set");
    let detail = store.collab_get(collab).expect("detail");
    assert_eq!(detail.collab.status, CollabStatus::Completed);
}

#[test]
fn guarded_completion_refuses_open_steps() {
    let dir = temp_storage_dir("status-guard");
    let mut store = SqliteStore::open(&dir).expect("fresh storage should open");
    let collab = start_collab(&mut store, 1, "Sarah Chen");

    save(&mut store, collab, 0, "", &[true, true, true]);
    let err = store
        .collab_set_status(SetStatusRequest {
            collab_id: collab,
            expected_revision: None,
            status: CollabStatus::Completed,
            require_steps_completed: true,
        })
        .expect_err("open steps must block a guarded completion");
    assert!(matches!(err, StoreError::StepsNotCompleted { open_steps: 4 }));

    // Unguarded transitions stay available.
    store
        .collab_set_status(SetStatusRequest {
            collab_id: collab,
            expected_revision: None,
            status: CollabStatus::InProgress,
            require_steps_completed: false,
        })
        .expect("unguarded transition should pass");
    let detail = store.collab_get(collab).expect("detail");
    assert_eq!(detail.collab.status, CollabStatus::InProgress);
}

#[test]
fn every_mutation_lands_in_the_event_log() {
    let dir = temp_storage_dir("events");
    let mut store = SqliteStore::open(&dir).expect("fresh storage should open");
    let collab = start_collab(&mut store, 1, "Sarah Chen");

    save(&mut store, collab, 0, "", &[true, true, true]);
    store
        .collab_set_status(SetStatusRequest {
            collab_id: collab,
            expected_revision: None,
            status: CollabStatus::InProgress,
            require_steps_completed: false,
        })
        .expect("status transition");

    let events = store.collab_events(collab, 10).expect("events");
    let types = events
        .iter()
        .map(|event| event.event_type.as_str())
        .collect::<Vec<_>>();
    assert_eq!(types, vec!["status_set", "step_saved", "collab_proposed"]);

    let err = store
        .collab_events(CollabId::try_new(404).unwrap(), 10)
        .expect_err("unknown collab must be rejected");
    assert!(matches!(err, StoreError::UnknownCollab { collab_id: 404 }));
}

#[test]
fn collab_list_filters_by_status() {
    let dir = temp_storage_dir("list");
    let mut store = SqliteStore::open(&dir).expect("fresh storage should open");
    let first = start_collab(&mut store, 1, "Sarah Chen");
    let second = start_collab(&mut store, 2, "Maya Patel");

    store
        .collab_set_status(SetStatusRequest {
            collab_id: second,
            expected_revision: None,
            status: CollabStatus::InProgress,
            require_steps_completed: false,
        })
        .expect("status transition");

    let all = store.collab_list(None).expect("list");
    assert_eq!(all.len(), 2);

    let proposed = store
        .collab_list(Some(CollabStatus::Proposed))
        .expect("list");
    assert_eq!(proposed.len(), 1);
    assert_eq!(proposed[0].id, first);

    let in_progress = store
        .collab_list(Some(CollabStatus::InProgress))
        .expect("list");
    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress[0].id, second);
}
