use pl_core::builder::MethodDraft;
use pl_core::ids::MethodId;
use pl_core::model::{Category, Difficulty};
use pl_storage::{CollabCreateRequest, SaveStepRequest, SqliteStore, StoreError};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_storage_dir(label: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be monotonic enough for tests")
        .as_nanos();
    path.push(format!(
        "pl-methods-{label}-{}-{nanos}",
        std::process::id()
    ));
    std::fs::create_dir_all(&path).expect("temp storage dir must be creatable");
    path
}

fn landing_page_draft() -> MethodDraft {
    let mut draft = MethodDraft::new();
    draft.title = "Landing Page Teardown".to_string();
    draft.description = "Critique each other's landing pages in one sitting.".to_string();
    draft.duration = "1-2 hours".to_string();
    draft.outcome = "Assess product taste and communication style.".to_string();
    draft.category = Category::Design;
    draft.difficulty = Difficulty::Easy;
    draft.set_step_title(0, "Swap Links").unwrap();
    draft
        .set_step_description(0, "Exchange landing page URLs and context")
        .unwrap();
    draft
        .set_step_criterion(0, 0, "Both pages shared and reachable")
        .unwrap();
    draft.add_step();
    draft.set_step_title(1, "Written Critique").unwrap();
    draft
        .set_step_description(1, "Each writes a one-page critique")
        .unwrap();
    draft
        .set_step_criterion(1, 0, "Critique covers copy, layout, and call to action")
        .unwrap();
    draft.add_step_criterion(1).unwrap();
    draft
        .set_step_criterion(1, 1, "At least three concrete improvements listed")
        .unwrap();
    draft
        .set_method_criterion(0, "Both critiques exchanged and discussed")
        .unwrap();
    draft
}

#[test]
fn unresolved_method_is_an_error_not_a_fallback() {
    let dir = temp_storage_dir("unknown");
    let mut store = SqliteStore::open(&dir).expect("fresh storage should open");

    let err = store
        .collab_create(CollabCreateRequest {
            method_id: MethodId::try_new(999).unwrap(),
            partner_name: "Sarah Chen".to_string(),
            partner_photo: None,
            start_date: None,
            due_date: None,
        })
        .expect_err("unknown method must fail closed");
    assert!(matches!(err, StoreError::UnknownMethod { method_id: 999 }));

    let err = store
        .method_get(MethodId::try_new(999).unwrap())
        .expect_err("unknown method must fail closed");
    assert!(matches!(err, StoreError::UnknownMethod { method_id: 999 }));
}

#[test]
fn custom_methods_join_the_catalog_above_the_floor() {
    let dir = temp_storage_dir("create");
    let mut store = SqliteStore::open(&dir).expect("fresh storage should open");

    let spec = landing_page_draft().finish().expect("draft should validate");
    let method = store
        .custom_method_create(spec)
        .expect("custom method should persist");
    assert_eq!(method.id.as_i64(), 1001);
    assert_eq!(method.step_count(), 2);

    let fetched = store.method_get(method.id).expect("resolves after insert");
    assert_eq!(fetched, method);

    let listed = store.method_list().expect("list");
    assert_eq!(listed.len(), 7);
    assert_eq!(listed.last().map(|m| m.id), Some(method.id));

    // Ids keep counting from the highest custom record.
    let second = store
        .custom_method_create(landing_page_draft().finish().unwrap())
        .expect("second custom method");
    assert_eq!(second.id.as_i64(), 1002);
}

#[test]
fn collabs_run_against_custom_methods_like_builtins() {
    let dir = temp_storage_dir("run");
    let mut store = SqliteStore::open(&dir).expect("fresh storage should open");

    let method = store
        .custom_method_create(landing_page_draft().finish().unwrap())
        .expect("custom method should persist");

    let (row, _) = store
        .collab_create(CollabCreateRequest {
            method_id: method.id,
            partner_name: "Jordan Lee".to_string(),
            partner_photo: None,
            start_date: None,
            due_date: None,
        })
        .expect("collab on custom method");
    assert_eq!(row.category, Category::Design);

    // Two steps: one complete is half way, rounded from 50.
    let result = store
        .save_step(SaveStepRequest {
            collab_id: row.id,
            expected_revision: None,
            step_index: 0,
            notes: "links swapped".to_string(),
            criteria: vec![true],
        })
        .expect("save against custom method");
    assert_eq!(result.progress, 50);

    let result = store
        .save_step(SaveStepRequest {
            collab_id: row.id,
            expected_revision: None,
            step_index: 1,
            notes: "critiques written".to_string(),
            criteria: vec![true, true],
        })
        .expect("save against custom method");
    assert_eq!(result.progress, 100);
    assert_eq!(result.completed_steps, vec![0, 1]);
}
