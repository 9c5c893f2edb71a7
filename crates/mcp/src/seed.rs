#![forbid(unsafe_code)]

//! Demo fixtures behind `--seed-demo`: the three sample collaborations the
//! mobile screens ship with. Replayed through the regular store operations
//! so every derived field (completed set, progress, events) is earned, not
//! hardcoded.

use pl_core::ids::MethodId;
use pl_core::model::CollabStatus;
use pl_storage::{
    CollabCreateRequest, SaveStepRequest, SetStatusRequest, SqliteStore, StoreError,
};

struct DemoCollab {
    method: i64,
    partner_name: &'static str,
    partner_photo: &'static str,
    status: CollabStatus,
    start_date: &'static str,
    due_date: &'static str,
    step_notes: &'static [(usize, &'static str)],
}

const DEMO_COLLABS: &[DemoCollab] = &[
    DemoCollab {
        method: 1,
        partner_name: "Sarah Chen",
        partner_photo:
            "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=400",
        status: CollabStatus::InProgress,
        start_date: "2024-01-15",
        due_date: "2024-01-17",
        step_notes: &[
            (0, "Shared React component library on GitHub"),
            (1, "Reviewed Sarah's authentication system - very clean code"),
            (2, "Provided detailed feedback on error handling patterns"),
        ],
    },
    DemoCollab {
        method: 3,
        partner_name: "Alex Rodriguez",
        partner_photo:
            "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=400",
        status: CollabStatus::Proposed,
        start_date: "2024-01-20",
        due_date: "2024-01-22",
        step_notes: &[],
    },
    DemoCollab {
        method: 2,
        partner_name: "Maya Patel",
        partner_photo:
            "https://images.pexels.com/photos/1130626/pexels-photo-1130626.jpeg?auto=compress&cs=tinysrgb&w=400",
        status: CollabStatus::Completed,
        start_date: "2024-01-10",
        due_date: "2024-01-13",
        step_notes: &[
            (0, "Built a task management feature for small teams"),
            (1, "Set up shared GitHub repo with proper CI/CD"),
            (2, "Maya handled frontend, I handled backend API"),
            (3, "Daily standups worked great for coordination"),
            (4, "Successfully delivered working prototype on time"),
        ],
    },
];

/// Idempotent: an already-populated store is left untouched.
pub(crate) fn seed_demo(store: &mut SqliteStore) -> Result<(), StoreError> {
    if !store.collab_list(None)?.is_empty() {
        return Ok(());
    }

    for demo in DEMO_COLLABS {
        let method_id = MethodId::try_new(demo.method)
            .map_err(|_| StoreError::InvalidInput("demo method id out of range"))?;
        let method = store.method_get(method_id)?;
        let (row, _) = store.collab_create(CollabCreateRequest {
            method_id,
            partner_name: demo.partner_name.to_string(),
            partner_photo: Some(demo.partner_photo.to_string()),
            start_date: Some(demo.start_date.to_string()),
            due_date: Some(demo.due_date.to_string()),
        })?;

        for (step_index, note) in demo.step_notes {
            let Some(step) = method.step(*step_index) else {
                return Err(StoreError::InvalidInput("demo step index out of range"));
            };
            store.save_step(SaveStepRequest {
                collab_id: row.id,
                expected_revision: None,
                step_index: *step_index,
                notes: (*note).to_string(),
                criteria: vec![true; step.success_criteria.len()],
            })?;
        }

        if demo.status != CollabStatus::Proposed {
            store.collab_set_status(SetStatusRequest {
                collab_id: row.id,
                expected_revision: None,
                status: demo.status,
                require_steps_completed: false,
            })?;
        }
    }

    Ok(())
}
