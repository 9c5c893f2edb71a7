#![forbid(unsafe_code)]

mod support;
use support::*;

use serde_json::json;

#[test]
fn save_without_a_session_is_a_noop() {
    let mut server = Server::start_initialized("noop_save");

    let payload = server.call_tool(50, "step_save", json!({}));
    assert_success(&payload);
    assert_eq!(
        payload
            .get("result")
            .and_then(|v| v.get("noop"))
            .and_then(|v| v.as_bool()),
        Some(true)
    );
}

#[test]
fn editor_operations_require_an_open_session() {
    let mut server = Server::start_initialized("no_session");

    let payload = server.call_tool(51, "step_toggle", json!({ "criterion": 0 }));
    assert_eq!(error_code(&payload), "NO_OPEN_SESSION");

    let payload = server.call_tool(52, "step_note", json!({ "note": "x" }));
    assert_eq!(error_code(&payload), "NO_OPEN_SESSION");

    let payload = server.call_tool(53, "step_discard", json!({}));
    assert_success(&payload);
    assert_eq!(
        payload
            .get("result")
            .and_then(|v| v.get("discarded"))
            .and_then(|v| v.as_bool()),
        Some(false)
    );
}

#[test]
fn toggle_rejects_out_of_range_without_growing_the_draft() {
    let mut server = Server::start_initialized("toggle_range");

    let payload = server.call_tool(
        60,
        "collab_start",
        json!({ "method": 1, "partner_name": "Sarah Chen" }),
    );
    assert_success(&payload);
    let collab_id = payload
        .get("result")
        .and_then(|v| v.get("collab"))
        .and_then(|v| v.get("id"))
        .and_then(|v| v.as_i64())
        .expect("collab id");

    let payload = server.call_tool(61, "step_open", json!({ "collab": collab_id, "step": 0 }));
    assert_success(&payload);

    let payload = server.call_tool(62, "step_toggle", json!({ "criterion": 3 }));
    assert_eq!(error_code(&payload), "CRITERION_OUT_OF_RANGE");

    let payload = server.call_tool(63, "step_toggle", json!({ "criterion": 0 }));
    assert_success(&payload);
    assert_eq!(
        payload
            .get("result")
            .and_then(|v| v.get("session"))
            .and_then(|v| v.get("criteria"))
            .and_then(|v| v.as_array())
            .map(|v| v.len()),
        Some(3)
    );
}

#[test]
fn oversized_notes_are_rejected_at_the_editor() {
    let mut server = Server::start_initialized("note_limit");

    let payload = server.call_tool(
        70,
        "collab_start",
        json!({ "method": 1, "partner_name": "Sarah Chen" }),
    );
    assert_success(&payload);
    let collab_id = payload
        .get("result")
        .and_then(|v| v.get("collab"))
        .and_then(|v| v.get("id"))
        .and_then(|v| v.as_i64())
        .expect("collab id");

    let payload = server.call_tool(71, "step_open", json!({ "collab": collab_id, "step": 0 }));
    assert_success(&payload);

    let payload = server.call_tool(72, "step_note", json!({ "note": "x".repeat(501) }));
    assert_eq!(error_code(&payload), "NOTE_TOO_LONG");

    let payload = server.call_tool(73, "step_note", json!({ "note": "x".repeat(500) }));
    assert_success(&payload);
}

#[test]
fn opening_a_bad_step_index_never_opens_a_session() {
    let mut server = Server::start_initialized("open_range");

    let payload = server.call_tool(
        80,
        "collab_start",
        json!({ "method": 1, "partner_name": "Sarah Chen" }),
    );
    assert_success(&payload);
    let collab_id = payload
        .get("result")
        .and_then(|v| v.get("collab"))
        .and_then(|v| v.get("id"))
        .and_then(|v| v.as_i64())
        .expect("collab id");

    let payload = server.call_tool(81, "step_open", json!({ "collab": collab_id, "step": 9 }));
    assert_eq!(error_code(&payload), "STEP_OUT_OF_RANGE");

    let payload = server.call_tool(82, "step_save", json!({}));
    assert_success(&payload);
    assert_eq!(
        payload
            .get("result")
            .and_then(|v| v.get("noop"))
            .and_then(|v| v.as_bool()),
        Some(true)
    );
}

#[test]
fn discard_leaves_the_store_untouched() {
    let mut server = Server::start_initialized("discard");

    let payload = server.call_tool(
        90,
        "collab_start",
        json!({ "method": 1, "partner_name": "Sarah Chen" }),
    );
    assert_success(&payload);
    let collab_id = payload
        .get("result")
        .and_then(|v| v.get("collab"))
        .and_then(|v| v.get("id"))
        .and_then(|v| v.as_i64())
        .expect("collab id");

    let payload = server.call_tool(91, "step_open", json!({ "collab": collab_id, "step": 0 }));
    assert_success(&payload);
    let payload = server.call_tool(92, "step_toggle", json!({ "criterion": 0 }));
    assert_success(&payload);
    let payload = server.call_tool(93, "step_discard", json!({}));
    assert_success(&payload);

    let payload = server.call_tool(94, "collab_open", json!({ "collab": collab_id }));
    assert_success(&payload);
    let steps = payload
        .get("result")
        .and_then(|v| v.get("steps"))
        .and_then(|v| v.as_array())
        .expect("result.steps");
    assert!(steps.is_empty(), "discard must not touch the store");
    assert_eq!(
        payload
            .get("result")
            .and_then(|v| v.get("collab"))
            .and_then(|v| v.get("progress"))
            .and_then(|v| v.as_u64()),
        Some(0)
    );
}
