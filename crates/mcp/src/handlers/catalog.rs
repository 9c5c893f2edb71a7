#![forbid(unsafe_code)]

use super::{method_full_json, method_summary_json};
use crate::{McpServer, ai_error, ai_ok, args_object, method_id_arg, store_error_response};
use pl_core::builder::MethodDraft;
use pl_core::model::{Category, Difficulty};
use serde_json::{Value, json};

impl McpServer {
    pub(crate) fn tool_catalog_list(&mut self, _args: Value) -> Value {
        let methods = match self.store().method_list() {
            Ok(methods) => methods,
            Err(err) => return store_error_response(err),
        };
        ai_ok(
            "catalog_list",
            json!({
                "methods": methods.iter().map(method_summary_json).collect::<Vec<_>>(),
            }),
        )
    }

    pub(crate) fn tool_method_get(&mut self, args: Value) -> Value {
        let obj = match args_object(&args) {
            Ok(obj) => obj,
            Err(resp) => return resp,
        };
        let method_id = match method_id_arg(obj, "method") {
            Ok(id) => id,
            Err(resp) => return resp,
        };
        match self.store().method_get(method_id) {
            Ok(method) => ai_ok("method_get", json!({ "method": method_full_json(&method) })),
            Err(err) => store_error_response(err),
        }
    }

    /// Builder submission: the raw form is replayed through the draft
    /// builder so the catalog invariants hold before anything persists.
    pub(crate) fn tool_method_create(&mut self, args: Value) -> Value {
        let obj = match args_object(&args) {
            Ok(obj) => obj,
            Err(resp) => return resp,
        };

        let draft = match draft_from_args(obj) {
            Ok(draft) => draft,
            Err(resp) => return resp,
        };
        let spec = match draft.finish() {
            Ok(spec) => spec,
            Err(err) => return ai_error("INVALID_DRAFT", &err.to_string()),
        };

        match self.store_mut().custom_method_create(spec) {
            Ok(method) => ai_ok(
                "method_create",
                json!({ "method": method_full_json(&method) }),
            ),
            Err(err) => store_error_response(err),
        }
    }
}

fn draft_from_args(obj: crate::ArgsObject<'_>) -> Result<MethodDraft, Value> {
    let mut draft = MethodDraft::new();
    draft.title = crate::required_str(obj, "title")?.to_string();
    draft.description = crate::required_str(obj, "description")?.to_string();
    draft.duration = crate::required_str(obj, "duration")?.to_string();
    draft.outcome = crate::required_str(obj, "outcome")?.to_string();

    if let Some(label) = crate::optional_str(obj, "category")? {
        let Some(category) = Category::parse(label) else {
            return Err(ai_error("INVALID_INPUT", "unknown category label"));
        };
        draft.category = category;
    }
    if let Some(label) = crate::optional_str(obj, "difficulty")? {
        let Some(difficulty) = Difficulty::parse(label) else {
            return Err(ai_error("INVALID_INPUT", "unknown difficulty label"));
        };
        draft.difficulty = difficulty;
    }

    let Some(steps) = obj.get("steps").and_then(Value::as_array) else {
        return Err(ai_error("INVALID_INPUT", "steps must be an array"));
    };
    for (index, entry) in steps.iter().enumerate() {
        if index > 0 {
            draft.add_step();
        }
        let Some(step) = entry.as_object() else {
            return Err(ai_error("INVALID_INPUT", "each step must be an object"));
        };
        let title = crate::required_str(step, "title")?;
        let description = crate::required_str(step, "description")?;
        let criteria = crate::string_list(step, "success_criteria")?;
        if draft.set_step_title(index, title).is_err()
            || draft.set_step_description(index, description).is_err()
        {
            return Err(ai_error("INVALID_INPUT", "step index out of range"));
        }
        for (criterion, text) in criteria.iter().enumerate() {
            if criterion > 0 && draft.add_step_criterion(index).is_err() {
                return Err(ai_error("INVALID_INPUT", "step index out of range"));
            }
            if draft.set_step_criterion(index, criterion, text).is_err() {
                return Err(ai_error("INVALID_INPUT", "criterion index out of range"));
            }
        }
    }

    let criteria = crate::string_list(obj, "success_criteria")?;
    for (index, text) in criteria.iter().enumerate() {
        if index > 0 {
            draft.add_method_criterion();
        }
        if draft.set_method_criterion(index, text).is_err() {
            return Err(ai_error("INVALID_INPUT", "criterion index out of range"));
        }
    }

    Ok(draft)
}
