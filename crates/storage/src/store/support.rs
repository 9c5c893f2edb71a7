#![forbid(unsafe_code)]

use super::StoreError;
use pl_core::catalog::MethodStep;
use pl_core::ids::{CollabId, MethodId};
use pl_core::model::{Category, CollabStatus, Difficulty};
use serde_json::{Value, json};

pub(in crate::store) fn encode_criteria(criteria: &[bool]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(criteria)?)
}

pub(in crate::store) fn decode_criteria(raw: &str) -> Result<Vec<bool>, StoreError> {
    let value: Value = serde_json::from_str(raw)?;
    let Some(entries) = value.as_array() else {
        return Err(StoreError::InvalidInput("criteria column must be an array"));
    };
    let mut criteria = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(flag) = entry.as_bool() else {
            return Err(StoreError::InvalidInput("criteria entries must be booleans"));
        };
        criteria.push(flag);
    }
    Ok(criteria)
}

pub(in crate::store) fn encode_string_list(items: &[String]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(items)?)
}

pub(in crate::store) fn decode_string_list(raw: &str) -> Result<Vec<String>, StoreError> {
    let value: Value = serde_json::from_str(raw)?;
    string_list_from_value(&value)
}

fn string_list_from_value(value: &Value) -> Result<Vec<String>, StoreError> {
    let Some(entries) = value.as_array() else {
        return Err(StoreError::InvalidInput("expected a JSON array of strings"));
    };
    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(text) = entry.as_str() else {
            return Err(StoreError::InvalidInput("expected a JSON array of strings"));
        };
        items.push(text.to_string());
    }
    Ok(items)
}

pub(in crate::store) fn encode_steps(steps: &[MethodStep]) -> Result<String, StoreError> {
    let entries = steps
        .iter()
        .map(|step| {
            json!({
                "title": step.title,
                "description": step.description,
                "success_criteria": step.success_criteria,
            })
        })
        .collect::<Vec<_>>();
    Ok(serde_json::to_string(&Value::Array(entries))?)
}

pub(in crate::store) fn decode_steps(raw: &str) -> Result<Vec<MethodStep>, StoreError> {
    let value: Value = serde_json::from_str(raw)?;
    let Some(entries) = value.as_array() else {
        return Err(StoreError::InvalidInput("steps column must be an array"));
    };
    let mut steps = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(title) = entry.get("title").and_then(Value::as_str) else {
            return Err(StoreError::InvalidInput("step title missing"));
        };
        let Some(description) = entry.get("description").and_then(Value::as_str) else {
            return Err(StoreError::InvalidInput("step description missing"));
        };
        let Some(criteria) = entry.get("success_criteria") else {
            return Err(StoreError::InvalidInput("step criteria missing"));
        };
        steps.push(MethodStep {
            title: title.to_string(),
            description: description.to_string(),
            success_criteria: string_list_from_value(criteria)?,
        });
    }
    Ok(steps)
}

pub(in crate::store) fn collab_id_from_db(raw: i64) -> Result<CollabId, StoreError> {
    CollabId::try_new(raw).map_err(|_| StoreError::InvalidInput("collab id column out of range"))
}

pub(in crate::store) fn method_id_from_db(raw: i64) -> Result<MethodId, StoreError> {
    MethodId::try_new(raw).map_err(|_| StoreError::InvalidInput("method id column out of range"))
}

pub(in crate::store) fn status_from_db(raw: &str) -> Result<CollabStatus, StoreError> {
    CollabStatus::parse(raw).ok_or(StoreError::InvalidInput("unknown status label"))
}

pub(in crate::store) fn category_from_db(raw: &str) -> Result<Category, StoreError> {
    Category::parse(raw).ok_or(StoreError::InvalidInput("unknown category label"))
}

pub(in crate::store) fn difficulty_from_db(raw: &str) -> Result<Difficulty, StoreError> {
    Difficulty::parse(raw).ok_or(StoreError::InvalidInput("unknown difficulty label"))
}

pub(in crate::store) fn progress_from_db(raw: i64) -> u8 {
    raw.clamp(0, 100) as u8
}

pub(in crate::store) fn step_index_from_db(raw: i64) -> Result<usize, StoreError> {
    usize::try_from(raw).map_err(|_| StoreError::InvalidInput("step index column out of range"))
}
