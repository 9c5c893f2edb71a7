#![forbid(unsafe_code)]

use crate::ai_error;
use pl_core::ids::{CollabId, MethodId};
use serde_json::{Map, Value};

pub(crate) type ArgsObject<'a> = &'a Map<String, Value>;

pub(crate) fn args_object(args: &Value) -> Result<ArgsObject<'_>, Value> {
    args.as_object()
        .ok_or_else(|| ai_error("INVALID_INPUT", "arguments must be an object"))
}

pub(crate) fn required_str<'a>(obj: ArgsObject<'a>, key: &str) -> Result<&'a str, Value> {
    match obj.get(key) {
        Some(Value::String(text)) => Ok(text.as_str()),
        Some(_) => Err(ai_error(
            "INVALID_INPUT",
            &format!("{key} must be a string"),
        )),
        None => Err(ai_error("INVALID_INPUT", &format!("{key} is required"))),
    }
}

pub(crate) fn optional_str<'a>(obj: ArgsObject<'a>, key: &str) -> Result<Option<&'a str>, Value> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.as_str())),
        Some(_) => Err(ai_error(
            "INVALID_INPUT",
            &format!("{key} must be a string"),
        )),
    }
}

pub(crate) fn required_i64(obj: ArgsObject<'_>, key: &str) -> Result<i64, Value> {
    match obj.get(key) {
        Some(value) => value.as_i64().ok_or_else(|| {
            ai_error("INVALID_INPUT", &format!("{key} must be an integer"))
        }),
        None => Err(ai_error("INVALID_INPUT", &format!("{key} is required"))),
    }
}

pub(crate) fn optional_i64(obj: ArgsObject<'_>, key: &str) -> Result<Option<i64>, Value> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| ai_error("INVALID_INPUT", &format!("{key} must be an integer"))),
    }
}

pub(crate) fn required_usize(obj: ArgsObject<'_>, key: &str) -> Result<usize, Value> {
    let raw = required_i64(obj, key)?;
    usize::try_from(raw)
        .map_err(|_| ai_error("INVALID_INPUT", &format!("{key} must be non-negative")))
}

pub(crate) fn optional_usize(obj: ArgsObject<'_>, key: &str) -> Result<Option<usize>, Value> {
    match optional_i64(obj, key)? {
        None => Ok(None),
        Some(raw) => usize::try_from(raw)
            .map(Some)
            .map_err(|_| ai_error("INVALID_INPUT", &format!("{key} must be non-negative"))),
    }
}

pub(crate) fn optional_bool(obj: ArgsObject<'_>, key: &str) -> Result<Option<bool>, Value> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(*flag)),
        Some(_) => Err(ai_error(
            "INVALID_INPUT",
            &format!("{key} must be a boolean"),
        )),
    }
}

pub(crate) fn string_list(obj: ArgsObject<'_>, key: &str) -> Result<Vec<String>, Value> {
    let Some(value) = obj.get(key) else {
        return Err(ai_error("INVALID_INPUT", &format!("{key} is required")));
    };
    let Some(entries) = value.as_array() else {
        return Err(ai_error(
            "INVALID_INPUT",
            &format!("{key} must be an array of strings"),
        ));
    };
    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(text) = entry.as_str() else {
            return Err(ai_error(
                "INVALID_INPUT",
                &format!("{key} must be an array of strings"),
            ));
        };
        items.push(text.to_string());
    }
    Ok(items)
}

pub(crate) fn method_id_arg(obj: ArgsObject<'_>, key: &str) -> Result<MethodId, Value> {
    let raw = required_i64(obj, key)?;
    MethodId::try_new(raw)
        .map_err(|_| ai_error("INVALID_INPUT", &format!("{key} must be a positive id")))
}

pub(crate) fn collab_id_arg(obj: ArgsObject<'_>, key: &str) -> Result<CollabId, Value> {
    let raw = required_i64(obj, key)?;
    CollabId::try_new(raw)
        .map_err(|_| ai_error("INVALID_INPUT", &format!("{key} must be a positive id")))
}
