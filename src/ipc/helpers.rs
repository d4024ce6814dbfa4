use serde_json::json;

use crate::ipc::types::AppState;
use crate::model::Entry;
use crate::project::project_all;

/// Every mutating handler funnels through this: one projection of all
/// views per state change, attached to the response for re-rendering.
pub fn views_json(state: &AppState) -> serde_json::Value {
    serde_json::to_value(project_all(&state.base, &state.overlay, &state.filters))
        .unwrap_or_else(|_| json!({}))
}

pub fn str_param(params: &serde_json::Value, key: &str) -> String {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

/// Best-effort mapping of one raw record. Missing or non-string fields
/// become empty strings and fall into the invalid bucket at load.
pub fn entry_from_value(v: &serde_json::Value) -> Entry {
    Entry {
        time: str_param(v, "time"),
        day: str_param(v, "day"),
        teacher: str_param(v, "teacher"),
        group: str_param(v, "group"),
        room: str_param(v, "room"),
        subject: str_param(v, "subject"),
    }
}
