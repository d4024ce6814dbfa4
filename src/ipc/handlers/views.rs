use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{str_param, views_json};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

/// Point one of the five selectors at a new value. An absent value means
/// the empty string, which reads as "show all" where a view supports it.
fn handle_set_filter(state: &mut AppState, req: &Request) -> serde_json::Value {
    let filter = str_param(&req.params, "filter");
    let value = str_param(&req.params, "value");

    match filter.as_str() {
        "room" => state.filters.room = value,
        "editRoom" => state.filters.edit_room = value,
        "teacherSearch" => state.filters.teacher_search = value,
        "editTeacher" => state.filters.edit_teacher = value,
        "group" => state.filters.group = value,
        other => {
            return err(
                &req.id,
                "bad_params",
                "unknown filter",
                Some(json!({ "filter": other })),
            )
        }
    }

    ok(&req.id, json!({ "views": views_json(state) }))
}

// Read-only re-projection, e.g. when the UI switches tabs.
fn handle_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "views": views_json(state) }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "filters.set" => Some(handle_set_filter(state, req)),
        "views.get" => Some(handle_get(state, req)),
        _ => None,
    }
}
