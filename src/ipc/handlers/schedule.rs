use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{str_param, views_json};
use crate::ipc::types::{AppState, Request};
use crate::model::{normalize_time, Entry};
use crate::overlay::{self, MatchScope};
use serde_json::json;

/// Append one entry. All six fields are required; a miss is answered as
/// an informational error and leaves the state untouched.
fn handle_add(state: &mut AppState, req: &Request) -> serde_json::Value {
    let entry = Entry {
        time: str_param(&req.params, "time"),
        day: str_param(&req.params, "day"),
        teacher: str_param(&req.params, "teacher"),
        group: str_param(&req.params, "group"),
        room: str_param(&req.params, "room"),
        subject: str_param(&req.params, "subject"),
    };

    if !entry.is_valid() {
        return err(
            &req.id,
            "bad_params",
            "all six entry fields are required",
            None,
        );
    }

    state.base.push(entry);
    ok(&req.id, json!({ "views": views_json(state) }))
}

/// Tombstone the first still-visible entry under (time, day), narrowed by
/// group when one is supplied. A lookup miss is a no-op, not an error.
fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let time = str_param(&req.params, "time");
    let day = str_param(&req.params, "day");
    let group = str_param(&req.params, "group");

    let scope = if group.is_empty() {
        MatchScope::TimeDay
    } else {
        MatchScope::TimeDayGroup
    };
    let key = normalize_time(&time);

    let target = state
        .base
        .iter()
        .find(|e| {
            normalize_time(&e.time) == key
                && e.day == day
                && (group.is_empty() || e.group == group)
                && !overlay::is_suppressed(&state.overlay, e, scope)
        })
        .cloned();

    let deleted = match target {
        Some(entry) => {
            overlay::mark_deleted(&mut state.overlay, entry);
            true
        }
        None => false,
    };

    ok(
        &req.id,
        json!({
            "deleted": deleted,
            "views": views_json(state),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "schedule.add" => Some(handle_add(state, req)),
        "schedule.delete" => Some(handle_delete(state, req)),
        _ => None,
    }
}
