use crate::ipc::error::ok;
use crate::ipc::helpers::{entry_from_value, views_json};
use crate::ipc::types::{AppState, Request};
use crate::model::split_valid;
use crate::overlay;
use crate::project::Filters;
use serde_json::json;

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "baseCount": state.base.len(),
            "tombstoneCount": state.overlay.len(),
            "rejectedCount": state.rejected.len(),
        }),
    )
}

/// Replace the whole dataset with a collaborator-supplied collection.
/// A missing or malformed `entries` array loads as an empty set; the
/// sidecar must keep answering with empty views, not fail.
fn handle_load(state: &mut AppState, req: &Request) -> serde_json::Value {
    let raw: Vec<serde_json::Value> = req
        .params
        .get("entries")
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default();

    let entries = raw.iter().map(entry_from_value).collect();
    let (valid, rejected) = split_valid(entries);

    state.base = valid;
    state.overlay.clear();
    state.rejected = rejected;
    state.filters = Filters::default();

    ok(
        &req.id,
        json!({
            "loaded": state.base.len(),
            "rejected": state.rejected.len(),
            "rejectedEntries": &state.rejected,
            "views": views_json(state),
        }),
    )
}

/// Resolve the overlay into a plain entry list for the collaborator to
/// persist. The surviving set becomes the new base and the tombstone
/// ledger is discarded; the persisted format has no overlay concept.
fn handle_save(state: &mut AppState, req: &Request) -> serde_json::Value {
    let survivors = overlay::resolve(&state.base, &state.overlay);
    state.base = survivors;
    state.overlay.clear();

    ok(
        &req.id,
        json!({
            "entries": &state.base,
            "views": views_json(state),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "schedule.load" => Some(handle_load(state, req)),
        "schedule.save" => Some(handle_save(state, req)),
        _ => None,
    }
}
