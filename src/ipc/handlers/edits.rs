use crate::ipc::error::{err, ok};
use crate::ipc::helpers::views_json;
use crate::ipc::types::{AppState, Request};
use crate::merge::{apply_grid_edits, EditRow};
use serde_json::json;

const SAVE_ALL_MAX_ROWS: usize = 64;

/// Bulk-merge an editable-grid snapshot back into the base collection.
/// Rows arrive in slot order, each carrying the slot's time label and the
/// seven cell texts in day order; cells are processed row-major so later
/// cells can land on entries created earlier in the same pass.
fn handle_save_all(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(rows_arr) = req.params.get("rows").and_then(|v| v.as_array()) else {
        return err(&req.id, "bad_params", "missing rows[]", None);
    };

    if rows_arr.len() > SAVE_ALL_MAX_ROWS {
        return err(
            &req.id,
            "bad_params",
            "grid snapshot has too many rows",
            Some(json!({ "rows": rows_arr.len(), "maxRows": SAVE_ALL_MAX_ROWS })),
        );
    }

    let rows: Vec<EditRow> = rows_arr
        .iter()
        .map(|row| EditRow {
            time: row
                .get("time")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            cells: row
                .get("cells")
                .and_then(|v| v.as_array())
                .map(|cells| {
                    cells
                        .iter()
                        .map(|c| c.as_str().unwrap_or("").to_string())
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect();

    let merged = apply_grid_edits(&mut state.base, &rows);

    ok(
        &req.id,
        json!({
            "merged": merged,
            "views": views_json(state),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "edits.saveAll" => Some(handle_save_all(state, req)),
        _ => None,
    }
}
