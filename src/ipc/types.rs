use serde::Deserialize;

use crate::model::Entry;
use crate::project::Filters;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// The whole mutable state of the sidecar. `base` and `overlay` are the
/// only shared mutable data; every handler mutates them and then
/// re-projects all views in the same turn.
#[derive(Default)]
pub struct AppState {
    pub base: Vec<Entry>,
    pub overlay: Vec<Entry>,
    /// Records rejected at load time, retained for diagnostics.
    pub rejected: Vec<Entry>,
    pub filters: Filters,
}
