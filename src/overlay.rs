use crate::model::{normalize_time, Entry};

/// How wide a tombstone key reaches. Grid and teacher views suppress on
/// (time, day); the group view additionally requires the group to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchScope {
    TimeDay,
    TimeDayGroup,
}

/// Append a tombstone for `entry`. The base collection is never touched;
/// removal stays logical until a save resolves the overlay.
pub fn mark_deleted(overlay: &mut Vec<Entry>, entry: Entry) {
    overlay.push(entry);
}

fn key_matches(tombstone: &Entry, entry: &Entry, scope: MatchScope) -> bool {
    if normalize_time(&tombstone.time) != normalize_time(&entry.time) {
        return false;
    }
    if tombstone.day != entry.day {
        return false;
    }
    match scope {
        MatchScope::TimeDay => true,
        MatchScope::TimeDayGroup => tombstone.group == entry.group,
    }
}

/// Linear-scan equality against the tombstone ledger. Exact canonical-time
/// and exact day-string comparison only; no interval logic.
pub fn is_suppressed(overlay: &[Entry], entry: &Entry, scope: MatchScope) -> bool {
    overlay.iter().any(|t| key_matches(t, entry, scope))
}

/// The surviving set under (time, day) suppression. Save replaces the base
/// collection with this and discards the overlay, so the persisted format
/// never carries tombstones.
pub fn resolve(base: &[Entry], overlay: &[Entry]) -> Vec<Entry> {
    base.iter()
        .filter(|e| !is_suppressed(overlay, e, MatchScope::TimeDay))
        .cloned()
        .collect()
}
