use crate::model::{normalize_time, Entry};
use crate::overlay::{is_suppressed, MatchScope};

/// Every base entry not suppressed by the overlay, in base order. This is
/// the shared read path: every view starts from this set (or from
/// `cell_entry` for grid cells, which applies the same rule per cell).
pub fn visible<'a>(base: &'a [Entry], overlay: &[Entry], scope: MatchScope) -> Vec<&'a Entry> {
    base.iter()
        .filter(|e| !is_suppressed(overlay, e, scope))
        .collect()
}

/// The single occupant of a grid cell: first entry in input order whose
/// canonical time equals the slot label, whose day matches exactly, and
/// that passes the optional exact-room narrowing. Two entries colliding on
/// the same (time, day) therefore resolve to the first one, always.
pub fn cell_entry<'a>(
    base: &'a [Entry],
    overlay: &[Entry],
    time_label: &str,
    day: &str,
    room: Option<&str>,
) -> Option<&'a Entry> {
    base.iter().find(|e| {
        normalize_time(&e.time) == time_label
            && e.day == day
            && room.map(|r| e.room == r).unwrap_or(true)
            && !is_suppressed(overlay, e, MatchScope::TimeDay)
    })
}
