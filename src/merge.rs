use crate::catalog::DAYS;
use crate::model::{normalize_time, Entry};

/// Split free-text cell content into its four positional fields. Missing
/// trailing lines default to empty; anything past the fourth line is
/// ignored. This never fails.
pub fn parse_cell(raw: &str) -> (String, String, String, String) {
    let mut lines = raw.split('\n');
    let mut next = || lines.next().unwrap_or("").to_string();
    (next(), next(), next(), next())
}

/// Upsert one cell's text into the base collection. The lookup key is
/// (canonical time, day); the first match in input order wins, and its
/// time/day stay as they are. The overlay is deliberately not consulted:
/// a tombstoned entry under the same key is still the one edits land on.
pub fn merge_cell_edit(base: &mut Vec<Entry>, time_label: &str, day: &str, raw: &str) {
    let (teacher, group, room, subject) = parse_cell(raw);
    let key = normalize_time(time_label);
    match base
        .iter_mut()
        .find(|e| normalize_time(&e.time) == key && e.day == day)
    {
        Some(existing) => {
            existing.teacher = teacher;
            existing.group = group;
            existing.room = room;
            existing.subject = subject;
        }
        None => base.push(Entry {
            time: key,
            day: day.to_string(),
            teacher,
            group,
            room,
            subject,
        }),
    }
}

/// One row of an editable-grid snapshot as the UI hands it back: the
/// slot's time label plus up to seven cell texts in day order.
#[derive(Debug, Clone)]
pub struct EditRow {
    pub time: String,
    pub cells: Vec<String>,
}

/// Bulk-apply a whole grid snapshot, rows outer and days inner, so a cell
/// can overwrite an entry created by an earlier cell in the same pass.
/// Blank cells are skipped; only populated ones merge. Returns how many
/// cells were merged.
pub fn apply_grid_edits(base: &mut Vec<Entry>, rows: &[EditRow]) -> usize {
    let mut merged = 0;
    for row in rows {
        for (day, raw) in DAYS.iter().zip(row.cells.iter()) {
            if raw.trim().is_empty() {
                continue;
            }
            merge_cell_edit(base, &row.time, day, raw);
            merged += 1;
        }
    }
    merged
}
