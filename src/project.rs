use serde::Serialize;

use crate::catalog::{slot_label, DAYS, TIME_SLOTS};
use crate::model::Entry;
use crate::overlay::MatchScope;
use crate::reconcile::{cell_entry, visible};

/// Selector values the collaborating UI drives the projections with.
/// Empty string means "no narrowing" for every selector.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub room: String,
    pub edit_room: String,
    pub teacher_search: String,
    pub edit_teacher: String,
    pub group: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridRow {
    pub time: String,
    /// One cell per day in week order; `None` renders as an empty cell.
    pub cells: Vec<Option<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridView {
    pub rows: Vec<GridRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditCell {
    pub text: String,
    /// Occupied cells carry a delete affordance; empty ones accept a new
    /// entry typed straight into them.
    pub occupied: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditGridRow {
    pub time: String,
    pub cells: Vec<EditCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditGridView {
    pub rows: Vec<EditGridRow>,
}

/// One row of the flat teacher listing. `time` is shown verbatim as
/// stored, not canonicalized.
#[derive(Debug, Clone, Serialize)]
pub struct ListRow {
    pub teacher: String,
    pub time: String,
    pub day: String,
    pub group: String,
    pub room: String,
    pub subject: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupRow {
    pub group: String,
    pub time: String,
    pub day: String,
    pub teacher: String,
    pub room: String,
    pub subject: String,
}

/// Distinct rooms/teachers/groups of the current base collection, in
/// first-appearance order, for the UI's selector dropdowns.
#[derive(Debug, Clone, Serialize)]
pub struct SelectOptions {
    pub rooms: Vec<String>,
    pub teachers: Vec<String>,
    pub groups: Vec<String>,
}

/// The full set of read-models, all derived from the same reconciled
/// state. Recomputed as a whole after every mutation so no view can be
/// observed stale relative to another.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Views {
    pub master: GridView,
    pub master_edit: EditGridView,
    pub room: GridView,
    pub room_edit: EditGridView,
    pub teacher: Vec<ListRow>,
    pub teacher_edit: Vec<ListRow>,
    pub group: Vec<GroupRow>,
    pub options: SelectOptions,
}

fn master_cell_text(e: &Entry) -> String {
    format!("{}\n{}\n{}\n{}", e.teacher, e.group, e.room, e.subject)
}

// Room grids omit the room line; it is the selector itself.
fn room_cell_text(e: &Entry) -> String {
    format!("{}\n{}\n{}", e.teacher, e.group, e.subject)
}

fn grid_view(
    base: &[Entry],
    overlay: &[Entry],
    room: Option<&str>,
    cell_text: fn(&Entry) -> String,
) -> GridView {
    let rows = TIME_SLOTS
        .iter()
        .map(|(start, end)| {
            let time = slot_label(start, end);
            let cells = DAYS
                .iter()
                .map(|day| cell_entry(base, overlay, &time, day, room).map(cell_text))
                .collect();
            GridRow { time, cells }
        })
        .collect();
    GridView { rows }
}

fn edit_grid_view(
    base: &[Entry],
    overlay: &[Entry],
    room: Option<&str>,
    cell_text: fn(&Entry) -> String,
) -> EditGridView {
    let rows = TIME_SLOTS
        .iter()
        .map(|(start, end)| {
            let time = slot_label(start, end);
            let cells = DAYS
                .iter()
                .map(|day| match cell_entry(base, overlay, &time, day, room) {
                    Some(e) => EditCell {
                        text: cell_text(e),
                        occupied: true,
                    },
                    None => EditCell {
                        text: String::new(),
                        occupied: false,
                    },
                })
                .collect();
            EditGridRow { time, cells }
        })
        .collect();
    EditGridView { rows }
}

fn list_row(e: &Entry) -> ListRow {
    ListRow {
        teacher: e.teacher.clone(),
        time: e.time.clone(),
        day: e.day.clone(),
        group: e.group.clone(),
        room: e.room.clone(),
        subject: e.subject.clone(),
    }
}

fn teacher_rows(base: &[Entry], overlay: &[Entry], search: &str) -> Vec<ListRow> {
    let term = search.to_lowercase();
    visible(base, overlay, MatchScope::TimeDay)
        .into_iter()
        .filter(|e| term.is_empty() || e.teacher.to_lowercase().contains(&term))
        .map(list_row)
        .collect()
}

fn teacher_edit_rows(base: &[Entry], overlay: &[Entry], selected: &str) -> Vec<ListRow> {
    visible(base, overlay, MatchScope::TimeDay)
        .into_iter()
        .filter(|e| selected.is_empty() || e.teacher == selected)
        .map(list_row)
        .collect()
}

fn group_rows(base: &[Entry], overlay: &[Entry], selected: &str) -> Vec<GroupRow> {
    visible(base, overlay, MatchScope::TimeDayGroup)
        .into_iter()
        .filter(|e| selected.is_empty() || e.group == selected)
        .map(|e| GroupRow {
            group: e.group.clone(),
            time: e.time.clone(),
            day: e.day.clone(),
            teacher: e.teacher.clone(),
            room: e.room.clone(),
            subject: e.subject.clone(),
        })
        .collect()
}

fn select_options(base: &[Entry]) -> SelectOptions {
    let mut rooms: Vec<String> = Vec::new();
    let mut teachers: Vec<String> = Vec::new();
    let mut groups: Vec<String> = Vec::new();
    for e in base {
        if !rooms.contains(&e.room) {
            rooms.push(e.room.clone());
        }
        if !teachers.contains(&e.teacher) {
            teachers.push(e.teacher.clone());
        }
        if !groups.contains(&e.group) {
            groups.push(e.group.clone());
        }
    }
    SelectOptions {
        rooms,
        teachers,
        groups,
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Derive all seven views plus selector options in one pass. This is the
/// only fan-out point: every mutating operation ends here.
pub fn project_all(base: &[Entry], overlay: &[Entry], filters: &Filters) -> Views {
    Views {
        master: grid_view(base, overlay, None, master_cell_text),
        master_edit: edit_grid_view(base, overlay, None, master_cell_text),
        room: grid_view(base, overlay, non_empty(&filters.room), room_cell_text),
        room_edit: edit_grid_view(base, overlay, non_empty(&filters.edit_room), room_cell_text),
        teacher: teacher_rows(base, overlay, &filters.teacher_search),
        teacher_edit: teacher_edit_rows(base, overlay, &filters.edit_teacher),
        group: group_rows(base, overlay, &filters.group),
        options: select_options(base),
    }
}
