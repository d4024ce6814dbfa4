/// The seven canonical lesson slots of the timetable, in row order.
/// A slot's display label is always `"<start> - <end>"`.
pub const TIME_SLOTS: [(&str, &str); 7] = [
    ("08:20", "09:55"),
    ("10:05", "11:40"),
    ("12:05", "13:40"),
    ("13:55", "15:30"),
    ("15:40", "17:15"),
    ("17:25", "19:00"),
    ("19:10", "20:45"),
];

/// Week days in column order. The dataset stores day names verbatim in
/// this fixed Russian enumeration.
pub const DAYS: [&str; 7] = [
    "Понедельник",
    "Вторник",
    "Среда",
    "Четверг",
    "Пятница",
    "Суббота",
    "Воскресенье",
];

pub fn slot_label(start: &str, end: &str) -> String {
    format!("{} - {}", start, end)
}
