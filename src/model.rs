use serde::{Deserialize, Serialize};

/// One scheduled class occurrence. All fields are stored verbatim as the
/// collaborating UI supplied them; `time` may use `.` or `:` separators
/// and is only normalized at comparison time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub teacher: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub subject: String,
}

impl Entry {
    /// A record is usable only when every field is present.
    pub fn is_valid(&self) -> bool {
        !self.time.is_empty()
            && !self.day.is_empty()
            && !self.teacher.is_empty()
            && !self.group.is_empty()
            && !self.room.is_empty()
            && !self.subject.is_empty()
    }
}

/// Canonical time key: `.` separators become `:`. No other validation;
/// a label that matches no catalog slot simply never matches a grid row.
pub fn normalize_time(raw: &str) -> String {
    raw.replace('.', ":")
}

/// Partition a freshly loaded collection into the working set and the
/// rejected records. Rejects are kept around for diagnostics rather than
/// silently dropped.
pub fn split_valid(entries: Vec<Entry>) -> (Vec<Entry>, Vec<Entry>) {
    entries.into_iter().partition(Entry::is_valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(time: &str) -> Entry {
        Entry {
            time: time.to_string(),
            day: "Понедельник".to_string(),
            teacher: "Smith".to_string(),
            group: "G1".to_string(),
            room: "101".to_string(),
            subject: "Math".to_string(),
        }
    }

    #[test]
    fn normalize_replaces_every_dot() {
        assert_eq!(normalize_time("08.20 - 09.55"), "08:20 - 09:55");
        assert_eq!(normalize_time("08:20 - 09:55"), "08:20 - 09:55");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_time("10.05 - 11.40");
        assert_eq!(normalize_time(&once), once);
    }

    #[test]
    fn dotted_and_colon_times_share_a_key() {
        assert_eq!(
            normalize_time("08.20 - 09.55"),
            normalize_time("08:20 - 09:55")
        );
    }

    #[test]
    fn entry_with_all_fields_is_valid() {
        assert!(entry("08:20 - 09:55").is_valid());
    }

    #[test]
    fn any_empty_field_invalidates() {
        let mut e = entry("08:20 - 09:55");
        e.subject = String::new();
        assert!(!e.is_valid());
        let mut e = entry("08:20 - 09:55");
        e.room = String::new();
        assert!(!e.is_valid());
    }

    #[test]
    fn split_valid_keeps_rejects_for_diagnostics() {
        let mut bad = entry("08:20 - 09:55");
        bad.teacher = String::new();
        let (valid, rejected) = split_valid(vec![entry("10:05 - 11:40"), bad.clone()]);
        assert_eq!(valid.len(), 1);
        assert_eq!(rejected, vec![bad]);
    }
}
