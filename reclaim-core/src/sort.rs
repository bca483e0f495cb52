use std::cmp::Ordering;

use crate::model::FileRecord;

/// Which field the large-files view orders by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Size,
    Name,
    Date,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Size => "size",
            SortKey::Name => "name",
            SortKey::Date => "date",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SortKey::Size => SortKey::Name,
            SortKey::Name => SortKey::Date,
            SortKey::Date => SortKey::Size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

fn compare(a: &FileRecord, b: &FileRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Size => a.size.cmp(&b.size),
        // Case-insensitive stand-in for locale collation
        SortKey::Name => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
        SortKey::Date => a.last_modified.cmp(&b.last_modified),
    }
}

/// Produce a new, totally ordered vector; the input is left untouched.
///
/// `Vec::sort_by` is stable, so records that compare equal keep their
/// relative input order in either direction.
pub fn sorted_view(records: &[FileRecord], key: SortKey, order: SortOrder) -> Vec<FileRecord> {
    let mut out = records.to_vec();
    out.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: &str, name: &str, size: u64, day: u32) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            name: name.to_string(),
            path: format!("/data/{name}"),
            size,
            kind: "bin".to_string(),
            last_modified: Utc.with_ymd_and_hms(2025, 6, day, 0, 0, 0).unwrap(),
        }
    }

    fn ids(records: &[FileRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_sort_by_size() {
        let records = vec![
            record("1", "a", 600_000_000, 1),
            record("2", "b", 2_000_000_000, 2),
            record("3", "c", 10, 3),
        ];
        assert_eq!(
            ids(&sorted_view(&records, SortKey::Size, SortOrder::Desc)),
            vec!["2", "1", "3"]
        );
        assert_eq!(
            ids(&sorted_view(&records, SortKey::Size, SortOrder::Asc)),
            vec!["3", "1", "2"]
        );
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let records = vec![
            record("1", "zeta.log", 1, 1),
            record("2", "Alpha.log", 2, 2),
            record("3", "beta.log", 3, 3),
        ];
        assert_eq!(
            ids(&sorted_view(&records, SortKey::Name, SortOrder::Asc)),
            vec!["2", "3", "1"]
        );
    }

    #[test]
    fn test_sort_by_date() {
        let records = vec![
            record("1", "a", 1, 20),
            record("2", "b", 2, 5),
            record("3", "c", 3, 12),
        ];
        assert_eq!(
            ids(&sorted_view(&records, SortKey::Date, SortOrder::Asc)),
            vec!["2", "3", "1"]
        );
    }

    #[test]
    fn test_desc_is_reverse_of_asc_without_ties() {
        let records = vec![
            record("1", "a", 30, 1),
            record("2", "b", 10, 2),
            record("3", "c", 20, 3),
        ];
        let asc = sorted_view(&records, SortKey::Size, SortOrder::Asc);
        let mut desc = sorted_view(&records, SortKey::Size, SortOrder::Desc);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            record("1", "a", 100, 1),
            record("2", "b", 100, 2),
            record("3", "c", 100, 3),
        ];
        assert_eq!(
            ids(&sorted_view(&records, SortKey::Size, SortOrder::Desc)),
            vec!["1", "2", "3"]
        );
        assert_eq!(
            ids(&sorted_view(&records, SortKey::Size, SortOrder::Asc)),
            vec!["1", "2", "3"]
        );
    }

    #[test]
    fn test_input_is_not_mutated() {
        let records = vec![record("1", "b", 2, 1), record("2", "a", 1, 2)];
        let before = records.clone();
        let _ = sorted_view(&records, SortKey::Name, SortOrder::Asc);
        assert_eq!(records, before);
    }
}
