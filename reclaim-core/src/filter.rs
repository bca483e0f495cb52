use crate::model::FileRecord;

/// Kind predicate for the temp-file view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum KindFilter {
    /// Match every record
    #[default]
    All,
    /// Exact match against the stored kind tag
    Only(String),
}

impl KindFilter {
    pub fn matches(&self, record: &FileRecord) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(kind) => record.kind == *kind,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            KindFilter::All => "all",
            KindFilter::Only(kind) => kind,
        }
    }
}

/// Combined filter specification: all active predicates must match.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    /// Free-text search, matched case-insensitively against name or path.
    /// Whitespace is significant; an empty term matches everything.
    pub search: String,
    pub kind: KindFilter,
}

impl FileFilter {
    pub fn matches(&self, record: &FileRecord) -> bool {
        self.kind.matches(record) && self.search_matches(record)
    }

    fn search_matches(&self, record: &FileRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        record.name.to_lowercase().contains(&term) || record.path.to_lowercase().contains(&term)
    }

    /// Produce the matching subset, preserving input order.
    pub fn apply(&self, records: &[FileRecord]) -> Vec<FileRecord> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}

/// Distinct kind tags present in a record list, sorted, for filter cycling.
pub fn known_kinds(records: &[FileRecord]) -> Vec<String> {
    let mut kinds: Vec<String> = records.iter().map(|r| r.kind.clone()).collect();
    kinds.sort();
    kinds.dedup();
    kinds
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: &str, name: &str, path: &str, kind: &str) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            name: name.to_string(),
            path: path.to_string(),
            size: 0,
            kind: kind.to_string(),
            last_modified: Utc::now(),
        }
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let records = vec![
            record("1", "a.log", "/var/log/a.log", "log"),
            record("2", "b.tmp", "/tmp/b.tmp", "tmp"),
        ];
        let filter = FileFilter::default();
        assert_eq!(filter.apply(&records), records);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_or_path() {
        let records = vec![
            record("1", "Backup.TAR", "/srv/data/Backup.TAR", "tar"),
            record("2", "notes.txt", "/home/alice/archive/notes.txt", "txt"),
            record("3", "video.mkv", "/media/video.mkv", "mkv"),
        ];
        let filter = FileFilter {
            search: "ARCHIVE".to_string(),
            ..Default::default()
        };
        // Matches record 2 through its path only
        let out = filter.apply(&records);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "2");

        let filter = FileFilter {
            search: "backup".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&records)[0].id, "1");
    }

    #[test]
    fn test_whitespace_search_is_literal() {
        let records = vec![
            record("1", "my file.bin", "/data/my file.bin", "bin"),
            record("2", "myfile.bin", "/data/myfile.bin", "bin"),
        ];
        let filter = FileFilter {
            search: "my ".to_string(),
            ..Default::default()
        };
        let out = filter.apply(&records);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "1");
    }

    #[test]
    fn test_kind_filter_is_exact_and_anded_with_search() {
        let records = vec![
            record("1", "a.log", "/var/log/a.log", "log"),
            record("2", "b.log", "/var/log/b.log", "LOG"),
            record("3", "c.tmp", "/tmp/c.tmp", "tmp"),
        ];
        let filter = FileFilter {
            search: String::new(),
            kind: KindFilter::Only("log".to_string()),
        };
        // Case-sensitive on the stored value: "LOG" does not match
        let out = filter.apply(&records);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "1");

        let filter = FileFilter {
            search: "b.".to_string(),
            kind: KindFilter::Only("log".to_string()),
        };
        assert!(filter.apply(&records).is_empty());
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let filter = FileFilter {
            search: "anything".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&[]).is_empty());
    }

    #[test]
    fn test_known_kinds_sorted_and_deduped() {
        let records = vec![
            record("1", "a", "/a", "tmp"),
            record("2", "b", "/b", "log"),
            record("3", "c", "/c", "tmp"),
        ];
        assert_eq!(known_kinds(&records), vec!["log", "tmp"]);
    }
}
