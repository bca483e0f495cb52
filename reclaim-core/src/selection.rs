use std::collections::HashSet;

/// Set of file ids marked for a bulk action.
///
/// Membership is keyed on `FileRecord.id` only, never on list positions,
/// so it stays valid across re-filters and re-sorts. Every operation
/// returns a new set; a previously handed-out value is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Ids as an owned vector, for building a cleanup request
    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    /// New set with `id` flipped in or out
    pub fn toggled(&self, id: &str) -> Self {
        let mut ids = self.ids.clone();
        if !ids.remove(id) {
            ids.insert(id.to_string());
        }
        Self { ids }
    }

    /// New set with every given id added, on top of the current membership.
    /// Used for select-all over the currently filtered view; the membership
    /// is frozen at call time and does not track later filter changes.
    pub fn with_all<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut merged = self.ids.clone();
        merged.extend(ids.into_iter().map(str::to_string));
        Self { ids: merged }
    }

    /// Empty set
    pub fn cleared() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let empty = SelectionSet::new();
        let with_x = empty.toggled("x");
        assert!(with_x.contains("x"));
        assert_eq!(with_x.len(), 1);
        assert_eq!(with_x.toggled("x"), empty);
    }

    #[test]
    fn test_toggle_does_not_mutate_original() {
        let a = SelectionSet::new().toggled("x");
        let b = a.toggled("y");
        assert!(!a.contains("y"));
        assert!(b.contains("x") && b.contains("y"));
    }

    #[test]
    fn test_with_all_merges_over_existing_selection() {
        let existing = SelectionSet::new().toggled("old");
        let merged = existing.with_all(["a", "b"]);
        assert_eq!(merged.len(), 3);
        assert!(merged.contains("old"));
        assert!(merged.contains("a"));
        assert!(merged.contains("b"));
    }

    #[test]
    fn test_with_all_is_idempotent_per_id() {
        let set = SelectionSet::new().with_all(["a", "a", "b"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_cleared_is_unconditional() {
        let set = SelectionSet::new().with_all(["a", "b", "c"]);
        assert!(!set.is_empty());
        assert!(SelectionSet::cleared().is_empty());
    }
}
