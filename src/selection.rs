//! Which meeting records go into an export.
//!
//! Selection is plain data owned by the CLI: a set of record indices that is
//! applied to the record list to produce the records handed to the emitter.

use std::collections::BTreeSet;

use anyhow::{Result, bail};
use nusched_core::MeetingRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    selected: BTreeSet<usize>,
}

impl Selection {
    /// Every record of a list of `len` records.
    pub fn all(len: usize) -> Self {
        Selection {
            selected: (0..len).collect(),
        }
    }

    /// Build a selection from 1-based `--only` / `--exclude` numbers as shown
    /// by `nusched list`. An empty `only` means "everything".
    pub fn from_args(only: &[usize], exclude: &[usize], len: usize) -> Result<Self> {
        let only = to_indices(only, len)?;
        let exclude = to_indices(exclude, len)?;

        let mut selection = if only.is_empty() {
            Selection::all(len)
        } else {
            Selection { selected: only }
        };
        selection.selected.retain(|i| !exclude.contains(i));
        Ok(selection)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected records, in list order.
    pub fn apply(&self, records: &[MeetingRecord]) -> Vec<MeetingRecord> {
        records
            .iter()
            .enumerate()
            .filter(|(i, _)| self.selected.contains(i))
            .map(|(_, record)| record.clone())
            .collect()
    }
}

fn to_indices(numbers: &[usize], len: usize) -> Result<BTreeSet<usize>> {
    let mut indices = BTreeSet::new();
    for &n in numbers {
        if n == 0 || n > len {
            bail!("No class number {} (the list has {} classes)", n, len);
        }
        indices.insert(n - 1);
    }
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(names: &[&str]) -> Vec<MeetingRecord> {
        names
            .iter()
            .map(|name| {
                nusched_core::build_courses(&[serde_json::json!({ "eventName": name })
                    .as_object()
                    .cloned()
                    .unwrap()])
                .remove(0)
            })
            .collect()
    }

    fn names(records: &[MeetingRecord]) -> Vec<&str> {
        records.iter().map(|r| r.course_name.as_str()).collect()
    }

    #[test]
    fn test_defaults_to_everything() {
        let list = records(&["A", "B", "C"]);
        let selection = Selection::from_args(&[], &[], list.len()).unwrap();
        assert!(!selection.is_empty());
        assert_eq!(names(&selection.apply(&list)), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_only_keeps_list_order() {
        let list = records(&["A", "B", "C", "D"]);
        let selection = Selection::from_args(&[4, 1, 3], &[], list.len()).unwrap();
        assert_eq!(names(&selection.apply(&list)), vec!["A", "C", "D"]);
    }

    #[test]
    fn test_exclude_wins_over_only() {
        let list = records(&["A", "B", "C"]);
        let selection = Selection::from_args(&[1, 2], &[2], list.len()).unwrap();
        assert_eq!(names(&selection.apply(&list)), vec!["A"]);

        let selection = Selection::from_args(&[], &[1, 2, 3], list.len()).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_out_of_range_numbers_are_errors() {
        assert!(Selection::from_args(&[0], &[], 3).is_err());
        assert!(Selection::from_args(&[4], &[], 3).is_err());
        assert!(Selection::from_args(&[], &[9], 3).is_err());
    }
}
