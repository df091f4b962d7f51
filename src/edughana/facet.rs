//! Id-to-label lookup tables for reference collections (subjects, levels).
//!
//! Listing surfaces show "Mathematics - JHS", not `subject_id: 1`. Building
//! the table once per reference collection replaces a linear scan per
//! rendered row.

use std::collections::HashMap;

use crate::model::{EducationalLevel, Subject};

/// Resolves entity ids to display labels, with a fallback for ids that are
/// not in the table. Reference collections are expected id-unique; on
/// duplicates the last entry wins.
#[derive(Debug, Clone)]
pub struct FacetIndex {
    labels: HashMap<i64, String>,
    fallback: String,
}

impl FacetIndex {
    pub fn build<I>(entries: I, fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (i64, String)>,
    {
        Self {
            labels: entries.into_iter().collect(),
            fallback: fallback.into(),
        }
    }

    pub fn of_subjects(subjects: &[Subject]) -> Self {
        Self::build(
            subjects.iter().map(|s| (s.id, s.name.clone())),
            "Unknown Subject",
        )
    }

    pub fn of_levels(levels: &[EducationalLevel]) -> Self {
        Self::build(
            levels.iter().map(|l| (l.id, l.name.clone())),
            "Unknown Level",
        )
    }

    /// The label for `id`, or the fallback when the id is unknown.
    pub fn resolve(&self, id: i64) -> &str {
        self.labels.get(&id).map(String::as_str).unwrap_or(&self.fallback)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
