//! # Faceted Filtering
//!
//! Every listing surface of the portal (resources, assessments, news) offers
//! the same interaction: a free-text search box plus a handful of exact-match
//! facet selectors, applied together over an in-memory collection. This module
//! is that engine, written once instead of per listing.
//!
//! ## Contract
//!
//! - Filtering is **pure**: same collection and criteria always yield the same
//!   result, and the input is never mutated or reordered.
//! - The output is an order-preserving subsequence of the input.
//! - An unset or blank facet matches everything, never nothing.
//! - Identifier comparisons are normalized to `i64` before comparing, so a
//!   selection arriving as the string `"2"` matches a record whose
//!   `subject_id` is the number `2`. Where a numeric id is expected and the
//!   selection cannot be read as a number, the facet matches no record.
//!
//! Complexity is `O(records x active facets)` per call with no caching;
//! catalog collections are hundreds of entries, not millions.

/// The value of one record field, as seen by predicates.
///
/// `Absent` stands in for fields the record does not have (or has unset);
/// accessors return it rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
    Absent,
}

/// A record that exposes named fields to the filter engine.
pub trait Faceted {
    /// Fields scanned by the free-text facet.
    const TEXT_FIELDS: &'static [&'static str];

    /// Look up a field by name. Unknown or unset fields are [`FieldValue::Absent`].
    fn field(&self, name: &str) -> FieldValue;
}

/// A facet selection as it arrives from a UI: numeric ids stay numeric,
/// everything else is kept as a label. [`FacetValue::parse`] is the single
/// normalization point for raw string input.
#[derive(Debug, Clone, PartialEq)]
pub enum FacetValue {
    Id(i64),
    Label(String),
}

impl FacetValue {
    /// Normalize raw selection input: numeric strings become ids.
    pub fn parse(raw: &str) -> FacetValue {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => FacetValue::Id(n),
            Err(_) => FacetValue::Label(trimmed.to_string()),
        }
    }

    /// Equality against a record field, normalizing string/number mismatches
    /// in both directions. Impossible coercions compare unequal.
    fn matches(&self, field: &FieldValue) -> bool {
        match (self, field) {
            (FacetValue::Id(want), FieldValue::Number(have)) => want == have,
            (FacetValue::Id(want), FieldValue::Text(have)) => {
                have.trim().parse::<i64>().map(|n| n == *want).unwrap_or(false)
            }
            (FacetValue::Label(want), FieldValue::Text(have)) => want == have,
            (FacetValue::Label(want), FieldValue::Number(have)) => {
                want.trim().parse::<i64>().map(|n| n == *have).unwrap_or(false)
            }
            (_, FieldValue::Absent) => false,
        }
    }
}

/// A boolean test over a single record.
pub type Predicate<R> = Box<dyn Fn(&R) -> bool>;

/// Case-insensitive substring match over any of the listed text fields.
///
/// A query that is empty after trimming matches everything. Absent fields
/// read as empty strings, so records with partially populated optional
/// fields never fail the predicate with an error.
pub fn text_predicate<R: Faceted>(
    fields: &'static [&'static str],
    query: &str,
) -> Predicate<R> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Box::new(|_: &R| true);
    }
    Box::new(move |record: &R| {
        fields.iter().any(|name| match record.field(name) {
            FieldValue::Text(text) => text.to_lowercase().contains(&needle),
            FieldValue::Number(n) => n.to_string().contains(&needle),
            FieldValue::Absent => false,
        })
    })
}

/// Exact-match facet over a single field. `None` matches everything.
pub fn exact_predicate<R: Faceted>(
    field: &'static str,
    value: Option<FacetValue>,
) -> Predicate<R> {
    let Some(want) = value else {
        return Box::new(|_: &R| true);
    };
    Box::new(move |record: &R| want.matches(&record.field(field)))
}

/// The set of facet selections active for one filter pass.
///
/// Criteria are ephemeral: built per interaction, applied once, discarded.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    query: Option<String>,
    exact: Vec<(&'static str, FacetValue)>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text facet over the record type's `TEXT_FIELDS`.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Exact-match facet on `field`.
    pub fn with_exact(mut self, field: &'static str, value: FacetValue) -> Self {
        self.exact.push((field, value));
        self
    }

    /// Exact-match facet from an optional raw selection; `None` and blank
    /// input leave the criteria unchanged.
    pub fn with_selection(self, field: &'static str, raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if !value.is_empty() => self.with_exact(field, FacetValue::parse(value)),
            _ => self,
        }
    }

    /// True when no facet is active; applying such criteria is the identity.
    pub fn is_empty(&self) -> bool {
        let query_active = self
            .query
            .as_deref()
            .map(|q| !q.trim().is_empty())
            .unwrap_or(false);
        !query_active && self.exact.is_empty()
    }

    fn predicates<R: Faceted>(&self) -> Vec<Predicate<R>> {
        let mut predicates: Vec<Predicate<R>> = Vec::new();
        if let Some(query) = self.query.as_deref() {
            if !query.trim().is_empty() {
                predicates.push(text_predicate(R::TEXT_FIELDS, query));
            }
        }
        for (field, value) in &self.exact {
            predicates.push(exact_predicate(*field, Some(value.clone())));
        }
        predicates
    }

    /// True iff the record satisfies every active facet.
    pub fn matches<R: Faceted>(&self, record: &R) -> bool {
        self.predicates::<R>().iter().all(|p| p(record))
    }

    /// The order-preserving subsequence of `records` satisfying every active
    /// facet. No sorting, no deduplication; empty input yields empty output
    /// and empty criteria return the input unchanged.
    pub fn apply<R: Faceted>(&self, records: Vec<R>) -> Vec<R> {
        if self.is_empty() {
            return records;
        }
        let predicates = self.predicates::<R>();
        records
            .into_iter()
            .filter(|record| predicates.iter().all(|p| p(record)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        title: &'static str,
        description: Option<&'static str>,
        subject_id: i64,
    }

    impl Faceted for Row {
        const TEXT_FIELDS: &'static [&'static str] = &["title", "description"];

        fn field(&self, name: &str) -> FieldValue {
            match name {
                "id" => FieldValue::Number(self.id),
                "title" => FieldValue::Text(self.title.to_string()),
                "description" => self
                    .description
                    .map(|d| FieldValue::Text(d.to_string()))
                    .unwrap_or(FieldValue::Absent),
                "subject_id" => FieldValue::Number(self.subject_id),
                _ => FieldValue::Absent,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: 1,
                title: "Math Adventure",
                description: Some("puzzles and drills"),
                subject_id: 1,
            },
            Row {
                id: 2,
                title: "Science Lab",
                description: None,
                subject_id: 2,
            },
            Row {
                id: 3,
                title: "Grammar Galaxy",
                description: Some("lab-free language practice"),
                subject_id: 3,
            },
        ]
    }

    fn ids(rows: &[Row]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_criteria_return_input_unchanged() {
        let result = Criteria::new().apply(rows());
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn blank_query_is_vacuous() {
        let result = Criteria::new().with_query("   ").apply(rows());
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn text_match_is_case_insensitive_substring() {
        let result = Criteria::new().with_query("MATH").apply(rows());
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn text_match_scans_all_listed_fields() {
        // "lab" appears in one title and one description
        let result = Criteria::new().with_query("lab").apply(rows());
        assert_eq!(ids(&result), vec![2, 3]);
    }

    #[test]
    fn absent_field_never_panics_text_predicate() {
        // Row 2 has no description; a query over title+description must not fail
        let result = Criteria::new().with_query("science").apply(rows());
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn exact_facet_filters_by_numeric_id() {
        let result = Criteria::new()
            .with_exact("subject_id", FacetValue::Id(2))
            .apply(rows());
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn string_selection_matches_numeric_field() {
        // UI select boxes hand over strings; "2" must match subject_id: 2
        let result = Criteria::new()
            .with_selection("subject_id", Some("2"))
            .apply(rows());
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn garbage_selection_for_numeric_field_matches_nothing() {
        let result = Criteria::new()
            .with_exact("subject_id", FacetValue::Label("two".into()))
            .apply(rows());
        assert!(result.is_empty());
    }

    #[test]
    fn unset_selection_is_vacuous() {
        let result = Criteria::new()
            .with_selection("subject_id", None)
            .with_selection("subject_id", Some(""))
            .apply(rows());
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn facets_combine_with_and() {
        let both = Criteria::new()
            .with_query("lab")
            .with_exact("subject_id", FacetValue::Id(2))
            .apply(rows());
        assert_eq!(ids(&both), vec![2]);

        // AND result equals the order-preserving intersection of single-facet runs
        let only_text = Criteria::new().with_query("lab").apply(rows());
        let only_subject = Criteria::new()
            .with_exact("subject_id", FacetValue::Id(2))
            .apply(rows());
        let intersection: Vec<i64> = ids(&only_text)
            .into_iter()
            .filter(|id| ids(&only_subject).contains(id))
            .collect();
        assert_eq!(ids(&both), intersection);
    }

    #[test]
    fn filtering_preserves_relative_order() {
        let result = Criteria::new().with_query("a").apply(rows());
        let positions: Vec<i64> = ids(&result);
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn filtering_is_idempotent() {
        let criteria = Criteria::new().with_query("lab");
        let once = criteria.apply(rows());
        let twice = criteria.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let result = Criteria::new().with_query("math").apply(Vec::<Row>::new());
        assert!(result.is_empty());
    }

    #[test]
    fn match_predicate_on_single_record() {
        let criteria = Criteria::new().with_exact("subject_id", FacetValue::Id(1));
        assert!(criteria.matches(&rows()[0]));
        assert!(!criteria.matches(&rows()[1]));
    }

    #[test]
    fn absent_field_fails_exact_facet() {
        let result = Criteria::new()
            .with_exact("nonexistent", FacetValue::Id(1))
            .apply(rows());
        assert!(result.is_empty());
    }
}
