use crate::commands::{CmdResult, ResourceView};
use crate::error::Result;
use crate::facet::FacetIndex;
use crate::filter::{Criteria, FacetValue};
use crate::model::ResourceKind;
use crate::store::ContentProvider;

/// The facet selections of the resources listing: a text query plus
/// exact-match subject, level and kind. Unset facets match everything.
#[derive(Debug, Clone, Default)]
pub struct ResourceQuery {
    pub search: Option<String>,
    pub subject: Option<FacetValue>,
    pub level: Option<FacetValue>,
    pub kind: Option<ResourceKind>,
}

pub fn run<P: ContentProvider>(provider: &P, query: ResourceQuery) -> Result<CmdResult> {
    // Kind narrowing happens at the provider (the API accepts it as a
    // parameter); the remaining facets are applied client-side.
    let resources = provider.resources(query.kind)?;
    let subjects = provider.subjects()?;
    let levels = provider.educational_levels()?;

    let mut criteria = Criteria::new();
    if let Some(term) = &query.search {
        criteria = criteria.with_query(term);
    }
    if let Some(subject) = query.subject {
        criteria = criteria.with_exact("subject_id", subject);
    }
    if let Some(level) = query.level {
        criteria = criteria.with_exact("educational_level_id", level);
    }

    let subject_names = FacetIndex::of_subjects(&subjects);
    let level_names = FacetIndex::of_levels(&levels);

    let listed: Vec<ResourceView> = criteria
        .apply(resources)
        .into_iter()
        .map(|resource| ResourceView {
            subject: subject_names.resolve(resource.subject_id).to_string(),
            level: level_names.resolve(resource.educational_level_id).to_string(),
            resource,
        })
        .collect();

    Ok(CmdResult::default().with_resources(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryProvider;

    #[test]
    fn no_facets_lists_everything_in_order() {
        let provider = MemoryProvider::seeded();
        let result = run(&provider, ResourceQuery::default()).unwrap();
        let ids: Vec<i64> = result.resources.iter().map(|v| v.resource.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn search_matches_title_and_description() {
        let provider = MemoryProvider::seeded();
        let result = run(
            &provider,
            ResourceQuery {
                search: Some("wassce".into()),
                ..ResourceQuery::default()
            },
        )
        .unwrap();
        assert_eq!(result.resources.len(), 1);
        assert_eq!(
            result.resources[0].resource.title,
            "WASSCE Mathematics Past Questions 2023"
        );
    }

    #[test]
    fn subject_and_level_facets_combine() {
        let provider = MemoryProvider::seeded();
        let result = run(
            &provider,
            ResourceQuery {
                subject: Some(FacetValue::Id(1)),
                level: Some(FacetValue::Id(3)),
                ..ResourceQuery::default()
            },
        )
        .unwrap();
        let ids: Vec<i64> = result.resources.iter().map(|v| v.resource.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn kind_facet_narrows_to_lesson_notes() {
        let provider = MemoryProvider::seeded();
        let result = run(
            &provider,
            ResourceQuery {
                kind: Some(ResourceKind::LessonNote),
                ..ResourceQuery::default()
            },
        )
        .unwrap();
        assert!(result
            .resources
            .iter()
            .all(|v| v.resource.kind == ResourceKind::LessonNote));
        assert_eq!(result.resources.len(), 3);
    }

    #[test]
    fn views_carry_resolved_labels() {
        let provider = MemoryProvider::seeded();
        let result = run(
            &provider,
            ResourceQuery {
                search: Some("algebra".into()),
                ..ResourceQuery::default()
            },
        )
        .unwrap();
        assert_eq!(result.resources[0].subject, "Mathematics");
        assert_eq!(result.resources[0].level, "JHS");
    }

    #[test]
    fn string_selection_for_numeric_subject_still_matches() {
        let provider = MemoryProvider::seeded();
        let result = run(
            &provider,
            ResourceQuery {
                subject: Some(FacetValue::parse("3")),
                ..ResourceQuery::default()
            },
        )
        .unwrap();
        assert!(!result.resources.is_empty());
        assert!(result
            .resources
            .iter()
            .all(|v| v.resource.subject_id == 3));
    }
}
