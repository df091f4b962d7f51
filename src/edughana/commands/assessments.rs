use crate::commands::{AssessmentView, CmdResult};
use crate::error::Result;
use crate::facet::FacetIndex;
use crate::filter::{Criteria, FacetValue};
use crate::model::{AssessmentKind, Difficulty};
use crate::store::ContentProvider;

#[derive(Debug, Clone, Default)]
pub struct AssessmentQuery {
    pub search: Option<String>,
    pub subject: Option<FacetValue>,
    pub level: Option<FacetValue>,
    pub kind: Option<AssessmentKind>,
    pub difficulty: Option<Difficulty>,
}

pub fn run<P: ContentProvider>(provider: &P, query: AssessmentQuery) -> Result<CmdResult> {
    let assessments = provider.assessments(query.kind)?;
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
    if let Some(difficulty) = query.difficulty {
        criteria = criteria.with_exact(
            "difficulty",
            FacetValue::Label(difficulty.as_str().to_string()),
        );
    }

    let subject_names = FacetIndex::of_subjects(&subjects);
    let level_names = FacetIndex::of_levels(&levels);

    let listed: Vec<AssessmentView> = criteria
        .apply(assessments)
        .into_iter()
        .map(|assessment| AssessmentView {
            subject: subject_names.resolve(assessment.subject_id).to_string(),
            level: level_names
                .resolve(assessment.educational_level_id)
                .to_string(),
            assessment,
        })
        .collect();

    Ok(CmdResult::default().with_assessments(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryProvider;

    #[test]
    fn no_facets_lists_all_assessments() {
        let provider = MemoryProvider::seeded();
        let result = run(&provider, AssessmentQuery::default()).unwrap();
        assert_eq!(result.assessments.len(), 8);
    }

    #[test]
    fn kind_narrows_to_quizzes() {
        let provider = MemoryProvider::seeded();
        let result = run(
            &provider,
            AssessmentQuery {
                kind: Some(AssessmentKind::Quiz),
                ..AssessmentQuery::default()
            },
        )
        .unwrap();
        assert_eq!(result.assessments.len(), 1);
        assert_eq!(
            result.assessments[0].assessment.title,
            "Science Quiz - Basic Education"
        );
    }

    #[test]
    fn difficulty_facet_filters() {
        let provider = MemoryProvider::seeded();
        let result = run(
            &provider,
            AssessmentQuery {
                difficulty: Some(Difficulty::Hard),
                ..AssessmentQuery::default()
            },
        )
        .unwrap();
        assert!(result
            .assessments
            .iter()
            .all(|v| v.assessment.difficulty == Difficulty::Hard));
        assert_eq!(result.assessments.len(), 2);
    }

    #[test]
    fn search_and_subject_combine_with_and() {
        let provider = MemoryProvider::seeded();
        let result = run(
            &provider,
            AssessmentQuery {
                search: Some("mathematics".into()),
                subject: Some(FacetValue::Id(1)),
                ..AssessmentQuery::default()
            },
        )
        .unwrap();
        let ids: Vec<i64> = result.assessments.iter().map(|v| v.assessment.id).collect();
        assert_eq!(ids, vec![1, 6]);
    }

    #[test]
    fn licensure_kind_selects_licensure_exams_only() {
        let provider = MemoryProvider::seeded();
        let result = run(
            &provider,
            AssessmentQuery {
                kind: Some(AssessmentKind::LicensureExam),
                ..AssessmentQuery::default()
            },
        )
        .unwrap();
        assert_eq!(result.assessments.len(), 1);
        assert_eq!(result.assessments[0].level, "Tertiary");
    }
}
