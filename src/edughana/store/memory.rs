//! In-memory provider, plus the built-in demo catalog the CLI falls back to
//! when neither a catalog directory nor the remote API is configured.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use super::{Catalog, ContentProvider};
use crate::error::Result;
use crate::model::{
    Assessment, AssessmentKind, Difficulty, EducationalLevel, NewsItem, Priority, Resource,
    ResourceKind, Subject,
};

pub struct MemoryProvider {
    catalog: Catalog,
}

impl MemoryProvider {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Provider over the built-in demo catalog.
    pub fn seeded() -> Self {
        Self::new(SEED.clone())
    }
}

impl Default for MemoryProvider {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl ContentProvider for MemoryProvider {
    fn educational_levels(&self) -> Result<Vec<EducationalLevel>> {
        Ok(self.catalog.educational_levels.clone())
    }

    fn subjects(&self) -> Result<Vec<Subject>> {
        Ok(self.catalog.subjects.clone())
    }

    fn resources(&self, kind: Option<ResourceKind>) -> Result<Vec<Resource>> {
        let mut resources = self.catalog.resources.clone();
        if let Some(kind) = kind {
            resources.retain(|r| r.kind == kind);
        }
        Ok(resources)
    }

    fn assessments(&self, kind: Option<AssessmentKind>) -> Result<Vec<Assessment>> {
        let mut assessments = self.catalog.assessments.clone();
        if let Some(kind) = kind {
            assessments.retain(|a| a.kind == kind);
        }
        Ok(assessments)
    }

    fn news(&self) -> Result<Vec<NewsItem>> {
        Ok(self.catalog.news.clone())
    }
}

fn seed_date(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("seed catalog timestamps are valid RFC 3339")
        .with_timezone(&Utc)
}

static SEED: Lazy<Catalog> = Lazy::new(|| Catalog {
    educational_levels: vec![
        EducationalLevel {
            id: 1,
            name: "Basic".into(),
            slug: "basic".into(),
            description: "Primary education, the foundation years".into(),
        },
        EducationalLevel {
            id: 2,
            name: "JHS".into(),
            slug: "jhs".into(),
            description: "Junior High School, leading to the BECE".into(),
        },
        EducationalLevel {
            id: 3,
            name: "SHS".into(),
            slug: "shs".into(),
            description: "Senior High School, leading to the WASSCE".into(),
        },
        EducationalLevel {
            id: 4,
            name: "Tertiary".into(),
            slug: "tertiary".into(),
            description: "Universities, colleges of education and training institutions".into(),
        },
    ],
    subjects: vec![
        Subject { id: 1, name: "Mathematics".into() },
        Subject { id: 2, name: "English".into() },
        Subject { id: 3, name: "Science".into() },
        Subject { id: 4, name: "Social Studies".into() },
        Subject { id: 5, name: "ICT".into() },
    ],
    resources: vec![
        Resource {
            id: 1,
            title: "Algebra Basics".into(),
            description: "Linear equations, factorisation and worked examples for JHS".into(),
            subject_id: 1,
            educational_level_id: 2,
            kind: ResourceKind::LessonNote,
            pages: Some(24),
            is_downloadable: true,
            file_url: Some("https://cdn.edughana.example/notes/algebra-basics.pdf".into()),
        },
        Resource {
            id: 2,
            title: "Photosynthesis Explained".into(),
            description: "Integrated science lesson note on plant nutrition".into(),
            subject_id: 3,
            educational_level_id: 2,
            kind: ResourceKind::LessonNote,
            pages: Some(12),
            is_downloadable: true,
            file_url: Some("https://cdn.edughana.example/notes/photosynthesis.pdf".into()),
        },
        Resource {
            id: 3,
            title: "WASSCE Mathematics Past Questions 2023".into(),
            description: "Full past paper with marking scheme".into(),
            subject_id: 1,
            educational_level_id: 3,
            kind: ResourceKind::PastQuestion,
            pages: Some(32),
            is_downloadable: true,
            file_url: Some("https://cdn.edughana.example/past/wassce-math-2023.pdf".into()),
        },
        Resource {
            id: 4,
            title: "Essay Writing Guide".into(),
            description: "Argumentative and expository essay structures for SHS English".into(),
            subject_id: 2,
            educational_level_id: 3,
            kind: ResourceKind::LessonNote,
            pages: Some(18),
            is_downloadable: false,
            file_url: None,
        },
        Resource {
            id: 5,
            title: "Ghana in West Africa".into(),
            description: "Curriculum overview for basic social studies".into(),
            subject_id: 4,
            educational_level_id: 1,
            kind: ResourceKind::Curriculum,
            pages: None,
            is_downloadable: false,
            file_url: None,
        },
        Resource {
            id: 6,
            title: "Introduction to Computing".into(),
            description: "SHS ICT textbook covering hardware, software and networks".into(),
            subject_id: 5,
            educational_level_id: 3,
            kind: ResourceKind::Textbook,
            pages: Some(210),
            is_downloadable: true,
            file_url: Some("https://cdn.edughana.example/books/intro-computing.pdf".into()),
        },
    ],
    assessments: vec![
        Assessment {
            id: 1,
            title: "Mathematics Mock Exam - Form 1".into(),
            description: "Comprehensive mathematics assessment covering algebra, geometry, and arithmetic".into(),
            subject_id: 1,
            educational_level_id: 2,
            kind: AssessmentKind::MockExam,
            difficulty: Difficulty::Medium,
            duration_minutes: Some(120),
            num_questions: Some(50),
            participants: 1250,
            rating: 4.8,
        },
        Assessment {
            id: 2,
            title: "English Language Practice Test".into(),
            description: "Reading comprehension, grammar, and essay writing assessment".into(),
            subject_id: 2,
            educational_level_id: 3,
            kind: AssessmentKind::PracticeTest,
            difficulty: Difficulty::Hard,
            duration_minutes: Some(90),
            num_questions: Some(40),
            participants: 980,
            rating: 4.6,
        },
        Assessment {
            id: 3,
            title: "Science Quiz - Basic Education".into(),
            description: "Interactive science quiz covering biology, chemistry, and physics basics".into(),
            subject_id: 3,
            educational_level_id: 1,
            kind: AssessmentKind::Quiz,
            difficulty: Difficulty::Easy,
            duration_minutes: Some(45),
            num_questions: Some(25),
            participants: 2100,
            rating: 4.9,
        },
        Assessment {
            id: 4,
            title: "Social Studies Assessment".into(),
            description: "Comprehensive test on Ghana's history, geography, and civic education".into(),
            subject_id: 4,
            educational_level_id: 2,
            kind: AssessmentKind::Assessment,
            difficulty: Difficulty::Medium,
            duration_minutes: Some(75),
            num_questions: Some(35),
            participants: 750,
            rating: 4.5,
        },
        Assessment {
            id: 5,
            title: "ICT Practical Exam".into(),
            description: "Hands-on ICT assessment covering computer applications and digital literacy".into(),
            subject_id: 5,
            educational_level_id: 3,
            kind: AssessmentKind::PracticalExam,
            difficulty: Difficulty::Medium,
            duration_minutes: Some(60),
            num_questions: Some(20),
            participants: 650,
            rating: 4.7,
        },
        Assessment {
            id: 6,
            title: "WASSCE Mathematics Prep".into(),
            description: "Intensive preparation test for WASSCE mathematics examination".into(),
            subject_id: 1,
            educational_level_id: 3,
            kind: AssessmentKind::PrepTest,
            difficulty: Difficulty::Hard,
            duration_minutes: Some(180),
            num_questions: Some(60),
            participants: 1800,
            rating: 4.9,
        },
        Assessment {
            id: 7,
            title: "Teacher Licensure Examination - Pedagogy".into(),
            description: "NTC licensure examination practice covering pedagogy and professional practice".into(),
            subject_id: 4,
            educational_level_id: 4,
            kind: AssessmentKind::LicensureExam,
            difficulty: Difficulty::Medium,
            duration_minutes: Some(120),
            num_questions: Some(80),
            participants: 430,
            rating: 4.4,
        },
        Assessment {
            id: 8,
            title: "General Aptitude Test".into(),
            description: "Numerical, verbal and abstract reasoning for tertiary admission".into(),
            subject_id: 1,
            educational_level_id: 4,
            kind: AssessmentKind::AptitudeTest,
            difficulty: Difficulty::Medium,
            duration_minutes: Some(60),
            num_questions: Some(45),
            participants: 890,
            rating: 4.3,
        },
    ],
    news: vec![
        NewsItem {
            id: 1,
            title: "New Curriculum Guidelines Released for Basic Education".into(),
            content: "The Ghana Education Service has released updated curriculum guidelines for basic education, focusing on improved literacy and numeracy outcomes.".into(),
            category: "Education Policy".into(),
            source: "Ghana Education Service (GES)".into(),
            priority: Priority::High,
            author: "GES Communications".into(),
            created_at: seed_date("2024-01-15T10:00:00Z"),
            external_url: Some("https://ges.gov.gh/news/curriculum-update".into()),
            is_featured: true,
        },
        NewsItem {
            id: 2,
            title: "Teacher Training Workshop Scheduled for February".into(),
            content: "A comprehensive teacher training workshop on modern pedagogical methods will be held across all regions in February 2024.".into(),
            category: "Teacher Training".into(),
            source: "National Teaching Council".into(),
            priority: Priority::Medium,
            author: "NTC Admin".into(),
            created_at: seed_date("2024-01-10T14:30:00Z"),
            external_url: None,
            is_featured: false,
        },
        NewsItem {
            id: 3,
            title: "WASSCE 2024 Registration Opens".into(),
            content: "Registration for the West African Senior School Certificate Examination (WASSCE) 2024 is now open for all eligible candidates.".into(),
            category: "Examination News".into(),
            source: "West African Examinations Council".into(),
            priority: Priority::High,
            author: "WAEC Ghana".into(),
            created_at: seed_date("2024-01-08T09:00:00Z"),
            external_url: Some("https://waecgh.org/registration".into()),
            is_featured: true,
        },
    ],
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_is_consistent() {
        let provider = MemoryProvider::seeded();
        let subjects = provider.subjects().unwrap();
        let levels = provider.educational_levels().unwrap();

        let subject_ids: Vec<i64> = subjects.iter().map(|s| s.id).collect();
        let level_ids: Vec<i64> = levels.iter().map(|l| l.id).collect();

        for resource in provider.resources(None).unwrap() {
            assert!(subject_ids.contains(&resource.subject_id));
            assert!(level_ids.contains(&resource.educational_level_id));
        }
        for assessment in provider.assessments(None).unwrap() {
            assert!(subject_ids.contains(&assessment.subject_id));
            assert!(level_ids.contains(&assessment.educational_level_id));
        }
    }

    #[test]
    fn kind_parameter_narrows_resources() {
        let provider = MemoryProvider::seeded();
        let notes = provider.resources(Some(ResourceKind::LessonNote)).unwrap();
        assert!(!notes.is_empty());
        assert!(notes.iter().all(|r| r.kind == ResourceKind::LessonNote));
    }

    #[test]
    fn default_featured_news_filters_on_flag() {
        let provider = MemoryProvider::seeded();
        let featured = provider.featured_news().unwrap();
        assert!(!featured.is_empty());
        assert!(featured.iter().all(|n| n.is_featured));
    }

    #[test]
    fn empty_provider_returns_empty_collections() {
        let provider = MemoryProvider::default();
        assert!(provider.subjects().unwrap().is_empty());
        assert!(provider.news().unwrap().is_empty());
    }
}
