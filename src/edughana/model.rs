use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filter::{Faceted, FieldValue};

/// A stage of the Ghanaian school system (Basic, JHS, SHS, Tertiary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationalLevel {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
}

/// Discriminator for catalog content, the `content_type` field of the portal API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    LessonNote,
    PastQuestion,
    Textbook,
    Curriculum,
}

impl ResourceKind {
    /// Wire name, as the portal API spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::LessonNote => "lesson_note",
            ResourceKind::PastQuestion => "past_question",
            ResourceKind::Textbook => "textbook",
            ResourceKind::Curriculum => "curriculum",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ResourceKind::LessonNote => "Lesson Note",
            ResourceKind::PastQuestion => "Past Question",
            ResourceKind::Textbook => "Textbook",
            ResourceKind::Curriculum => "Curriculum",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "lesson_note" | "note" => Ok(ResourceKind::LessonNote),
            "past_question" => Ok(ResourceKind::PastQuestion),
            "textbook" => Ok(ResourceKind::Textbook),
            "curriculum" => Ok(ResourceKind::Curriculum),
            _ => Err(format!("unknown resource kind: {}", s)),
        }
    }
}

/// One catalog entry: a lesson note, past question set, textbook or
/// curriculum document tied to a subject and an educational level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub subject_id: i64,
    pub educational_level_id: i64,
    #[serde(rename = "content_type")]
    pub kind: ResourceKind,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub is_downloadable: bool,
    #[serde(default)]
    pub file_url: Option<String>,
}

impl Faceted for Resource {
    const TEXT_FIELDS: &'static [&'static str] = &["title", "description"];

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::Number(self.id),
            "title" => FieldValue::Text(self.title.clone()),
            "description" => FieldValue::Text(self.description.clone()),
            "subject_id" => FieldValue::Number(self.subject_id),
            "educational_level_id" => FieldValue::Number(self.educational_level_id),
            "kind" => FieldValue::Text(self.kind.as_str().to_string()),
            "pages" => self
                .pages
                .map(|p| FieldValue::Number(i64::from(p)))
                .unwrap_or(FieldValue::Absent),
            _ => FieldValue::Absent,
        }
    }
}

/// The `assessment_type` field of the portal API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    MockExam,
    PracticeTest,
    Quiz,
    Assessment,
    PracticalExam,
    PrepTest,
    LicensureExam,
    AptitudeTest,
}

impl AssessmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentKind::MockExam => "mock_exam",
            AssessmentKind::PracticeTest => "practice_test",
            AssessmentKind::Quiz => "quiz",
            AssessmentKind::Assessment => "assessment",
            AssessmentKind::PracticalExam => "practical_exam",
            AssessmentKind::PrepTest => "prep_test",
            AssessmentKind::LicensureExam => "licensure_exam",
            AssessmentKind::AptitudeTest => "aptitude_test",
        }
    }
}

impl std::fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AssessmentKind::MockExam => "Mock Exam",
            AssessmentKind::PracticeTest => "Practice Test",
            AssessmentKind::Quiz => "Quiz",
            AssessmentKind::Assessment => "Assessment",
            AssessmentKind::PracticalExam => "Practical Exam",
            AssessmentKind::PrepTest => "Prep Test",
            AssessmentKind::LicensureExam => "Licensure Exam",
            AssessmentKind::AptitudeTest => "Aptitude Test",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for AssessmentKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "mock_exam" => Ok(AssessmentKind::MockExam),
            "practice_test" => Ok(AssessmentKind::PracticeTest),
            "quiz" => Ok(AssessmentKind::Quiz),
            "assessment" => Ok(AssessmentKind::Assessment),
            "practical_exam" => Ok(AssessmentKind::PracticalExam),
            "prep_test" => Ok(AssessmentKind::PrepTest),
            "licensure_exam" | "licensure" => Ok(AssessmentKind::LicensureExam),
            "aptitude_test" | "aptitude" => Ok(AssessmentKind::AptitudeTest),
            _ => Err(format!("unknown assessment kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("unknown difficulty: {}", s)),
        }
    }
}

/// A mock exam, quiz or licensure/aptitude test offered by the portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub subject_id: i64,
    pub educational_level_id: i64,
    #[serde(rename = "assessment_type")]
    pub kind: AssessmentKind,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub num_questions: Option<u32>,
    #[serde(default)]
    pub participants: u32,
    #[serde(default)]
    pub rating: f64,
}

impl Faceted for Assessment {
    const TEXT_FIELDS: &'static [&'static str] = &["title", "description"];

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::Number(self.id),
            "title" => FieldValue::Text(self.title.clone()),
            "description" => FieldValue::Text(self.description.clone()),
            "subject_id" => FieldValue::Number(self.subject_id),
            "educational_level_id" => FieldValue::Number(self.educational_level_id),
            "kind" => FieldValue::Text(self.kind.as_str().to_string()),
            "difficulty" => FieldValue::Text(self.difficulty.as_str().to_string()),
            "duration_minutes" => self
                .duration_minutes
                .map(|m| FieldValue::Number(i64::from(m)))
                .unwrap_or(FieldValue::Absent),
            "num_questions" => self
                .num_questions
                .map(|n| FieldValue::Number(i64::from(n)))
                .unwrap_or(FieldValue::Absent),
            "participants" => FieldValue::Number(i64::from(self.participants)),
            _ => FieldValue::Absent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        write!(f, "{}", label)
    }
}

/// An announcement from GES, WAEC or another education body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub category: String,
    pub source: String,
    pub priority: Priority,
    #[serde(default)]
    pub author: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

impl Faceted for NewsItem {
    const TEXT_FIELDS: &'static [&'static str] = &["title", "content"];

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::Number(self.id),
            "title" => FieldValue::Text(self.title.clone()),
            "content" => FieldValue::Text(self.content.clone()),
            "category" => FieldValue::Text(self.category.clone()),
            "source" => FieldValue::Text(self.source.clone()),
            "priority" => FieldValue::Text(self.priority.to_string()),
            "author" => FieldValue::Text(self.author.clone()),
            _ => FieldValue::Absent,
        }
    }
}

/// Accepts CLI spellings ("mock-exam", "Mock Exam") alongside wire names.
fn normalize_token(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', ' '], "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn resource_kind_roundtrip() {
        let json = serde_json::to_string(&ResourceKind::LessonNote).unwrap();
        assert_eq!(json, "\"lesson_note\"");
        let parsed: ResourceKind = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ResourceKind::LessonNote);
    }

    #[test]
    fn kind_parsing_accepts_cli_spellings() {
        assert_eq!(
            ResourceKind::from_str("lesson-note"),
            Ok(ResourceKind::LessonNote)
        );
        assert_eq!(
            AssessmentKind::from_str("Mock Exam"),
            Ok(AssessmentKind::MockExam)
        );
        assert_eq!(
            AssessmentKind::from_str("licensure"),
            Ok(AssessmentKind::LicensureExam)
        );
        assert!(AssessmentKind::from_str("homework").is_err());
    }

    #[test]
    fn resource_deserializes_with_missing_optional_fields() {
        let json = r#"{
            "id": 7,
            "title": "Algebra Basics",
            "subject_id": 1,
            "educational_level_id": 2,
            "content_type": "lesson_note"
        }"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.description, "");
        assert_eq!(resource.pages, None);
        assert!(!resource.is_downloadable);
    }

    #[test]
    fn unknown_field_is_absent() {
        let resource = Resource {
            id: 1,
            title: "T".into(),
            description: "".into(),
            subject_id: 1,
            educational_level_id: 1,
            kind: ResourceKind::Textbook,
            pages: None,
            is_downloadable: false,
            file_url: None,
        };
        assert_eq!(resource.field("nonexistent"), FieldValue::Absent);
        assert_eq!(resource.field("pages"), FieldValue::Absent);
    }
}
