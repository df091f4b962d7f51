use crate::config::PortalConfig;
use crate::model::{Assessment, EducationalLevel, NewsItem, Resource, Subject};

pub mod assessments;
pub mod config;
pub mod levels;
pub mod news;
pub mod resources;
pub mod subjects;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A resource together with its resolved subject and level labels.
#[derive(Debug, Clone)]
pub struct ResourceView {
    pub resource: Resource,
    pub subject: String,
    pub level: String,
}

/// An assessment together with its resolved subject and level labels.
#[derive(Debug, Clone)]
pub struct AssessmentView {
    pub assessment: Assessment,
    pub subject: String,
    pub level: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub levels: Vec<EducationalLevel>,
    pub subjects: Vec<Subject>,
    pub resources: Vec<ResourceView>,
    pub assessments: Vec<AssessmentView>,
    pub news: Vec<NewsItem>,
    pub config: Option<PortalConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_levels(mut self, levels: Vec<EducationalLevel>) -> Self {
        self.levels = levels;
        self
    }

    pub fn with_subjects(mut self, subjects: Vec<Subject>) -> Self {
        self.subjects = subjects;
        self
    }

    pub fn with_resources(mut self, resources: Vec<ResourceView>) -> Self {
        self.resources = resources;
        self
    }

    pub fn with_assessments(mut self, assessments: Vec<AssessmentView>) -> Self {
        self.assessments = assessments;
        self
    }

    pub fn with_news(mut self, news: Vec<NewsItem>) -> Self {
        self.news = news;
        self
    }

    pub fn with_config(mut self, config: PortalConfig) -> Self {
        self.config = Some(config);
        self
    }
}
