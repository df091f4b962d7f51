//! # Provider Layer
//!
//! This module defines the data-source abstraction for the portal catalog.
//! The [`ContentProvider`] trait lets the command layer work against
//! different backends without knowing how records are obtained.
//!
//! ## Implementations
//!
//! - [`memory::MemoryProvider`]: in-memory catalog. `seeded()` ships the
//!   built-in demo catalog so the CLI works offline; tests build their own
//!   fixtures.
//! - [`fs::FileProvider`]: reads a `catalog.json` snapshot from a directory.
//! - [`http::HttpProvider`]: the live portal REST API, with an explicit
//!   [`crate::session::Session`] supplying the bearer token.
//!
//! ## Filtering split
//!
//! Providers narrow by content kind only (the one parameter the portal API
//! itself accepts); everything else (text query, subject, level, difficulty,
//! category) is applied client-side by [`crate::filter::Criteria`] in the
//! command layer. Provider results keep the backend's ordering; the filter
//! engine preserves it.

use crate::error::Result;
use crate::model::{
    Assessment, AssessmentKind, EducationalLevel, NewsItem, Resource, ResourceKind, Subject,
};

pub mod fs;
pub mod http;
pub mod memory;

/// Abstract interface for fetching catalog collections.
pub trait ContentProvider {
    /// All educational levels, in display order.
    fn educational_levels(&self) -> Result<Vec<EducationalLevel>>;

    /// All subjects, in display order.
    fn subjects(&self) -> Result<Vec<Subject>>;

    /// Content resources, optionally narrowed to one kind.
    fn resources(&self, kind: Option<ResourceKind>) -> Result<Vec<Resource>>;

    /// Assessments, optionally narrowed to one kind.
    fn assessments(&self, kind: Option<AssessmentKind>) -> Result<Vec<Assessment>>;

    /// All news items, newest first as supplied by the backend.
    fn news(&self) -> Result<Vec<NewsItem>>;

    /// Featured news only. Backends with a dedicated endpoint override this.
    fn featured_news(&self) -> Result<Vec<NewsItem>> {
        Ok(self
            .news()?
            .into_iter()
            .filter(|item| item.is_featured)
            .collect())
    }
}

/// One complete catalog snapshot, the unit both the file provider and the
/// in-memory provider work with.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub educational_levels: Vec<EducationalLevel>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub assessments: Vec<Assessment>,
    #[serde(default)]
    pub news: Vec<NewsItem>,
}
