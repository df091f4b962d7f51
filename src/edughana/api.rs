//! # API Facade
//!
//! Thin facade over the command layer and single entry point for every
//! portal operation, regardless of the UI driving it.
//!
//! The facade dispatches to the right command and **normalizes inputs**:
//! raw facet selections arrive as strings (a select box value, a CLI flag)
//! and may spell an id (`"2"`), a subject name (`"Mathematics"`) or a level
//! slug (`"jhs"`). Normalization resolves all of them to numeric ids before
//! the filter engine ever sees them. Business logic stays in
//! `commands/*.rs`; presentation stays with the caller.
//!
//! `PortalApi<P: ContentProvider>` is generic over the provider, so the
//! same facade serves the built-in catalog, a file snapshot, and the
//! remote API, and tests run against `MemoryProvider` fixtures.

use std::str::FromStr;

use crate::commands;
use crate::commands::assessments::AssessmentQuery;
use crate::commands::news::NewsQuery;
use crate::commands::resources::ResourceQuery;
use crate::error::{PortalError, Result};
use crate::filter::FacetValue;
use crate::model::{AssessmentKind, Difficulty, ResourceKind};
use crate::store::ContentProvider;

pub struct PortalApi<P: ContentProvider> {
    provider: P,
}

/// Raw, optional facet selections as a UI hands them over.
#[derive(Debug, Clone, Default)]
pub struct Selections {
    pub search: Option<String>,
    pub subject: Option<String>,
    pub level: Option<String>,
}

impl<P: ContentProvider> PortalApi<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn levels(&self) -> Result<commands::CmdResult> {
        commands::levels::run(&self.provider)
    }

    pub fn subjects(&self) -> Result<commands::CmdResult> {
        commands::subjects::run(&self.provider)
    }

    pub fn resources(
        &self,
        selections: Selections,
        kind: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let query = ResourceQuery {
            search: selections.search.clone(),
            subject: self.resolve_subject(selections.subject.as_deref())?,
            level: self.resolve_level(selections.level.as_deref())?,
            kind: parse_kind::<ResourceKind>(kind)?,
        };
        commands::resources::run(&self.provider, query)
    }

    pub fn assessments(
        &self,
        selections: Selections,
        kind: Option<&str>,
        difficulty: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let query = AssessmentQuery {
            search: selections.search.clone(),
            subject: self.resolve_subject(selections.subject.as_deref())?,
            level: self.resolve_level(selections.level.as_deref())?,
            kind: parse_kind::<AssessmentKind>(kind)?,
            difficulty: parse_kind::<Difficulty>(difficulty)?,
        };
        commands::assessments::run(&self.provider, query)
    }

    pub fn news(
        &self,
        search: Option<String>,
        category: Option<String>,
        source: Option<String>,
        featured_only: bool,
    ) -> Result<commands::CmdResult> {
        let query = NewsQuery {
            search,
            category,
            source,
            featured_only,
        };
        commands::news::run(&self.provider, query)
    }

    /// Resolve a subject selection: numeric input is taken as an id,
    /// anything else is matched against subject names (case-insensitive).
    fn resolve_subject(&self, raw: Option<&str>) -> Result<Option<FacetValue>> {
        let Some(raw) = non_blank(raw) else {
            return Ok(None);
        };
        if let Ok(id) = raw.parse::<i64>() {
            return Ok(Some(FacetValue::Id(id)));
        }
        let subjects = self.provider.subjects()?;
        subjects
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(raw))
            .map(|s| Some(FacetValue::Id(s.id)))
            .ok_or_else(|| PortalError::InvalidSelection(format!("unknown subject: {}", raw)))
    }

    /// Resolve a level selection by id, name, or slug.
    fn resolve_level(&self, raw: Option<&str>) -> Result<Option<FacetValue>> {
        let Some(raw) = non_blank(raw) else {
            return Ok(None);
        };
        if let Ok(id) = raw.parse::<i64>() {
            return Ok(Some(FacetValue::Id(id)));
        }
        let levels = self.provider.educational_levels()?;
        levels
            .iter()
            .find(|l| l.name.eq_ignore_ascii_case(raw) || l.slug.eq_ignore_ascii_case(raw))
            .map(|l| Some(FacetValue::Id(l.id)))
            .ok_or_else(|| PortalError::InvalidSelection(format!("unknown level: {}", raw)))
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_kind<T>(raw: Option<&str>) -> Result<Option<T>>
where
    T: FromStr<Err = String>,
{
    match non_blank(raw) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(PortalError::InvalidSelection),
    }
}


pub use crate::commands::config::ConfigAction;
pub use crate::commands::{AssessmentView, CmdMessage, CmdResult, MessageLevel, ResourceView};
