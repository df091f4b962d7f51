//! File-backed provider reading a catalog snapshot from disk.
//!
//! The snapshot is a single `catalog.json` in the configured directory,
//! holding all five collections. The file is re-read on every call; snapshots
//! are small and this keeps the provider stateless.

use std::fs;
use std::path::{Path, PathBuf};

use super::{Catalog, ContentProvider};
use crate::error::{PortalError, Result};
use crate::model::{
    Assessment, AssessmentKind, EducationalLevel, NewsItem, Resource, ResourceKind, Subject,
};

const CATALOG_FILENAME: &str = "catalog.json";

pub struct FileProvider {
    root: PathBuf,
}

impl FileProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(CATALOG_FILENAME)
    }

    fn load(&self) -> Result<Catalog> {
        let path = self.catalog_path();
        if !path.exists() {
            return Err(PortalError::Catalog(format!(
                "no {} found in {}",
                CATALOG_FILENAME,
                self.root.display()
            )));
        }
        let content = fs::read_to_string(&path).map_err(PortalError::Io)?;
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(PortalError::Serialization)?;
        Ok(catalog)
    }

    /// Write a snapshot to the provider's directory, creating it if needed.
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(catalog).map_err(PortalError::Serialization)?;
        fs::write(self.catalog_path(), content).map_err(PortalError::Io)?;
        Ok(())
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(PortalError::Io)?;
    }
    Ok(())
}

impl ContentProvider for FileProvider {
    fn educational_levels(&self) -> Result<Vec<EducationalLevel>> {
        Ok(self.load()?.educational_levels)
    }

    fn subjects(&self) -> Result<Vec<Subject>> {
        Ok(self.load()?.subjects)
    }

    fn resources(&self, kind: Option<ResourceKind>) -> Result<Vec<Resource>> {
        let mut resources = self.load()?.resources;
        if let Some(kind) = kind {
            resources.retain(|r| r.kind == kind);
        }
        Ok(resources)
    }

    fn assessments(&self, kind: Option<AssessmentKind>) -> Result<Vec<Assessment>> {
        let mut assessments = self.load()?.assessments;
        if let Some(kind) = kind {
            assessments.retain(|a| a.kind == kind);
        }
        Ok(assessments)
    }

    fn news(&self) -> Result<Vec<NewsItem>> {
        Ok(self.load()?.news)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Subject;

    fn fixture_catalog() -> Catalog {
        Catalog {
            subjects: vec![
                Subject { id: 1, name: "Mathematics".into() },
                Subject { id: 2, name: "English".into() },
            ],
            ..Catalog::default()
        }
    }

    #[test]
    fn save_and_reload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileProvider::new(dir.path());
        provider.save(&fixture_catalog()).unwrap();

        let subjects = provider.subjects().unwrap();
        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0].name, "Mathematics");
    }

    #[test]
    fn missing_catalog_is_a_catalog_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileProvider::new(dir.path().join("empty"));
        let err = provider.subjects().unwrap_err();
        assert!(matches!(err, PortalError::Catalog(_)));
    }

    #[test]
    fn partial_catalog_defaults_missing_collections() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CATALOG_FILENAME),
            r#"{"subjects": [{"id": 1, "name": "ICT"}]}"#,
        )
        .unwrap();

        let provider = FileProvider::new(dir.path());
        assert_eq!(provider.subjects().unwrap().len(), 1);
        assert!(provider.news().unwrap().is_empty());
        assert!(provider.resources(None).unwrap().is_empty());
    }
}
