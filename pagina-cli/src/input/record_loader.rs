//! Turning input files into source records

use super::FileReader;
use crate::error::CliError;
use anyhow::{Context, Result};
use pagina_core::{records_from_response, response::slugify, SourceRecord};
use std::path::Path;

/// How plain text inputs obtain titles and locators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocatorSource {
    /// Treat the text as a provider response to this query
    Query(String),
    /// One record per file, located under this base URL
    BaseUrl(String),
    /// Plain text is rejected; only JSON records are accepted
    None,
}

/// Loads records from JSON record files or plain text files
#[derive(Debug, Clone)]
pub struct RecordLoader {
    source: LocatorSource,
}

impl RecordLoader {
    /// Create a loader
    pub fn new(source: LocatorSource) -> Self {
        Self { source }
    }

    /// Load all records from one file
    pub fn load(&self, path: &Path) -> Result<Vec<SourceRecord>> {
        let content = FileReader::read_text(path)?;

        if FileReader::is_json(path) {
            return serde_json::from_str(&content)
                .with_context(|| format!("Invalid record file: {}", path.display()));
        }

        match &self.source {
            LocatorSource::Query(query) => Ok(records_from_response(query, &content)),
            LocatorSource::BaseUrl(base) => {
                let stem = path
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or("document");
                let identifier = format!("{}/{}", base.trim_end_matches('/'), slugify(stem));
                Ok(vec![SourceRecord::new(stem, identifier, content)])
            }
            LocatorSource::None => {
                Err(CliError::MissingLocatorSource(path.display().to_string()).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.json");
        fs::write(
            &path,
            r#"[{"title":"T","identifier":"https://h/p","body":"Body."}]"#,
        )
        .unwrap();

        let records = RecordLoader::new(LocatorSource::None).load(&path).unwrap();
        assert_eq!(records, vec![SourceRecord::new("T", "https://h/p", "Body.")]);
    }

    #[test]
    fn test_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let err = RecordLoader::new(LocatorSource::None).load(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid record file"));
    }

    #[test]
    fn test_text_with_base_url() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Release Notes.txt");
        fs::write(&path, "Everything changed.").unwrap();

        let loader = RecordLoader::new(LocatorSource::BaseUrl("https://docs.example.com/".into()));
        let records = loader.load(&path).unwrap();
        assert_eq!(records[0].title, "Release Notes");
        assert_eq!(
            records[0].identifier,
            "https://docs.example.com/release-notes"
        );
    }

    #[test]
    fn test_text_with_query() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("answer.txt");
        fs::write(&path, "Overview paragraph.\n\nDetail paragraph here.").unwrap();

        let loader = RecordLoader::new(LocatorSource::Query("rust".into()));
        let records = loader.load(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Rust - Overview");
    }

    #[test]
    fn test_text_without_locator_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "Text.").unwrap();

        let err = RecordLoader::new(LocatorSource::None).load(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::MissingLocatorSource(_))
        ));
    }
}
