//! Loading the exhibit and artefact datasets from disk

use serde::de::DeserializeOwned;

use super::FileLocator;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{Artefact, ArtefactEnvelope, Exhibit};

/// A decoded dataset file and the records it serves
pub trait Dataset: DeserializeOwned {
    type Record;

    fn into_records(self) -> Vec<Self::Record>;
}

impl Dataset for Vec<Exhibit> {
    type Record = Exhibit;

    fn into_records(self) -> Vec<Exhibit> {
        self
    }
}

impl Dataset for ArtefactEnvelope {
    type Record = Artefact;

    fn into_records(self) -> Vec<Artefact> {
        self.results
    }
}

/// Read-only access to both datasets.
///
/// Files are located, read and decoded again on every call, so edits on
/// disk are picked up by the next request.
#[derive(Debug, Clone)]
pub struct Catalog {
    locator: FileLocator,
    exhibits_file: String,
    artefacts_file: String,
}

impl Catalog {
    pub fn new(config: &Config) -> Self {
        Self {
            locator: FileLocator::new(config.data_dir.clone()),
            exhibits_file: config.exhibits_file.clone(),
            artefacts_file: config.artefacts_file.clone(),
        }
    }

    pub fn exhibits_file(&self) -> &str {
        &self.exhibits_file
    }

    pub fn artefacts_file(&self) -> &str {
        &self.artefacts_file
    }

    pub async fn load_exhibits(&self) -> Result<Vec<Exhibit>> {
        self.load_records::<Vec<Exhibit>>(&self.exhibits_file).await
    }

    pub async fn load_artefacts(&self) -> Result<Vec<Artefact>> {
        self.load_records::<ArtefactEnvelope>(&self.artefacts_file).await
    }

    /// Full artefact file including its pagination fields
    pub async fn load_envelope(&self) -> Result<ArtefactEnvelope> {
        self.load::<ArtefactEnvelope>(&self.artefacts_file).await
    }

    async fn load_records<D: Dataset>(&self, file: &str) -> Result<Vec<D::Record>> {
        Ok(self.load::<D>(file).await?.into_records())
    }

    async fn load<D: DeserializeOwned>(&self, file: &str) -> Result<D> {
        let path = self.locator.locate(file)?;

        let data = tokio::fs::read(&path).await.map_err(|source| Error::Read {
            file: file.to_string(),
            path: path.clone(),
            source,
        })?;

        serde_json::from_slice(&data).map_err(|source| Error::Decode {
            file: file.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn catalog_in(dir: &Path) -> Catalog {
        let config = Config {
            data_dir: Some(dir.to_path_buf()),
            exhibits_file: "heritage-test-exhibits.json".into(),
            artefacts_file: "heritage-test-artefacts.json".into(),
            ..Config::default()
        };
        Catalog::new(&config)
    }

    #[tokio::test]
    async fn test_load_exhibits_in_file_order() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("heritage-test-exhibits.json"),
            r#"[{"exhibit_id": 2}, {"exhibit_id": 1}]"#,
        )
        .unwrap();

        let exhibits = catalog_in(temp_dir.path()).load_exhibits().await.unwrap();
        let ids: Vec<i64> = exhibits.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_load_artefacts_unwraps_results() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("heritage-test-artefacts.json"),
            r#"{"count": 1, "next": "page2", "previous": null, "results": [{"objectNumber": "Q1.1"}]}"#,
        )
        .unwrap();

        let catalog = catalog_in(temp_dir.path());
        let artefacts = catalog.load_artefacts().await.unwrap();
        assert_eq!(artefacts.len(), 1);
        assert_eq!(artefacts[0].object_number, "Q1.1");

        let envelope = catalog.load_envelope().await.unwrap();
        assert_eq!(envelope.next.as_deref(), Some("page2"));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = catalog_in(temp_dir.path()).load_exhibits().await.unwrap_err();
        assert!(matches!(err, Error::DataFileNotFound { .. }));
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("heritage-test-exhibits.json"), "{ not json").unwrap();

        let err = catalog_in(temp_dir.path()).load_exhibits().await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert!(err.to_string().starts_with("Error parsing heritage-test-exhibits.json"));
    }
}
