//! JSON fixture reader.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use petcheck_application::ports::{DataStoreError, DatasetReader};
use petcheck_domain::{Dataset, PetEntity};
use tokio::fs;
use tracing::debug;

use crate::serialization::from_json_bytes;

/// Reads the inventory baseline from a JSON file holding an array of
/// entity records.
///
/// The file is re-read on every call so each snapshot reflects what the
/// service has written since the previous one.
#[derive(Debug, Clone)]
pub struct JsonFixtureReader {
    path: PathBuf,
}

impl JsonFixtureReader {
    /// Creates a reader over the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the fixture file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

impl DatasetReader for JsonFixtureReader {
    async fn read_dataset(&self) -> Result<Dataset, DataStoreError> {
        let bytes = fs::read(&self.path).await.map_err(|e| {
            let message = match e.kind() {
                ErrorKind::NotFound => "file not found".to_string(),
                ErrorKind::PermissionDenied => "permission denied".to_string(),
                _ => e.to_string(),
            };
            DataStoreError::Unreadable {
                location: self.location(),
                message,
            }
        })?;

        let pets: Vec<PetEntity> =
            from_json_bytes(&bytes).map_err(|e| DataStoreError::Malformed {
                location: self.location(),
                message: e.to_string(),
            })?;

        let dataset = Dataset::new(pets)?;
        debug!(path = %self.path.display(), pets = dataset.len(), "dataset captured");
        Ok(dataset)
    }
}
