use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::model::collection::Collection;
use crate::domain::repository::{CatalogRepository, StoreFailure};

#[derive(Debug, thiserror::Error)]
pub enum JsonStoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a valid catalog: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not serialize catalog: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreFailure for JsonStoreError {
    fn is_corrupt(&self) -> bool {
        matches!(self, JsonStoreError::Corrupt { .. })
    }
}

/// JSONファイルによるCatalogRepository実装。
/// カタログ全体 = 1つのJSON配列ファイル。
pub struct JsonCatalogRepository {
    path: PathBuf,
}

impl JsonCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 書き込み用一時ファイル（`<store>.tmp`）
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: std::io::Error) -> JsonStoreError {
        JsonStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CatalogRepository for JsonCatalogRepository {
    type Error = JsonStoreError;

    fn load(&self) -> Result<Option<Collection>, Self::Error> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        let collection: Collection =
            serde_json::from_str(&content).map_err(|source| JsonStoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(collection))
    }

    fn save(&self, collection: &Collection) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let content = serde_json::to_string_pretty(collection).map_err(JsonStoreError::Serialize)?;
        let tmp = self.tmp_path();
        std::fs::write(&tmp, &content).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;
        Ok(())
    }
}
