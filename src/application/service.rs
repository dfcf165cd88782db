use tracing::{debug, info, warn};

use crate::domain::model::book::BookRecord;
use crate::domain::model::collection::Collection;
use crate::domain::repository::{CatalogRepository, StoreFailure};

use super::error::PersistError;

/// カタログに対するユースケース。
/// load → append → save のパターンで操作する。
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// レコードを末尾に追加して保存する。
    /// ストア未作成なら空カタログ扱い。ISBN重複時は書き込まない。
    pub fn save_record(&self, record: BookRecord) -> Result<(), PersistError> {
        info!("Verificando banco de dados...");
        let mut collection = self.load_collection()?;
        debug!(records = collection.len(), "catalog loaded");

        let isbn = record.isbn();
        if let Err(e) = collection.append(record) {
            warn!(%isbn, "duplicate ISBN rejected");
            return Err(e.into());
        }

        self.persist(&collection)?;
        info!(%isbn, records = collection.len(), "catalog written");
        Ok(())
    }

    // --- private ---

    fn load_collection(&self) -> Result<Collection, PersistError> {
        Ok(self.repo.load().map_err(classify)?.unwrap_or_default())
    }

    fn persist(&self, collection: &Collection) -> Result<(), PersistError> {
        self.repo.save(collection).map_err(classify)
    }
}

fn classify<E: StoreFailure>(err: E) -> PersistError {
    if err.is_corrupt() {
        PersistError::CorruptStore(Box::new(err))
    } else {
        PersistError::IoFailure(Box::new(err))
    }
}
