//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use book_inventory::application::service::CatalogService;
use book_inventory::domain::model::book::{BookRecord, PageCount};
use book_inventory::domain::model::collection::Collection;
use book_inventory::domain::model::isbn::Isbn;
use book_inventory::domain::model::publisher::Publisher;
use book_inventory::domain::repository::{CatalogRepository, StoreFailure};

// =============================================================================
// InMemoryRepo — ファイルI/O不要のテスト用リポジトリ
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("in-memory store error")]
pub struct InMemoryError;

impl StoreFailure for InMemoryError {
    fn is_corrupt(&self) -> bool {
        false
    }
}

/// シリアライズ済みカタログをメモリに保持し、書き込み回数を数える。
pub struct InMemoryRepo {
    stored: RefCell<Option<String>>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            stored: RefCell::new(None),
            saves: Cell::new(0),
            fail_saves: Cell::new(false),
        }
    }

    /// 以降のsaveを全て失敗させる。
    pub fn fail_saves(&self) {
        self.fail_saves.set(true);
    }

    pub fn with_collection(collection: &Collection) -> Self {
        let repo = Self::new();
        *repo.stored.borrow_mut() = Some(serde_json::to_string(collection).unwrap());
        repo
    }

    pub fn snapshot(&self) -> Option<Collection> {
        self.stored
            .borrow()
            .as_ref()
            .map(|json| serde_json::from_str(json).unwrap())
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl CatalogRepository for InMemoryRepo {
    type Error = InMemoryError;

    fn load(&self) -> Result<Option<Collection>, Self::Error> {
        Ok(self.snapshot())
    }

    fn save(&self, collection: &Collection) -> Result<(), Self::Error> {
        if self.fail_saves.get() {
            return Err(InMemoryError);
        }
        let json = serde_json::to_string(collection).unwrap();
        *self.stored.borrow_mut() = Some(json);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

pub fn service_with(collection: &Collection) -> CatalogService<InMemoryRepo> {
    CatalogService::new(InMemoryRepo::with_collection(collection))
}

// =============================================================================
// Sample records — テスト用レコード
// =============================================================================

pub const DUNE_ISBN: u64 = 9780441013593;

pub fn dune() -> BookRecord {
    BookRecord::new(
        "Dune",
        "Frank Herbert",
        PageCount::text("412"),
        Publisher::Other,
        Isbn::new(DUNE_ISBN),
    )
}

pub fn record(title: &str, isbn: u64) -> BookRecord {
    BookRecord::new(
        title,
        "Autor Teste",
        PageCount::text("200"),
        Publisher::Intrinseca,
        Isbn::new(isbn),
    )
}

pub fn collection_of(records: impl IntoIterator<Item = BookRecord>) -> Collection {
    let mut collection = Collection::new();
    for r in records {
        collection.append(r).unwrap();
    }
    collection
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// 結果がErrで、メッセージに指定文字列を含むことをassert。
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}
