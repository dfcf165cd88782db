use serde::{Deserialize, Serialize};

use super::book::BookRecord;
use super::isbn::Isbn;
use crate::domain::error::DomainError;

/// カタログ全体（挿入順）— 集約ルート。
/// レコード追加は必ず [`Collection::append`] を経由し、ISBNの一意性を保つ。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    records: Vec<BookRecord>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_isbn(&self, isbn: Isbn) -> bool {
        self.records.iter().any(|r| r.isbn() == isbn)
    }

    /// 末尾に追加。ISBN重複ならコレクションを変更せずにエラー。
    pub fn append(&mut self, record: BookRecord) -> Result<(), DomainError> {
        if self.contains_isbn(record.isbn()) {
            return Err(DomainError::DuplicateIsbn(record.isbn()));
        }
        self.records.push(record);
        Ok(())
    }
}
