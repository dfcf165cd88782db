use crate::domain::error::DomainError;
use crate::domain::model::isbn::Isbn;

/// 保存失敗の種別。書き込み中の `IoFailure` 以外はストアを変更しない。
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("O livro com o ISBN '{0}' já está cadastrado.")]
    DuplicateIsbn(Isbn),

    #[error("falha de E/S no banco de dados: {0}")]
    IoFailure(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("banco de dados corrompido: {0}")]
    CorruptStore(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<DomainError> for PersistError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::DuplicateIsbn(isbn) => PersistError::DuplicateIsbn(isbn),
        }
    }
}
