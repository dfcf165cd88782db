use super::model::isbn::Isbn;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("O livro com o ISBN '{0}' já está cadastrado.")]
    DuplicateIsbn(Isbn),
}
