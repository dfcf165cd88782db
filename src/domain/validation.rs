//! Field rules applied while collecting a record from the operator.

use std::fmt;

use super::model::isbn::{Isbn, ParseIsbnError};
use super::model::publisher::Publisher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    PageCount,
    Isbn,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "um título",
            Field::Author => "um autor",
            Field::PageCount => "um numero de paginas",
            Field::Isbn => "o ISBN do livro",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Por favor, digite {0}.")]
    Empty(Field),
    #[error("O ISBN deve ser um número.")]
    NotNumeric,
    #[error("Escolha uma editora de 1 a {}.", Publisher::ALL.len())]
    UnknownPublisher,
}

/// 前後の空白を除いた空でない文字列を返す。
pub fn require_text(field: Field, input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(trimmed.to_string())
}

pub fn parse_isbn(input: &str) -> Result<Isbn, ValidationError> {
    input.parse().map_err(|e| match e {
        ParseIsbnError::Empty => ValidationError::Empty(Field::Isbn),
        ParseIsbnError::NotNumeric(_) => ValidationError::NotNumeric,
    })
}

/// 1始まりのメニュー番号または出版社ラベルを受け付ける。
pub fn parse_publisher_choice(input: &str) -> Result<Publisher, ValidationError> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| Publisher::ALL.get(i).copied())
            .ok_or(ValidationError::UnknownPublisher);
    }
    Publisher::from_label(input).ok_or(ValidationError::UnknownPublisher)
}
