use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 数値の書籍識別子。カタログ内で一意。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(u64);

impl Isbn {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIsbnError {
    #[error("empty ISBN")]
    Empty,
    #[error("ISBN is not a number: {0}")]
    NotNumeric(String),
}

impl FromStr for Isbn {
    type Err = ParseIsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseIsbnError::Empty);
        }
        // u64::from_str は先頭の '+' も受け付けてしまう
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseIsbnError::NotNumeric(s.to_string()));
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| ParseIsbnError::NotNumeric(s.to_string()))
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
