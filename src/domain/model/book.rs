use std::fmt;

use serde::{Deserialize, Serialize};

use super::isbn::Isbn;
use super::publisher::Publisher;

/// 入力されたページ数。自由記述として保持する。
/// 既存ファイルのJSON数値（小数・負数を含む）はそのまま読み書きする。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageCount {
    Number(serde_json::Number),
    Text(String),
}

impl PageCount {
    pub fn text(value: impl Into<String>) -> Self {
        PageCount::Text(value.into())
    }
}

impl fmt::Display for PageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageCount::Number(n) => write!(f, "{n}"),
            PageCount::Text(s) => f.write_str(s),
        }
    }
}

/// カタログの1件。フィールド名はファイル形式に合わせる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    #[serde(rename = "titulo")]
    title: String,
    #[serde(rename = "autor")]
    author: String,
    #[serde(rename = "paginas")]
    page_count: PageCount,
    #[serde(rename = "editora")]
    publisher: Publisher,
    isbn: Isbn,
}

impl BookRecord {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        page_count: PageCount,
        publisher: Publisher,
        isbn: Isbn,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            page_count,
            publisher,
            isbn,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn page_count(&self) -> &PageCount {
        &self.page_count
    }

    pub fn publisher(&self) -> Publisher {
        self.publisher
    }

    pub fn isbn(&self) -> Isbn {
        self.isbn
    }
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Título:  {}", self.title)?;
        writeln!(f, "Autor:   {}", self.author)?;
        writeln!(f, "Páginas: {}", self.page_count)?;
        writeln!(f, "Editora: {}", self.publisher)?;
        write!(f, "ISBN:    {}", self.isbn)
    }
}
