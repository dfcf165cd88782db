use std::fmt;

use serde::{Deserialize, Serialize};

/// 出版社。一覧にないものは `Other`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Publisher {
    #[serde(rename = "Arqueiro")]
    Arqueiro,
    #[serde(rename = "Companhia das Letras")]
    CompanhiaDasLetras,
    #[serde(rename = "DarkSide Books")]
    DarkSideBooks,
    #[serde(rename = "Intrínseca")]
    Intrinseca,
    #[serde(rename = "Outra")]
    Other,
}

impl Publisher {
    /// メニュー表示順
    pub const ALL: [Publisher; 5] = [
        Publisher::Arqueiro,
        Publisher::CompanhiaDasLetras,
        Publisher::DarkSideBooks,
        Publisher::Intrinseca,
        Publisher::Other,
    ];

    /// ファイル保存・メニュー表示用のラベル
    pub fn label(&self) -> &'static str {
        match self {
            Publisher::Arqueiro => "Arqueiro",
            Publisher::CompanhiaDasLetras => "Companhia das Letras",
            Publisher::DarkSideBooks => "DarkSide Books",
            Publisher::Intrinseca => "Intrínseca",
            Publisher::Other => "Outra",
        }
    }

    /// ラベルから検索（大文字小文字を区別しない）
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.label().to_lowercase() == label)
    }
}

impl fmt::Display for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_labels() {
        for publisher in Publisher::ALL {
            let json = serde_json::to_string(&publisher).unwrap();
            assert_eq!(json, format!("\"{}\"", publisher.label()));
            let back: Publisher = serde_json::from_str(&json).unwrap();
            assert_eq!(back, publisher);
        }
    }

    #[test]
    fn unknown_label_does_not_deserialize() {
        assert!(serde_json::from_str::<Publisher>("\"Rocco\"").is_err());
    }

    #[test]
    fn from_label_ignores_case() {
        assert_eq!(
            Publisher::from_label("companhia das letras"),
            Some(Publisher::CompanhiaDasLetras)
        );
        assert_eq!(Publisher::from_label("INTRÍNSECA"), Some(Publisher::Intrinseca));
        assert_eq!(Publisher::from_label("Rocco"), None);
    }
}
