// crates/engine/src/classify.rs
use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

/// Coarse content classification derived from a file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Doc,
    Python,
    TypeScript,
    JavaScript,
    Html,
    Json,
    Image,
    Pdf,
    Other,
}

impl FileKind {
    pub const ALL: [Self; 9] = [
        Self::Doc,
        Self::Python,
        Self::TypeScript,
        Self::JavaScript,
        Self::Html,
        Self::Json,
        Self::Image,
        Self::Pdf,
        Self::Other,
    ];

    /// Classifies `path` by its lowercased extension. Paths without a UTF-8
    /// extension are `Other`.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map_or(Self::Other, |ext| Self::from_extension(&ext.to_ascii_lowercase()))
    }

    /// Expects an already lowercased extension without the leading dot.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "md" | "txt" => Self::Doc,
            "py" => Self::Python,
            "ts" | "tsx" => Self::TypeScript,
            "js" | "jsx" => Self::JavaScript,
            "html" | "htm" => Self::Html,
            "json" => Self::Json,
            "png" | "jpg" | "jpeg" | "webp" | "gif" => Self::Image,
            "pdf" => Self::Pdf,
            _ => Self::Other,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Doc => "doc",
            Self::Python => "python",
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Html => "html",
            Self::Json => "json",
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown file kind: {s}"))
    }
}
