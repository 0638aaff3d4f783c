mod store;

pub use store::{load, parse, save};
#[cfg(test)]
pub use store::to_json;

use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::reference::ExamplePair;

pub const TERM_KEY: &str = "term";
pub const EXAMPLE_KEY: &str = "example";
pub const EXAMPLE_CHINESE_KEY: &str = "exampleChinese";

/// Errors raised while reading, validating or writing a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("expected a JSON array of term records in {}", .path.display())]
    NotArray { path: PathBuf },

    #[error("record {index} in {} is not a JSON object", .path.display())]
    NotObject { path: PathBuf, index: usize },

    #[error("record {index} has no \"term\" field")]
    MissingTerm { index: usize },

    #[error("record {index} has a non-string \"term\" field")]
    TermNotString { index: usize },

    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(
        "{changed} record(s) are missing up-to-date examples; run without --check to update"
    )]
    Stale { changed: usize },
}

/// One catalog entry. Holds every field of the source object in its original
/// order; only `example` and `exampleChinese` are ever written.
///
/// Construction guarantees `term` is present and a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TermRecord {
    fields: Map<String, Value>,
}

impl TermRecord {
    /// Validate one element of the catalog array.
    pub(crate) fn from_fields(
        index: usize,
        fields: Map<String, Value>,
    ) -> Result<Self, CatalogError> {
        match fields.get(TERM_KEY) {
            None => Err(CatalogError::MissingTerm { index }),
            Some(Value::String(_)) => Ok(Self { fields }),
            Some(_) => Err(CatalogError::TermNotString { index }),
        }
    }

    pub fn term(&self) -> &str {
        self.fields
            .get(TERM_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn example(&self) -> Option<&str> {
        self.fields.get(EXAMPLE_KEY).and_then(Value::as_str)
    }

    pub fn example_chinese(&self) -> Option<&str> {
        self.fields.get(EXAMPLE_CHINESE_KEY).and_then(Value::as_str)
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Overwrite both example fields. Existing keys keep their position,
    /// missing ones are appended. Returns whether anything changed.
    pub fn set_examples(&mut self, pair: ExamplePair) -> bool {
        let changed =
            self.example() != Some(pair.english) || self.example_chinese() != Some(pair.chinese);
        self.fields
            .insert(EXAMPLE_KEY.to_string(), Value::from(pair.english));
        self.fields
            .insert(EXAMPLE_CHINESE_KEY.to_string(), Value::from(pair.chinese));
        changed
    }
}
