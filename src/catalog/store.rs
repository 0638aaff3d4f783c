use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use super::{CatalogError, TermRecord};

/// Read and validate the whole catalog. Nothing is written on failure.
pub fn load(path: &Path) -> Result<Vec<TermRecord>, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse(path, &text)?;
    debug!(path = %path.display(), records = records.len(), "catalog loaded");
    Ok(records)
}

/// Parse catalog text. `path` is only used for error messages.
pub fn parse(path: &Path, text: &str) -> Result<Vec<TermRecord>, CatalogError> {
    let value: Value = serde_json::from_str(text).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Array(items) = value else {
        return Err(CatalogError::NotArray {
            path: path.to_path_buf(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => TermRecord::from_fields(index, fields),
            _ => Err(CatalogError::NotObject {
                path: path.to_path_buf(),
                index,
            }),
        })
        .collect()
}

/// Pretty-print the catalog with `indent` spaces per level.
/// Non-ASCII text is emitted literally.
pub fn to_json(records: &[TermRecord], indent: usize) -> Result<String, CatalogError> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Serialize, then replace `path` atomically.
pub fn save(path: &Path, records: &[TermRecord], indent: usize) -> Result<(), CatalogError> {
    let json = to_json(records, indent)?;
    write_atomic(path, json.as_bytes()).map_err(|source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = json.len(), "catalog saved");
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent() {
        fs::create_dir_all(parent)?;
    }

    if let Err(e) = write_tmp(&tmp, path, bytes).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    Ok(())
}

/// Write and flush the replacement, carrying over the target's permissions.
fn write_tmp(tmp: &Path, target: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(bytes)?;
    if let Ok(meta) = fs::metadata(target) {
        file.set_permissions(meta.permissions())?;
    }
    file.sync_all()
}

fn tmp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("catalog.json");
    path.with_file_name(format!(".{file_name}.tmp"))
}
