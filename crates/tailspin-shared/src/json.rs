//! JSON file loading shared by config and seed datasets

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Result, TailspinError};

/// Read and parse a JSON file, tagging errors with the path
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| TailspinError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| TailspinError::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}
