//! `package.json` loading and rewriting
//!
//! The manifest is kept as an ordered JSON object so that rewriting the
//! `name` field leaves every other field, and the key order, as it was.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or saving a manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to access manifest file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Manifest is not a JSON object: {}", .0.display())]
    NotAnObject(PathBuf),
}

/// A parsed `package.json`
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl PackageManifest {
    /// Parse manifest content that was read from `path`
    pub fn parse(content: &str, path: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        let path = path.into();
        match serde_json::from_str::<Value>(content)? {
            Value::Object(fields) => Ok(Self { path, fields }),
            _ => Err(ManifestError::NotAnObject(path)),
        }
    }

    /// Read and parse the manifest at `path`
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        Self::parse(&content, path)
    }

    /// Write the manifest back to the file it was loaded from
    pub async fn save(&self) -> Result<(), ManifestError> {
        let content = self.to_json_string()?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Set the top-level `name` field, adding it if absent
    pub fn set_name(&mut self, name: &str) {
        self.fields
            .insert("name".to_string(), Value::String(name.to_string()));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Serialize as npm does: two-space indentation and a trailing newline
    pub fn to_json_string(&self) -> Result<String, ManifestError> {
        let mut content = serde_json::to_string_pretty(&self.fields)?;
        content.push('\n');
        Ok(content)
    }
}
