//! CSV case sources

use super::reader::parse_rows;
use crate::adapters::source::CaseSource;
use crate::core::normalize::RawCaseRow;
use crate::domain::{DatasetError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// CSV file read once from disk
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    name: String,
}

impl CsvFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CaseSource for CsvFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_rows(&self) -> Result<Vec<RawCaseRow>> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DatasetError::Read {
                source_name: self.name.clone(),
                message: e.to_string(),
            })?;
        Ok(parse_rows(&text)?)
    }
}

/// CSV held in memory
#[derive(Debug, Clone)]
pub struct CsvTextSource {
    name: String,
    text: String,
}

impl CsvTextSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[async_trait]
impl CaseSource for CsvTextSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_rows(&self) -> Result<Vec<RawCaseRow>> {
        Ok(parse_rows(&self.text)?)
    }
}
