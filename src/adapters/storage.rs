use crate::core::{FileStatus, GeneratedFile, OutputSink};
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes generated files below `base_path`, skipping files whose content is unchanged.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }

    fn status_of(full_path: &Path, content: &str) -> Result<FileStatus> {
        if !full_path.exists() {
            return Ok(FileStatus::Created);
        }
        let existing = fs::read(full_path)?;
        if existing == content.as_bytes() {
            Ok(FileStatus::Unchanged)
        } else {
            Ok(FileStatus::Overwritten)
        }
    }
}

impl OutputSink for LocalStorage {
    fn write(&self, file: &GeneratedFile) -> Result<FileStatus> {
        let full_path = self.full_path(&file.path);
        let status = Self::status_of(&full_path, &file.content)?;
        if status == FileStatus::Unchanged {
            return Ok(status);
        }

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, &file.content)?;
        Ok(status)
    }

    fn preview(&self, file: &GeneratedFile) -> Result<FileStatus> {
        Self::status_of(&self.full_path(&file.path), &file.content)
    }
}
