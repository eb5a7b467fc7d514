use crate::domain::model::{ContentModelMetadata, GeneratedFile};
use crate::utils::error::Result;
use serde::Serialize;

pub trait MetadataSource {
    /// Fails with `GenError::MetadataUnavailable` when there is no document to read.
    fn load(&self) -> Result<ContentModelMetadata>;
}

pub trait TemplateRenderer {
    fn render(&self, template_id: &str, params: &serde_json::Value) -> Result<String>;
}

pub trait PathResolver {
    fn resolve(&self, namespace: &str, trait_name: &str) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileStatus {
    Created,
    Overwritten,
    Unchanged,
}

pub trait OutputSink {
    fn write(&self, file: &GeneratedFile) -> Result<FileStatus>;

    /// Status the file would get, without touching the filesystem.
    fn preview(&self, file: &GeneratedFile) -> Result<FileStatus>;
}

/// Produces the full set of files for one run.
pub trait Generator {
    fn generate(&self) -> Result<Vec<GeneratedFile>>;
}

impl<T: MetadataSource + ?Sized> MetadataSource for &T {
    fn load(&self) -> Result<ContentModelMetadata> {
        (**self).load()
    }
}

impl<T: TemplateRenderer + ?Sized> TemplateRenderer for &T {
    fn render(&self, template_id: &str, params: &serde_json::Value) -> Result<String> {
        (**self).render(template_id, params)
    }
}

impl<T: PathResolver + ?Sized> PathResolver for &T {
    fn resolve(&self, namespace: &str, trait_name: &str) -> String {
        (**self).resolve(namespace, trait_name)
    }
}

impl<T: OutputSink + ?Sized> OutputSink for &T {
    fn write(&self, file: &GeneratedFile) -> Result<FileStatus> {
        (**self).write(file)
    }

    fn preview(&self, file: &GeneratedFile) -> Result<FileStatus> {
        (**self).preview(file)
    }
}
