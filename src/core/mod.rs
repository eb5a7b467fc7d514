pub mod derive;
pub mod engine;
pub mod generator;
pub mod matcher;

pub use crate::domain::model::{ContentModelMetadata, GeneratedFile, ItemType};
pub use crate::domain::ports::{
    FileStatus, Generator, MetadataSource, OutputSink, PathResolver, TemplateRenderer,
};
pub use crate::utils::error::Result;
