pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    HandlebarsRenderer, InMemoryMetadata, JsonFileMetadata, LocalStorage, NamespacePathResolver,
};
pub use config::GeneratorConfig;
pub use self::core::{
    engine::{GenerationEngine, GenerationSummary},
    generator::{TraitGenerator, TraitParams},
    matcher::{match_item_types, ItemTypePattern},
};
pub use utils::error::{GenError, Result};
