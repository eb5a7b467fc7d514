// Adapters layer: concrete implementations of the domain ports.

pub mod metadata;
pub mod paths;
pub mod storage;
pub mod template;

pub use metadata::{InMemoryMetadata, JsonFileMetadata};
pub use paths::NamespacePathResolver;
pub use storage::LocalStorage;
pub use template::HandlebarsRenderer;
