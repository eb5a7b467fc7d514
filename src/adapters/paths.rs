use crate::core::PathResolver;

/// Splits a namespace on `\`, `/`, `.` and `::`, dropping empty segments.
pub fn namespace_segments(namespace: &str) -> Vec<&str> {
    namespace
        .split(['\\', '/', '.', ':'])
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Maps `app\models\Foo` + `PostTrait` to `app/models/Foo/PostTrait.<ext>`.
#[derive(Debug, Clone)]
pub struct NamespacePathResolver {
    extension: String,
}

impl NamespacePathResolver {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }
}

impl PathResolver for NamespacePathResolver {
    fn resolve(&self, namespace: &str, trait_name: &str) -> String {
        let mut parts = namespace_segments(namespace);
        let file_name = format!("{}.{}", trait_name, self.extension);
        parts.push(&file_name);
        parts.join("/")
    }
}
