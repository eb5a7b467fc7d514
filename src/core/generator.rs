use crate::config::GeneratorConfig;
use crate::core::derive::{
    derive_flow_step_captions, derive_flow_steps, derive_hints, derive_labels,
    derive_status_requirements, Captions, Grouping,
};
use crate::core::matcher::ItemTypePattern;
use crate::core::{Generator, MetadataSource, PathResolver, TemplateRenderer};
use crate::domain::model::{GeneratedFile, ItemType};
use crate::utils::error::{GenError, Result};
use serde::Serialize;
use std::cell::OnceCell;

/// Parameters handed to the trait template for one item type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitParams<'a> {
    pub item_type: &'a ItemType,
    pub trait_name: String,
    pub namespace: &'a str,
    pub status_requirements: Grouping,
    pub flow_steps: Grouping,
    pub flow_step_captions: Captions,
    pub labels: Captions,
    pub hints: Captions,
}

impl<'a> TraitParams<'a> {
    pub fn derive(item_type: &'a ItemType, namespace: &'a str) -> Self {
        Self {
            item_type,
            trait_name: item_type.trait_name(),
            namespace,
            status_requirements: derive_status_requirements(item_type),
            flow_steps: derive_flow_steps(item_type),
            flow_step_captions: derive_flow_step_captions(item_type),
            labels: derive_labels(item_type),
            hints: derive_hints(item_type),
        }
    }
}

/// Renders one trait file per item type matching `config.item_type`.
///
/// The matching item types are resolved on first use and reused for the
/// lifetime of the generator, so build a new generator per run.
pub struct TraitGenerator<M, R, P> {
    config: GeneratorConfig,
    metadata: M,
    renderer: R,
    resolver: P,
    matched: OnceCell<Vec<ItemType>>,
}

impl<M, R, P> TraitGenerator<M, R, P>
where
    M: MetadataSource,
    R: TemplateRenderer,
    P: PathResolver,
{
    pub fn new(config: GeneratorConfig, metadata: M, renderer: R, resolver: P) -> Self {
        Self {
            config,
            metadata,
            renderer,
            resolver,
            matched: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn matching_item_types(&self) -> Result<&[ItemType]> {
        if let Some(cached) = self.matched.get() {
            return Ok(cached.as_slice());
        }
        let matched = self.find_matching_item_types()?;
        Ok(self.matched.get_or_init(|| matched).as_slice())
    }

    fn find_matching_item_types(&self) -> Result<Vec<ItemType>> {
        // 先編譯 pattern，無效的 pattern 不應被 metadata 缺失掩蓋
        let pattern = ItemTypePattern::compile(&self.config.item_type)?;

        let metadata = match self.metadata.load() {
            Ok(metadata) => metadata,
            Err(GenError::MetadataUnavailable { message }) => {
                tracing::warn!("Content model metadata unavailable: {}", message);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let matched: Vec<ItemType> = metadata
            .item_types
            .into_iter()
            .filter(|item_type| pattern.is_match(&item_type.model_class))
            .collect();

        tracing::debug!(
            "Pattern '{}' matched {} item type(s)",
            pattern.as_str(),
            matched.len()
        );
        Ok(matched)
    }

    fn generate_file(&self, item_type: &ItemType) -> Result<GeneratedFile> {
        let params = TraitParams::derive(item_type, &self.config.namespace);
        let path = self
            .resolver
            .resolve(&self.config.namespace, &params.trait_name);
        let value = serde_json::to_value(&params)?;
        let content = self.renderer.render(&self.config.template, &value)?;

        tracing::debug!("Rendered {} -> {}", params.trait_name, path);
        Ok(GeneratedFile { path, content })
    }
}

impl<M, R, P> Generator for TraitGenerator<M, R, P>
where
    M: MetadataSource,
    R: TemplateRenderer,
    P: PathResolver,
{
    /// Stops at the first render failure; files for later item types are not produced.
    fn generate(&self) -> Result<Vec<GeneratedFile>> {
        let item_types = self.matching_item_types()?;
        if item_types.is_empty() {
            tracing::warn!(
                "No item types match '{}', nothing to generate",
                self.config.item_type
            );
            return Ok(Vec::new());
        }

        item_types
            .iter()
            .map(|item_type| self.generate_file(item_type))
            .collect()
    }
}
