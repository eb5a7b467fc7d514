use crate::config::{GeneratorConfig, DEFAULT_EXTENSION, DEFAULT_ITEM_TYPE, DEFAULT_NAMESPACE};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "model-trait-gen")]
#[command(about = "Generates model metadata traits from a content model metadata document")]
pub struct CliConfig {
    #[arg(long, default_value = "content-model-metadata.json")]
    pub metadata: String,

    #[arg(
        long,
        default_value = DEFAULT_ITEM_TYPE,
        help = "Item type(s), e.g. 'post'; '*' matches one or more word characters, e.g. 'foo*'"
    )]
    pub item_type: String,

    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    #[arg(long, default_value = "./generated")]
    pub output_path: String,

    #[arg(long, help = "Directory with <name>.hbs templates overriding the built-ins")]
    pub template_dir: Option<String>,

    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    #[arg(long, help = "Show what would be written without touching the output directory")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            item_type: self.item_type.clone(),
            namespace: self.namespace.clone(),
            extension: self.extension.clone(),
            ..Default::default()
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("metadata", &self.metadata)?;
        validate_path("output_path", &self.output_path)?;
        if let Some(dir) = &self.template_dir {
            validate_path("template_dir", dir)?;
        }
        self.generator_config().validate()
    }
}
