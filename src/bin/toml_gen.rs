use clap::Parser;
use model_trait_gen::config::toml_config::TomlConfig;
use model_trait_gen::core::{FileStatus, MetadataSource};
use model_trait_gen::utils::error::ErrorSeverity;
use model_trait_gen::utils::{logger, validation::Validate};
use model_trait_gen::{
    match_item_types, GenerationEngine, HandlebarsRenderer, JsonFileMetadata, LocalStorage,
    NamespacePathResolver, TraitGenerator,
};

#[derive(Parser)]
#[command(name = "toml-gen")]
#[command(about = "Model trait generator driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "trait-gen.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the item type pattern from config
    #[arg(long)]
    item_type: Option<String>,

    /// Dry run - show which files would change without writing them
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(item_type) = args.item_type {
        tracing::info!("🔧 Item type overridden to: {}", item_type);
        config.generator.item_type = item_type;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let dry_run = args.dry_run || config.is_dry_run();
    display_config_summary(&config, dry_run);

    if dry_run {
        show_matching_item_types(&config)?;
    }

    let renderer = match config.template_dir() {
        Some(dir) => HandlebarsRenderer::with_template_dir(dir)?,
        None => HandlebarsRenderer::new()?,
    };
    let generator = TraitGenerator::new(
        config.generator.clone(),
        JsonFileMetadata::new(config.metadata_path()),
        renderer,
        NamespacePathResolver::new(config.generator.extension.clone()),
    );
    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = GenerationEngine::new(generator, storage);

    match engine.run(dry_run) {
        Ok(summary) => {
            for (file, status) in &summary.files {
                println!("  {:?}: {}", status, file.path);
            }
            println!(
                "✅ Done: {} created, {} overwritten, {} unchanged",
                summary.count(FileStatus::Created),
                summary.count(FileStatus::Overwritten),
                summary.count(FileStatus::Unchanged)
            );
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, dry_run: bool) {
    println!("📋 Configuration Summary:");
    println!("  Item type: {}", config.generator.item_type);
    println!("  Namespace: {}", config.generator.namespace);
    println!("  Template: {}", config.generator.template);
    println!("  Metadata: {}", config.metadata_path());
    println!("  Output: {}", config.output_path());
    if let Some(dir) = config.template_dir() {
        println!("  Template dir: {}", dir);
    }
    if dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }
    println!();
}

fn show_matching_item_types(config: &TomlConfig) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = match JsonFileMetadata::new(config.metadata_path()).load() {
        Ok(metadata) => metadata,
        Err(e) => {
            println!("⚠️ {}", e);
            return Ok(());
        }
    };

    let matched = match_item_types(&metadata, &config.generator.item_type)?;
    println!(
        "🔎 {} of {} item type(s) match '{}':",
        matched.len(),
        metadata.item_types.len(),
        config.generator.item_type
    );
    for item_type in matched {
        println!(
            "  {} ({} attributes) -> {}",
            item_type.model_class,
            item_type.attributes.len(),
            item_type.trait_name()
        );
    }
    println!();
    Ok(())
}
