use clap::Parser;
use model_trait_gen::core::FileStatus;
use model_trait_gen::utils::error::ErrorSeverity;
use model_trait_gen::utils::{logger, validation::Validate};
use model_trait_gen::{
    CliConfig, GenError, GenerationEngine, GenerationSummary, HandlebarsRenderer,
    JsonFileMetadata, LocalStorage, NamespacePathResolver, TraitGenerator,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting model-trait-gen");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(&config) {
        Ok(summary) => {
            print_summary(&summary);
            if summary.is_empty() {
                println!("⚠️ No item types matched '{}'", config.item_type);
            }
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn run(config: &CliConfig) -> model_trait_gen::Result<GenerationSummary> {
    let renderer = match &config.template_dir {
        Some(dir) => HandlebarsRenderer::with_template_dir(dir)?,
        None => HandlebarsRenderer::new()?,
    };

    let generator = TraitGenerator::new(
        config.generator_config(),
        JsonFileMetadata::new(&config.metadata),
        renderer,
        NamespacePathResolver::new(config.extension.clone()),
    );
    let storage = LocalStorage::new(config.output_path.clone());

    GenerationEngine::new(generator, storage).run(config.dry_run)
}

fn print_summary(summary: &GenerationSummary) {
    for (file, status) in &summary.files {
        let marker = match status {
            FileStatus::Created => "created",
            FileStatus::Overwritten => "overwritten",
            FileStatus::Unchanged => "unchanged",
        };
        println!("  [{}] {}", marker, file.path);
    }

    let verb = if summary.dry_run { "would be written" } else { "written" };
    println!(
        "✅ {} created, {} overwritten, {} unchanged ({})",
        summary.count(FileStatus::Created),
        summary.count(FileStatus::Overwritten),
        summary.count(FileStatus::Unchanged),
        verb
    );
}

fn exit_with(e: GenError) -> ! {
    tracing::error!(
        "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
