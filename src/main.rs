use clap::Parser;
use collection_merge::core::ConfigProvider;
use collection_merge::utils::{logger, validation::Validate};
use collection_merge::{
    CliConfig, CollectionMerger, LocalStorage, MergeEngine, MergeError, MergeProfile,
    TemplateConfig,
};

const RULE: &str = "============================================================";

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    println!("{}", RULE);
    println!("CharacterNetwork Postman Collection merge tool");
    println!("{}", RULE);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let template = match load_template(&config) {
        Ok(template) => template,
        Err(e) => exit_with(&e),
    };

    let merger = CollectionMerger::new(LocalStorage::new("."), MergeProfile::Full)
        .with_input_dir(config.input_dir())
        .with_template(template);
    let engine = MergeEngine::new(merger, config.output_path());

    match engine.run() {
        Ok(summary) => {
            println!("✓ Collection saved to: {}", summary.output_path.display());
            println!("{}", summary.stats);

            if !summary.failed.is_empty() || !summary.without_folder.is_empty() {
                println!(
                    "⚠ Skipped {} of {} module files ({} unreadable, {} without folder)",
                    summary.failed.len() + summary.without_folder.len(),
                    summary.discovered,
                    summary.failed.len(),
                    summary.without_folder.len()
                );
            }

            println!();
            println!("{}", RULE);
            println!("✓ Collection merge complete!");
            println!("✓ Ready to import into Postman");
            println!("{}", RULE);
        }
        Err(e) => exit_with(&e),
    }
}

fn load_template(config: &CliConfig) -> collection_merge::Result<TemplateConfig> {
    let Some(path) = config.template_path() else {
        return Ok(TemplateConfig::full());
    };

    tracing::info!("📁 Loading collection template from: {}", path);
    let template = TemplateConfig::from_file(path)?;
    template.validate()?;
    Ok(template)
}

fn exit_with(e: &MergeError) -> ! {
    tracing::error!(
        "❌ Merge failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!();
    eprintln!("✗ Merge failed: {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 致命錯誤一律非零結束
    std::process::exit(e.severity().exit_code().max(1))
}
