use clap::Parser;
use collection_merge::core::ConfigProvider;
use collection_merge::utils::{logger, validation::Validate};
use collection_merge::{CollectionMerger, LocalStorage, MergeEngine, MergeProfile, QuickConfig};

fn main() {
    let config = QuickConfig::parse();
    logger::init_cli_logger(config.verbose);

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code().max(1));
    }

    let merger = CollectionMerger::new(LocalStorage::new("."), MergeProfile::Quick)
        .with_input_dir(config.input_dir());
    let engine = MergeEngine::new(merger, config.output_path());

    match engine.run() {
        Ok(summary) => {
            println!("🔍 Found {} module files", summary.discovered);
            println!();
            println!("🎉 Merge complete!");
            println!("📁 Modules: {}", summary.stats.modules);
            println!("🔗 Requests: {}", summary.stats.requests);
            println!("💾 Output file: {}", summary.output_path.display());
        }
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code().max(1));
        }
    }
}
