use clap::Parser;
use page_rewriter::core::ConfigProvider;
use page_rewriter::utils::logger;
use page_rewriter::{
    CliConfig, FileRewriter, LocalStorage, RewriteError, RewriteSettings, TomlConfig,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting page-rewriter");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match load_settings(&config) {
        Ok(settings) => settings,
        Err(e) => return report_error(&e),
    };

    let storage = LocalStorage::new(settings.write_mode());
    let rewriter = FileRewriter::new_with_dry_run(storage, settings.dry_run());

    match rewriter.run(&settings) {
        Ok(outcome) => {
            println!("{}", outcome.status_line());
            ExitCode::from(outcome.exit_code() as u8)
        }
        Err(e) => report_error(&e),
    }
}

fn load_settings(config: &CliConfig) -> page_rewriter::Result<RewriteSettings> {
    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            Some(TomlConfig::from_file(path)?)
        }
        None => None,
    };

    let storage = LocalStorage::default();
    RewriteSettings::resolve(&config.overrides(), file_config.as_ref(), &storage)
}

fn report_error(e: &RewriteError) -> ExitCode {
    tracing::error!(
        "❌ Rewrite failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    ExitCode::from(e.exit_code() as u8)
}
