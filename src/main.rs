use clap::Parser;
use practitioner_directory::utils::error::ErrorSeverity;
use practitioner_directory::utils::{logger, validation::Validate};
use practitioner_directory::{
    render_cards, render_window, CliConfig, DirectoryConfig, DirectoryError, DirectorySession,
    OutputFormat,
};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting practitioner-directory CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Directory run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> Result<(), DirectoryError> {
    config.validate()?;

    // 載入目錄
    let directory = match &config.catalog {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path.display());
            DirectoryConfig::from_file(path)?
        }
        None => {
            tracing::info!("📁 Using built-in sample catalog");
            DirectoryConfig::sample()?
        }
    };
    directory.validate()?;

    tracing::info!(
        "✅ Catalog '{}' loaded: {} practitioners, {} categories",
        directory.directory.name,
        directory.practitioners.len(),
        directory.directory.categories.len()
    );

    let mut session =
        DirectorySession::from_source(&directory).with_query(directory.initial_query()?);

    if config.list_places {
        for place in session.available_places() {
            println!("{}", place);
        }
        return Ok(());
    }

    let changed = session.apply_all(config.events());
    tracing::debug!("{} command-line events changed the directory state", changed);

    let strip = render_window(session.window(), session.query().selected_category.as_deref());
    let cards = session.cards();
    tracing::info!("🔍 {} practitioners match", cards.len());

    // 機器可讀格式只輸出結果
    if config.format == OutputFormat::Table {
        println!("{}", strip);
        println!();
    }
    println!("{}", render_cards(&cards, config.format)?);

    Ok(())
}
