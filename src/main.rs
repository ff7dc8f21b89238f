use clap::Parser;
use contact_etl::utils::error::EtlError;
use contact_etl::utils::{logger, validation::Validate};
use contact_etl::{run_contact_job, CliConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_json);

    tracing::info!("Starting contact-etl CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 合併設定檔與命令列參數，然後驗證
    let settings = match config.resolve().and_then(|settings| {
        settings.validate()?;
        Ok(settings)
    }) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    match run_contact_job(&settings) {
        Ok(summary) => {
            print!("{}", summary.report);
            tracing::info!(
                "✅ {} of {} records kept",
                summary.records_written,
                summary.records_read
            );
            println!(
                "Processed data has been saved to {}",
                settings.output.display()
            );
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn exit_with(e: &EtlError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());

    // 根據錯誤嚴重程度決定退出碼
    std::process::exit(e.severity().exit_code());
}
