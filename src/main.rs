use clap::Parser;
use json2list::utils::error::ErrorSeverity;
use json2list::utils::{logger, validation::Validate};
use json2list::{CliConfig, ConvertEngine, ListPipeline, LocalIo};

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,      // 警告，但成功
        ErrorSeverity::Medium => 2,   // 配置錯誤
        ErrorSeverity::High => 1,     // 處理錯誤
        ErrorSeverity::Critical => 3, // 系統錯誤
    }
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting json2list CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code(e.severity()));
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建 IO 與管道
    let io = LocalIo::new();
    let pipeline = ListPipeline::new(io, config);

    // 創建轉換引擎並運行
    let engine = ConvertEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(destination) => {
            // stdout 可能就是輸出目的地，完成訊息只進日誌
            tracing::info!("✅ Conversion completed successfully!");
            tracing::info!("📁 Fragment written to: {}", destination);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let code = exit_code(e.severity());
            if code > 0 {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}
