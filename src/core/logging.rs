//! 日志初始化
//!
//! 配置tracing日志框架。`RUST_LOG`环境变量优先，其次使用配置文件中的日志级别。

use crate::config::LoggingConfig;
use crate::core::error::EngineResult;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// 初始化日志系统
///
/// 重复调用是安全的：已经安装过全局订阅者时直接返回。
pub fn init_logging(config: &LoggingConfig) -> EngineResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_filter()));

    if config.log_to_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file_path)?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();
    } else if config.log_to_console {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    tracing::info!(target: "engine", level = config.level.as_filter(), "Logging initialized");
    Ok(())
}
