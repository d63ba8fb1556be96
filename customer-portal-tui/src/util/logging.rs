//! 日志初始化

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 日志级别环境变量
const LOG_ENV: &str = "PORTAL_LOG";
const LOG_FILE: &str = "portal.log";

/// 初始化日志（按天滚动的文件）
///
/// 返回日志目录，方便启动时记录位置。
pub fn init_logging() -> Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE);

    // 默认 info，可用 PORTAL_LOG 覆盖
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new("customer_portal_tui=info,customer_portal_core=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()?;

    tracing::info!("Customer Portal starting, logs in {}", log_dir.display());

    Ok(log_dir)
}

/// 日志目录：<data_local_dir>/customer-portal/logs
fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("customer-portal").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_directory_is_namespaced() {
        let dir = log_directory();
        assert!(dir.ends_with("customer-portal/logs"));
    }
}
