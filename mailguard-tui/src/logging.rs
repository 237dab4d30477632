//! 日志初始化
//!
//! stdout 属于终端界面，日志只写文件：
//! `dirs::data_local_dir()/mailguard-tui/logs/mailguard-tui.log`。
//! core 通过 `log` 门面输出的记录经 tracing-log 桥接进入同一文件。

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::APP_DIR_NAME;

const LOG_FILE_NAME: &str = "mailguard-tui.log";

/// 日志目录
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join("logs")
}

/// 安装全局订阅器；返回的 guard 必须存活到进程退出
///
/// `RUST_LOG` 优先于 `default_level`。
pub fn init(default_level: &str) -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;

    tracing::info!("logging to {}", dir.join(LOG_FILE_NAME).display());
    Ok(guard)
}
