//! MailGuard 管理控制台 TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 后台任务与持久化 (`backend/`)
//!
//! 启动顺序：
//!
//!     Cli::parse()                 // 命令行参数
//!     LocalConfigService::load()   // 配置文件，随后被命令行覆盖
//!     logging::init()              // 文件日志（stdout 属于界面）
//!     CoreService::new()           // HTTP 客户端 + 会话存储
//!     App::new()                   // 初始状态，已排队 RestoreSession
//!     init_terminal()              // 原始模式 + 备用屏幕
//!     app::run()                   // 主循环
//!     restore_terminal()           // 无论成功与否都恢复终端

mod app;
mod backend;
mod cli;
mod event;
pub mod i18n;
mod logging;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc;

use backend::{AppConfig, ConfigService, CoreService, Dispatcher, LocalConfigService};
use cli::Cli;
use i18n::Language;
use util::{init_terminal, install_panic_hook, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 配置：文件 → 命令行覆盖
    let config_service = cli
        .config
        .as_ref()
        .map_or_else(LocalConfigService::new, |path| LocalConfigService::with_path(path));
    let mut config = load_config(&config_service);
    cli.apply(&mut config);

    // 2. 日志、语言、主题
    let _log_guard = logging::init(&config.log_level)?;
    log::info!("mailguard-tui {} starting", env!("CARGO_PKG_VERSION"));
    let language = Language::from_code(&config.language).unwrap_or_default();
    log::info!("language {}, theme {:?}", language.code(), config.theme);
    i18n::set_language(language);
    view::theme::set_theme(config.theme);

    // 3. 后端
    let core = Arc::new(CoreService::new(&config).context("failed to create API client")?);
    let mut app = model::App::new(config.effective_page_size());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher::new(
        core,
        app.dashboard.refresh_signal().clone(),
        config.export_dir(),
        tx,
    );

    // 4. 终端与主循环
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &dispatcher, &mut rx).await;
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        log::error!("main loop exited with error: {e:#}");
    }
    log::info!("mailguard-tui stopped");
    result
}

/// 读取配置；文件不存在时写入默认值，损坏时回退默认值
fn load_config(service: &LocalConfigService) -> AppConfig {
    if !service.path().exists() {
        let config = AppConfig::default();
        if let Err(e) = service.save(&config) {
            eprintln!("warning: {e}");
        }
        return config;
    }
    service.load().unwrap_or_else(|e| {
        eprintln!("warning: {e}, using defaults");
        AppConfig::default()
    })
}
