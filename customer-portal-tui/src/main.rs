//! Customer Portal TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 在 tokio 运行时上执行命令 (`backend/`)
//!
//!
//! main.rs
//! Customer Portal TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()              // 日志写入滚动文件（raw mode 下不能打印到终端）
//!     LocalConfigService::load()  // 读取主题、语言、模拟 API 参数
//!     tokio Runtime::new()        // 后台任务的运行时
//!     MockPortalApi::from_config  // 带延迟和随机失败的模拟 API
//!     PortalService::new()        // 执行 Command，结果经 mpsc 通道送回
//!     init_terminal()             // 进入 raw mode + 备用屏幕
//!     model::App::new(config)     // 创建 APP 实例（停在登录页）
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use customer_portal_core::{MockPortalApi, PortalApi};
use tokio::sync::mpsc;

use backend::{ConfigService, LocalConfigService, PortalService};
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志（失败不影响运行，只是没有日志文件）
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {e}");
    }

    // 2. 配置
    let config_service = Arc::new(LocalConfigService::new());
    let config = config_service.load()?;
    log::info!(
        "Loaded config from {} (latency {}ms, failure rate {})",
        config_service.path().display(),
        config.api.latency_ms,
        config.api.failure_rate
    );
    view::theme::set_theme(config.theme);
    i18n::set_language(config.language());
    log::debug!("UI language {}", i18n::current_language().code());

    // 3. 后台运行时与服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let api: Arc<dyn PortalApi> = Arc::new(MockPortalApi::from_config(&config.api));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let service = PortalService::new(api, config_service, runtime.handle().clone(), tx);

    // 4. 初始化终端
    install_panic_hook();
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例
    let mut app = model::App::new(config);

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &service, &mut rx);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 8. 不等待仍在途中的模拟请求
    runtime.shutdown_background();

    result
}
