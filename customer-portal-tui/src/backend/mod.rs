//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│        Update 层 ──── app.commands ────▶ PortalService::execute            │
//！│                                                  │                         │
//！│                                                  │ tokio::spawn            │
//！│                                                  ▼                         │
//！│                                        ┌───────────────────┐               │
//！│                                        │ Arc<dyn PortalApi>│               │
//！│                                        │  (MockPortalApi)  │               │
//！│                                        └─────────┬─────────┘               │
//！│                                                  │                         │
//！│        主循环 ◀──── mpsc::UnboundedSender<BackendMessage> ────┘            │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，不读写 Model，
//! 只负责发起 customer-portal-core 的调用并把结果送回主循环。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件读写（JSON）
//!         mod portal_service;     // 命令执行器（tokio 任务 + mpsc 回传）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、门户服务（PortalService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     创建流程（见 src/main.rs）：
//!         1. 读取配置，按 config.api 构建 MockPortalApi；
//!         2. 创建 mpsc::unbounded_channel；
//!         3. PortalService::new(api, config_service, runtime.handle(), tx)。
//!
//!     主循环每一轮：
//!         - rx.try_recv() 取出所有已完成的结果，交给 update；
//!         - app.take_commands() 取出新排队的命令，交给 execute_all。
//!
//!     Store 只在主循环中被修改，后台任务只读 API、不碰 Store。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置服务（ConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     AppConfig { theme, language, api } 以 JSON 形式保存在
//!     <config_dir>/customer-portal/config.json。
//!     文件不存在 → 默认配置；文件损坏 → 默认配置 + 日志警告。
//!

mod config_service;
mod portal_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use portal_service::PortalService;
