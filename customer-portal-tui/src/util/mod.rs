//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │          ┌─────────┐     ┌──────────┐          ▼              │
//！│         │          │  Util   │     │  Model   │ ◀───────────           │
//！│         │          │  层     │     │   层     │                         │
//！│         │          └─────────┘     └────┬─────┘                         │
//！│         │                               │                               │
//！│         │          ┌─────────┐          ▼                               │
//！│         └──────────│  View   │ ◀── 读取状态                             │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务无关的基础设施代码：
//!     src/util/mod.rs
//!         mod logging;        // 日志初始化（写入滚动日志文件）
//!         mod terminal;       // 终端初始化和恢复
//!         mod text;           // 按显示宽度截断/填充文本
//!
//!
//!     日志：
//!         终端处于 raw mode 时不能往 stdout 打印任何东西，
//!         所以日志全部写进 <data_local_dir>/customer-portal/logs/portal.log，
//!         按天滚动。级别由 PORTAL_LOG 环境变量控制：
//!
//!             PORTAL_LOG=debug customer-portal
//!
//!         core 库用 log 宏记录，tracing-subscriber 会把 log 记录桥接过来。
//!
//!
//!     终端：
//!         init_terminal()       启用 raw mode + 进入备用屏幕
//!         restore_terminal()    关闭 raw mode + 离开备用屏幕 + 显示光标
//!         install_panic_hook()  panic 时先恢复终端再打印 panic 信息
//!
//!         注意：无论程序是正常退出还是发生错误，都必须恢复终端！
//!

mod logging;
mod terminal;
mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
pub use text::{pad_to_width, truncate_to_width};
