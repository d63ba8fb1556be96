//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改 / 排队   │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          │ BackendMsg│   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀─────── └─────▲─────┘ ──┘      └────┬─────┘         │   │
//！│  │        │                     │ 结果回传             │ Command       │   │
//！│  └────────│─────────────────────│─────────────────────│───────────────┘   │
//！│           │                     │                     │                   │
//！│           ▼                     │                     ▼                   │
//！│      ┌─────────┐                │               ┌──────────┐              │
//！│      │  终端   │                └────────────── │ Backend  │              │
//！│      │ (Util)  │                   mpsc 通道     │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │ tokio::spawn       │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ customer-portal-  │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 所有的用户操作、以及后台任务的返回结果，都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod backend;        // 后台任务回传的结果 BackendMessage
//!         mod command;        // Update 层排队、交给 Backend 执行的 Command
//!         mod content;        // 内容面板子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航栏子消息
//!
//!
//! 消息有两个来源：
//!     1. 键盘事件：src/event/handler.rs 把 crossterm 的 Event 翻译成 AppMessage；
//!     2. 后台任务：src/backend/portal_service.rs 在 tokio 任务结束后，
//!        把结果包成 AppMessage::Backend(...) 经 mpsc 通道送回主循环。
//!
//! 反方向上，Update 层从不直接调用 API，
//! 它只把 Command 放进 app.commands，由主循环取出交给 Backend 执行。
//! 这样 Store 始终只在主循环里被修改。
//!

mod app;
mod backend;
mod command;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use command::Command;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
