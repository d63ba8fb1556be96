//! src/view/mod.rs
//! View 层：只读 Model，把状态画到屏幕上
//!
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + (导航 | 内容) + 状态栏 + 弹窗
//!         mod components;     // 可复用组件（按钮、字段、卡片、图标、导航、状态栏、弹窗）
//!         mod pages;          // 各页面的内容区
//!         mod theme;          // 主题颜色和常用样式
//!
//!
//!     ┌──────────────────────────────────────────────────────┐
//!     │ Customer Portal v0.1.0               ✉ 3 unread      │  ← 标题栏
//!     ├────────────┬─────────────────────────────────────────┤
//!     │ Menu       │ Dashboard                               │
//!     │ ▶ ⌂ Dash.. │                                         │
//!     │   ■ Serv.. │          pages::xxx::render()           │
//!     │   ...      │                                         │
//!     │ JD John Doe│                                         │
//!     ├────────────┴─────────────────────────────────────────┤
//!     │ Tab Switch panel │ ↑↓ Navigate │ ... │ 状态消息       │  ← 状态栏
//!     └──────────────────────────────────────────────────────┘
//!
//!     View 层不修改任何状态，也不发出任何命令。
//!

pub mod components;
pub mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
