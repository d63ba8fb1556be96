//! 可复用的 UI 组件
//!
//! 基础组件（无状态，只做 状态 → 样式 的映射）：
//!     button      按钮（变体 × 聚焦/禁用/加载）
//!     input       表单字段（标签 + 输入框 + 校验结果）
//!     card        卡片（标题边框 + 内容）
//!     icon        业务状态对应的字形和色调
//!
//! 布局组件：
//!     navigation  左侧导航（路由链接 + 未读徽章 + 用户菜单入口）
//!     statusbar   底部状态栏（快捷键提示 + 状态消息）
//!     modal       弹窗（渲染在最上层）

pub mod button;
pub mod card;
pub mod icon;
pub mod input;
pub mod modal;
pub mod navigation;
pub mod statusbar;
