//!
//! src/event/mod.rs
//! Event 层：把终端事件翻译成 Message
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // poll_event / handle_event
//!         pub mod keymap;     // 快捷键定义 DefaultKeymap（提示文本也取自这里）
//!
//!
//! 按键处理的优先级（从高到低）：
//!     1. Ctrl+C                       → 退出
//!     2. 弹窗打开时                    → 全部交给弹窗（Esc 关闭）
//!     3. Alt+h / Alt+q                → 帮助 / 退出
//!     4. 登录页                        → 全部交给登录表单（字符即输入）
//!     5. 其他全局键                    → ? / Alt+r / Alt+n / Alt+u / Esc / Tab
//!     6. 按焦点分发                    → 导航栏 或 内容区（按页面）
//!
//! handle_event 只读取 App，不修改它；修改交给 Update 层。
//!

mod handler;
pub mod keymap;

pub use handler::{handle_event, poll_event};
