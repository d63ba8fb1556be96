//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，App 处于以下状态：
//!
//! App {
//!
//!     should_quit: false,                             // 决定应用是否应该退出
//!     focus: FocusPanel::Content,                     // 登录页只有表单，焦点在内容区
//!     navigation: NavigationState{
//!         items: [Dashboard, Services, Domains, Support, Billing, Profile],
//!         selected = 0
//!     },
//!     current_page = Page::Login,                     // 未登录，路由守卫把所有页面重定向到登录页
//!     store: Store::new(),                            // 空的全局 Store
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!
//!     while let Ok(msg) = rx.try_recv() {             // 先收取后台任务送回的结果
//!         update::update(&mut app, Backend(msg))          // 写入 Store / 页面状态
//!     }
//!
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event, &app);            // 接收原始事件并分发消息
//!         update::update(&mut app, msg)                   // 更新状态（可能排队命令）
//!     }
//!
//!     service.execute_all(app.take_commands())        // 把排队的命令交给后台执行
//! }
//!
//!
//! Update 层从不等待 I/O：它只排队 Command，真正的 API 调用在 tokio 任务里进行，
//! 结果经 mpsc 通道回到这里，所以渲染永远不会被网络延迟卡住。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::PortalService;
use crate::event;
use crate::message::{AppMessage, BackendMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 输入轮询间隔
const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    service: &PortalService,
    rx: &mut UnboundedReceiver<BackendMessage>,
) -> Result<()> {
    // 启动时可能已有排队的命令
    service.execute_all(app.take_commands());

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            log::info!("Quit requested");
            break;
        }

        // 3. 收取后台结果
        while let Ok(msg) = rx.try_recv() {
            update::update(app, AppMessage::Backend(msg));
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(TICK)? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg);
        }

        // 7. 执行排队的命令
        service.execute_all(app.take_commands());
    }

    Ok(())
}
