//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ Command 队列      │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └──────────┘              │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态
//!
//!     page.rs 与 state/ 的区别：
//!         - Page 是一个简单的枚举，表示当前处于哪个“页面”，相当于房间的门牌号，
//!             它与 core 的 Route 对应，外加两个详情页；
//!         - state/ 是各个页面自己的状态，比如选中位置、筛选条件、弹窗，
//!             相当于房间里的摆设。
//!
//!     而真正的业务数据不在这两者里，而是在 App.store（customer-portal-core 的 Store）中：
//!         用户、服务、工单、通知都只有这一份。
//!         账单和 DNS 记录属于页面本地数据，用 Resource 保存在对应的页面状态里。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     pub struct App {
//!         pub should_quit: bool,              // 是否退出
//!         pub focus: FocusPanel,              // 焦点在导航栏还是内容区
//!         pub navigation: NavigationState,    // 导航栏
//!         pub current_page: Page,             // 当前页面
//!         pub status_message: Option<String>, // 状态栏消息
//!         pub store: Store,                   // 全局 Store
//!         pub config: AppConfig,              // 当前配置
//!         ...                                 // 各页面状态
//!         pub modal: ModalState,              // 弹窗
//!         commands: Vec<Command>,             // 待执行的后台命令
//!     }
//!
//!     App::navigate(route) 是进入页面的唯一入口：
//!         1. 经过 Route::guard 守卫（未登录 → 登录页，已登录访问登录页 → 概览）；
//!         2. 同步导航栏选中项；
//!         3. 为新页面排队需要的加载命令。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、命令队列
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Model 不直接发起请求。需要数据时调用 App::load(hook)：
//!         - 立即对 Store 执行 hook.begin（loading 置位、错误清空）；
//!         - 把 Command::Load(hook) 放进队列。
//!     主循环在每次 update 之后调用 take_commands() 把它们交给 Backend。
//!

mod app;
mod focus;
mod navigation;
mod page;

pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::NavigationState;
pub use page::Page;
