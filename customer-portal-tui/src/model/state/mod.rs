//! 页面状态模块
//!
//! 定义各个页面的状态数据结构。
//! 业务数据（用户、服务、工单、通知）在全局 Store 中，
//! 这里只保存页面自己的东西：选中位置、筛选条件、页面本地数据、弹窗。

mod billing;
mod dns_records;
mod forms;
mod modal;
mod preferences;
mod selection;
mod services;

pub use billing::BillingState;
pub use dns_records::DnsRecordsState;
pub use forms::{credentials, login_form, profile_form, profile_update, TicketDraft};
pub use modal::{ConfirmAction, Modal, ModalState, UserMenuItem};
pub use preferences::{PreferenceItem, PreferencesState};
pub use selection::Selection;
pub use services::{ServiceFilter, ServicesState};
