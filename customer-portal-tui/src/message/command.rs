//! 待执行的后台命令
//!
//! Update 层只负责把命令放进队列，真正的 API 调用由 Backend 层发起。

use customer_portal_core::hooks::{Mutation, StoreHook};

use crate::backend::AppConfig;

/// 后台命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// 加载全局 Store 数据
    Load(StoreHook),
    /// 加载账单（发票 + 支付方式）
    LoadBilling,
    /// 加载某个域名的 DNS 记录
    LoadDnsRecords(String),
    /// 执行变更操作
    Mutate(Mutation),
    /// 保存配置
    SaveConfig(AppConfig),
}
