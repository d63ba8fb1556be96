//! 后台任务结果消息
//!
//! 由 Backend 层在 tokio 任务结束后发送，主循环收到后交给 Update 层应用。

use customer_portal_core::error::CoreResult;
use customer_portal_core::hooks::{Billing, MutationResult, StoreHookResult};
use customer_portal_core::types::DnsRecord;

/// 后台任务回传的结果
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 全局 Store 数据加载完成
    Loaded(StoreHookResult),

    /// 账单数据（页面本地）
    Billing(CoreResult<Billing>),

    /// DNS 记录（页面本地，带上请求时的域名 ID）
    DnsRecords {
        domain_id: String,
        result: CoreResult<Vec<DnsRecord>>,
    },

    /// 变更操作完成
    Mutated(MutationResult),

    /// 配置保存完成（失败时带上错误描述）
    ConfigSaved(Result<(), String>),
}
