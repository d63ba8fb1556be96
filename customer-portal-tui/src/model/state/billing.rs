//! 账单页面状态

use customer_portal_core::hooks::Billing;
use customer_portal_core::Resource;

use super::Selection;

/// 账单页面状态（发票与支付方式为页面本地数据）
#[derive(Debug, Default)]
pub struct BillingState {
    pub billing: Resource<Billing>,
    /// 发票列表选中位置
    pub selection: Selection,
}

impl BillingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invoice_count(&self) -> usize {
        self.billing.data.as_ref().map_or(0, |b| b.invoices.len())
    }
}
