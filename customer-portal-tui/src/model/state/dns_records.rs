//! DNS 记录页面状态

use customer_portal_core::types::DnsRecord;
use customer_portal_core::Resource;

use super::Selection;

/// DNS 记录页面状态（数据为页面本地，不进入全局 Store）
#[derive(Debug, Default)]
pub struct DnsRecordsState {
    /// 正在展示的域名 ID
    pub domain_id: Option<String>,
    pub records: Resource<Vec<DnsRecord>>,
    pub selection: Selection,
}

impl DnsRecordsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 切换到另一个域名：清空旧数据，进入加载状态
    pub fn open(&mut self, domain_id: &str) {
        self.domain_id = Some(domain_id.to_string());
        self.records = Resource::new();
        self.records.begin();
        self.selection = Selection::default();
    }

    /// 结果是否属于当前域名
    pub fn is_current(&self, domain_id: &str) -> bool {
        self.domain_id.as_deref() == Some(domain_id)
    }

    pub fn len(&self) -> usize {
        self.records.data.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 获取当前选中的记录
    pub fn selected_record(&self) -> Option<&DnsRecord> {
        self.records
            .data
            .as_ref()
            .and_then(|records| records.get(self.selection.selected))
    }
}
