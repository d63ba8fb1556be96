//! 服务页面状态

use chrono::NaiveDate;
use customer_portal_core::types::Service;

use super::Selection;
use crate::i18n::t;

/// 服务列表筛选
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceFilter {
    #[default]
    All,
    Active,
    Expiring,
    Domains,
}

impl ServiceFilter {
    pub fn all() -> &'static [ServiceFilter] {
        &[
            ServiceFilter::All,
            ServiceFilter::Active,
            ServiceFilter::Expiring,
            ServiceFilter::Domains,
        ]
    }

    pub fn label(self) -> &'static str {
        let texts = &t().services;
        match self {
            ServiceFilter::All => texts.filter_all,
            ServiceFilter::Active => texts.filter_active,
            ServiceFilter::Expiring => texts.filter_expiring,
            ServiceFilter::Domains => texts.filter_domains,
        }
    }

    fn index(self) -> usize {
        Self::all().iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }

    /// 服务是否通过筛选
    pub fn matches(self, service: &Service, today: NaiveDate) -> bool {
        match self {
            ServiceFilter::All => true,
            ServiceFilter::Active => {
                service.status == customer_portal_core::types::ServiceStatus::Active
            }
            ServiceFilter::Expiring => service.is_expiring_soon(today),
            ServiceFilter::Domains => service.is_domain(),
        }
    }
}

/// 服务页面状态
#[derive(Debug, Default)]
pub struct ServicesState {
    pub filter: ServiceFilter,
    pub selection: Selection,
}

impl ServicesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前筛选下可见的服务
    pub fn visible<'a>(&self, services: &'a [Service], today: NaiveDate) -> Vec<&'a Service> {
        services
            .iter()
            .filter(|s| self.filter.matches(s, today))
            .collect()
    }

    /// 获取当前选中的服务
    pub fn selected<'a>(&self, services: &'a [Service], today: NaiveDate) -> Option<&'a Service> {
        self.visible(services, today)
            .get(self.selection.selected)
            .copied()
    }

    /// 切换筛选（选中位置回到第一项）
    pub fn set_filter(&mut self, filter: ServiceFilter) {
        self.filter = filter;
        self.selection.select_first();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use customer_portal_core::api::SeedData;

    #[test]
    fn filter_cycles_both_ways() {
        assert_eq!(ServiceFilter::All.prev(), ServiceFilter::Domains);
        assert_eq!(ServiceFilter::Domains.next(), ServiceFilter::All);
        assert_eq!(ServiceFilter::All.next().prev(), ServiceFilter::All);
    }

    #[test]
    fn domains_filter_keeps_only_domains() {
        let now = chrono::Utc::now();
        let seed = SeedData::generate(now);
        let mut state = ServicesState::new();
        state.set_filter(ServiceFilter::Domains);

        let visible = state.visible(&seed.services, now.date_naive());
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|s| s.is_domain()));
    }
}
