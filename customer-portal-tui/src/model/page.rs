//! 页面状态定义

use customer_portal_core::Route;

use crate::i18n::t;

/// 页面枚举
///
/// 顶层页面与 [`Route`] 一一对应，另有两个详情页挂在其父路由下。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 登录
    Login,
    /// 概览
    #[default]
    Dashboard,
    /// 服务列表
    Services,
    /// 域名列表
    Domains,
    /// 某个域名的 DNS 记录
    DnsRecords {
        domain_id: String,
        domain_name: String,
    },
    /// 工单列表
    Support,
    /// 工单详情
    TicketDetail { ticket_id: String },
    /// 账单
    Billing,
    /// 个人资料
    Profile,
}

impl Page {
    /// 路由对应的顶层页面
    pub fn from_route(route: Route) -> Self {
        match route {
            Route::Login => Page::Login,
            Route::Dashboard => Page::Dashboard,
            Route::Services => Page::Services,
            Route::Domains => Page::Domains,
            Route::Support => Page::Support,
            Route::Billing => Page::Billing,
            Route::Profile => Page::Profile,
        }
    }

    /// 页面所属的路由
    pub fn route(&self) -> Route {
        match self {
            Page::Login => Route::Login,
            Page::Dashboard => Route::Dashboard,
            Page::Services => Route::Services,
            Page::Domains | Page::DnsRecords { .. } => Route::Domains,
            Page::Support | Page::TicketDetail { .. } => Route::Support,
            Page::Billing => Route::Billing,
            Page::Profile => Route::Profile,
        }
    }

    /// 获取页面标题
    pub fn title(&self) -> &'static str {
        let texts = t();
        match self {
            Page::Login => texts.login.title,
            Page::Dashboard => texts.nav.dashboard,
            Page::Services => texts.nav.services,
            Page::Domains => texts.nav.domains,
            Page::DnsRecords { .. } => texts.dns_records.title,
            Page::Support => texts.nav.support,
            Page::TicketDetail { .. } => texts.support.ticket_title,
            Page::Billing => texts.nav.billing,
            Page::Profile => texts.nav.profile,
        }
    }

    /// 是否是详情页面（Esc 返回父页面）
    pub fn is_detail_page(&self) -> bool {
        matches!(self, Page::DnsRecords { .. } | Page::TicketDetail { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_pages_belong_to_parent_route() {
        let dns = Page::DnsRecords {
            domain_id: "svc_1".to_string(),
            domain_name: "example.com".to_string(),
        };
        assert_eq!(dns.route(), Route::Domains);
        assert!(dns.is_detail_page());
        assert!(!Page::Support.is_detail_page());
    }

    #[test]
    fn every_route_has_a_page() {
        for route in Route::protected().iter().copied().chain([Route::Login]) {
            assert_eq!(Page::from_route(route).route(), route);
        }
    }
}
