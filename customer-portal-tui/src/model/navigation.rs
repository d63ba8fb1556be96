//! 导航状态定义

use customer_portal_core::Route;

use crate::i18n::t;

/// 导航项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub icon: &'static str,
}

impl NavItem {
    /// 当前语言下的标签
    pub fn label(&self) -> &'static str {
        let nav = &t().nav;
        match self.route {
            Route::Dashboard | Route::Login => nav.dashboard,
            Route::Services => nav.services,
            Route::Domains => nav.domains,
            Route::Support => nav.support,
            Route::Billing => nav.billing,
            Route::Profile => nav.profile,
        }
    }
}

fn icon(route: Route) -> &'static str {
    match route {
        Route::Dashboard | Route::Login => "⌂",
        Route::Services => "■",
        Route::Domains => "●",
        Route::Support => "?",
        Route::Billing => "$",
        Route::Profile => "@",
    }
}

/// 导航状态（只包含受保护的路由，登录页不在导航栏中）
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: Route::protected()
                .iter()
                .map(|&route| NavItem {
                    route,
                    icon: icon(route),
                })
                .collect(),
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中的导航项
    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    /// 获取当前选中的路由
    pub fn current_route(&self) -> Option<Route> {
        self.current_item().map(|item| item.route)
    }

    /// 让选中项跟随当前路由
    pub fn sync(&mut self, route: Route) {
        if let Some(index) = self.items.iter().position(|item| item.route == route) {
            self.selected = index;
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_is_not_a_nav_item() {
        let nav = NavigationState::new();
        assert!(nav.items.iter().all(|item| item.route != Route::Login));
        assert_eq!(nav.current_route(), Some(Route::Dashboard));
    }

    #[test]
    fn sync_follows_route() {
        let mut nav = NavigationState::new();
        nav.sync(Route::Billing);
        assert_eq!(nav.current_route(), Some(Route::Billing));

        nav.select_last();
        nav.select_next();
        assert_eq!(nav.current_route(), Some(Route::Profile));
    }
}
