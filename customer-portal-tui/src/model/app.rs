//! 应用主状态结构

use chrono::{NaiveDate, Utc};
use customer_portal_core::hooks::StoreHook;
use customer_portal_core::validation::FormState;
use customer_portal_core::{Route, Store};

use super::state::{
    login_form, BillingState, DnsRecordsState, ModalState, PreferencesState, Selection,
    ServicesState,
};
use super::{FocusPanel, NavigationState, Page};
use crate::backend::AppConfig;
use crate::message::Command;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 全局 Store（会话、服务、工单、通知）
    pub store: Store,

    /// 当前配置（偏好设置修改后整体保存）
    pub config: AppConfig,

    // === 各页面状态 ===
    /// 登录表单
    pub login: FormState,
    /// 服务页面状态
    pub services: ServicesState,
    /// 域名列表选中位置
    pub domains: Selection,
    /// DNS 记录页面状态
    pub dns_records: DnsRecordsState,
    /// 工单列表选中位置
    pub support: Selection,
    /// 账单页面状态
    pub billing: BillingState,
    /// 偏好设置
    pub preferences: PreferencesState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 待执行的后台命令
    commands: Vec<Command>,
}

impl App {
    /// 创建新的应用实例（未登录，停在登录页）
    pub fn new(config: AppConfig) -> Self {
        let preferences = PreferencesState::new(config.theme, config.language());
        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Login,
            status_message: None,
            store: Store::new(),
            config,
            login: login_form(),
            services: ServicesState::new(),
            domains: Selection::default(),
            dns_records: DnsRecordsState::new(),
            support: Selection::default(),
            billing: BillingState::new(),
            preferences,
            modal: ModalState::new(),
            commands: Vec::new(),
        };
        app.navigate(Route::default());
        app
    }

    /// 是否已登录
    pub fn is_authenticated(&self) -> bool {
        self.store.state().is_authenticated()
    }

    /// 今天（到期计算用）
    pub fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }

    // ========== 页面切换 ==========

    /// 进入路由（经过登录守卫），并触发该页面需要的数据加载
    pub fn navigate(&mut self, route: Route) {
        let target = route.guard(self.is_authenticated());
        if target != route {
            log::debug!("Route {} redirected to {}", route.path(), target.path());
        }

        self.current_page = Page::from_route(target);
        self.navigation.sync(target);
        if target == Route::Login {
            // 登录页只有表单，键盘输入直接进入内容面板
            self.focus = FocusPanel::Content;
        }
        self.load_page();
    }

    /// 进入某个域名的 DNS 记录页
    pub fn open_dns_records(&mut self, domain_id: String, domain_name: String) {
        self.dns_records.open(&domain_id);
        self.push_command(Command::LoadDnsRecords(domain_id.clone()));
        self.current_page = Page::DnsRecords {
            domain_id,
            domain_name,
        };
    }

    /// 进入工单详情页
    pub fn open_ticket(&mut self, ticket_id: String) {
        self.current_page = Page::TicketDetail { ticket_id };
    }

    /// 重新加载当前页面的数据
    pub fn refresh(&mut self) {
        if let Page::DnsRecords {
            domain_id,
            domain_name,
        } = self.current_page.clone()
        {
            self.open_dns_records(domain_id, domain_name);
        } else {
            self.load_page();
        }
    }

    /// 当前页面需要的数据
    fn load_page(&mut self) {
        match self.current_page {
            Page::Login => {}
            Page::Dashboard => {
                self.load(StoreHook::Services);
                self.load(StoreHook::Tickets);
                self.load(StoreHook::Notifications);
            }
            Page::Services | Page::Domains | Page::DnsRecords { .. } => {
                self.load(StoreHook::Services);
            }
            Page::Support | Page::TicketDetail { .. } => self.load(StoreHook::Tickets),
            Page::Billing => {
                self.billing.billing.begin();
                self.push_command(Command::LoadBilling);
            }
            Page::Profile => self.load(StoreHook::Profile),
        }
    }

    /// 开始一个 Store 数据加载（loading 置位，错误清空）
    pub fn load(&mut self, hook: StoreHook) {
        hook.begin(&mut self.store);
        self.push_command(Command::Load(hook));
    }

    /// 清空所有页面状态（退出登录后）
    pub fn reset_pages(&mut self) {
        self.login = login_form();
        self.services = ServicesState::new();
        self.domains = Selection::default();
        self.dns_records = DnsRecordsState::new();
        self.support = Selection::default();
        self.billing = BillingState::new();
        self.modal.close();
    }

    /// 数据变化后把各列表的选中位置拉回范围内
    pub fn clamp_selections(&mut self) {
        let today = self.today();
        let state = self.store.state();
        let services = self.services.visible(&state.services, today).len();
        let domains = state.domains().count();
        let tickets = state.tickets.len();

        self.services.selection.clamp(services);
        self.domains.clamp(domains);
        self.support.clamp(tickets);
    }

    // ========== 命令队列 ==========

    /// 排队一条后台命令
    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// 取出所有待执行命令
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    // ========== 状态栏 ==========

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_login_without_commands() {
        let mut app = App::default();
        assert_eq!(app.current_page, Page::Login);
        assert!(app.focus.is_content());
        assert!(app.take_commands().is_empty());
    }

    #[test]
    fn guard_blocks_protected_routes() {
        let mut app = App::default();
        app.navigate(Route::Billing);
        assert_eq!(app.current_page, Page::Login);
    }
}
