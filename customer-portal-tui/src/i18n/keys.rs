//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `dashboard.*`, `billing.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示
//! 6. **状态栏一次性消息归 `status.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 登录页
    pub login: LoginTexts,
    /// 概览页
    pub dashboard: DashboardTexts,
    /// 服务页
    pub services: ServicesTexts,
    /// 域名页
    pub domains: DomainsTexts,
    /// DNS 记录页
    pub dns_records: DnsRecordsTexts,
    /// 工单页（含工单详情）
    pub support: SupportTexts,
    /// 账单页
    pub billing: BillingTexts,
    /// 个人资料页（含偏好设置）
    pub profile: ProfileTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub no_data: &'static str,
    pub retry_hint: &'static str,
    pub on: &'static str,
    pub off: &'static str,
    pub cancel: &'static str,
    pub confirm: &'static str,
    pub save: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_lr: &'static str, // "←→"
    pub arrows_ud: &'static str, // "↑↓"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub navigate: &'static str,
    pub select: &'static str,
    pub open: &'static str,
    pub back: &'static str,
    pub switch_panel: &'static str,
    pub switch_option: &'static str,
    pub next_field: &'static str,
    pub filter: &'static str,
    pub toggle_auto_renew: &'static str,
    pub new_ticket: &'static str,
    pub mark_read: &'static str,
    pub edit_profile: &'static str,
    pub sign_in: &'static str,
    pub notifications: &'static str,
    pub user_menu: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    pub title: &'static str,
    pub dashboard: &'static str,
    pub services: &'static str,
    pub domains: &'static str,
    pub support: &'static str,
    pub billing: &'static str,
    pub profile: &'static str,
    /// 未读通知徽章（后接数字）
    pub unread: &'static str,
    /// 用户菜单入口
    pub account_menu: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 登录页
pub struct LoginTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub sign_in: &'static str,
    pub signing_in: &'static str,
    pub demo_hint: &'static str,
}

/// 概览页
pub struct DashboardTexts {
    pub welcome: &'static str,
    pub active_services: &'static str,
    pub expiring_soon: &'static str,
    pub open_tickets: &'static str,
    pub unread_notifications: &'static str,
    pub expiring_title: &'static str,
    pub recent_title: &'static str,
    pub nothing_expiring: &'static str,
    pub no_notifications: &'static str,
    pub days_left: &'static str,
}

/// 服务页
pub struct ServicesTexts {
    pub col_name: &'static str,
    pub col_type: &'static str,
    pub col_status: &'static str,
    pub col_expiry: &'static str,
    pub col_auto_renew: &'static str,
    pub col_price: &'static str,
    pub filter_label: &'static str,
    pub filter_all: &'static str,
    pub filter_active: &'static str,
    pub filter_expiring: &'static str,
    pub filter_domains: &'static str,
    pub no_services: &'static str,
}

/// 域名页
pub struct DomainsTexts {
    pub col_domain: &'static str,
    pub col_status: &'static str,
    pub col_expiry: &'static str,
    pub col_lock: &'static str,
    pub col_nameservers: &'static str,
    pub locked: &'static str,
    pub unlocked: &'static str,
    pub no_domains: &'static str,
}

/// DNS 记录页
pub struct DnsRecordsTexts {
    pub title: &'static str,
    pub nameservers: &'static str,
    pub col_type: &'static str,
    pub col_name: &'static str,
    pub col_value: &'static str,
    pub col_ttl: &'static str,
    pub col_priority: &'static str,
    pub no_records: &'static str,
}

/// 工单页
pub struct SupportTexts {
    pub col_subject: &'static str,
    pub col_category: &'static str,
    pub col_status: &'static str,
    pub col_priority: &'static str,
    pub col_updated: &'static str,
    pub no_tickets: &'static str,
    pub ticket_title: &'static str,
    pub staff: &'static str,
    pub no_messages: &'static str,
}

/// 账单页
pub struct BillingTexts {
    pub outstanding: &'static str,
    pub invoices_title: &'static str,
    pub payment_methods_title: &'static str,
    pub col_number: &'static str,
    pub col_issued: &'static str,
    pub col_due: &'static str,
    pub col_amount: &'static str,
    pub col_status: &'static str,
    pub default_badge: &'static str,
    pub no_invoices: &'static str,
    pub no_payment_methods: &'static str,
}

/// 个人资料页
pub struct ProfileTexts {
    pub personal_title: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub company: &'static str,
    pub addresses: &'static str,
    pub two_factor: &'static str,
    pub member_since: &'static str,
    pub preferences_title: &'static str,
    pub theme: &'static str,
    pub language: &'static str,
    pub theme_dark: &'static str,
    pub theme_light: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub help_title: &'static str,
    pub error_title: &'static str,
    pub confirm_title: &'static str,
    pub enable_auto_renew: &'static str,
    pub disable_auto_renew: &'static str,
    pub sign_out_confirm: &'static str,
    pub new_ticket_title: &'static str,
    pub category: &'static str,
    pub priority: &'static str,
    pub subject: &'static str,
    pub body: &'static str,
    pub edit_profile_title: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub company: &'static str,
    pub notifications_title: &'static str,
    pub no_notifications: &'static str,
    pub user_menu_title: &'static str,
    pub menu_profile: &'static str,
    pub menu_sign_out: &'static str,
    pub close_hint: &'static str,
}

// ============================================================================
// 状态栏消息
// ============================================================================

/// 状态栏一次性消息
pub struct StatusTexts {
    pub signed_in: &'static str,
    pub signed_out: &'static str,
    pub refreshing: &'static str,
    pub profile_updated: &'static str,
    pub ticket_created: &'static str,
    pub auto_renew_enabled: &'static str,
    pub auto_renew_disabled: &'static str,
    pub preferences_saved: &'static str,
    pub preferences_not_saved: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

/// 帮助弹窗文本
pub struct HelpTexts {
    pub global_title: &'static str,
    pub actions_title: &'static str,
    pub switch_panel: &'static str,
    pub move_selection: &'static str,
    pub confirm: &'static str,
    pub back: &'static str,
    pub refresh: &'static str,
    pub notifications: &'static str,
    pub user_menu: &'static str,
    pub quit: &'static str,
    pub new_ticket: &'static str,
    pub edit_profile: &'static str,
    pub switch_option: &'static str,
}
