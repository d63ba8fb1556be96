//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "客户自助门户",
        loading: "加载中...",
        no_data: "暂无数据",
        retry_hint: "按 Alt+r 重试",
        on: "开",
        off: "关",
        cancel: "取消",
        confirm: "确认",
        save: "保存",
        submit: "提交",
        submitting: "提交中...",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            navigate: "导航",
            select: "选择",
            open: "打开",
            back: "返回",
            switch_panel: "切换面板",
            switch_option: "切换",
            next_field: "下一项",
            filter: "筛选",
            toggle_auto_renew: "切换自动续费",
            new_ticket: "新建工单",
            mark_read: "标为已读",
            edit_profile: "编辑资料",
            sign_in: "登录",
            notifications: "通知",
            user_menu: "账户",
            refresh: "刷新",
            help: "帮助",
            quit: "退出",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "菜单",
        dashboard: "概览",
        services: "服务",
        domains: "域名",
        support: "工单",
        billing: "账单",
        profile: "个人资料",
        unread: "条未读",
        account_menu: "Alt+u 账户",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    login: LoginTexts {
        title: "登录",
        subtitle: "管理你的服务、域名与账单",
        email: "邮箱",
        password: "密码",
        sign_in: "登录",
        signing_in: "登录中...",
        demo_hint: "演示账号：john.doe@example.com / password123",
    },

    dashboard: DashboardTexts {
        welcome: "欢迎回来",
        active_services: "运行中的服务",
        expiring_soon: "即将到期",
        open_tickets: "未结工单",
        unread_notifications: "未读通知",
        expiring_title: "30 天内到期",
        recent_title: "最近通知",
        nothing_expiring: "30 天内没有即将到期的服务。",
        no_notifications: "没有新的通知。",
        days_left: "天后到期",
    },

    services: ServicesTexts {
        col_name: "名称",
        col_type: "类型",
        col_status: "状态",
        col_expiry: "到期日",
        col_auto_renew: "自动续费",
        col_price: "价格",
        filter_label: "显示",
        filter_all: "全部",
        filter_active: "运行中",
        filter_expiring: "即将到期",
        filter_domains: "域名",
        no_services: "没有符合条件的服务。",
    },

    domains: DomainsTexts {
        col_domain: "域名",
        col_status: "状态",
        col_expiry: "到期日",
        col_lock: "转移锁",
        col_nameservers: "域名服务器",
        locked: "已锁定",
        unlocked: "未锁定",
        no_domains: "你还没有注册任何域名。",
    },

    dns_records: DnsRecordsTexts {
        title: "DNS 记录",
        nameservers: "域名服务器",
        col_type: "类型",
        col_name: "主机记录",
        col_value: "记录值",
        col_ttl: "TTL",
        col_priority: "优先级",
        no_records: "该域名暂无 DNS 记录。",
    },

    support: SupportTexts {
        col_subject: "主题",
        col_category: "分类",
        col_status: "状态",
        col_priority: "优先级",
        col_updated: "更新时间",
        no_tickets: "暂无工单，按 Alt+a 新建。",
        ticket_title: "工单",
        staff: "客服",
        no_messages: "暂无消息。",
    },

    billing: BillingTexts {
        outstanding: "待付金额",
        invoices_title: "发票",
        payment_methods_title: "支付方式",
        col_number: "发票号",
        col_issued: "开具日期",
        col_due: "到期日",
        col_amount: "金额",
        col_status: "状态",
        default_badge: "默认",
        no_invoices: "暂无发票。",
        no_payment_methods: "尚未添加支付方式。",
    },

    profile: ProfileTexts {
        personal_title: "个人信息",
        name: "姓名",
        email: "邮箱",
        phone: "电话",
        company: "公司",
        addresses: "地址",
        two_factor: "两步验证",
        member_since: "注册时间",
        preferences_title: "偏好设置",
        theme: "主题",
        language: "语言",
        theme_dark: "深色",
        theme_light: "浅色",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        help_title: "帮助",
        error_title: "错误",
        confirm_title: "请确认",
        enable_auto_renew: "开启自动续费：",
        disable_auto_renew: "关闭自动续费：",
        sign_out_confirm: "确定退出登录吗？",
        new_ticket_title: "新建工单",
        category: "分类",
        priority: "优先级",
        subject: "主题",
        body: "问题描述",
        edit_profile_title: "编辑资料",
        first_name: "名",
        last_name: "姓",
        email: "邮箱",
        phone: "电话",
        company: "公司",
        notifications_title: "通知",
        no_notifications: "暂无通知。",
        user_menu_title: "账户",
        menu_profile: "个人资料",
        menu_sign_out: "退出登录",
        close_hint: "按 Esc 关闭",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        signed_in: "已登录：",
        signed_out: "已退出登录",
        refreshing: "刷新中...",
        profile_updated: "资料已更新",
        ticket_created: "工单已创建",
        auto_renew_enabled: "已开启自动续费：",
        auto_renew_disabled: "已关闭自动续费：",
        preferences_saved: "偏好设置已保存",
        preferences_not_saved: "偏好设置保存失败",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        global_title: "全局快捷键",
        actions_title: "页面操作",
        switch_panel: "切换面板",
        move_selection: "上下移动",
        confirm: "打开 / 确认",
        back: "返回 / 关闭",
        refresh: "刷新页面",
        notifications: "通知",
        user_menu: "账户菜单",
        quit: "退出",
        new_ticket: "新建工单（工单页）",
        edit_profile: "编辑资料（个人资料页）",
        switch_option: "切换筛选 / 选项",
    },
};
