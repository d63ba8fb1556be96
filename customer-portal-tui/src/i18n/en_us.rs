//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, BillingTexts, CommonTexts, DashboardTexts, DnsRecordsTexts, DomainsTexts,
    HelpTexts, HintTexts, KeyNames, LoginTexts, ModalTexts, NavTexts, ProfileTexts,
    ServicesTexts, StatusTexts, SupportTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Customer Portal",
        loading: "Loading...",
        no_data: "No data",
        retry_hint: "Press Alt+r to try again",
        on: "On",
        off: "Off",
        cancel: "Cancel",
        confirm: "Confirm",
        save: "Save",
        submit: "Submit",
        submitting: "Submitting...",
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
            navigate: "Navigate",
            select: "Select",
            open: "Open",
            back: "Back",
            switch_panel: "Switch panel",
            switch_option: "Change",
            next_field: "Next field",
            filter: "Filter",
            toggle_auto_renew: "Toggle auto-renew",
            new_ticket: "New ticket",
            mark_read: "Mark as read",
            edit_profile: "Edit profile",
            sign_in: "Sign in",
            notifications: "Notifications",
            user_menu: "Account",
            refresh: "Refresh",
            help: "Help",
            quit: "Quit",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        dashboard: "Dashboard",
        services: "Services",
        domains: "Domains",
        support: "Support",
        billing: "Billing",
        profile: "Profile",
        unread: "unread",
        account_menu: "Alt+u account",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    login: LoginTexts {
        title: "Sign in",
        subtitle: "Manage your services, domains and billing",
        email: "Email",
        password: "Password",
        sign_in: "Sign in",
        signing_in: "Signing in...",
        demo_hint: "Demo account: john.doe@example.com / password123",
    },

    dashboard: DashboardTexts {
        welcome: "Welcome back",
        active_services: "Active services",
        expiring_soon: "Expiring soon",
        open_tickets: "Open tickets",
        unread_notifications: "Unread",
        expiring_title: "Expiring within 30 days",
        recent_title: "Recent notifications",
        nothing_expiring: "Nothing expires in the next 30 days.",
        no_notifications: "You're all caught up.",
        days_left: "days left",
    },

    services: ServicesTexts {
        col_name: "Name",
        col_type: "Type",
        col_status: "Status",
        col_expiry: "Expires",
        col_auto_renew: "Auto-renew",
        col_price: "Price",
        filter_label: "Show",
        filter_all: "All",
        filter_active: "Active",
        filter_expiring: "Expiring soon",
        filter_domains: "Domains",
        no_services: "No services match this filter.",
    },

    domains: DomainsTexts {
        col_domain: "Domain",
        col_status: "Status",
        col_expiry: "Expires",
        col_lock: "Lock",
        col_nameservers: "Nameservers",
        locked: "Locked",
        unlocked: "Unlocked",
        no_domains: "You have no registered domains.",
    },

    dns_records: DnsRecordsTexts {
        title: "DNS Records",
        nameservers: "Nameservers",
        col_type: "Type",
        col_name: "Name",
        col_value: "Value",
        col_ttl: "TTL",
        col_priority: "Priority",
        no_records: "No DNS records for this domain.",
    },

    support: SupportTexts {
        col_subject: "Subject",
        col_category: "Category",
        col_status: "Status",
        col_priority: "Priority",
        col_updated: "Updated",
        no_tickets: "No support tickets yet. Press Alt+a to open one.",
        ticket_title: "Ticket",
        staff: "Support",
        no_messages: "No messages yet.",
    },

    billing: BillingTexts {
        outstanding: "Outstanding balance",
        invoices_title: "Invoices",
        payment_methods_title: "Payment methods",
        col_number: "Invoice",
        col_issued: "Issued",
        col_due: "Due",
        col_amount: "Amount",
        col_status: "Status",
        default_badge: "default",
        no_invoices: "No invoices.",
        no_payment_methods: "No payment methods on file.",
    },

    profile: ProfileTexts {
        personal_title: "Personal information",
        name: "Name",
        email: "Email",
        phone: "Phone",
        company: "Company",
        addresses: "Addresses",
        two_factor: "Two-factor auth",
        member_since: "Member since",
        preferences_title: "Preferences",
        theme: "Theme",
        language: "Language",
        theme_dark: "Dark",
        theme_light: "Light",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        help_title: "Help",
        error_title: "Error",
        confirm_title: "Please confirm",
        enable_auto_renew: "Turn ON auto-renew for",
        disable_auto_renew: "Turn OFF auto-renew for",
        sign_out_confirm: "Sign out of the portal?",
        new_ticket_title: "New Support Ticket",
        category: "Category",
        priority: "Priority",
        subject: "Subject",
        body: "Describe the issue",
        edit_profile_title: "Edit Profile",
        first_name: "First name",
        last_name: "Last name",
        email: "Email",
        phone: "Phone",
        company: "Company",
        notifications_title: "Notifications",
        no_notifications: "No notifications.",
        user_menu_title: "Account",
        menu_profile: "My profile",
        menu_sign_out: "Sign out",
        close_hint: "Press Esc to close",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        signed_in: "Signed in as",
        signed_out: "You have been signed out",
        refreshing: "Refreshing...",
        profile_updated: "Profile updated",
        ticket_created: "Ticket created",
        auto_renew_enabled: "Auto-renew enabled for",
        auto_renew_disabled: "Auto-renew disabled for",
        preferences_saved: "Preferences saved",
        preferences_not_saved: "Could not save preferences",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        global_title: "Global shortcuts",
        actions_title: "Page actions",
        switch_panel: "Switch panel",
        move_selection: "Move up/down",
        confirm: "Open / confirm",
        back: "Back / close",
        refresh: "Refresh page",
        notifications: "Notifications",
        user_menu: "Account menu",
        quit: "Quit",
        new_ticket: "New ticket (Support)",
        edit_profile: "Edit profile (Profile)",
        switch_option: "Change filter / option",
    },
};
