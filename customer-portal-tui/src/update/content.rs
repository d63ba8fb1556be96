//! 内容面板更新逻辑
//!
//! 处理内容面板中的各种操作消息，按当前页面分发

use customer_portal_core::hooks::Mutation;

use crate::i18n::set_language;
use crate::message::{Command, ContentMessage};
use crate::model::state::{credentials, profile_form, ConfirmAction, PreferenceItem};
use crate::model::{App, Page};
use crate::view::theme::set_theme;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    if matches!(app.current_page, Page::Login) {
        handle_login(app, msg);
        return;
    }

    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => handle_select_previous(app),
        ContentMessage::SelectNext => handle_select_next(app),
        ContentMessage::SelectFirst => handle_select_first(app),
        ContentMessage::SelectLast => handle_select_last(app),
        ContentMessage::Confirm => handle_confirm(app),

        // ========== 页面操作 ==========
        ContentMessage::Add => handle_add(app),
        ContentMessage::Edit => handle_edit(app),

        // ========== 切换项 ==========
        ContentMessage::TogglePrev => handle_toggle(app, false),
        ContentMessage::ToggleNext => handle_toggle(app, true),

        // 表单输入只在登录页有意义
        ContentMessage::Input(_)
        | ContentMessage::Backspace
        | ContentMessage::NextField
        | ContentMessage::PrevField => {}
    }
}

// ========== 登录表单 ==========

fn handle_login(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::Input(ch) => app.login.input(ch),
        ContentMessage::Backspace => app.login.backspace(),
        ContentMessage::NextField | ContentMessage::SelectNext => app.login.focus_next(),
        ContentMessage::PrevField | ContentMessage::SelectPrevious => app.login.focus_prev(),
        ContentMessage::Confirm => submit_login(app),
        _ => {}
    }
}

fn submit_login(app: &mut App) {
    if app.login.submitting {
        return;
    }
    if !app.login.submit() {
        log::debug!("Login form has errors, not submitting");
        return;
    }

    app.login.submitting = true;
    let credentials = credentials(&app.login);
    app.push_command(Command::Mutate(Mutation::Login(credentials)));
}

// ========== 列表导航处理 ==========

/// 当前页面列表长度
fn list_len(app: &App) -> usize {
    let state = app.store.state();
    match &app.current_page {
        Page::Services => app.services.visible(&state.services, app.today()).len(),
        Page::Domains => state.domains().count(),
        Page::DnsRecords { .. } => app.dns_records.len(),
        Page::Support => state.tickets.len(),
        Page::Billing => app.billing.invoice_count(),
        _ => 0,
    }
}

fn handle_select_previous(app: &mut App) {
    match &app.current_page {
        Page::Services => app.services.selection.select_previous(),
        Page::Domains => app.domains.select_previous(),
        Page::DnsRecords { .. } => app.dns_records.selection.select_previous(),
        Page::Support => app.support.select_previous(),
        Page::Billing => app.billing.selection.select_previous(),
        Page::Profile => app.preferences.select_previous(),
        _ => {}
    }
}

fn handle_select_next(app: &mut App) {
    let len = list_len(app);
    match &app.current_page {
        Page::Services => app.services.selection.select_next(len),
        Page::Domains => app.domains.select_next(len),
        Page::DnsRecords { .. } => app.dns_records.selection.select_next(len),
        Page::Support => app.support.select_next(len),
        Page::Billing => app.billing.selection.select_next(len),
        Page::Profile => app.preferences.select_next(),
        _ => {}
    }
}

fn handle_select_first(app: &mut App) {
    match &app.current_page {
        Page::Services => app.services.selection.select_first(),
        Page::Domains => app.domains.select_first(),
        Page::DnsRecords { .. } => app.dns_records.selection.select_first(),
        Page::Support => app.support.select_first(),
        Page::Billing => app.billing.selection.select_first(),
        _ => {}
    }
}

fn handle_select_last(app: &mut App) {
    let len = list_len(app);
    match &app.current_page {
        Page::Services => app.services.selection.select_last(len),
        Page::Domains => app.domains.select_last(len),
        Page::DnsRecords { .. } => app.dns_records.selection.select_last(len),
        Page::Support => app.support.select_last(len),
        Page::Billing => app.billing.selection.select_last(len),
        _ => {}
    }
}

fn handle_confirm(app: &mut App) {
    match &app.current_page {
        Page::Services => {
            // 切换自动续费（先确认）
            let state = app.store.state();
            if let Some(service) = app.services.selected(&state.services, app.today()) {
                let action = ConfirmAction::ToggleAutoRenew {
                    service_id: service.id.clone(),
                    service_name: service.name.clone(),
                    enable: !service.auto_renew,
                };
                app.modal.show_confirm(action);
            }
        }
        Page::Domains => {
            // 进入 DNS 记录页面
            let selected = app
                .store
                .state()
                .domains()
                .nth(app.domains.selected)
                .map(|s| (s.id.clone(), s.name.clone()));
            if let Some((domain_id, domain_name)) = selected {
                app.clear_status();
                app.open_dns_records(domain_id, domain_name);
            }
        }
        Page::Support => {
            // 进入工单详情
            let selected = app
                .store
                .state()
                .tickets
                .get(app.support.selected)
                .map(|ticket| ticket.id.clone());
            if let Some(ticket_id) = selected {
                app.clear_status();
                app.open_ticket(ticket_id);
            }
        }
        Page::Profile => handle_toggle(app, true),
        _ => {}
    }
}

// ========== 页面操作处理 ==========

fn handle_add(app: &mut App) {
    if matches!(app.current_page, Page::Support | Page::TicketDetail { .. }) {
        app.modal.show_new_ticket();
    }
}

fn handle_edit(app: &mut App) {
    if !matches!(app.current_page, Page::Profile) {
        return;
    }
    let form = app.store.state().user.as_ref().map(profile_form);
    if let Some(form) = form {
        app.modal.show_edit_profile(form);
    }
}

// ========== 切换项处理 ==========

fn handle_toggle(app: &mut App, forward: bool) {
    match &app.current_page {
        Page::Services => {
            let filter = if forward {
                app.services.filter.next()
            } else {
                app.services.filter.prev()
            };
            app.services.set_filter(filter);
        }
        Page::Profile => toggle_preference(app),
        _ => {}
    }
}

/// 切换偏好设置：立即生效，并保存到配置文件
fn toggle_preference(app: &mut App) {
    match app.preferences.toggle() {
        Some(PreferenceItem::Theme) => {
            set_theme(app.preferences.theme);
            app.config.theme = app.preferences.theme;
        }
        Some(PreferenceItem::Language) => {
            set_language(app.preferences.language);
            app.config.language = app.preferences.language.code().to_string();
        }
        None => return,
    }
    app.push_command(Command::SaveConfig(app.config.clone()));
    log::info!(
        "Preferences changed: theme={:?}, language={}",
        app.config.theme,
        app.config.language
    );
}
