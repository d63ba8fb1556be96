//! 后台结果更新逻辑
//!
//! 把 Backend 层送回的结果写入 Store 或页面本地状态。

use customer_portal_core::hooks::{self, MutationData, MutationKind, MutationResult};
use customer_portal_core::Route;

use crate::i18n::t;
use crate::message::BackendMessage;
use crate::model::{App, FocusPanel, Page};

/// 处理后台结果消息
pub fn update(app: &mut App, msg: BackendMessage) {
    match msg {
        // 登出后才到达的读取结果属于已结束的会话，写入会让 Store 重新变成已登录
        BackendMessage::Loaded(outcome) if !app.is_authenticated() => {
            log::debug!("Discarding {} result, session has ended", outcome.hook.name());
        }
        BackendMessage::Billing(_) if !app.is_authenticated() => {
            log::debug!("Discarding billing result, session has ended");
        }

        BackendMessage::Loaded(outcome) => {
            if let Err(e) = hooks::complete(&mut app.store, outcome) {
                app.set_status(e.to_string());
            }
            app.clamp_selections();
        }

        BackendMessage::Billing(result) => {
            app.billing.billing.finish(result);
            let len = app.billing.invoice_count();
            app.billing.selection.clamp(len);
        }

        BackendMessage::DnsRecords { domain_id, result } => {
            let showing = matches!(
                &app.current_page,
                Page::DnsRecords { domain_id: current, .. } if *current == domain_id
            );
            if showing && app.dns_records.is_current(&domain_id) {
                app.dns_records.records.finish(result);
                let len = app.dns_records.len();
                app.dns_records.selection.clamp(len);
            } else {
                log::debug!("Discarding DNS records of {domain_id}, no longer shown");
            }
        }

        BackendMessage::Mutated(outcome) => handle_mutation(app, outcome),

        BackendMessage::ConfigSaved(result) => {
            let status = &t().status;
            match result {
                Ok(()) => app.set_status(status.preferences_saved),
                Err(e) => app.set_status(format!("{}: {e}", status.preferences_not_saved)),
            }
        }
    }
}

// ========== 变更结果 ==========

fn handle_mutation(app: &mut App, outcome: MutationResult) {
    let kind = outcome.kind;
    match hooks::apply(&mut app.store, outcome) {
        Ok(data) => handle_mutation_success(app, data),
        Err(e) => match kind {
            MutationKind::Login => {
                app.login.submitting = false;
                app.login.error = Some(e.to_string());
            }
            MutationKind::UpdateProfile | MutationKind::CreateTicket => {
                if let Some(form) = app.modal.form_mut() {
                    form.submitting = false;
                    form.apply_server_errors(&e.field_errors());
                    form.error = Some(e.to_string());
                } else {
                    app.set_status(e.to_string());
                }
            }
            MutationKind::Logout | MutationKind::ToggleAutoRenew => {
                app.modal.show_error(t().modal.error_title, &e.to_string());
            }
            MutationKind::MarkNotificationRead => app.set_status(e.to_string()),
        },
    }
}

fn handle_mutation_success(app: &mut App, data: MutationData) {
    let status = &t().status;
    match data {
        MutationData::LoggedIn(user) => {
            app.login.submitting = false;
            app.focus = FocusPanel::Navigation;
            app.navigate(Route::Dashboard);
            app.set_status(format!("{} {}", status.signed_in, user.full_name()));
        }
        MutationData::LoggedOut => {
            app.reset_pages();
            app.navigate(Route::Login);
            app.set_status(status.signed_out);
        }
        MutationData::ProfileUpdated(_) => {
            app.modal.close();
            app.set_status(status.profile_updated);
        }
        MutationData::ServiceUpdated(service) => {
            let prefix = if service.auto_renew {
                status.auto_renew_enabled
            } else {
                status.auto_renew_disabled
            };
            app.set_status(format!("{prefix} {}", service.name));
        }
        MutationData::TicketCreated(ticket) => {
            app.modal.close();
            app.support.select_first();
            app.set_status(format!("{}: {}", status.ticket_created, ticket.subject));
        }
        MutationData::NotificationUpdated(_) => {}
    }
}
