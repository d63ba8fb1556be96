//!
//! src/update/mod.rs
//! Update 层：消费 Message，修改 Model
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;        // 后台结果（写 Store / 页面本地数据）
//!         mod content;        // 内容面板消息（按页面分发）
//!         mod modal;          // 弹窗消息（按弹窗类型分发）
//!         mod navigation;     // 导航栏消息
//!
//!         pub fn update(app: &mut App, msg: AppMessage)
//!
//!
//! Update 层是唯一修改 Model 的地方，但它从不等待 I/O：
//!     - 需要数据时，调用 app.load(...) / app.push_command(...) 排队；
//!     - 结果回来时，主循环会再送来一条 AppMessage::Backend(...)。
//!
//! 于是一次完整的请求是两次 update：
//!
//!     Content(Confirm) ──▶ update ──▶ app.commands += Mutate(Login)
//!                                              │
//!                                       PortalService
//!                                              │
//!     Backend(Mutated) ──▶ update ──▶ Store::set_user + navigate(Dashboard)
//!

mod backend;
mod content;
mod modal;
mod navigation;

use customer_portal_core::Route;

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::{App, FocusPanel, Page};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 有弹窗或在登录页时不切换焦点
            if !app.modal.is_open() && app.current_page != Page::Login {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Backend(backend_msg) => {
            backend::update(app, backend_msg);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                // 如果有弹窗打开，先关闭弹窗
                app.modal.close();
            } else if app.current_page.is_detail_page() {
                // 如果在详情页，返回父页面
                app.current_page = Page::from_route(app.current_page.route());
                app.clear_status();
            } else if app.focus.is_content() && app.current_page != Page::Login {
                app.focus = FocusPanel::Navigation;
            }
        }

        AppMessage::Refresh => {
            if app.is_authenticated() {
                app.set_status(t().status.refreshing);
                app.refresh();
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ShowNotifications => {
            if app.is_authenticated() {
                app.modal.show_notifications();
            }
        }

        AppMessage::ShowUserMenu => {
            if app.is_authenticated() {
                app.modal.show_user_menu();
            }
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 跳转到某个路由（经过守卫），切换页面时清除状态消息
pub fn go_to(app: &mut App, route: Route) {
    app.clear_status();
    app.navigate(route);
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Utc;
    use customer_portal_core::api::SeedData;
    use customer_portal_core::hooks::{
        Billing, Mutation, MutationData, MutationKind, MutationResult, StoreData, StoreHook,
        StoreHookResult,
    };
    use customer_portal_core::types::DnsRecordType;
    use customer_portal_core::CoreError;

    use super::*;
    use crate::message::{BackendMessage, Command, ContentMessage, ModalMessage};
    use crate::model::state::Modal;

    fn seed() -> SeedData {
        SeedData::generate(Utc::now())
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            update(app, AppMessage::Content(ContentMessage::Input(ch)));
        }
    }

    fn mutated(kind: MutationKind, result: Result<MutationData, CoreError>) -> AppMessage {
        AppMessage::Backend(BackendMessage::Mutated(MutationResult { kind, result }))
    }

    /// 已登录、Store 中已有种子数据的应用
    fn signed_in_app() -> App {
        let seed = seed();
        let mut app = App::default();
        update(
            &mut app,
            mutated(MutationKind::Login, Ok(MutationData::LoggedIn(seed.user))),
        );
        for (hook, data) in [
            (StoreHook::Services, StoreData::Services(seed.services)),
            (StoreHook::Tickets, StoreData::Tickets(seed.tickets)),
            (
                StoreHook::Notifications,
                StoreData::Notifications(seed.notifications),
            ),
        ] {
            update(
                &mut app,
                AppMessage::Backend(BackendMessage::Loaded(StoreHookResult {
                    hook,
                    result: Ok(data),
                })),
            );
        }
        app.take_commands();
        app
    }

    #[test]
    fn login_submits_credentials_once() {
        let mut app = App::default();
        type_text(&mut app, "john.doe@example.com");
        update(&mut app, AppMessage::Content(ContentMessage::NextField));
        type_text(&mut app, "password123");

        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        update(&mut app, AppMessage::Content(ContentMessage::Confirm));

        let commands = app.take_commands();
        assert_eq!(commands.len(), 1);
        match &commands[0] {
            Command::Mutate(Mutation::Login(credentials)) => {
                assert_eq!(credentials.email, "john.doe@example.com");
                assert_eq!(credentials.password, "password123");
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(app.login.submitting);
    }

    #[test]
    fn empty_password_is_not_submitted() {
        let mut app = App::default();
        type_text(&mut app, "jane@example.com");

        update(&mut app, AppMessage::Content(ContentMessage::Confirm));

        assert!(app.take_commands().is_empty());
        let password = app.login.field("password").unwrap();
        assert_eq!(password.visible_error(), Some("This field is required"));
    }

    #[test]
    fn wrong_credentials_reach_the_backend() {
        let mut app = App::default();
        type_text(&mut app, "jane@example.com");
        update(&mut app, AppMessage::Content(ContentMessage::NextField));
        type_text(&mut app, "secret");

        update(&mut app, AppMessage::Content(ContentMessage::Confirm));

        let commands = app.take_commands();
        assert!(matches!(
            commands.as_slice(),
            [Command::Mutate(Mutation::Login(credentials))] if credentials.password == "secret"
        ));
        assert!(app.login.field("password").unwrap().visible_error().is_none());

        update(
            &mut app,
            mutated(MutationKind::Login, Err(CoreError::InvalidCredentials)),
        );
        assert_eq!(
            app.login.error.as_deref(),
            Some("Invalid email or password")
        );
    }

    #[test]
    fn rejected_login_shows_form_error() {
        let mut app = App::default();
        app.login.submitting = true;

        update(
            &mut app,
            mutated(MutationKind::Login, Err(CoreError::InvalidCredentials)),
        );

        assert_eq!(app.current_page, Page::Login);
        assert!(!app.login.submitting);
        assert_eq!(
            app.login.error.as_deref(),
            Some("Invalid email or password")
        );
    }

    #[test]
    fn successful_login_lands_on_dashboard_and_loads() {
        let mut app = App::default();
        update(
            &mut app,
            mutated(MutationKind::Login, Ok(MutationData::LoggedIn(seed().user))),
        );

        assert_eq!(app.current_page, Page::Dashboard);
        assert!(app.focus.is_navigation());
        assert!(app.store.state().loading);
        let commands = app.take_commands();
        assert!(commands.contains(&Command::Load(StoreHook::Services)));
        assert!(commands.contains(&Command::Load(StoreHook::Notifications)));
    }

    #[test]
    fn failed_load_keeps_data_and_reports() {
        let mut app = signed_in_app();
        update(
            &mut app,
            AppMessage::Backend(BackendMessage::Loaded(StoreHookResult {
                hook: StoreHook::Services,
                result: Err(CoreError::RequestFailed("Failed to load services.".to_string())),
            })),
        );

        let state = app.store.state();
        assert_eq!(state.services.len(), 6);
        assert_eq!(state.error.as_deref(), Some("Failed to load services."));
        assert!(!state.loading);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Failed to load services.")
        );
    }

    #[test]
    fn dns_records_for_other_domain_are_discarded() {
        let mut app = signed_in_app();
        app.open_dns_records("svc_1".to_string(), "example.com".to_string());
        assert!(app.dns_records.records.loading);

        let record = seed().services[0].domain.as_ref().unwrap().dns_records[0].clone();
        update(
            &mut app,
            AppMessage::Backend(BackendMessage::DnsRecords {
                domain_id: "svc_2".to_string(),
                result: Ok(vec![record.clone()]),
            }),
        );
        assert!(app.dns_records.records.data.is_none());
        assert!(app.dns_records.records.loading);

        update(
            &mut app,
            AppMessage::Backend(BackendMessage::DnsRecords {
                domain_id: "svc_1".to_string(),
                result: Ok(vec![record]),
            }),
        );
        assert_eq!(app.dns_records.len(), 1);
        assert_eq!(
            app.dns_records.selected_record().map(|r| r.record_type),
            Some(DnsRecordType::A)
        );
    }

    #[test]
    fn domains_confirm_opens_dns_page() {
        let mut app = signed_in_app();
        go_to(&mut app, Route::Domains);
        app.take_commands();

        update(&mut app, AppMessage::Content(ContentMessage::Confirm));

        assert!(matches!(
            app.current_page,
            Page::DnsRecords { ref domain_name, .. } if domain_name == "example.com"
        ));
        assert_eq!(
            app.take_commands(),
            vec![Command::LoadDnsRecords("svc_1".to_string())]
        );

        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.current_page, Page::Domains);
    }

    #[test]
    fn auto_renew_requires_confirmation() {
        let mut app = signed_in_app();
        go_to(&mut app, Route::Services);
        app.take_commands();

        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        assert!(matches!(app.modal.active, Some(Modal::Confirm { .. })));

        // 默认焦点在取消上
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));
        assert!(app.take_commands().is_empty());
        assert!(!app.modal.is_open());

        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        update(&mut app, AppMessage::Modal(ModalMessage::ToggleConfirmFocus));
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));
        assert_eq!(
            app.take_commands(),
            vec![Command::Mutate(Mutation::ToggleAutoRenew("svc_1".to_string()))]
        );
    }

    #[test]
    fn failed_auto_renew_opens_error_modal() {
        let mut app = signed_in_app();
        update(
            &mut app,
            mutated(
                MutationKind::ToggleAutoRenew,
                Err(CoreError::RequestFailed("Network error".to_string())),
            ),
        );
        assert!(matches!(
            &app.modal.active,
            Some(Modal::Error { message, .. }) if message == "Network error"
        ));

        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));
        assert!(!app.modal.is_open());
    }

    #[test]
    fn rejected_profile_update_marks_fields() {
        let mut app = signed_in_app();
        go_to(&mut app, Route::Profile);
        update(&mut app, AppMessage::Content(ContentMessage::Edit));
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        let commands = app.take_commands();
        assert!(commands
            .iter()
            .any(|c| matches!(c, Command::Mutate(Mutation::UpdateProfile(_)))));

        let mut errors = BTreeMap::new();
        errors.insert("email".to_string(), "Email is already in use".to_string());
        update(
            &mut app,
            mutated(
                MutationKind::UpdateProfile,
                Err(CoreError::Validation {
                    message: "Please correct the highlighted fields".to_string(),
                    errors,
                }),
            ),
        );

        let Some(Modal::EditProfile { form }) = &app.modal.active else {
            panic!("edit profile modal should stay open");
        };
        assert!(!form.submitting);
        assert_eq!(
            form.field("email").and_then(|f| f.visible_error()),
            Some("Email is already in use")
        );
        assert_eq!(form.field("phone").and_then(|f| f.visible_error()), None);
    }

    #[test]
    fn mark_read_only_for_unread_notifications() {
        let mut app = signed_in_app();
        update(&mut app, AppMessage::ShowNotifications);

        let first_unread = app
            .store
            .state()
            .notifications
            .iter()
            .position(|n| !n.read)
            .unwrap();
        for _ in 0..first_unread {
            update(&mut app, AppMessage::Modal(ModalMessage::SelectNext));
        }
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        let commands = app.take_commands();
        assert_eq!(commands.len(), 1);
        assert!(matches!(
            commands[0],
            Command::Mutate(Mutation::MarkNotificationRead(_))
        ));
    }

    #[test]
    fn logout_clears_session_and_returns_to_login() {
        let mut app = signed_in_app();
        update(&mut app, AppMessage::ShowUserMenu);
        update(&mut app, AppMessage::Modal(ModalMessage::SelectNext));
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));
        update(&mut app, AppMessage::Modal(ModalMessage::ToggleConfirmFocus));
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));
        assert_eq!(
            app.take_commands(),
            vec![Command::Mutate(Mutation::Logout)]
        );

        update(
            &mut app,
            mutated(MutationKind::Logout, Ok(MutationData::LoggedOut)),
        );

        assert_eq!(app.current_page, Page::Login);
        let state = app.store.state();
        assert!(!state.is_authenticated());
        assert!(state.services.is_empty());
        assert_eq!(state.unread_count, 0);
    }

    #[test]
    fn late_profile_load_after_logout_is_ignored() {
        let mut app = signed_in_app();
        update(
            &mut app,
            mutated(MutationKind::Logout, Ok(MutationData::LoggedOut)),
        );

        update(
            &mut app,
            AppMessage::Backend(BackendMessage::Loaded(StoreHookResult {
                hook: StoreHook::Profile,
                result: Ok(StoreData::Profile(seed().user)),
            })),
        );

        assert_eq!(app.current_page, Page::Login);
        assert!(!app.is_authenticated());
        assert!(app.store.state().user.is_none());
    }

    #[test]
    fn billing_page_tracks_local_resource() {
        let mut app = signed_in_app();
        go_to(&mut app, Route::Billing);
        assert_eq!(app.take_commands(), vec![Command::LoadBilling]);
        assert!(app.billing.billing.loading);

        let seed = seed();
        update(
            &mut app,
            AppMessage::Backend(BackendMessage::Billing(Ok(Billing {
                invoices: seed.invoices,
                payment_methods: seed.payment_methods,
            }))),
        );
        assert!(!app.billing.billing.loading);
        assert_eq!(app.billing.invoice_count(), 4);

        update(
            &mut app,
            AppMessage::Backend(BackendMessage::Billing(Err(CoreError::RequestFailed(
                "Failed to load invoices.".to_string(),
            )))),
        );
        assert_eq!(app.billing.invoice_count(), 4);
        assert!(app.billing.billing.error.is_some());
    }

    #[test]
    fn theme_toggle_queues_config_save() {
        let mut app = signed_in_app();
        go_to(&mut app, Route::Profile);
        app.take_commands();

        update(&mut app, AppMessage::Content(ContentMessage::ToggleNext));

        let commands = app.take_commands();
        let [Command::SaveConfig(config)] = commands.as_slice() else {
            panic!("expected a single config save, got {commands:?}");
        };
        assert_eq!(config.theme, app.preferences.theme);
        crate::view::theme::set_theme(crate::view::theme::Theme::Dark);
    }
}
