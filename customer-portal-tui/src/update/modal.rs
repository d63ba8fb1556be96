//! 弹窗更新逻辑

use customer_portal_core::hooks::Mutation;
use customer_portal_core::Route;

use crate::message::{Command, ModalMessage};
use crate::model::state::{profile_update, ConfirmAction, Modal, UserMenuItem};
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close) {
        app.modal.close();
        return;
    }

    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help | Modal::Error { .. } => handle_simple_modal(app, &msg),
        Modal::Confirm { .. } => handle_confirm(app, &msg),
        Modal::NewTicket(_) => handle_new_ticket(app, msg),
        Modal::EditProfile { .. } => handle_edit_profile(app, msg),
        Modal::Notifications { .. } => handle_notifications(app, &msg),
        Modal::UserMenu { .. } => handle_user_menu(app, &msg),
    }
}

/// 帮助 / 错误弹窗：确认即关闭
fn handle_simple_modal(app: &mut App, msg: &ModalMessage) {
    if matches!(msg, ModalMessage::Confirm) {
        app.modal.close();
    }
}

/// 确认弹窗
fn handle_confirm(app: &mut App, msg: &ModalMessage) {
    let Some(Modal::Confirm {
        ref action,
        ref mut focus,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::ToggleConfirmFocus
        | ModalMessage::PrevOption
        | ModalMessage::NextOption
        | ModalMessage::NextField
        | ModalMessage::PrevField => {
            *focus = 1 - *focus;
        }
        ModalMessage::Confirm => {
            let confirmed = (*focus == 1).then(|| action.clone());
            app.modal.close();
            match confirmed {
                Some(ConfirmAction::ToggleAutoRenew { service_id, .. }) => {
                    app.push_command(Command::Mutate(Mutation::ToggleAutoRenew(service_id)));
                }
                Some(ConfirmAction::SignOut) => {
                    app.push_command(Command::Mutate(Mutation::Logout));
                }
                None => {}
            }
        }
        _ => {}
    }
}

/// 新建工单弹窗
fn handle_new_ticket(app: &mut App, msg: ModalMessage) {
    let Some(Modal::NewTicket(ref mut draft)) = app.modal.active else {
        return;
    };

    let mut command = None;
    match msg {
        ModalMessage::NextField => draft.next_field(),
        ModalMessage::PrevField => draft.prev_field(),
        ModalMessage::PrevOption => draft.cycle_option(false),
        ModalMessage::NextOption => draft.cycle_option(true),
        ModalMessage::Input(ch) => draft.input(ch),
        ModalMessage::Backspace => draft.backspace(),
        ModalMessage::Confirm => {
            if !draft.form.submitting {
                if let Some(ticket) = draft.submit() {
                    draft.form.submitting = true;
                    command = Some(Command::Mutate(Mutation::CreateTicket(ticket)));
                }
            }
        }
        _ => {}
    }

    if let Some(command) = command {
        app.push_command(command);
    }
}

/// 编辑资料弹窗
fn handle_edit_profile(app: &mut App, msg: ModalMessage) {
    let Some(Modal::EditProfile { ref mut form }) = app.modal.active else {
        return;
    };

    let mut command = None;
    match msg {
        ModalMessage::NextField => form.focus_next(),
        ModalMessage::PrevField => form.focus_prev(),
        ModalMessage::Input(ch) => form.input(ch),
        ModalMessage::Backspace => form.backspace(),
        ModalMessage::Confirm => {
            if !form.submitting && form.submit() {
                form.submitting = true;
                command = Some(Command::Mutate(Mutation::UpdateProfile(profile_update(
                    form,
                ))));
            }
        }
        _ => {}
    }

    if let Some(command) = command {
        app.push_command(command);
    }
}

/// 通知列表：确认即标记为已读
fn handle_notifications(app: &mut App, msg: &ModalMessage) {
    let len = app.store.state().notifications.len();
    let Some(Modal::Notifications { ref mut selected }) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::SelectPrevious | ModalMessage::PrevField => {
            *selected = selected.saturating_sub(1);
        }
        ModalMessage::SelectNext | ModalMessage::NextField => {
            if len > 0 && *selected < len - 1 {
                *selected += 1;
            }
        }
        ModalMessage::Confirm => {
            let index = *selected;
            let unread = app
                .store
                .state()
                .notifications
                .get(index)
                .filter(|n| !n.read)
                .map(|n| n.id.clone());
            if let Some(id) = unread {
                app.push_command(Command::Mutate(Mutation::MarkNotificationRead(id)));
            }
        }
        _ => {}
    }
}

/// 用户菜单
fn handle_user_menu(app: &mut App, msg: &ModalMessage) {
    let items = UserMenuItem::all();
    let Some(Modal::UserMenu { ref mut selected }) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::SelectPrevious | ModalMessage::PrevField => {
            *selected = selected.saturating_sub(1);
        }
        ModalMessage::SelectNext | ModalMessage::NextField => {
            if *selected < items.len() - 1 {
                *selected += 1;
            }
        }
        ModalMessage::Confirm => match items.get(*selected) {
            Some(UserMenuItem::Profile) => {
                app.modal.close();
                super::go_to(app, Route::Profile);
            }
            Some(UserMenuItem::SignOut) => {
                app.modal.show_confirm(ConfirmAction::SignOut);
            }
            None => {}
        },
        _ => {}
    }
}
