//! 弹窗/对话框状态

use customer_portal_core::validation::FormState;

use super::TicketDraft;

/// 需要二次确认的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// 切换自动续费（服务 ID，切换后的目标值）
    ToggleAutoRenew {
        service_id: String,
        service_name: String,
        enable: bool,
    },
    /// 退出登录
    SignOut,
}

/// 用户菜单项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuItem {
    Profile,
    SignOut,
}

impl UserMenuItem {
    pub fn all() -> &'static [UserMenuItem] {
        &[UserMenuItem::Profile, UserMenuItem::SignOut]
    }
}

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 帮助
    Help,
    /// 错误提示
    Error { title: String, message: String },
    /// 确认操作
    Confirm {
        action: ConfirmAction,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 新建工单
    NewTicket(TicketDraft),
    /// 编辑个人资料
    EditProfile { form: FormState },
    /// 通知列表
    Notifications { selected: usize },
    /// 用户菜单
    UserMenu { selected: usize },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.show(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示确认弹窗（默认焦点在取消上）
    pub fn show_confirm(&mut self, action: ConfirmAction) {
        self.show(Modal::Confirm { action, focus: 0 });
    }

    /// 显示新建工单弹窗
    pub fn show_new_ticket(&mut self) {
        self.show(Modal::NewTicket(TicketDraft::new()));
    }

    /// 显示编辑资料弹窗
    pub fn show_edit_profile(&mut self, form: FormState) {
        self.show(Modal::EditProfile { form });
    }

    /// 显示通知列表
    pub fn show_notifications(&mut self) {
        self.show(Modal::Notifications { selected: 0 });
    }

    /// 显示用户菜单
    pub fn show_user_menu(&mut self) {
        self.show(Modal::UserMenu { selected: 0 });
    }

    /// 当前弹窗中的表单（用于挂载提交结果）
    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        match self.active.as_mut()? {
            Modal::NewTicket(draft) => Some(&mut draft.form),
            Modal::EditProfile { form } => Some(form),
            _ => None,
        }
    }
}
