//! 表单构建
//!
//! 字段键名与后端返回的字段错误键名一致，服务端错误可以直接挂到对应字段上。

use customer_portal_core::types::{
    Credentials, NewTicket, ProfileUpdate, TicketCategory, TicketPriority, User,
};
use customer_portal_core::validation::{self, FieldState, FormState, RuleSet};

use crate::i18n::t;

/// 登录表单
///
/// 只检查必填，格式与长度交给后端判断，错误凭证统一得到 "Invalid email or password"。
pub fn login_form() -> FormState {
    let texts = &t().login;
    FormState::new(vec![
        ("email", FieldState::new(texts.email, RuleSet::new().required())),
        (
            "password",
            FieldState::new(texts.password, RuleSet::new().required()).secret(),
        ),
    ])
}

/// 从登录表单取出凭证
pub fn credentials(form: &FormState) -> Credentials {
    Credentials {
        email: form.value("email"),
        password: form
            .field("password")
            .map(|f| f.value.clone())
            .unwrap_or_default(),
    }
}

/// 编辑资料表单（以当前用户信息预填）
pub fn profile_form(user: &User) -> FormState {
    let texts = &t().modal;
    FormState::new(vec![
        (
            "firstName",
            FieldState::new(texts.first_name, validation::name()).with_value(&user.first_name),
        ),
        (
            "lastName",
            FieldState::new(texts.last_name, validation::name()).with_value(&user.last_name),
        ),
        (
            "email",
            FieldState::new(texts.email, validation::email()).with_value(&user.email),
        ),
        (
            "phone",
            FieldState::new(texts.phone, validation::phone()).with_value(&user.phone),
        ),
        (
            "company",
            FieldState::new(texts.company, RuleSet::new().max_length(100))
                .with_value(user.company.clone().unwrap_or_default()),
        ),
    ])
}

/// 从资料表单取出更新内容
pub fn profile_update(form: &FormState) -> ProfileUpdate {
    ProfileUpdate {
        first_name: form.value("firstName"),
        last_name: form.value("lastName"),
        email: form.value("email"),
        phone: form.value("phone"),
        company: form.field("company").and_then(FieldState::optional_value),
    }
}

/// 新建工单草稿
///
/// 焦点顺序：分类、优先级，然后是文本字段（主题、描述）。
#[derive(Debug, Clone)]
pub struct TicketDraft {
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub form: FormState,
    pub focus: usize,
}

/// 分类与优先级两个选择器
const SELECTORS: usize = 2;

impl TicketDraft {
    pub fn new() -> Self {
        let texts = &t().modal;
        Self {
            category: TicketCategory::Technical,
            priority: TicketPriority::Medium,
            form: FormState::new(vec![
                (
                    "subject",
                    FieldState::new(texts.subject, validation::ticket_subject()),
                ),
                ("body", FieldState::new(texts.body, validation::ticket_body())),
            ]),
            focus: 0,
        }
    }

    fn slot_count(&self) -> usize {
        SELECTORS + self.form.len()
    }

    /// 焦点是否在文本字段上
    pub fn is_text_focus(&self) -> bool {
        self.focus >= SELECTORS
    }

    fn move_focus(&mut self, to: usize) {
        if self.is_text_focus() {
            if let Some(field) = self.form.focused_mut() {
                field.blur();
            }
        }
        self.focus = to;
        if self.is_text_focus() {
            self.form.focus = self.focus - SELECTORS;
        }
    }

    pub fn next_field(&mut self) {
        self.move_focus((self.focus + 1) % self.slot_count());
    }

    pub fn prev_field(&mut self) {
        let count = self.slot_count();
        self.move_focus((self.focus + count - 1) % count);
    }

    /// 在选择器上切换选项，`forward` 为向右
    pub fn cycle_option(&mut self, forward: bool) {
        match self.focus {
            0 => self.category = cycle(TicketCategory::all(), self.category, forward),
            1 => self.priority = cycle(TicketPriority::all(), self.priority, forward),
            _ => {}
        }
    }

    pub fn input(&mut self, ch: char) {
        if self.is_text_focus() {
            self.form.input(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.is_text_focus() {
            self.form.backspace();
        }
    }

    /// 校验所有字段，通过时返回要提交的工单
    pub fn submit(&mut self) -> Option<NewTicket> {
        if !self.form.submit() {
            return None;
        }
        Some(NewTicket {
            category: self.category,
            subject: self.form.value("subject"),
            body: self.form.value("body"),
            priority: self.priority,
        })
    }
}

impl Default for TicketDraft {
    fn default() -> Self {
        Self::new()
    }
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let len = options.len();
    let index = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    options[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_focus_walks_selectors_then_fields() {
        let mut draft = TicketDraft::new();
        assert!(!draft.is_text_focus());

        draft.cycle_option(false);
        assert_eq!(draft.category, TicketCategory::Other);

        draft.next_field();
        draft.cycle_option(true);
        assert_eq!(draft.priority, TicketPriority::High);

        draft.next_field();
        assert!(draft.is_text_focus());
        assert_eq!(draft.form.focus, 0);

        draft.prev_field();
        assert_eq!(draft.focus, 1);
        // 离开主题字段时已触发校验
        assert!(draft.form.field("subject").unwrap().touched);
    }

    #[test]
    fn draft_submit_requires_valid_fields() {
        let mut draft = TicketDraft::new();
        assert!(draft.submit().is_none());

        draft.next_field();
        draft.next_field();
        for ch in "Website down".chars() {
            draft.input(ch);
        }
        draft.next_field();
        for ch in "The site returns a 502 error since this morning".chars() {
            draft.input(ch);
        }

        let ticket = draft.submit().unwrap();
        assert_eq!(ticket.subject, "Website down");
        assert_eq!(ticket.priority, TicketPriority::Medium);
    }

    #[test]
    fn blank_company_becomes_none() {
        let form = FormState::new(vec![(
            "company",
            FieldState::new("Company", RuleSet::new()).with_value("  "),
        )]);
        assert_eq!(profile_update(&form).company, None);
    }
}
