//! 弹窗组件

use customer_portal_core::validation::FormState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::button::{Button, Variant};
use super::icon::{self, Tone};
use super::input::{self, FIELD_HEIGHT};
use crate::event::keymap::DefaultKeymap;
use crate::i18n::t;
use crate::model::state::{ConfirmAction, Modal, TicketDraft, UserMenuItem};
use crate::model::App;
use crate::util::truncate_to_width;
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Confirm { action, focus } => render_confirm(frame, action, *focus),
        Modal::NewTicket(draft) => render_new_ticket(frame, draft),
        Modal::EditProfile { form } => render_edit_profile(frame, form),
        Modal::Notifications { selected } => render_notifications(app, frame, *selected),
        Modal::UserMenu { selected } => render_user_menu(frame, *selected),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 清空背景并画出弹窗边框，返回内容区域
fn frame_modal(frame: &mut Frame, width: u16, height: u16, title: &str, tone: Tone) -> Rect {
    let c = colors();
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(tone.style())
        .style(Style::default().bg(c.bg));

    frame.render_widget(block, area);

    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 底部按键提示行
fn hint_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Styles::hint_desc()));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::styled(format!(" {desc}"), Styles::hint_desc()));
    }
    Line::from(spans)
}

fn form_hints() -> Line<'static> {
    let texts = t();
    let keys = &texts.hints.keys;
    hint_line(&[
        (keys.tab, texts.hints.actions.next_field),
        (keys.enter, texts.common.submit),
        (keys.esc, texts.common.cancel),
    ])
}

/// 表单所有字段
fn form_lines(form: &FormState, focused: Option<usize>) -> Vec<Line<'static>> {
    form.fields()
        .enumerate()
        .flat_map(|(i, (_, field))| input::field_lines(field, focused == Some(i)))
        .collect()
}

/// 提交按钮（提交中显示加载文字）
fn submit_line(form: &FormState, label: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Button::new(label)
            .loading(form.submitting)
            .focused(true)
            .span(),
    ])
}

// ========== 帮助 / 错误 ==========

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let help = &texts.help;
    let c = colors();
    let inner = frame_modal(frame, 56, 22, texts.modal.help_title, Tone::Info);

    let section = Style::default().fg(c.info).add_modifier(Modifier::BOLD);
    let row = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<9}"), Styles::hint_key()),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        Line::styled(help.global_title, section),
        Line::from(""),
        row(DefaultKeymap::SWITCH_PANEL.label, help.switch_panel),
        row("↑↓/jk", help.move_selection),
        row("Enter", help.confirm),
        row(DefaultKeymap::BACK.label, help.back),
        row(DefaultKeymap::REFRESH.label, help.refresh),
        row(DefaultKeymap::NOTIFICATIONS.label, help.notifications),
        row(DefaultKeymap::USER_MENU.label, help.user_menu),
        row(DefaultKeymap::QUIT.label, help.quit),
        Line::from(""),
        Line::styled(help.actions_title, section),
        Line::from(""),
        row("←→", help.switch_option),
        row(DefaultKeymap::NEW_TICKET.label, help.new_ticket),
        row(DefaultKeymap::EDIT_PROFILE.label, help.edit_profile),
        Line::from(""),
        Line::styled(texts.modal.close_hint, Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let texts = t();
    let inner = frame_modal(frame, 50, 8, title, Tone::Error);

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(colors().fg)),
        Line::from(""),
        Line::styled(texts.modal.close_hint, Styles::muted()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

// ========== 确认 ==========

/// 渲染确认弹窗（焦点 0=取消, 1=确认）
fn render_confirm(frame: &mut Frame, action: &ConfirmAction, focus: usize) {
    let texts = t();
    let c = colors();
    let inner = frame_modal(frame, 46, 9, texts.modal.confirm_title, Tone::Warning);

    let (question, subject, variant) = match action {
        ConfirmAction::ToggleAutoRenew {
            service_name,
            enable,
            ..
        } => {
            let question = if *enable {
                texts.modal.enable_auto_renew
            } else {
                texts.modal.disable_auto_renew
            };
            let variant = if *enable {
                Variant::Primary
            } else {
                Variant::Danger
            };
            (question, Some(service_name.as_str()), variant)
        }
        ConfirmAction::SignOut => (texts.modal.sign_out_confirm, None, Variant::Danger),
    };

    let mut lines = vec![
        Line::from(""),
        Line::styled(format!("  {question}"), Style::default().fg(c.fg)),
    ];
    match subject {
        Some(name) => lines.push(Line::styled(
            format!("  \"{name}\""),
            Style::default().fg(c.warning),
        )),
        None => lines.push(Line::from("")),
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("    "),
        Button::new(texts.common.cancel)
            .variant(Variant::Secondary)
            .focused(focus == 0)
            .span(),
        Span::raw("    "),
        Button::new(texts.common.confirm)
            .variant(variant)
            .focused(focus == 1)
            .span(),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

// ========== 表单 ==========

/// 渲染新建工单弹窗
fn render_new_ticket(frame: &mut Frame, draft: &TicketDraft) {
    let texts = t();
    let modal = &texts.modal;
    // 选择器 2×2 行 + 字段 + 错误 + 按钮 + 提示 + 边框
    let height = 4 + FIELD_HEIGHT * 2 + 1 + 2 + 2 + 2;
    let inner = frame_modal(frame, 64, height, modal.new_ticket_title, Tone::Info);

    let mut lines = Vec::new();
    lines.extend(selector_lines(
        modal.category,
        draft.category.display_name(),
        draft.focus == 0,
    ));
    lines.extend(selector_lines(
        modal.priority,
        draft.priority.display_name(),
        draft.focus == 1,
    ));

    let text_focus = draft.is_text_focus().then_some(draft.form.focus);
    lines.extend(form_lines(&draft.form, text_focus));
    lines.push(input::form_error_line(draft.form.error.as_deref()));
    lines.push(submit_line(&draft.form, texts.common.submit));
    lines.push(Line::from(""));
    lines.push(form_hints());

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 选择器：标签 + ◀ 值 ▶
fn selector_lines(label: &'static str, value: &'static str, focused: bool) -> Vec<Line<'static>> {
    let c = colors();
    let texts = t();

    let mut label_spans = vec![Span::styled(label, Styles::muted())];
    if focused {
        label_spans.push(Span::styled(
            format!(" ({} {})", texts.hints.keys.arrows_lr, texts.hints.actions.switch_option),
            Styles::hint_desc(),
        ));
    }

    let value_style = if focused {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    let value_line = format!(
        "  {} {} {}",
        if focused { "◀" } else { " " },
        value,
        if focused { "▶" } else { " " }
    );

    vec![Line::from(label_spans), Line::styled(value_line, value_style)]
}

/// 渲染编辑资料弹窗
fn render_edit_profile(frame: &mut Frame, form: &FormState) {
    let texts = t();
    #[allow(clippy::cast_possible_truncation)]
    let field_count = form.len() as u16;
    let height = FIELD_HEIGHT * field_count + 1 + 2 + 2 + 2;
    let inner = frame_modal(frame, 60, height, texts.modal.edit_profile_title, Tone::Info);

    let mut lines = form_lines(form, Some(form.focus));
    lines.push(input::form_error_line(form.error.as_deref()));
    lines.push(submit_line(form, texts.common.save));
    lines.push(Line::from(""));
    lines.push(form_hints());

    frame.render_widget(Paragraph::new(lines), inner);
}

// ========== 通知 / 用户菜单 ==========

/// 渲染通知列表（每条两行：标题 + 内容）
fn render_notifications(app: &App, frame: &mut Frame, selected: usize) {
    let texts = t();
    let c = colors();
    let notifications = &app.store.state().notifications;
    let inner = frame_modal(frame, 70, 20, texts.modal.notifications_title, Tone::Info);
    let width = usize::from(inner.width.saturating_sub(6));

    let mut lines = Vec::new();
    if notifications.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("  {}", texts.modal.no_notifications),
            Styles::muted(),
        ));
    }

    for (i, notification) in notifications.iter().enumerate() {
        let is_selected = i == selected;
        let prefix = if is_selected { "▶ " } else { "  " };
        let title_style = match (is_selected, notification.read) {
            (true, _) => Styles::selected(),
            (false, false) => Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
            (false, true) => Styles::muted(),
        };
        let unread_marker = if notification.read { "  " } else { "• " };

        lines.push(Line::from(vec![
            Span::styled(prefix, title_style),
            icon::notification(notification.notification_type).span(),
            Span::raw(" "),
            Span::styled(unread_marker, Style::default().fg(c.warning)),
            Span::styled(
                truncate_to_width(&notification.title, width.saturating_sub(18)),
                title_style,
            ),
            Span::styled(
                format!("  {}", notification.timestamp.format("%Y-%m-%d %H:%M")),
                Styles::muted(),
            ),
        ]));
        lines.push(Line::styled(
            format!("      {}", truncate_to_width(&notification.message, width)),
            Styles::muted(),
        ));
    }

    // 选中项尽量保持在可见范围内
    let visible_rows = usize::from(inner.height.saturating_sub(2));
    let scroll = (selected * 2 + 2).saturating_sub(visible_rows);
    #[allow(clippy::cast_possible_truncation)]
    let scroll = scroll as u16;

    let list_area = Rect::new(
        inner.x,
        inner.y,
        inner.width,
        inner.height.saturating_sub(2),
    );
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), list_area);

    let keys = &texts.hints.keys;
    let hints = hint_line(&[
        (keys.arrows_ud, texts.hints.actions.select),
        (keys.enter, texts.hints.actions.mark_read),
        (keys.esc, texts.common.cancel),
    ]);
    let hint_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    frame.render_widget(Paragraph::new(hints), hint_area);
}

/// 渲染用户菜单
fn render_user_menu(frame: &mut Frame, selected: usize) {
    let texts = t();
    let c = colors();
    let inner = frame_modal(frame, 32, 7, texts.modal.user_menu_title, Tone::Info);

    let mut lines = vec![Line::from("")];
    for (i, item) in UserMenuItem::all().iter().enumerate() {
        let is_selected = i == selected;
        let label = match item {
            UserMenuItem::Profile => texts.modal.menu_profile,
            UserMenuItem::SignOut => texts.modal.menu_sign_out,
        };
        let style = if is_selected {
            Styles::selected()
        } else if *item == UserMenuItem::SignOut {
            Style::default().fg(c.error)
        } else {
            Style::default().fg(c.fg)
        };
        let prefix = if is_selected { "▶ " } else { "  " };
        lines.push(Line::styled(format!("{prefix}{label}"), style));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
