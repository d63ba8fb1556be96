//! 表单字段组件
//!
//! 一个字段渲染成三行：
//!
//!     Email *                     ← 标签（必填带 *）
//!       john.doe@example.com▎     ← 输入框（聚焦时带光标，密码显示为 •）
//!       ✓                         ← 校验结果（错误 / 成功 / 空行）
//!
//! 是否显示错误完全由 `FieldState` 决定（未 touched 不显示内部错误，
//! 服务端错误优先），这里只负责把状态画出来。

use customer_portal_core::validation::FieldState;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::view::theme::colors;

/// 每个字段占的行数
pub const FIELD_HEIGHT: u16 = 3;

/// 密码最多显示多少个点
const MAX_MASK: usize = 24;

/// 输入框里显示的文字
pub fn display_value(field: &FieldState) -> String {
    if field.secret {
        "•".repeat(field.value.chars().count().min(MAX_MASK))
    } else {
        field.value.clone()
    }
}

/// 渲染一个字段
pub fn field_lines(field: &FieldState, focused: bool) -> Vec<Line<'static>> {
    let c = colors();

    // === 标签 ===
    let label_style = if focused {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let mut label = vec![Span::styled(field.label, label_style)];
    if field.is_required() {
        label.push(Span::styled(" *", Style::default().fg(c.error)));
    }

    // === 输入框 ===
    let error = field.visible_error();
    let value_style = if error.is_some() {
        Style::default().fg(c.error)
    } else if focused {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    let cursor = if focused { "▎" } else { "" };
    let value = Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{}{cursor}", display_value(field)), value_style),
    ]);

    // === 校验结果 ===
    let feedback = if let Some(message) = error {
        Line::styled(format!("  ⚠ {message}"), Style::default().fg(c.error))
    } else if field.is_success() {
        Line::styled("  ✓", Style::default().fg(c.success))
    } else {
        Line::from("")
    };

    vec![Line::from(label), value, feedback]
}

/// 表单级错误（例如登录被拒）
pub fn form_error_line(error: Option<&str>) -> Line<'static> {
    match error {
        Some(message) => Line::styled(
            format!("  ⚠ {message}"),
            Style::default().fg(colors().error),
        ),
        None => Line::from(""),
    }
}

#[cfg(test)]
mod tests {
    use customer_portal_core::validation;

    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn untouched_invalid_field_shows_no_error() {
        let field = FieldState::new("Email", validation::email()).with_value("nope");
        let lines = field_lines(&field, false);
        assert_eq!(lines.len(), FIELD_HEIGHT as usize);
        assert_eq!(line_text(&lines[0]), "Email *");
        assert_eq!(line_text(&lines[2]), "");
    }

    #[test]
    fn touched_invalid_field_shows_error() {
        let mut field = FieldState::new("Email", validation::email()).with_value("nope");
        field.blur();
        let lines = field_lines(&field, false);
        assert!(line_text(&lines[2]).starts_with("  ⚠ "));
    }

    #[test]
    fn valid_touched_field_shows_success() {
        let mut field =
            FieldState::new("Email", validation::email()).with_value("john.doe@example.com");
        field.blur();
        assert_eq!(line_text(&field_lines(&field, false)[2]), "  ✓");
    }

    #[test]
    fn secret_value_is_masked_with_cursor_when_focused() {
        let field = FieldState::new("Password", validation::password())
            .secret()
            .with_value("hunter22");
        let lines = field_lines(&field, true);
        assert_eq!(line_text(&lines[1]), "  ••••••••▎");
    }
}
