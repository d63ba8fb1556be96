//! 按钮组件
//!
//! 终端里的按钮就是一段带背景色的文字，样式由 变体 × 状态 决定：
//!
//!     状态优先级：loading > disabled > focused > 普通
//!
//!     loading   显示加载文字，灰色，不响应
//!     disabled  灰色
//!     focused   反色（变体颜色作背景）
//!     普通      变体颜色作前景

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::i18n::t;
use crate::view::theme::colors;

/// 按钮变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

/// 按钮
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button<'a> {
    label: &'a str,
    variant: Variant,
    focused: bool,
    disabled: bool,
    loading: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: Variant::default(),
            focused: false,
            disabled: false,
            loading: false,
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// 显示的文字（两侧留一格空白）
    pub fn text(&self) -> String {
        let label = if self.loading {
            t().common.submitting
        } else {
            self.label
        };
        format!(" {label} ")
    }

    pub fn style(&self) -> Style {
        let c = colors();
        if self.loading || self.disabled {
            return Style::default().fg(c.muted);
        }

        let accent = match self.variant {
            Variant::Primary => c.highlight,
            Variant::Secondary => c.fg,
            Variant::Danger => c.error,
        };
        if self.focused {
            Style::default()
                .fg(c.bg)
                .bg(accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent)
        }
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(self.text(), self.style())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_inverts_colors() {
        let plain = Button::new("Delete").variant(Variant::Danger);
        let focused = plain.clone().focused(true);
        assert_eq!(plain.style().bg, None);
        assert!(focused.style().bg.is_some());
        assert!(focused.style().add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn loading_wins_over_focus() {
        let button = Button::new("Save").focused(true).loading(true);
        assert_eq!(button.style().bg, None);
        assert_ne!(button.text(), " Save ");
    }
}
