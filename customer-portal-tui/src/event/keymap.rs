//! 快捷键配置
//!
//! 内容区的普通字符可能是表单输入，因此页面操作统一使用 Alt 组合键。
//! 每个绑定自带显示文本，状态栏和帮助弹窗直接引用，避免提示与实际按键不一致。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 单个快捷键
#[derive(Debug, Clone, Copy)]
pub struct Shortcut {
    modifiers: KeyModifiers,
    code: KeyCode,
    /// 提示中显示的按键文本，如 "Alt+n"
    pub label: &'static str,
}

impl Shortcut {
    const fn plain(code: KeyCode, label: &'static str) -> Self {
        Self {
            modifiers: KeyModifiers::NONE,
            code,
            label,
        }
    }

    const fn alt(ch: char, label: &'static str) -> Self {
        Self {
            modifiers: KeyModifiers::ALT,
            code: KeyCode::Char(ch),
            label,
        }
    }

    const fn ctrl(ch: char, label: &'static str) -> Self {
        Self {
            modifiers: KeyModifiers::CONTROL,
            code: KeyCode::Char(ch),
            label,
        }
    }

    /// 判断按键是否触发此快捷键
    ///
    /// 字符键忽略 Shift 和大小写（Caps Lock 打开时 Alt+N 也算 Alt+n）。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = key.modifiers - KeyModifiers::SHIFT;
        if modifiers != self.modifiers {
            return false;
        }
        match (self.code, key.code) {
            (KeyCode::Char(want), KeyCode::Char(got)) => want.eq_ignore_ascii_case(&got),
            (want, got) => want == got,
        }
    }
}

/// 默认快捷键
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: Shortcut = Shortcut::alt('q', "Alt+q");
    pub const FORCE_QUIT: Shortcut = Shortcut::ctrl('c', "Ctrl+c");
    pub const HELP: Shortcut = Shortcut::alt('h', "Alt+h");
    pub const REFRESH: Shortcut = Shortcut::alt('r', "Alt+r");
    pub const BACK: Shortcut = Shortcut::plain(KeyCode::Esc, "Esc");
    pub const SWITCH_PANEL: Shortcut = Shortcut::plain(KeyCode::Tab, "Tab");

    // 导航栏右侧
    pub const NOTIFICATIONS: Shortcut = Shortcut::alt('n', "Alt+n");
    pub const USER_MENU: Shortcut = Shortcut::alt('u', "Alt+u");

    // 页面操作
    pub const NEW_TICKET: Shortcut = Shortcut::alt('a', "Alt+a");
    pub const EDIT_PROFILE: Shortcut = Shortcut::alt('e', "Alt+e");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn alt_shortcut_ignores_case_and_shift() {
        let upper = key(KeyCode::Char('N'), KeyModifiers::ALT | KeyModifiers::SHIFT);
        assert!(DefaultKeymap::NOTIFICATIONS.matches(&upper));
        assert!(DefaultKeymap::NOTIFICATIONS.matches(&key(KeyCode::Char('n'), KeyModifiers::ALT)));
    }

    #[test]
    fn plain_character_is_not_a_shortcut() {
        assert!(!DefaultKeymap::QUIT.matches(&key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(!DefaultKeymap::FORCE_QUIT.matches(&key(KeyCode::Char('c'), KeyModifiers::ALT)));
    }
}
