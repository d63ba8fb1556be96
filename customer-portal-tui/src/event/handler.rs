//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::Modal;
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 终端窗口大小改变等，下一帧自动重绘
    }
}

/// 可作为文本输入的字符（允许 Shift，用于大写字母和 @ 等符号）
fn text_input(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            Some(ch)
        }
        _ => None,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C 始终退出
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 登录页：除了上面的全局键，其余按键都交给登录表单
    if matches!(app.current_page, Page::Login) {
        return handle_login_keys(key);
    }

    if key.modifiers.is_empty() && key.code == KeyCode::Char('?') {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::NOTIFICATIONS.matches(&key) {
        return AppMessage::ShowNotifications;
    }

    if DefaultKeymap::USER_MENU.matches(&key) {
        return AppMessage::ShowUserMenu;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理登录表单的按键
fn handle_login_keys(key: KeyEvent) -> AppMessage {
    if let Some(ch) = text_input(&key) {
        return AppMessage::Content(ContentMessage::Input(ch));
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Content(ContentMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Content(ContentMessage::PrevField),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        _ => AppMessage::Noop,
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 通用操作快捷键
    if DefaultKeymap::NEW_TICKET.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::EDIT_PROFILE.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }

    // ← →: 服务筛选 / 偏好设置切换
    if matches!(app.current_page, Page::Services | Page::Profile) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                return AppMessage::Content(ContentMessage::TogglePrev);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                return AppMessage::Content(ContentMessage::ToggleNext);
            }
            _ => {}
        }
    }

    handle_list_keys(key)
}

/// 处理列表类页面的按键（通用）
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        // End: 跳到最后一项
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 始终可以关闭弹窗
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        Modal::Confirm { .. } => handle_confirm_keys(key),
        Modal::NewTicket(draft) => handle_form_keys(key, draft.is_text_focus()),
        Modal::EditProfile { .. } => handle_form_keys(key, true),
        Modal::Notifications { .. } | Modal::UserMenu { .. } => handle_modal_list_keys(key),
    }
}

/// 处理确认弹窗的按键
fn handle_confirm_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab 或 ← →: 切换焦点
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleConfirmFocus)
        }

        // Enter: 确认
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        _ => AppMessage::Noop,
    }
}

/// 处理表单弹窗的按键
///
/// `text_focus` 为假时焦点在选择器上：← → 切换选项，字符不输入。
fn handle_form_keys(key: KeyEvent, text_focus: bool) -> AppMessage {
    if text_focus {
        if let Some(ch) = text_input(&key) {
            return AppMessage::Modal(ModalMessage::Input(ch));
        }
    }

    match key.code {
        // Tab / ↓: 下一个字段
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),

        // Shift+Tab / ↑: 上一个字段
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),

        // ← →: 切换选项（仅当焦点在选择器上时）
        KeyCode::Left if !text_focus => AppMessage::Modal(ModalMessage::PrevOption),
        KeyCode::Right if !text_focus => AppMessage::Modal(ModalMessage::NextOption),

        // Enter: 提交
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),

        _ => AppMessage::Noop,
    }
}

/// 处理列表弹窗（通知、用户菜单）的按键
fn handle_modal_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Modal(ModalMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Modal(ModalMessage::SelectNext),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn login_page_takes_plain_characters() {
        let app = App::default();
        let msg = handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Content(ContentMessage::Input('q'))));

        let msg = handle_event(press(KeyCode::Char('@'), KeyModifiers::SHIFT), &app);
        assert!(matches!(msg, AppMessage::Content(ContentMessage::Input('@'))));
    }

    #[test]
    fn ctrl_c_quits_even_with_modal() {
        let mut app = App::default();
        app.modal.show_help();
        let msg = handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app);
        assert!(matches!(msg, AppMessage::Quit));
    }

    #[test]
    fn esc_closes_modal() {
        let mut app = App::default();
        app.modal.show_help();
        let msg = handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::Close)));
    }

    #[test]
    fn content_keys_follow_page() {
        let mut app = App::default();
        app.current_page = Page::Services;
        app.focus = FocusPanel::Content;

        let msg = handle_event(press(KeyCode::Right, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Content(ContentMessage::ToggleNext)));

        app.focus = FocusPanel::Navigation;
        let msg = handle_event(press(KeyCode::Down, KeyModifiers::NONE), &app);
        assert!(matches!(
            msg,
            AppMessage::Navigation(NavigationMessage::SelectNext)
        ));
    }

    #[test]
    fn selector_focus_ignores_characters() {
        let mut app = App::default();
        app.current_page = Page::Support;
        app.modal.show_new_ticket();

        let msg = handle_event(press(KeyCode::Char('x'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Noop));
        let msg = handle_event(press(KeyCode::Left, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::PrevOption)));
    }
}
