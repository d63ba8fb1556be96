//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::event::keymap::DefaultKeymap;
use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let hints = get_hints(app);
    let separator = Style::default().fg(c.muted);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", separator));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 加载中 / 状态消息放在最后
    if app.store.state().loading {
        spans.push(Span::styled(" │ ", separator));
        spans.push(Span::styled(t().common.loading, Style::default().fg(c.info)));
    }
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", separator));
        spans.push(Span::styled(msg.clone(), Style::default().fg(c.warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let mut hints = Vec::new();

    if app.modal.is_open() {
        hints.push((keys.tab, actions.next_field));
        hints.push((keys.enter, actions.select));
        hints.push((keys.esc, actions.back));
        return hints;
    }

    if app.current_page == Page::Login {
        hints.push((keys.tab, actions.next_field));
        hints.push((keys.enter, actions.sign_in));
        hints.push((DefaultKeymap::QUIT.label, actions.quit));
        return hints;
    }

    hints.push((keys.tab, actions.switch_panel));

    match app.focus {
        FocusPanel::Navigation => {
            hints.push((keys.arrows_ud, actions.navigate));
            hints.push((keys.enter, actions.open));
        }
        FocusPanel::Content => match &app.current_page {
            Page::Login | Page::Dashboard | Page::Billing => {
                hints.push((keys.arrows_ud, actions.select));
            }
            Page::Services => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.arrows_lr, actions.filter));
                hints.push((keys.enter, actions.toggle_auto_renew));
            }
            Page::Domains => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.enter, actions.open));
            }
            Page::DnsRecords { .. } => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.esc, actions.back));
            }
            Page::Support => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.enter, actions.open));
                hints.push((DefaultKeymap::NEW_TICKET.label, actions.new_ticket));
            }
            Page::TicketDetail { .. } => {
                hints.push((DefaultKeymap::NEW_TICKET.label, actions.new_ticket));
                hints.push((keys.esc, actions.back));
            }
            Page::Profile => {
                hints.push((keys.arrows_lr, actions.switch_option));
                hints.push((DefaultKeymap::EDIT_PROFILE.label, actions.edit_profile));
            }
        },
    }

    hints.push((DefaultKeymap::NOTIFICATIONS.label, actions.notifications));
    hints.push((DefaultKeymap::USER_MENU.label, actions.user_menu));
    hints.push((DefaultKeymap::REFRESH.label, actions.refresh));
    hints.push((DefaultKeymap::HELP.label, actions.help));
    hints.push((DefaultKeymap::QUIT.label, actions.quit));

    hints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_page_only_offers_form_keys() {
        let app = App::default();
        let hints = get_hints(&app);
        assert_eq!(hints.len(), 3);
        assert!(hints.iter().all(|(key, _)| *key != DefaultKeymap::NOTIFICATIONS.label));
    }
}
