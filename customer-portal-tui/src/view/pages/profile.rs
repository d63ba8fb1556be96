//! 个人资料页面视图
//!
//! 上半部分是只读的个人信息（Alt+e 打开编辑弹窗），下半部分是偏好设置。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::event::keymap::DefaultKeymap;
use crate::i18n::t;
use crate::model::state::PreferenceItem;
use crate::model::App;
use crate::view::components::card::{self, Card};
use crate::view::theme::{colors, Styles, Theme};

/// 信息标签宽度
const INFO_LABEL_WIDTH: usize = 18;
/// 设置项的标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 16;
/// 值区域的宽度（包含 ◀ ▶ 符号）
const VALUE_WIDTH: usize = 20;

/// 渲染个人资料页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(6)])
        .split(area);

    render_personal(app, frame, layout[0]);
    render_preferences(app, frame, layout[1]);
}

fn render_personal(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let profile = &texts.profile;
    let state = app.store.state();

    let Some(ref user) = state.user else {
        let message = if state.loading {
            texts.common.loading
        } else {
            texts.common.no_data
        };
        Card::new(profile.personal_title)
            .lines(vec![Line::styled(format!("  {message}"), Styles::muted())])
            .render(frame, area);
        return;
    };

    let two_factor = if user.two_factor_enabled {
        texts.common.on
    } else {
        texts.common.off
    };

    let mut lines = vec![
        card::field_row(profile.name, user.full_name(), INFO_LABEL_WIDTH),
        card::field_row(profile.email, user.email.clone(), INFO_LABEL_WIDTH),
        card::field_row(profile.phone, user.phone.clone(), INFO_LABEL_WIDTH),
        card::field_row(
            profile.company,
            user.company.clone().unwrap_or_else(|| "-".to_string()),
            INFO_LABEL_WIDTH,
        ),
        card::field_row(profile.two_factor, two_factor.to_string(), INFO_LABEL_WIDTH),
        card::field_row(
            profile.member_since,
            user.created_at.format("%Y-%m-%d").to_string(),
            INFO_LABEL_WIDTH,
        ),
    ];

    if !user.addresses.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("  {}", profile.addresses),
            Styles::muted(),
        ));
        for address in &user.addresses {
            let marker = if address.is_default { "★ " } else { "  " };
            lines.push(Line::styled(
                format!("    {marker}{}", address.one_line()),
                Style::default().fg(colors().fg),
            ));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("  {}", DefaultKeymap::EDIT_PROFILE.label), Styles::hint_key()),
        Span::styled(format!(" {}", texts.hints.actions.edit_profile), Styles::hint_desc()),
    ]));

    Card::new(profile.personal_title)
        .lines(lines)
        .render(frame, area);
}

fn render_preferences(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let preferences = &app.preferences;
    let focused = app.focus.is_content();

    let lines: Vec<Line> = PreferenceItem::all()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let (label, value) = match item {
                PreferenceItem::Theme => (
                    texts.profile.theme,
                    match preferences.theme {
                        Theme::Dark => texts.profile.theme_dark,
                        Theme::Light => texts.profile.theme_light,
                    },
                ),
                PreferenceItem::Language => {
                    (texts.profile.language, preferences.language.display_name())
                }
            };
            render_setting_row(label, value, focused && i == preferences.selected_index)
        })
        .collect();

    Card::new(texts.profile.preferences_title)
        .lines(lines)
        .render(frame, area);
}

/// 渲染单行设置项
fn render_setting_row<'a>(label: &'a str, value: &'a str, is_selected: bool) -> Line<'a> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };

    let value_style = if is_selected {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    // 使用 unicode-width 计算显示宽度
    let label_padding = LABEL_WIDTH.saturating_sub(label.width());
    let available_space = VALUE_WIDTH.saturating_sub(4);
    let left_padding = available_space.saturating_sub(value.width()) / 2;

    let (open, close) = if is_selected { ("◀ ", " ▶") } else { ("  ", "  ") };

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(label, label_style),
        Span::raw(" ".repeat(label_padding)),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(open, Styles::hint_key()),
        Span::raw(" ".repeat(left_padding)),
        Span::styled(value, value_style),
        Span::styled(close, Styles::hint_key()),
    ])
}
