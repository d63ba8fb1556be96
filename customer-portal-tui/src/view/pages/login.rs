//! 登录页面视图

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::components::button::Button;
use crate::view::components::input::{self, FIELD_HEIGHT};
use crate::view::theme::{colors, Styles};

const FORM_WIDTH: u16 = 54;

/// 渲染登录页面（表单居中）
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let form = &app.login;

    #[allow(clippy::cast_possible_truncation)]
    let field_rows = FIELD_HEIGHT * form.len() as u16;
    // 副标题 2 + 字段 + 错误 1 + 按钮 1 + 空行 1 + 演示账号 1 + 边框 2
    let height = 2 + field_rows + 1 + 1 + 1 + 1 + 2;
    let width = FORM_WIDTH.min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let form_area = Rect::new(x, y, width, height.min(area.height));

    frame.render_widget(Clear, form_area);

    let block = Block::default()
        .title(format!(" {} ", texts.login.title))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(true));

    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let mut lines = vec![
        Line::styled(
            format!("  {}", texts.login.subtitle),
            Style::default().fg(c.fg).add_modifier(Modifier::ITALIC),
        ),
        Line::from(""),
    ];

    for (i, (_, field)) in form.fields().enumerate() {
        lines.extend(input::field_lines(field, i == form.focus));
    }

    lines.push(input::form_error_line(form.error.as_deref()));

    // 邮箱为空时按钮显示为禁用（回车仍会触发校验）
    let button = Button::new(texts.login.sign_in)
        .focused(true)
        .disabled(form.value("email").trim().is_empty())
        .loading(form.submitting);
    let button_text = if form.submitting {
        texts.login.signing_in
    } else {
        texts.login.sign_in
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!(" {button_text} "), button.style()),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("  {}", texts.login.demo_hint),
        Styles::muted(),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}
