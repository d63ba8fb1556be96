//! 卡片组件：带标题的边框 + 若干行内容

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::icon::Tone;
use crate::util::pad_to_width;
use crate::view::theme::{colors, Styles};

/// 卡片
pub struct Card<'a> {
    title: &'a str,
    accent: Option<Tone>,
    lines: Vec<Line<'a>>,
}

impl<'a> Card<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            accent: None,
            lines: Vec::new(),
        }
    }

    /// 用色调给边框着色（例如到期提醒用黄色）
    #[must_use]
    pub fn accent(mut self, tone: Tone) -> Self {
        self.accent = Some(tone);
        self
    }

    #[must_use]
    pub fn lines(mut self, lines: Vec<Line<'a>>) -> Self {
        self.lines = lines;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let border_style = self.accent.map_or_else(|| Styles::border(false), Tone::style);
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(Styles::title())
            .borders(Borders::ALL)
            .border_style(border_style);

        let paragraph = Paragraph::new(self.lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

/// 统计卡片：一个大号数字 + 一行说明
pub fn stat(frame: &mut Frame, area: Rect, title: &str, value: usize, tone: Tone) {
    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {value}"),
            tone.style().add_modifier(Modifier::BOLD),
        ),
    ];
    let card = Card::new(title).lines(lines);
    let card = if value > 0 && tone != Tone::Normal {
        card.accent(tone)
    } else {
        card
    };
    card.render(frame, area);
}

/// 卡片内的 "标签: 值" 行
pub fn field_row<'a>(label: &'a str, value: String, label_width: usize) -> Line<'a> {
    let c = colors();
    Line::from(vec![
        Span::styled(
            format!("  {}", pad_to_width(label, label_width)),
            Style::default().fg(c.muted),
        ),
        Span::styled(value, Style::default().fg(c.fg)),
    ])
}
