//! 账单页面视图
//!
//! 数据来自页面本地的 `Resource<Billing>`，加载失败时保留上次的数据并显示错误。

use customer_portal_core::hooks::Billing;
use customer_portal_core::types::{format_money, outstanding_total, Invoice};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::util::pad_to_width;
use crate::view::components::card::Card;
use crate::view::components::icon::{self, Tone};
use crate::view::theme::{colors, Styles};

const NUMBER_WIDTH: usize = 14;
const DATE_WIDTH: usize = 12;
const AMOUNT_WIDTH: usize = 14;

/// 渲染账单页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let resource = &app.billing.billing;

    let Some(ref billing) = resource.data else {
        let mut content = vec![Line::from("")];
        match resource.error {
            Some(ref error) => {
                content.push(Line::styled(
                    format!("  ⚠ {error}"),
                    Style::default().fg(colors().error),
                ));
                content.push(Line::styled(
                    format!("  {}", texts.common.retry_hint),
                    Styles::muted(),
                ));
            }
            None => content.push(Line::styled(
                format!("  {}", texts.common.loading),
                Styles::muted(),
            )),
        }
        frame.render_widget(Paragraph::new(content), area);
        return;
    };

    #[allow(clippy::cast_possible_truncation)]
    let methods_height = billing.payment_methods.len().max(1) as u16 + 2;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),              // 待付总额 / 错误
            Constraint::Min(4),                 // 发票
            Constraint::Length(methods_height), // 付款方式
        ])
        .split(area);

    render_summary(app, billing, frame, layout[0]);
    render_invoices(app, billing, frame, layout[1]);
    render_payment_methods(billing, frame, layout[2]);
}

fn render_summary(app: &App, billing: &Billing, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let outstanding = outstanding_total(&billing.invoices);
    let currency = billing
        .invoices
        .first()
        .map_or("USD", |invoice| invoice.currency.as_str());
    let tone = if outstanding > 0 {
        Tone::Warning
    } else {
        Tone::Success
    };

    let mut spans = vec![
        Span::styled(format!("  {}: ", texts.billing.outstanding), Styles::muted()),
        Span::styled(
            format_money(outstanding, currency),
            tone.style().add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(ref error) = app.billing.billing.error {
        spans.push(Span::styled(
            format!("   ⚠ {error}"),
            Style::default().fg(c.error),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_invoices(app: &App, billing: &Billing, frame: &mut Frame, area: Rect) {
    let texts = t();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            format!("  {}", texts.billing.invoices_title),
            Styles::title(),
        )),
        layout[0],
    );

    if billing.invoices.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!("  {}", texts.billing.no_invoices),
                Styles::muted(),
            )),
            layout[2],
        );
        return;
    }

    let header = format!(
        "    {}{}{}{}{}",
        pad_to_width(texts.billing.col_number, NUMBER_WIDTH),
        pad_to_width(texts.billing.col_issued, DATE_WIDTH),
        pad_to_width(texts.billing.col_due, DATE_WIDTH),
        pad_to_width(texts.billing.col_amount, AMOUNT_WIDTH),
        texts.billing.col_status,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(header, Styles::header())),
        layout[1],
    );

    let selected = app.billing.selection.selected;
    let items: Vec<ListItem> = billing
        .invoices
        .iter()
        .enumerate()
        .map(|(i, invoice)| ListItem::new(invoice_line(invoice, i == selected)))
        .collect();

    let list = List::new(items).highlight_style(Style::default());
    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, layout[2], &mut state);
}

fn invoice_line(invoice: &Invoice, is_selected: bool) -> Line<'static> {
    let c = colors();
    let base = if is_selected {
        Styles::selected()
    } else {
        Style::default().fg(c.fg)
    };
    let status = icon::invoice_status(invoice.status);
    let status_style = if is_selected { base } else { status.tone.style() };

    Line::from(vec![
        Span::styled(if is_selected { "▶ " } else { "  " }, base),
        status.span(),
        Span::styled(" ", base),
        Span::styled(pad_to_width(&invoice.number, NUMBER_WIDTH), base),
        Span::styled(
            pad_to_width(&invoice.issue_date.to_string(), DATE_WIDTH),
            base,
        ),
        Span::styled(pad_to_width(&invoice.due_date.to_string(), DATE_WIDTH), base),
        Span::styled(
            pad_to_width(
                &format_money(invoice.amount_cents, &invoice.currency),
                AMOUNT_WIDTH,
            ),
            base,
        ),
        Span::styled(invoice.status.display_name(), status_style),
    ])
}

fn render_payment_methods(billing: &Billing, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let lines: Vec<Line> = if billing.payment_methods.is_empty() {
        vec![Line::styled(
            format!("  {}", texts.billing.no_payment_methods),
            Styles::muted(),
        )]
    } else {
        billing
            .payment_methods
            .iter()
            .map(|method| {
                let mut spans = vec![Span::styled(
                    format!("  {}", method.masked_label()),
                    Style::default().fg(c.fg),
                )];
                if method.is_default {
                    spans.push(Span::styled(
                        format!("  [{}]", texts.billing.default_badge),
                        Style::default().fg(c.success),
                    ));
                }
                Line::from(spans)
            })
            .collect()
    };

    Card::new(texts.billing.payment_methods_title)
        .lines(lines)
        .render(frame, area);
}
