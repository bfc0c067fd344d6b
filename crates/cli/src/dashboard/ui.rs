use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Clear, List, ListItem, Paragraph, Wrap},
};
use rust_decimal::{Decimal, prelude::ToPrimitive};

use super::{
    app::{App, Computed},
    description::{DESCRIPTION, TITLE},
};
use crate::format::{format_currency, format_pay_option};

/// Bar heights are payoffs in thousandths; negative payoffs draw as empty bars.
const BAR_SCALE: i64 = 1000;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());
    let [pay_area, output_area] =
        Layout::horizontal([Constraint::Length(24), Constraint::Min(0)]).areas(body);
    let [card_area, chart_area] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(output_area);

    frame.render_widget(
        Paragraph::new("Determine optimal bid price to send to auction based on advertiser pay")
            .block(Block::bordered().title(TITLE)),
        header,
    );

    draw_pay_list(frame, app, pay_area);
    draw_card(frame, app.computed.as_ref(), card_area);
    draw_chart(frame, app.computed.as_ref(), chart_area);

    frame.render_widget(
        Line::from("up/down: advertiser pay  enter: optimal bid  d: description  q: quit").dim(),
        footer,
    );

    if app.show_description {
        draw_description(frame, body);
    }

    if let Some(popup) = &app.popup {
        let area = centered(frame.area(), 60, 7);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(popup.message.as_str())
                .wrap(Wrap { trim: true })
                .block(Block::bordered().title(popup.title).red()),
            area,
        );
    }
}

fn draw_pay_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .pay_options()
        .iter()
        .map(|pay| ListItem::new(format_pay_option(*pay)))
        .collect();

    let list = List::new(items)
        .block(Block::bordered().title("Select advertiser pay"))
        .highlight_style(Style::new().reversed())
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.pay_list);
}

fn draw_card(frame: &mut Frame, computed: Option<&Computed>, area: Rect) {
    let lines = match computed {
        Some(computed) => vec![
            Line::from(format_currency(computed.optimal.bid_price.as_decimal()))
                .bold()
                .fg(Color::Yellow),
            Line::from(format!(
                "expected payoff {} at {} advertiser pay",
                computed.optimal.expected_payoff,
                format_currency(computed.optimal.advertiser_pay.as_decimal())
            )),
        ],
        None => vec![Line::from("-").dim()],
    };

    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title("Optimal bid")),
        area,
    );
}

fn draw_chart(frame: &mut Frame, computed: Option<&Computed>, area: Rect) {
    let block = Block::bordered().title("Expected payoff per bid price");

    let Some(computed) = computed else {
        frame.render_widget(Paragraph::new("No advertiser pay evaluated yet").block(block), area);
        return;
    };

    let bars: Vec<Bar> = computed
        .valuations
        .iter()
        .map(|valuation| {
            let bar = Bar::default()
                .value(bar_height(valuation.expected_payoff))
                .text_value(valuation.expected_payoff.round_dp(3).to_string())
                .label(Line::from(valuation.bid_price.to_string()));
            if valuation.bid_price == computed.optimal.bid_price {
                bar.style(Style::new().fg(Color::Yellow))
            } else {
                bar
            }
        })
        .collect();

    frame.render_widget(
        BarChart::default()
            .block(block.title_bottom(format!(
                "advertiser pay {}",
                format_currency(computed.optimal.advertiser_pay.as_decimal())
            )))
            .bar_width(7)
            .bar_gap(1)
            .data(BarGroup::default().bars(&bars)),
        area,
    );
}

fn draw_description(frame: &mut Frame, area: Rect) {
    let area = centered(area, 80, area.height.saturating_sub(2));
    let lines: Vec<Line> = DESCRIPTION.iter().map(|line| Line::from(*line)).collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title("Project description")),
        area,
    );
}

fn bar_height(payoff: Decimal) -> u64 {
    payoff
        .max(Decimal::ZERO)
        .checked_mul(Decimal::from(BAR_SCALE))
        .and_then(|scaled| scaled.round().to_u64())
        .unwrap_or(u64::MAX)
}

fn centered(area: Rect, width_percent: u16, height: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(width_percent.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
