use optibid_core::{AdvertiserPay, BidValuator, OptimalBid, Valuation, select_optimal_bid};
use ratatui::{crossterm::event::KeyCode, widgets::ListState};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::format::{error_title, render_error};

/// Result of the last successful request, kept for the output card and chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Computed {
    pub optimal: OptimalBid,
    pub valuations: Vec<Valuation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub title: &'static str,
    pub message: String,
}

pub struct App {
    valuator: BidValuator,
    pay_options: Vec<Decimal>,
    pub pay_list: ListState,
    pub computed: Option<Computed>,
    pub popup: Option<Popup>,
    pub show_description: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(valuator: BidValuator, pay_options: Vec<Decimal>) -> Self {
        Self {
            valuator,
            pay_options,
            pay_list: ListState::default(),
            computed: None,
            popup: None,
            show_description: false,
            should_quit: false,
        }
    }

    pub fn pay_options(&self) -> &[Decimal] {
        &self.pay_options
    }

    pub fn selected_pay(&self) -> Option<Decimal> {
        self.pay_list
            .selected()
            .and_then(|idx| self.pay_options.get(idx).copied())
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        // Any key dismisses the popup.
        if self.popup.take().is_some() {
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('d') => self.show_description = !self.show_description,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn select_next(&mut self) {
        if self.pay_options.is_empty() {
            return;
        }
        let next = match self.pay_list.selected() {
            Some(idx) => (idx + 1).min(self.pay_options.len() - 1),
            None => 0,
        };
        self.pay_list.select(Some(next));
    }

    fn select_previous(&mut self) {
        if self.pay_options.is_empty() {
            return;
        }
        let previous = match self.pay_list.selected() {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        };
        self.pay_list.select(Some(previous));
    }

    pub fn submit(&mut self) {
        let advertiser_pay = self.selected_pay().map(AdvertiserPay::new);

        let result = self
            .valuator
            .valuations(advertiser_pay)
            .and_then(|valuations| {
                let optimal = select_optimal_bid(&valuations)?;
                Ok(Computed {
                    optimal,
                    valuations,
                })
            });

        match result {
            Ok(computed) => {
                info!(
                    advertiser_pay = %computed.optimal.advertiser_pay,
                    bid_price = %computed.optimal.bid_price,
                    "dashboard computed optimal bid"
                );
                self.computed = Some(computed);
            }
            Err(err) => {
                warn!(error = %err, "dashboard request rejected");
                self.popup = Some(Popup {
                    title: error_title(&err),
                    message: render_error(&err),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use optibid_core::{BidPrice, WinRateRecord, WinRateTable};

    use super::*;
    use crate::format::MISSING_PAY_MESSAGE;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn app() -> App {
        let table = WinRateTable::new(vec![
            WinRateRecord::new(d("0.1"), d("0.30")),
            WinRateRecord::new(d("0.5"), d("0.45")),
            WinRateRecord::new(d("1.0"), d("0.60")),
        ])
        .unwrap();
        App::new(
            BidValuator::new(table),
            vec![d("0.5"), d("1.0"), d("1.5"), d("2.0")],
        )
    }

    #[test]
    fn starts_with_nothing_selected() {
        let app = app();
        assert_eq!(app.selected_pay(), None);
        assert!(app.computed.is_none());
    }

    #[test]
    fn enter_without_selection_opens_popup() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);

        let popup = app.popup.as_ref().unwrap();
        assert_eq!(popup.title, "Missing parameters");
        assert_eq!(popup.message, MISSING_PAY_MESSAGE);
        assert!(app.computed.is_none());

        // The next key only closes the popup.
        app.handle_key(KeyCode::Char('q'));
        assert!(app.popup.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn enter_with_selection_computes_optimal_bid() {
        let mut app = app();
        for _ in 0..4 {
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.selected_pay(), Some(d("2.0")));

        app.handle_key(KeyCode::Enter);
        let computed = app.computed.as_ref().unwrap();
        assert_eq!(computed.optimal.bid_price, BidPrice::new(d("0.5")));
        assert_eq!(computed.valuations.len(), 3);
        assert!(app.popup.is_none());
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected_pay(), Some(d("0.5")));
        for _ in 0..10 {
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.selected_pay(), Some(d("2.0")));
    }

    #[test]
    fn empty_table_reports_through_popup() {
        let mut app = App::new(BidValuator::new(WinRateTable::empty()), vec![d("1")]);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.popup.as_ref().unwrap().title, "No win rate data");
        assert!(app.computed.is_none());
    }

    #[test]
    fn toggles_description_and_quits() {
        let mut app = app();
        app.handle_key(KeyCode::Char('d'));
        assert!(app.show_description);
        app.handle_key(KeyCode::Char('d'));
        assert!(!app.show_description);
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit);
    }
}
