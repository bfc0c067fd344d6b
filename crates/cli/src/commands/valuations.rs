use std::fmt::Write;

use optibid_core::{AdvertiserPay, BidValuator, ValuationError, select_optimal_bid};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::format::format_currency;

/// Every valuation for one advertiser pay, with the optimal row marked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationReport {
    pub advertiser_pay: Decimal,
    pub optimal_bid_price: Decimal,
    pub rows: Vec<ValuationRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationRow {
    pub bid_price: Decimal,
    pub expected_payoff: Decimal,
    pub optimal: bool,
}

pub fn valuations(
    valuator: &BidValuator,
    advertiser_pay: Option<Decimal>,
) -> Result<ValuationReport, ValuationError> {
    let valuations = valuator.valuations(advertiser_pay.map(AdvertiserPay::new))?;
    let optimal = select_optimal_bid(&valuations)?;

    let rows = valuations
        .iter()
        .map(|valuation| ValuationRow {
            bid_price: valuation.bid_price.as_decimal(),
            expected_payoff: valuation.expected_payoff,
            optimal: valuation.bid_price == optimal.bid_price,
        })
        .collect();

    Ok(ValuationReport {
        advertiser_pay: optimal.advertiser_pay.as_decimal(),
        optimal_bid_price: optimal.bid_price.as_decimal(),
        rows,
    })
}

impl ValuationReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Expected payoff per bid price at {} advertiser pay",
            format_currency(self.advertiser_pay)
        );
        let _ = writeln!(out, "{:>12}  {:>16}", "bid price", "expected payoff");
        for row in &self.rows {
            let marker = if row.optimal { "  <- optimal" } else { "" };
            let _ = writeln!(
                out,
                "{:>12}  {:>16}{marker}",
                format_currency(row.bid_price),
                row.expected_payoff
            );
        }
        out
    }
}
