use std::cmp::Ordering;

use crate::{
    error::ValuationError,
    types::{primitives::AdvertiserPay, table::WinRateTable, valuation::Valuation},
    validation,
};

use super::result::OptimalBid;

/// Values every record of `table` for `advertiser_pay`, in table order.
pub fn compute_valuations(
    table: &WinRateTable,
    advertiser_pay: Option<AdvertiserPay>,
) -> Result<Vec<Valuation>, ValuationError> {
    let advertiser_pay = validation::require_advertiser_pay(advertiser_pay)?;

    if table.is_empty() {
        return Err(ValuationError::EmptyDataset);
    }

    table
        .iter()
        .map(|record| Valuation::compute(advertiser_pay, record))
        .collect()
}

/// Picks the valuation with the highest expected payoff.
///
/// Ties go to the lowest bid price, whatever order the valuations come in.
pub fn select_optimal_bid(valuations: &[Valuation]) -> Result<OptimalBid, ValuationError> {
    let (first, rest) = valuations
        .split_first()
        .ok_or(ValuationError::EmptyValuationSet)?;

    let best = rest.iter().fold(first, |best, candidate| {
        match candidate.expected_payoff.cmp(&best.expected_payoff) {
            Ordering::Greater => candidate,
            Ordering::Equal if candidate.bid_price < best.bid_price => candidate,
            Ordering::Equal | Ordering::Less => best,
        }
    });

    Ok(OptimalBid::from(best))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::{primitives::BidPrice, record::WinRateRecord};

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn pay(s: &str) -> Option<AdvertiserPay> {
        Some(AdvertiserPay::new(d(s)))
    }

    fn table(rows: &[(&str, &str)]) -> WinRateTable {
        WinRateTable::new(
            rows.iter()
                .map(|(price, rate)| WinRateRecord::new(d(price), d(rate)))
                .collect(),
        )
        .unwrap()
    }

    fn payoffs(valuations: &[Valuation]) -> Vec<Decimal> {
        valuations.iter().map(|v| v.expected_payoff).collect()
    }

    #[test]
    fn picks_middle_bid_when_it_pays_best() {
        let table = table(&[("0.1", "0.30"), ("0.5", "0.45"), ("1.0", "0.60")]);

        let valuations = compute_valuations(&table, pay("2.0")).unwrap();
        assert_eq!(payoffs(&valuations), vec![d("0.57"), d("0.675"), d("0.60")]);

        let optimal = select_optimal_bid(&valuations).unwrap();
        assert_eq!(optimal.bid_price, BidPrice::new(d("0.5")));
        assert_eq!(optimal.expected_payoff, d("0.675"));
    }

    #[test]
    fn low_pay_avoids_bids_above_it() {
        let table = table(&[("0.1", "0.30"), ("0.5", "0.45")]);

        let valuations = compute_valuations(&table, pay("0.3")).unwrap();
        assert_eq!(payoffs(&valuations), vec![d("0.06"), d("-0.09")]);

        let optimal = select_optimal_bid(&valuations).unwrap();
        assert_eq!(optimal.bid_price, BidPrice::new(d("0.1")));
    }

    #[test]
    fn missing_pay_fails_before_looking_at_table() {
        assert_eq!(
            compute_valuations(&WinRateTable::empty(), None),
            Err(ValuationError::MissingInput)
        );
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(
            compute_valuations(&WinRateTable::empty(), pay("1")),
            Err(ValuationError::EmptyDataset)
        );
    }

    #[test]
    fn empty_valuations_are_rejected() {
        assert_eq!(
            select_optimal_bid(&[]),
            Err(ValuationError::EmptyValuationSet)
        );
    }

    #[test]
    fn single_record_wins_even_when_negative() {
        let table = table(&[("5.0", "0.9")]);

        let valuations = compute_valuations(&table, pay("1.0")).unwrap();
        assert!(valuations[0].expected_payoff < Decimal::ZERO);

        let optimal = select_optimal_bid(&valuations).unwrap();
        assert_eq!(optimal.bid_price, BidPrice::new(d("5.0")));
    }

    #[test]
    fn ties_go_to_lowest_bid_price() {
        // (2 - 1) * 0.6 == (2 - 0.5) * 0.4 == 0.6
        let forward = table(&[("0.5", "0.4"), ("1.0", "0.6"), ("1.5", "0.1")]);
        let reversed = table(&[("1.5", "0.1"), ("1.0", "0.6"), ("0.5", "0.4")]);

        for table in [forward, reversed] {
            let valuations = compute_valuations(&table, pay("2")).unwrap();
            let optimal = select_optimal_bid(&valuations).unwrap();
            assert_eq!(optimal.bid_price, BidPrice::new(d("0.5")));
            assert_eq!(optimal.expected_payoff, d("0.6"));
        }
    }
}
