use optibid_core::{AdvertiserPay, BidValuator, OptimalBid, ValuationError};
use rust_decimal::Decimal;
use tracing::{debug, warn};

pub fn optimal(
    valuator: &BidValuator,
    advertiser_pay: Option<Decimal>,
) -> Result<OptimalBid, ValuationError> {
    match valuator.get_optimal_bid(advertiser_pay.map(AdvertiserPay::new)) {
        Ok(optimal) => {
            debug!(
                advertiser_pay = %optimal.advertiser_pay,
                bid_price = %optimal.bid_price,
                expected_payoff = %optimal.expected_payoff,
                "selected optimal bid"
            );
            Ok(optimal)
        }
        Err(err) => {
            warn!(error = %err, "optimal bid request rejected");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use optibid_core::{BidPrice, WinRateRecord, WinRateTable};

    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn forwards_pay_to_the_valuator() {
        let valuator = BidValuator::new(
            WinRateTable::new(vec![
                WinRateRecord::new(d("0.1"), d("0.30")),
                WinRateRecord::new(d("0.5"), d("0.45")),
            ])
            .unwrap(),
        );

        let optimal = optimal(&valuator, Some(d("0.3"))).unwrap();
        assert_eq!(optimal.bid_price, BidPrice::new(d("0.1")));
        assert_eq!(optimal.expected_payoff, d("0.06"));

        assert_eq!(
            super::optimal(&valuator, None),
            Err(ValuationError::MissingInput)
        );
    }
}
