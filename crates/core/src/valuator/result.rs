use rust_decimal::Decimal;

use crate::types::{
    primitives::{AdvertiserPay, BidPrice},
    valuation::Valuation,
};

/// The winning valuation of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimalBid {
    pub advertiser_pay: AdvertiserPay,
    pub bid_price: BidPrice,
    pub expected_payoff: Decimal,
}

impl From<&Valuation> for OptimalBid {
    fn from(valuation: &Valuation) -> Self {
        Self {
            advertiser_pay: valuation.advertiser_pay,
            bid_price: valuation.bid_price,
            expected_payoff: valuation.expected_payoff,
        }
    }
}
