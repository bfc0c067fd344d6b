use rust_decimal::Decimal;

use crate::error::ValuationError;

use super::{
    primitives::{AdvertiserPay, BidPrice},
    record::WinRateRecord,
};

/// Expected payoff of bidding `bid_price` for an advertiser paying `advertiser_pay`.
///
/// Derived per request and never stored back into the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Valuation {
    pub advertiser_pay: AdvertiserPay,
    pub bid_price: BidPrice,
    pub expected_payoff: Decimal,
}

impl Valuation {
    /// `(advertiser_pay - bid_price) * win_rate`, left unclamped so that bids above
    /// the advertiser pay come out negative.
    pub fn compute(
        advertiser_pay: AdvertiserPay,
        record: &WinRateRecord,
    ) -> Result<Self, ValuationError> {
        let overflow = || ValuationError::Overflow {
            bid_price: record.bid_price.as_decimal(),
        };

        let net_revenue = advertiser_pay
            .as_decimal()
            .checked_sub(record.bid_price.as_decimal())
            .ok_or_else(overflow)?;
        let expected_payoff = net_revenue
            .checked_mul(record.win_rate.as_decimal())
            .ok_or_else(overflow)?;

        Ok(Self {
            advertiser_pay,
            bid_price: record.bid_price,
            expected_payoff,
        })
    }
}
