use rust_decimal::Decimal;

use super::primitives::{BidPrice, WinRate};

/// One row of the historical win-rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinRateRecord {
    pub bid_price: BidPrice,
    pub win_rate: WinRate,
}

impl WinRateRecord {
    pub fn new(bid_price: Decimal, win_rate: Decimal) -> Self {
        Self {
            bid_price: BidPrice::new(bid_price),
            win_rate: WinRate::new(win_rate),
        }
    }
}
